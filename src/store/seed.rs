use chrono::{DateTime, Duration, Utc};

use crate::domain::{Event, Metric};

// ─── Constants ───────────────────────────────────────────────────

/// Number of daily data points in the seeded series.
pub const SEED_DAYS: usize = 7;

const SHEET: &str = "health";
const SERIES: &str = "vitality index";

/// Base OHLC values for day 0; each following day adds 1 to every field.
const BASE_OPEN: f64 = 70.0;
const BASE_HIGH: f64 = 72.0;
const BASE_LOW: f64 = 68.0;
const BASE_CLOSE: f64 = 71.0;

// ─── Seed sets ───────────────────────────────────────────────────

/// Two journal entries a few hours before `now`, oldest first.
pub fn events(now: DateTime<Utc>) -> Vec<Event> {
    vec![
        Event {
            id: uuid::Uuid::new_v4().to_string(),
            title: "Morning run + cold shower".into(),
            content: "5km easy run, 3 minutes of cold shower, focus maxed out.".into(),
            mood: "Focused".into(),
            tags: vec!["health".into(), "morning routine".into()],
            media_refs: vec!["file:///Users/me/fitness/2024-05-12-run.gpx".into()],
            occurred_at: now - Duration::hours(6),
        },
        Event {
            id: uuid::Uuid::new_v4().to_string(),
            title: "Midday review".into(),
            content: "Went over two losing trades with the coach, tightened exit rules.".into(),
            mood: "Calm".into(),
            tags: vec!["finance".into(), "review".into()],
            media_refs: vec!["file:///Users/me/memos/2024-05-12-notes.md".into()],
            occurred_at: now - Duration::hours(2),
        },
    ]
}

/// One point per day ending at `now`, stored in ascending date order.
pub fn metrics(now: DateTime<Utc>) -> Vec<Metric> {
    let base = now - Duration::days(SEED_DAYS as i64 - 1);

    (0..SEED_DAYS)
        .map(|i| {
            let step = i as f64;
            Metric {
                id: uuid::Uuid::new_v4().to_string(),
                sheet: SHEET.into(),
                name: SERIES.into(),
                date: base + Duration::days(i as i64),
                open: BASE_OPEN + step,
                high: BASE_HIGH + step,
                low: BASE_LOW + step,
                close: BASE_CLOSE + step,
                events: Vec::new(),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn metric_series_is_daily_and_ascending() {
        let now = Utc::now();
        let series = metrics(now);

        assert_eq!(series.len(), SEED_DAYS);
        assert_eq!(series.last().unwrap().date, now);
        for pair in series.windows(2) {
            assert_eq!(pair[1].date - pair[0].date, Duration::days(1));
            assert_eq!(pair[1].open - pair[0].open, 1.0);
        }
        assert_eq!(series[0].open, 70.0);
        assert_eq!(series[0].close, 71.0);
    }

    #[test]
    fn seeded_events_predate_now() {
        let now = Utc::now();
        let seeded = events(now);
        assert_eq!(seeded.len(), 2);
        assert!(seeded.iter().all(|e| e.occurred_at < now));
        assert_ne!(seeded[0].id, seeded[1].id);
    }
}
