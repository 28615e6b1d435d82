//! Incremental-polling ("ticker") windowing.
//!
//! Stateless: every function derives its answer from the `(id, recorded_at)`
//! entries the caller read from the track repository, so each poll observes a
//! single storage snapshot. The track set is totally ordered by
//! `(recorded_at, id)`; the id tie-break keeps paging deterministic when
//! several tracks share a flight date.

use serde::Serialize;

use crate::types::{DbId, Timestamp};

/// Page size used when a client does not ask for an explicit limit.
pub const DEFAULT_PAGE_SIZE: i64 = 5;

/// Upper bound on client-requested page sizes.
pub const MAX_PAGE_SIZE: i64 = 50;

/// The projection of a track that windowing needs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TickerEntry {
    pub id: DbId,
    pub recorded_at: Timestamp,
}

/// A computed ticker window.
///
/// `None` timestamps mean "no such track": empty store, or nothing newer
/// than the cursor. The HTTP boundary serializes them as `null`, so "no
/// tracks yet" is never conflated with a real flight date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TickerWindow {
    pub latest: Option<Timestamp>,
    pub oldest: Option<Timestamp>,
    pub oldest_newer: Option<Timestamp>,
    pub ids: Vec<DbId>,
}

/// Maximum `recorded_at` over all tracks.
pub fn latest_timestamp(entries: &[TickerEntry]) -> Option<Timestamp> {
    entries.iter().map(|e| e.recorded_at).max()
}

/// Minimum `recorded_at` over all tracks.
pub fn oldest_timestamp(entries: &[TickerEntry]) -> Option<Timestamp> {
    entries.iter().map(|e| e.recorded_at).min()
}

/// Earliest `recorded_at` strictly greater than `cursor`, i.e. the first
/// track the client has not yet seen. `None` means nothing new.
pub fn oldest_newer_timestamp(entries: &[TickerEntry], cursor: Timestamp) -> Option<Timestamp> {
    entries
        .iter()
        .map(|e| e.recorded_at)
        .filter(|ts| *ts > cursor)
        .min()
}

/// Compose the three timestamp queries and page identifiers for incremental
/// sync.
///
/// The identifier page holds up to `limit` ids of tracks with
/// `recorded_at >= oldest_newer`, in `(recorded_at, id)` order. A `limit` of
/// zero returns timestamps only. A `None` cursor means the client has seen
/// nothing yet, so paging starts at the oldest track.
pub fn window(entries: &[TickerEntry], cursor: Option<Timestamp>, limit: usize) -> TickerWindow {
    let latest = latest_timestamp(entries);
    let oldest = oldest_timestamp(entries);
    let oldest_newer = match cursor {
        Some(cursor) => oldest_newer_timestamp(entries, cursor),
        None => oldest,
    };

    let ids = match oldest_newer {
        Some(start) if limit > 0 => {
            let mut unseen: Vec<&TickerEntry> =
                entries.iter().filter(|e| e.recorded_at >= start).collect();
            unseen.sort_by_key(|e| (e.recorded_at, e.id));
            unseen.into_iter().take(limit).map(|e| e.id).collect()
        }
        _ => Vec::new(),
    };

    TickerWindow {
        latest,
        oldest,
        oldest_newer,
        ids,
    }
}

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};

    use super::*;

    fn ts(y: i32, m: u32, d: u32) -> Timestamp {
        Utc.with_ymd_and_hms(y, m, d, 12, 32, 1).unwrap()
    }

    fn entry(id: DbId, recorded_at: Timestamp) -> TickerEntry {
        TickerEntry { id, recorded_at }
    }

    // -- latest / oldest -----------------------------------------------------

    #[test]
    fn latest_picks_maximum_recorded_at() {
        let now = Utc::now();
        let entries = [
            entry(1, ts(2018, 4, 25)),
            entry(2, now),
            entry(3, ts(2019, 4, 25)),
        ];
        assert_eq!(latest_timestamp(&entries), Some(now));
    }

    #[test]
    fn oldest_picks_minimum_recorded_at() {
        let entries = [
            entry(1, ts(2018, 4, 25)),
            entry(2, Utc::now()),
            entry(3, ts(2019, 4, 25)),
        ];
        assert_eq!(oldest_timestamp(&entries), Some(ts(2018, 4, 25)));
    }

    #[test]
    fn latest_never_precedes_oldest() {
        let entries = [
            entry(1, ts(2018, 4, 25)),
            entry(2, ts(2018, 4, 26)),
            entry(3, ts(2019, 4, 25)),
        ];
        assert!(latest_timestamp(&entries) >= oldest_timestamp(&entries));
    }

    #[test]
    fn empty_store_yields_no_timestamps() {
        assert_eq!(latest_timestamp(&[]), None);
        assert_eq!(oldest_timestamp(&[]), None);
        assert_eq!(oldest_newer_timestamp(&[], Utc::now()), None);
    }

    // -- oldest_newer --------------------------------------------------------

    #[test]
    fn oldest_newer_skips_tracks_at_or_before_cursor() {
        let entries = [
            entry(1, ts(2018, 4, 25)),
            entry(2, ts(2018, 4, 26)),
            entry(3, ts(2019, 4, 25)),
        ];
        // Cursor falls between the first and second track.
        let cursor = Utc.with_ymd_and_hms(2018, 4, 25, 12, 34, 30).unwrap()
            + chrono::Duration::milliseconds(314);
        assert_eq!(
            oldest_newer_timestamp(&entries, cursor),
            Some(ts(2018, 4, 26))
        );
    }

    #[test]
    fn oldest_newer_is_strictly_greater_than_cursor() {
        let entries = [entry(1, ts(2018, 4, 25))];
        // A cursor exactly at the only track means nothing new.
        assert_eq!(oldest_newer_timestamp(&entries, ts(2018, 4, 25)), None);
    }

    #[test]
    fn oldest_newer_none_when_cursor_past_everything() {
        let entries = [entry(1, ts(2018, 4, 25)), entry(2, ts(2019, 4, 25))];
        assert_eq!(oldest_newer_timestamp(&entries, ts(2020, 1, 1)), None);
    }

    // -- window --------------------------------------------------------------

    #[test]
    fn window_composes_all_three_timestamps() {
        let entries = [
            entry(1, ts(2018, 4, 25)),
            entry(2, ts(2018, 4, 26)),
            entry(3, ts(2019, 4, 25)),
        ];
        let w = window(&entries, Some(ts(2018, 4, 25)), 10);
        assert_eq!(w.latest, Some(ts(2019, 4, 25)));
        assert_eq!(w.oldest, Some(ts(2018, 4, 25)));
        assert_eq!(w.oldest_newer, Some(ts(2018, 4, 26)));
        assert_eq!(w.ids, vec![2, 3]);
    }

    #[test]
    fn window_without_cursor_starts_at_oldest() {
        let entries = [
            entry(3, ts(2019, 4, 25)),
            entry(1, ts(2018, 4, 25)),
            entry(2, ts(2018, 4, 26)),
        ];
        let w = window(&entries, None, 10);
        assert_eq!(w.oldest_newer, w.oldest);
        assert_eq!(w.ids, vec![1, 2, 3]);
    }

    #[test]
    fn window_respects_limit() {
        let entries: Vec<TickerEntry> = (1..=8)
            .map(|i| entry(i, ts(2018, 4, 20) + chrono::Duration::days(i)))
            .collect();
        let w = window(&entries, None, 5);
        assert_eq!(w.ids, vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn window_limit_zero_returns_timestamps_only() {
        let entries = [entry(1, ts(2018, 4, 25)), entry(2, ts(2019, 4, 25))];
        let w = window(&entries, None, 0);
        assert_eq!(w.latest, Some(ts(2019, 4, 25)));
        assert!(w.ids.is_empty());
    }

    #[test]
    fn window_breaks_recorded_at_ties_by_id() {
        let shared = ts(2018, 4, 25);
        let entries = [entry(7, shared), entry(2, shared), entry(5, shared)];
        let w = window(&entries, None, 10);
        assert_eq!(w.ids, vec![2, 5, 7]);
    }

    #[test]
    fn window_on_empty_store() {
        let w = window(&[], Some(ts(2018, 4, 25)), 5);
        assert_eq!(w.latest, None);
        assert_eq!(w.oldest, None);
        assert_eq!(w.oldest_newer, None);
        assert!(w.ids.is_empty());
    }

    #[test]
    fn window_nothing_newer_than_cursor() {
        let entries = [entry(1, ts(2018, 4, 25))];
        let w = window(&entries, Some(ts(2019, 1, 1)), 5);
        assert_eq!(w.latest, Some(ts(2018, 4, 25)));
        assert_eq!(w.oldest, Some(ts(2018, 4, 25)));
        assert_eq!(w.oldest_newer, None);
        assert!(w.ids.is_empty());
    }
}
