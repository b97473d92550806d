//! Streak and completion analytics.
//!
//! Pure functions over a habit's entry history plus a caller-supplied
//! reference date. Nothing here reads the clock or touches storage, so every
//! computation is deterministic and safe to run on independent histories from
//! multiple threads.

use std::collections::HashSet;

use chrono::{Duration, NaiveDate};

use crate::error::TallyError;
use crate::habits::HabitEntry;

/// Count consecutive completed days ending at `today`.
///
/// Walks backward from `today` over the history sorted by date descending.
/// The streak grows only while each encountered entry matches the cursor date
/// exactly and is completed; any other relation — an earlier date (a gap), a
/// later date, or an entry for the cursor day that is not completed — ends
/// the walk with the count accumulated so far.
///
/// A day with no entry and a day with an incomplete entry both break the
/// streak; in particular the result is 0 whenever `today` itself has no
/// completed entry.
#[must_use]
pub fn current_streak(entries: &[HabitEntry], today: NaiveDate) -> usize {
    let mut sorted: Vec<&HabitEntry> = entries.iter().collect();
    sorted.sort_by(|a, b| b.date.cmp(&a.date));

    let mut streak = 0;
    let mut cursor = today;

    for entry in sorted {
        if entry.date == cursor && entry.completed {
            streak += 1;
            cursor -= Duration::days(1);
        } else {
            break;
        }
    }

    streak
}

/// Find the longest run of contiguous completed days in the entire history.
///
/// Entries are scanned in ascending date order. A completed entry extends the
/// running streak when the previous completed entry was exactly one day
/// earlier, and restarts it at 1 otherwise; an incomplete entry resets the
/// counter and clears the previous-date reference, so gaps and explicit
/// misses break contiguity identically.
#[must_use]
pub fn best_streak(entries: &[HabitEntry]) -> usize {
    let mut sorted: Vec<&HabitEntry> = entries.iter().collect();
    sorted.sort_by_key(|e| e.date);

    let mut best = 0;
    let mut run = 0;
    let mut prev_date: Option<NaiveDate> = None;

    for entry in sorted {
        if entry.completed {
            if prev_date.is_none_or(|prev| (entry.date - prev).num_days() == 1) {
                run += 1;
            } else {
                run = 1;
            }
            best = best.max(run);
            prev_date = Some(entry.date);
        } else {
            run = 0;
            prev_date = None;
        }
    }

    best
}

/// Percentage of the trailing `days`-day window with a completed entry.
///
/// Counts completed entries dated on or after `today - days` and divides by
/// `days`. The window test has no upper bound, and the cutoff day itself is
/// inside the window, so a dense history can push the result past 100.
///
/// `days == 0` yields 0 rather than dividing by zero.
///
/// # Errors
///
/// Returns `TallyError::InvalidParameter` if `days` is negative.
pub fn completion_rate(
    entries: &[HabitEntry],
    days: i64,
    today: NaiveDate,
) -> Result<f64, TallyError> {
    if days < 0 {
        return Err(TallyError::InvalidParameter(format!(
            "completion-rate window must not be negative (got {days})"
        )));
    }
    if days == 0 {
        return Ok(0.0);
    }

    let cutoff = today - Duration::days(days);
    let completed = entries
        .iter()
        .filter(|e| e.date >= cutoff && e.completed)
        .count();

    #[allow(clippy::cast_precision_loss)]
    let rate = completed as f64 / days as f64 * 100.0;
    Ok(rate)
}

/// Build a dense per-day completion grid for the trailing window.
///
/// Produces exactly one record per calendar day from
/// `today - (window_days - 1)` through `today`, in ascending order. A day is
/// marked completed when any entry for that date is completed; days with no
/// entry (or only incomplete entries) are present with `completed == false`.
/// The raw history may be sparse; visualization needs the gap-filled grid.
///
/// # Errors
///
/// Returns `TallyError::InvalidParameter` if `window_days` is not positive.
pub fn heatmap_window(
    entries: &[HabitEntry],
    window_days: i64,
    today: NaiveDate,
) -> Result<Vec<HabitEntry>, TallyError> {
    if window_days <= 0 {
        return Err(TallyError::InvalidParameter(format!(
            "heatmap window must be positive (got {window_days})"
        )));
    }

    let completed_days: HashSet<NaiveDate> = entries
        .iter()
        .filter(|e| e.completed)
        .map(|e| e.date)
        .collect();

    #[allow(clippy::cast_sign_loss, clippy::cast_possible_truncation)]
    let mut window = Vec::with_capacity(window_days as usize);
    let mut cursor = today - Duration::days(window_days - 1);

    while cursor <= today {
        window.push(HabitEntry::new(cursor, completed_days.contains(&cursor)));
        cursor += Duration::days(1);
    }

    Ok(window)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn completed_run(from: NaiveDate, days: u32) -> Vec<HabitEntry> {
        (0..days)
            .map(|i| HabitEntry::new(from + Duration::days(i64::from(i)), true))
            .collect()
    }

    #[test]
    fn test_current_streak_contiguous_run() {
        // Jan 1-5 all completed, asked on Jan 5.
        let entries = completed_run(date(2024, 1, 1), 5);
        assert_eq!(current_streak(&entries, date(2024, 1, 5)), 5);
    }

    #[test]
    fn test_current_streak_broken_by_incomplete_day() {
        // Jan 3 is recorded but not completed: streak is Jan 4-5 only.
        let mut entries = completed_run(date(2024, 1, 1), 5);
        entries[2].completed = false;
        assert_eq!(current_streak(&entries, date(2024, 1, 5)), 2);
    }

    #[test]
    fn test_current_streak_broken_by_missing_day() {
        let entries = vec![
            HabitEntry::new(date(2024, 1, 1), true),
            HabitEntry::new(date(2024, 1, 2), true),
            // Jan 3 missing entirely
            HabitEntry::new(date(2024, 1, 4), true),
            HabitEntry::new(date(2024, 1, 5), true),
        ];
        assert_eq!(current_streak(&entries, date(2024, 1, 5)), 2);
    }

    #[test]
    fn test_current_streak_zero_without_today() {
        // History ends yesterday; today has no entry.
        let entries = completed_run(date(2024, 1, 1), 4);
        assert_eq!(current_streak(&entries, date(2024, 1, 5)), 0);
    }

    #[test]
    fn test_current_streak_zero_when_today_incomplete() {
        let mut entries = completed_run(date(2024, 1, 1), 5);
        entries[4].completed = false;
        assert_eq!(current_streak(&entries, date(2024, 1, 5)), 0);
    }

    #[test]
    fn test_current_streak_future_entry_terminates_scan() {
        // An entry dated after `today` sorts first and is not an exact
        // cursor match, so the walk stops immediately.
        let mut entries = completed_run(date(2024, 1, 1), 5);
        entries.push(HabitEntry::new(date(2024, 1, 6), true));
        assert_eq!(current_streak(&entries, date(2024, 1, 5)), 0);
    }

    #[test]
    fn test_current_streak_empty_history() {
        assert_eq!(current_streak(&[], date(2024, 1, 5)), 0);
    }

    #[test]
    fn test_current_streak_bounded_by_completed_count() {
        let mut entries = completed_run(date(2024, 1, 1), 5);
        entries[0].completed = false;
        let total_completed = entries.iter().filter(|e| e.completed).count();
        assert!(current_streak(&entries, date(2024, 1, 5)) <= total_completed);
    }

    #[test]
    fn test_best_streak_single_run() {
        let entries = completed_run(date(2024, 1, 1), 5);
        assert_eq!(best_streak(&entries), 5);
    }

    #[test]
    fn test_best_streak_incomplete_day_splits_runs() {
        // Jan 1-2 and Jan 4-5 completed, Jan 3 recorded incomplete: two runs
        // of length 2.
        let mut entries = completed_run(date(2024, 1, 1), 5);
        entries[2].completed = false;
        assert_eq!(best_streak(&entries), 2);
    }

    #[test]
    fn test_best_streak_gap_splits_runs() {
        let mut entries = completed_run(date(2024, 1, 1), 3);
        entries.extend(completed_run(date(2024, 1, 10), 2));
        assert_eq!(best_streak(&entries), 3);
    }

    #[test]
    fn test_best_streak_unsorted_input() {
        let mut entries = completed_run(date(2024, 1, 1), 4);
        entries.reverse();
        assert_eq!(best_streak(&entries), 4);
    }

    #[test]
    fn test_best_streak_empty_history() {
        assert_eq!(best_streak(&[]), 0);
    }

    #[test]
    fn test_best_streak_at_least_current_streak() {
        let mut entries = completed_run(date(2024, 1, 1), 8);
        entries[3].completed = false;
        let today = date(2024, 1, 8);
        assert!(best_streak(&entries) >= current_streak(&entries, today));
    }

    #[test]
    fn test_completion_rate_full_window() {
        // Ten completed days, all on or after the cutoff for a 10-day
        // window ending Jan 30.
        let entries = completed_run(date(2024, 1, 21), 10);
        let rate = completion_rate(&entries, 10, date(2024, 1, 30)).unwrap();
        assert!((rate - 100.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_completion_rate_inclusive_cutoff_exceeds_hundred() {
        // A fully-completed month against a 10-day window: the cutoff day
        // itself counts, so 11 entries land inside the window.
        let entries = completed_run(date(2024, 1, 1), 30);
        let rate = completion_rate(&entries, 10, date(2024, 1, 30)).unwrap();
        assert!((rate - 110.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_completion_rate_counts_future_entries() {
        // No upper bound on the window: entries after `today` still count.
        let entries = vec![HabitEntry::new(date(2024, 2, 1), true)];
        let rate = completion_rate(&entries, 30, date(2024, 1, 15)).unwrap();
        assert!(rate > 0.0);
    }

    #[test]
    fn test_completion_rate_ignores_incomplete_entries() {
        let entries = vec![
            HabitEntry::new(date(2024, 1, 14), false),
            HabitEntry::new(date(2024, 1, 15), true),
        ];
        let rate = completion_rate(&entries, 10, date(2024, 1, 15)).unwrap();
        assert!((rate - 10.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_completion_rate_zero_days_guard() {
        let entries = completed_run(date(2024, 1, 1), 5);
        let rate = completion_rate(&entries, 0, date(2024, 1, 5)).unwrap();
        assert!((rate - 0.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_completion_rate_negative_days_rejected() {
        let result = completion_rate(&[], -1, date(2024, 1, 5));
        assert!(matches!(result, Err(TallyError::InvalidParameter(_))));
    }

    #[test]
    fn test_completion_rate_monotonic_in_completions() {
        let today = date(2024, 1, 30);
        let mut entries = Vec::new();
        let mut last_rate = 0.0;

        for i in 0..10 {
            entries.push(HabitEntry::new(today - Duration::days(i), true));
            let rate = completion_rate(&entries, 30, today).unwrap();
            assert!(rate >= last_rate);
            last_rate = rate;
        }
    }

    #[test]
    fn test_heatmap_window_dense_and_ordered() {
        let entries = vec![
            HabitEntry::new(date(2024, 1, 3), true),
            HabitEntry::new(date(2024, 1, 6), true),
        ];
        let window = heatmap_window(&entries, 7, date(2024, 1, 7)).unwrap();

        assert_eq!(window.len(), 7);
        assert_eq!(window[0].date, date(2024, 1, 1));
        assert_eq!(window[6].date, date(2024, 1, 7));
        for pair in window.windows(2) {
            assert_eq!((pair[1].date - pair[0].date).num_days(), 1);
        }

        let completed: Vec<NaiveDate> = window
            .iter()
            .filter(|d| d.completed)
            .map(|d| d.date)
            .collect();
        assert_eq!(completed, vec![date(2024, 1, 3), date(2024, 1, 6)]);
    }

    #[test]
    fn test_heatmap_window_empty_history() {
        let window = heatmap_window(&[], 7, date(2024, 1, 7)).unwrap();
        assert_eq!(window.len(), 7);
        assert!(window.iter().all(|d| !d.completed));
    }

    #[test]
    fn test_heatmap_window_incomplete_entry_is_unmarked() {
        let entries = vec![HabitEntry::new(date(2024, 1, 5), false)];
        let window = heatmap_window(&entries, 7, date(2024, 1, 7)).unwrap();
        assert!(window.iter().all(|d| !d.completed));
    }

    #[test]
    fn test_heatmap_window_rejects_non_positive() {
        assert!(matches!(
            heatmap_window(&[], 0, date(2024, 1, 7)),
            Err(TallyError::InvalidParameter(_))
        ));
        assert!(matches!(
            heatmap_window(&[], -5, date(2024, 1, 7)),
            Err(TallyError::InvalidParameter(_))
        ));
    }

    #[test]
    fn test_heatmap_round_trip_preserves_streaks() {
        // Recomputing streaks from the densified window (dropping unmarked
        // days) matches computing over the sparse history restricted to the
        // same window.
        let today = date(2024, 1, 10);
        let mut entries = completed_run(date(2024, 1, 4), 3);
        entries.extend(completed_run(date(2024, 1, 9), 2));

        let window = heatmap_window(&entries, 10, today).unwrap();
        let sparse_again: Vec<HabitEntry> =
            window.into_iter().filter(|d| d.completed).collect();

        assert_eq!(
            current_streak(&sparse_again, today),
            current_streak(&entries, today)
        );
        assert_eq!(best_streak(&sparse_again), best_streak(&entries));
    }
}
