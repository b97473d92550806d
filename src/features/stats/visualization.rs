//! Terminal visualization for habit statistics.
//!
//! Provides ASCII charts and the calendar heatmap grid.

use chrono::Datelike;

use crate::habits::HabitEntry;

/// Characters for bar chart rendering.
const BAR_CHARS: [char; 8] = [' ', '▁', '▂', '▃', '▄', '▅', '▆', '▇'];
const FULL_BLOCK: char = '█';

/// Render a sparkline (compact inline chart).
#[must_use]
pub fn render_sparkline(values: &[usize]) -> String {
    if values.is_empty() {
        return String::new();
    }

    let max_value = *values.iter().max().unwrap_or(&1);
    let max_value = max_value.max(1);

    values
        .iter()
        .map(|&v| {
            #[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation, clippy::cast_sign_loss)]
            let normalized = (v as f64 / max_value as f64 * 7.0) as usize;
            if v == 0 {
                BAR_CHARS[0]
            } else {
                BAR_CHARS[normalized.min(7)]
            }
        })
        .collect()
}

/// Render a horizontal bar chart from (label, value) pairs.
#[must_use]
pub fn render_bar_chart(
    data: &[(String, usize)],
    max_label_width: usize,
    bar_width: usize,
) -> String {
    if data.is_empty() {
        return String::new();
    }

    let max_value = data.iter().map(|(_, v)| *v).max().unwrap_or(1).max(1);
    let mut lines = Vec::new();

    for (label, value) in data {
        let truncated_label = if label.len() > max_label_width {
            format!("{}...", &label[..max_label_width - 3])
        } else {
            format!("{label:max_label_width$}")
        };

        #[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let bar_length = (*value as f64 / max_value as f64 * bar_width as f64) as usize;
        let bar = FULL_BLOCK.to_string().repeat(bar_length);
        let padding = " ".repeat(bar_width - bar_length);

        lines.push(format!("{truncated_label} |{bar}{padding} {value}"));
    }

    lines.join("\n")
}

/// Render a simple progress bar.
#[must_use]
pub fn render_progress_bar(current: usize, total: usize, width: usize) -> String {
    let total = total.max(1);
    #[allow(clippy::cast_precision_loss)]
    let progress = (current as f64 / total as f64).min(1.0);
    #[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let filled = (progress * width as f64) as usize;
    let empty = width - filled;

    let bar = format!(
        "[{}{}]",
        FULL_BLOCK.to_string().repeat(filled),
        "░".repeat(empty)
    );

    format!("{} {:.0}%", bar, progress * 100.0)
}

/// Render a calendar heatmap from a dense per-day window.
///
/// Expects the gap-filled grid produced by `heatmap_window`: one record per
/// contiguous calendar day, ascending. Rows are weekdays (Mon-Sun), columns
/// are weeks; cells before the window starts are left blank.
#[must_use]
pub fn render_calendar_heatmap(window: &[HabitEntry]) -> String {
    if window.is_empty() {
        return String::new();
    }

    let day_labels = ["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"];
    let lead = window[0].date.weekday().num_days_from_monday() as usize;
    let total_slots = lead + window.len();
    let weeks = total_slots.div_ceil(7);

    let mut lines = Vec::with_capacity(9);

    for (day_idx, label) in day_labels.iter().enumerate() {
        let mut row = format!("{label} ");

        for week in 0..weeks {
            let slot = week * 7 + day_idx;
            if slot < lead || slot - lead >= window.len() {
                row.push_str("  ");
                continue;
            }

            let cell = &window[slot - lead];
            row.push_str(if cell.completed { " █" } else { " ·" });
        }

        lines.push(row);
    }

    lines.push(String::new());
    lines.push("Legend: · = missed  █ = done".to_string());

    lines.join("\n")
}
