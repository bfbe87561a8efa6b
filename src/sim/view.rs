//! Views for a run: the statistics block and the draw log panel.

use super::format::{format_duration, format_money};
use super::stats::Statistics;
use crate::render::{Line, Span, Theme};
use crate::widget::{ScrollBuffer, WINNING_MARKER};

/// Rule between the configured and the measured statistics.
const RULE: &str = "--------------------";

fn stat(theme: &Theme, label: &str, value: String) -> Line {
    Line::from_spans(vec![
        Span::styled(format!("{label}: "), theme.stat_label),
        Span::styled(value, theme.stat_value),
    ])
}

/// Lines of the statistics block.
pub fn statistics_lines(stats: &Statistics, theme: &Theme) -> Vec<Line> {
    let status = if stats.running {
        Span::styled("Running", theme.stat_value)
    } else {
        Span::styled("Winner found!", theme.winning)
    };

    vec![
        stat(theme, "Chances", format!("1/{}", stats.chances)),
        stat(theme, "Interval", format_duration(stats.interval)),
        stat(theme, "Cost", stats.cost_per_ticket.to_string()),
        stat(theme, "Time to match odds", format_duration(stats.time_to_cover_odds)),
        stat(theme, "Cost to match odds", format_money(stats.estimated_cost)),
        Line::styled(RULE, theme.rule),
        stat(theme, "Execution time", format_duration(stats.elapsed)),
        stat(theme, "Tickets", stats.ticket_count.to_string()),
        stat(theme, "Total cost", format_money(stats.total_cost)),
        Line::empty(),
        Line::from_spans(vec![Span::styled("Status: ", theme.stat_label), status]),
    ]
}

/// The most recent log lines that fit in `height` rows, honoring the
/// buffer's scroll position.
pub fn log_lines(log: &ScrollBuffer, height: usize, theme: &Theme) -> Vec<Line> {
    log.visible_lines(height)
        .map(|entry| {
            let mut spans = vec![
                Span::styled(entry.ticket.clone(), theme.log_ticket),
                Span::styled(entry.number.clone(), theme.log_draw),
            ];
            if entry.winning {
                spans.push(Span::styled(WINNING_MARKER, theme.winning));
            }
            Line::from_spans(spans)
        })
        .collect()
}
