use std::io::IsTerminal;

use owo_colors::OwoColorize;
use terminal_size::{terminal_size, Width};

use crate::districts::DISTRICTS;
use crate::scoring::{ScoreTable, ScoredDistrict};

/// Check if stdout is a TTY (for auto-detecting color support)
pub fn should_use_colors() -> bool {
    std::io::stdout().is_terminal()
}

/// Format a score with two decimals, the scale notas are reported on.
pub fn format_score(score: f64) -> String {
    format!("{:.2}", score)
}

/// Get terminal width, defaulting to None for pipes (unlimited)
fn get_terminal_width() -> Option<usize> {
    terminal_size().map(|(Width(w), _)| w as usize)
}

/// Truncate a district name to fit available width, accounting for Unicode
fn truncate_name(name: &str, max_width: usize) -> String {
    let chars: Vec<char> = name.chars().collect();
    if chars.len() <= max_width {
        name.to_string()
    } else if max_width > 3 {
        format!("{}...", chars[..max_width - 3].iter().collect::<String>())
    } else {
        chars[..max_width].iter().collect()
    }
}

/// Format one domain's scores as a ranked table.
///
/// Rows are sorted by score descending (ties broken by district code), with
/// columns: rank, score, district name. The input table's row order is not
/// changed; sorting happens on a display copy.
pub fn format_score_table(table: &ScoreTable, use_colors: bool) -> String {
    if table.rows.is_empty() {
        return "No districts to score.".to_string();
    }

    let mut ranked: Vec<&ScoredDistrict> = table.rows.iter().collect();
    ranked.sort_by(|a, b| {
        b.score
            .partial_cmp(&a.score)
            .unwrap_or(std::cmp::Ordering::Equal)
            .then(a.code.cmp(&b.code))
    });

    // Rank column: 3 chars + dot. Score column: 6 chars fits "100.00".
    let rank_width = 3;
    let score_width = 6;
    let name_width = get_terminal_width()
        .map(|w| w.saturating_sub(rank_width + 1 + score_width + 4))
        .unwrap_or(usize::MAX)
        .max(8);

    let header = if use_colors {
        format!("{}", table.score_column.bold().underline())
    } else {
        table.score_column.clone()
    };

    let mut lines = vec![header];
    for (idx, district) in ranked.iter().enumerate() {
        let name = truncate_name(&district.name, name_width);
        // Pad before coloring: ANSI codes would throw the width off.
        let rank = format!("{:>rank_width$}.", idx + 1);
        let score = format!("{:>score_width$}", format_score(district.score));
        let line = if use_colors {
            format!("{}  {}  {}", rank, score.cyan(), name.bold())
        } else {
            format!("{}  {}  {}", rank, score, name)
        };
        lines.push(line);
    }
    lines.join("\n")
}

/// Format a single district with its per-indicator breakdown (verbose mode).
pub fn format_district_detail(district: &ScoredDistrict, use_colors: bool) -> String {
    let mut lines = if use_colors {
        vec![format!(
            "{} (distrito {})  nota {}",
            district.name.bold(),
            district.code,
            format_score(district.score).cyan()
        )]
    } else {
        vec![format!(
            "{} (distrito {})  nota {}",
            district.name,
            district.code,
            format_score(district.score)
        )]
    };
    for c in &district.breakdown {
        lines.push(format!(
            "  {}: weight {:.6} x norm {:.4} -> {:.4}",
            c.indicator, c.weight, c.normalized, c.weighted
        ));
    }
    lines.join("\n")
}

/// Format the static district lookup table, one `code  name` line each.
pub fn format_districts_list(use_colors: bool) -> String {
    DISTRICTS
        .iter()
        .map(|d| {
            if use_colors {
                format!("{:>2}  {}", d.code, d.name.bold())
            } else {
                format!("{:>2}  {}", d.code, d.name)
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}
