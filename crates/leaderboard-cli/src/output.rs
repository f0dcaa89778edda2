//! Terminal output formatting.

use colored::{ColoredString, Colorize};
use leaderboard_core::{ProbeReport, ScoreBoard};
use unicode_width::UnicodeWidthStr;

const NAME_WIDTH: usize = 24;

/// Print the board as a table, in display order.
pub fn print_board(board: &ScoreBoard) {
    let leader = board.teams().iter().map(|t| t.score).max();

    println!("{:<4} {:<4} {} {:>8}", "ID", "", pad_right("Team", NAME_WIDTH), "Score");
    println!("{}", "─".repeat(44));

    for team in board.teams() {
        let name = pad_right(&truncate_visual(&team.name, NAME_WIDTH), NAME_WIDTH);
        let score = format!("{:>8}", team.score);
        let score = if Some(team.score) == leader && team.score > 0 {
            score.yellow().bold()
        } else {
            score.normal()
        };
        println!(
            "{:<4} {} {} {} {}",
            team.id,
            pad_right(&team.emoji, 2),
            swatch(&team.color),
            name,
            score
        );
    }
}

pub fn print_probe(backend: &str, report: &ProbeReport) {
    if report.success {
        println!(
            "{} {} ({})",
            "✓".green().bold(),
            report.message.as_deref().unwrap_or("KV test passed"),
            backend
        );
    } else {
        println!(
            "{} KV test failed ({}): {}",
            "✗".red().bold(),
            backend,
            report.error.as_deref().unwrap_or("unknown error")
        );
    }
}

/// Colored block for a `#RRGGBB` color, plain block otherwise.
fn swatch(hex: &str) -> ColoredString {
    match parse_hex(hex) {
        Some((r, g, b)) => "■".truecolor(r, g, b),
        None => "□".dimmed(),
    }
}

fn parse_hex(hex: &str) -> Option<(u8, u8, u8)> {
    let digits = hex.strip_prefix('#')?;
    if digits.len() != 6 || !digits.is_ascii() {
        return None;
    }
    let channel = |i: usize| u8::from_str_radix(&digits[i..i + 2], 16).ok();
    Some((channel(0)?, channel(2)?, channel(4)?))
}

/// Pad a plain string to a given visual width (right-padded).
fn pad_right(s: &str, width: usize) -> String {
    let visual = UnicodeWidthStr::width(s);
    if visual >= width {
        s.to_string()
    } else {
        format!("{}{}", s, " ".repeat(width - visual))
    }
}

/// Truncate a string respecting visual width.
fn truncate_visual(s: &str, max_width: usize) -> String {
    if UnicodeWidthStr::width(s) <= max_width {
        return s.to_string();
    }
    let mut result = String::new();
    let mut current_width = 0;
    for ch in s.chars() {
        let ch_width = unicode_width::UnicodeWidthChar::width(ch).unwrap_or(0);
        if current_width + ch_width > max_width.saturating_sub(2) {
            break;
        }
        result.push(ch);
        current_width += ch_width;
    }
    result.push_str("..");
    result
}
