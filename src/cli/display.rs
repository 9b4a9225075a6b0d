// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Terminal display utilities for the kensaku CLI.
//!
//! OneDark for dark terminals, One Light for light ones. Detection tries
//! `KENSAKU_THEME` first, then `COLORFGBG`, then defaults to dark. Respects
//! `NO_COLOR` and turns colors off when stdout isn't a TTY.
//!
//! Widths are terminal columns: kana, kanji and full-width forms take two, so
//! boxes stay aligned around Japanese titles.

use std::sync::OnceLock;

use kensaku::{IndexStats, SearchPage, SearchResult};

// Box drawing constants - width between │ and │ (excluding border chars)
pub const BOX_WIDTH: usize = 80;

// ═══════════════════════════════════════════════════════════════════════════
// THEME DETECTION
// ═══════════════════════════════════════════════════════════════════════════

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
    Dark,
    Light,
}

static THEME: OnceLock<Theme> = OnceLock::new();

fn detect_theme() -> Theme {
    if let Ok(theme) = std::env::var("KENSAKU_THEME") {
        match theme.to_lowercase().as_str() {
            "light" | "l" => return Theme::Light,
            "dark" | "d" => return Theme::Dark,
            _ => {}
        }
    }

    // COLORFGBG is "fg;bg"; backgrounds 7+ (except 8) are light
    if let Ok(colorfgbg) = std::env::var("COLORFGBG") {
        if let Some(bg) = colorfgbg.split(';').next_back() {
            if let Ok(bg_num) = bg.parse::<u8>() {
                if bg_num >= 7 && bg_num != 8 {
                    return Theme::Light;
                }
            }
        }
    }

    Theme::Dark
}

pub fn theme() -> Theme {
    *THEME.get_or_init(detect_theme)
}

// ═══════════════════════════════════════════════════════════════════════════
// ONEDARK / ONE LIGHT COLOR PALETTES (True Color)
// ═══════════════════════════════════════════════════════════════════════════

fn rgb(r: u8, g: u8, b: u8) -> String {
    format!("\x1b[38;2;{};{};{}m", r, g, b)
}

pub mod colors {
    pub const RESET: &str = "\x1b[0m";
    pub const BOLD: &str = "\x1b[1m";
    pub const DIM: &str = "\x1b[2m";
}

pub use colors::*;

mod onedark {
    pub const GREEN: (u8, u8, u8) = (152, 195, 121);   // #98c379
    pub const YELLOW: (u8, u8, u8) = (229, 192, 123);  // #e5c07b
    pub const BLUE: (u8, u8, u8) = (97, 175, 239);     // #61afef
    pub const CYAN: (u8, u8, u8) = (86, 182, 194);     // #56b6c2
    pub const GRAY: (u8, u8, u8) = (92, 99, 112);      // #5c6370
    pub const BRIGHT_GREEN: (u8, u8, u8) = (166, 226, 46);
}

mod onelight {
    pub const GREEN: (u8, u8, u8) = (80, 161, 79);     // #50a14f
    pub const YELLOW: (u8, u8, u8) = (193, 132, 1);    // #c18401
    pub const BLUE: (u8, u8, u8) = (64, 120, 242);     // #4078f2
    pub const CYAN: (u8, u8, u8) = (1, 132, 188);      // #0184bc
    pub const GRAY: (u8, u8, u8) = (160, 161, 167);    // #a0a1a7
    pub const BRIGHT_GREEN: (u8, u8, u8) = (68, 140, 39);
}

macro_rules! theme_color {
    ($name:ident) => {
        #[allow(non_snake_case)]
        pub fn $name() -> String {
            let (r, g, b) = match theme() {
                Theme::Dark => onedark::$name,
                Theme::Light => onelight::$name,
            };
            rgb(r, g, b)
        }
    };
}

theme_color!(GREEN);
theme_color!(YELLOW);
theme_color!(BLUE);
theme_color!(CYAN);
theme_color!(GRAY);
theme_color!(BRIGHT_GREEN);

// ═══════════════════════════════════════════════════════════════════════════
// CORE UTILITIES
// ═══════════════════════════════════════════════════════════════════════════

pub fn use_colors() -> bool {
    if std::env::var("NO_COLOR").is_ok() {
        return false;
    }
    atty::is(atty::Stream::Stdout)
}

/// Apply theme color with optional modifiers
pub fn themed(color_fn: fn() -> String, modifiers: &[&str], text: &str) -> String {
    if use_colors() {
        format!("{}{}{}{}", modifiers.join(""), color_fn(), text, RESET)
    } else {
        text.to_string()
    }
}

/// Terminal columns taken by `c`.
fn char_width(c: char) -> usize {
    match c {
        '\u{1100}'..='\u{115F}'       // Hangul Jamo
        | '\u{2E80}'..='\u{A4CF}'     // CJK, kana, radicals
        | '\u{AC00}'..='\u{D7A3}'     // Hangul syllables
        | '\u{F900}'..='\u{FAFF}'     // CJK compatibility
        | '\u{FE30}'..='\u{FE4F}'     // CJK compatibility forms
        | '\u{FF00}'..='\u{FF60}'     // Full-width forms
        | '\u{FFE0}'..='\u{FFE6}' => 2,
        _ => 1,
    }
}

/// Visible width in columns (excluding ANSI codes)
pub fn visible_len(s: &str) -> usize {
    let mut in_escape = false;
    let mut len = 0;
    for c in s.chars() {
        if c == '\x1b' {
            in_escape = true;
        } else if in_escape && c == 'm' {
            in_escape = false;
        } else if !in_escape {
            len += char_width(c);
        }
    }
    len
}

/// Cut plain text to at most `width` columns, ending in "…" if anything was cut.
pub fn truncate(text: &str, width: usize) -> String {
    let flat: String = text
        .chars()
        .map(|c| if c.is_whitespace() { ' ' } else { c })
        .collect();
    if visible_len(&flat) <= width {
        return flat;
    }
    let mut out = String::new();
    let mut used = 0;
    for c in flat.chars() {
        let w = char_width(c);
        if used + w + 1 > width {
            break;
        }
        out.push(c);
        used += w;
    }
    out.push('…');
    out
}

/// Right-pad a styled string to a fixed visible width
pub fn pad_right(s: &str, width: usize) -> String {
    let visible = visible_len(s);
    if visible >= width {
        s.to_string()
    } else {
        format!("{}{}", s, " ".repeat(width - visible))
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// BOX DRAWING
// ═══════════════════════════════════════════════════════════════════════════

fn border() -> String {
    if use_colors() {
        GRAY()
    } else {
        String::new()
    }
}

fn reset() -> &'static str {
    if use_colors() {
        RESET
    } else {
        ""
    }
}

/// Print a content line: │ content          │
pub fn row(content: &str) {
    let border = border();
    let pad = BOX_WIDTH.saturating_sub(visible_len(content));
    println!(
        "{}│{}{}{}{}│{}",
        border,
        reset(),
        content,
        " ".repeat(pad),
        border,
        reset()
    );
}

/// Print section header: ┌─ LABEL ──────────┐
pub fn section_top(label: &str) {
    let border = border();
    let colored_label = themed(CYAN, &[BOLD], label);
    let label_part = format!("─ {} ", colored_label);
    let remaining = BOX_WIDTH.saturating_sub(visible_len(&label_part));
    println!(
        "{}┌{}{}{}{}┐{}",
        border,
        reset(),
        label_part,
        border,
        "─".repeat(remaining),
        reset()
    );
}

/// Print section divider: ├─ LABEL ──────────┤
pub fn section_mid(label: &str) {
    let border = border();
    let colored_label = themed(CYAN, &[BOLD], label);
    let label_part = format!("─ {} ", colored_label);
    let remaining = BOX_WIDTH.saturating_sub(visible_len(&label_part));
    println!(
        "{}├{}{}{}{}┤{}",
        border,
        reset(),
        label_part,
        border,
        "─".repeat(remaining),
        reset()
    );
}

/// Print section footer: └──────────────────┘
pub fn section_bot() {
    println!("{}└{}┘{}", border(), "─".repeat(BOX_WIDTH), reset());
}

// ═══════════════════════════════════════════════════════════════════════════
// SEMANTIC FORMATTERS
// ═══════════════════════════════════════════════════════════════════════════

/// Color-coded relevance score in [0, 1]
pub fn score_value(score: f64) -> String {
    let text = format!("{:>5.3}", score);
    if !use_colors() {
        return text;
    }
    let color = if score >= 0.7 {
        BRIGHT_GREEN()
    } else if score >= 0.4 {
        GREEN()
    } else if score >= 0.1 {
        YELLOW()
    } else {
        GRAY()
    };
    format!("{}{}{}", color, text, RESET)
}

/// Color-coded timing value in ms
pub fn timing_ms(value: f64) -> String {
    let text = format!("{:.3} ms", value);
    if !use_colors() {
        return text;
    }
    let color = if value < 5.0 {
        GREEN()
    } else if value < 20.0 {
        YELLOW()
    } else {
        GRAY()
    };
    format!("{}{}{}", color, text, RESET)
}

// ═══════════════════════════════════════════════════════════════════════════
// REPORTS
// ═══════════════════════════════════════════════════════════════════════════

fn result_rows(rank: usize, result: &SearchResult) {
    let header = format!(
        " {:>3}. {}  {}",
        rank,
        score_value(result.score),
        themed(BLUE, &[BOLD], &truncate(&result.title, BOX_WIDTH - 16))
    );
    row(&header);

    let mut meta = format!("id={}", result.id);
    if result.content_id != result.id {
        meta.push_str(&format!(" content={}", result.content_id));
    }
    if !result.tags.is_empty() {
        meta.push_str(&format!(" tags=[{}]", result.tags.join(", ")));
    }
    if !result.categories.is_empty() {
        meta.push_str(&format!(" categories=[{}]", result.categories.join(", ")));
    }
    row(&format!("      {}", themed(GRAY, &[], &truncate(&meta, BOX_WIDTH - 7))));

    for highlight in &result.highlights {
        row(&format!("      › {}", truncate(highlight, BOX_WIDTH - 9)));
    }
}

pub fn print_results(query: &str, page: &SearchPage, offset: usize, elapsed_ms: f64) {
    let label = if query.trim().is_empty() {
        "BROWSE".to_string()
    } else {
        format!("SEARCH \"{}\"", truncate(query, 40))
    };
    section_top(&label);
    row(&format!(
        " {} of {} hits in {}",
        page.results.len(),
        page.total,
        timing_ms(elapsed_ms)
    ));

    if !page.results.is_empty() {
        section_mid("RESULTS");
        for (i, result) in page.results.iter().enumerate() {
            result_rows(offset + i + 1, result);
        }
    }
    section_bot();
}

pub fn print_stats(path: &str, stats: &IndexStats) {
    section_top("INDEX");
    row(&format!(" {}", pad_right("snapshot", 12) + &truncate(path, BOX_WIDTH - 14)));
    row(&format!(" {}{}", pad_right("documents", 12), stats.total_content));
    row(&format!(" {}{}", pad_right("tokens", 12), stats.total_tokens));
    row(&format!(
        " {}{:.2}",
        pad_right("tokens/doc", 12),
        stats.average_tokens_per_content
    ));
    section_bot();
}

pub fn print_suggestions(prefix: &str, suggestions: &[String]) {
    section_top(&format!("SUGGEST \"{}\"", truncate(prefix, 40)));
    if suggestions.is_empty() {
        row(&format!(" {}", themed(GRAY, &[DIM], "no completions")));
    }
    for suggestion in suggestions {
        row(&format!(" {}", suggestion));
    }
    section_bot();
}
