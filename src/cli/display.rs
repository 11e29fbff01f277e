// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Terminal display for doxsearch results.
//!
//! Box drawing and a small OneDark / One Light palette, chosen by
//! `DOXSEARCH_THEME` ("dark" or "light"), then `COLORFGBG`, then dark.
//! Colors are off when stdout is not a TTY or `NO_COLOR` is set, which also
//! keeps test output plain.
//!
//! Labels and scopes arrive HTML-escaped (`std::vector&lt; double &gt;`).
//! A browser would decode those; this is the terminal's equivalent.

use std::io::{self, Write};

use doxsearch::{DisplayGroup, GroupBody, IndexStore};

/// Width between │ and │ (excluding border chars).
pub const BOX_WIDTH: usize = 80;

// ═══════════════════════════════════════════════════════════════════════════
// THEME
// ═══════════════════════════════════════════════════════════════════════════

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
    Dark,
    Light,
}

fn detect_theme() -> Theme {
    if let Ok(theme) = std::env::var("DOXSEARCH_THEME") {
        match theme.to_lowercase().as_str() {
            "light" | "l" => return Theme::Light,
            "dark" | "d" => return Theme::Dark,
            _ => {}
        }
    }

    // COLORFGBG is "fg;bg"; background 7+ (except 8) is a light terminal.
    if let Ok(colorfgbg) = std::env::var("COLORFGBG") {
        if let Some(Ok(bg)) = colorfgbg.split(';').next_back().map(str::parse::<u8>) {
            if bg >= 7 && bg != 8 {
                return Theme::Light;
            }
        }
    }

    Theme::Dark
}

#[derive(Debug, Clone, Copy)]
enum Tone {
    Cyan,
    Green,
    Blue,
    Yellow,
    Gray,
}

impl Tone {
    fn rgb(self, theme: Theme) -> (u8, u8, u8) {
        match (theme, self) {
            (Theme::Dark, Tone::Cyan) => (86, 182, 194),    // #56b6c2
            (Theme::Dark, Tone::Green) => (152, 195, 121),  // #98c379
            (Theme::Dark, Tone::Blue) => (97, 175, 239),    // #61afef
            (Theme::Dark, Tone::Yellow) => (229, 192, 123), // #e5c07b
            (Theme::Dark, Tone::Gray) => (92, 99, 112),     // #5c6370
            (Theme::Light, Tone::Cyan) => (1, 132, 188),    // #0184bc
            (Theme::Light, Tone::Green) => (80, 161, 79),   // #50a14f
            (Theme::Light, Tone::Blue) => (64, 120, 242),   // #4078f2
            (Theme::Light, Tone::Yellow) => (193, 132, 1),  // #c18401
            (Theme::Light, Tone::Gray) => (160, 161, 167),  // #a0a1a7
        }
    }
}

const RESET: &str = "\x1b[0m";
const BOLD: &str = "\x1b[1m";

fn rgb(r: u8, g: u8, b: u8) -> String {
    format!("\x1b[38;2;{};{};{}m", r, g, b)
}

/// Check if colors should be used (TTY detection)
pub fn use_colors() -> bool {
    if std::env::var("NO_COLOR").is_ok() {
        return false;
    }
    atty::is(atty::Stream::Stdout)
}

// ═══════════════════════════════════════════════════════════════════════════
// PAINTER
// ═══════════════════════════════════════════════════════════════════════════

/// Writes boxed, optionally colored output.
pub struct Painter<W: Write> {
    out: W,
    theme: Option<Theme>,
}

impl<W: Write> Painter<W> {
    /// Colors follow the terminal.
    pub fn for_terminal(out: W) -> Self {
        let theme = use_colors().then(detect_theme);
        Self { out, theme }
    }

    pub fn plain(out: W) -> Self {
        Self { out, theme: None }
    }

    #[cfg(test)]
    pub fn into_inner(self) -> W {
        self.out
    }

    fn paint(&self, tone: Tone, bold: bool, text: &str) -> String {
        match self.theme {
            Some(theme) => {
                let (r, g, b) = tone.rgb(theme);
                let weight = if bold { BOLD } else { "" };
                format!("{}{}{}{}", weight, rgb(r, g, b), text, RESET)
            }
            None => text.to_string(),
        }
    }

    fn border(&self, text: &str) -> String {
        self.paint(Tone::Gray, false, text)
    }

    /// ┌─ LABEL ──────────┐
    pub fn section_top(&mut self, label: &str) -> io::Result<()> {
        let label_part = format!("─ {} ", self.paint(Tone::Cyan, true, label));
        let remaining = BOX_WIDTH.saturating_sub(visible_len(&label_part));
        let line = format!(
            "{}{}{}",
            self.border("┌"),
            label_part,
            self.border(&format!("{}┐", "─".repeat(remaining)))
        );
        writeln!(self.out, "{}", line)
    }

    /// │ content          │
    pub fn row(&mut self, content: &str) -> io::Result<()> {
        let content = truncate_visible(content, BOX_WIDTH);
        let pad = BOX_WIDTH.saturating_sub(visible_len(&content));
        let line = format!(
            "{}{}{}{}",
            self.border("│"),
            content,
            " ".repeat(pad),
            self.border("│")
        );
        writeln!(self.out, "{}", line)
    }

    /// └──────────────────┘
    pub fn section_bot(&mut self) -> io::Result<()> {
        let line = self.border(&format!("└{}┘", "─".repeat(BOX_WIDTH)));
        writeln!(self.out, "{}", line)
    }

    /// Boxed search results, at most `limit` groups.
    pub fn search_results(
        &mut self,
        query: &str,
        groups: &[DisplayGroup],
        limit: Option<usize>,
    ) -> io::Result<()> {
        let shown = limit.map_or(groups.len(), |l| l.min(groups.len()));
        let header = match groups.len() {
            1 => format!("SEARCH \"{}\" · 1 match", query),
            n => format!("SEARCH \"{}\" · {} matches", query, n),
        };
        self.section_top(&header)?;

        if groups.is_empty() {
            let none = self.paint(Tone::Gray, false, "no matching symbols");
            self.row(&format!(" {}", none))?;
        }

        for group in &groups[..shown] {
            match &group.body {
                GroupBody::Single { row } => {
                    let label = self.paint(Tone::Green, true, &unescape_html(&row.text));
                    self.row(&format!(" {}", label))?;
                    let href = self.paint(Tone::Gray, false, &row.href());
                    self.row(&format!("     → {}", href))?;
                }
                GroupBody::Overloaded { label, children } => {
                    let label = self.paint(Tone::Green, true, &unescape_html(label));
                    let count = self.paint(Tone::Yellow, false, &format!("({})", children.len()));
                    self.row(&format!(" {} {}", label, count))?;
                    for child in children {
                        let text = self.paint(Tone::Blue, false, &unescape_html(&child.text));
                        self.row(&format!("   • {}", text))?;
                        let href = self.paint(Tone::Gray, false, &child.href());
                        self.row(&format!("     → {}", href))?;
                    }
                }
            }
        }

        if shown < groups.len() {
            let more = self.paint(
                Tone::Gray,
                false,
                &format!("… {} more (raise --limit)", groups.len() - shown),
            );
            self.row(&format!(" {}", more))?;
        }
        self.section_bot()
    }

    /// Boxed store statistics.
    pub fn store_summary(&mut self, path: &str, store: &IndexStore, top: usize) -> io::Result<()> {
        self.section_top("INDEX")?;
        self.row(&format!(" file          {}", truncate_path(path, BOX_WIDTH - 16)))?;
        self.row(&format!(" entries       {}", store.len()))?;
        self.row(&format!(" occurrences   {}", store.occurrence_count()))?;
        self.row(&format!(" overloaded    {}", store.overloaded_count()))?;
        let folding = if store.normalizer().folds_diacritics() {
            "on"
        } else {
            "off"
        };
        self.row(&format!(" diacritics    folding {}", folding))?;
        self.section_bot()?;

        let ranked = most_overloaded(store, top);
        if ranked.is_empty() {
            return Ok(());
        }
        self.section_top("MOST OVERLOADED")?;
        for (label, count) in ranked {
            let count = self.paint(Tone::Yellow, false, &format!("{:>4}", count));
            self.row(&format!(" {}  {}", count, unescape_html(label)))?;
        }
        self.section_bot()
    }
}

/// Entries with the most occurrences, ties broken by key.
pub fn most_overloaded(store: &IndexStore, top: usize) -> Vec<(&str, usize)> {
    let mut entries: Vec<_> = store.all_entries().filter(|e| e.is_overloaded()).collect();
    entries.sort_by(|a, b| {
        b.occurrences()
            .len()
            .cmp(&a.occurrences().len())
            .then_with(|| a.key().cmp(b.key()))
    });
    entries
        .into_iter()
        .take(top)
        .map(|e| (e.label(), e.occurrences().len()))
        .collect()
}

// ═══════════════════════════════════════════════════════════════════════════
// TEXT HELPERS
// ═══════════════════════════════════════════════════════════════════════════

/// Calculate visible length (excluding ANSI codes)
pub fn visible_len(s: &str) -> usize {
    let mut in_escape = false;
    let mut len = 0;
    for c in s.chars() {
        if c == '\x1b' {
            in_escape = true;
        } else if in_escape && c == 'm' {
            in_escape = false;
        } else if !in_escape {
            len += 1;
        }
    }
    len
}

/// Cut to `max` visible characters, keeping escape codes intact and closing
/// any open color.
fn truncate_visible(s: &str, max: usize) -> String {
    if visible_len(s) <= max {
        return s.to_string();
    }
    let mut out = String::with_capacity(s.len());
    let mut in_escape = false;
    let mut len = 0;
    for c in s.chars() {
        if c == '\x1b' {
            in_escape = true;
        } else if in_escape {
            if c == 'm' {
                in_escape = false;
            }
        } else {
            if len + 1 == max {
                out.push('…');
                break;
            }
            len += 1;
        }
        out.push(c);
    }
    if s.contains('\x1b') {
        out.push_str(RESET);
    }
    out
}

/// Truncate a path to max_len characters, adding ... prefix if needed
pub fn truncate_path(path: &str, max_len: usize) -> String {
    let count = path.chars().count();
    if count <= max_len {
        path.to_string()
    } else {
        let tail: String = path.chars().skip(count - max_len + 3).collect();
        format!("...{}", tail)
    }
}

/// Decode the handful of entities documentation generators emit.
pub fn unescape_html(s: &str) -> String {
    if !s.contains('&') {
        return s.to_string();
    }
    s.replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&#39;", "'")
        .replace("&amp;", "&")
}
