use crate::theme::Theme;
use git_recent_core::state::SelectorState;
use ratatui::{
    style::{Modifier, Style},
    text::{Line, Span},
};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

pub const CURSOR_SYMBOL: &str = "›";
const ELLIPSIS: char = '…';

/// Width taken by the cursor column ("› ")
const GUTTER_WIDTH: usize = 2;

/// Shorten `name` to at most `max_width` display columns, marking the cut with an ellipsis
pub fn truncate_to_width(name: &str, max_width: usize) -> String {
    if name.width() <= max_width {
        return name.to_string();
    }
    if max_width == 0 {
        return String::new();
    }

    let budget = max_width - 1;
    let mut used = 0;
    let mut out = String::new();
    for c in name.chars() {
        let w = c.width().unwrap_or(0);
        if used + w > budget {
            break;
        }
        used += w;
        out.push(c);
    }
    out.push(ELLIPSIS);
    out
}

/// One line per branch on the current page, highlighting the cursor row.
///
/// At most `max_rows` lines are produced. When the page is taller than that, the rows
/// shown are shifted so the cursor row stays on screen.
pub fn lines(
    state: &SelectorState,
    theme: &Theme,
    width: u16,
    max_rows: usize,
) -> Vec<Line<'static>> {
    let max_rows = max_rows.max(1);
    let cursor_row = state.cursor.saturating_sub(state.window_start);
    let skip = (cursor_row + 1).saturating_sub(max_rows);

    let name_width = usize::from(width).saturating_sub(GUTTER_WIDTH);
    let cursor_style = Style::default().fg(theme.accent);
    let selected_style = Style::default()
        .fg(theme.accent)
        .add_modifier(Modifier::BOLD);

    state
        .page()
        .skip(skip)
        .take(max_rows)
        .map(|(pos, name)| {
            let name = truncate_to_width(name, name_width);
            if pos == state.cursor {
                Line::from(vec![
                    Span::styled(format!("{CURSOR_SYMBOL} "), cursor_style),
                    Span::styled(name, selected_style),
                ])
            } else {
                Line::from(vec![Span::raw("  "), Span::raw(name)])
            }
        })
        .collect()
}
