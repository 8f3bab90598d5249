use crate::theme::Theme;
use git_recent_core::{git::Scope, state::SelectorState};
use ratatui::{
    style::Style,
    text::{Line, Text},
};

pub mod branch_picker;
pub mod footer;

pub const NO_BRANCHES: &str = "No branches found.";
pub const NO_MATCHES: &str = "No branches match filter.";

/// Header line plus the blank line under it
const HEADER_ROWS: usize = 2;

fn header(scope: Scope) -> &'static str {
    match scope {
        Scope::Local => "Select a branch to checkout:",
        Scope::Remote => "Select a remote branch to checkout:",
    }
}

/// Render the whole selector view into a `width` x `height` area. Pure: the same state
/// always produces the same text.
///
/// Header and footer always fit; the branch rows get whatever height is left, down to a
/// single row holding the cursor.
pub fn render(
    state: &SelectorState,
    scope: Scope,
    theme: &Theme,
    width: u16,
    height: u16,
) -> Text<'static> {
    let footer = footer::lines(state, theme);
    let footer_rows = if footer.is_empty() { 0 } else { footer.len() + 1 };
    let list_rows = usize::from(height).saturating_sub(HEADER_ROWS + footer_rows);

    let mut lines = Vec::new();

    if state.visible.is_empty() {
        let message = if state.branches.is_empty() {
            NO_BRANCHES
        } else {
            NO_MATCHES
        };
        lines.push(Line::styled(message, Style::default().fg(theme.hint)));
    } else {
        lines.push(Line::from(header(scope)));
        lines.push(Line::default());
        lines.extend(branch_picker::lines(state, theme, width, list_rows));
    }

    if !footer.is_empty() {
        lines.push(Line::default());
        lines.extend(footer);
    }

    Text::from(lines)
}
