use crate::theme::Theme;
use git_recent_core::state::{Mode, SelectorState};
use ratatui::{
    style::Style,
    text::{Line, Span},
};

pub const BROWSE_HINT: &str = "(/ to filter, j/k to move, enter to select, q to quit)";
pub const FILTERED_HINT: &str =
    "(/ to filter, esc to clear, j/k to move, enter to select, q to quit)";
pub const FILTERING_HINT: &str = "(type to filter, enter to keep, esc to cancel)";
const CARET: &str = "_";

/// Footer lines describing the current mode and the keys available in it
pub fn lines(state: &SelectorState, theme: &Theme) -> Vec<Line<'static>> {
    let muted = Style::default().fg(theme.muted);
    let secondary = Style::default().fg(theme.secondary);

    match state.mode {
        Mode::Filtering => vec![
            Line::from(vec![
                Span::styled("Filter: ", secondary),
                Span::raw(format!("/{}", state.filter)),
                Span::styled(CARET, Style::default().fg(theme.accent)),
            ]),
            Line::styled(FILTERING_HINT, muted),
        ],
        Mode::Browsing if state.filter_committed => vec![Line::from(vec![
            Span::styled(format!("[Filtered: {}] ", state.filter), secondary),
            Span::styled(FILTERED_HINT, muted),
        ])],
        Mode::Browsing => vec![Line::styled(BROWSE_HINT, muted)],
        Mode::Terminated(_) => Vec::new(),
    }
}
