use crate::{action::Action, constants::DEFAULT_PAGE_SIZE, git::GitError};
use unicode_segmentation::UnicodeSegmentation;

/// How a selector session ended
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Selected(String),
    Cancelled,
    /// The branch list could not be fetched; no interaction happened
    Errored(String),
}

/// What mode the selector is in
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mode {
    Browsing,
    Filtering,
    Terminated(Outcome),
}

/// Indices of `branches` whose names contain `filter`, ignoring case, in list order.
/// An empty filter keeps everything.
pub fn filter_branches(branches: &[String], filter: &str) -> Vec<usize> {
    if filter.is_empty() {
        return (0..branches.len()).collect();
    }
    let needle = filter.to_lowercase();
    branches
        .iter()
        .enumerate()
        .filter(|(_, name)| name.to_lowercase().contains(&needle))
        .map(|(idx, _)| idx)
        .collect()
}

/// Selector state. The event loop owns one of these and feeds it actions; the view reads it.
///
/// Invariants while `visible` is non-empty:
/// `cursor < visible.len()` and `window_start <= cursor < window_start + page_size`.
#[derive(Debug, Clone)]
pub struct SelectorState {
    /// All branches, most recently active first. Fixed for the session.
    pub branches: Vec<String>,
    /// Indices into `branches` currently listed, in `branches` order
    pub visible: Vec<usize>,
    pub cursor: usize,
    pub window_start: usize,
    pub mode: Mode,
    pub filter: String,
    /// A filter was confirmed and is still narrowing the list
    pub filter_committed: bool,
    page_size: usize,
}

impl SelectorState {
    pub fn new(branches: Vec<String>) -> Self {
        Self::with_page_size(branches, DEFAULT_PAGE_SIZE)
    }

    pub fn with_page_size(branches: Vec<String>, page_size: usize) -> Self {
        let visible = (0..branches.len()).collect();
        Self {
            branches,
            visible,
            cursor: 0,
            window_start: 0,
            mode: Mode::Browsing,
            filter: String::new(),
            filter_committed: false,
            page_size: page_size.max(1),
        }
    }

    /// Start a session from the result of the branch source. A failed fetch produces a
    /// session that is already terminated with [`Outcome::Errored`].
    pub fn from_source(fetched: Result<Vec<String>, GitError>, page_size: usize) -> Self {
        match fetched {
            Ok(branches) => Self::with_page_size(branches, page_size),
            Err(err) => {
                let mut state = Self::with_page_size(Vec::new(), page_size);
                state.mode = Mode::Terminated(Outcome::Errored(err.to_string()));
                state
            }
        }
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn visible_len(&self) -> usize {
        self.visible.len()
    }

    pub fn visible_branches(&self) -> impl Iterator<Item = &str> {
        self.visible.iter().map(|&idx| self.branches[idx].as_str())
    }

    pub fn selected_branch(&self) -> Option<&str> {
        self.visible
            .get(self.cursor)
            .map(|&idx| self.branches[idx].as_str())
    }

    /// The rows of the current page as `(position in visible, branch name)`
    pub fn page(&self) -> impl Iterator<Item = (usize, &str)> {
        self.visible
            .iter()
            .enumerate()
            .skip(self.window_start)
            .take(self.page_size)
            .map(|(pos, &idx)| (pos, self.branches[idx].as_str()))
    }

    pub fn outcome(&self) -> Option<&Outcome> {
        match &self.mode {
            Mode::Terminated(outcome) => Some(outcome),
            Mode::Browsing | Mode::Filtering => None,
        }
    }

    pub fn is_terminated(&self) -> bool {
        matches!(self.mode, Mode::Terminated(_))
    }

    /// Apply one action in place. Terminated sessions ignore further input.
    pub fn apply(&mut self, action: Action) {
        match self.mode {
            Mode::Browsing => self.apply_browsing(action),
            Mode::Filtering => self.apply_filtering(action),
            Mode::Terminated(_) => {}
        }
    }

    fn apply_browsing(&mut self, action: Action) {
        match action {
            Action::Quit => self.terminate(Outcome::Cancelled),
            Action::Cancel => {
                if self.filter_committed {
                    self.clear_filter();
                } else {
                    self.terminate(Outcome::Cancelled);
                }
            }
            Action::StartFilter => {
                self.mode = Mode::Filtering;
                self.filter.clear();
            }
            Action::MoveUp => self.move_up(),
            Action::MoveDown => self.move_down(),
            Action::Confirm => {
                if let Some(branch) = self.selected_branch() {
                    let branch = branch.to_string();
                    self.terminate(Outcome::Selected(branch));
                }
            }
            Action::FilterPush(_) | Action::FilterPop => {}
        }
    }

    fn apply_filtering(&mut self, action: Action) {
        match action {
            Action::Cancel => {
                self.clear_filter();
                self.mode = Mode::Browsing;
            }
            Action::Confirm => {
                self.filter_committed = true;
                self.mode = Mode::Browsing;
            }
            Action::FilterPop => {
                if self.pop_filter_grapheme() {
                    self.refilter();
                }
            }
            Action::FilterPush(c) => {
                self.filter.push(c);
                self.refilter();
            }
            Action::Quit | Action::MoveUp | Action::MoveDown | Action::StartFilter => {}
        }
    }

    fn terminate(&mut self, outcome: Outcome) {
        log::info!("selector finished: {outcome:?}");
        self.mode = Mode::Terminated(outcome);
    }

    fn move_up(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
        if self.cursor < self.window_start {
            self.window_start = self.cursor;
        }
    }

    fn move_down(&mut self) {
        let len = self.visible.len();
        if len == 0 {
            return;
        }
        self.cursor = (self.cursor + 1).min(len - 1);
        if self.cursor >= self.window_start + self.page_size {
            self.window_start = self.cursor + 1 - self.page_size;
        }
    }

    fn reset_position(&mut self) {
        self.cursor = 0;
        self.window_start = 0;
    }

    fn clear_filter(&mut self) {
        self.filter.clear();
        self.filter_committed = false;
        self.visible = (0..self.branches.len()).collect();
        self.reset_position();
    }

    fn refilter(&mut self) {
        self.visible = filter_branches(&self.branches, &self.filter);
        self.reset_position();
    }

    /// Remove the last grapheme cluster of the filter text
    fn pop_filter_grapheme(&mut self) -> bool {
        match self.filter.grapheme_indices(true).next_back() {
            Some((start, _)) => {
                self.filter.truncate(start);
                true
            }
            None => false,
        }
    }
}

/// Pure transition: consume a state and an action, produce the next state.
pub fn transition(mut state: SelectorState, action: Action) -> SelectorState {
    state.apply(action);
    state
}
