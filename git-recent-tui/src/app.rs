use crate::{components, keymap, theme::Theme};
use crossterm::event::{self, Event, KeyEvent, KeyEventKind};
use git_recent_core::{
    git::Scope,
    state::{Outcome, SelectorState},
};
use ratatui::{DefaultTerminal, Frame, widgets::Paragraph};

/// Drive the selector until it reaches a terminal mode, redrawing after every key.
pub fn run(
    terminal: &mut DefaultTerminal,
    state: &mut SelectorState,
    scope: Scope,
    theme: &Theme,
) -> anyhow::Result<Outcome> {
    loop {
        if let Some(outcome) = state.outcome() {
            return Ok(outcome.clone());
        }

        terminal.draw(|f| draw(f, state, scope, theme))?;

        // Nothing changes between keys, so block instead of polling
        if let Event::Key(key) = event::read()? {
            handle_key(state, &key);
        }
    }
}

/// Apply a single key press to `state`. Releases and repeats are ignored.
pub fn handle_key(state: &mut SelectorState, key: &KeyEvent) {
    if key.kind != KeyEventKind::Press {
        return;
    }
    if let Some(action) = keymap::resolve_action(*key, &state.mode) {
        log::debug!("key {:?} -> {action:?}", key.code);
        state.apply(action);
    }
}

pub fn draw(f: &mut Frame, state: &SelectorState, scope: Scope, theme: &Theme) {
    let area = f.area();
    let text = components::render(state, scope, theme, area.width, area.height);
    f.render_widget(Paragraph::new(text), area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyEventState, KeyModifiers};
    use git_recent_core::state::Mode;
    use proptest::prelude::*;
    use ratatui::{Terminal, backend::TestBackend};

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn type_keys(state: &mut SelectorState, keys: &[KeyCode]) {
        for code in keys {
            handle_key(state, &press(*code));
        }
    }

    fn type_text(state: &mut SelectorState, text: &str) {
        for c in text.chars() {
            handle_key(state, &press(KeyCode::Char(c)));
        }
    }

    fn scenario_state() -> SelectorState {
        SelectorState::new(
            ["main", "develop", "feature/login", "feature/signup"]
                .iter()
                .map(ToString::to_string)
                .collect(),
        )
    }

    fn render_to_string(state: &SelectorState, scope: Scope, width: u16, height: u16) -> String {
        let backend = TestBackend::new(width, height);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|f| draw(f, state, scope, &Theme::default()))
            .unwrap();

        let buffer = terminal.backend().buffer().clone();
        let mut output = String::new();
        for y in 0..buffer.area.height {
            for x in 0..buffer.area.width {
                output.push(buffer[(x, y)].symbol().chars().next().unwrap_or(' '));
            }
            output.push('\n');
        }
        output
    }

    #[test]
    fn test_move_down_then_select() {
        let mut state = scenario_state();
        type_keys(&mut state, &[KeyCode::Char('j'), KeyCode::Enter]);
        assert_eq!(
            state.outcome(),
            Some(&Outcome::Selected("develop".to_string()))
        );
    }

    #[test]
    fn test_filter_keep_then_select() {
        let mut state = scenario_state();
        handle_key(&mut state, &press(KeyCode::Char('/')));
        type_text(&mut state, "feat");
        type_keys(&mut state, &[KeyCode::Enter, KeyCode::Enter]);
        assert_eq!(
            state.outcome(),
            Some(&Outcome::Selected("feature/login".to_string()))
        );
    }

    #[test]
    fn test_q_is_filter_text_while_filtering() {
        let mut state = scenario_state();
        handle_key(&mut state, &press(KeyCode::Char('/')));
        type_text(&mut state, "q");
        assert!(!state.is_terminated());
        assert_eq!(state.filter, "q");
    }

    #[test]
    fn test_escape_twice_cancels() {
        let mut state = scenario_state();
        type_keys(&mut state, &[KeyCode::Char('/'), KeyCode::Char('s')]);
        type_keys(&mut state, &[KeyCode::Enter, KeyCode::Esc]);
        assert!(!state.is_terminated());
        assert_eq!(state.visible_len(), 4);

        handle_key(&mut state, &press(KeyCode::Esc));
        assert_eq!(state.outcome(), Some(&Outcome::Cancelled));
    }

    #[test]
    fn test_ctrl_c_ignored_while_filtering() {
        let mut state = scenario_state();
        handle_key(&mut state, &press(KeyCode::Char('/')));
        type_text(&mut state, "dev");
        handle_key(
            &mut state,
            &KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL),
        );
        assert_eq!(state.mode, Mode::Filtering);
        assert_eq!(state.filter, "dev");

        type_keys(&mut state, &[KeyCode::Esc]);
        handle_key(
            &mut state,
            &KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL),
        );
        assert_eq!(state.outcome(), Some(&Outcome::Cancelled));
    }

    #[test]
    fn test_release_events_ignored() {
        let mut state = scenario_state();
        let release = KeyEvent {
            code: KeyCode::Char('j'),
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Release,
            state: KeyEventState::NONE,
        };
        handle_key(&mut state, &release);
        assert_eq!(state.cursor, 0);
    }

    #[test]
    fn test_enter_on_empty_list_does_nothing() {
        let mut state = SelectorState::new(Vec::new());
        handle_key(&mut state, &press(KeyCode::Enter));
        assert!(!state.is_terminated());
    }

    #[test]
    fn test_draw_initial_screen() {
        let output = render_to_string(&scenario_state(), Scope::Local, 80, 10);
        assert!(output.contains("Select a branch to checkout:"));
        assert!(output.contains("› main"));
        assert!(output.contains("  develop"));
        assert!(output.contains("(/ to filter, j/k to move, enter to select, q to quit)"));
    }

    #[test]
    fn test_draw_truncates_long_names() {
        let state = SelectorState::new(vec!["feature/a-very-long-branch-name".into()]);
        let output = render_to_string(&state, Scope::Local, 16, 6);
        assert!(output.contains("› feature/a-ver…"), "{output}");
    }

    #[test]
    fn test_draw_remote_empty_list() {
        let state = SelectorState::new(Vec::new());
        let output = render_to_string(&state, Scope::Remote, 60, 5);
        assert!(output.contains("No branches found."));
    }

    fn arb_key() -> impl Strategy<Value = KeyCode> {
        prop_oneof![
            Just(KeyCode::Up),
            Just(KeyCode::Down),
            Just(KeyCode::Char('j')),
            Just(KeyCode::Char('k')),
            Just(KeyCode::Char('/')),
            Just(KeyCode::Backspace),
            Just(KeyCode::Esc),
            Just(KeyCode::Enter),
            prop::char::range('a', 'z').prop_map(KeyCode::Char),
        ]
    }

    proptest! {
        #[test]
        fn prop_any_key_sequence_keeps_cursor_on_page(
            count in 0usize..40,
            keys in prop::collection::vec(arb_key(), 0..60),
        ) {
            let mut state = SelectorState::with_page_size(
                (0..count).map(|i| format!("branch-{i}")).collect(),
                7,
            );
            for code in keys {
                handle_key(&mut state, &press(code));
                if state.is_terminated() {
                    break;
                }
                prop_assert!(state.window_start <= state.cursor);
                prop_assert!(state.cursor < state.window_start + state.page_size());
                if state.visible_len() > 0 {
                    prop_assert!(state.cursor < state.visible_len());
                }
            }
        }
    }

    #[test]
    fn test_draw_short_terminal_shows_cursor_row() {
        let mut state = SelectorState::new((0..15).map(|i| format!("branch-{i}")).collect());
        type_keys(&mut state, &[KeyCode::Down; 8]);
        let output = render_to_string(&state, Scope::Local, 60, 6);
        assert!(output.contains("› branch-8"), "{output}");
        assert!(output.contains("(/ to filter"), "{output}");
    }
}
