/// Every keystroke the selector reacts to resolves to an Action. The state machine never
/// sees raw terminal events.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    // Navigation
    MoveUp,
    MoveDown,

    // Outcome
    Confirm,
    Cancel,
    Quit,

    // Filter
    StartFilter,
    FilterPush(char),
    FilterPop,
}
