use bubbles_core::{Detail, Mode};

/// Input from the UI surface, applied between ticks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// A toolbar button was pressed. Carries the button id (`all`, `soutien`, ...).
    SwitchMode(String),
    HoverEnter(String),
    HoverExit(String),
}

#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    /// The chart now shows this mode.
    Switched(Mode),
    /// Hover overlay contents of the entered bubble.
    Detail(Detail),
    /// The hover overlay was hidden.
    Cleared,
}
