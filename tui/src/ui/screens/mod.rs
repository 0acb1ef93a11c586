pub mod form;
pub mod help;

/// What the event loop should do after a key press.
pub enum Action {
    None,
    Quit,
}
