use thiserror::Error;

/// Errors that can occur while constructing an automaton.
///
/// Simulation has no error cases: running over a missing transition is a
/// defined reject outcome, reported as [`crate::EscapePrefix`] rather than
/// through this type.
#[derive(Clone, Debug, Error, Eq, PartialEq)]
pub enum DfaError {
    /// A state with this label is already registered.
    #[error("duplicate state `{0}`")]
    DuplicateState(String),
    /// The automaton already has a start state with the given label.
    #[error("start state `{0}` is already set")]
    DuplicateStartState(String),
    /// A transition referenced a label that is not registered.
    #[error("unknown state `{0}`")]
    UnknownState(String),
}
