use std::fmt::{Display, Formatter};

/// Index of a state within the automaton that owns it. Assigned in
/// declaration order and stable for the lifetime of the automaton, since
/// states are never removed.
pub type StateId = usize;

/// A single state of an automaton: an immutable label together with the
/// start and final markers.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct State {
    label: String,
    pub(crate) start: bool,
    pub(crate) accepting: bool,
}

impl State {
    pub(crate) fn new(label: String) -> Self {
        Self {
            label,
            start: false,
            accepting: false,
        }
    }

    /// Returns the label of this state.
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Returns true iff this state is the start state of its automaton.
    pub fn is_start(&self) -> bool {
        self.start
    }

    /// Returns true iff this state is final (accepting).
    pub fn is_final(&self) -> bool {
        self.accepting
    }
}

impl Display for State {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label)
    }
}
