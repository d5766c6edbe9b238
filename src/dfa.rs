use tracing::debug;

use crate::{Alphabet, DfaError, Input, Map, State, StateId};

/// A deterministic finite automaton over single character symbols.
///
/// States are declared by label; the automaton owns one [`State`] per label
/// and hands out [`StateId`]s for everything that happens after resolution.
/// The alphabet is built as a side effect of declaring transitions, it
/// contains exactly the symbols that occur in at least one transition.
///
/// Construction is incremental ([`Dfa::add_start_state`] and friends),
/// afterwards the automaton is queried and simulated without further
/// mutation. [`Dfa::complement`] produces an independent value.
#[derive(Clone, Debug, Default)]
pub struct Dfa {
    states: Vec<State>,
    index: Map<String, StateId>,
    alphabet: Alphabet,
    delta: Map<(StateId, char), StateId>,
    initial: Option<StateId>,
}

impl Dfa {
    /// Creates an empty automaton with no states and an empty alphabet.
    pub fn new() -> Self {
        Self::default()
    }

    fn push_state(&mut self, state: State) -> StateId {
        let id = self.states.len();
        self.index.insert(state.label().to_string(), id);
        self.states.push(state);
        id
    }

    /// Registers the unique start state of the automaton.
    ///
    /// Fails with [`DfaError::DuplicateState`] if the label is already
    /// taken and with [`DfaError::DuplicateStartState`] if a start state
    /// has been registered before. The start state is created non-final;
    /// use [`Dfa::add_final_state`] with the same label to mark it final.
    pub fn add_start_state(&mut self, label: impl Into<String>) -> Result<StateId, DfaError> {
        let label = label.into();
        if let Some(initial) = self.initial {
            return Err(DfaError::DuplicateStartState(
                self.states[initial].label().to_string(),
            ));
        }
        if self.index.contains_key(&label) {
            return Err(DfaError::DuplicateState(label));
        }
        let mut state = State::new(label);
        state.start = true;
        let id = self.push_state(state);
        self.initial = Some(id);
        Ok(id)
    }

    /// Registers a plain state. Re-adding an already declared label is a
    /// no-op that returns the id of the existing state, the registry never
    /// holds two states with the same label.
    pub fn add_state(&mut self, label: impl Into<String>) -> StateId {
        let label = label.into();
        if let Some(&id) = self.index.get(&label) {
            return id;
        }
        self.push_state(State::new(label))
    }

    /// Registers a final state, or marks an already declared state as
    /// final. One registry entry per label, the final flag is or-ed in.
    pub fn add_final_state(&mut self, label: impl Into<String>) -> StateId {
        let id = self.add_state(label);
        self.states[id].accepting = true;
        id
    }

    /// Adds the transition `(from, on) -> to` and records `on` in the
    /// alphabet. Re-declaring a pair overwrites the previous destination,
    /// the last write wins.
    ///
    /// Both labels must already be registered. If either is unknown the
    /// call is a no-op, logged at debug level: a malformed line must not
    /// abort a batch load. Callers that want the violation surfaced use
    /// [`Dfa::try_add_transition`] instead.
    pub fn add_transition(&mut self, from: &str, on: char, to: &str) {
        if let Err(e) = self.try_add_transition(from, on, to) {
            debug!("dropping transition ({from}, {on}, {to}): {e}");
        }
    }

    /// Strict variant of [`Dfa::add_transition`] which fails with
    /// [`DfaError::UnknownState`] instead of silently dropping the
    /// transition.
    pub fn try_add_transition(&mut self, from: &str, on: char, to: &str) -> Result<(), DfaError> {
        let source = self
            .index_of(from)
            .ok_or_else(|| DfaError::UnknownState(from.to_string()))?;
        let target = self
            .index_of(to)
            .ok_or_else(|| DfaError::UnknownState(to.to_string()))?;
        self.alphabet.insert(on);
        self.delta.insert((source, on), target);
        Ok(())
    }

    /// Resolves a label to the id of the state carrying it.
    pub fn index_of(&self, label: &str) -> Option<StateId> {
        self.index.get(label).copied()
    }

    /// Returns the state with the given id, if it exists.
    pub fn state(&self, id: StateId) -> Option<&State> {
        self.states.get(id)
    }

    /// All states in declaration order.
    pub fn states(&self) -> &[State] {
        &self.states
    }

    /// All final states, in declaration order.
    pub fn final_states(&self) -> impl Iterator<Item = &State> {
        self.states.iter().filter(|q| q.is_final())
    }

    /// The id of the start state, if one has been registered.
    pub fn initial(&self) -> Option<StateId> {
        self.initial
    }

    /// The start state itself, if one has been registered.
    pub fn start_state(&self) -> Option<&State> {
        self.initial.map(|id| &self.states[id])
    }

    /// The alphabet built up by the declared transitions.
    pub fn alphabet(&self) -> &Alphabet {
        &self.alphabet
    }

    /// Looks up the successor of `from` for one step of input. A
    /// [`Input::Symbol`] consults the transition table and yields `None`
    /// for undeclared pairs; [`Input::Stay`] returns `from` unchanged
    /// without touching the table.
    pub fn successor<I: Into<Input>>(&self, from: StateId, input: I) -> Option<StateId> {
        match input.into() {
            Input::Stay => Some(from),
            Input::Symbol(sym) => self.delta.get(&(from, sym)).copied(),
        }
    }

    /// Returns a new automaton accepting the complement language.
    ///
    /// The copy shares no mutable structure with `self`: every state's
    /// acceptance is inverted on the cloned value, so the final states of
    /// the result are exactly the non-final states of `self` and neither
    /// automaton can corrupt the other.
    pub fn complement(&self) -> Self {
        let mut complemented = self.clone();
        for state in &mut complemented.states {
            state.accepting = !state.accepting;
        }
        complemented
    }
}
