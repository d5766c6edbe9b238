//! Deterministic finite automata with label-addressed states.
//!
//! A [`Dfa`] is the usual 5-tuple of states, alphabet, transition function,
//! start state and final states. It is built incrementally by declaring
//! states and transitions, after which it can be simulated on finite words,
//! complemented and rendered as a textual report.
//!
//! States are addressed by their label during construction and by a
//! [`StateId`] afterwards; there is exactly one logical state per label,
//! owned by the automaton.
//!
//! ```
//! use dfa::Dfa;
//!
//! let mut dfa = Dfa::new();
//! dfa.add_start_state("a").unwrap();
//! dfa.add_final_state("b");
//! dfa.add_transition("a", '0', "a");
//! dfa.add_transition("a", '1', "b");
//! dfa.add_transition("b", '0', "a");
//! dfa.add_transition("b", '1', "b");
//!
//! assert!(dfa.accepts("01"));
//! assert!(dfa.rejects("10"));
//! assert!(dfa.complement().accepts("10"));
//! ```
#![warn(missing_docs)]

mod alphabet;
pub use alphabet::{Alphabet, Input};

mod state;
pub use state::{State, StateId};

mod dfa;
pub use dfa::Dfa;

mod error;
pub use error::DfaError;

mod run;
pub use run::EscapePrefix;

mod display;

/// Type alias for the hash map used throughout the crate.
pub type Map<K, V> = ahash::HashMap<K, V>;
