use tracing::trace;

use crate::{Dfa, Input, StateId};

/// Witness of a run that left the transition table before the word was
/// consumed: the position of the offending symbol within the input, the
/// state in which the run got stuck and the symbol itself.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct EscapePrefix {
    /// Index of the input step that had no transition.
    pub position: usize,
    /// State in which the run was when it escaped.
    pub state: StateId,
    /// The symbol for which no transition is declared.
    pub symbol: char,
}

impl Dfa {
    /// Runs the automaton on `word`, starting in `from`.
    ///
    /// On success the reached state is returned; consuming the empty word
    /// succeeds immediately with `from`. The run halts with an
    /// [`EscapePrefix`] as soon as a symbol has no declared transition,
    /// which callers treat as rejection. Plain `char` iterators work
    /// directly since characters coerce into [`Input::Symbol`].
    pub fn run_from<W>(&self, from: StateId, word: W) -> Result<StateId, EscapePrefix>
    where
        W: IntoIterator,
        W::Item: Into<Input>,
    {
        let mut current = from;
        for (position, input) in word.into_iter().enumerate() {
            match input.into() {
                Input::Stay => trace!("staying in state {current} at position {position}"),
                Input::Symbol(symbol) => match self.successor(current, symbol) {
                    Some(next) => {
                        trace!("taking transition ({current}, {symbol}) -> {next}");
                        current = next;
                    }
                    None => {
                        return Err(EscapePrefix {
                            position,
                            state: current,
                            symbol,
                        })
                    }
                },
            }
        }
        Ok(current)
    }

    /// Returns true iff the automaton accepts `word`.
    ///
    /// The word is run from the start state; it is accepted iff the run
    /// consumes every symbol and ends in a final state. A missing
    /// transition rejects, as does an automaton without a start state.
    /// The empty word is accepted iff the start state itself is final.
    pub fn accepts(&self, word: &str) -> bool {
        let Some(initial) = self.initial() else {
            return false;
        };
        match self.run_from(initial, word.chars()) {
            Ok(reached) => self.states()[reached].is_final(),
            Err(_) => false,
        }
    }

    /// Returns true iff the automaton does not accept `word`.
    pub fn rejects(&self, word: &str) -> bool {
        !self.accepts(word)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn even_ones() -> Dfa {
        let mut dfa = Dfa::new();
        dfa.add_start_state("a").unwrap();
        dfa.add_final_state("b");
        dfa.add_transition("a", '0', "a");
        dfa.add_transition("a", '1', "b");
        dfa.add_transition("b", '0', "a");
        dfa.add_transition("b", '1', "b");
        dfa
    }

    /// All words over `{0, 1}` of length at most `max_len`.
    fn binary_words(max_len: u32) -> Vec<String> {
        let mut words = vec![String::new()];
        for len in 1..=max_len {
            for bits in 0..(1u32 << len) {
                let word = (0..len)
                    .rev()
                    .map(|i| if bits >> i & 1 == 1 { '1' } else { '0' })
                    .collect();
                words.push(word);
            }
        }
        words
    }

    #[test]
    fn scenario_verdicts() {
        let dfa = even_ones();
        assert!(!dfa.accepts(""));
        assert!(dfa.accepts("1"));
        assert!(dfa.accepts("11"));
        assert!(!dfa.accepts("10"));
        assert!(dfa.accepts("01"));
    }

    #[test]
    fn acceptance_depends_only_on_the_reached_state() {
        let dfa = even_ones();
        let initial = dfa.initial().unwrap();
        for (s, t) in [("1", "01"), ("11", "1"), ("10", "00")] {
            let reached_s = dfa.run_from(initial, s.chars()).unwrap();
            let reached_t = dfa.run_from(initial, t.chars()).unwrap();
            assert_eq!(reached_s, reached_t);
            assert_eq!(dfa.accepts(s), dfa.accepts(t));
        }
    }

    #[test]
    fn empty_word_acceptance_follows_the_start_state() {
        let mut dfa = Dfa::new();
        dfa.add_start_state("a").unwrap();
        assert!(!dfa.accepts(""));
        dfa.add_final_state("a");
        assert!(dfa.accepts(""));
    }

    #[test]
    fn no_start_state_rejects_everything() {
        let mut dfa = Dfa::new();
        dfa.add_final_state("a");
        assert!(dfa.rejects(""));
        assert!(dfa.rejects("0"));
    }

    #[test]
    fn missing_transitions_halt_and_reject() {
        let mut dfa = Dfa::new();
        dfa.add_start_state("a").unwrap();
        dfa.add_final_state("b");
        dfa.add_transition("a", '1', "b");
        assert!(dfa.accepts("1"));
        assert!(dfa.rejects("10"));
        assert!(dfa.rejects("0"));

        let a = dfa.index_of("a").unwrap();
        let b = dfa.index_of("b").unwrap();
        assert_eq!(
            dfa.run_from(a, "10".chars()),
            Err(EscapePrefix {
                position: 1,
                state: b,
                symbol: '0'
            })
        );
    }

    #[test]
    fn stay_steps_do_not_consume_transitions() {
        let dfa = even_ones();
        let a = dfa.index_of("a").unwrap();
        let b = dfa.index_of("b").unwrap();
        let reached = dfa
            .run_from(a, [Input::Symbol('1'), Input::Stay, Input::Symbol('1')])
            .unwrap();
        assert_eq!(reached, b);
    }

    #[test]
    fn complement_flips_every_total_verdict() {
        let dfa = even_ones();
        let complemented = dfa.complement();
        for word in binary_words(4) {
            assert_ne!(
                dfa.accepts(&word),
                complemented.accepts(&word),
                "verdicts must differ on {word:?}"
            );
        }
    }

    #[test]
    fn complement_law_degrades_to_reject_on_partial_tables() {
        // Both automata reject a word that needs an undeclared transition,
        // since a table miss rejects instead of routing to a trap state.
        let mut dfa = Dfa::new();
        dfa.add_start_state("a").unwrap();
        dfa.add_final_state("b");
        dfa.add_transition("a", '1', "b");
        let complemented = dfa.complement();
        assert!(dfa.rejects("0"));
        assert!(complemented.rejects("0"));
    }
}
