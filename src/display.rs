use std::fmt::{Display, Formatter};
use std::iter::once;

use itertools::Itertools;
use owo_colors::OwoColorize;
use tabled::{builder::Builder, settings::Style};

use crate::Dfa;

fn braced<I>(items: I) -> String
where
    I: IntoIterator,
    I::Item: Display,
{
    let inner = items.into_iter().join(" ");
    if inner.is_empty() {
        "{ }".to_string()
    } else {
        format!("{{ {inner} }}")
    }
}

impl Dfa {
    /// Renders the automaton as its canonical 5-tuple report: the state
    /// set, the alphabet, the transition grid (`-` marks a missing
    /// transition), the start state (`-` when unset) and the final states.
    ///
    /// Every listing follows declaration order, so the report is
    /// deterministic and suitable for textual comparison.
    pub fn render(&self) -> String {
        let width = self
            .states()
            .iter()
            .map(|q| q.label().len())
            .max()
            .unwrap_or(1)
            .max(1);

        let mut lines = vec![
            format!("Q = {}", braced(self.states())),
            format!("Sigma = {}", braced(self.alphabet().universe())),
            "delta =".to_string(),
        ];
        lines.push(
            once(format!("{:>width$}", ""))
                .chain(self.alphabet().universe().map(|sym| format!("{sym:>width$}")))
                .join(" "),
        );
        for (id, state) in self.states().iter().enumerate() {
            lines.push(
                once(format!("{:>width$}", state.label()))
                    .chain(self.alphabet().universe().map(|&sym| {
                        match self.successor(id, sym) {
                            Some(target) => format!("{:>width$}", self.states()[target].label()),
                            None => format!("{:>width$}", "-"),
                        }
                    }))
                    .join(" "),
            );
        }
        lines.push(format!(
            "q0 = {}",
            self.start_state().map_or("-", |q| q.label())
        ));
        lines.push(format!("F = {}", braced(self.final_states())));

        let mut report = lines.join("\n");
        report.push('\n');
        report
    }
}

impl Display for Dfa {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let mut builder = Builder::default();
        builder.set_header(
            once("δ".bright_yellow().to_string())
                .chain(self.alphabet().universe().map(|sym| sym.purple().to_string())),
        );
        for (id, state) in self.states().iter().enumerate() {
            let mut label = if state.is_final() {
                state.label().green().bold().to_string()
            } else {
                state.label().red().bold().to_string()
            };
            if self.initial() == Some(id) {
                label = label.underline().to_string();
            }
            let mut row = vec![label];
            for &sym in self.alphabet().universe() {
                row.push(match self.successor(id, sym) {
                    Some(target) => self.states()[target].label().to_string(),
                    None => "⊥".dimmed().to_string(),
                });
            }
            builder.push_record(row);
        }
        let mut transition_table = builder.build();
        transition_table.with(Style::modern());
        write!(f, "{}", transition_table)
    }
}

#[cfg(test)]
mod tests {
    use crate::Dfa;
    use pretty_assertions::assert_eq;

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

    #[test]
    fn report_lists_the_full_tuple() {
        let expected =
            "Q = { a b }\nSigma = { 0 1 }\ndelta =\n  0 1\na a b\nb a b\nq0 = a\nF = { b }\n";
        assert_eq!(even_ones().render(), expected);
    }

    #[test]
    fn report_follows_declaration_order() {
        let mut forward = Dfa::new();
        for label in ["a", "b", "c"] {
            forward.add_state(label);
        }
        let mut backward = Dfa::new();
        for label in ["c", "b", "a"] {
            backward.add_state(label);
        }
        assert!(forward.render().contains("Q = { a b c }"));
        assert!(backward.render().contains("Q = { c b a }"));
        assert_ne!(forward.render(), backward.render());
    }

    #[test]
    fn report_marks_missing_pieces() {
        let mut dfa = Dfa::new();
        dfa.add_state("a");
        dfa.add_state("b");
        dfa.add_transition("a", 'x', "b");
        let report = dfa.render();
        assert!(report.contains("q0 = -"));
        assert!(report.contains("b -"), "b has no transition on x");
    }

    #[test]
    fn pretty_table_renders() {
        let rendered = even_ones().to_string();
        assert!(rendered.contains('δ'));
        assert!(rendered.contains('a') && rendered.contains('b'));
    }
}
