//! Batch driver for the `dfa` library.
//!
//! Reads a textual automaton description together with a list of test
//! words, prints the canonical report and an accept/reject verdict per
//! word. The description format is line oriented:
//!
//! 1. final-state labels, whitespace separated (may be empty)
//! 2. the start-state label
//! 3. any remaining state labels (may be empty)
//! 4. transitions as three-character tokens `<from><symbol><to>`
//! 5. onwards: one test word per line, where a line consisting of a single
//!    `e` denotes the empty word

use anyhow::{bail, Context};
use clap::{command, Arg, ArgAction};
use dfa::Dfa;
use tracing::{debug, warn, Level};

fn parse_description(lines: &[String]) -> anyhow::Result<(Dfa, Vec<String>)> {
    if lines.len() < 4 {
        bail!(
            "a description needs at least four lines, got {}",
            lines.len()
        );
    }

    let mut dfa = Dfa::new();
    let start = lines[1].trim();
    if start.is_empty() {
        bail!("line 2 must name the start state");
    }
    // The start state is registered first so that a final start state goes
    // through the flag-merging path of add_final_state.
    dfa.add_start_state(start)
        .context("registering the start state")?;
    for label in lines[0].split_whitespace() {
        dfa.add_final_state(label);
    }
    for label in lines[2].split_whitespace() {
        dfa.add_state(label);
    }
    for token in lines[3].split_whitespace() {
        let mut chars = token.chars();
        match (chars.next(), chars.next(), chars.next(), chars.next()) {
            (Some(from), Some(on), Some(to), None) => {
                dfa.add_transition(&from.to_string(), on, &to.to_string());
            }
            _ => warn!("skipping malformed transition token `{token}`"),
        }
    }

    let words = lines[4..]
        .iter()
        .map(|line| line.trim().to_string())
        .filter(|line| !line.is_empty())
        .collect();
    Ok((dfa, words))
}

fn print_automaton(dfa: &Dfa, pretty: bool) {
    if pretty {
        println!("{dfa}");
    } else {
        print!("{}", dfa.render());
    }
}

fn run_words(dfa: &Dfa, words: &[String]) {
    for word in words {
        let input = if word == "e" { "" } else { word.as_str() };
        let verdict = if dfa.accepts(input) { "accept" } else { "reject" };
        println!("{word} {verdict}");
    }
}

fn main() -> anyhow::Result<()> {
    let matches = command!()
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .help("Enable verbose logging")
                .action(ArgAction::SetTrue)
                .conflicts_with("debug"),
        )
        .arg(
            Arg::new("debug")
                .short('d')
                .long("debug")
                .help("Turn on debugging information")
                .action(ArgAction::SetTrue)
                .conflicts_with("verbose"),
        )
        .arg(
            Arg::new("input")
                .short('i')
                .long("input")
                .help("File with the automaton description, stdin if omitted"),
        )
        .arg(
            Arg::new("pretty")
                .short('p')
                .long("pretty")
                .help("Print the colored transition table instead of the plain report")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("complement")
                .short('c')
                .long("complement")
                .help("Also run every word on the complement automaton")
                .action(ArgAction::SetTrue),
        )
        .get_matches();

    let level = if matches.get_flag("verbose") {
        Level::TRACE
    } else if matches.get_flag("debug") {
        Level::DEBUG
    } else {
        Level::INFO
    };
    let subscriber = tracing_subscriber::fmt()
        .compact()
        .with_level(true)
        .with_max_level(level)
        .finish();
    tracing::subscriber::set_global_default(subscriber)
        .context("installing the tracing subscriber")?;

    let lines: Vec<String> = match matches.get_one::<String>("input") {
        None => {
            debug!("No input file specified, using stdin");
            std::io::stdin()
                .lines()
                .collect::<Result<_, _>>()
                .context("reading stdin")?
        }
        Some(file_name) => {
            debug!("Input file name specified: {:?}", file_name);
            std::fs::read_to_string(file_name)
                .with_context(|| format!("reading {file_name}"))?
                .lines()
                .map(|s| s.to_string())
                .collect()
        }
    };

    let (dfa, words) = parse_description(&lines)?;
    print_automaton(&dfa, matches.get_flag("pretty"));
    run_words(&dfa, &words);

    if matches.get_flag("complement") {
        let complemented = dfa.complement();
        println!();
        print_automaton(&complemented, matches.get_flag("pretty"));
        run_words(&complemented, &words);
    }

    Ok(())
}
