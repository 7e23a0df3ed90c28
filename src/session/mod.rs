use anyhow::Result;
use std::io::{BufRead, Write};
use std::path::PathBuf;
use tracing::debug;

use crate::analysis::{analyze, Analysis};
use crate::console::Console;
use crate::import::{file, manual};
use crate::output::{format_menu, format_report};
use crate::store::ScoreStore;

/// A menu selection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    ManualEntry,
    FileImport,
    Exit,
    Invalid,
}

impl MenuChoice {
    pub fn parse(input: &str) -> Self {
        match input.trim() {
            "1" => MenuChoice::ManualEntry,
            "2" => MenuChoice::FileImport,
            "3" => MenuChoice::Exit,
            _ => MenuChoice::Invalid,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct SessionOptions {
    pub use_colors: bool,
    /// Used when the CSV filename prompt is left blank
    pub default_csv: Option<PathBuf>,
}

#[derive(Debug)]
enum State {
    MenuPrompt,
    ManualEntry,
    FileImport,
    Analyzing(ScoreStore),
    Exit,
}

/// Run the interactive menu until the user exits or input runs out.
///
/// Only console failures are returned as errors; bad marks, bad menu choices
/// and unreadable files are all reported and the loop carries on.
pub fn run_session<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    options: &SessionOptions,
) -> Result<()> {
    let mut state = State::MenuPrompt;
    loop {
        state = match state {
            State::MenuPrompt => {
                console.say(format_menu(options.use_colors))?;
                match console.prompt("Enter your choice from (1-3): ")? {
                    None => State::Exit,
                    Some(input) => match MenuChoice::parse(&input) {
                        MenuChoice::ManualEntry => State::ManualEntry,
                        MenuChoice::FileImport => State::FileImport,
                        MenuChoice::Exit => State::Exit,
                        MenuChoice::Invalid => {
                            debug!(choice = %input, "invalid menu choice");
                            console.say("Invalid choice. Please enter 1, 2 or 3.")?;
                            State::MenuPrompt
                        }
                    },
                }
            }
            State::ManualEntry => {
                let imported = manual::enter_marks(console)?;
                after_import(console, imported)?
            }
            State::FileImport => {
                let imported = file::import_marks(console, options.default_csv.as_deref())?;
                after_import(console, imported)?
            }
            State::Analyzing(store) => {
                run_analysis(console, &store, options.use_colors)?;
                State::MenuPrompt
            }
            State::Exit => {
                console.say("\nExiting GradeBook Analyzer. GoodBye!!")?;
                return Ok(());
            }
        };
        debug!(?state, "session transition");
    }
}

/// Empty stores go straight back to the menu; `None` means input ran out.
fn after_import<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    imported: Option<ScoreStore>,
) -> Result<State> {
    match imported {
        None => Ok(State::Exit),
        Some(store) if store.is_empty() => Ok(State::MenuPrompt),
        Some(store) => {
            console.say("\nData loaded successfully!! Proceeding to analysis..")?;
            Ok(State::Analyzing(store))
        }
    }
}

/// Analyse `store` and print the full report.
///
/// An empty store prints a cancellation notice and nothing else.
pub fn run_analysis<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    store: &ScoreStore,
    use_colors: bool,
) -> Result<Option<Analysis>> {
    let Some(analysis) = analyze(store) else {
        console.say("Analysis cancelled. No student data available.")?;
        return Ok(None);
    };

    debug!(
        students = analysis.summary.count,
        average = analysis.summary.average,
        passed = analysis.pass_fail.passed.len(),
        "analysis complete"
    );
    console.say("\n---Starting GradeBook Analysis---")?;
    console.say(format_report(&analysis, use_colors))?;
    Ok(Some(analysis))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    type TestConsole = Console<Cursor<Vec<u8>>, Vec<u8>>;

    fn console(input: &str) -> TestConsole {
        Console::new(Cursor::new(input.as_bytes().to_vec()), Vec::new())
    }

    fn run(input: &str) -> String {
        let mut console = console(input);
        run_session(&mut console, &SessionOptions::default()).unwrap();
        String::from_utf8(console.into_output()).unwrap()
    }

    #[test]
    fn test_menu_choice_parse() {
        assert_eq!(MenuChoice::parse("1"), MenuChoice::ManualEntry);
        assert_eq!(MenuChoice::parse(" 2 "), MenuChoice::FileImport);
        assert_eq!(MenuChoice::parse("3"), MenuChoice::Exit);
        assert_eq!(MenuChoice::parse("4"), MenuChoice::Invalid);
        assert_eq!(MenuChoice::parse(""), MenuChoice::Invalid);
        assert_eq!(MenuChoice::parse("exit"), MenuChoice::Invalid);
    }

    #[test]
    fn test_exit_immediately() {
        let output = run("3\n");
        assert_eq!(output.matches("GradeBook Analyzer CLI").count(), 1);
        assert!(output.ends_with("Exiting GradeBook Analyzer. GoodBye!!\n"));
    }

    #[test]
    fn test_invalid_choice_redisplays_menu() {
        let output = run("9\n3\n");
        assert!(output.contains("Invalid choice. Please enter 1, 2 or 3."));
        assert_eq!(output.matches("GradeBook Analyzer CLI").count(), 2);
    }

    #[test]
    fn test_end_of_input_exits_cleanly() {
        let output = run("");
        assert!(output.contains("GoodBye!!"));
    }

    #[test]
    fn test_manual_entry_then_analysis() {
        let output = run("1\nA\n95\nB\n85\nC\n75\nD\n65\nE\n30\ndone\n3\n");
        assert!(output.contains("Data loaded successfully!! Proceeding to analysis.."));
        assert!(output.contains("Total Students: 5"));
        assert!(output.contains("Class Average (Mean): 70.00"));
        assert!(output.contains("Names: A, B, C, D"));
        assert!(output.contains("Names: E"));
        assert_eq!(output.matches("GradeBook Analyzer CLI").count(), 2);
    }

    #[test]
    fn test_empty_manual_entry_skips_analysis() {
        let output = run("1\ndone\n3\n");
        assert!(output.contains("No marks entered."));
        assert!(!output.contains("Starting GradeBook Analysis"));
        assert!(!output.contains("Analysis cancelled"));
    }

    #[test]
    fn test_missing_file_skips_analysis() {
        let dir = tempfile::tempdir().unwrap();
        let input = format!("2\n{}\n3\n", dir.path().join("none.csv").display());
        let output = run(&input);
        assert!(output.contains("not found"));
        assert!(!output.contains("Starting GradeBook Analysis"));
        assert!(output.contains("GoodBye!!"));
    }

    #[test]
    fn test_end_of_input_during_entry_exits() {
        let output = run("1\nAda\n");
        assert!(!output.contains("Starting GradeBook Analysis"));
        assert!(output.contains("GoodBye!!"));
    }

    #[test]
    fn test_each_cycle_starts_with_fresh_store() {
        let output = run("1\nAda\n90\ndone\n1\nBen\n50\ndone\n3\n");
        assert_eq!(output.matches("Total Students: 1").count(), 2);
    }

    #[test]
    fn test_run_analysis_empty_store() {
        let mut console = console("");
        let analysis = run_analysis(&mut console, &ScoreStore::new(), false).unwrap();
        assert!(analysis.is_none());

        let output = String::from_utf8(console.into_output()).unwrap();
        assert_eq!(output, "Analysis cancelled. No student data available.\n");
    }

    #[test]
    fn test_run_analysis_prints_report() {
        let store: ScoreStore = [("A", 95), ("E", 30)].into_iter().collect();
        let mut console = console("");
        let analysis = run_analysis(&mut console, &store, false).unwrap().unwrap();
        assert_eq!(analysis.summary.count, 2);

        let output = String::from_utf8(console.into_output()).unwrap();
        assert!(output.contains("---Starting GradeBook Analysis---"));
        assert!(output.contains("FINAL CLASS RESULTS TABLE"));
    }
}
