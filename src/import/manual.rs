use anyhow::Result;
use std::io::{BufRead, Write};
use tracing::debug;

use super::score::{parse_score, ScoreRejection, UpperBound};
use crate::console::Console;
use crate::store::ScoreStore;

/// Typing this as a student name ends entry (case-insensitive)
pub const DONE_KEYWORD: &str = "done";

/// Collect marks interactively until the user types `done`.
///
/// Returns `None` if input runs out before `done`; whatever was entered so
/// far is discarded in that case.
pub fn enter_marks<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
) -> Result<Option<ScoreStore>> {
    let mut store = ScoreStore::new();
    console.say("\n---Manual Data Entry ---")?;

    loop {
        let Some(name) = console.prompt("Enter student name (or type 'done' to finish): ")? else {
            return Ok(None);
        };
        if name.eq_ignore_ascii_case(DONE_KEYWORD) {
            break;
        }
        if name.is_empty() {
            console.say("Student name cannot be empty.")?;
            continue;
        }

        let Some(score) = prompt_score(console, &name)? else {
            return Ok(None);
        };
        if let Some(previous) = store.insert(name.clone(), score) {
            debug!(student = %name, previous, score, "overwrote existing mark");
        }
    }

    if store.is_empty() {
        console.say("\nNo marks entered.")?;
    } else {
        console.say(format!(
            "\nSuccessfully stored marks for {} student(s).",
            store.len()
        ))?;
    }
    Ok(Some(store))
}

/// Ask for one student's mark until a value in 0..=100 is given
fn prompt_score<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    name: &str,
) -> Result<Option<u8>> {
    loop {
        let Some(input) = console.prompt(&format!("Enter marks for {}: ", name))? else {
            return Ok(None);
        };
        match parse_score(&input, UpperBound::Inclusive) {
            Ok(score) => return Ok(Some(score)),
            Err(ScoreRejection::OutOfRange(_)) => {
                console.say("Marks must be between 0 and 100.")?;
            }
            Err(ScoreRejection::NotANumber(_)) => {
                console.say("Invalid input. Please enter valid marks.")?;
            }
        }
    }
}
