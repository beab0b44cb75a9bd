//! Interactive habit tracker.

use std::io::{BufRead, Write};

use anyhow::Result;
use chrono::{Local, NaiveDate};
use dailykit_core::{CoreError, HabitAction, HabitService, LaunchTarget, MarkResult};
use tracing::debug;

use crate::bootstrap::CliConfig;
use crate::presentation::{farewell, show_menu};
use crate::utils::Prompter;

const APP_NAME: &str = LaunchTarget::HabitTracker.display_name();
const NOT_FOUND: &str = "No habit found with that ID.";
const INVALID_ID: &str = "Please enter a valid ID.";

/// Execute the habits command against stdin/stdout.
pub fn execute(config: &CliConfig) -> Result<()> {
    let data_dir = config.data_dir()?;
    debug!("Habit data in {}", data_dir.display());

    let mut service = CliConfig::habit_service(&data_dir)?;
    run_session(&mut service, &mut Prompter::stdio(), || {
        Local::now().date_naive()
    })
}

/// Run the menu loop until the user exits or input ends.
///
/// `today` is consulted on every action so a session left open past
/// midnight marks and counts against the new day.
pub fn run_session<R: BufRead, W: Write>(
    service: &mut HabitService,
    io: &mut Prompter<R, W>,
    today: impl Fn() -> NaiveDate,
) -> Result<()> {
    loop {
        show_menu(io, APP_NAME, &HabitAction::MENU)?;

        let Some(choice) = io.prompt("Choice: ")? else {
            return Ok(());
        };
        let Some(action) = HabitAction::parse(&choice) else {
            io.say("Invalid option, please try again.")?;
            continue;
        };

        match action {
            HabitAction::Add => {
                let name = io
                    .prompt("Please enter the habit's name: ")?
                    .unwrap_or_default();
                match service.add(&name, today()) {
                    Ok(Some(_)) => {}
                    Ok(None) => io.say("No habit added, please enter a name.")?,
                    Err(CoreError::Validation(msg)) => io.say(msg)?,
                    Err(err) => return Err(err.into()),
                }
            }
            HabitAction::Delete => {
                if service.book().is_empty() {
                    io.say("You have no added habits.")?;
                    continue;
                }
                view(service, io, today())?;
                let Some(id) = prompt_id(io, "Enter the habit ID to remove: ")? else {
                    continue;
                };
                match service.delete(id)? {
                    Some(removed) => io.say(format!("Removed: {}", removed.name))?,
                    None => io.say(NOT_FOUND)?,
                }
            }
            HabitAction::View => view(service, io, today())?,
            HabitAction::Clear => {
                if io.confirm(
                    "Are you sure you want to clear ALL current habits? You can't undo this action! Y/N: ",
                )? {
                    service.clear()?;
                    io.say("Your current habits have been cleared.")?;
                }
            }
            HabitAction::Mark => {
                if service.book().is_empty() {
                    io.say("You have no habits to mark")?;
                    continue;
                }
                let day = today();
                view(service, io, day)?;
                let Some(id) = prompt_id(io, "Please enter the habit's ID: ")? else {
                    continue;
                };
                let message = match service.mark_complete(id, day)? {
                    MarkResult::Marked => "Marked completed for today.",
                    MarkResult::AlreadyMarked => "Already marked completed today.",
                    MarkResult::NotFound => NOT_FOUND,
                };
                io.say(message)?;
            }
            HabitAction::Exit => {
                io.say(farewell(APP_NAME))?;
                return Ok(());
            }
        }
    }
}

fn view<R: BufRead, W: Write>(
    service: &HabitService,
    io: &mut Prompter<R, W>,
    today: NaiveDate,
) -> Result<()> {
    if service.book().is_empty() {
        return io.say("You are not currently tracking any habits.");
    }
    for row in service.summaries(today) {
        io.say(format!("({}) {} - Streak: {}", row.id, row.name, row.streak))?;
    }
    Ok(())
}

/// Ask for a habit id.
///
/// Returns `None` after printing the reason when the answer is not an
/// integer, or is an integer no habit can have (negative or too large).
fn prompt_id<R: BufRead, W: Write>(io: &mut Prompter<R, W>, prompt: &str) -> Result<Option<u32>> {
    let raw = io.prompt(prompt)?.unwrap_or_default();
    let digits = raw.strip_prefix(['+', '-']).unwrap_or(&raw);
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        io.say(INVALID_ID)?;
        return Ok(None);
    }

    match raw.parse::<u32>() {
        Ok(id) => Ok(Some(id)),
        Err(_) => {
            io.say(NOT_FOUND)?;
            Ok(None)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;
    use tempfile::TempDir;

    fn day() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 7, 4).unwrap()
    }

    fn run(dir: &TempDir, script: &str) -> String {
        let mut service = CliConfig::habit_service(dir.path()).unwrap();
        let mut io = Prompter::new(Cursor::new(script.as_bytes().to_vec()), Vec::new());
        run_session(&mut service, &mut io, day).unwrap();
        String::from_utf8(io.output().clone()).unwrap()
    }

    #[test]
    fn add_mark_and_view_streak() {
        let dir = TempDir::new().unwrap();
        let out = run(&dir, "1\nRead\n5\n1\n5\n1\n3\n6\n");

        assert!(out.contains("(1) Read - Streak: 0"));
        assert!(out.contains("Marked completed for today."));
        assert!(out.contains("Already marked completed today."));
        assert!(out.contains("(1) Read - Streak: 1"));
        assert!(out.contains("Thank you for using Habit Tracker v"));
    }

    #[test]
    fn delete_paths() {
        let dir = TempDir::new().unwrap();
        let out = run(&dir, "delete\nadd\nWalk\n2\nabc\n2\n9\n2\n1\n3\nexit\n");

        assert!(out.contains("You have no added habits."));
        assert!(out.contains(INVALID_ID));
        assert!(out.contains(NOT_FOUND));
        assert!(out.contains("Removed: Walk"));
        assert!(out.contains("You are not currently tracking any habits."));
    }

    #[test]
    fn integer_ids_outside_range_are_not_found() {
        let dir = TempDir::new().unwrap();
        let out = run(&dir, "1\nRead\n5\n-1\n2\n99999999999\n5\n+1\n6\n");

        assert!(!out.contains(INVALID_ID));
        assert_eq!(out.matches(NOT_FOUND).count(), 2);
        assert!(out.contains("Marked completed for today."));
    }

    #[test]
    fn add_reports_exhausted_ids_and_keeps_running() {
        let dir = TempDir::new().unwrap();
        std::fs::write(
            dir.path().join("habits.json"),
            r#"[{"id": 4294967295, "name": "Read", "created on": "2024-07-01"}]"#,
        )
        .unwrap();

        let out = run(&dir, "1\nWalk\n3\n6\n");

        assert!(out.contains("Cannot add a habit: no ID is available after 4294967295."));
        assert!(out.contains("(4294967295) Read - Streak: 0"));
        assert!(out.contains("Thank you for using Habit Tracker v"));
    }

    #[test]
    fn mark_on_empty_book() {
        let dir = TempDir::new().unwrap();
        let out = run(&dir, "mark complete\n6\n");
        assert!(out.contains("You have no habits to mark"));
    }

    #[test]
    fn clear_persists_after_confirmation() {
        let dir = TempDir::new().unwrap();
        run(&dir, "1\nRead\n1\nWalk\n4\ny\n6\n");
        let reopened = CliConfig::habit_service(dir.path()).unwrap();
        assert!(reopened.book().is_empty());
    }

    #[test]
    fn end_of_input_exits_quietly() {
        let dir = TempDir::new().unwrap();
        let out = run(&dir, "1\nRead\n");
        assert!(!out.contains("Thank you for using"));
        let reopened = CliConfig::habit_service(dir.path()).unwrap();
        assert_eq!(reopened.book().len(), 1);
    }
}
