//! Interactive to-do list.

use std::io::{BufRead, Write};

use anyhow::Result;
use dailykit_core::{LaunchTarget, TodoAction, TodoService};
use tracing::debug;

use crate::bootstrap::CliConfig;
use crate::presentation::{farewell, show_menu};
use crate::utils::Prompter;

const APP_NAME: &str = LaunchTarget::TodoList.display_name();
const EMPTY_LIST: &str = "Your To-Do list is empty";

/// Execute the todo command against stdin/stdout.
pub fn execute(config: &CliConfig) -> Result<()> {
    let data_dir = config.data_dir()?;
    debug!("To-do data in {}", data_dir.display());

    let mut service = CliConfig::todo_service(&data_dir)?;
    run_session(&mut service, &mut Prompter::stdio())
}

/// Run the menu loop until the user exits or input ends.
pub fn run_session<R: BufRead, W: Write>(
    service: &mut TodoService,
    io: &mut Prompter<R, W>,
) -> Result<()> {
    loop {
        show_menu(io, APP_NAME, &TodoAction::MENU)?;

        let Some(choice) = io.prompt("Choice: ")? else {
            return Ok(());
        };
        let Some(action) = TodoAction::parse(&choice) else {
            io.say("Invalid option, please try again.")?;
            continue;
        };

        match action {
            TodoAction::Add => add(service, io)?,
            TodoAction::Remove => remove(service, io)?,
            TodoAction::View => view(service, io)?,
            TodoAction::Clear => {
                if io.confirm(
                    "Are you sure you want to clear the To-Do list? You can't undo this action! Y/N: ",
                )? {
                    service.clear()?;
                    io.say("Your To-Do list has been cleared.")?;
                }
            }
            TodoAction::Exit => {
                io.say(farewell(APP_NAME))?;
                return Ok(());
            }
        }
    }
}

fn add<R: BufRead, W: Write>(service: &mut TodoService, io: &mut Prompter<R, W>) -> Result<()> {
    let raw = io.prompt("Please enter new task: ")?.unwrap_or_default();
    match service.add(&raw)? {
        Some(task) => io.say(format!("{task} has been added to your To-Do List.")),
        None => io.say("No new task added, please try again."),
    }
}

fn view<R: BufRead, W: Write>(service: &TodoService, io: &mut Prompter<R, W>) -> Result<()> {
    if service.tasks().is_empty() {
        return io.say(EMPTY_LIST);
    }
    for (position, task) in service.tasks().numbered() {
        io.say(format!("{position}) {task}"))?;
    }
    Ok(())
}

fn remove<R: BufRead, W: Write>(
    service: &mut TodoService,
    io: &mut Prompter<R, W>,
) -> Result<()> {
    if service.tasks().is_empty() {
        return io.say(EMPTY_LIST);
    }
    view(service, io)?;

    let raw = io
        .prompt("Which number would you like removed?")?
        .unwrap_or_default();
    let Ok(position) = raw.parse::<usize>() else {
        return io.say("Please enter a valid number");
    };

    match service.remove(position)? {
        Some(task) => io.say(format!("'{task}' has been removed.")),
        None => io.say("Invalid number. Please try again."),
    }
}
