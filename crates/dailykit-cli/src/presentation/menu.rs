//! Menu header and footer formatting.

use std::io::{BufRead, Write};

use anyhow::Result;

use crate::utils::Prompter;

/// Version shown in app headers.
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Print the blank separator line, the app header and the menu options.
pub fn show_menu<R: BufRead, W: Write>(
    io: &mut Prompter<R, W>,
    app_name: &str,
    options: &[&str],
) -> Result<()> {
    io.say("")?;
    io.say(format!("{app_name} v{APP_VERSION}"))?;
    io.say("Please make a choice from the menu: ")?;
    for option in options {
        io.say(option)?;
    }
    Ok(())
}

/// Closing message printed on exit.
pub fn farewell(app_name: &str) -> String {
    format!("Thank you for using {app_name} v{APP_VERSION}")
}
