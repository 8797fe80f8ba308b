//! The interactive explore-and-restart loop.

use std::io::{BufRead, Write};
use std::path::Path;

use anyhow::Result;
use tracing::{error, info};

use crate::loader::load_filtered;
use crate::output::{print_pretty, write_report};
use crate::prompt::Prompter;
use crate::stats::TripReport;

pub const RESTART_PROMPT: &str = "\nWould you like to restart? Enter yes or no.";
pub const FAREWELL: &str = "Thanks for exploring bikeshare data!";

/// Runs prompt → load → report → raw rows cycles until the user declines to
/// restart or input ends. Returns the number of completed cycles.
///
/// A failed load is reported and the user is offered a restart; it does not
/// end the session.
pub fn run_session<R: BufRead, W: Write>(
    prompter: &mut Prompter<R, W>,
    data_dir: &Path,
    page_size: usize,
) -> Result<usize> {
    let mut cycles = 0;

    loop {
        let Some((city, month, day)) = prompter.ask_filters()? else {
            break;
        };
        info!(city = %city, month = %month, day = %day, "Filters selected");

        match load_filtered(data_dir, city, month, day) {
            Ok(ds) => {
                let report = TripReport::from_dataset(&ds, month, day);
                print_pretty(&report);
                write_report(prompter.output(), &report)?;
                prompter.browse_raw(&ds, page_size)?;
            }
            Err(e) => {
                error!(error = %e, "Failed to load trips");
                writeln!(prompter.output(), "Could not load trip data: {e}")?;
            }
        }
        cycles += 1;

        if !prompter.confirm(RESTART_PROMPT)? {
            break;
        }
    }

    writeln!(prompter.output(), "{FAREWELL}")?;
    Ok(cycles)
}
