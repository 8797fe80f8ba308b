//! Line-based interactive prompts.
//!
//! [`Prompter`] reads answers from any [`BufRead`] and writes questions to any
//! [`Write`], so sessions can be driven from a terminal or from a script.
//! End of input is reported as `None` and treated as "stop".

use std::io::{BufRead, Write};
use std::str::FromStr;

use anyhow::Result;
use tracing::debug;

use crate::filters::{City, DayFilter, MonthFilter};
use crate::loader::Dataset;
use crate::output::write_raw_rows;

pub const CITY_PROMPT: &str = "Please enter one of the following cities: Chicago - New York City - Washington";
pub const MONTH_PROMPT: &str =
    "Please choose a month (January - June) to filter by, or \"all\" for no filter";
pub const DAY_PROMPT: &str = "Please choose a day of the week to filter by, or \"all\" for no filter";
pub const INVALID_INPUT: &str = "Invalid input, try again";

pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Prompter { input, output }
    }

    pub fn output(&mut self) -> &mut W {
        &mut self.output
    }

    pub fn into_output(self) -> W {
        self.output
    }

    fn read_line(&mut self) -> Result<Option<String>> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    /// Asks `question` until the answer parses as `T`.
    pub fn ask<T: FromStr>(&mut self, question: &str) -> Result<Option<T>> {
        loop {
            writeln!(self.output, "{question}")?;
            self.output.flush()?;

            let Some(answer) = self.read_line()? else {
                return Ok(None);
            };
            match answer.parse() {
                Ok(value) => return Ok(Some(value)),
                Err(_) => {
                    debug!(answer = %answer, "Rejected prompt answer");
                    writeln!(self.output, "{INVALID_INPUT}")?;
                }
            }
        }
    }

    /// Asks for city, month and day in turn. `None` if input ends first.
    pub fn ask_filters(&mut self) -> Result<Option<(City, MonthFilter, DayFilter)>> {
        let Some(city) = self.ask::<City>(CITY_PROMPT)? else {
            return Ok(None);
        };
        let Some(month) = self.ask::<MonthFilter>(MONTH_PROMPT)? else {
            return Ok(None);
        };
        let Some(day) = self.ask::<DayFilter>(DAY_PROMPT)? else {
            return Ok(None);
        };
        Ok(Some((city, month, day)))
    }

    /// True only when the answer is "yes", in any case.
    pub fn confirm(&mut self, question: &str) -> Result<bool> {
        writeln!(self.output, "{question}")?;
        self.output.flush()?;
        Ok(self
            .read_line()?
            .is_some_and(|answer| answer.eq_ignore_ascii_case("yes")))
    }

    /// Shows `page_size` raw rows at a time for as long as the user answers
    /// "yes" and rows remain. Returns the number of rows shown.
    pub fn browse_raw(&mut self, ds: &Dataset, page_size: usize) -> Result<usize> {
        let page_size = page_size.max(1);
        let mut offset = 0;

        if !self.confirm(&format!("Would you like to see {page_size} rows of raw data? Enter yes or no."))? {
            return Ok(0);
        }

        loop {
            let page = ds.page(offset, page_size);
            if page.is_empty() {
                writeln!(self.output, "No more rows to display.")?;
                break;
            }
            write_raw_rows(&mut self.output, ds.schema(), page, offset == 0)?;
            offset += page.len();

            if offset >= ds.len() {
                writeln!(self.output, "No more rows to display.")?;
                break;
            }
            if !self.confirm(&format!("Do you want {page_size} more?"))? {
                break;
            }
        }

        Ok(offset)
    }
}
