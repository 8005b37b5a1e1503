//! Console rendering for arrays, progress messages and the final report.

use std::io::Write;

use crate::human_number::{HumanNumber, ONE_BILLION, ONE_MILLION, ONE_QUADRILLION, ONE_TRILLION};
use crate::progress::ClosestAttempt;
use crate::run::{RunOutcome, Termination};

pub const SEPARATOR: &str = "-------------------------------------------------------------";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArrayRole {
    Unsorted,
    Target,
    Sorted,
    Plain,
}

impl ArrayRole {
    fn label(&self) -> &'static str {
        match self {
            ArrayRole::Unsorted => "Unsorted Array:  ",
            ArrayRole::Target => "Target Array:    ",
            ArrayRole::Sorted => "Sorted Array:    ",
            ArrayRole::Plain => "",
        }
    }
}

fn bracketed(array: &[i32]) -> String {
    let mut out = String::from("[ ");
    for value in array {
        out.push_str(&value.to_string());
        out.push(' ');
    }
    out.push(']');
    out
}

pub fn render_array(role: ArrayRole, array: &[i32]) -> String {
    format!("{}{}", role.label(), bracketed(array))
}

/// `Closest attempt: [ 1 3 2 ] ( 1/3 ) (17)`, optionally followed by the
/// attempt index in human form.
pub fn render_closest(closest: Option<&ClosestAttempt>, array_len: usize, human: bool) -> String {
    let Some(closest) = closest else {
        return String::from("Closest attempt: none");
    };

    let mut line = format!(
        "Closest attempt: {} ({:>2}/{:<2}) ({})",
        bracketed(&closest.array),
        closest.match_count,
        array_len,
        closest.attempt
    );
    if human {
        line.push(' ');
        line.push_str(&HumanNumber::new(closest.attempt).parenthesized());
    }
    line
}

/// Milestone message for the attempt counter, if it sits exactly on one.
pub fn loop_interval_message(attempts: u64) -> Option<String> {
    if attempts == 0 {
        return None;
    }
    if attempts < ONE_BILLION && attempts % (100 * ONE_MILLION) == 0 {
        Some(format!("Passing {} million attempts...", attempts / ONE_MILLION))
    } else if attempts < ONE_TRILLION && attempts % ONE_BILLION == 0 {
        Some(format!("Passing {} billion attempts...", attempts / ONE_BILLION))
    } else if attempts < ONE_QUADRILLION && attempts % ONE_TRILLION == 0 {
        Some(format!("Passing {} trillion attempts...", attempts / ONE_TRILLION))
    } else {
        None
    }
}

fn closest_summary(outcome: &RunOutcome) -> String {
    let match_count = outcome.closest.as_ref().map_or(0, |c| c.match_count);
    format!(
        "The closest attempt had {} elements in ascending order",
        match_count
    )
}

pub fn render_stats(outcome: &RunOutcome) -> String {
    format!(
        "Shuffled for {:.2?} (~{:.0} attempts/sec)",
        outcome.elapsed,
        outcome.attempts_per_sec()
    )
}

/// Writes the report for whichever way the run ended.
///
/// Interrupt messages go to `err`; everything else goes to `out`.
pub fn write_final_report<O: Write, E: Write>(
    outcome: &RunOutcome,
    array_len: usize,
    out: &mut O,
    err: &mut E,
) -> std::io::Result<()> {
    writeln!(out, "{}", SEPARATOR)?;
    let human = HumanNumber::new(outcome.attempts).parenthesized();

    match outcome.termination {
        Termination::Sorted => {
            writeln!(
                out,
                "Array successfully sorted after {} attempts! {}",
                outcome.attempts, human
            )?;
            writeln!(out, "{}", render_array(ArrayRole::Sorted, &outcome.array))?;
        }
        Termination::LimitReached => {
            writeln!(
                out,
                "Array not sorted after {} attempts! {}",
                outcome.attempts, human
            )?;
            writeln!(out, "{}", closest_summary(outcome))?;
            writeln!(
                out,
                "{}",
                render_closest(outcome.closest.as_ref(), array_len, true)
            )?;
        }
        Termination::Interrupted => {
            out.flush()?;
            writeln!(err, "Sorting attempt cancelled after {} attempts", outcome.attempts)?;
            writeln!(err, "{}", closest_summary(outcome))?;
            err.flush()?;
            writeln!(
                out,
                "{}",
                render_closest(outcome.closest.as_ref(), array_len, true)
            )?;
        }
    }

    writeln!(out, "{}", render_stats(outcome))?;
    out.flush()
}
