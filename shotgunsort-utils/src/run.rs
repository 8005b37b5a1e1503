use std::io::Write;
use std::time::{Duration, Instant};

use rand::Rng;
use serde::Serialize;

use crate::config::RunConfig;
use crate::error::ShotgunError;
use crate::human_number::ONE_MILLION;
use crate::interrupt::StopFlag;
use crate::progress::{Check, ClosestAttempt, ProgressTracker};
use crate::reference_sort::{random_array, sorted_copy};
use crate::report::{self, ArrayRole, SEPARATOR};
use crate::shuffle::shotgun_shuffle;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Termination {
    Sorted,
    LimitReached,
    Interrupted,
}

/// Final state of a run, handed to the report and returned to the caller.
#[derive(Debug, Clone, Serialize)]
pub struct RunOutcome {
    pub termination: Termination,
    /// Attempt counter when the run ended. Only failed attempts increment it.
    pub attempts: u64,
    /// Number of shuffles actually performed.
    pub shuffles: u64,
    /// Working array at the end of the run.
    pub array: Vec<i32>,
    pub closest: Option<ClosestAttempt>,
    pub elapsed: Duration,
}

impl RunOutcome {
    pub fn attempts_per_sec(&self) -> f64 {
        let secs = self.elapsed.as_secs_f64();
        if secs > 0.0 {
            self.shuffles as f64 / secs
        } else {
            0.0
        }
    }
}

/// Shuffles an array until it matches its sorted target, the attempt limit
/// is hit or the stop flag is raised.
pub struct ShotgunSort<R: Rng> {
    config: RunConfig,
    rng: R,
    array: Vec<i32>,
    tracker: ProgressTracker,
    attempts: u64,
    stop: StopFlag,
}

impl<R: Rng> ShotgunSort<R> {
    /// Fills a fresh array of `config.array_len` random values.
    pub fn new(config: RunConfig, mut rng: R) -> Self {
        let array = random_array(config.array_len, &mut rng);
        Self::from_parts(config, array, rng)
    }

    /// Starts from a caller-supplied array instead of a random one.
    pub fn with_array(array: Vec<i32>, attempt_limit: Option<u64>, rng: R) -> Result<Self, ShotgunError> {
        let config = RunConfig::new(array.len() as i64, attempt_limit)?;
        Ok(Self::from_parts(config, array, rng))
    }

    fn from_parts(config: RunConfig, array: Vec<i32>, rng: R) -> Self {
        let target = sorted_copy(&array);
        Self {
            config,
            rng,
            array,
            tracker: ProgressTracker::new(target),
            attempts: 0,
            stop: StopFlag::new(),
        }
    }

    pub fn with_stop_flag(mut self, stop: StopFlag) -> Self {
        self.stop = stop;
        self
    }

    pub fn config(&self) -> &RunConfig {
        &self.config
    }

    pub fn array(&self) -> &[i32] {
        &self.array
    }

    pub fn target(&self) -> &[i32] {
        self.tracker.target()
    }

    pub fn run<O: Write, E: Write>(mut self, out: &mut O, err: &mut E) -> Result<RunOutcome, ShotgunError> {
        writeln!(out, "{}", self.config.banner())?;
        writeln!(out, "{}", report::render_array(ArrayRole::Unsorted, &self.array))?;
        writeln!(out, "{}", report::render_array(ArrayRole::Target, self.tracker.target()))?;
        writeln!(out, "{}", SEPARATOR)?;
        log::debug!("Initial array {:?}, target {:?}", self.array, self.tracker.target());

        let started = Instant::now();
        let termination = loop {
            if self.stop.should_stop() {
                break Termination::Interrupted;
            }

            if let Some(message) = report::loop_interval_message(self.attempts) {
                writeln!(out, "{}", message)?;
            }

            shotgun_shuffle(&mut self.array, &mut self.rng);

            match self.tracker.check(&self.array, self.attempts) {
                Check::Sorted => break Termination::Sorted,
                Check::Improved(_) => {
                    let human = self.attempts >= ONE_MILLION;
                    writeln!(
                        out,
                        "{}",
                        report::render_closest(self.tracker.closest(), self.config.array_len, human)
                    )?;
                }
                Check::Unchanged(_) => {}
            }

            match self.config.attempt_limit {
                Some(limit) if self.attempts >= limit => break Termination::LimitReached,
                _ => self.attempts += 1,
            }
        };

        let shuffles = match termination {
            Termination::Interrupted => self.attempts,
            Termination::Sorted | Termination::LimitReached => self.attempts + 1,
        };
        let outcome = RunOutcome {
            termination,
            attempts: self.attempts,
            shuffles,
            array: self.array,
            closest: self.tracker.closest().cloned(),
            elapsed: started.elapsed(),
        };

        if log::log_enabled!(log::Level::Debug) {
            if let Ok(json) = serde_json::to_string(&outcome) {
                log::debug!("Run outcome: {}", json);
            }
        }
        log::info!(
            "Run ended as {:?} after {} attempts ({:.0} attempts/sec)",
            outcome.termination,
            outcome.attempts,
            outcome.attempts_per_sec()
        );

        report::write_final_report(&outcome, self.config.array_len, out, err)?;
        Ok(outcome)
    }
}
