use anyhow::Result;
use clap::Parser;
use std::io;

use shotgunsort_utils::config::DEFAULT_ARRAY_LEN;
use shotgunsort_utils::{RunConfig, ShotgunSort, StopFlag};

#[derive(Debug, Parser)]
pub struct Opts {
    /// Number of elements in the array, from 2 to 100
    #[arg(allow_negative_numbers = true, default_value_t = DEFAULT_ARRAY_LEN as i64)]
    array_length: i64,

    /// Give up after this many attempts and show the closest one. Unlimited if omitted or -1.
    #[arg(allow_negative_numbers = true)]
    attempt_limit: Option<i64>,
}

pub fn run(opts: &Opts) -> Result<()> {
    // Bad lengths are reported but still exit with status 0.
    let attempt_limit = RunConfig::attempt_limit_from_signed(opts.attempt_limit);
    let config = match RunConfig::new(opts.array_length, attempt_limit) {
        Ok(config) => config,
        Err(e) if e.is_config_error() => {
            eprintln!("{}", e);
            return Ok(());
        }
        Err(e) => return Err(e.into()),
    };

    let stop = StopFlag::install().unwrap_or_else(|e| {
        log::warn!("{}; Ctrl-C will end the process without a report", e);
        StopFlag::new()
    });

    let sorter = ShotgunSort::new(config, rand::thread_rng()).with_stop_flag(stop);
    let outcome = sorter.run(&mut io::stdout().lock(), &mut io::stderr().lock())?;
    log::debug!("Finished with {:?}", outcome.termination);

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_positional_args() {
        let opts = Opts::try_parse_from(["shotgunsort"]).unwrap();
        assert_eq!(opts.array_length, 5);
        assert_eq!(opts.attempt_limit, None);

        let opts = Opts::try_parse_from(["shotgunsort", "8", "1000"]).unwrap();
        assert_eq!(opts.array_length, 8);
        assert_eq!(opts.attempt_limit, Some(1000));

        let opts = Opts::try_parse_from(["shotgunsort", "-3"]).unwrap();
        assert_eq!(opts.array_length, -3);
    }

    #[test]
    fn test_invalid_length_exits_cleanly() {
        let opts = Opts::try_parse_from(["shotgunsort", "1"]).unwrap();
        assert!(run(&opts).is_ok());

        let opts = Opts::try_parse_from(["shotgunsort", "101", "10"]).unwrap();
        assert!(run(&opts).is_ok());
    }

    #[test]
    fn test_negative_limits_run_cleanly() {
        let opts = Opts::try_parse_from(["shotgunsort", "5", "-1"]).unwrap();
        assert_eq!(opts.attempt_limit, Some(-1));
        assert!(run(&opts).is_ok());

        let opts = Opts::try_parse_from(["shotgunsort", "5", "-3"]).unwrap();
        assert_eq!(opts.attempt_limit, Some(-3));
        assert!(run(&opts).is_ok());
    }
}
