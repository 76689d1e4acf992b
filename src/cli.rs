use log::warn;

use crate::constants::{DEFAULT_PREVIEW_DELAY_MS, SCATTER_DEFAULT_COUNT, SCATTER_DEFAULT_SEED};
use crate::error::CliError;
use crate::scenario::ScenarioKind;

pub const USAGE: &str = "\
usage: point-sim [torus|bounce|orbit|scatter] [options]

options:
  --ticks N      override the scenario's tick bound
  --seed N       seed for the scatter scenario (default 23)
  --count N      number of scatter points (default 5)
  --preview      draw the run in the terminal instead of printing records
  --delay-ms N   preview frame delay (default 30)
  --help         show this message";

#[derive(Debug, PartialEq)]
pub struct CliOptions {
    pub scenario: ScenarioKind,
    pub ticks: Option<u64>,
    pub seed: u64,
    pub count: usize,
    pub preview: bool,
    pub delay_ms: u64,
    pub help: bool,
}

impl Default for CliOptions {
    fn default() -> Self {
        CliOptions {
            scenario: ScenarioKind::Torus,
            ticks: None,
            seed: SCATTER_DEFAULT_SEED,
            count: SCATTER_DEFAULT_COUNT,
            preview: false,
            delay_ms: DEFAULT_PREVIEW_DELAY_MS,
            help: false,
        }
    }
}

fn parse_value(flag: &'static str, value: Option<&String>) -> Result<u64, CliError> {
    let value = value.ok_or(CliError::MissingValue(flag))?;
    value.parse::<u64>().map_err(|_| CliError::InvalidValue { flag, value: value.clone() })
}

/// Parses everything after the program name.
pub fn parse_args(args: &[String]) -> Result<CliOptions, CliError> {
    let mut options = CliOptions::default();
    let mut iter = args.iter();
    let mut scenario_seen = false;

    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--ticks" => options.ticks = Some(parse_value("--ticks", iter.next())?),
            "--seed" => options.seed = parse_value("--seed", iter.next())?,
            "--count" => options.count = parse_value("--count", iter.next())? as usize,
            "--delay-ms" => options.delay_ms = parse_value("--delay-ms", iter.next())?,
            "--preview" => options.preview = true,
            "--help" | "-h" => options.help = true,
            other if other.starts_with('-') => return Err(CliError::UnknownOption(other.to_string())),
            name => {
                if scenario_seen {
                    warn!("Ignoring extra scenario argument '{}'", name);
                    continue;
                }
                options.scenario = ScenarioKind::from_name(name)
                    .ok_or_else(|| CliError::UnknownScenario(name.to_string()))?;
                scenario_seen = true;
            }
        }
    }

    if options.scenario != ScenarioKind::Scatter && options.count != SCATTER_DEFAULT_COUNT {
        warn!("--count only applies to the scatter scenario");
    }
    Ok(options)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_defaults_to_torus() {
        assert_eq!(parse_args(&[]).unwrap(), CliOptions::default());
    }

    #[test]
    fn test_scenario_and_flags() {
        let options = parse_args(&args(&["scatter", "--seed", "9", "--count", "12", "--ticks", "50"])).unwrap();
        assert_eq!(options.scenario, ScenarioKind::Scatter);
        assert_eq!(options.seed, 9);
        assert_eq!(options.count, 12);
        assert_eq!(options.ticks, Some(50));
        assert!(!options.preview);
    }

    #[test]
    fn test_flags_before_scenario() {
        let options = parse_args(&args(&["--preview", "--delay-ms", "5", "bounce"])).unwrap();
        assert_eq!(options.scenario, ScenarioKind::Bounce);
        assert!(options.preview);
        assert_eq!(options.delay_ms, 5);
    }

    #[test]
    fn test_errors() {
        assert_eq!(parse_args(&args(&["circle"])), Err(CliError::UnknownScenario("circle".into())));
        assert_eq!(parse_args(&args(&["--fast"])), Err(CliError::UnknownOption("--fast".into())));
        assert_eq!(parse_args(&args(&["--ticks"])), Err(CliError::MissingValue("--ticks")));
        assert_eq!(
            parse_args(&args(&["--ticks", "-3"])),
            Err(CliError::InvalidValue { flag: "--ticks", value: "-3".into() })
        );
    }
}
