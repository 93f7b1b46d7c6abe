//! Command line and environment settings.

use std::ffi::OsString;
use std::path::PathBuf;

use thiserror::Error;

use crate::food::DEFAULT_MARGIN;

pub const USAGE: &str = "\
usage: snake [--debug] [--seed <n>] [--border <n>] [--margin <n>] [--log <file>]

Terminal snake game. Arrow keys or h/j/k/l to move, q or Ctrl+C to quit.

options:
  --debug        show the game state on the top line, log at debug level
  --seed <n>     seed the food placement
  --border <n>   keep the snake <n> cells away from the screen edges
  --margin <n>   keep food <n> cells away from the screen edges (default 5)
  --log <file>   write a log to <file>
  -h, --help     print this help

Set NO_COLOR to play without colors. Have fun!";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub debug: bool,
    pub color: bool,
    pub seed: Option<u64>,
    pub log_file: Option<PathBuf>,
    pub border: u16,
    pub food_margin: u16,
    pub help: bool,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            debug: false,
            color: true,
            seed: None,
            log_file: None,
            border: 0,
            food_margin: DEFAULT_MARGIN as u16,
            help: false,
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("unknown option: {0}")]
    UnknownOption(String),

    #[error("option {0} needs a value")]
    MissingValue(&'static str),

    #[error("invalid value for {option}: {value}")]
    InvalidNumber { option: &'static str, value: String },
}

impl Config {
    /// Reads the process arguments and `NO_COLOR`.
    pub fn from_env() -> Result<Self, ConfigError> {
        let mut config = Config::from_args(std::env::args().skip(1))?;
        config.color = color_enabled(std::env::var_os("NO_COLOR"));
        Ok(config)
    }

    /// Parses arguments, not including the program name.
    pub fn from_args<I, S>(args: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut config = Config::default();
        let mut args = args.into_iter().map(Into::<String>::into);

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--debug" => config.debug = true,
                "-h" | "--help" => config.help = true,
                "--seed" => {
                    config.seed = Some(number(args.next(), "--seed")?);
                }
                "--border" => {
                    config.border = number(args.next(), "--border")?;
                }
                "--margin" => {
                    config.food_margin = number(args.next(), "--margin")?;
                }
                "--log" => {
                    let path = args.next().ok_or(ConfigError::MissingValue("--log"))?;
                    config.log_file = Some(PathBuf::from(path));
                }
                other => return Err(ConfigError::UnknownOption(other.to_string())),
            }
        }

        Ok(config)
    }
}

/// Colors stay on unless `NO_COLOR` is set to something non-empty.
pub fn color_enabled(no_color: Option<OsString>) -> bool {
    no_color.map_or(true, |v| v.is_empty())
}

fn number<T: std::str::FromStr>(raw: Option<String>, option: &'static str) -> Result<T, ConfigError> {
    let value = raw.ok_or(ConfigError::MissingValue(option))?;
    value.parse().map_err(|_| ConfigError::InvalidNumber { option, value })
}
