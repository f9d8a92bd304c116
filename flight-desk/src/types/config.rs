use std::env;
use std::path::PathBuf;

use chrono::Local;
use roster::squawk::DEFAULT_MAX_ATTEMPTS;

use super::desk_error::DeskError;

pub const USAGE: &str =
    "Usage: flight-desk [log_dir] [--seed <n>] [--max-attempts <n>] [--session <name>]";

/// Settings for one desk session, taken from the command line.
#[derive(Debug, PartialEq, Clone)]
pub struct DeskConfig {
    pub log_dir: PathBuf,
    pub session: String,
    pub seed: Option<u64>,
    pub max_attempts: usize,
}

impl DeskConfig {
    /// Builds the configuration from the arguments that follow the program name.
    ///
    /// The log directory defaults to the current directory and the session name
    /// to the local start time.
    pub fn from_args(args: &[String]) -> Result<Self, DeskError> {
        let mut log_dir = None;
        let mut session = None;
        let mut seed = None;
        let mut max_attempts = DEFAULT_MAX_ATTEMPTS;

        let mut args = args.iter();
        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--seed" => {
                    let value = flag_value(&mut args, "--seed")?;
                    seed = Some(value.parse::<u64>().map_err(|_| {
                        DeskError::InvalidConfig(format!("'{}' is not a valid seed", value))
                    })?);
                }
                "--max-attempts" => {
                    let value = flag_value(&mut args, "--max-attempts")?;
                    max_attempts = match value.parse::<usize>() {
                        Ok(n) if n > 0 => n,
                        _ => {
                            return Err(DeskError::InvalidConfig(format!(
                                "'{}' is not a positive number of attempts",
                                value
                            )))
                        }
                    };
                }
                "--session" => {
                    session = Some(flag_value(&mut args, "--session")?.to_string());
                }
                flag if flag.starts_with("--") => {
                    return Err(DeskError::InvalidConfig(format!(
                        "unknown option {}\n{}",
                        flag, USAGE
                    )))
                }
                path if log_dir.is_none() => log_dir = Some(PathBuf::from(path)),
                _ => return Err(DeskError::InvalidConfig(USAGE.to_string())),
            }
        }

        let log_dir = match log_dir {
            Some(dir) => dir,
            None => env::current_dir()?,
        };

        Ok(DeskConfig {
            log_dir,
            session: session.unwrap_or_else(|| Local::now().format("%Y%m%d_%H%M%S").to_string()),
            seed,
            max_attempts,
        })
    }
}

fn flag_value<'a>(
    args: &mut impl Iterator<Item = &'a String>,
    flag: &str,
) -> Result<&'a str, DeskError> {
    args.next()
        .map(String::as_str)
        .ok_or_else(|| DeskError::InvalidConfig(format!("{} needs a value\n{}", flag, USAGE)))
}
