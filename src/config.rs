//! Command-line arguments and the run configuration built from them.

use crate::error::StretchError;
use crate::stretcher::DEFAULT_OUTPUT_LENGTH;
use clap::Parser;
use std::fmt;

/// Smallest output length the command line accepts.
pub const MIN_OUTPUT_LENGTH: usize = 10;

/// Raw command-line arguments.
#[derive(Debug, Clone, Parser)]
#[command(name = "passtretcher", version)]
#[command(about = "Transforms a string into a long, seemingly random but deterministic version.", long_about = None)]
pub struct Cli {
    /// Input string to be transformed (use quotes if it contains spaces)
    #[arg(short = 's', long = "string")]
    pub string: Option<String>,

    /// Desired length of output string
    #[arg(
        short = 'l',
        long = "length",
        default_value_t = DEFAULT_OUTPUT_LENGTH as i64,
        allow_negative_numbers = true
    )]
    pub length: i64,

    /// Show additional processing information
    #[arg(short = 'v', long)]
    pub verbose: bool,
}

/// Non-fatal adjustments made while validating the arguments.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigWarning {
    /// The requested length was below [`MIN_OUTPUT_LENGTH`] and was raised.
    LengthAdjusted {
        /// Length as given on the command line.
        requested: i64,
    },
}

impl fmt::Display for ConfigWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigWarning::LengthAdjusted { .. } => write!(
                f,
                "Warning: Minimum length adjusted to {} characters",
                MIN_OUTPUT_LENGTH
            ),
        }
    }
}

/// Validated configuration for one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StretchConfig {
    /// Non-empty string to transform.
    pub input: String,
    /// Output length, at least [`MIN_OUTPUT_LENGTH`].
    pub output_length: usize,
    /// Print the processing banner and result label.
    pub verbose: bool,
}

impl StretchConfig {
    /// Validates parsed arguments into a run configuration.
    ///
    /// # Returns
    /// The configuration plus any warnings to report before running.
    ///
    /// # Errors
    /// Returns [`StretchError::MissingInput`] if `--string` is absent or empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use clap::Parser;
    /// use passtretcher::config::{Cli, StretchConfig};
    ///
    /// let cli = Cli::parse_from(["passtretcher", "-s", "hello", "-l", "5"]);
    /// let (config, warnings) = StretchConfig::from_cli(cli).unwrap();
    /// assert_eq!(config.output_length, 10);
    /// assert_eq!(warnings.len(), 1);
    /// ```
    pub fn from_cli(cli: Cli) -> Result<(Self, Vec<ConfigWarning>), StretchError> {
        let input = match cli.string {
            Some(s) if !s.is_empty() => s,
            _ => return Err(StretchError::MissingInput),
        };

        let mut warnings = Vec::new();
        let output_length = if cli.length < MIN_OUTPUT_LENGTH as i64 {
            warnings.push(ConfigWarning::LengthAdjusted {
                requested: cli.length,
            });
            MIN_OUTPUT_LENGTH
        } else {
            usize::try_from(cli.length).unwrap_or(usize::MAX)
        };

        Ok((
            StretchConfig {
                input,
                output_length,
                verbose: cli.verbose,
            },
            warnings,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("passtretcher").chain(args.iter().copied()))
            .unwrap()
    }

    #[test]
    fn test_defaults() {
        let cli = parse(&["-s", "hello"]);
        assert_eq!(cli.length, 1024);
        assert!(!cli.verbose);

        let (config, warnings) = StretchConfig::from_cli(cli).unwrap();
        assert_eq!(
            config,
            StretchConfig {
                input: "hello".to_string(),
                output_length: 1024,
                verbose: false,
            }
        );
        assert!(warnings.is_empty());
    }

    #[test]
    fn test_long_flags() {
        let cli = parse(&["--string", "two words", "--length", "64", "--verbose"]);
        let (config, _) = StretchConfig::from_cli(cli).unwrap();
        assert_eq!(config.input, "two words");
        assert_eq!(config.output_length, 64);
        assert!(config.verbose);
    }

    #[test]
    fn test_missing_string() {
        let cli = parse(&["-l", "20"]);
        assert_eq!(
            StretchConfig::from_cli(cli).unwrap_err(),
            StretchError::MissingInput
        );
    }

    #[test]
    fn test_empty_string_is_missing() {
        let cli = parse(&["-s", ""]);
        assert_eq!(
            StretchConfig::from_cli(cli).unwrap_err(),
            StretchError::MissingInput
        );
    }

    #[test]
    fn test_length_floor() {
        for requested in [-5i64, 0, 1, 9] {
            let length = requested.to_string();
            let cli = parse(&["-s", "x", "-l", length.as_str()]);
            let (config, warnings) = StretchConfig::from_cli(cli).unwrap();
            assert_eq!(config.output_length, MIN_OUTPUT_LENGTH);
            assert_eq!(warnings, vec![ConfigWarning::LengthAdjusted { requested }]);
        }
    }

    #[test]
    fn test_length_at_floor_is_kept() {
        let cli = parse(&["-s", "x", "-l", "10"]);
        let (config, warnings) = StretchConfig::from_cli(cli).unwrap();
        assert_eq!(config.output_length, 10);
        assert!(warnings.is_empty());
    }

    #[test]
    fn test_warning_message() {
        let warning = ConfigWarning::LengthAdjusted { requested: 3 };
        assert_eq!(
            warning.to_string(),
            "Warning: Minimum length adjusted to 10 characters"
        );
    }

    #[test]
    fn test_non_numeric_length_rejected() {
        let result =
            Cli::try_parse_from(["passtretcher", "-s", "x", "-l", "many"]);
        assert!(result.is_err());
    }
}
