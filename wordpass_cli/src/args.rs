use std::ffi::OsString;

use clap::error::ErrorKind;
use clap::Parser;

const DEFAULT_COUNT: usize = 10;

#[derive(Debug, Parser)]
#[command(name = "wordpass", author, version, about)]
pub struct Cli {
    /// Number of example passwords to list
    #[arg(short = 'n', long, default_value_t = DEFAULT_COUNT, value_names(["N"]))]
    pub count: usize,

    /// Seed the generator for reproducible output
    #[arg(short, long)]
    pub seed: Option<u64>,

    /// Extra arguments are accepted and ignored
    #[arg(hide = true)]
    pub ignored: Vec<String>,
}

impl Default for Cli {
    fn default() -> Self {
        Self {
            count: DEFAULT_COUNT,
            seed: None,
            ignored: Vec::new(),
        }
    }
}

/// Parses the arguments without ever rejecting them.
///
/// Only `--help` and `--version` come back as `Err`, and exiting with them
/// reports success. Anything clap cannot make sense of falls back to the
/// defaults.
pub fn parse_from<I, T>(args: I) -> Result<Cli, clap::Error>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    match Cli::try_parse_from(args) {
        Ok(cli) => {
            if !cli.ignored.is_empty() {
                log::warn!("Ignoring {} extra arguments", cli.ignored.len());
            }

            Ok(cli)
        }
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => Err(e),
        Err(e) => {
            log::warn!("Ignoring arguments, using defaults: {:?}", e.kind());

            Ok(Cli::default())
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_defaults() -> Result<(), clap::Error> {
        let cli = parse_from(["wordpass"])?;

        assert_eq!(cli.count, 10);
        assert_eq!(cli.seed, None);

        Ok(())
    }

    #[test]
    fn test_flags() -> Result<(), clap::Error> {
        let cli = parse_from(["wordpass", "-n", "3", "--seed", "42"])?;

        assert_eq!(cli.count, 3);
        assert_eq!(cli.seed, Some(42));

        Ok(())
    }

    #[test]
    fn test_stray_arguments_ignored() -> Result<(), clap::Error> {
        let cli = parse_from(["wordpass", "extra", "more"])?;

        assert_eq!(cli.count, 10);
        assert_eq!(cli.seed, None);

        let cli = parse_from(["wordpass", "-n", "4", "extra"])?;

        assert_eq!(cli.count, 4);

        Ok(())
    }

    #[test]
    fn test_bad_values_fall_back_to_defaults() -> Result<(), clap::Error> {
        for args in [
            vec!["wordpass", "--count", "-1"],
            vec!["wordpass", "--count", "many"],
            vec!["wordpass", "--seed"],
            vec!["wordpass", "--unknown-flag"],
        ] {
            let cli = parse_from(args)?;

            assert_eq!(cli.count, 10);
            assert_eq!(cli.seed, None);
        }

        Ok(())
    }

    #[test]
    fn test_help_and_version_exit_successfully() {
        for flag in ["--help", "--version"] {
            let Err(e) = parse_from(["wordpass", flag]) else {
                panic!("{flag} should display information");
            };

            assert_eq!(e.exit_code(), 0);
        }
    }
}
