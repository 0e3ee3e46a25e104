//! Command-line configuration for the demo runner.

use anyhow::{bail, Context, Result};
use clap::{Arg, ArgMatches, Command};

use pytromino::types::{BOARD_HEIGHT, BOARD_WIDTH};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DemoConfig {
    /// Number of pieces to drop before stopping
    pub pieces: usize,
    /// Playfield width in cells
    pub width: u8,
    /// Playfield height in cells
    pub height: u8,
    /// Send every k-th piece to the hold slot; 0 disables holding
    pub hold_every: usize,
    /// Print the locked pieces as JSON on exit
    pub json: bool,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            pieces: 14,
            width: BOARD_WIDTH,
            height: BOARD_HEIGHT,
            hold_every: 5,
            json: false,
        }
    }
}

fn command() -> Command<'static> {
    Command::new("pytromino-demo")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Headless drop loop driving the pytromino piece engine")
        .arg(
            Arg::new("PIECES")
                .long("pieces")
                .value_name("N")
                .takes_value(true)
                .default_value("14"),
        )
        .arg(
            Arg::new("WIDTH")
                .long("width")
                .value_name("W")
                .takes_value(true)
                .default_value("10"),
        )
        .arg(
            Arg::new("HEIGHT")
                .long("height")
                .value_name("H")
                .takes_value(true)
                .default_value("20"),
        )
        .arg(
            Arg::new("HOLD_EVERY")
                .long("hold-every")
                .value_name("K")
                .takes_value(true)
                .default_value("5"),
        )
        .arg(
            Arg::new("JSON")
                .long("json")
                .help("Print the locked pieces as JSON"),
        )
}

fn parse_value<T>(matches: &ArgMatches, name: &str) -> Result<T>
where
    T: std::str::FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    let raw = matches
        .value_of(name)
        .with_context(|| format!("missing value for {}", name))?;
    raw.parse()
        .with_context(|| format!("invalid value for {}: {:?}", name, raw))
}

impl DemoConfig {
    pub fn from_matches(matches: &ArgMatches) -> Result<Self> {
        let config = Self {
            pieces: parse_value(matches, "PIECES")?,
            width: parse_value(matches, "WIDTH")?,
            height: parse_value(matches, "HEIGHT")?,
            hold_every: parse_value(matches, "HOLD_EVERY")?,
            json: matches.is_present("JSON"),
        };

        // Pieces span four cells in either direction once rotated.
        if config.width < 4 || config.height < 4 {
            bail!(
                "playfield must be at least 4x4, got {}x{}",
                config.width,
                config.height
            );
        }
        Ok(config)
    }

    pub fn parse_args() -> Result<Self> {
        Self::from_matches(&command().get_matches())
    }

    #[cfg(test)]
    fn parse_from(args: &[&str]) -> Result<Self> {
        let matches = command().try_get_matches_from(args)?;
        Self::from_matches(&matches)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_cli_defaults() {
        let parsed = DemoConfig::parse_from(&["pytromino-demo"]).unwrap();
        assert_eq!(parsed, DemoConfig::default());
    }

    #[test]
    fn flags_override_defaults() {
        let parsed = DemoConfig::parse_from(&[
            "pytromino-demo",
            "--pieces",
            "3",
            "--width",
            "6",
            "--hold-every",
            "0",
            "--json",
        ])
        .unwrap();
        assert_eq!(parsed.pieces, 3);
        assert_eq!(parsed.width, 6);
        assert_eq!(parsed.height, BOARD_HEIGHT);
        assert_eq!(parsed.hold_every, 0);
        assert!(parsed.json);
    }

    #[test]
    fn rejects_tiny_playfield() {
        assert!(DemoConfig::parse_from(&["pytromino-demo", "--width", "3"]).is_err());
        assert!(DemoConfig::parse_from(&["pytromino-demo", "--pieces", "lots"]).is_err());
    }
}
