// File: crates/demo/src/cli.rs
// Summary: Command-line arguments of the `gasline` binary.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug, Clone)]
#[command(author, version, about = "Render gasoline price and inventory charts to SVG/PNG")]
pub struct Args {
    /// Path to config TOML
    #[arg(long, default_value = "gasline.toml")]
    pub config: PathBuf,

    /// Directory holding the input CSVs (overrides config)
    #[arg(long)]
    pub data_dir: Option<PathBuf>,

    /// Directory for rendered charts (overrides config)
    #[arg(long)]
    pub out_dir: Option<PathBuf>,

    /// Also write a PNG next to every SVG
    #[arg(long, default_value_t = false)]
    pub png: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum Command {
    /// Average yearly price as a line with points
    Yearly {
        /// Year whose point shows its tooltip
        #[arg(long)]
        hover: Option<String>,
    },
    /// Per-state bar chart filtered by year
    States {
        /// Selected years, applied in order like slider moves; one output per year
        #[arg(long = "year", num_args = 1..)]
        years: Vec<i32>,
        /// State whose bar shows its tooltip
        #[arg(long)]
        hover: Option<String>,
    },
    /// Consumption vs. supply with projections and annotations
    Inventory {
        /// Point whose tooltip is shown: `YEAR` (consumption) or `consumed:YEAR` / `gas_supply:YEAR`
        #[arg(long)]
        hover: Option<String>,
    },
    /// All three charts with their defaults
    All,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn states_accepts_several_years_in_order() {
        let args = Args::parse_from(["gasline", "--png", "states", "--year", "2021", "2019", "--hover", "Texas"]);
        assert!(args.png);
        assert_eq!(args.config, PathBuf::from("gasline.toml"));
        assert_eq!(
            args.command,
            Command::States { years: vec![2021, 2019], hover: Some("Texas".to_string()) }
        );
    }

    #[test]
    fn path_overrides_are_optional() {
        let args = Args::parse_from(["gasline", "--out-dir", "charts", "all"]);
        assert_eq!(args.out_dir, Some(PathBuf::from("charts")));
        assert_eq!(args.data_dir, None);
        assert_eq!(args.command, Command::All);
    }
}
