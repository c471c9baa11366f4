pub mod seeds;
pub mod trays;

use clap::{ArgAction, Parser, Subcommand};
use seedtray_common::config::Config;
use seedtray_core::study::TrayVariant;

#[derive(Parser)]
#[command(name = "seedtray")]
#[command(about = "Seed counts and randomized tray layouts for a forest-regeneration study.")]
#[command(version)]
pub struct CommandLine {
    #[command(subcommand)]
    pub command: Commands,

    /// Reduce output; repeat for less (-qq)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub quiet: u8,

    /// Do not print the banner
    #[arg(long, global = true)]
    pub no_banner: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Estimate available seed counts from bought weight and thousand-seed weight
    #[command(alias = "s")]
    Seeds,
    /// Print randomized tray layouts
    #[command(alias = "t")]
    Trays {
        /// Only print the test tray instead of the full batch
        #[arg(long)]
        test: bool,
        /// What the blank pots hold: 'control' or 'empty'
        #[arg(long, default_value_t = TrayVariant::Control)]
        variant: TrayVariant,
    },
}

impl CommandLine {
    pub fn parse_args() -> Self {
        Self::parse()
    }

    pub fn config(&self) -> Config {
        Config {
            no_banner: self.no_banner,
            quiet: self.quiet,
        }
    }
}
