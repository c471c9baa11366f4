mod commands;
mod terminal;

use commands::{CommandLine, Commands, seeds, trays};
use seedtray_common::config::Config;
use terminal::{logging, print};

fn main() -> anyhow::Result<()> {
    let commands = CommandLine::parse_args();
    let cfg: Config = commands.config();

    logging::init_logging(cfg.quiet);
    print::banner(&cfg);

    run(commands.command, &cfg)?;

    if cfg.quiet == 0 {
        print::end_of_program();
    }
    Ok(())
}

fn run(command: Commands, cfg: &Config) -> anyhow::Result<()> {
    match command {
        Commands::Seeds => {
            print::header("estimating seed counts", cfg.quiet);
            seeds::seeds(cfg)
        }
        Commands::Trays { test, variant } => {
            print::header("laying out trays", cfg.quiet);
            trays::trays(test, variant, cfg)
        }
    }
}
