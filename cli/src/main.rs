mod commands;
mod terminal;

use commands::{CommandLine, Commands, render, variants};
use geoquery_common::config::Config;
use terminal::{logging, print};

fn main() -> anyhow::Result<()> {
    let commands = CommandLine::parse_args();

    let cfg = Config {
        quiet: commands.quiet,
        explain: commands.explain,
    };

    logging::init(&cfg)?;

    match commands.command {
        Commands::Render(args) => {
            print::header("rendering where condition", cfg.quiet);
            render::render(args, &cfg)
        }
        Commands::Variants => {
            print::header("geometry request variants", cfg.quiet);
            variants::variants(&cfg);
            Ok(())
        }
    }
}
