mod commands;
mod terminal;

use commands::{CommandLine, Commands, demo, rooms, seeded_rooms, shell};
use terminal::{logging, print};

fn main() -> anyhow::Result<()> {
    let commands = CommandLine::parse_args();
    let cfg = commands.config();

    logging::init_logging(&cfg)?;
    print::banner(cfg.quiet);

    match commands.command {
        Commands::Rooms => rooms::rooms(seeded_rooms().as_ref(), &cfg),
        Commands::Demo => demo::demo(&cfg),
        Commands::Shell => shell::shell(&cfg),
    }
}
