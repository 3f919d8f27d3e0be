pub mod demo;
pub mod rooms;
pub mod shell;

use std::sync::Arc;

use clap::{ArgAction, Parser, Subcommand};
use lodgr_common::{config::Config, locale::Locale};
use lodgr_core::adapters::outbound::in_memory_rooms::InMemoryRoomDirectory;
use lodgr_core::{Room, RoomId};

#[derive(Parser)]
#[command(name = "lodgr")]
#[command(about = "A hotel booking ledger.")]
pub struct CommandLine {
    #[command(subcommand)]
    pub command: Commands,

    /// Language of customer notifications and error messages
    #[arg(long, value_enum, default_value_t = Locale::En, global = true)]
    pub locale: Locale,

    /// Print less. Repeat for even less output
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub quiet: u8,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List the rooms of the hotel
    #[command(alias = "r")]
    Rooms,
    /// Run a scripted booking session
    #[command(alias = "d")]
    Demo,
    /// Book and cancel rooms interactively
    #[command(alias = "s")]
    Shell,
}

impl CommandLine {
    pub fn parse_args() -> Self {
        Self::parse()
    }

    pub fn config(&self) -> Config {
        Config::new(self.locale, self.quiet, self.no_color)
    }
}

/// Room catalog every session starts from.
pub fn seeded_rooms() -> Arc<InMemoryRoomDirectory> {
    Arc::new(InMemoryRoomDirectory::with_rooms([
        Room::new(RoomId(101), "Standard", 100.0, true),
        Room::new(RoomId(102), "Standard", 100.0, true),
        Room::new(RoomId(201), "Deluxe", 180.0, true),
        Room::new(RoomId(301), "Suite", 350.0, true),
    ]))
}

#[cfg(test)]
mod tests {
    use super::*;
    use lodgr_core::ports::outbound::room_directory::RoomDirectory;

    #[test]
    fn test_parse_global_flags() {
        let cli = CommandLine::try_parse_from(["lodgr", "demo", "--locale", "ru", "-qq", "--no-color"]).unwrap();
        assert!(matches!(cli.command, Commands::Demo));

        let cfg = cli.config();
        assert_eq!(cfg.locale, Locale::Ru);
        assert_eq!(cfg.quiet, 2);
        assert!(cfg.no_color);
    }

    #[test]
    fn test_aliases_and_defaults() {
        let cli = CommandLine::try_parse_from(["lodgr", "s"]).unwrap();
        assert!(matches!(cli.command, Commands::Shell));
        assert_eq!(cli.locale, Locale::En);
        assert_eq!(cli.quiet, 0);
    }

    #[test]
    fn test_unknown_locale_rejected() {
        assert!(CommandLine::try_parse_from(["lodgr", "rooms", "--locale", "de"]).is_err());
    }

    #[test]
    fn test_seeded_rooms_all_available() {
        let rooms = seeded_rooms();
        assert_eq!(rooms.len(), 4);
        assert!(rooms.list_all().iter().all(Room::is_available));
    }
}
