use lodgr_common::config::Config;
use lodgr_core::Room;
use lodgr_core::ports::outbound::room_directory::RoomDirectory;

use crate::terminal::{format, print};

pub fn rooms(directory: &dyn RoomDirectory, cfg: &Config) -> anyhow::Result<()> {
    let rooms: Vec<Room> = directory.list_all();

    if rooms.is_empty() {
        print::header("no rooms", cfg.quiet);
        print::no_results("The room directory is empty.");
        return Ok(());
    }

    print::header("room catalog", cfg.quiet);
    print_rooms(&rooms, cfg);

    if cfg.quiet == 0 {
        let free = rooms.iter().filter(|r| r.is_available()).count();
        print::fat_separator();
        print::centerln(&format!("{free} of {} rooms available", rooms.len()));
    }
    Ok(())
}

pub fn print_rooms(rooms: &[Room], cfg: &Config) {
    for (idx, room) in rooms.iter().enumerate() {
        if cfg.quiet >= 2 {
            print::print(&room.to_string());
            continue;
        }

        print::tree_head(&room.id.to_string(), &room.kind);
        print::as_tree_one_level(format::room_to_details(room));
        if idx + 1 != rooms.len() {
            print::print("");
        }
    }
}
