use std::collections::BTreeMap;
use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use tracing::debug;

use crate::domain::models::ids::RoomId;
use crate::domain::models::room::Room;
use crate::ports::outbound::room_directory::RoomDirectory;

/// Room catalog kept in process memory, ordered by room id.
#[derive(Debug, Default)]
pub struct InMemoryRoomDirectory {
    rooms: RwLock<BTreeMap<RoomId, Room>>,
}

impl InMemoryRoomDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_rooms(rooms: impl IntoIterator<Item = Room>) -> Self {
        let directory = Self::new();
        for room in rooms {
            directory.add_room(room);
        }
        directory
    }

    /// Inserts the room, replacing any record with the same id.
    pub fn add_room(&self, room: Room) {
        debug!(room_id = %room.id, kind = %room.kind, "room added to directory");
        self.write().insert(room.id, room);
    }

    /// Rooms that are available and accepted by `filter`.
    pub fn available_rooms<F>(&self, filter: F) -> Vec<Room>
    where
        F: Fn(&Room) -> bool,
    {
        self.read()
            .values()
            .filter(|room| room.available && filter(room))
            .cloned()
            .collect()
    }

    pub fn len(&self) -> usize {
        self.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.read().is_empty()
    }

    // A panic while holding the lock cannot leave a half-written room behind,
    // so the map is still consistent after poisoning.
    fn read(&self) -> RwLockReadGuard<'_, BTreeMap<RoomId, Room>> {
        self.rooms.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, BTreeMap<RoomId, Room>> {
        self.rooms.write().unwrap_or_else(PoisonError::into_inner)
    }
}

impl RoomDirectory for InMemoryRoomDirectory {
    fn find_by_id(&self, room_id: RoomId) -> Option<Room> {
        self.read().get(&room_id).cloned()
    }

    fn update_availability(&self, room_id: RoomId, available: bool) {
        match self.write().get_mut(&room_id) {
            Some(room) => room.available = available,
            None => debug!(%room_id, "availability update for unknown room ignored"),
        }
    }

    fn list_all(&self) -> Vec<Room> {
        self.read().values().cloned().collect()
    }
}
