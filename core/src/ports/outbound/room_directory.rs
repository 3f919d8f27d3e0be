use crate::domain::models::ids::RoomId;
use crate::domain::models::room::Room;

/// Defines the contract for looking up rooms and toggling their availability.
pub trait RoomDirectory: Send + Sync {
    /// Retrieves a copy of the room record.
    ///
    /// # Returns
    /// * `Some(Room)` - The room exists.
    /// * `None` - No room has this id.
    fn find_by_id(&self, room_id: RoomId) -> Option<Room>;

    /// Marks a room as available or occupied.
    ///
    /// Unknown ids are ignored. Implementations must not panic here.
    fn update_availability(&self, room_id: RoomId, available: bool);

    fn list_all(&self) -> Vec<Room>;
}
