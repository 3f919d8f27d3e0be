pub mod in_memory_rooms;
pub mod recording_notifier;
pub mod tracing_notifier;
