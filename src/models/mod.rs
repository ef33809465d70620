pub mod coordinate;
pub mod reply;

// Re-export commonly used types
pub use coordinate::Coordinate;
pub use reply::{SosAck, SosReply};
