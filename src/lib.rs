pub mod config;
pub mod error;
pub mod models;
pub mod services;

pub use config::Config;
pub use error::SosError;
pub use models::{Coordinate, SosAck, SosReply};
pub use services::{SosNotifier, SOS_PATH};
