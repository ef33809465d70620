pub mod notifier;

pub use notifier::{SosNotifier, SOS_PATH};
