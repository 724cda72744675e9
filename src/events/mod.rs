mod handler;
mod types;

pub use handler::handle_event;
pub use types::{AppEvent, EventResult};
