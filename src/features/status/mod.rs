pub mod dto;
pub mod handler;

pub use dto::HealthDto;
pub use handler::{handle_healthcheck, handle_index};
