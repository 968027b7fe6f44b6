mod app;
pub mod move_out;

pub use app::{PortalApp, ScheduledMoveOut};
