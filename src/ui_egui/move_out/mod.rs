//! Move-out date picker modal.

mod render;
mod state;

pub use render::{render_move_out_modal, MoveOutAction};
pub use state::{MoveOutHandler, MoveOutModalState, PickerList};
