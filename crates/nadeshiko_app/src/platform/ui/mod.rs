mod constants;
mod layout;
mod render;

pub use constants::{KEY_NEXT_FILE, KEY_QUIT, KEY_TOGGLE_AUTO, KEY_UPDATE_NOW};
pub use layout::draw;
pub use render::{render, StatusInfo};
