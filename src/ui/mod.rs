mod chrome;
mod grid;
mod layout;

pub use chrome::{draw_footer, draw_header};
pub use grid::draw_grid;
pub use layout::{ButtonCell, UiLayout, button_at, button_cells, split_layout};
