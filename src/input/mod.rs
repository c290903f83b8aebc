mod events;
pub(crate) mod handler;
pub mod keymap;

pub use events::Intent;
pub use keymap::map_key_to_intent;
