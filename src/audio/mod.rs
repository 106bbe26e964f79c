pub mod components;
pub mod systems;
pub mod plugin;

pub use components::*;
pub use systems::*;
