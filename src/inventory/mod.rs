pub mod components;
pub mod systems;
pub mod resources;
pub mod plugin;

// Re-export public API
pub use components::*;
pub use systems::*;
pub use resources::*;
pub use plugin::*;
