pub mod components;
pub mod events;
pub mod lookups;
pub mod plugin;
pub mod resources;
pub mod selection;
pub mod systems;
pub mod visuals;

// Re-export public API
pub use components::*;
pub use events::*;
pub use lookups::*;
pub use resources::*;
pub use selection::*;
pub use systems::*;
pub use visuals::*;
