pub use bevy::prelude::*;
pub use crate::states::*;
pub use crate::game::sets::*;

// Re-export components
pub use crate::ammo::components::*;
pub use crate::inventory::components::*;
pub use crate::weapon::components::*;

// Re-export messages and resources
pub use crate::ammo::events::*;
pub use crate::ammo::lookups::*;
pub use crate::ammo::resources::*;
pub use crate::ammo::visuals::{BulletMeshSlots, BulletMeshes};
pub use crate::audio::components::*;
pub use crate::inventory::resources::*;
