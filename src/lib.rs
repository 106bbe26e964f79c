pub mod ammo;
pub mod audio;
pub mod game;
pub mod inventory;
pub mod states;
pub mod weapon;
pub mod prelude;

pub use game::plugin as game_plugin;
