pub mod sets;
pub mod plugin;

pub use sets::*;
pub use plugin::*;
