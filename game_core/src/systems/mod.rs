pub mod collision;
pub mod input;
pub mod movement;
pub mod opponent;
pub mod respawn;

pub use collision::*;
pub use input::*;
pub use movement::*;
pub use opponent::*;
pub use respawn::*;
