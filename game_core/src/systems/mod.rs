pub mod collision;
pub mod field;
pub mod input;
pub mod lasers;
pub mod movement;
pub mod respawn;
pub mod scoring;

pub use collision::*;
pub use field::*;
pub use input::*;
pub use lasers::*;
pub use movement::*;
pub use respawn::*;
pub use scoring::*;
