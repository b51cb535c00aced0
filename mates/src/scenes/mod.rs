//! The two scenes of the application.

mod primary;
mod secondary;

pub use primary::PrimaryScene;
pub use secondary::SecondaryScene;
