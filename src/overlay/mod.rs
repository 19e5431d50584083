pub mod bars;
pub mod color;
pub mod fade;
pub mod gradient;
pub mod key_entry;
pub mod stepper;

pub use bars::{BarSegment, BarTrack};
pub use color::Rgba;
pub use fade::{FadeParams, faded_color};
pub use gradient::OverlayGradient;
pub use key_entry::{KeyEntry, TrackedInput};
pub use stepper::{EngineParams, KeyFrame, OverlayEngine};
