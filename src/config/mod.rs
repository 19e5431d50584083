pub mod binding;
pub mod overlay_config;

pub use binding::{InputBinding, InputId};
pub use overlay_config::{GeneralConfig, KeyBindingConfig, OverlayConfig, SizeClass};
