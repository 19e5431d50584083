use std::fs;
use std::path::Path;

use anyhow::{Result, bail};
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::config::binding::InputBinding;
use crate::overlay::color::Rgba;

/// Square width class; the multiplier scales the base key size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum SizeClass {
    #[default]
    Small,
    Medium,
    Large,
}

impl SizeClass {
    pub fn multiplier(self) -> f32 {
        match self {
            SizeClass::Small => 1.0,
            SizeClass::Medium => 2.0,
            SizeClass::Large => 3.0,
        }
    }
}

/// One tracked key or mouse button.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct KeyBindingConfig {
    pub bind: InputBinding,
    /// Label drawn on the square; defaults to the binding name.
    #[serde(default)]
    pub label: Option<String>,
    #[serde(default = "default_pressed_color")]
    pub pressed_color: Rgba,
    #[serde(default)]
    pub size: SizeClass,
}

fn default_pressed_color() -> Rgba {
    Rgba::new(255, 104, 182, 255)
}

impl KeyBindingConfig {
    pub fn new(bind: &str, pressed_color: Rgba) -> Self {
        Self {
            bind: InputBinding::new(bind),
            label: None,
            pressed_color,
            size: SizeClass::default(),
        }
    }

    /// Label text for the square.
    pub fn display_label(&self) -> &str {
        self.label.as_deref().unwrap_or(&self.bind.0)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct GeneralConfig {
    /// Bar scroll/growth speed in pixels per second.
    pub bar_speed: f32,
    /// Frame-rate cap.
    pub fps: u32,
    /// Window height in pixels.
    pub height: u32,
    /// Base square edge length in pixels.
    pub key_size: f32,
    /// Gap between squares and window edges.
    pub margin: f32,
    pub outline_thickness: f32,
    pub background_color: Rgba,
    /// Frames a released key takes to fade back to the background.
    pub key_fade_time: u32,
    /// Fade curve exponent; 1.0 is linear. Values below 1.0 are
    /// clamped up at load.
    pub key_fade_exponent: f32,
    /// Draw the translucent top gradient over the bar field.
    pub fading: bool,
    /// Draw per-key press counters.
    pub counter: bool,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            bar_speed: 500.0,
            fps: 60,
            height: 800,
            key_size: 80.0,
            margin: 20.0,
            outline_thickness: 5.0,
            background_color: Rgba::BLACK,
            key_fade_time: 7,
            key_fade_exponent: 1.0,
            fading: true,
            counter: false,
        }
    }
}

const CONFIG_FILE: &str = "config.json";

/// Full overlay configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct OverlayConfig {
    pub general: GeneralConfig,
    pub keys: Vec<KeyBindingConfig>,
}

impl Default for OverlayConfig {
    fn default() -> Self {
        Self {
            general: GeneralConfig::default(),
            keys: vec![
                KeyBindingConfig::new("Z", Rgba::new(255, 255, 0, 255)),
                KeyBindingConfig::new("X", Rgba::new(0, 255, 255, 255)),
            ],
        }
    }
}

impl OverlayConfig {
    /// Load from the default config file; missing file yields defaults.
    pub fn load() -> Result<Self> {
        Self::load_from(CONFIG_FILE)
    }

    /// Load from a specific path; missing file yields defaults.
    /// The returned config is already validated and clamped.
    pub fn load_from<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path)?;
        let mut config: Self = serde_json::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Save to the default config file.
    pub fn save(&self) -> Result<()> {
        self.save_to(CONFIG_FILE)
    }

    /// Save to a specific path.
    pub fn save_to<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let content = serde_json::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }

    /// Clamp coercible values to their sane minimums and reject the
    /// rest. All-or-nothing: a config that fails here must not be
    /// applied.
    pub fn validate(&mut self) -> Result<()> {
        if !(self.general.bar_speed > 0.0) {
            bail!(
                "bar_speed must be positive, got {}",
                self.general.bar_speed
            );
        }
        if self.general.height == 0 {
            bail!("height must be at least 1");
        }
        if !(self.general.key_size > 0.0) {
            bail!("key_size must be positive, got {}", self.general.key_size);
        }
        if self.keys.is_empty() {
            bail!("no keys configured");
        }
        for key in &self.keys {
            key.bind.resolve()?;
        }

        if self.general.fps == 0 {
            warn!("fps 0 clamped to 1");
            self.general.fps = 1;
        }
        if self.general.key_fade_time == 0 {
            warn!("key_fade_time 0 clamped to 1");
            self.general.key_fade_time = 1;
        }
        if self.general.key_fade_exponent < 1.0 || !self.general.key_fade_exponent.is_finite() {
            self.general.key_fade_exponent = 1.0;
        }
        if self.general.margin < 0.0 {
            self.general.margin = 0.0;
        }
        if self.general.outline_thickness < 0.0 {
            self.general.outline_thickness = 0.0;
        }
        Ok(())
    }
}
