use std::fmt;
use std::str::FromStr;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// 8-bit RGBA color.
///
/// Serialized as a `"r,g,b"` or `"r,g,b,a"` string so config files can
/// write colors the way the original overlay's ini format did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    pub const BLACK: Self = Self::new(0, 0, 0, 255);
    pub const WHITE: Self = Self::new(255, 255, 255, 255);

    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }
}

impl fmt::Display for Rgba {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{},{},{}", self.r, self.g, self.b, self.a)
    }
}

impl FromStr for Rgba {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts: Vec<&str> = s.split(',').map(str::trim).collect();
        if parts.len() != 3 && parts.len() != 4 {
            return Err(format!("invalid color '{s}': expected r,g,b or r,g,b,a"));
        }
        let mut channels = [0u8; 4];
        channels[3] = 255;
        for (i, part) in parts.iter().enumerate() {
            channels[i] = part
                .parse::<u8>()
                .map_err(|_| format!("invalid color channel '{part}' in '{s}'"))?;
        }
        Ok(Self::new(channels[0], channels[1], channels[2], channels[3]))
    }
}

impl Serialize for Rgba {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for Rgba {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(D::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_rgb_defaults_alpha() {
        let c: Rgba = "255,0,128".parse().unwrap();
        assert_eq!(c, Rgba::new(255, 0, 128, 255));
    }

    #[test]
    fn parse_rgba_with_spaces() {
        let c: Rgba = " 10, 20 ,30, 40".parse().unwrap();
        assert_eq!(c, Rgba::new(10, 20, 30, 40));
    }

    #[test]
    fn parse_rejects_bad_input() {
        assert!("255,0".parse::<Rgba>().is_err());
        assert!("256,0,0".parse::<Rgba>().is_err());
        assert!("a,b,c".parse::<Rgba>().is_err());
    }

    #[test]
    fn json_round_trip() {
        let c = Rgba::new(1, 2, 3, 4);
        let json = serde_json::to_string(&c).unwrap();
        assert_eq!(json, "\"1,2,3,4\"");
        let back: Rgba = serde_json::from_str(&json).unwrap();
        assert_eq!(back, c);
    }
}
