use crate::errors::{AppError, AppResult};
use regex::Regex;
use std::str::FromStr;
use std::sync::LazyLock;

static HEX_COLOR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^#?([0-9A-Fa-f]{6}|[0-9A-Fa-f]{8})$").expect("valid regex"));

/// RGBA color with channels normalised to `0.0..=1.0`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    pub const BLACK: Color = Color::rgba(0.0, 0.0, 0.0, 1.0);
    /// Fill for events whose category is missing or undefined.
    pub const DEFAULT_FILL: Color = Color::rgba(0.5, 0.5, 0.5, 0.9);
    /// Fine grid stroke.
    pub const GRID_FINE: Color = Color::rgba(0.5, 0.5, 0.5, 1.0);
    /// Hour/day grid stroke.
    pub const GRID_COARSE: Color = Color::rgba(0.0, 0.0, 1.0, 1.0);

    pub const fn rgba(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Parse `#RRGGBB` or `#RRGGBBAA` (leading `#` optional).
    pub fn parse(s: &str) -> AppResult<Self> {
        let caps = HEX_COLOR
            .captures(s.trim())
            .ok_or_else(|| AppError::InvalidColor(s.to_string()))?;
        let hex = &caps[1];

        let channel = |i: usize| -> AppResult<f32> {
            u8::from_str_radix(&hex[i..i + 2], 16)
                .map(|v| v as f32 / 255.0)
                .map_err(|_| AppError::InvalidColor(s.to_string()))
        };

        let a = if hex.len() == 8 { channel(6)? } else { 1.0 };
        Ok(Self::rgba(channel(0)?, channel(2)?, channel(4)?, a))
    }

    pub fn is_opaque(&self) -> bool {
        self.a >= 1.0
    }
}

impl FromStr for Color {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Color::parse(s)
    }
}
