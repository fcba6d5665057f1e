use crate::foundation::error::{LaminaError, LaminaResult};
use serde::{Deserialize, Serialize};

pub use kurbo::{Affine, Point, Rect, Size, Vec2};

/// An opaque RGB color with 8-bit channels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rgb8 {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
}

impl Rgb8 {
    /// Opaque black.
    pub const BLACK: Self = Self { r: 0, g: 0, b: 0 };
    /// Opaque white.
    pub const WHITE: Self = Self {
        r: 255,
        g: 255,
        b: 255,
    };

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// Straight-alpha RGBA with 8-bit channels.
///
/// This is the vertex-color representation consumed by the quad renderer;
/// alpha is *not* premultiplied into the color channels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Rgba8 {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
    /// Alpha channel (255 = opaque).
    pub a: u8,
}

impl Rgba8 {
    /// Fully transparent black.
    pub const TRANSPARENT: Self = Self {
        r: 0,
        g: 0,
        b: 0,
        a: 0,
    };

    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// The color part, with alpha discarded.
    pub const fn rgb(self) -> Rgb8 {
        Rgb8 {
            r: self.r,
            g: self.g,
            b: self.b,
        }
    }

    pub const fn from_rgb(rgb: Rgb8, a: u8) -> Self {
        Self {
            r: rgb.r,
            g: rgb.g,
            b: rgb.b,
            a,
        }
    }
}

impl<'de> Deserialize<'de> for Rgba8 {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Repr {
            Hex(String),
            Obj {
                r: u8,
                g: u8,
                b: u8,
                #[serde(default = "opaque")]
                a: u8,
            },
            Arr(Vec<u8>),
        }

        fn opaque() -> u8 {
            255
        }

        match Repr::deserialize(deserializer)? {
            Repr::Hex(s) => parse_hex(&s).map_err(serde::de::Error::custom),
            Repr::Obj { r, g, b, a } => Ok(Self::new(r, g, b, a)),
            Repr::Arr(v) => {
                if v.len() == 3 {
                    Ok(Self::new(v[0], v[1], v[2], 255))
                } else if v.len() == 4 {
                    Ok(Self::new(v[0], v[1], v[2], v[3]))
                } else {
                    Err(serde::de::Error::custom(
                        "rgba array must have len 3 ([r,g,b]) or 4 ([r,g,b,a])",
                    ))
                }
            }
        }
    }
}

fn parse_hex(s: &str) -> Result<Rgba8, String> {
    let s = s.trim();
    let s = s.strip_prefix('#').unwrap_or(s);
    // Length is checked in bytes below, so non-ASCII input must be
    // rejected here rather than panic on a char-boundary slice.
    if !s.is_ascii() {
        return Err("hex color must be ASCII".to_owned());
    }

    fn hex_byte(pair: &str) -> Result<u8, String> {
        u8::from_str_radix(pair, 16).map_err(|_| format!("invalid hex byte \"{pair}\""))
    }

    match s.len() {
        6 => Ok(Rgba8::new(
            hex_byte(&s[0..2])?,
            hex_byte(&s[2..4])?,
            hex_byte(&s[4..6])?,
            255,
        )),
        8 => Ok(Rgba8::new(
            hex_byte(&s[0..2])?,
            hex_byte(&s[2..4])?,
            hex_byte(&s[4..6])?,
            hex_byte(&s[6..8])?,
        )),
        _ => Err("hex color must be #RRGGBB or #RRGGBBAA (case-insensitive)".to_owned()),
    }
}

/// Window metrics supplied by the hosting window/director.
///
/// Layers take a `&Stage` at construction for their default (full-window)
/// content size and the content-scale factor applied to vertex geometry.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Stage {
    win_size: Size,
    content_scale: f64,
}

impl Stage {
    /// Create validated window metrics.
    pub fn new(win_size: Size, content_scale: f64) -> LaminaResult<Self> {
        if !(win_size.width.is_finite() && win_size.height.is_finite())
            || win_size.width <= 0.0
            || win_size.height <= 0.0
        {
            return Err(LaminaError::init(format!(
                "stage window size must be finite and positive, got {}x{}",
                win_size.width, win_size.height
            )));
        }
        if !content_scale.is_finite() || content_scale <= 0.0 {
            return Err(LaminaError::init(format!(
                "stage content scale must be finite and positive, got {content_scale}"
            )));
        }
        Ok(Self {
            win_size,
            content_scale,
        })
    }

    /// Window size in points.
    pub fn win_size(&self) -> Size {
        self.win_size
    }

    /// Points-to-pixels scale applied to vertex geometry.
    pub fn content_scale(&self) -> f64 {
        self.content_scale
    }
}
