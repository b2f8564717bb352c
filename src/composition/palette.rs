//! Five-role palette derived from the seed and the contrast parameter

use crate::io::configuration::DARK_CONTRAST_THRESHOLD;
use crate::math::sequence::SequenceGenerator;
use image::Rgba;

// Alpha of 0.1 on an 8-bit channel
const GRID_ALPHA: u8 = 26;

/// Colour roles of one composition
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    /// Canvas fill
    pub background: Rgba<u8>,
    /// Strokes, node disks and connectors
    pub primary: Rgba<u8>,
    /// Alternate element fill
    pub secondary: Rgba<u8>,
    /// Alternate element fill
    pub accent: Rgba<u8>,
    /// Low-opacity technical grid
    pub grid: Rgba<u8>,
}

impl Palette {
    /// Fixed palette used above the dark contrast threshold
    pub const DARK: Self = Self {
        background: Rgba([0x22, 0x22, 0x22, 0xff]),
        primary: Rgba([0xee, 0xee, 0xee, 0xff]),
        secondary: Rgba([0xaa, 0xaa, 0xaa, 0xff]),
        accent: Rgba([0xff, 0xff, 0xff, 0xff]),
        grid: Rgba([0xff, 0xff, 0xff, GRID_ALPHA]),
    };

    /// Derive the palette, consuming exactly two draws
    ///
    /// The base grey and tone shift are drawn before the contrast branch, so the dark
    /// palette leaves the sequence at the same position as the light one.
    pub fn derive(rng: &mut SequenceGenerator, contrast_mode: f64) -> Self {
        let base_grey = rng.range_int(230, 250);
        let tone_shift = rng.range_int(-5, 5);

        if contrast_mode > DARK_CONTRAST_THRESHOLD {
            return Self::DARK;
        }

        Self::light(base_grey, tone_shift)
    }

    /// Neutral light palette for a base grey and a warm/cool tone shift
    pub fn light(base_grey: i64, tone_shift: i64) -> Self {
        Self {
            background: tinted(base_grey, tone_shift),
            primary: Rgba([0x1a, 0x1a, 0x1a, 0xff]),
            secondary: tinted(120, tone_shift),
            accent: tinted(200, tone_shift),
            grid: Rgba([0, 0, 0, GRID_ALPHA]),
        }
    }

    /// Whether this is the fixed dark palette
    pub fn is_dark(&self) -> bool {
        *self == Self::DARK
    }
}

// Warm shift raises red and lowers blue, cool shift does the opposite
fn tinted(level: i64, shift: i64) -> Rgba<u8> {
    let channel = |value: i64| value.clamp(0, 255) as u8;
    Rgba([
        channel(level + shift),
        channel(level),
        channel(level - shift),
        0xff,
    ])
}
