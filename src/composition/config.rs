//! Composition parameters, aspect ratios and canvas dimension resolution

use crate::io::configuration::{
    DEFAULT_CIRCLE_EMPHASIS, DEFAULT_COMPLEXITY, DEFAULT_CONTRAST, DEFAULT_LINE_DENSITY,
    DEFAULT_SYMMETRY, SEED_LENGTH,
};
use crate::io::error::{ArtError, Result, invalid_parameter};
use rand::Rng;
use std::fmt;
use std::str::FromStr;

/// Supported width:height ratios
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum AspectRatio {
    /// 1:1
    Square,
    /// 4:5
    #[default]
    Portrait,
    /// 9:16
    Tall,
    /// 16:9
    Wide,
}

impl AspectRatio {
    /// Every supported ratio, in the order they are offered to users
    pub const ALL: [Self; 4] = [Self::Square, Self::Portrait, Self::Tall, Self::Wide];

    /// Width and height terms of the ratio
    pub const fn terms(self) -> (u32, u32) {
        match self {
            Self::Square => (1, 1),
            Self::Portrait => (4, 5),
            Self::Tall => (9, 16),
            Self::Wide => (16, 9),
        }
    }

    /// Width divided by height
    pub fn ratio(self) -> f64 {
        let (w, h) = self.terms();
        f64::from(w) / f64::from(h)
    }

    /// Export dimensions whose longest side is `base` pixels
    pub fn export_dimensions(self, base: u32) -> (u32, u32) {
        let (w, h) = self.terms();
        let base_f = f64::from(base);
        let width = if w >= h {
            base
        } else {
            (base_f * f64::from(w) / f64::from(h)).floor() as u32
        };
        let height = if h > w {
            base
        } else {
            (base_f * f64::from(h) / f64::from(w)).floor() as u32
        };
        (width, height)
    }

    /// Largest canvas of this ratio inside a container, keeping `padding` on every side
    pub fn fit_within(self, container_width: u32, container_height: u32, padding: u32) -> (u32, u32) {
        let available_width = f64::from(container_width.saturating_sub(padding * 2));
        let available_height = f64::from(container_height.saturating_sub(padding * 2));
        let ratio = self.ratio();

        if available_width / ratio <= available_height {
            (
                available_width as u32,
                (available_width / ratio).floor() as u32,
            )
        } else {
            ((available_height * ratio).floor() as u32, available_height as u32)
        }
    }
}

impl fmt::Display for AspectRatio {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (w, h) = self.terms();
        write!(f, "{w}:{h}")
    }
}

impl FromStr for AspectRatio {
    type Err = ArtError;

    fn from_str(s: &str) -> Result<Self> {
        let terms = s
            .trim()
            .split_once(':')
            .and_then(|(w, h)| Some((w.trim().parse::<u32>().ok()?, h.trim().parse::<u32>().ok()?)));

        Self::ALL
            .into_iter()
            .find(|ratio| terms == Some(ratio.terms()))
            .ok_or_else(|| ArtError::InvalidAspectRatio {
                value: s.to_string(),
            })
    }
}

/// Multiply resolved canvas dimensions by a device pixel ratio
pub fn scale_dimensions(dimensions: (u32, u32), device_pixel_ratio: f64) -> (u32, u32) {
    let scale = if device_pixel_ratio.is_finite() && device_pixel_ratio > 0.0 {
        device_pixel_ratio
    } else {
        1.0
    };
    (
        (f64::from(dimensions.0) * scale).round() as u32,
        (f64::from(dimensions.1) * scale).round() as u32,
    )
}

/// Generate a short random base-36 seed
pub fn random_seed() -> String {
    let mut rng = rand::rng();
    (0..SEED_LENGTH)
        .filter_map(|_| char::from_digit(rng.random_range(0..36), 36))
        .collect()
}

/// Parameters of one composition
///
/// All continuous parameters live in `[0, 1]`. The record is immutable for the duration of
/// a render; a new render takes a new record.
#[derive(Debug, Clone, PartialEq)]
pub struct ArtConfig {
    /// String that seeds the sequence generator
    pub seed: String,
    /// Number of shapes and connectors, and likelihood of concentric rings
    pub complexity: f64,
    /// Probability of each grid line and of rectangle hatching
    pub line_density: f64,
    /// Probability that a shape is a circle
    pub circle_emphasis: f64,
    /// Mirroring: none, vertical above 0.2, vertical and horizontal above 0.6
    pub symmetry: f64,
    /// Light palette up to 0.7, fixed dark palette above
    pub contrast_mode: f64,
    /// Ratio used by callers to resolve canvas dimensions
    pub aspect_ratio: AspectRatio,
}

impl Default for ArtConfig {
    fn default() -> Self {
        Self {
            seed: random_seed(),
            complexity: DEFAULT_COMPLEXITY,
            line_density: DEFAULT_LINE_DENSITY,
            circle_emphasis: DEFAULT_CIRCLE_EMPHASIS,
            symmetry: DEFAULT_SYMMETRY,
            contrast_mode: DEFAULT_CONTRAST,
            aspect_ratio: AspectRatio::default(),
        }
    }
}

impl ArtConfig {
    /// Default parameters with a fixed seed
    pub fn with_seed(seed: impl Into<String>) -> Self {
        Self {
            seed: seed.into(),
            ..Self::default()
        }
    }

    fn parameters(&self) -> [(&'static str, f64); 5] {
        [
            ("complexity", self.complexity),
            ("line_density", self.line_density),
            ("circle_emphasis", self.circle_emphasis),
            ("symmetry", self.symmetry),
            ("contrast_mode", self.contrast_mode),
        ]
    }

    /// Check that the seed is non-empty and every parameter lies in `[0, 1]`
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter` naming the first offending field
    pub fn validate(&self) -> Result<()> {
        if self.seed.is_empty() {
            return Err(invalid_parameter("seed", &"", &"seed must not be empty"));
        }

        for (name, value) in self.parameters() {
            if !value.is_finite() {
                return Err(invalid_parameter(name, &value, &"must be a finite number"));
            }
            if !(0.0..=1.0).contains(&value) {
                return Err(invalid_parameter(name, &value, &"must be between 0 and 1"));
            }
        }

        Ok(())
    }

    /// Pull every parameter back into `[0, 1]`, replacing NaN with its default
    #[must_use]
    pub fn clamped(self) -> Self {
        let clamp = |value: f64, default: f64| {
            if value.is_nan() {
                default
            } else {
                value.clamp(0.0, 1.0)
            }
        };

        Self {
            complexity: clamp(self.complexity, DEFAULT_COMPLEXITY),
            line_density: clamp(self.line_density, DEFAULT_LINE_DENSITY),
            circle_emphasis: clamp(self.circle_emphasis, DEFAULT_CIRCLE_EMPHASIS),
            symmetry: clamp(self.symmetry, DEFAULT_SYMMETRY),
            contrast_mode: clamp(self.contrast_mode, DEFAULT_CONTRAST),
            ..self
        }
    }
}
