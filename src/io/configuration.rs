//! Generator constants and runtime configuration defaults

// Default slider positions for a fresh configuration
/// Default complexity (element and connector count)
pub const DEFAULT_COMPLEXITY: f64 = 0.6;
/// Default grid line and hatching frequency
pub const DEFAULT_LINE_DENSITY: f64 = 0.5;
/// Default likelihood of circular elements
pub const DEFAULT_CIRCLE_EMPHASIS: f64 = 0.4;
/// Default symmetry (vertical mirror only)
pub const DEFAULT_SYMMETRY: f64 = 0.2;
/// Default contrast (light palette)
pub const DEFAULT_CONTRAST: f64 = 0.5;

/// Length of generated base-36 seeds
pub const SEED_LENGTH: usize = 6;

/// Smallest grid divisor of the shorter canvas side (inclusive)
pub const GRID_DIVISOR_MIN: i64 = 8;
/// Largest grid divisor of the shorter canvas side (exclusive)
pub const GRID_DIVISOR_MAX: i64 = 16;

/// Shapes placed even at zero complexity
pub const BASE_SHAPE_COUNT: f64 = 5.0;
/// Additional shapes at full complexity
pub const SHAPES_PER_COMPLEXITY: f64 = 25.0;
/// Connector lines at full complexity
pub const LINES_PER_COMPLEXITY: f64 = 15.0;

/// Symmetry above which elements mirror across the vertical midline
pub const VERTICAL_SYMMETRY_THRESHOLD: f64 = 0.2;
/// Symmetry above which elements mirror across the horizontal midline
pub const HORIZONTAL_SYMMETRY_THRESHOLD: f64 = 0.6;

/// Contrast above which the fixed dark palette is used
pub const DARK_CONTRAST_THRESHOLD: f64 = 0.7;

/// Opacity of element fills
pub const FILL_OPACITY: f32 = 0.8;

/// Maximum grain offset in each direction, per channel value
pub const GRAIN_AMPLITUDE: f64 = 5.0;

/// Radius of the optional connector endpoint dots
pub const ENDPOINT_DOT_RADIUS: f64 = 2.0;

// Output settings
/// Longest side of exported images in pixels
pub const EXPORT_BASE_SIZE: u32 = 3000;
/// Padding on each side when fitting a preview into a container
pub const PREVIEW_PADDING: u32 = 40;
/// Prefix of exported file names
pub const OUTPUT_PREFIX: &str = "constructivist";

// Safety limit to prevent excessive memory allocation
/// Maximum allowed canvas dimension
pub const MAX_CANVAS_DIMENSION: u32 = 20_000;

/// Width of progress bars in characters
pub const PROGRESS_BAR_WIDTH: u16 = 40;
