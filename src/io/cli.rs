//! Command-line interface for rendering compositions to PNG files

use crate::composition::config::{ArtConfig, AspectRatio, random_seed, scale_dimensions};
use crate::composition::pipeline::{RenderOptions, render};
use crate::io::configuration::{
    DEFAULT_CIRCLE_EMPHASIS, DEFAULT_COMPLEXITY, DEFAULT_CONTRAST, DEFAULT_LINE_DENSITY,
    DEFAULT_SYMMETRY, EXPORT_BASE_SIZE, GRAIN_AMPLITUDE, PREVIEW_PADDING,
};
use crate::io::error::{Result, invalid_parameter};
use crate::io::image::{export_png, output_path};
use crate::io::progress::ProgressManager;
use crate::raster::grain::GrainSource;
use clap::Parser;
use std::path::PathBuf;
use std::time::Instant;
use tracing::{Level, debug};

/// Parse a `WIDTHxHEIGHT` container size
///
/// # Errors
///
/// Returns a message if the value is not two positive integers separated by `x`
pub fn parse_container(value: &str) -> std::result::Result<(u32, u32), String> {
    let (w, h) = value
        .split_once(['x', 'X'])
        .ok_or_else(|| format!("expected WIDTHxHEIGHT, got '{value}'"))?;
    let width = w
        .trim()
        .parse::<u32>()
        .map_err(|e| format!("invalid width '{w}': {e}"))?;
    let height = h
        .trim()
        .parse::<u32>()
        .map_err(|e| format!("invalid height '{h}': {e}"))?;
    Ok((width, height))
}

#[derive(Parser)]
#[command(name = "constructivist")]
#[command(
    author,
    version,
    about = "Render seeded constructivist compositions to PNG"
)]
/// Command-line arguments for the composition generator
// CLI tools commonly need multiple boolean flags for various features and user preferences
#[allow(clippy::struct_excessive_bools)]
pub struct Cli {
    /// Seed string; a random one is generated when omitted
    #[arg(short, long)]
    pub seed: Option<String>,

    /// Number of compositions to render
    #[arg(short = 'n', long, default_value_t = 1)]
    pub count: usize,

    /// Element and connector count, 0 to 1
    #[arg(short, long, default_value_t = DEFAULT_COMPLEXITY)]
    pub complexity: f64,

    /// Grid line and hatching frequency, 0 to 1
    #[arg(short, long, default_value_t = DEFAULT_LINE_DENSITY)]
    pub line_density: f64,

    /// Likelihood of circular elements, 0 to 1
    #[arg(long, default_value_t = DEFAULT_CIRCLE_EMPHASIS)]
    pub circle_emphasis: f64,

    /// Mirroring: none, vertical above 0.2, both axes above 0.6
    #[arg(long, default_value_t = DEFAULT_SYMMETRY)]
    pub symmetry: f64,

    /// Light palette up to 0.7, dark above
    #[arg(long, default_value_t = DEFAULT_CONTRAST)]
    pub contrast: f64,

    /// Aspect ratio: 1:1, 4:5, 9:16 or 16:9
    #[arg(short, long, default_value_t = AspectRatio::default())]
    pub aspect_ratio: AspectRatio,

    /// Longest side of the exported image in pixels
    #[arg(long, default_value_t = EXPORT_BASE_SIZE)]
    pub size: u32,

    /// Explicit width in pixels (derives height from the aspect ratio if alone)
    #[arg(short = 'w', long)]
    pub width: Option<u32>,

    /// Explicit height in pixels (derives width from the aspect ratio if alone)
    #[arg(short = 'H', long)]
    pub height: Option<u32>,

    /// Fit the canvas inside a WIDTHxHEIGHT container, as a preview would
    #[arg(long, value_parser = parse_container)]
    pub fit: Option<(u32, u32)>,

    /// Device pixel ratio applied to the resolved dimensions
    #[arg(long, default_value_t = 1.0)]
    pub scale: f64,

    /// Output directory
    #[arg(short, long, default_value = ".")]
    pub output: PathBuf,

    /// Grain entropy: entropy, seeded or off
    #[arg(short, long, default_value_t = GrainSource::default())]
    pub grain: GrainSource,

    /// Mark connector endpoints with dots
    #[arg(long)]
    pub endpoint_dots: bool,

    /// Render even if the output file exists
    #[arg(long)]
    pub no_skip: bool,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,

    /// Log composition details
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// Check if existing output files should be skipped
    pub const fn skip_existing(&self) -> bool {
        !self.no_skip
    }

    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }

    /// Most verbose level the log subscriber records
    pub const fn log_level(&self) -> Level {
        if self.verbose { Level::DEBUG } else { Level::WARN }
    }

    /// Install the global log subscriber, writing to stderr
    ///
    /// Called once by the binary before any rendering.
    ///
    /// # Panics
    ///
    /// Panics if a global subscriber has already been installed
    pub fn init_tracing(&self) {
        tracing_subscriber::fmt()
            .with_max_level(self.log_level())
            .with_writer(std::io::stderr)
            .with_target(false)
            .init();
    }

    /// Canvas dimensions from the explicit size, the container fit or the export size
    pub fn dimensions(&self) -> (u32, u32) {
        let ratio = self.aspect_ratio.ratio();
        let resolved = match (self.width, self.height, self.fit) {
            (Some(w), Some(h), _) => (w, h),
            (Some(w), None, _) => (w, (f64::from(w) / ratio).floor() as u32),
            (None, Some(h), _) => ((f64::from(h) * ratio).floor() as u32, h),
            (None, None, Some((cw, ch))) => self.aspect_ratio.fit_within(cw, ch, PREVIEW_PADDING),
            (None, None, None) => self.aspect_ratio.export_dimensions(self.size),
        };
        scale_dimensions(resolved, self.scale)
    }

    /// Seeds of the batch, in rendering order
    ///
    /// A given seed with a count above one yields `seed-1`, `seed-2`, ...
    pub fn seeds(&self) -> Vec<String> {
        match (&self.seed, self.count) {
            (Some(seed), 0 | 1) => vec![seed.clone()],
            (Some(seed), count) => (1..=count).map(|i| format!("{seed}-{i}")).collect(),
            (None, count) => (0..count.max(1)).map(|_| random_seed()).collect(),
        }
    }

    /// Configuration record for one seed
    pub fn config_for(&self, seed: &str) -> ArtConfig {
        ArtConfig {
            seed: seed.to_string(),
            complexity: self.complexity,
            line_density: self.line_density,
            circle_emphasis: self.circle_emphasis,
            symmetry: self.symmetry,
            contrast_mode: self.contrast,
            aspect_ratio: self.aspect_ratio,
        }
    }

    /// Painting options
    pub const fn render_options(&self) -> RenderOptions {
        RenderOptions {
            grain: self.grain,
            grain_amplitude: GRAIN_AMPLITUDE,
            endpoint_dots: self.endpoint_dots,
        }
    }
}

/// Renders every seed of a CLI invocation with progress tracking
pub struct RenderBatch {
    cli: Cli,
    progress_manager: Option<ProgressManager>,
}

impl RenderBatch {
    /// Create a batch from parsed arguments
    pub fn new(cli: Cli) -> Self {
        let progress_manager = cli.should_show_progress().then(ProgressManager::new);

        Self {
            cli,
            progress_manager,
        }
    }

    /// Render and export every seed
    ///
    /// Returns the paths written, skipped outputs excluded.
    ///
    /// # Errors
    ///
    /// Returns an error if a configuration is invalid, the dimensions are degenerate or an
    /// export fails
    pub fn process(&mut self) -> Result<Vec<PathBuf>> {
        if !self.cli.scale.is_finite() || self.cli.scale <= 0.0 {
            return Err(invalid_parameter(
                "scale",
                &self.cli.scale,
                &"must be a positive number",
            ));
        }

        let seeds = self.cli.seeds();
        let dimensions = self.cli.dimensions();
        let options = self.cli.render_options();
        debug!(
            renders = seeds.len(),
            width = dimensions.0,
            height = dimensions.1,
            "starting batch"
        );

        if let Some(ref mut pm) = self.progress_manager {
            pm.initialize(seeds.len());
        }

        let mut written = Vec::with_capacity(seeds.len());
        for seed in &seeds {
            let path = output_path(&self.cli.output, seed);
            if self.cli.skip_existing() && path.exists() {
                if let Some(ref mut pm) = self.progress_manager {
                    pm.skip_render(&path);
                }
                continue;
            }

            let start_time = Instant::now();
            if let Some(ref pm) = self.progress_manager {
                pm.start_render(seed, dimensions);
            }

            let config = self.cli.config_for(seed);
            let image = render(&config, dimensions.0, dimensions.1, &options)?;
            export_png(&image, &path)?;

            if let Some(ref mut pm) = self.progress_manager {
                pm.complete_render(&path, start_time.elapsed());
            }
            written.push(path);
        }

        if let Some(ref pm) = self.progress_manager {
            pm.finish();
        }

        Ok(written)
    }
}
