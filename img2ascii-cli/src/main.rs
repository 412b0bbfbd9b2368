use clap::{Parser, ValueEnum};
use img2ascii::{
    convert_with_options, render_file, AspectMode, ConversionMode, ConversionOptions, GlyphRamp,
    Resolution,
};
use serde::Deserialize;
use std::fs;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

const EXAMPLE_JSON: &str =
    include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/config.example.json"));

#[derive(Parser, Debug)]
#[command(author, version, about = "Convert PNG, JPEG or GIF images to character art")]
struct Cli {
    /// Image to convert (overrides `input_path` from the config).
    input: Option<PathBuf>,
    /// Write the art here instead of stdout.
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,
    /// Optional JSON configuration file.
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,
    /// Glyph ramp family.
    #[arg(long, value_enum)]
    mode: Option<ModeConfig>,
    /// How the output size follows the image size.
    #[arg(long, value_enum)]
    aspect: Option<AspectConfig>,
    /// Grid width for `--aspect fixed`, or box width for `--aspect scale`.
    #[arg(long)]
    width: Option<usize>,
    /// Grid height for `--aspect fixed`, or box height for `--aspect scale`.
    #[arg(long)]
    height: Option<usize>,
    /// Map dark pixels to light glyphs.
    #[arg(long)]
    reverse: bool,
    /// Custom glyph ramp, darkest first.
    #[arg(long)]
    ramp: Option<String>,
    /// Number of scoring threads.
    #[arg(long)]
    workers: Option<usize>,
    /// Also copy successful output to this file.
    #[arg(long, value_name = "FILE")]
    debug_log: Option<PathBuf>,
    /// Print an example config and exit.
    #[arg(long)]
    print_example: bool,
    /// Enable tracing output.
    #[arg(long)]
    trace: bool,
}

#[derive(Copy, Clone, Debug, Deserialize, ValueEnum)]
#[serde(rename_all = "snake_case")]
enum ModeConfig {
    Default,
    Banner,
}

impl From<ModeConfig> for ConversionMode {
    fn from(value: ModeConfig) -> Self {
        match value {
            ModeConfig::Default => ConversionMode::Default,
            ModeConfig::Banner => ConversionMode::Banner,
        }
    }
}

#[derive(Copy, Clone, Debug, Deserialize, ValueEnum)]
#[serde(rename_all = "snake_case")]
enum AspectConfig {
    Scale,
    Pixel,
    Fixed,
}

impl From<AspectConfig> for AspectMode {
    fn from(value: AspectConfig) -> Self {
        match value {
            AspectConfig::Scale => AspectMode::Scale,
            AspectConfig::Pixel => AspectMode::Pixel,
            AspectConfig::Fixed => AspectMode::Fixed,
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(default)]
struct Config {
    input_path: Option<PathBuf>,
    output_path: Option<PathBuf>,
    mode: ModeConfig,
    aspect: AspectConfig,
    scale_width: usize,
    scale_height: usize,
    fixed_width: usize,
    fixed_height: usize,
    reverse: bool,
    ramp: Option<String>,
    workers: Option<usize>,
    debug_log: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        let opts = ConversionOptions::default();
        Self {
            input_path: None,
            output_path: None,
            mode: ModeConfig::Default,
            aspect: AspectConfig::Scale,
            scale_width: opts.scale_box.width,
            scale_height: opts.scale_box.height,
            fixed_width: opts.fixed_width,
            fixed_height: opts.fixed_height,
            reverse: opts.reverse,
            ramp: None,
            workers: None,
            debug_log: None,
        }
    }
}

impl Config {
    /// Applies command-line flags on top of the file values.
    fn merge(mut self, cli: &Cli) -> Self {
        if let Some(input) = &cli.input {
            self.input_path = Some(input.clone());
        }
        if let Some(output) = &cli.output {
            self.output_path = Some(output.clone());
        }
        if let Some(mode) = cli.mode {
            self.mode = mode;
        }
        if let Some(aspect) = cli.aspect {
            self.aspect = aspect;
        }
        match self.aspect {
            AspectConfig::Fixed => {
                self.fixed_width = cli.width.unwrap_or(self.fixed_width);
                self.fixed_height = cli.height.unwrap_or(self.fixed_height);
            }
            _ => {
                self.scale_width = cli.width.unwrap_or(self.scale_width);
                self.scale_height = cli.height.unwrap_or(self.scale_height);
            }
        }
        self.reverse |= cli.reverse;
        if cli.ramp.is_some() {
            self.ramp = cli.ramp.clone();
        }
        if cli.workers.is_some() {
            self.workers = cli.workers;
        }
        if cli.debug_log.is_some() {
            self.debug_log = cli.debug_log.clone();
        }
        self
    }

    fn options(&self) -> Result<ConversionOptions, img2ascii::Img2AsciiError> {
        let ramp = self.ramp.as_deref().map(GlyphRamp::new).transpose()?;
        Ok(ConversionOptions {
            aspect_mode: self.aspect.into(),
            fixed_width: self.fixed_width,
            fixed_height: self.fixed_height,
            reverse: self.reverse,
            mode: self.mode.into(),
            scale_box: Resolution::new(self.scale_width, self.scale_height),
            ramp,
            workers: self.workers,
            debug_log: self.debug_log.clone(),
        })
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    if cli.trace {
        tracing_subscriber::fmt()
            .with_env_filter(EnvFilter::from_default_env().add_directive("img2ascii=info".parse()?))
            .with_target(false)
            .with_writer(std::io::stderr)
            .init();
    }

    if cli.print_example {
        println!("{EXAMPLE_JSON}");
        return Ok(());
    }

    let config = match &cli.config {
        Some(path) => serde_json::from_str::<Config>(&fs::read_to_string(path)?)?,
        None => Config::default(),
    }
    .merge(&cli);

    let input = config
        .input_path
        .clone()
        .ok_or("an input image is required (argument or `input_path` in the config)")?;
    let options = config.options()?;

    match &config.output_path {
        Some(output) => {
            convert_with_options(&input, output, &options)?;
            tracing::info!(output = %output.display(), "conversion written");
        }
        None => print!("{}", render_file(&input, &options)?),
    }

    Ok(())
}
