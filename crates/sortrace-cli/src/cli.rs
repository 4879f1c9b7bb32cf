use std::io::{self, Write};
use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use sortrace_core::{InputPreset, InputSpec, Metrics, generate, generate_named_with_metrics};
use sortrace_runtime::{PlaybackConfig, PlaybackController, PlaybackState};
use web_time::Duration;

use crate::error::{CliError, Result};
use crate::output;

/// Largest array the CLI will generate or accept.
pub const MAX_INPUT_LEN: usize = 100_000;

#[derive(Debug, Parser)]
#[command(
    name = "sortrace",
    about = "Generate and replay step-by-step execution traces of sorting algorithms",
    version
)]
pub struct Cli {
    /// Emit JSON Lines instead of text (errors included).
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// List supported algorithms with their complexity.
    List,

    /// Generate a trace and print its operation log and metrics.
    Generate(GenerateArgs),

    /// Replay a trace through the playback controller on a virtual clock.
    Play(PlayArgs),
}

#[derive(Debug, Clone, Args)]
pub struct InputArgs {
    /// Explicit comma-separated input, e.g. `5,3,8,1`. Overrides the preset.
    #[arg(
        long,
        value_delimiter = ',',
        allow_hyphen_values = true,
        conflicts_with_all = ["preset", "len", "seed", "min", "max"]
    )]
    pub values: Option<Vec<i32>>,

    /// Input preset: random, sorted, reversed, nearly-sorted, few-unique.
    #[arg(long, default_value = "random")]
    pub preset: InputPreset,

    /// Number of generated elements.
    #[arg(long, default_value_t = 32)]
    pub len: usize,

    /// Seed for the preset generator.
    #[arg(long, default_value_t = InputSpec::default().seed)]
    pub seed: u64,

    /// Smallest generated value.
    #[arg(long, default_value_t = 1, allow_hyphen_values = true)]
    pub min: i32,

    /// Largest generated value.
    #[arg(long, default_value_t = 100, allow_hyphen_values = true)]
    pub max: i32,
}

impl InputArgs {
    /// The array these flags describe.
    pub fn resolve(&self) -> Result<Vec<i32>> {
        let values = match &self.values {
            Some(values) => values.clone(),
            None => {
                if self.len > MAX_INPUT_LEN {
                    return Err(CliError::invalid(format!(
                        "--len must be at most {MAX_INPUT_LEN}, got {}",
                        self.len
                    )));
                }
                InputSpec::new(self.preset, self.len)
                    .with_range(self.min, self.max)
                    .with_seed(self.seed)
                    .generate()
            }
        };
        if values.len() > MAX_INPUT_LEN {
            return Err(CliError::invalid(format!(
                "input must have at most {MAX_INPUT_LEN} values, got {}",
                values.len()
            )));
        }
        Ok(values)
    }
}

#[derive(Debug, Clone, Args)]
pub struct GenerateArgs {
    /// Algorithm name, e.g. `bubble`, `merge-sort`, or "Quick Sort".
    pub algorithm: String,

    #[command(flatten)]
    pub input: InputArgs,
}

#[derive(Debug, Clone, Args)]
pub struct PlayArgs {
    /// Algorithm name, e.g. `bubble`, `merge-sort`, or "Quick Sort".
    pub algorithm: String,

    #[command(flatten)]
    pub input: InputArgs,

    /// Jump to this step before playing.
    #[arg(long)]
    pub seek: Option<usize>,

    /// Speed multiplier; clamped to the configured bounds.
    #[arg(long)]
    pub speed: Option<f64>,

    /// Playback configuration file (TOML).
    #[arg(long)]
    pub config: Option<PathBuf>,
}

/// Install the stderr log subscriber. Filter from `SORTRACE_LOG`, default `warn`.
pub fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::try_from_env("SORTRACE_LOG")
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn"));
    // A subscriber may already be installed when embedded; keep it.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .try_init();
}

pub fn run_from_env() -> Result<()> {
    let cli = Cli::parse();
    run(cli)
}

pub fn run(cli: Cli) -> Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    run_to(cli, &mut out)?;
    out.flush()?;
    Ok(())
}

/// Dispatch `cli`, writing command output to `out`.
pub fn run_to(cli: Cli, out: &mut impl Write) -> Result<()> {
    match cli.command {
        Commands::List => output::write_catalogue(out, cli.json),
        Commands::Generate(args) => run_generate(&args, cli.json, out),
        Commands::Play(args) => run_play(&args, cli.json, out),
    }
}

pub fn run_generate(args: &GenerateArgs, json: bool, out: &mut impl Write) -> Result<()> {
    let input = args.input.resolve()?;
    let mut metrics = Metrics::new();
    let trace = generate_named_with_metrics(&args.algorithm, &input, &mut metrics)?;
    tracing::info!(
        algorithm = %trace.algorithm(),
        len = input.len(),
        operations = trace.len(),
        "trace generated"
    );
    output::write_trace(out, &trace, &metrics, json)
}

pub fn run_play(args: &PlayArgs, json: bool, out: &mut impl Write) -> Result<()> {
    if let Some(speed) = args.speed
        && !(speed.is_finite() && speed > 0.0)
    {
        return Err(CliError::invalid(format!(
            "--speed must be a positive number, got {speed}"
        )));
    }

    let config = match &args.config {
        Some(path) => PlaybackConfig::from_toml_file(path)?,
        None => PlaybackConfig::default(),
    };
    let input = args.input.resolve()?;
    let trace = generate(&args.algorithm, &input)?;

    let mut player = PlaybackController::with_config(trace, config)?;
    if let Some(speed) = args.speed {
        player.set_speed(speed);
    }
    if let Some(target) = args.seek {
        player.seek(target);
    }

    output::write_play_start(out, &player, json)?;
    let clock = drive(&mut player, |position, len, clock, op, array| {
        output::write_play_step(out, position, len, clock, op, array, json)
    })?;
    output::write_play_end(out, &player, clock, json)
}

/// Play to completion on a virtual clock, one step delay per tick.
///
/// Returns the virtual time spent.
fn drive<F>(player: &mut PlaybackController, mut on_step: F) -> Result<Duration>
where
    F: FnMut(usize, usize, Duration, &sortrace_core::Operation, &[i32]) -> Result<()>,
{
    player.play();
    let mut clock = Duration::ZERO;
    while player.state() == PlaybackState::Playing {
        let tick = player.step_delay();
        clock = clock.saturating_add(tick);
        let applied = player.advance(tick);
        let first = player.position() - applied.len();
        for (offset, op) in applied.iter().enumerate() {
            on_step(
                first + offset + 1,
                player.len(),
                clock,
                op,
                player.current_array(),
            )?;
        }
    }
    Ok(clock)
}
