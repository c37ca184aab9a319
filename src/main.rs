use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;
use std::time::Duration;
use subgloss::config::{Config, Provider};
use subgloss::interactive::run_options_wizard;
use subgloss::translate::{create_factory, TranslationClient};
use subgloss::{print_summary, run_batch, EnhancementOptions, Enhancer, PipelineConfig};
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

#[derive(Parser)]
#[command(name = "subgloss")]
#[command(version, about = "Add translations and vocabulary glosses to SRT subtitles")]
#[command(long_about = "Processes every .srt file in the 'input' folder, appending a machine translation \
and an optional word list to each cue, and moves originals and results to the output folder.")]
struct Cli {
    /// Folder containing the 'input' directory
    #[arg(short, long, default_value = ".")]
    root: PathBuf,

    /// Output folder (defaults to <root>/output)
    #[arg(short, long)]
    output_dir: Option<PathBuf>,

    /// Source language code (e.g., zh-cn, ja, fr)
    #[arg(short, long, default_value = "zh-cn")]
    source: String,

    /// Target language code (e.g., en, es)
    #[arg(short, long, default_value = "en")]
    target: String,

    /// Do not repeat the original text above the translation
    #[arg(long)]
    no_source: bool,

    /// Do not append the vocabulary list
    #[arg(long)]
    no_vocab: bool,

    /// Ask for the options interactively
    #[arg(short, long)]
    interactive: bool,

    /// Translation provider: google, gemini (overrides config)
    #[arg(short, long)]
    provider: Option<String>,

    /// Pause after each cue in milliseconds (overrides config)
    #[arg(long)]
    pacing_ms: Option<u64>,

    /// Hide progress bars
    #[arg(long)]
    quiet: bool,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

fn init_logging(verbose: bool) {
    let level = if verbose { Level::DEBUG } else { Level::INFO };

    FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .compact()
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    init_logging(cli.verbose);

    let options = if cli.interactive {
        run_options_wizard(&EnhancementOptions::default())?
    } else {
        EnhancementOptions::new(&cli.source, &cli.target, !cli.no_source, !cli.no_vocab)?
    };

    let config = Config::load().context("Failed to load configuration")?;
    let provider: Provider = match cli.provider {
        Some(ref p) => p.parse().map_err(|e: String| anyhow::anyhow!(e))?,
        None => config.provider,
    };
    config
        .validate(provider)
        .context("Configuration validation failed")?;

    let pacing_delay = cli
        .pacing_ms
        .map(Duration::from_millis)
        .unwrap_or_else(|| config.pacing_delay());
    let output_dir = cli
        .output_dir
        .clone()
        .unwrap_or_else(|| cli.root.join("output"));

    info!("Root:       {}", cli.root.display());
    info!("Output:     {}", output_dir.display());
    info!("Provider:   {}", provider);

    let factory = create_factory(provider, &config)?;
    let client = TranslationClient::new(factory).with_policy(config.retry_policy());
    let policy = client.policy();
    info!(
        "Backend:    {} ({} attempts, {:?} apart, {:?} timeout)",
        client.backend_name(),
        policy.max_attempts,
        policy.delay,
        config.request_timeout()
    );
    let enhancer = Enhancer::new(
        options,
        client,
        PipelineConfig {
            pacing_delay,
            show_progress: !cli.quiet,
        },
    );

    let summary = run_batch(&cli.root, &output_dir, &enhancer).await?;
    print_summary(&summary);

    Ok(())
}
