use std::{
    path::{Path, PathBuf},
    time::{Duration, Instant},
};

use anyhow::Result;
use clap::{Parser, ValueEnum};
use console::style;
use indicatif::{ProgressBar, ProgressStyle};
use tldw_core::{
    Provider, SummarizerKind, VideoMetadata, create_summarizer, format_summary_markdown,
    load_metadata, load_transcript, save_summary,
};
use tracing_subscriber::EnvFilter;

fn format_duration(d: Duration) -> String {
    let secs = d.as_secs_f64();
    if secs < 60.0 {
        format!("{:.1}s", secs)
    } else {
        format!("{:.0}m {:.0}s", secs / 60.0, secs % 60.0)
    }
}

/// CLI wrapper for SummarizerKind (needed for clap ValueEnum)
#[derive(Clone, Default, ValueEnum)]
enum CliSummarizer {
    Basic,
    #[default]
    Advanced,
    Remote,
}

impl From<CliSummarizer> for SummarizerKind {
    fn from(cli: CliSummarizer) -> Self {
        match cli {
            CliSummarizer::Basic => SummarizerKind::Basic,
            CliSummarizer::Advanced => SummarizerKind::Advanced,
            CliSummarizer::Remote => SummarizerKind::Remote,
        }
    }
}

/// CLI wrapper for Provider enum (needed for clap ValueEnum)
#[derive(Clone, Default, ValueEnum)]
enum CliProvider {
    #[default]
    Openai,
    Grok,
    Gemini,
}

impl From<CliProvider> for Provider {
    fn from(cli: CliProvider) -> Self {
        match cli {
            CliProvider::Openai => Provider::Openai,
            CliProvider::Grok => Provider::Grok,
            CliProvider::Gemini => Provider::Gemini,
        }
    }
}

#[derive(Parser)]
#[command(name = "tldw")]
#[command(about = "Summarize a video transcript and extract its key points")]
struct Cli {
    /// Transcript file: `.json` holds {text, segments}, anything else is plain text
    transcript: PathBuf,

    /// Original video URL
    #[arg(short, long)]
    url: Option<String>,

    /// Video title. Defaults to the metadata title, then the transcript file name.
    #[arg(short, long)]
    title: Option<String>,

    /// Video duration in seconds
    #[arg(short, long)]
    duration: Option<f64>,

    /// Video metadata JSON file; --title and --duration take precedence
    #[arg(short, long)]
    metadata: Option<PathBuf>,

    /// Summarization method
    #[arg(short, long, default_value = "advanced")]
    summarizer: CliSummarizer,

    /// Hosted provider used by the remote summarizer
    #[arg(short, long, default_value = "openai")]
    provider: CliProvider,

    /// Print the summary as JSON instead of Markdown
    #[arg(long)]
    json: bool,

    /// Also write the summary JSON to this file
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Log pipeline details to stderr
    #[arg(short, long)]
    verbose: bool,
}

fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn create_spinner(msg: &str) -> Result<ProgressBar> {
    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::default_spinner()
            .tick_chars("⠁⠂⠄⡀⢀⠠⠐⠈ ")
            .template("{spinner:.cyan} {msg}")?,
    );
    pb.set_message(msg.to_string());
    pb.enable_steady_tick(Duration::from_millis(80));
    Ok(pb)
}

fn file_title(path: &Path) -> String {
    path.file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_default()
}

#[tokio::main]
async fn main() -> Result<()> {
    // Provider API keys may live in a local .env
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let requested: SummarizerKind = cli.summarizer.into();
    let provider: Provider = cli.provider.into();

    eprintln!(
        "\n{}  {}\n",
        style("tldw").cyan().bold(),
        style("Transcript Summarizer").dim()
    );

    let transcript = load_transcript(&cli.transcript).await?;
    eprintln!(
        "{} Loaded transcript: {} words, {} segments",
        style("✓").green().bold(),
        transcript.word_count(),
        transcript.segments.len()
    );

    let mut metadata = match &cli.metadata {
        Some(path) => load_metadata(path).await?,
        None => VideoMetadata::default(),
    };
    if let Some(title) = cli.title {
        metadata.title = title;
    }
    if let Some(duration) = cli.duration {
        metadata.duration = duration;
    }
    if metadata.title.is_empty() {
        metadata.title = file_title(&cli.transcript);
    }
    let url = cli.url.unwrap_or_default();

    let summarizer = create_summarizer(requested, provider);
    if summarizer.kind() != requested {
        eprintln!(
            "{} {} API key not set ({}), using the {} summarizer",
            style("!").yellow().bold(),
            provider.name(),
            provider.config().env_var,
            summarizer.kind().name()
        );
    }

    let label = match summarizer.kind() {
        SummarizerKind::Remote => format!("remote ({})", provider.name()),
        kind => kind.name().to_string(),
    };

    eprintln!("{}", style("─".repeat(60)).dim());
    let step_start = Instant::now();
    let spinner = create_spinner(&format!("Summarizing with the {} summarizer...", label))?;
    let summary = match summarizer.summarize(&url, &metadata, &transcript).await {
        Ok(summary) => summary,
        Err(e) => {
            spinner.finish_and_clear();
            eprintln!("{} {}", style("Error:").red().bold(), e);
            std::process::exit(1);
        }
    };
    spinner.finish_with_message(format!(
        "{} Summarized: {} key points {}",
        style("✓").green().bold(),
        summary.key_points.len(),
        style(format!("[{}]", format_duration(step_start.elapsed()))).dim()
    ));

    if let Some(path) = &cli.output {
        save_summary(&summary, path).await?;
        eprintln!("{} {}", style("Saved:").dim(), style(path.display()).cyan());
    }
    eprintln!("{}\n", style("─".repeat(60)).dim());

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
    } else {
        println!("{}", format_summary_markdown(&summary));
    }

    Ok(())
}
