use anyhow::Result;
use clap::{Parser, Subcommand};
use soap_scribe::error::PipelineError;
use soap_scribe::{
    sample, AppState, AudioPayload, Config, Credentials, DeepgramTranscriber, NotePipeline,
    OpenAiSummarizer,
};
use std::path::{Path, PathBuf};
use tracing::info;

#[derive(Parser)]
#[command(
    name = "soap-scribe",
    about = "Transcribe dictated medical notes and summarize them into SOAP format"
)]
struct Cli {
    /// Base path of the configuration file (extension optional)
    #[arg(long, default_value = "config/soap-scribe")]
    config: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Run the HTTP API server
    Serve,
    /// Transcribe and summarize a local audio file (wav, mp3 or m4a)
    Summarize { file: PathBuf },
    /// Print the worked example note and its SOAP summary
    Example,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    match cli.command {
        Command::Serve => serve(&cli.config).await,
        Command::Summarize { file } => summarize(&cli.config, &file).await,
        Command::Example => {
            println!("Sample doctor's note:\n\n{}\n", sample::SAMPLE_NOTE);
            println!("SOAP summary:\n\n{}", sample::SAMPLE_SOAP);
            Ok(())
        }
    }
}

/// Wire real provider clients into a pipeline. Fails at startup when either
/// credential is absent from the environment.
fn build_pipeline(cfg: &Config) -> Result<NotePipeline> {
    let credentials = Credentials::from_env()?;

    let transcriber = DeepgramTranscriber::new(&cfg.transcription, credentials.deepgram_api_key)?;
    let summarizer = OpenAiSummarizer::new(&cfg.summarization, credentials.openai_api_key)?;

    Ok(NotePipeline::new(
        Box::new(transcriber),
        Box::new(summarizer),
    ))
}

async fn serve(config_path: &str) -> Result<()> {
    let cfg = Config::load(config_path)?;

    info!("{} v{}", cfg.service.name, env!("CARGO_PKG_VERSION"));

    let pipeline = build_pipeline(&cfg)?;
    let router = soap_scribe::create_router(AppState::new(pipeline));

    let addr = format!("{}:{}", cfg.service.http.bind, cfg.service.http.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    info!("HTTP server listening on {}", addr);

    axum::serve(listener, router).await?;

    Ok(())
}

async fn summarize(config_path: &str, file: &Path) -> Result<()> {
    let cfg = Config::load(config_path)?;
    let pipeline = build_pipeline(&cfg)?;

    let payload = AudioPayload::from_path(file)?;

    match pipeline.process(&payload).await {
        Ok(summary) => {
            println!("Transcript:\n\n{}\n", summary.transcript);
            println!("SOAP summary:\n\n{}", summary.note);
            Ok(())
        }
        // The transcript was already produced; print it before failing so
        // the user does not have to redo transcription.
        Err(PipelineError::Summarization { transcript, source }) => {
            println!("Transcript:\n\n{}\n", transcript);
            anyhow::bail!("summarization failed: {}", source)
        }
        Err(err) => Err(err.into()),
    }
}
