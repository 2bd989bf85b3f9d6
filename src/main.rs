// Module-specific lints configuration
#![allow(clippy::uninlined_format_args)]

use anyhow::{Context, Result};
use clap::{CommandFactory, Parser, Subcommand, ValueEnum};
use clap_complete::{Shell, generate};
use log::{Level, LevelFilter, Log, Metadata, Record, SetLoggerError, debug, error, info};
use std::io::Write;
use std::path::PathBuf;

use crate::app_config::Config;
use crate::app_controller::{Controller, PipelineOutcome, SubtitleRequest};
use crate::file_utils::FileManager;

mod app_config;
mod app_controller;
mod backends;
mod errors;
mod file_utils;
mod language_utils;
mod metadata_scraper;
mod pipeline;
mod subtitle_processor;
mod translation;
mod video_id;

/// CLI Wrapper for LogLevel to implement ValueEnum
#[derive(Debug, Clone, ValueEnum)]
enum CliLogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<CliLogLevel> for app_config::LogLevel {
    fn from(cli_level: CliLogLevel) -> Self {
        match cli_level {
            CliLogLevel::Error => app_config::LogLevel::Error,
            CliLogLevel::Warn => app_config::LogLevel::Warn,
            CliLogLevel::Info => app_config::LogLevel::Info,
            CliLogLevel::Debug => app_config::LogLevel::Debug,
            CliLogLevel::Trace => app_config::LogLevel::Trace,
        }
    }
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Generate shell completions for ytsubgen
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// ytsubgen - YouTube subtitle generation and translation
///
/// Resolves a video id out of any common YouTube URL shape, scrapes the
/// watch page for title and caption languages, and drives the configured
/// generation worker to produce an SRT subtitle track.
#[derive(Parser, Debug)]
#[command(name = "ytsubgen")]
#[command(version = "1.0.0")]
#[command(about = "Generate and translate subtitles for YouTube videos")]
#[command(long_about = "ytsubgen turns a YouTube URL into a SubRip subtitle track, translated when a target language is requested.

EXAMPLES:
    ytsubgen \"https://www.youtube.com/watch?v=dQw4w9WgXcQ\"
    ytsubgen -t zh-Hant \"https://youtu.be/dQw4w9WgXcQ\"    # Translate to Traditional Chinese
    ytsubgen -o out/ \"https://youtu.be/dQw4w9WgXcQ\"       # Write <title>.srt into out/
    ytsubgen --info \"https://youtu.be/dQw4w9WgXcQ\"        # Title and caption languages only
    ytsubgen completions bash > ytsubgen.bash              # Generate bash completions

CONFIGURATION:
    Configuration is stored in conf.json by default. You can specify a different
    config file with --config. If the config file doesn't exist, a default one
    will be created automatically.")]
struct CommandLineOptions {
    #[command(subcommand)]
    command: Option<Commands>,

    /// YouTube video URL to process
    #[arg(value_name = "URL")]
    url: Option<String>,

    /// Target language code (e.g., 'en', 'zh-Hant')
    #[arg(short, long)]
    target_language: Option<String>,

    /// Directory to write the .srt file into, instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Fetch title and caption languages only, as JSON
    #[arg(short, long)]
    info: bool,

    /// Configuration file path
    #[arg(short, long, default_value = "conf.json")]
    config_path: String,

    /// Set logging level
    #[arg(short, long, value_enum)]
    log_level: Option<CliLogLevel>,
}

// @struct: Custom logger implementation
struct CustomLogger {
    level: LevelFilter,
}

impl CustomLogger {
    // @creates: New logger with specified level
    fn new(level: LevelFilter) -> Self {
        CustomLogger { level }
    }

    // @initializes: Global logger
    fn init(level: LevelFilter) -> Result<(), SetLoggerError> {
        let logger = Box::new(CustomLogger::new(level));
        log::set_boxed_logger(logger)?;
        log::set_max_level(level);
        Ok(())
    }
}

impl Log for CustomLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            let now = chrono::Local::now().format("%H:%M:%S%.3f");

            let mut stderr = std::io::stderr();
            let _ = match record.level() {
                Level::Error => writeln!(stderr, "\x1B[1;31m{} ERROR {}\x1B[0m", now, record.args()),
                Level::Warn => writeln!(stderr, "\x1B[1;33m{} WARN  {}\x1B[0m", now, record.args()),
                Level::Info => writeln!(stderr, "{} INFO  {}", now, record.args()),
                Level::Debug => writeln!(stderr, "\x1B[2m{} DEBUG {}\x1B[0m", now, record.args()),
                Level::Trace => writeln!(stderr, "\x1B[2m{} TRACE {}\x1B[0m", now, record.args()),
            };
        }
    }

    fn flush(&self) {
        let _ = std::io::stderr().flush();
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let options = CommandLineOptions::parse();

    if let Some(Commands::Completions { shell }) = options.command {
        let mut cmd = CommandLineOptions::command();
        let name = cmd.get_name().to_string();
        generate(shell, &mut cmd, name, &mut std::io::stdout());
        return Ok(());
    }

    let config_path = PathBuf::from(&options.config_path);
    let config = if config_path.exists() {
        Config::from_file(&config_path)?
    } else {
        let config = Config::default();
        config
            .save(&config_path)
            .with_context(|| format!("Failed to create default config at {}", config_path.display()))?;
        config
    };

    let level = options
        .log_level
        .map(app_config::LogLevel::from)
        .unwrap_or(config.log_level)
        .to_level_filter();
    CustomLogger::init(level).context("Failed to initialize logger")?;

    let Some(url) = options.url.clone() else {
        CommandLineOptions::command().print_help()?;
        std::process::exit(2);
    };

    let controller = Controller::from_config(&config)?;

    if options.info {
        return match controller.fetch_video_info(&url).await {
            Ok(metadata) => {
                println!("{}", serde_json::to_string_pretty(&metadata)?);
                Ok(())
            }
            Err(failure) => {
                error!("{}", failure.message);
                std::process::exit(1);
            }
        };
    }

    let mut request = SubtitleRequest::new(url);
    if let Some(language) = options.target_language.clone() {
        request = request.with_target_language(language);
    }

    match controller.process(request).await {
        PipelineOutcome::Success(processed) => {
            info!(
                "Processed \"{}\" ({} caption languages available)",
                processed.title,
                processed.languages.len()
            );

            if let Some(output_dir) = options.output {
                let filename = FileManager::subtitle_filename(
                    &processed.title,
                    options.target_language.as_deref(),
                );
                let path = output_dir.join(filename);
                FileManager::write_to_file(&path, &processed.subtitles)?;
                info!("Wrote subtitles to {}", path.display());
            } else {
                println!("{}", processed.subtitles);
            }
            Ok(())
        }
        PipelineOutcome::Failure(failure) => {
            error!("{}", failure.message);
            if let Some(diagnostics) = &failure.debug {
                debug!(
                    "Worker diagnostics: exit code {:?}, stdout {} bytes, stderr: {}",
                    diagnostics.exit_code, diagnostics.stdout_length, diagnostics.stderr
                );
            }
            std::process::exit(1);
        }
    }
}
