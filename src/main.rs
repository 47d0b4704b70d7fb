// Module-specific lints configuration
#![allow(clippy::uninlined_format_args)]

use anyhow::{Context, Result, anyhow};
use clap::{CommandFactory, Parser, Subcommand, ValueEnum};
use clap_complete::{Shell, generate};
use log::{Level, LevelFilter, Log, Metadata, Record, SetLoggerError, warn};
use std::fs::File;
use std::io::BufReader;
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::app_config::Config;
use crate::clipboard::SystemClipboard;
use crate::file_utils::FileManager;
use app_controller::Controller;

mod app_config;
mod app_controller;
mod clipboard;
mod dialogue;
mod errors;
mod file_utils;
mod highlight;
mod language_utils;
mod ssml;

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

fn level_filter_for(level: &app_config::LogLevel) -> LevelFilter {
    match level {
        app_config::LogLevel::Error => LevelFilter::Error,
        app_config::LogLevel::Warn => LevelFilter::Warn,
        app_config::LogLevel::Info => LevelFilter::Info,
        app_config::LogLevel::Debug => LevelFilter::Debug,
        app_config::LogLevel::Trace => LevelFilter::Trace,
    }
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Generate speech markup from a dialogue script (default command)
    #[command(alias = "gen")]
    Generate(GenerateArgs),

    /// Generate shell completions for duospeak
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[derive(Parser, Debug)]
struct GenerateArgs {
    /// Input dialogue script file or directory ('-' or omitted reads stdin)
    #[arg(value_name = "INPUT_PATH")]
    input_path: Option<PathBuf>,

    /// Voice identifier for speaker A
    #[arg(short = 'a', long)]
    voice_a: Option<String>,

    /// Voice identifier for speaker B
    #[arg(short = 'b', long)]
    voice_b: Option<String>,

    /// Language tag for the document's xml:lang attribute
    #[arg(short, long)]
    language: Option<String>,

    /// Write the highlighted fragment to this file instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Also write the raw markup document to this file
    #[arg(long)]
    ssml_output: Option<PathBuf>,

    /// Copy the raw markup document to the system clipboard
    #[arg(short, long)]
    copy: bool,

    /// Wrap the fragment in a standalone HTML page
    #[arg(long)]
    page: bool,

    /// Force overwrite of existing output files
    #[arg(short, long)]
    force_overwrite: bool,

    /// Configuration file path
    #[arg(long, default_value = "conf.json")]
    config_path: String,

    /// Set logging level
    #[arg(long, value_enum)]
    log_level: Option<CliLogLevel>,
}

/// duospeak - Two-Speaker Dialogue to Speech Markup
///
/// Converts a two-speaker plain-text dialogue script into speech-synthesis
/// markup and renders a syntax-highlighted HTML preview of it.
#[derive(Parser, Debug)]
#[command(name = "duospeak")]
#[command(version = "1.0.0")]
#[command(about = "Dialogue-to-SSML generator with highlighted preview")]
#[command(long_about = "duospeak converts two-speaker dialogue scripts into speech-synthesis markup.

Lines starting with 'A:' are spoken by voice A, lines starting with 'B:' by
voice B; anything else is skipped. The generated document is printed as a
syntax-highlighted HTML fragment, and the raw markup can be written to a file
or copied to the system clipboard.

EXAMPLES:
    duospeak dialogue.txt                        # Preview markup for a script
    duospeak -a vi-VN-Voice1 -b vi-VN-Voice2 -   # Read the script from stdin
    duospeak -l en-US dialogue.txt               # Override the language tag
    duospeak -c dialogue.txt                     # Also copy the raw markup
    duospeak --ssml-output out.xml dialogue.txt  # Save the raw markup
    duospeak --page -o preview.html dialogue.txt # Standalone HTML page
    duospeak /scripts/                           # Process a whole directory
    duospeak completions bash > duospeak.bash    # Generate bash completions

CONFIGURATION:
    Configuration is stored in conf.json by default. You can specify a
    different config file with --config-path. If the config file doesn't
    exist, a default one will be created automatically.")]
struct CommandLineOptions {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Input dialogue script file or directory ('-' or omitted reads stdin)
    #[arg(value_name = "INPUT_PATH")]
    input_path: Option<PathBuf>,

    /// Voice identifier for speaker A
    #[arg(short = 'a', long)]
    voice_a: Option<String>,

    /// Voice identifier for speaker B
    #[arg(short = 'b', long)]
    voice_b: Option<String>,

    /// Language tag for the document's xml:lang attribute
    #[arg(short, long)]
    language: Option<String>,

    /// Write the highlighted fragment to this file instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Also write the raw markup document to this file
    #[arg(long)]
    ssml_output: Option<PathBuf>,

    /// Copy the raw markup document to the system clipboard
    #[arg(short, long)]
    copy: bool,

    /// Wrap the fragment in a standalone HTML page
    #[arg(long)]
    page: bool,

    /// Force overwrite of existing output files
    #[arg(short, long)]
    force_overwrite: bool,

    /// Configuration file path
    #[arg(long, default_value = "conf.json")]
    config_path: String,

    /// Set logging level
    #[arg(long, value_enum)]
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

    // @returns: Emoji for log level
    fn get_emoji_for_level(level: Level) -> &'static str {
        match level {
            Level::Error => "❌ ",
            Level::Warn => "🚧 ",
            Level::Info => " ",
            Level::Debug => "🔍 ",
            Level::Trace => "📋 ",
        }
    }

    // @returns: ANSI color prefix for log level
    fn get_color_for_level(level: Level) -> &'static str {
        match level {
            Level::Error => "\x1B[1;31m",
            Level::Warn => "\x1B[1;33m",
            Level::Info => "\x1B[1;32m",
            Level::Debug => "\x1B[1;36m",
            Level::Trace => "\x1B[1;35m",
        }
    }
}

impl Log for CustomLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            let now = chrono::Local::now().format("%H:%M:%S.%3f");
            let emoji = Self::get_emoji_for_level(record.level());
            let color = Self::get_color_for_level(record.level());

            let mut stderr = std::io::stderr();
            let _ = writeln!(stderr, "{}{} {} {}\x1B[0m", color, now, emoji, record.args());
        }
    }

    fn flush(&self) {
        let _ = std::io::stderr().flush();
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize the logger once with info level by default
    // We'll update the level after loading the config if needed
    CustomLogger::init(LevelFilter::Info)?;

    // Parse command line arguments using clap
    let cli = CommandLineOptions::parse();

    // Handle subcommands
    match cli.command {
        Some(Commands::Completions { shell }) => {
            let mut cmd = CommandLineOptions::command();
            generate(shell, &mut cmd, "duospeak", &mut std::io::stdout());
            Ok(())
        }
        Some(Commands::Generate(args)) => run_generate(args).await,
        None => {
            // Default behavior - use top-level args for backwards compatibility
            let generate_args = GenerateArgs {
                input_path: cli.input_path,
                voice_a: cli.voice_a,
                voice_b: cli.voice_b,
                language: cli.language,
                output: cli.output,
                ssml_output: cli.ssml_output,
                copy: cli.copy,
                page: cli.page,
                force_overwrite: cli.force_overwrite,
                config_path: cli.config_path,
                log_level: cli.log_level,
            };
            run_generate(generate_args).await
        }
    }
}

async fn run_generate(options: GenerateArgs) -> Result<()> {
    // If log level is set via command line, apply it immediately
    if let Some(cmd_log_level) = &options.log_level {
        let config_log_level: app_config::LogLevel = cmd_log_level.clone().into();
        log::set_max_level(level_filter_for(&config_log_level));
    }

    // Load or create configuration
    let config_path = &options.config_path;
    let mut config = if Path::new(config_path).exists() {
        // Load existing configuration
        let file = File::open(config_path)
            .context(format!("Failed to open config file: {}", config_path))?;

        let reader = BufReader::new(file);
        let config: Config = serde_json::from_reader(reader)
            .context(format!("Failed to parse config file: {}", config_path))?;

        config
    } else {
        // Create default configuration if not exists
        warn!(
            "Config file not found at '{}', creating default config.",
            config_path
        );

        let config = Config::default();

        // Save default config
        let config_json = serde_json::to_string_pretty(&config)
            .context("Failed to serialize default config to JSON")?;

        std::fs::write(config_path, config_json)
            .context(format!("Failed to write default config to file: {}", config_path))?;

        config
    };

    // Override config with CLI options if provided
    if let Some(voice_a) = &options.voice_a {
        config.voices.voice_a = voice_a.clone();
    }
    if let Some(voice_b) = &options.voice_b {
        config.voices.voice_b = voice_b.clone();
    }
    if let Some(language) = &options.language {
        config.language = language.clone();
    }
    if options.page {
        config.output.standalone_page = true;
    }
    if let Some(log_level) = &options.log_level {
        config.log_level = log_level.clone().into();
    }

    // Validate the configuration after loading and overriding
    config
        .validate()
        .context("Configuration validation failed")?;

    // If log level was not set via command line, update it from config now
    if options.log_level.is_none() {
        log::set_max_level(level_filter_for(&config.log_level));
    }

    // Create controller
    let mut controller = Controller::with_config(config.clone())?;

    // Directory input: process every dialogue script it contains
    if let Some(input_path) = &options.input_path {
        if input_path.is_dir() {
            controller.run_folder(input_path, options.force_overwrite)?;
            return Ok(());
        }
    }

    // Single script: a file, or stdin when the path is '-' or omitted
    let script = read_script(options.input_path.as_deref())?;

    let generated = controller.generate(&script);

    let rendered = if config.output.standalone_page {
        highlight::wrap_standalone_page(&generated.fragment)
    } else {
        generated.fragment.clone()
    };

    match &options.output {
        Some(output_path) => {
            write_output_file(output_path, &rendered, options.force_overwrite)?;
        }
        None => println!("{}", rendered),
    }

    if let Some(ssml_path) = &options.ssml_output {
        write_output_file(ssml_path, &generated.document, options.force_overwrite)?;
    }

    if options.copy {
        let writer = match &config.clipboard.tool {
            Some(tool) => SystemClipboard::with_tool(tool),
            None => SystemClipboard::new(),
        };
        controller.copy_to_clipboard(&writer).await;
    }

    Ok(())
}

// Read the dialogue script from a file, or from stdin for '-' / no path
fn read_script(input_path: Option<&Path>) -> Result<String> {
    match input_path {
        Some(path) if path != Path::new("-") => {
            if !path.exists() {
                return Err(anyhow!("Input path does not exist: {:?}", path));
            }
            FileManager::read_to_string(path)
        }
        _ => std::io::read_to_string(std::io::stdin()).context("Failed to read script from stdin"),
    }
}

fn write_output_file(path: &Path, content: &str, force_overwrite: bool) -> Result<()> {
    if path.exists() && !force_overwrite {
        warn!(
            "Output file already exists: {:?}. Use -f to force overwrite.",
            path
        );
        return Ok(());
    }
    FileManager::write_to_file(path, content)
}
