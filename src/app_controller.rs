use anyhow::Result;
use indicatif::{ProgressBar, ProgressStyle};
use log::{debug, error, info, warn};
use std::path::Path;
use std::time::Duration;

use crate::app_config::Config;
use crate::clipboard::ClipboardWriter;
use crate::dialogue;
use crate::file_utils::FileManager;
use crate::highlight;
use crate::ssml::{SsmlDocument, VoiceBinding};

// @module: Application controller for markup generation

/// How long the copy acknowledgment stays visible
const COPY_ACK_DURATION: Duration = Duration::from_secs(2);

/// Output of one generation request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationOutput {
    /// The markup document, exactly as constructed (unescaped)
    pub document: String,
    /// The HTML fragment with decoration spans
    pub fragment: String,
}

/// Main application controller for dialogue-to-markup generation.
///
/// The controller owns the last generated markup document as explicit
/// state; the copy action borrows it rather than reaching for a global.
pub struct Controller {
    // @field: App configuration
    config: Config,
    // @field: Last generated markup document, retained verbatim for copying
    last_document: Option<String>,
}

impl Controller {
    /// Create a new controller for test purposes with default configuration
    pub fn new_for_test() -> Result<Self> {
        Self::with_config(Config::default())
    }

    // @method: Create a new controller with the given configuration
    pub fn with_config(config: Config) -> Result<Self> {
        config.validate()?;

        Ok(Self {
            config,
            last_document: None,
        })
    }

    /// Last generated markup document, if any
    pub fn last_document(&self) -> Option<&str> {
        self.last_document.as_deref()
    }

    /// Generate the markup document and highlighted fragment for a script.
    ///
    /// Everything from the previous generation is discarded wholesale; the
    /// new document is retained for a later copy action.
    pub fn generate(&mut self, script: &str) -> GenerationOutput {
        let lines = dialogue::parse_dialogue(script);
        debug!("Classified {} dialogue line(s)", lines.len());

        let voices = VoiceBinding::new(&self.config.voices.voice_a, &self.config.voices.voice_b);
        let document =
            SsmlDocument::from_dialogue(&lines, &voices, &self.config.language).to_string();
        let fragment = highlight::highlight(&document);

        self.last_document = Some(document.clone());

        GenerationOutput { document, fragment }
    }

    /// Copy the retained document to the system clipboard.
    ///
    /// Failure is logged and swallowed; the copy action never aborts the
    /// surrounding workflow. Copying before any generation, or after a
    /// generation that produced an empty dialogue, writes what is retained
    /// (possibly the empty string) and is not an error.
    pub async fn copy_to_clipboard(&self, writer: &dyn ClipboardWriter) -> bool {
        let document = self.last_document.as_deref().unwrap_or("");

        match writer.write(document).await {
            Ok(()) => {
                Self::show_copy_acknowledgment().await;
                true
            }
            Err(e) => {
                error!("Failed to copy document to clipboard: {}", e);
                false
            }
        }
    }

    // Transient acknowledgment, shown for a fixed duration and then cleared
    async fn show_copy_acknowledgment() {
        let ack = ProgressBar::new_spinner();
        if let Ok(style) = ProgressStyle::with_template("{msg}") {
            ack.set_style(style);
        }
        ack.set_message("✅ Copied!");
        tokio::time::sleep(COPY_ACK_DURATION).await;
        ack.finish_and_clear();
    }

    /// Process one dialogue script file, writing the fragment and the raw
    /// document next to it.
    pub fn run_file(&mut self, input_file: &Path, force_overwrite: bool) -> Result<GenerationOutput> {
        let fragment_path =
            FileManager::generate_output_path(input_file, &self.config.output.fragment_extension);
        let document_path =
            FileManager::generate_output_path(input_file, &self.config.output.document_extension);

        if (fragment_path.exists() || document_path.exists()) && !force_overwrite {
            warn!(
                "Skipping {:?}, output already exists (use -f to force overwrite)",
                input_file
            );
            return Ok(GenerationOutput {
                document: String::new(),
                fragment: String::new(),
            });
        }

        let script = FileManager::read_to_string(input_file)?;
        let output = self.generate(&script);

        let fragment_file_content = if self.config.output.standalone_page {
            highlight::wrap_standalone_page(&output.fragment)
        } else {
            output.fragment.clone()
        };

        FileManager::write_to_file(&fragment_path, &fragment_file_content)?;
        FileManager::write_to_file(&document_path, &output.document)?;
        info!("Generated {:?} and {:?}", fragment_path, document_path);

        Ok(output)
    }

    /// Process every dialogue script in a directory
    pub fn run_folder(&mut self, input_dir: &Path, force_overwrite: bool) -> Result<usize> {
        let scripts = FileManager::find_dialogue_scripts(input_dir)?;
        if scripts.is_empty() {
            warn!("No dialogue scripts (.txt) found in {:?}", input_dir);
            return Ok(0);
        }

        let mut processed_count = 0;

        for script in &scripts {
            info!("Processing script: {:?}", script);
            if let Err(e) = self.run_file(script, force_overwrite) {
                error!("Error processing file: {}", e);
            } else {
                processed_count += 1;
            }
        }

        info!("Finished processing {} file(s)", processed_count);
        Ok(processed_count)
    }
}
