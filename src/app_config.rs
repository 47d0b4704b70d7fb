use serde::{Deserialize, Serialize};
use std::default::Default;

use crate::errors::ConfigError;
use crate::language_utils;

/// Application configuration module
/// This module handles the application configuration including loading,
/// validating and saving configuration settings.
/// Represents the application configuration
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Config {
    /// Language tag for the document root's xml:lang attribute
    #[serde(default = "default_language")]
    pub language: String,

    /// Voice bindings for the two speakers
    #[serde(default)]
    pub voices: VoicesConfig,

    /// Output rendering options
    #[serde(default)]
    pub output: OutputConfig,

    /// Clipboard integration options
    #[serde(default)]
    pub clipboard: ClipboardConfig,

    /// Log level
    #[serde(default)]
    pub log_level: LogLevel,
}

/// Voice identifiers bound to the two speaker markers
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct VoicesConfig {
    // @field: Voice identifier bound to speaker A
    #[serde(default = "default_voice_a")]
    pub voice_a: String,

    // @field: Voice identifier bound to speaker B
    #[serde(default = "default_voice_b")]
    pub voice_b: String,
}

impl Default for VoicesConfig {
    fn default() -> Self {
        Self {
            voice_a: default_voice_a(),
            voice_b: default_voice_b(),
        }
    }
}

/// Output rendering options
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct OutputConfig {
    // @field: Wrap the fragment in a standalone HTML page
    #[serde(default)]
    pub standalone_page: bool,

    // @field: Extension for generated fragments in directory mode
    #[serde(default = "default_fragment_extension")]
    pub fragment_extension: String,

    // @field: Extension for raw markup documents in directory mode
    #[serde(default = "default_document_extension")]
    pub document_extension: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            standalone_page: false,
            fragment_extension: default_fragment_extension(),
            document_extension: default_document_extension(),
        }
    }
}

/// Clipboard integration options
#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq, Eq)]
pub struct ClipboardConfig {
    // @field: Clipboard command override; probed automatically when unset
    #[serde(default)]
    pub tool: Option<String>,
}

/// Log verbosity level
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Error,
    Warn,
    #[default]
    Info,
    Debug,
    Trace,
}

fn default_language() -> String {
    // The language the original tool was built for
    "vi-VN".to_string()
}

fn default_voice_a() -> String {
    "vi-VN-Voice1".to_string()
}

fn default_voice_b() -> String {
    "vi-VN-Voice2".to_string()
}

fn default_fragment_extension() -> String {
    "ssml.html".to_string()
}

fn default_document_extension() -> String {
    "ssml.xml".to_string()
}

impl Config {
    /// Validate the configuration for consistency and required values
    pub fn validate(&self) -> Result<(), ConfigError> {
        // Validate voices: empty identifiers and double quotes would corrupt
        // the name attribute the identifier is inserted into verbatim
        if self.voices.voice_a.is_empty() {
            return Err(ConfigError::EmptyVoice('A'));
        }
        if self.voices.voice_b.is_empty() {
            return Err(ConfigError::EmptyVoice('B'));
        }
        for voice in [&self.voices.voice_a, &self.voices.voice_b] {
            if voice.contains('"') {
                return Err(ConfigError::QuoteInVoice(voice.clone()));
            }
        }

        // Validate the document language tag
        if language_utils::validate_language_tag(&self.language).is_err() {
            return Err(ConfigError::UnknownLanguage(self.language.clone()));
        }

        Ok(())
    }
}

/// Default implementation for Config
impl Default for Config {
    fn default() -> Self {
        Config {
            language: default_language(),
            voices: VoicesConfig::default(),
            output: OutputConfig::default(),
            clipboard: ClipboardConfig::default(),
            log_level: LogLevel::default(),
        }
    }
}
