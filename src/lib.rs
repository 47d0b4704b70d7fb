/*!
 * # duospeak - Two-Speaker Dialogue to Speech Markup
 *
 * A Rust library for converting two-speaker plain-text dialogue scripts
 * into speech-synthesis markup, with a syntax-highlighted HTML preview.
 *
 * ## Features
 *
 * - Classify dialogue lines by their `A:` / `B:` speaker markers
 * - Bind each speaker to a user-supplied synthesis voice identifier
 * - Emit an SSML-like document (root `<speak>` element wrapping ordered
 *   `<voice>` elements)
 * - Render an HTML-escaped, syntax-colored preview of the document through
 *   a pipeline of decoration stages
 * - Copy the generated document to the system clipboard
 * - Configurable language tag, voices, and output options
 *
 * ## Architecture
 *
 * The library is organized in these main modules:
 * - `app_config`: Configuration management
 * - `dialogue`: Dialogue script parsing and speaker classification
 * - `ssml`: Speech markup document generation
 * - `highlight`: Token-based syntax highlighting:
 *   - `highlight::token`: Token representation and lexer
 *   - `highlight::stages`: Named decoration stages
 * - `clipboard`: System clipboard integration
 * - `file_utils`: File system operations
 * - `app_controller`: Main application controller
 * - `language_utils`: Language tag utilities
 * - `errors`: Custom error types for the application
 *
 * ## License
 *
 * This project is licensed under the MIT License
 */

// Global lints configuration
// These lints will be allowed but not auto-fixed
#![allow(clippy::uninlined_format_args)]
#![allow(clippy::redundant_closure_for_method_calls)]

// Public modules
pub mod app_config;
pub mod app_controller;
pub mod clipboard;
pub mod dialogue;
pub mod errors;
pub mod file_utils;
pub mod highlight;
pub mod language_utils;
pub mod ssml;

// Re-export main types for easier usage
pub use app_config::Config;
pub use app_controller::{Controller, GenerationOutput};
pub use dialogue::{DialogueLine, Speaker, parse_dialogue};
pub use errors::{AppError, ClipboardError, ConfigError};
pub use highlight::highlight;
pub use ssml::{SsmlDocument, VoiceBinding};
