/*!
 * System clipboard integration.
 *
 * Writes text to the system clipboard by piping it into an available
 * clipboard utility (wl-copy, xclip, xsel, pbcopy). The write is the only
 * asynchronous boundary in the application; there is no cancellation,
 * timeout, or retry for a pending write.
 */

use async_trait::async_trait;
use log::debug;
use std::process::Stdio;
use std::sync::{Arc, Mutex};
use tokio::io::AsyncWriteExt;
use tokio::process::Command;

use crate::errors::ClipboardError;

/// Candidate clipboard commands, probed in order
const CLIPBOARD_COMMANDS: [(&str, &[&str]); 4] = [
    ("wl-copy", &[]),
    ("xclip", &["-selection", "clipboard"]),
    ("xsel", &["--clipboard", "--input"]),
    ("pbcopy", &[]),
];

/// Common trait for clipboard writers
///
/// This trait is the seam between the copy action and the host system,
/// allowing the system clipboard to be replaced by a mock in tests.
#[async_trait]
pub trait ClipboardWriter: Send + Sync {
    /// Write the given text to the clipboard
    async fn write(&self, text: &str) -> Result<(), ClipboardError>;
}

/// Clipboard writer backed by a system clipboard utility
#[derive(Debug, Default)]
pub struct SystemClipboard {
    /// Command override from configuration; probed when unset
    tool: Option<String>,
}

impl SystemClipboard {
    /// Create a clipboard writer that probes for an available utility
    pub fn new() -> Self {
        SystemClipboard { tool: None }
    }

    /// Force a specific clipboard command instead of probing
    pub fn with_tool(tool: &str) -> Self {
        SystemClipboard {
            tool: Some(tool.to_string()),
        }
    }

    fn command_in_path(name: &str) -> bool {
        let Some(paths) = std::env::var_os("PATH") else {
            return false;
        };
        std::env::split_paths(&paths).any(|dir| dir.join(name).is_file())
    }

    fn resolve_command(&self) -> Result<(String, Vec<String>), ClipboardError> {
        if let Some(tool) = &self.tool {
            // An explicit override is trusted as-is; known tools still get
            // their selection arguments
            let args = CLIPBOARD_COMMANDS
                .iter()
                .find(|(name, _)| *name == tool.as_str())
                .map(|(_, args)| args.iter().map(|a| a.to_string()).collect())
                .unwrap_or_default();
            return Ok((tool.clone(), args));
        }

        for (name, args) in CLIPBOARD_COMMANDS {
            if Self::command_in_path(name) {
                return Ok((
                    name.to_string(),
                    args.iter().map(|a| a.to_string()).collect(),
                ));
            }
        }

        Err(ClipboardError::NoBackend)
    }
}

#[async_trait]
impl ClipboardWriter for SystemClipboard {
    async fn write(&self, text: &str) -> Result<(), ClipboardError> {
        let (command, args) = self.resolve_command()?;
        debug!("Writing {} byte(s) to clipboard via {}", text.len(), command);

        let mut child = Command::new(&command)
            .args(&args)
            .stdin(Stdio::piped())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
            .map_err(|source| ClipboardError::Spawn {
                command: command.clone(),
                source,
            })?;

        let mut stdin = child.stdin.take().ok_or_else(|| ClipboardError::Write {
            command: command.clone(),
            source: std::io::Error::other("stdin not captured"),
        })?;
        stdin
            .write_all(text.as_bytes())
            .await
            .map_err(|source| ClipboardError::Write {
                command: command.clone(),
                source,
            })?;
        drop(stdin);

        let status = child.wait().await.map_err(|source| ClipboardError::Write {
            command: command.clone(),
            source,
        })?;
        if !status.success() {
            return Err(ClipboardError::NonZeroExit { command, status });
        }

        Ok(())
    }
}

/// Behavior mode for the mock clipboard
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MockBehavior {
    /// Every write succeeds
    Working,
    /// Every write fails as if no utility were installed
    Failing,
}

/// Mock clipboard for testing the copy action
#[derive(Debug)]
pub struct MockClipboard {
    behavior: MockBehavior,
    /// Texts written so far, in order
    writes: Arc<Mutex<Vec<String>>>,
}

impl MockClipboard {
    /// Create a mock clipboard that always succeeds
    pub fn working() -> Self {
        MockClipboard {
            behavior: MockBehavior::Working,
            writes: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Create a mock clipboard that always fails
    pub fn failing() -> Self {
        MockClipboard {
            behavior: MockBehavior::Failing,
            writes: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Texts successfully written so far
    pub fn writes(&self) -> Vec<String> {
        self.writes.lock().expect("mock clipboard lock poisoned").clone()
    }
}

#[async_trait]
impl ClipboardWriter for MockClipboard {
    async fn write(&self, text: &str) -> Result<(), ClipboardError> {
        match self.behavior {
            MockBehavior::Working => {
                self.writes
                    .lock()
                    .expect("mock clipboard lock poisoned")
                    .push(text.to_string());
                Ok(())
            }
            MockBehavior::Failing => Err(ClipboardError::NoBackend),
        }
    }
}
