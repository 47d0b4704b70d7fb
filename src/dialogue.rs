/*!
 * Dialogue script parsing.
 *
 * This module splits a raw two-speaker dialogue script into classified
 * lines. A line belongs to a speaker when its first two characters are a
 * marker (`A:` or `B:`); blank lines and lines without a recognized marker
 * are dropped.
 */

use log::debug;
use once_cell::sync::Lazy;
use regex::Regex;

/// Regex for matching a speaker marker at the start of a line
static SPEAKER_MARKER_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^([AB]):(.*)$").expect("Invalid speaker marker regex")
});

/// The two fixed speakers of a dialogue script
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Speaker {
    /// First speaker, marked `A:`
    A,
    /// Second speaker, marked `B:`
    B,
}

impl Speaker {
    /// Marker letter used in the script
    pub fn marker(&self) -> char {
        match self {
            Self::A => 'A',
            Self::B => 'B',
        }
    }

    fn from_marker(marker: &str) -> Option<Self> {
        match marker {
            "A" => Some(Self::A),
            "B" => Some(Self::B),
            _ => None,
        }
    }
}

/// A single classified dialogue line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DialogueLine {
    /// Speaker the line is attributed to
    pub speaker: Speaker,
    /// Spoken text with the marker removed and surrounding whitespace trimmed
    pub text: String,
}

impl DialogueLine {
    /// Create a dialogue line - used by tests and external consumers
    pub fn new(speaker: Speaker, text: &str) -> Self {
        DialogueLine {
            speaker,
            text: text.to_string(),
        }
    }
}

/// Parse a dialogue script into classified lines.
///
/// Blank and whitespace-only lines are dropped. A line without an `A:`/`B:`
/// marker in its first two characters is skipped without error; the input
/// format tolerates stage directions and stray lines. Skipped lines are
/// logged at debug level so a mistyped marker can still be diagnosed.
pub fn parse_dialogue(script: &str) -> Vec<DialogueLine> {
    let mut lines = Vec::new();

    for raw in script.lines() {
        if raw.trim().is_empty() {
            continue;
        }

        match SPEAKER_MARKER_REGEX.captures(raw) {
            Some(caps) => {
                let marker = caps.get(1).map_or("", |m| m.as_str());
                let Some(speaker) = Speaker::from_marker(marker) else {
                    continue;
                };
                let text = caps.get(2).map_or("", |m| m.as_str()).trim().to_string();
                lines.push(DialogueLine { speaker, text });
            }
            None => {
                debug!("Skipping line without speaker marker: {}", raw);
            }
        }
    }

    lines
}
