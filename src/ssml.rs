/*!
 * Speech-synthesis markup generation.
 *
 * This module builds the SSML-like document emitted for downstream
 * speech-synthesis consumers: a root `<speak>` element with an `xml:lang`
 * attribute wrapping one `<voice>` element per classified dialogue line.
 *
 * Spoken text is inserted verbatim. The document is the exact string handed
 * to synthesis tools and to the clipboard; HTML escaping belongs to the
 * preview step only.
 */

use std::fmt;

use crate::dialogue::{DialogueLine, Speaker};

/// Binding from the two fixed speaker markers to voice identifiers
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VoiceBinding {
    /// Voice identifier bound to speaker A
    pub voice_a: String,
    /// Voice identifier bound to speaker B
    pub voice_b: String,
}

impl VoiceBinding {
    /// Create a binding for the two speakers
    pub fn new(voice_a: &str, voice_b: &str) -> Self {
        VoiceBinding {
            voice_a: voice_a.to_string(),
            voice_b: voice_b.to_string(),
        }
    }

    /// Voice identifier bound to the given speaker
    pub fn voice_for(&self, speaker: Speaker) -> &str {
        match speaker {
            Speaker::A => &self.voice_a,
            Speaker::B => &self.voice_b,
        }
    }
}

/// A single voice element of the document
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VoiceElement {
    /// Voice identifier inserted as the name attribute, verbatim
    pub voice: String,
    /// Raw spoken text
    pub text: String,
}

/// An ordered speech markup document
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SsmlDocument {
    /// Value of the root element's xml:lang attribute
    pub language: String,
    /// Voice elements in original line order
    pub elements: Vec<VoiceElement>,
}

impl SsmlDocument {
    /// Create an empty document for the given language
    pub fn new(language: &str) -> Self {
        SsmlDocument {
            language: language.to_string(),
            elements: Vec::new(),
        }
    }

    /// Build a document from classified dialogue lines.
    ///
    /// Each line becomes one voice element carrying exactly the identifier
    /// bound to its speaker, in original line order.
    pub fn from_dialogue(lines: &[DialogueLine], voices: &VoiceBinding, language: &str) -> Self {
        let elements = lines
            .iter()
            .map(|line| VoiceElement {
                voice: voices.voice_for(line.speaker).to_string(),
                text: line.text.clone(),
            })
            .collect();

        SsmlDocument {
            language: language.to_string(),
            elements,
        }
    }
}

impl fmt::Display for SsmlDocument {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "<speak xml:lang=\"{}\">", self.language)?;
        for element in &self.elements {
            writeln!(f, "  <voice name=\"{}\">{}</voice>", element.voice, element.text)?;
        }
        write!(f, "</speak>")
    }
}
