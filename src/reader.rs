//! Read-aloud narration
//!
//! Splits chapter content into paragraphs and narrates them one at a time
//! through the speech output service. Moving stops the current narration
//! first, so the service's cancellation policy keeps exactly one paragraph
//! audible.

use crate::speech::{Completion, SpeechOutput};

/// A paragraph-by-paragraph narration session over one piece of content
pub struct ReadAloud {
    speech: SpeechOutput,
    paragraphs: Vec<String>,
    current: usize,
}

impl ReadAloud {
    /// Split `content` on blank lines; empty paragraphs are dropped
    #[must_use]
    pub fn new(speech: SpeechOutput, content: &str) -> Self {
        let paragraphs = content
            .split("\n\n")
            .map(str::trim)
            .filter(|p| !p.is_empty())
            .map(ToString::to_string)
            .collect();
        Self {
            speech,
            paragraphs,
            current: 0,
        }
    }

    /// Narrate the current paragraph
    pub fn read_current(&self) -> Completion {
        self.paragraphs
            .get(self.current)
            .map_or_else(Completion::cancelled, |p| self.speech.speak(p))
    }

    /// Stop narration and move to the next paragraph
    ///
    /// Returns false when already on the last paragraph.
    pub fn next(&mut self) -> bool {
        self.speech.stop();
        if self.current + 1 < self.paragraphs.len() {
            self.current += 1;
            true
        } else {
            false
        }
    }

    /// Stop narration and move back one paragraph
    ///
    /// Returns false when already on the first paragraph.
    pub fn previous(&mut self) -> bool {
        self.speech.stop();
        if self.current > 0 {
            self.current -= 1;
            true
        } else {
            false
        }
    }

    /// Re-narrate the current paragraph from the top
    pub fn repeat(&self) -> Completion {
        self.speech.stop();
        self.read_current()
    }

    /// Stop narration without moving
    pub fn stop(&self) {
        self.speech.stop();
    }

    /// Zero-based index of the current paragraph
    #[must_use]
    pub const fn position(&self) -> usize {
        self.current
    }

    /// Paragraph count
    #[must_use]
    pub fn len(&self) -> usize {
        self.paragraphs.len()
    }

    /// Whether the content had no narratable paragraphs
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.paragraphs.is_empty()
    }

    /// The paragraph currently selected
    #[must_use]
    pub fn current_paragraph(&self) -> Option<&str> {
        self.paragraphs.get(self.current).map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CONTENT: &str = "First paragraph.\n\n  \n\nSecond paragraph.\n\nThird paragraph.";

    #[test]
    fn splits_on_blank_lines_and_drops_empties() {
        let reader = ReadAloud::new(SpeechOutput::disabled(), CONTENT);
        assert_eq!(reader.len(), 3);
        assert_eq!(reader.current_paragraph(), Some("First paragraph."));
    }

    #[test]
    fn next_and_previous_clamp_at_the_ends() {
        let mut reader = ReadAloud::new(SpeechOutput::disabled(), CONTENT);

        assert!(!reader.previous());
        assert_eq!(reader.position(), 0);

        assert!(reader.next());
        assert!(reader.next());
        assert_eq!(reader.position(), 2);
        assert_eq!(reader.current_paragraph(), Some("Third paragraph."));

        assert!(!reader.next());
        assert_eq!(reader.position(), 2);
    }

    #[tokio::test]
    async fn empty_content_reads_nothing() {
        let reader = ReadAloud::new(SpeechOutput::disabled(), "\n\n   \n\n");
        assert!(reader.is_empty());
        assert!(!reader.read_current().finished().await);
    }
}
