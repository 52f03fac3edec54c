//! Speech recognition capability seam
//!
//! The gateway does not bind a platform speech engine directly. Anything that
//! can deliver continuous, interim-enabled transcription implements
//! [`SpeechRecognizer`]; the interpreter consumes the events.

use tokio::sync::mpsc;

use crate::Result;

/// A transcript fragment produced by a recognition session
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Utterance {
    /// Transcribed text
    pub text: String,

    /// Whether the recognizer considers this fragment final
    pub is_final: bool,
}

impl Utterance {
    /// A finalized transcript
    #[must_use]
    pub fn final_text(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            is_final: true,
        }
    }

    /// An interim (partial) transcript
    #[must_use]
    pub fn interim(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            is_final: false,
        }
    }
}

/// Events a recognition session delivers, in emission order
#[derive(Debug, Clone)]
pub enum RecognizerEvent {
    /// A transcript fragment (partial or final)
    Transcript(Utterance),

    /// The platform reported a recognition error (no-speech, audio capture, ...)
    Error(String),

    /// The session closed - timeout, explicit stop, or error
    End,
}

/// Continuous speech recognition capability
///
/// Implementations own at most one live session; the platform engines this
/// models do not support concurrent instances. Calling [`start`] while a
/// session is active replaces it.
///
/// [`start`]: SpeechRecognizer::start
pub trait SpeechRecognizer: Send + Sync {
    /// Begin a continuous, interim-enabled session delivering events into `events`
    ///
    /// # Errors
    ///
    /// Returns error if the capability is unavailable or the session cannot start
    fn start(&self, events: mpsc::UnboundedSender<RecognizerEvent>) -> Result<()>;

    /// Stop the live session, if any
    ///
    /// Idempotent. No further events are delivered once this returns.
    fn stop(&self);
}
