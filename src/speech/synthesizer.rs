//! Speech synthesis capability seam

use tokio::sync::oneshot;

/// Default narration language
pub const DEFAULT_LANG: &str = "en-IN";

/// A fully resolved synthesis request
#[derive(Debug, Clone, PartialEq)]
pub struct SpeechRequest {
    /// Text to speak
    pub text: String,

    /// BCP 47 language tag
    pub lang: String,

    /// Speaking rate multiplier
    pub rate: f32,

    /// Voice pitch multiplier
    pub pitch: f32,

    /// Output volume (0.0 to 1.0)
    pub volume: f32,
}

/// Narration defaults resolved into every request
#[derive(Debug, Clone, PartialEq)]
pub struct SpeechDefaults {
    /// BCP 47 language tag
    pub lang: String,

    /// Speaking rate multiplier
    pub rate: f32,

    /// Voice pitch multiplier
    pub pitch: f32,

    /// Output volume (0.0 to 1.0)
    pub volume: f32,
}

impl Default for SpeechDefaults {
    fn default() -> Self {
        Self {
            lang: DEFAULT_LANG.to_string(),
            rate: 1.0,
            pitch: 1.0,
            volume: 1.0,
        }
    }
}

/// Per-call overrides for [`SpeechOutput::speak_with`]
///
/// Unset fields fall back to the service defaults.
///
/// [`SpeechOutput::speak_with`]: crate::speech::SpeechOutput::speak_with
#[derive(Debug, Clone, Default)]
pub struct SpeechOptions {
    /// BCP 47 language tag
    pub lang: Option<String>,

    /// Speaking rate multiplier
    pub rate: Option<f32>,

    /// Voice pitch multiplier
    pub pitch: Option<f32>,

    /// Output volume (0.0 to 1.0)
    pub volume: Option<f32>,
}

/// Speech synthesis capability
///
/// Implementations play one utterance at a time and signal `done` when
/// playback finishes naturally. [`cancel`] clears the queue; a cancelled
/// utterance's `done` sender is dropped, never fired.
///
/// [`cancel`]: SpeechSynthesizer::cancel
pub trait SpeechSynthesizer: Send + Sync {
    /// Queue an utterance for playback
    fn enqueue(&self, request: SpeechRequest, done: oneshot::Sender<()>);

    /// Cancel any in-flight or queued utterance
    ///
    /// Idempotent no-op if nothing is playing.
    fn cancel(&self);
}
