//! The speech output service
//!
//! Wraps a [`SpeechSynthesizer`] with option resolution and the
//! last-caller-wins policy: `speak` cancels whatever is in flight before
//! queueing the new utterance.

use std::sync::Arc;

use tokio::sync::oneshot;

use super::{SpeechOptions, SpeechRequest, SpeechSynthesizer};
use crate::speech::SpeechDefaults;

/// Completion signal for one `speak` call
///
/// Resolves `true` when the utterance finished playing naturally and `false`
/// when it was cancelled by a later `speak`, by `stop`, or because no engine
/// is available. A superseded call never reports natural completion.
#[derive(Debug)]
pub struct Completion {
    rx: Option<oneshot::Receiver<()>>,
}

impl Completion {
    /// Completion for an utterance that never started
    pub(crate) const fn cancelled() -> Self {
        Self { rx: None }
    }

    const fn pending(rx: oneshot::Receiver<()>) -> Self {
        Self { rx: Some(rx) }
    }

    /// Wait for the utterance to finish
    pub async fn finished(self) -> bool {
        match self.rx {
            Some(rx) => rx.await.is_ok(),
            None => false,
        }
    }
}

/// Narrates text through the attached synthesis engine
///
/// Cheap to clone; clones share the engine and therefore the one-utterance
/// queue. Without an engine every call degrades to a silent no-op, so
/// narration never blocks a functional flow.
#[derive(Clone)]
pub struct SpeechOutput {
    engine: Option<Arc<dyn SpeechSynthesizer>>,
    defaults: SpeechDefaults,
}

impl SpeechOutput {
    /// Create a service speaking through `engine`
    #[must_use]
    pub fn new(engine: Arc<dyn SpeechSynthesizer>, defaults: SpeechDefaults) -> Self {
        Self {
            engine: Some(engine),
            defaults,
        }
    }

    /// A service with no synthesis engine: every call silently no-ops
    #[must_use]
    pub fn disabled() -> Self {
        Self {
            engine: None,
            defaults: SpeechDefaults::default(),
        }
    }

    /// Speak `text` with the service defaults
    ///
    /// Cancels any in-flight utterance first (last-caller-wins).
    pub fn speak(&self, text: &str) -> Completion {
        self.speak_with(text, &SpeechOptions::default())
    }

    /// Speak `text`, overriding the defaults per `options`
    pub fn speak_with(&self, text: &str, options: &SpeechOptions) -> Completion {
        let Some(engine) = &self.engine else {
            tracing::trace!(text, "speech engine unavailable, dropping utterance");
            return Completion::cancelled();
        };

        let request = SpeechRequest {
            text: text.to_string(),
            lang: options
                .lang
                .clone()
                .unwrap_or_else(|| self.defaults.lang.clone()),
            rate: options.rate.unwrap_or(self.defaults.rate),
            pitch: options.pitch.unwrap_or(self.defaults.pitch),
            volume: options.volume.unwrap_or(self.defaults.volume),
        };

        engine.cancel();
        let (done, rx) = oneshot::channel();
        tracing::debug!(text = %request.text, lang = %request.lang, "speaking");
        engine.enqueue(request, done);
        Completion::pending(rx)
    }

    /// Cancel any in-flight utterance
    ///
    /// Idempotent no-op when nothing is playing or no engine is attached.
    pub fn stop(&self) {
        if let Some(engine) = &self.engine {
            engine.cancel();
        }
    }

    /// Whether a synthesis engine is attached
    #[must_use]
    pub const fn is_available(&self) -> bool {
        self.engine.is_some()
    }
}
