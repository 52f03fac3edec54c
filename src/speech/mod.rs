//! Speech output
//!
//! Narration and feedback for the whole gateway. One utterance plays at a
//! time; a newer request cancels whatever is in flight.

mod output;
mod synthesizer;

pub use output::{Completion, SpeechOutput};
pub use synthesizer::{DEFAULT_LANG, SpeechDefaults, SpeechOptions, SpeechRequest, SpeechSynthesizer};
