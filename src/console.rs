//! Console capability adapters
//!
//! Stand-ins for the platform speech engines so the gateway runs in a plain
//! terminal: stdin lines become finalized transcripts, narration is printed
//! and paced like playback, navigation is logged. The binary wires these up
//! by default; the test suite has its own fakes.

use std::io::BufRead;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use tokio::sync::{mpsc, oneshot};
use tokio::task::JoinHandle;

use crate::nav::Navigator;
use crate::recognizer::{RecognizerEvent, SpeechRecognizer, Utterance};
use crate::speech::{SpeechRequest, SpeechSynthesizer};
use crate::{Error, Result};

/// Reads stdin lines as finalized transcripts
///
/// One stdin pump runs for the process lifetime; `start` points it at the
/// session's event sender, `stop` detaches it. When stdin closes the pump
/// signals session end.
#[derive(Default)]
pub struct ConsoleRecognizer {
    current: Arc<Mutex<Option<mpsc::UnboundedSender<RecognizerEvent>>>>,
    pump: Mutex<Option<JoinHandle<()>>>,
}

impl ConsoleRecognizer {
    /// Create a recognizer; the stdin pump starts lazily on first `start`
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl SpeechRecognizer for ConsoleRecognizer {
    fn start(&self, events: mpsc::UnboundedSender<RecognizerEvent>) -> Result<()> {
        if let Ok(mut current) = self.current.lock() {
            *current = Some(events);
        }

        let mut pump = self
            .pump
            .lock()
            .map_err(|_| Error::Recognizer("console input state poisoned".to_string()))?;
        if pump.is_none() {
            let current = Arc::clone(&self.current);
            *pump = Some(tokio::task::spawn_blocking(move || {
                let stdin = std::io::stdin();
                for line in stdin.lock().lines() {
                    let Ok(line) = line else { break };
                    let text = line.trim();
                    if text.is_empty() {
                        continue;
                    }
                    let sender = current.lock().ok().and_then(|guard| (*guard).clone());
                    if let Some(sender) = sender {
                        if sender
                            .send(RecognizerEvent::Transcript(Utterance::final_text(text)))
                            .is_err()
                        {
                            tracing::debug!("transcript receiver dropped");
                        }
                    }
                }
                // stdin closed: the session is over
                if let Some(sender) = current.lock().ok().and_then(|guard| (*guard).clone()) {
                    let _ = sender.send(RecognizerEvent::End);
                }
            }));
            tracing::debug!("console transcript pump started");
        }
        Ok(())
    }

    fn stop(&self) {
        if let Ok(mut current) = self.current.lock() {
            if current.take().is_some() {
                tracing::debug!("console recognition stopped");
            }
        }
    }
}

/// Prints narration and paces "playback" by text length
///
/// Pacing makes cancellation observable: a long paragraph interrupted by a
/// newer utterance never signals completion, exactly like a real voice.
pub struct ConsoleVoice {
    chars_per_sec: u64,
    playing: Mutex<Option<JoinHandle<()>>>,
}

impl ConsoleVoice {
    /// Create a voice pacing playback at `chars_per_sec` characters a second
    #[must_use]
    pub fn new(chars_per_sec: u32) -> Self {
        Self {
            chars_per_sec: u64::from(chars_per_sec.max(1)),
            playing: Mutex::new(None),
        }
    }
}

impl SpeechSynthesizer for ConsoleVoice {
    fn enqueue(&self, request: SpeechRequest, done: oneshot::Sender<()>) {
        println!("🔊 {}", request.text);

        let chars = request.text.chars().count() as u64;
        let millis = chars * 1000 / self.chars_per_sec;
        let handle = tokio::spawn(async move {
            tokio::time::sleep(Duration::from_millis(millis)).await;
            let _ = done.send(());
        });

        if let Ok(mut playing) = self.playing.lock() {
            *playing = Some(handle);
        }
    }

    fn cancel(&self) {
        if let Ok(mut playing) = self.playing.lock() {
            if let Some(handle) = playing.take() {
                handle.abort();
            }
        }
    }
}

/// Logs navigations; the embedding shell performs the real location change
pub struct LogNavigator;

impl Navigator for LogNavigator {
    fn navigate(&self, route: &str) {
        println!("→ {route}");
        tracing::info!(route, "navigate");
    }
}
