//! Voice command interpreter
//!
//! A wake-phrase state machine over recognition events. The interpreter owns
//! the recognition session, arms on the wake phrase, matches finalized
//! transcripts against the command table, and dispatches the bound action.
//!
//! ```text
//!            start_listening()               wake phrase
//!  Stopped ───────────────────▶ Idle ───────────────────▶ Armed
//!     ▲                          ▲                          │
//!     │     stop_listening()     │    command dispatched    │
//!     └──────────────────────────┴──────────────────────────┘
//! ```

mod commands;
pub mod parser;

pub use commands::{Command, CommandAction, CommandTable};
pub use parser::{ParsedUtterance, TestControl};

use std::sync::Arc;

use tokio::sync::mpsc;

use crate::nav::Navigator;
use crate::recognizer::{RecognizerEvent, SpeechRecognizer, Utterance};
use crate::speech::SpeechOutput;

/// Default wake phrase
pub const DEFAULT_WAKE_PHRASE: &str = "hey garur";

/// Interpreter lifecycle states
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InterpreterState {
    /// Recognizer not running
    Stopped,

    /// Session running, waiting for the wake phrase
    Idle,

    /// Wake phrase heard; the next finalized transcript is a command
    Armed,
}

/// The live recognition session, recreated on every start
struct Session {
    events: mpsc::UnboundedSender<RecognizerEvent>,
    armed: bool,
}

/// Wake-phrase command interpreter
///
/// Explicitly constructed and explicitly owned; nothing global. Create one,
/// call [`start_listening`], feed the returned receiver's events back through
/// [`handle_event`] from a single driver loop, and call [`stop_listening`]
/// to dispose of the session.
///
/// All operations are infallible at the signature level: failures degrade to
/// logs and state flags, never to surfaced errors.
///
/// [`start_listening`]: VoiceInterpreter::start_listening
/// [`handle_event`]: VoiceInterpreter::handle_event
/// [`stop_listening`]: VoiceInterpreter::stop_listening
pub struct VoiceInterpreter {
    wake_phrase: String,
    commands: CommandTable,
    recognizer: Arc<dyn SpeechRecognizer>,
    speech: SpeechOutput,
    navigator: Arc<dyn Navigator>,
    session: Option<Session>,
}

impl VoiceInterpreter {
    /// Create an interpreter; the wake phrase is normalized to lowercase
    #[must_use]
    pub fn new(
        wake_phrase: impl Into<String>,
        commands: CommandTable,
        recognizer: Arc<dyn SpeechRecognizer>,
        speech: SpeechOutput,
        navigator: Arc<dyn Navigator>,
    ) -> Self {
        Self {
            wake_phrase: wake_phrase.into().trim().to_lowercase(),
            commands,
            recognizer,
            speech,
            navigator,
            session: None,
        }
    }

    /// Current lifecycle state
    #[must_use]
    pub fn state(&self) -> InterpreterState {
        match &self.session {
            None => InterpreterState::Stopped,
            Some(session) if session.armed => InterpreterState::Armed,
            Some(_) => InterpreterState::Idle,
        }
    }

    /// Whether the interpreter is armed, awaiting a command
    #[must_use]
    pub fn is_listening(&self) -> bool {
        self.session.as_ref().is_some_and(|s| s.armed)
    }

    /// Whether a recognition session is running at all
    #[must_use]
    pub const fn is_active(&self) -> bool {
        self.session.is_some()
    }

    /// The configured wake phrase
    #[must_use]
    pub fn wake_phrase(&self) -> &str {
        &self.wake_phrase
    }

    /// The command table in use
    #[must_use]
    pub const fn commands(&self) -> &CommandTable {
        &self.commands
    }

    /// Start a recognition session and return its event stream
    ///
    /// Any previous session is torn down first; the platform engines this
    /// drives allow one live session per process. The caller owns the
    /// receiver and feeds each event back through [`handle_event`].
    ///
    /// If the recognition capability is unavailable the interpreter stays
    /// `Stopped` and the returned stream yields nothing.
    ///
    /// [`handle_event`]: VoiceInterpreter::handle_event
    pub fn start_listening(&mut self) -> mpsc::UnboundedReceiver<RecognizerEvent> {
        if self.session.take().is_some() {
            self.recognizer.stop();
        }

        let (tx, rx) = mpsc::unbounded_channel();
        match self.recognizer.start(tx.clone()) {
            Ok(()) => {
                self.session = Some(Session {
                    events: tx,
                    armed: false,
                });
                self.speech.speak(&format!(
                    "Voice control activated. Say \"{}\" to begin.",
                    self.wake_phrase
                ));
                tracing::info!(wake_phrase = %self.wake_phrase, "voice control activated");
            }
            Err(e) => {
                tracing::warn!(error = %e, "speech recognition unavailable");
            }
        }
        rx
    }

    /// Deactivate voice control
    ///
    /// Stops the recognizer immediately; no drain period. Idempotent.
    pub fn stop_listening(&mut self) {
        if self.session.take().is_some() {
            self.recognizer.stop();
            self.speech.speak("Voice control deactivated");
            tracing::info!("voice control deactivated");
        }
    }

    /// Revert `Armed` to `Idle` without a command (armed-timeout path)
    pub fn disarm(&mut self) {
        if let Some(session) = &mut self.session {
            if session.armed {
                session.armed = false;
                tracing::debug!("armed window expired, returning to idle");
            }
        }
    }

    /// Process one recognition event
    ///
    /// Events must arrive in emission order from a single driver; transitions
    /// happen synchronously inside this call.
    pub fn handle_event(&mut self, event: RecognizerEvent) {
        match event {
            RecognizerEvent::Transcript(utterance) => self.handle_transcript(&utterance),
            RecognizerEvent::Error(reason) => self.handle_error(&reason),
            RecognizerEvent::End => self.handle_end(),
        }
    }

    fn handle_transcript(&mut self, utterance: &Utterance) {
        match self.state() {
            InterpreterState::Stopped => {
                tracing::trace!(text = %utterance.text, "transcript after stop, ignoring");
            }
            InterpreterState::Idle => {
                if utterance.text.to_lowercase().contains(&self.wake_phrase) {
                    self.arm();
                }
            }
            InterpreterState::Armed => {
                if utterance.is_final {
                    self.dispatch(&utterance.text);
                } else {
                    tracing::trace!(text = %utterance.text, "interim transcript while armed");
                }
            }
        }
    }

    /// Wake phrase heard: acknowledge and restart the stream for the command
    fn arm(&mut self) {
        let Some(session) = &mut self.session else {
            return;
        };
        session.armed = true;
        let events = session.events.clone();

        tracing::info!(wake_phrase = %self.wake_phrase, "wake phrase detected");
        self.speech.speak("Yes, how can I help you?");

        // One live session at a time: stop before starting the command stream
        self.recognizer.stop();
        if let Err(e) = self.recognizer.start(events) {
            tracing::warn!(error = %e, "failed to restart recognizer after wake phrase");
        }
    }

    /// Match a finalized transcript against the table, first match wins
    fn dispatch(&mut self, transcript: &str) {
        let Some(command) = self.commands.matches(transcript) else {
            tracing::debug!(transcript, "no command match, staying armed");
            return;
        };

        tracing::info!(phrase = command.phrase(), transcript, "command matched");
        let action = command.action().clone();

        match action {
            CommandAction::Navigate(route) => {
                self.speech.speak(&format!("Navigating to {route}"));
                self.navigator.navigate(&route);
            }
            CommandAction::SpeakHelp => {
                self.speech.speak(&self.commands.help_text());
            }
            CommandAction::StopListening => {
                self.stop_listening();
                return;
            }
        }

        if let Some(session) = &mut self.session {
            session.armed = false;
        }
    }

    /// Platform error: abort command capture, or deactivate a dead session
    fn handle_error(&mut self, reason: &str) {
        match self.state() {
            InterpreterState::Armed => {
                tracing::warn!(reason, "recognition error while armed, returning to idle");
                if let Some(session) = &mut self.session {
                    session.armed = false;
                }
            }
            InterpreterState::Idle => {
                tracing::warn!(reason, "recognition error, deactivating");
                self.stop_listening();
            }
            InterpreterState::Stopped => {
                tracing::debug!(reason, "recognition error after stop");
            }
        }
    }

    /// Session closed by the platform; its sessions are bounded and time out
    fn handle_end(&mut self) {
        let Some(session) = &self.session else {
            return;
        };
        if session.armed {
            // Recognition must look continuous to the user across restarts
            let events = session.events.clone();
            tracing::debug!("recognizer ended while armed, restarting");
            if let Err(e) = self.recognizer.start(events) {
                tracing::warn!(error = %e, "failed to restart recognizer");
                self.stop_listening();
            }
        } else {
            tracing::debug!("recognizer ended while idle");
            self.session = None;
        }
    }
}
