//! Daemon - the interactive gateway loop
//!
//! Wires the console capabilities into the interpreter and drives its event
//! queue: recognition events, the optional armed timeout, and ctrl-c all land
//! in one select loop, so every transition runs on a single task in arrival
//! order.

use std::sync::Arc;

use tokio::time::Instant;

use crate::console::{ConsoleRecognizer, ConsoleVoice, LogNavigator};
use crate::interpreter::{CommandTable, InterpreterState, VoiceInterpreter};
use crate::speech::SpeechOutput;
use crate::{Config, Result};

/// The Garur gateway daemon
pub struct Daemon {
    config: Config,
}

impl Daemon {
    /// Create a daemon from resolved configuration
    #[must_use]
    pub const fn new(config: Config) -> Self {
        Self { config }
    }

    /// Run until stdin closes, ctrl-c, or a spoken `stop` command
    ///
    /// # Errors
    ///
    /// Returns error if the daemon encounters a fatal error
    pub async fn run(self) -> Result<()> {
        let voice = Arc::new(ConsoleVoice::new(self.config.narration_pace));
        let speech = SpeechOutput::new(voice, self.config.speech.clone());
        let recognizer = Arc::new(ConsoleRecognizer::new());
        let navigator = Arc::new(LogNavigator);

        let table = CommandTable::with_extra_routes(&self.config.extra_commands);
        let mut interpreter = VoiceInterpreter::new(
            self.config.wake_phrase.clone(),
            table,
            recognizer,
            speech,
            navigator,
        );

        let mut events = interpreter.start_listening();
        tracing::info!(
            wake_phrase = %self.config.wake_phrase,
            armed_timeout = ?self.config.armed_timeout,
            "garur gateway ready"
        );

        let mut armed_deadline: Option<Instant> = None;

        loop {
            // Instant is Copy, so the future owns the deadline it sleeps on
            let armed_timeout = async move {
                match armed_deadline {
                    Some(deadline) => tokio::time::sleep_until(deadline).await,
                    None => std::future::pending().await,
                }
            };

            tokio::select! {
                _ = tokio::signal::ctrl_c() => {
                    tracing::info!("shutdown requested");
                    interpreter.stop_listening();
                    break;
                }
                () = armed_timeout => {
                    interpreter.disarm();
                    armed_deadline = None;
                }
                event = events.recv() => {
                    let Some(event) = event else { break };
                    interpreter.handle_event(event);

                    if !interpreter.is_active() {
                        // Spoken "stop" or a fatal recognizer error
                        break;
                    }
                    armed_deadline = if interpreter.state() == InterpreterState::Armed {
                        armed_deadline.or_else(|| {
                            self.config.armed_timeout.map(|timeout| Instant::now() + timeout)
                        })
                    } else {
                        None
                    };
                }
            }
        }

        tracing::info!("daemon stopped");
        Ok(())
    }
}
