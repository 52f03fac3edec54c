//! Garur Voice - wake-phrase voice control gateway for the Garur reading assistant
//!
//! This library provides the core functionality for the Garur gateway:
//! - Wake-phrase command interpretation (state machine + ordered command table)
//! - Speech output with last-caller-wins cancellation
//! - Read-aloud narration and voice-driven mock tests
//! - Thin clients for the content catalog and the public books API
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │              Capabilities (injected)                 │
//! │   Recognizer   │   Synthesizer   │   Navigator      │
//! └────────────────────┬────────────────────────────────┘
//!                      │ events / requests
//! ┌────────────────────▼────────────────────────────────┐
//! │                Garur Voice Gateway                   │
//! │   Interpreter  │  Speech Output  │  Reader / Quiz   │
//! └────────────────────┬────────────────────────────────┘
//!                      │
//! ┌────────────────────▼────────────────────────────────┐
//! │        Content catalog / books API (HTTP)            │
//! └─────────────────────────────────────────────────────┘
//! ```

pub mod catalog;
pub mod config;
pub mod console;
pub mod daemon;
pub mod error;
pub mod interpreter;
pub mod nav;
pub mod quiz;
pub mod reader;
pub mod recognizer;
pub mod speech;

pub use catalog::{BooksClient, CatalogClient};
pub use config::Config;
pub use daemon::Daemon;
pub use error::{Error, Result};
pub use interpreter::{
    Command, CommandAction, CommandTable, InterpreterState, ParsedUtterance, TestControl,
    VoiceInterpreter,
};
pub use nav::Navigator;
pub use quiz::{AnswerOutcome, QuizSession};
pub use reader::ReadAloud;
pub use recognizer::{RecognizerEvent, SpeechRecognizer, Utterance};
pub use speech::{
    Completion, SpeechDefaults, SpeechOptions, SpeechOutput, SpeechRequest, SpeechSynthesizer,
};
