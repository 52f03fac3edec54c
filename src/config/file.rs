//! TOML configuration file loading
//!
//! Supports `~/.config/garur/config.toml` as a persistent config source.
//! All fields are optional — the file is a partial overlay on top of defaults.

use serde::Deserialize;

/// Top-level TOML configuration file schema
#[derive(Debug, Default, Deserialize)]
pub struct GarurConfigFile {
    /// Interpreter configuration
    #[serde(default)]
    pub interpreter: InterpreterFileConfig,

    /// Narration configuration
    #[serde(default)]
    pub speech: SpeechFileConfig,

    /// Catalog/books API configuration
    #[serde(default)]
    pub catalog: CatalogFileConfig,

    /// Extra navigation commands appended to the built-in table
    #[serde(default)]
    pub commands: Vec<CommandFileEntry>,
}

/// Interpreter configuration
#[derive(Debug, Default, Deserialize)]
pub struct InterpreterFileConfig {
    /// Wake phrase (e.g. "hey garur")
    pub wake_phrase: Option<String>,

    /// Seconds the interpreter stays armed without a command (0 = forever)
    pub armed_timeout_secs: Option<u64>,
}

/// Narration configuration
#[derive(Debug, Default, Deserialize)]
pub struct SpeechFileConfig {
    /// BCP 47 narration language (e.g. "en-IN")
    pub lang: Option<String>,

    /// Speaking rate multiplier
    pub rate: Option<f32>,

    /// Voice pitch multiplier
    pub pitch: Option<f32>,

    /// Output volume (0.0 to 1.0)
    pub volume: Option<f32>,

    /// Console playback pace in characters per second
    pub narration_pace: Option<u32>,
}

/// Catalog/books API configuration
#[derive(Debug, Default, Deserialize)]
pub struct CatalogFileConfig {
    /// Content API base URL
    pub api_url: Option<String>,

    /// Books API base URL
    pub books_url: Option<String>,

    /// Books API key
    pub books_api_key: Option<String>,
}

/// One extra phrase-to-route navigation binding
#[derive(Debug, Deserialize)]
pub struct CommandFileEntry {
    /// Trigger phrase
    pub phrase: String,

    /// Route the phrase navigates to
    pub route: String,
}
