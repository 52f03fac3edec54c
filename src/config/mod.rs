//! Configuration management for the Garur voice gateway

pub mod file;

use std::path::{Path, PathBuf};
use std::time::Duration;

use directories::ProjectDirs;

use crate::catalog::{DEFAULT_API_URL, DEFAULT_BOOKS_URL};
use crate::interpreter::DEFAULT_WAKE_PHRASE;
use crate::speech::SpeechDefaults;
use crate::{Error, Result};
use file::GarurConfigFile;

/// Default console playback pace (characters per second)
const DEFAULT_NARRATION_PACE: u32 = 25;

/// Gateway configuration
///
/// Resolution order: built-in defaults, then the optional TOML file, then
/// `GARUR_*` environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Wake phrase that arms the interpreter
    pub wake_phrase: String,

    /// Narration defaults (language, rate, pitch, volume)
    pub speech: SpeechDefaults,

    /// How long the interpreter stays armed without a command
    ///
    /// `None` keeps it armed until a command lands or listening stops.
    pub armed_timeout: Option<Duration>,

    /// Simulated playback pace for the console voice (characters per second)
    pub narration_pace: u32,

    /// Extra navigation commands appended to the built-in table
    pub extra_commands: Vec<(String, String)>,

    /// Content catalog base URL
    pub api_url: String,

    /// Books API base URL
    pub books_url: String,

    /// Books API key, if the deployment has one
    pub books_api_key: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            wake_phrase: DEFAULT_WAKE_PHRASE.to_string(),
            speech: SpeechDefaults::default(),
            armed_timeout: None,
            narration_pace: DEFAULT_NARRATION_PACE,
            extra_commands: Vec::new(),
            api_url: DEFAULT_API_URL.to_string(),
            books_url: DEFAULT_BOOKS_URL.to_string(),
            books_api_key: None,
        }
    }
}

impl Config {
    /// Load configuration
    ///
    /// With `file` the named file must exist; without it the default location
    /// is used when present. Environment variables win over both.
    ///
    /// # Errors
    ///
    /// Returns error if an explicitly named file cannot be read, any file
    /// fails to parse, or the resolved wake phrase is empty
    pub fn load(file: Option<&Path>) -> Result<Self> {
        let mut config = Self::default();

        if let Some(path) = file {
            let raw = std::fs::read_to_string(path)?;
            config.apply_file(&toml::from_str(&raw)?);
            tracing::debug!(path = %path.display(), "loaded config file");
        } else if let Some(path) = Self::default_file_path() {
            if path.exists() {
                let raw = std::fs::read_to_string(&path)?;
                config.apply_file(&toml::from_str(&raw)?);
                tracing::debug!(path = %path.display(), "loaded config file");
            }
        }

        config.apply_env();

        if config.wake_phrase.trim().is_empty() {
            return Err(Error::Config("wake phrase must not be empty".to_string()));
        }
        Ok(config)
    }

    /// Default config file location (`~/.config/garur/config.toml`)
    #[must_use]
    pub fn default_file_path() -> Option<PathBuf> {
        ProjectDirs::from("", "", "garur").map(|dirs| dirs.config_dir().join("config.toml"))
    }

    fn apply_file(&mut self, file: &GarurConfigFile) {
        if let Some(wake) = &file.interpreter.wake_phrase {
            self.wake_phrase.clone_from(wake);
        }
        if let Some(secs) = file.interpreter.armed_timeout_secs {
            self.armed_timeout = (secs > 0).then_some(Duration::from_secs(secs));
        }

        if let Some(lang) = &file.speech.lang {
            self.speech.lang.clone_from(lang);
        }
        if let Some(rate) = file.speech.rate {
            self.speech.rate = rate;
        }
        if let Some(pitch) = file.speech.pitch {
            self.speech.pitch = pitch;
        }
        if let Some(volume) = file.speech.volume {
            self.speech.volume = volume;
        }
        if let Some(pace) = file.speech.narration_pace {
            self.narration_pace = pace;
        }

        if let Some(url) = &file.catalog.api_url {
            self.api_url.clone_from(url);
        }
        if let Some(url) = &file.catalog.books_url {
            self.books_url.clone_from(url);
        }
        if let Some(key) = &file.catalog.books_api_key {
            self.books_api_key = Some(key.clone());
        }

        for entry in &file.commands {
            self.extra_commands
                .push((entry.phrase.clone(), entry.route.clone()));
        }
    }

    fn apply_env(&mut self) {
        if let Ok(wake) = std::env::var("GARUR_WAKE_PHRASE") {
            self.wake_phrase = wake;
        }
        if let Ok(url) = std::env::var("GARUR_API_URL") {
            self.api_url = url;
        }
        if let Ok(url) = std::env::var("GARUR_BOOKS_URL") {
            self.books_url = url;
        }
        if let Ok(key) = std::env::var("GARUR_BOOKS_API_KEY") {
            self.books_api_key = Some(key);
        }
        if let Ok(raw) = std::env::var("GARUR_ARMED_TIMEOUT_SECS") {
            match raw.parse::<u64>() {
                Ok(0) => self.armed_timeout = None,
                Ok(secs) => self.armed_timeout = Some(Duration::from_secs(secs)),
                Err(_) => {
                    tracing::warn!(raw = %raw, "invalid GARUR_ARMED_TIMEOUT_SECS, ignoring");
                }
            }
        }
    }
}
