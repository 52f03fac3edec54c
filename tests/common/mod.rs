//! Shared fake capabilities for integration tests

use std::sync::{Arc, Mutex};

use tokio::sync::{mpsc, oneshot};

use garur_voice::nav::Navigator;
use garur_voice::recognizer::{RecognizerEvent, SpeechRecognizer, Utterance};
use garur_voice::speech::{SpeechRequest, SpeechSynthesizer};

/// Recording fake synthesis engine
#[derive(Clone, Default)]
pub struct FakeSynth {
    inner: Arc<Mutex<FakeSynthState>>,
}

#[derive(Default)]
struct FakeSynthState {
    spoken: Vec<SpeechRequest>,
    pending: Option<oneshot::Sender<()>>,
    cancels: usize,
}

impl FakeSynth {
    pub fn new() -> Self {
        Self::default()
    }

    /// Texts of every utterance requested so far, in order
    pub fn spoken_texts(&self) -> Vec<String> {
        self.inner
            .lock()
            .unwrap()
            .spoken
            .iter()
            .map(|r| r.text.clone())
            .collect()
    }

    pub fn spoken_count(&self) -> usize {
        self.inner.lock().unwrap().spoken.len()
    }

    pub fn cancel_count(&self) -> usize {
        self.inner.lock().unwrap().cancels
    }

    /// Let the in-flight utterance finish naturally
    pub fn finish_current(&self) {
        if let Some(done) = self.inner.lock().unwrap().pending.take() {
            let _ = done.send(());
        }
    }
}

impl SpeechSynthesizer for FakeSynth {
    fn enqueue(&self, request: SpeechRequest, done: oneshot::Sender<()>) {
        let mut state = self.inner.lock().unwrap();
        state.spoken.push(request);
        // Dropping any superseded sender models its cancellation
        state.pending = Some(done);
    }

    fn cancel(&self) {
        let mut state = self.inner.lock().unwrap();
        state.pending = None;
        state.cancels += 1;
    }
}

/// Recording fake navigator
#[derive(Clone, Default)]
pub struct FakeNavigator {
    routes: Arc<Mutex<Vec<String>>>,
}

impl FakeNavigator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn routes(&self) -> Vec<String> {
        self.routes.lock().unwrap().clone()
    }
}

impl Navigator for FakeNavigator {
    fn navigate(&self, route: &str) {
        self.routes.lock().unwrap().push(route.to_string());
    }
}

/// Scriptable fake recognition engine
#[derive(Clone, Default)]
pub struct FakeRecognizer {
    inner: Arc<Mutex<FakeRecognizerState>>,
}

#[derive(Default)]
struct FakeRecognizerState {
    sender: Option<mpsc::UnboundedSender<RecognizerEvent>>,
    starts: usize,
    stops: usize,
}

impl FakeRecognizer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn start_count(&self) -> usize {
        self.inner.lock().unwrap().starts
    }

    pub fn stop_count(&self) -> usize {
        self.inner.lock().unwrap().stops
    }

    /// Emit a transcript event into the live session, if any
    pub fn emit_transcript(&self, text: &str, is_final: bool) {
        self.emit(RecognizerEvent::Transcript(Utterance {
            text: text.to_string(),
            is_final,
        }));
    }

    pub fn emit_error(&self, reason: &str) {
        self.emit(RecognizerEvent::Error(reason.to_string()));
    }

    pub fn emit_end(&self) {
        self.emit(RecognizerEvent::End);
    }

    fn emit(&self, event: RecognizerEvent) {
        let sender = self.inner.lock().unwrap().sender.clone();
        if let Some(sender) = sender {
            sender.send(event).expect("event receiver dropped");
        }
    }
}

impl SpeechRecognizer for FakeRecognizer {
    fn start(&self, events: mpsc::UnboundedSender<RecognizerEvent>) -> garur_voice::Result<()> {
        let mut state = self.inner.lock().unwrap();
        state.sender = Some(events);
        state.starts += 1;
        Ok(())
    }

    fn stop(&self) {
        let mut state = self.inner.lock().unwrap();
        state.sender = None;
        state.stops += 1;
    }
}

/// A recognizer that refuses to start (capability unavailable)
pub struct UnavailableRecognizer;

impl SpeechRecognizer for UnavailableRecognizer {
    fn start(&self, _: mpsc::UnboundedSender<RecognizerEvent>) -> garur_voice::Result<()> {
        Err(garur_voice::Error::Recognizer("not supported".to_string()))
    }

    fn stop(&self) {}
}
