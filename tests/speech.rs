//! Speech output service integration tests
//!
//! Exercises the last-caller-wins policy against the fake synthesis engine.

mod common;

use std::sync::Arc;
use std::task::Poll;

use common::FakeSynth;
use garur_voice::speech::{SpeechDefaults, SpeechOutput};

fn service() -> (SpeechOutput, FakeSynth) {
    let synth = FakeSynth::new();
    let output = SpeechOutput::new(Arc::new(synth.clone()), SpeechDefaults::default());
    (output, synth)
}

#[tokio::test]
async fn natural_completion_fires() {
    let (output, synth) = service();

    let completion = output.speak("namaste");
    synth.finish_current();

    assert!(completion.finished().await);
    assert_eq!(synth.spoken_texts(), vec!["namaste".to_string()]);
}

#[tokio::test]
async fn last_caller_wins() {
    let (output, synth) = service();

    let first = output.speak("A");
    let second = output.speak("B");
    synth.finish_current();

    // Only the later utterance ever completes
    assert!(second.finished().await);
    assert!(!first.finished().await);
    assert_eq!(
        synth.spoken_texts(),
        vec!["A".to_string(), "B".to_string()]
    );
}

#[tokio::test]
async fn stop_cancels_in_flight_utterance() {
    let (output, synth) = service();

    let completion = output.speak("a long paragraph");
    output.stop();

    assert!(!completion.finished().await);
    assert!(synth.cancel_count() >= 1);
}

#[test]
fn stop_without_speech_is_a_noop() {
    let (output, _synth) = service();
    output.stop();
    output.stop();
}

#[test]
fn completion_stays_pending_until_playback_ends() {
    let (output, synth) = service();

    let completion = output.speak("hello");
    let mut waiting = tokio_test::task::spawn(completion.finished());
    assert!(waiting.poll().is_pending());

    synth.finish_current();
    assert!(waiting.is_woken());
    assert_eq!(waiting.poll(), Poll::Ready(true));
}

#[tokio::test]
async fn disabled_service_degrades_silently() {
    let output = SpeechOutput::disabled();

    let completion = output.speak("nobody hears this");
    assert!(!completion.finished().await);
    output.stop();
}
