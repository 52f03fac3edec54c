//! Voice-driven mock tests
//!
//! Speaks each question, checks a spoken answer by containment, and keeps
//! score. Answer capture itself comes from the recognition capability; this
//! module owns only the flow and the feedback narration.

use crate::catalog::Question;
use crate::speech::SpeechOutput;

/// Outcome of checking one spoken answer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnswerOutcome {
    /// The spoken answer matched
    Correct,

    /// The spoken answer did not match
    Incorrect,
}

/// One run through a question list
pub struct QuizSession {
    speech: SpeechOutput,
    questions: Vec<Question>,
    current: usize,
    score: usize,
}

impl QuizSession {
    /// Start a session over `questions`; call [`ask`] to narrate the first one
    ///
    /// [`ask`]: QuizSession::ask
    #[must_use]
    pub const fn new(speech: SpeechOutput, questions: Vec<Question>) -> Self {
        Self {
            speech,
            questions,
            current: 0,
            score: 0,
        }
    }

    /// Narrate the current question
    pub fn ask(&self) {
        if let Some(question) = self.questions.get(self.current) {
            self.speech.speak(&question.question);
        }
    }

    /// Check a spoken answer against the current question and narrate feedback
    ///
    /// Matching is case-insensitive containment in either direction: the
    /// expected answer inside the transcript, or a clipped transcript inside
    /// the expected answer. An empty transcript never matches.
    pub fn check_answer(&mut self, spoken: &str) -> AnswerOutcome {
        let Some(question) = self.questions.get(self.current) else {
            return AnswerOutcome::Incorrect;
        };

        let expected = question.answer.to_lowercase();
        let given = spoken.trim().to_lowercase();
        let correct = !given.is_empty()
            && (given.contains(&expected) || expected.contains(&given));

        if correct {
            self.score += 1;
            self.speech.speak("Correct! Well done!");
            AnswerOutcome::Correct
        } else {
            self.speech.speak(&format!(
                "Incorrect. The correct answer is: {}",
                question.answer
            ));
            AnswerOutcome::Incorrect
        }
    }

    /// Move to the next question, or finish
    ///
    /// Narrates the next question, or the final score line once every
    /// question has been seen. Returns false when the test is complete.
    pub fn advance(&mut self) -> bool {
        if self.current + 1 < self.questions.len() {
            self.current += 1;
            self.ask();
            true
        } else {
            self.current = self.questions.len();
            self.speech.speak(&format!(
                "Test completed! Your score is {} out of {}",
                self.score,
                self.questions.len()
            ));
            false
        }
    }

    /// Correct answers so far
    #[must_use]
    pub const fn score(&self) -> usize {
        self.score
    }

    /// Question count
    #[must_use]
    pub fn len(&self) -> usize {
        self.questions.len()
    }

    /// Whether the session has no questions
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    /// Zero-based index of the current question (equals `len` once finished)
    #[must_use]
    pub const fn position(&self) -> usize {
        self.current
    }

    /// Whether every question has been seen
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.current >= self.questions.len()
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use tokio::sync::oneshot;

    use super::*;
    use crate::speech::{SpeechDefaults, SpeechRequest, SpeechSynthesizer};

    #[derive(Default)]
    struct MemoVoice {
        lines: Mutex<Vec<String>>,
    }

    impl SpeechSynthesizer for MemoVoice {
        fn enqueue(&self, request: SpeechRequest, _done: oneshot::Sender<()>) {
            self.lines.lock().unwrap().push(request.text);
        }

        fn cancel(&self) {}
    }

    fn questions() -> Vec<Question> {
        vec![
            Question {
                question: "What do plants use to make food?".to_string(),
                answer: "photosynthesis".to_string(),
                options: Vec::new(),
            },
            Question {
                question: "What is two plus two?".to_string(),
                answer: "four".to_string(),
                options: Vec::new(),
            },
        ]
    }

    fn session() -> (QuizSession, Arc<MemoVoice>) {
        let voice = Arc::new(MemoVoice::default());
        let speech = SpeechOutput::new(voice.clone(), SpeechDefaults::default());
        (QuizSession::new(speech, questions()), voice)
    }

    #[test]
    fn containment_matches_both_directions() {
        let (mut quiz, _voice) = session();
        assert_eq!(
            quiz.check_answer("I think it is photosynthesis"),
            AnswerOutcome::Correct
        );

        let (mut quiz, _voice) = session();
        // Clipped transcript contained inside the expected answer
        assert_eq!(quiz.check_answer("photosynth"), AnswerOutcome::Correct);
    }

    #[test]
    fn empty_transcript_never_matches() {
        let (mut quiz, _voice) = session();
        assert_eq!(quiz.check_answer("   "), AnswerOutcome::Incorrect);
        assert_eq!(quiz.score(), 0);
    }

    #[test]
    fn incorrect_answer_names_the_expected_one() {
        let (mut quiz, voice) = session();
        assert_eq!(quiz.check_answer("magic"), AnswerOutcome::Incorrect);
        let lines = voice.lines.lock().unwrap();
        assert_eq!(
            lines.last().unwrap(),
            "Incorrect. The correct answer is: photosynthesis"
        );
    }

    #[test]
    fn full_run_keeps_score_and_finishes() {
        let (mut quiz, voice) = session();
        quiz.ask();
        assert_eq!(quiz.check_answer("photosynthesis"), AnswerOutcome::Correct);
        assert!(quiz.advance());

        assert_eq!(quiz.check_answer("five"), AnswerOutcome::Incorrect);
        assert!(!quiz.advance());

        assert!(quiz.is_finished());
        assert_eq!(quiz.score(), 1);
        let lines = voice.lines.lock().unwrap();
        assert_eq!(
            lines.last().unwrap(),
            "Test completed! Your score is 1 out of 2"
        );
    }
}
