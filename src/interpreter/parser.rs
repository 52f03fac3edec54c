//! Typed utterance parsing
//!
//! A richer companion to the substring command table: classifies free-form
//! utterances into navigation, read-aloud, and test-control requests. Kept
//! separate from the interpreter so shells that want structured requests
//! (reader, quiz) can reuse it without going through the command table.

use std::sync::LazyLock;

use regex::Regex;

static CLASS_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"class\s+(\d+)").expect("hardcoded regex"));
static SUBJECT_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(science|math|english|hindi)").expect("hardcoded regex"));
static CHAPTER_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"chapter\s+(\d+)").expect("hardcoded regex"));

/// Test-flow controls recognized in an utterance
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TestControl {
    /// Begin the mock test
    Start,

    /// Move to the next question
    NextQuestion,
}

/// A classified utterance
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParsedUtterance {
    /// Navigate to an app route
    Navigate {
        /// Route path, e.g. `/library`
        route: &'static str,
    },

    /// Read a chapter aloud
    Reading {
        /// Class level (e.g. 6 for class 6)
        class: u32,
        /// Subject name, lowercased
        subject: String,
        /// Chapter number
        chapter: u32,
    },

    /// Drive the mock test flow
    Test(TestControl),

    /// Nothing recognized; the raw utterance is carried along
    Unknown(String),
}

/// Classify one utterance
///
/// Navigation requests need a "go to" or "open" verb plus a known
/// destination; reading requests need all of class, subject, and chapter.
/// Everything matches case-insensitively.
#[must_use]
pub fn parse(utterance: &str) -> ParsedUtterance {
    let lowered = utterance.to_lowercase();

    if lowered.contains("go to") || lowered.contains("open") {
        if lowered.contains("home") {
            return ParsedUtterance::Navigate { route: "/" };
        }
        if lowered.contains("library") {
            return ParsedUtterance::Navigate { route: "/library" };
        }
        if lowered.contains("test") {
            return ParsedUtterance::Navigate { route: "/tests" };
        }
    }

    if lowered.contains("read") {
        if let Some(reading) = parse_reading(&lowered) {
            return reading;
        }
    }

    if lowered.contains("start test") {
        return ParsedUtterance::Test(TestControl::Start);
    }
    if lowered.contains("next question") {
        return ParsedUtterance::Test(TestControl::NextQuestion);
    }

    ParsedUtterance::Unknown(utterance.to_string())
}

/// A reading request is only valid with class, subject, and chapter together
fn parse_reading(lowered: &str) -> Option<ParsedUtterance> {
    let class = CLASS_RE.captures(lowered)?.get(1)?.as_str().parse().ok()?;
    let subject = SUBJECT_RE.captures(lowered)?.get(1)?.as_str().to_string();
    let chapter = CHAPTER_RE.captures(lowered)?.get(1)?.as_str().parse().ok()?;
    Some(ParsedUtterance::Reading {
        class,
        subject,
        chapter,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn navigation_requests() {
        assert_eq!(parse("go to home"), ParsedUtterance::Navigate { route: "/" });
        assert_eq!(
            parse("Open the Library please"),
            ParsedUtterance::Navigate { route: "/library" }
        );
        assert_eq!(
            parse("go to my tests"),
            ParsedUtterance::Navigate { route: "/tests" }
        );
    }

    #[test]
    fn navigation_needs_a_verb() {
        assert!(matches!(parse("library"), ParsedUtterance::Unknown(_)));
    }

    #[test]
    fn complete_reading_request() {
        assert_eq!(
            parse("Read class 6 science chapter 3"),
            ParsedUtterance::Reading {
                class: 6,
                subject: "science".to_string(),
                chapter: 3,
            }
        );
    }

    #[test]
    fn partial_reading_request_is_unknown() {
        assert!(matches!(
            parse("read science chapter 3"),
            ParsedUtterance::Unknown(_)
        ));
        assert!(matches!(
            parse("read class 6 chapter 3"),
            ParsedUtterance::Unknown(_)
        ));
    }

    #[test]
    fn test_controls() {
        assert_eq!(parse("start test"), ParsedUtterance::Test(TestControl::Start));
        assert_eq!(
            parse("Next Question please"),
            ParsedUtterance::Test(TestControl::NextQuestion)
        );
    }

    #[test]
    fn unknown_carries_raw_utterance() {
        assert_eq!(
            parse("What Time Is It"),
            ParsedUtterance::Unknown("What Time Is It".to_string())
        );
    }

    #[test]
    fn navigation_wins_over_test_control() {
        // "go to test" is a navigation request, not a test control
        assert_eq!(
            parse("go to test"),
            ParsedUtterance::Navigate { route: "/tests" }
        );
    }
}
