//! The command table
//!
//! Ordered phrase to action mapping. Matching is case-insensitive substring
//! containment, first match wins. The table is built once before the
//! interpreter starts; there is no dynamic registration.

/// Routes bound by the built-in navigation commands
const BUILTIN_ROUTES: [(&str, &str); 4] = [
    ("open library", "/library"),
    ("open dashboard", "/dashboard"),
    ("open profile", "/profile"),
    ("open settings", "/settings"),
];

/// Action bound to a command phrase
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandAction {
    /// Full navigation to a route
    Navigate(String),

    /// Speak the list of registered phrases
    SpeakHelp,

    /// Deactivate voice control
    StopListening,
}

/// A single phrase to action binding
#[derive(Debug, Clone)]
pub struct Command {
    phrase: String,
    action: CommandAction,
}

impl Command {
    /// Create a binding; the phrase is trimmed and lowercased
    #[must_use]
    pub fn new(phrase: impl Into<String>, action: CommandAction) -> Self {
        Self {
            phrase: phrase.into().trim().to_lowercase(),
            action,
        }
    }

    /// The trigger phrase
    #[must_use]
    pub fn phrase(&self) -> &str {
        &self.phrase
    }

    /// The bound action
    #[must_use]
    pub const fn action(&self) -> &CommandAction {
        &self.action
    }
}

/// Ordered, first-match-wins command table
#[derive(Debug, Clone, Default)]
pub struct CommandTable {
    commands: Vec<Command>,
}

impl CommandTable {
    /// An empty table
    #[must_use]
    pub const fn new() -> Self {
        Self {
            commands: Vec::new(),
        }
    }

    /// The built-in table: navigation routes, then `help`, then `stop`
    #[must_use]
    pub fn builtin() -> Self {
        Self::with_extra_routes(&[])
    }

    /// The built-in table plus additional navigation phrases
    ///
    /// Extra routes slot in after the built-in navigation entries so `help`
    /// and `stop` keep their place at the end of the spoken listing.
    #[must_use]
    pub fn with_extra_routes(extra: &[(String, String)]) -> Self {
        let mut table = Self::new();
        for (phrase, route) in BUILTIN_ROUTES {
            table.push(Command::new(phrase, CommandAction::Navigate(route.to_string())));
        }
        for (phrase, route) in extra {
            table.push(Command::new(
                phrase.clone(),
                CommandAction::Navigate(route.clone()),
            ));
        }
        table.push(Command::new("help", CommandAction::SpeakHelp));
        table.push(Command::new("stop", CommandAction::StopListening));
        table
    }

    /// Append a binding (construction-time only)
    pub fn push(&mut self, command: Command) {
        self.commands.push(command);
    }

    /// First command whose phrase is contained in `transcript`
    #[must_use]
    pub fn matches(&self, transcript: &str) -> Option<&Command> {
        let lowered = transcript.to_lowercase();
        self.commands.iter().find(|c| lowered.contains(&c.phrase))
    }

    /// All registered phrases, in order
    pub fn phrases(&self) -> impl Iterator<Item = &str> {
        self.commands.iter().map(Command::phrase)
    }

    /// Spoken help text listing every phrase
    #[must_use]
    pub fn help_text(&self) -> String {
        let phrases: Vec<&str> = self.phrases().collect();
        format!("Here are the available commands: {}", phrases.join(", "))
    }

    /// Number of bindings
    #[must_use]
    pub fn len(&self) -> usize {
        self.commands.len()
    }

    /// Whether the table has no bindings
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Iterate bindings in registration order
    pub fn iter(&self) -> impl Iterator<Item = &Command> {
        self.commands.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_table_order() {
        let table = CommandTable::builtin();
        let phrases: Vec<&str> = table.phrases().collect();
        assert_eq!(
            phrases,
            [
                "open library",
                "open dashboard",
                "open profile",
                "open settings",
                "help",
                "stop",
            ]
        );
    }

    #[test]
    fn matching_is_substring_and_case_insensitive() {
        let table = CommandTable::builtin();

        let cmd = table.matches("Please OPEN LIBRARY now").unwrap();
        assert_eq!(cmd.phrase(), "open library");

        assert!(table.matches("open the pod bay doors").is_none());
    }

    #[test]
    fn first_match_wins_over_later_entries() {
        let mut table = CommandTable::new();
        table.push(Command::new("open", CommandAction::Navigate("/".to_string())));
        table.push(Command::new(
            "open library",
            CommandAction::Navigate("/library".to_string()),
        ));

        let cmd = table.matches("open library").unwrap();
        assert_eq!(cmd.phrase(), "open");
        assert_eq!(cmd.action(), &CommandAction::Navigate("/".to_string()));
    }

    #[test]
    fn extra_routes_precede_help_and_stop() {
        let extra = vec![("open tests".to_string(), "/tests".to_string())];
        let table = CommandTable::with_extra_routes(&extra);
        let phrases: Vec<&str> = table.phrases().collect();
        assert_eq!(phrases[4], "open tests");
        assert_eq!(phrases[5], "help");
        assert_eq!(phrases[6], "stop");
    }

    #[test]
    fn help_text_lists_all_phrases() {
        let table = CommandTable::builtin();
        let help = table.help_text();
        assert!(help.starts_with("Here are the available commands: "));
        assert!(help.contains("open library"));
        assert!(help.ends_with("stop"));
    }

    #[test]
    fn phrases_are_normalized() {
        let cmd = Command::new("  OPEN Library  ", CommandAction::SpeakHelp);
        assert_eq!(cmd.phrase(), "open library");
    }
}
