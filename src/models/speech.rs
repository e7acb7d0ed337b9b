use std::collections::HashMap;

/// What the skill says back. A statement ends the conversation, a question
/// keeps the session open and carries the text repeated when the user stays silent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SpeechResponse {
    Statement(String),
    Question { text: String, reprompt: String },
}

impl SpeechResponse {
    pub fn tell(text: impl Into<String>) -> Self {
        Self::Statement(text.into())
    }

    pub fn ask(text: impl Into<String>, reprompt: impl Into<String>) -> Self {
        Self::Question {
            text: text.into(),
            reprompt: reprompt.into(),
        }
    }

    pub fn ends_session(&self) -> bool {
        matches!(self, Self::Statement(_))
    }
}

/// A classified user request with its slot values.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IntentRequest {
    pub name: String,
    pub slots: HashMap<String, String>,
}

impl IntentRequest {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            slots: HashMap::new(),
        }
    }

    pub fn with_slot(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.slots.insert(name.into(), value.into());
        self
    }

    pub fn slot(&self, name: &str) -> Option<&str> {
        self.slots
            .get(name)
            .map(String::as_str)
            .filter(|value| !value.trim().is_empty())
    }
}
