use serde::Deserialize;

/// A prompt template loaded from a catalog document.
///
/// `prompt` may contain zero or more `[[NAME]]` placeholder tokens (see
/// `template`). Missing fields deserialize as empty strings and render blank.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PromptItem {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub prompt: String,
    /// Static sample output shown next to the prompt text.
    #[serde(default)]
    pub output: String,
}

/// An assistant configuration loaded from a catalog document.
///
/// `chat_conversation` is a single string encoding alternating turns with
/// literal `User:` / `GPT:` prefixes separated by blank lines (see
/// `transcript`).
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AssistantItem {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub cta_link: String,
    #[serde(default)]
    pub chat_conversation: String,
}

/// The two item sequences, populated once at startup and read-only after.
/// Items carry no identity; duplicates are permitted and order is the
/// configured file order.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    pub prompts: Vec<PromptItem>,
    pub assistants: Vec<AssistantItem>,
}

/// One of the two top-level views. Closed set: every item belongs to exactly
/// one, and dispatch on it is always exhaustive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    Prompts,
    Assistants,
}

impl View {
    pub fn other(self) -> Self {
        match self {
            View::Prompts => View::Assistants,
            View::Assistants => View::Prompts,
        }
    }
}

/// Summary fields shared by both item kinds, used by the grid cards and the
/// category filter.
pub trait Card {
    fn title(&self) -> &str;
    fn category(&self) -> &str;
}

impl Card for PromptItem {
    fn title(&self) -> &str {
        &self.title
    }
    fn category(&self) -> &str {
        &self.category
    }
}

impl Card for AssistantItem {
    fn title(&self) -> &str {
        &self.title
    }
    fn category(&self) -> &str {
        &self.category
    }
}
