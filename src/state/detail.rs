use pd_catalog::template::{Placeholder, extract_placeholders, substitute};
use pd_catalog::transcript::{ChatMessage, parse_conversation};
use pd_catalog::{AssistantItem, PromptItem};

/// State of the open detail overlay. Closed tagged type: an open overlay is
/// exactly one of the two kinds, and every renderer/handler matches
/// exhaustively.
pub enum DetailState {
    Prompt(PromptDetail),
    Assistant(AssistantDetail),
}

impl DetailState {
    pub fn title(&self) -> &str {
        match self {
            DetailState::Prompt(d) => &d.item.title,
            DetailState::Assistant(d) => &d.item.title,
        }
    }
}

/// Detail overlay for a prompt item: one input field per distinct placeholder
/// token, plus the displayed prompt text that "Run" overwrites.
pub struct PromptDetail {
    pub item: PromptItem,
    /// Distinct placeholder tokens in first-occurrence order.
    pub placeholders: Vec<Placeholder>,
    /// Entered value per placeholder, parallel to `placeholders`.
    pub values: Vec<String>,
    /// Index of the focused input field.
    pub focused: usize,
    /// Currently displayed prompt text: the original template until "Run"
    /// substitutes into it.
    pub rendered: String,
}

impl PromptDetail {
    pub fn new(item: PromptItem) -> Self {
        let placeholders = extract_placeholders(&item.prompt);
        let values = vec![String::new(); placeholders.len()];
        let rendered = item.prompt.clone();
        Self { item, placeholders, values, focused: 0, rendered }
    }

    /// "Run": replace every occurrence of each token with a non-empty entered
    /// value; empty fields leave their token literal.
    pub fn run(&mut self) {
        let fills: Vec<(&str, &str)> = self
            .placeholders
            .iter()
            .zip(&self.values)
            .map(|(p, v)| (p.token.as_str(), v.as_str()))
            .collect();
        self.rendered = substitute(&self.item.prompt, &fills);
    }

    /// "Clear": restore the original template and empty all input fields.
    pub fn clear(&mut self) {
        self.rendered = self.item.prompt.clone();
        for value in &mut self.values {
            value.clear();
        }
    }

    pub fn focus_next(&mut self) {
        if !self.placeholders.is_empty() {
            self.focused = (self.focused + 1) % self.placeholders.len();
        }
    }

    pub fn focus_prev(&mut self) {
        if !self.placeholders.is_empty() {
            self.focused = (self.focused + self.placeholders.len() - 1) % self.placeholders.len();
        }
    }
}

/// Detail overlay for an assistant item: the parsed transcript plus a scroll
/// offset for long conversations.
pub struct AssistantDetail {
    pub item: AssistantItem,
    pub messages: Vec<ChatMessage>,
    pub scroll: usize,
}

impl AssistantDetail {
    pub fn new(item: AssistantItem) -> Self {
        let messages = parse_conversation(&item.chat_conversation);
        Self { item, messages, scroll: 0 }
    }

    /// Total display lines of the conversation (avatar line per message plus
    /// a blank separator), used to cap scrolling.
    pub fn total_lines(&self) -> usize {
        self.messages.iter().map(|m| m.lines.len() + 1).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn prompt_item(template: &str) -> PromptItem {
        PromptItem {
            title: "t".to_string(),
            prompt: template.to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn repeated_token_yields_one_field() {
        let detail = PromptDetail::new(prompt_item("Write about [[TOPIC]] for [[TOPIC]]"));
        assert_eq!(detail.placeholders.len(), 1);
        assert_eq!(detail.placeholders[0].key, "TOPIC");
        assert_eq!(detail.values.len(), 1);
    }

    #[test]
    fn run_substitutes_every_occurrence() {
        let mut detail = PromptDetail::new(prompt_item("Write about [[TOPIC]] for [[TOPIC]]"));
        detail.values[0] = "cats".to_string();
        detail.run();
        assert_eq!(detail.rendered, "Write about cats for cats");
    }

    #[test]
    fn run_with_empty_value_changes_nothing() {
        let mut detail = PromptDetail::new(prompt_item("Write about [[TOPIC]] for [[TOPIC]]"));
        detail.run();
        assert_eq!(detail.rendered, "Write about [[TOPIC]] for [[TOPIC]]");
    }

    #[test]
    fn clear_restores_template_and_empties_inputs() {
        let mut detail = PromptDetail::new(prompt_item("Hello [[NAME]]"));
        detail.values[0] = "world".to_string();
        detail.run();
        assert_eq!(detail.rendered, "Hello world");

        detail.clear();
        assert_eq!(detail.rendered, "Hello [[NAME]]");
        assert_eq!(detail.values[0], "");
    }

    #[test]
    fn focus_wraps_and_tolerates_no_placeholders() {
        let mut detail = PromptDetail::new(prompt_item("[[A]] [[B]]"));
        detail.focus_next();
        assert_eq!(detail.focused, 1);
        detail.focus_next();
        assert_eq!(detail.focused, 0);
        detail.focus_prev();
        assert_eq!(detail.focused, 1);

        let mut empty = PromptDetail::new(prompt_item("no tokens"));
        empty.focus_next();
        assert_eq!(empty.focused, 0);
    }

    #[test]
    fn assistant_detail_parses_transcript() {
        let item = AssistantItem {
            chat_conversation: "User: Hi\n\nGPT: Hello".to_string(),
            ..Default::default()
        };
        let detail = AssistantDetail::new(item);
        assert_eq!(detail.messages.len(), 2);
        assert_eq!(detail.total_lines(), 4);
    }
}
