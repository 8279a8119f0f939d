//! Parsing of assistant chat transcripts for display.
//!
//! A transcript is one string of alternating turns, each introduced by a
//! literal `User:` or `GPT:` prefix and separated from the previous turn by a
//! blank line. Text that does not follow this convention (a body with no
//! recognized prefix, or a turn not preceded by a blank line) is silently
//! dropped or folded into the previous turn; that matches the original data
//! convention and is not worth guessing around.

use std::sync::LazyLock;

use regex::Regex;

/// A blank line that introduces a new turn marker.
static TURN_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\n\n(?:User:|GPT:)").unwrap());

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Speaker {
    User,
    Gpt,
}

impl Speaker {
    /// Single-character avatar shown next to the message bubble.
    pub fn avatar(self) -> char {
        match self {
            Speaker::User => 'U',
            Speaker::Gpt => 'G',
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Speaker::User => "User",
            Speaker::Gpt => "GPT",
        }
    }
}

/// One parsed message: markup-escaped body, split on embedded newlines into
/// display lines.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatMessage {
    pub speaker: Speaker,
    pub lines: Vec<String>,
}

/// Parse a raw transcript into displayable messages. Segments with no
/// recognized prefix, or an empty body after trimming, are dropped.
pub fn parse_conversation(raw: &str) -> Vec<ChatMessage> {
    let mut messages = Vec::new();
    for segment in split_turns(raw) {
        let (speaker, body) = if let Some(rest) = segment.strip_prefix("User:") {
            (Speaker::User, rest)
        } else if let Some(rest) = segment.strip_prefix("GPT:") {
            (Speaker::Gpt, rest)
        } else {
            continue;
        };

        let body = body.trim();
        if body.is_empty() {
            continue;
        }

        let escaped = escape_markup(body);
        messages.push(ChatMessage {
            speaker,
            lines: escaped.split('\n').map(|line| line.to_string()).collect(),
        });
    }
    messages
}

/// Split on blank lines that precede a turn marker. The boundary consumes
/// only the blank line; the marker stays with its segment.
fn split_turns(raw: &str) -> Vec<&str> {
    let mut segments = Vec::new();
    let mut start = 0;
    for m in TURN_RE.find_iter(raw) {
        segments.push(&raw[start..m.start()]);
        start = m.start() + 2; // skip the "\n\n"
    }
    segments.push(&raw[start..]);
    segments
}

/// Escape markup-significant characters so message bodies always display as
/// literal text. `&` goes first so entities are not double-escaped.
pub fn escape_markup(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#039;")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn alternating_turns_parse_in_order() {
        let messages = parse_conversation("User: Hi\n\nGPT: Hello\n\nUser: Bye");
        let speakers: Vec<Speaker> = messages.iter().map(|m| m.speaker).collect();
        assert_eq!(speakers, vec![Speaker::User, Speaker::Gpt, Speaker::User]);
        assert_eq!(messages[0].lines, vec!["Hi"]);
        assert_eq!(messages[1].lines, vec!["Hello"]);
    }

    #[test]
    fn markup_is_escaped_not_rendered() {
        let messages = parse_conversation("User: Hi\n\nGPT: Hello <b>");
        assert_eq!(messages.len(), 2);
        assert_eq!(messages[1].lines, vec!["Hello &lt;b&gt;"]);
    }

    #[test]
    fn embedded_newlines_become_display_lines() {
        let messages = parse_conversation("GPT: first\nsecond");
        assert_eq!(messages[0].lines, vec!["first", "second"]);
    }

    #[test]
    fn unmarked_segment_is_dropped() {
        let messages = parse_conversation("random preamble\n\nUser: Hi");
        assert_eq!(messages.len(), 1);
        assert_eq!(messages[0].speaker, Speaker::User);
    }

    #[test]
    fn blank_body_is_dropped() {
        let messages = parse_conversation("User:   \n\nGPT: ok");
        assert_eq!(messages.len(), 1);
        assert_eq!(messages[0].speaker, Speaker::Gpt);
    }

    #[test]
    fn turn_without_blank_line_folds_into_previous() {
        // Known limitation of the data convention, preserved on purpose.
        let messages = parse_conversation("User: Hi\nGPT: Hello");
        assert_eq!(messages.len(), 1);
        assert_eq!(messages[0].speaker, Speaker::User);
        assert_eq!(messages[0].lines, vec!["Hi", "GPT: Hello"]);
    }

    #[test]
    fn escape_handles_every_entity() {
        assert_eq!(escape_markup(r#"&<>"'"#), "&amp;&lt;&gt;&quot;&#039;");
    }
}
