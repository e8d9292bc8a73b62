//! Append-only message log for the assistant panel.

use chrono::{DateTime, Local};
use serde::Serialize;

use crate::responder::{self, GREETING};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Sender {
    User,
    Assistant,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ChatMessage {
    pub id: u64,
    pub text: String,
    pub sender: Sender,
    pub timestamp: DateTime<Local>,
}

impl ChatMessage {
    /// Hour and minute, e.g. "14:05".
    pub fn time_label(&self) -> String {
        self.timestamp.format("%H:%M").to_string()
    }
}

/// One chat session. Messages are only ever appended.
#[derive(Clone, Debug, PartialEq)]
pub struct Conversation {
    messages: Vec<ChatMessage>,
    next_id: u64,
    pending_replies: usize,
}

impl Default for Conversation {
    fn default() -> Self {
        Self::new()
    }
}

impl Conversation {
    /// A conversation opened by the assistant's greeting.
    pub fn new() -> Self {
        let mut conversation = Self {
            messages: Vec::new(),
            next_id: 1,
            pending_replies: 0,
        };
        conversation.push(GREETING.to_string(), Sender::Assistant);
        conversation
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    /// Whether a reply is still being "typed".
    pub fn is_typing(&self) -> bool {
        self.pending_replies > 0
    }

    /// Append the user's message and return the text to answer.
    ///
    /// Blank input is not sent and returns `None`.
    pub fn send(&mut self, text: &str) -> Option<String> {
        if text.trim().is_empty() {
            return None;
        }
        self.push(text.to_string(), Sender::User);
        self.pending_replies += 1;
        Some(text.to_string())
    }

    /// Append the assistant's answer to a message previously [`send`](Self::send)-ed.
    pub fn receive(&mut self, reply: &str) {
        self.pending_replies = self.pending_replies.saturating_sub(1);
        self.push(reply.to_string(), Sender::Assistant);
    }

    /// Forget a pending reply that will never arrive.
    pub fn abandon_reply(&mut self) {
        self.pending_replies = self.pending_replies.saturating_sub(1);
    }

    /// Send `text` and answer it immediately with the keyword responder.
    pub fn ask(&mut self, text: &str) -> Option<&ChatMessage> {
        let question = self.send(text)?;
        self.receive(responder::respond(&question));
        self.messages.last()
    }

    fn push(&mut self, text: String, sender: Sender) {
        self.messages.push(ChatMessage {
            id: self.next_id,
            text,
            sender,
            timestamp: Local::now(),
        });
        self.next_id += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::responder::Topic;

    #[test]
    fn test_starts_with_greeting() {
        let conversation = Conversation::new();
        assert_eq!(conversation.messages().len(), 1);
        assert_eq!(conversation.messages()[0].sender, Sender::Assistant);
        assert_eq!(conversation.messages()[0].text, GREETING);
        assert!(!conversation.is_typing());
    }

    #[test]
    fn test_blank_input_is_not_sent() {
        let mut conversation = Conversation::new();
        assert_eq!(conversation.send("   \n"), None);
        assert_eq!(conversation.messages().len(), 1);
        assert!(!conversation.is_typing());
    }

    #[test]
    fn test_send_then_receive() {
        let mut conversation = Conversation::new();
        let question = conversation.send("Tell me about colleges").unwrap();
        assert!(conversation.is_typing());
        assert_eq!(conversation.messages().last().unwrap().sender, Sender::User);

        conversation.receive(responder::respond(&question));
        assert!(!conversation.is_typing());

        let reply = conversation.messages().last().unwrap();
        assert_eq!(reply.sender, Sender::Assistant);
        assert_eq!(reply.text, Topic::College.reply());
    }

    #[test]
    fn test_overlapping_requests_complete_independently() {
        let mut conversation = Conversation::new();
        conversation.send("scholarship").unwrap();
        conversation.send("course").unwrap();
        conversation.receive(Topic::Scholarship.reply());
        assert!(conversation.is_typing());
        conversation.receive(Topic::Courses.reply());
        assert!(!conversation.is_typing());
        assert_eq!(conversation.messages().len(), 5);
    }

    #[test]
    fn test_ids_increase() {
        let mut conversation = Conversation::new();
        conversation.ask("hi");
        conversation.ask("jobs?");
        let ids: Vec<_> = conversation.messages().iter().map(|m| m.id).collect();
        assert_eq!(ids, vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_abandon_reply_clears_typing() {
        let mut conversation = Conversation::new();
        conversation.send("career").unwrap();
        conversation.abandon_reply();
        assert!(!conversation.is_typing());
        assert_eq!(conversation.messages().len(), 2);
    }
}
