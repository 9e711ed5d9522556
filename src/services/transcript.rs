// src/services/transcript.rs
use std::time::Instant;

use uuid::Uuid;

use crate::message::{Message, Sender};

#[derive(Clone, Debug)]
pub struct Entry {
    pub id: Uuid,
    pub message: Message,
    pub timestamp: Instant,
}

/// Append-only list of the bubbles shown in a widget.
#[derive(Clone, Debug, Default)]
pub struct Transcript {
    entries: Vec<Entry>,
    // Number of entries visible when the view was last scrolled.
    scrolled_to: usize,
}

impl Transcript {
    pub fn new() -> Self {
        Self::default()
    }

    // Append a message and return the new length.
    pub fn append(&mut self, message: Message) -> usize {
        self.entries.push(Entry {
            id: Uuid::new_v4(),
            message,
            timestamp: Instant::now(),
        });
        self.entries.len()
    }

    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    pub fn messages(&self) -> impl Iterator<Item = &Message> {
        self.entries.iter().map(|e| &e.message)
    }

    pub fn last(&self) -> Option<&Message> {
        self.entries.last().map(|e| &e.message)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of messages from `sender`
    pub fn count(&self, sender: Sender) -> usize {
        self.messages().filter(|m| m.sender() == sender).count()
    }

    pub fn scroll_to_bottom(&mut self) {
        self.scrolled_to = self.entries.len();
    }

    pub fn is_scrolled_to_bottom(&self) -> bool {
        self.scrolled_to == self.entries.len()
    }
}
