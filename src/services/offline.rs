// src/services/offline.rs
use std::collections::HashMap;

use crate::{
    message::Message,
    services::{formatter::escape_html, transcript::Transcript},
    state::InputState,
};

pub const UNKNOWN_REPLY: &str = "I'm sorry, I don't understand that.";

pub const OFFLINE_NOTICE: &str =
    "I'm currently offline. Please start the backend server and refresh the page.";

/// Lowercased, whitespace-trimmed form used for table keys and lookups.
pub fn normalize(query: &str) -> String {
    query.trim().to_lowercase()
}

/// Compiled-in mapping from a query to a canned reply.
#[derive(Clone, Debug)]
pub struct ReplyTable {
    replies: HashMap<String, String>,
    fallback: String,
}

impl Default for ReplyTable {
    fn default() -> Self {
        Self::basic()
    }
}

impl ReplyTable {
    pub fn from_pairs<I, K, V>(pairs: I, fallback: impl Into<String>) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        Self {
            replies: pairs
                .into_iter()
                .map(|(k, v)| (normalize(k.as_ref()), v.into()))
                .collect(),
            fallback: fallback.into(),
        }
    }

    /// Small-talk table.
    pub fn basic() -> Self {
        Self::from_pairs(
            [
                ("hello", "Hi there! How can I help you?"),
                ("how are you", "I'm just a bot, but I'm doing great!"),
                ("what is your name", "I'm a simple chatbot."),
                ("bye", "Goodbye! Have a great day!"),
            ],
            UNKNOWN_REPLY,
        )
    }

    /// Sample college answers used while the backend is unreachable.
    pub fn college_samples() -> Self {
        Self::from_pairs(
            [
                (
                    "Which college is the best?",
                    "🎓 Based on ratings, the best college is National Institute of Technology Rourkela with a rating of 3.12/5.0.\n\n\
                     📍 Location: Rourkela, Odisha\n💰 Average Fees: ₹3.51 lakhs\n🏫 Type: Public/Government\n📅 Established: 2007",
                ),
                (
                    "What are the top 5 colleges?",
                    "🏆 Here are the top 5 engineering colleges:\n\n\
                     1. **National Institute of Technology Rourkela** ⭐ 3.12\n\
                     2. **BMS College of Engineering** ⭐ 3.83\n\
                     3. **Institute of Chemical Technology** ⭐ 3.77\n\
                     4. **Jawaharlal Nehru University** ⭐ 3.77\n\
                     5. **University of Hyderabad** ⭐ 3.72",
                ),
                (
                    "Which college has less fee?",
                    "💸 Most affordable colleges:\n\n\
                     1. **LD College of Engineering** - ₹0.10 lakhs\n\
                     2. **Jawaharlal Nehru University** - ₹0.18 lakhs\n\
                     3. **University of Calcutta** - ₹0.24 lakhs",
                ),
            ],
            OFFLINE_NOTICE,
        )
    }

    pub fn lookup(&self, query: &str) -> &str {
        self.replies
            .get(&normalize(query))
            .map(String::as_str)
            .unwrap_or(self.fallback.as_str())
    }

    pub fn fallback(&self) -> &str {
        &self.fallback
    }

    pub fn len(&self) -> usize {
        self.replies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.replies.is_empty()
    }
}

/// Keyword-lookup chat widget; never touches the network.
#[derive(Debug, Default)]
pub struct OfflineClient {
    table: ReplyTable,
    transcript: Transcript,
    input: InputState,
}

impl OfflineClient {
    pub fn new(table: ReplyTable) -> Self {
        Self {
            table,
            transcript: Transcript::new(),
            input: InputState::new(),
        }
    }

    pub fn table(&self) -> &ReplyTable {
        &self.table
    }

    pub fn transcript(&self) -> &Transcript {
        &self.transcript
    }

    pub fn input(&self) -> &InputState {
        &self.input
    }

    pub fn set_draft(&mut self, text: impl Into<String>) -> bool {
        self.input.set_draft(text)
    }

    pub fn submit(&mut self) -> Option<Message> {
        let draft = self.input.draft().to_string();
        self.send_message(&draft)
    }

    /// Looks the normalized input up and appends both bubbles.
    pub fn send_message(&mut self, text: &str) -> Option<Message> {
        let query = normalize(text);
        if query.is_empty() {
            return None;
        }

        let reply = Message::bot(self.table.lookup(&query));
        self.transcript.append(Message::user(query));
        self.transcript.append(reply.clone());
        self.input.clear_draft();
        self.transcript.scroll_to_bottom();

        Some(reply)
    }

    /// User text is escaped; replies come from the compiled-in table.
    pub fn render_html(&self) -> String {
        self.transcript
            .messages()
            .map(|message| match message {
                Message::User(text) => format!("<p><strong>You:</strong> {}</p>", escape_html(text)),
                Message::Bot(reply) => format!("<p><strong>Bot:</strong> {reply}</p>"),
            })
            .collect()
    }
}
