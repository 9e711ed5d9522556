// src/services/networked.rs
use tracing::error;

use crate::{
    message::Message,
    services::{
        backend::ChatBackend,
        formatter::{escape_html, format_bot_reply},
        transcript::Transcript,
    },
    state::InputState,
};

pub const CONNECTION_APOLOGY: &str = "Sorry, I'm having trouble connecting to my brain right now 🤖💭. \
Please make sure the backend server is running and try again!";

pub const WELCOME_MESSAGE: &str = "🎓 Hi! I'm UniQuest, your college search assistant.\n\
Ask me about **fees**, **locations**, **ratings** or **facilities**, or pick one of the quick questions.";

/// Preset questions offered as one-click buttons.
pub const QUICK_QUERIES: [&str; 16] = [
    "Which college is the best?",
    "What are the top 5 colleges?",
    "Which college has less fee?",
    "Which college has better cultural activities?",
    "Which college has the highest rating?",
    "Which is the oldest college?",
    "Which college has the highest placement rate?",
    "Which college has the best hostel facilities?",
    "Which college offers good international exposure?",
    "Which college supports startups and entrepreneurship?",
    "Which college is best for research opportunities?",
    "Which college has the best sports facilities?",
    "Which college has the most active student clubs?",
    "Which is the safest college for girls?",
    "Which college has the most modern infrastructure?",
    "Which college offers the best distance learning programs?",
];

/// Chat widget backed by a remote `/chat` endpoint.
///
/// A send holds `&mut self` across its single await, so only one request
/// can be in flight per client.
pub struct NetworkedClient<B> {
    backend: B,
    transcript: Transcript,
    input: InputState,
}

impl<B: ChatBackend> NetworkedClient<B> {
    pub fn new(backend: B) -> Self {
        let mut transcript = Transcript::new();
        transcript.append(Message::bot(format_bot_reply(WELCOME_MESSAGE)));
        transcript.scroll_to_bottom();

        Self {
            backend,
            transcript,
            input: InputState::new(),
        }
    }

    pub fn backend(&self) -> &B {
        &self.backend
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

    /// Sends whatever is in the input box (the Enter key / send button).
    pub async fn submit(&mut self) -> Option<Message> {
        let draft = self.input.draft().to_string();
        self.send_message(&draft).await
    }

    pub async fn send_quick(&mut self, index: usize) -> Option<Message> {
        let query = QUICK_QUERIES.get(index)?;
        if !self.input.set_draft(*query) {
            return None;
        }
        self.submit().await
    }

    /// Sends one message and returns the bot reply that was appended.
    ///
    /// Blank input is ignored. Every backend failure is rendered as
    /// [`CONNECTION_APOLOGY`].
    pub async fn send_message(&mut self, text: &str) -> Option<Message> {
        if !self.input.is_enabled() {
            return None;
        }
        let message = text.trim();
        if message.is_empty() {
            return None;
        }

        self.input.set_enabled(false);
        self.transcript.append(Message::user(message));
        self.input.clear_draft();
        self.input.show_typing();

        let reply = match self.backend.ask(message).await {
            Ok(text) => Message::bot(format_bot_reply(&text)),
            Err(err) => {
                error!(error = %err, "chat request failed");
                Message::bot(format_bot_reply(CONNECTION_APOLOGY))
            }
        };

        self.input.hide_typing();
        self.transcript.append(reply.clone());
        self.transcript.scroll_to_bottom();
        self.input.set_enabled(true);
        self.input.focus();

        Some(reply)
    }

    pub fn render_html(&self) -> String {
        self.transcript
            .messages()
            .map(|message| {
                let content = match message {
                    Message::User(text) => escape_html(text),
                    Message::Bot(html) => html.clone(),
                };
                format!(
                    "<div class=\"message {}-message\"><div class=\"message-content\">{}</div></div>",
                    message.sender().as_str(),
                    content
                )
            })
            .collect()
    }
}
