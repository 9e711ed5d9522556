// src/services/formatter.rs
use once_cell::sync::Lazy;
use regex::Regex;

pub const EMOJI_STYLE: &str = "font-size: 1.1em;";

/// Emoji that get enlarged in bot replies.
pub const HIGHLIGHTED_EMOJI: [&str; 17] = [
    "📍", "⭐", "💰", "🏫", "📅", "💼", "🎭", "🌏", "🚀", "🔬", "⚽", "🎉", "👩\u{200d}🎓", "🏢",
    "🧑\u{200d}💻", "🎓", "📊",
];

static BOLD: Lazy<Regex> = Lazy::new(|| Regex::new(r"\*\*(.*?)\*\*").expect("bold pattern"));

static NUMBERED: Lazy<Regex> = Lazy::new(|| Regex::new(r"([0-9]+)\.\s").expect("numbered pattern"));

static EMOJI: Lazy<Regex> = Lazy::new(|| {
    let alternatives: Vec<String> = HIGHLIGHTED_EMOJI.iter().map(|e| regex::escape(e)).collect();
    Regex::new(&format!("({})", alternatives.join("|"))).expect("emoji pattern")
});

static TAG: Lazy<Regex> = Lazy::new(|| Regex::new(r"<[^>]*>").expect("tag pattern"));

pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}

/// Turns the backend's markdown-ish text into bubble markup.
///
/// Substitutions run in a fixed order: `**bold**`, newlines, numbered list
/// markers, then emoji sizing. The text is escaped first so the backend can
/// only contribute the markup produced here.
pub fn format_bot_reply(text: &str) -> String {
    let escaped = escape_html(text);
    let bold = BOLD.replace_all(&escaped, "<strong>${1}</strong>");
    let breaks = bold.replace('\n', "<br>");
    let numbered = NUMBERED.replace_all(&breaks, "<br><strong>${1}.</strong> ");
    EMOJI
        .replace_all(&numbered, format!("<span style=\"{EMOJI_STYLE}\">${{1}}</span>").as_str())
        .into_owned()
}

/// Renders bubble markup as plain text for a terminal.
pub fn to_terminal(html: &str) -> String {
    let lines = html.replace("<br>", "\n");
    let stripped = TAG.replace_all(&lines, "");
    stripped
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&amp;", "&")
}
