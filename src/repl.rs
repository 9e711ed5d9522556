// src/repl.rs
use async_trait::async_trait;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};

use crate::{
    error::Result,
    message::Message,
    services::{
        backend::ChatBackend,
        formatter::to_terminal,
        networked::{NetworkedClient, QUICK_QUERIES},
        offline::OfflineClient,
        transcript::Transcript,
    },
};

const PROMPT: &[u8] = b"> ";

/// What the terminal loop needs from a chat widget.
#[async_trait]
pub trait Widget: Send {
    fn transcript(&self) -> &Transcript;

    fn quick_actions(&self) -> &'static [&'static str] {
        &[]
    }

    async fn respond(&mut self, text: &str) -> Option<Message>;

    async fn quick_action(&mut self, _index: usize) -> Option<Message> {
        None
    }
}

#[async_trait]
impl<B: ChatBackend> Widget for NetworkedClient<B> {
    fn transcript(&self) -> &Transcript {
        NetworkedClient::transcript(self)
    }

    fn quick_actions(&self) -> &'static [&'static str] {
        &QUICK_QUERIES
    }

    async fn respond(&mut self, text: &str) -> Option<Message> {
        self.send_message(text).await
    }

    async fn quick_action(&mut self, index: usize) -> Option<Message> {
        self.send_quick(index).await
    }
}

#[async_trait]
impl Widget for OfflineClient {
    fn transcript(&self) -> &Transcript {
        OfflineClient::transcript(self)
    }

    async fn respond(&mut self, text: &str) -> Option<Message> {
        self.send_message(text)
    }
}

#[derive(Debug, PartialEq, Eq)]
pub enum Command<'a> {
    Quit,
    ListQuick,
    /// Zero-based index into the quick actions.
    Quick(usize),
    Say(&'a str),
}

pub fn parse_command(line: &str) -> Command<'_> {
    let line = line.trim();
    match line {
        "/quit" | "/exit" => Command::Quit,
        "/quick" => Command::ListQuick,
        _ => match line.strip_prefix("/quick ") {
            Some(arg) => match arg.trim().parse::<usize>() {
                Ok(n) if n > 0 => Command::Quick(n - 1),
                _ => Command::ListQuick,
            },
            None => Command::Say(line),
        },
    }
}

async fn write_message<O>(output: &mut O, message: &Message) -> Result<()>
where
    O: AsyncWrite + Unpin,
{
    let line = match message {
        Message::User(text) => format!("you: {text}\n"),
        Message::Bot(html) => format!("bot: {}\n", to_terminal(html)),
    };
    output.write_all(line.as_bytes()).await?;
    Ok(())
}

/// Reads lines from `input` until EOF or `/quit`, one send per line.
pub async fn run<W, R, O>(widget: &mut W, input: R, mut output: O) -> Result<()>
where
    W: Widget + ?Sized,
    R: AsyncBufRead + Unpin,
    O: AsyncWrite + Unpin,
{
    for message in widget.transcript().messages() {
        write_message(&mut output, message).await?;
    }

    let mut lines = input.lines();
    output.write_all(PROMPT).await?;
    output.flush().await?;

    while let Some(line) = lines.next_line().await? {
        let reply = match parse_command(&line) {
            Command::Quit => break,
            Command::ListQuick => {
                let mut listing = String::new();
                for (i, query) in widget.quick_actions().iter().enumerate() {
                    listing.push_str(&format!("  {}. {}\n", i + 1, query));
                }
                if listing.is_empty() {
                    listing.push_str("no quick questions in this mode\n");
                }
                output.write_all(listing.as_bytes()).await?;
                None
            }
            Command::Quick(index) => match widget.quick_actions().get(index) {
                Some(query) => {
                    write_message(&mut output, &Message::user(*query)).await?;
                    widget.quick_action(index).await
                }
                None => {
                    output
                        .write_all(format!("no quick question #{}\n", index + 1).as_bytes())
                        .await?;
                    None
                }
            },
            Command::Say(text) => widget.respond(text).await,
        };

        if let Some(reply) = reply {
            write_message(&mut output, &reply).await?;
        }
        output.write_all(PROMPT).await?;
        output.flush().await?;
    }

    output.flush().await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_commands() {
        assert_eq!(parse_command("/quit"), Command::Quit);
        assert_eq!(parse_command("  /quick  "), Command::ListQuick);
        assert_eq!(parse_command("/quick 2"), Command::Quick(1));
        assert_eq!(parse_command("/quick 0"), Command::ListQuick);
        assert_eq!(parse_command(" hello "), Command::Say("hello"));
    }
}
