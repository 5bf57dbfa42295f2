//! Interactive loop: reads input, dispatches commands, and prints replies.

use std::io::Write;
use std::path::Path;

use cloner_ai::ImageAttachment;
use cloner_chat::{ChatController, TurnOutcome, CREDENTIAL_ADVISORY};
use cloner_common::ApiKey;
use cloner_config::{ClonerConfig, ModelChoice};
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::{info, warn};

use crate::render;

/// Line that opens and closes a multi-line block (for pasting HTML).
const BLOCK_DELIMITER: &str = "\"\"\"";

const HELP: &str = "\
Paste HTML/CSS or ask for a change. Commands:
  \"\"\"            start/end a multi-line message
  /image <path>  attach a settings screenshot (sent with every message)
  /image         detach the screenshot
  /model <id>    switch model (clears the chat): gemini-1.5-flash, gemini-1.5-pro
  /key <value>   set the Gemini API key
  /history       show the conversation
  /config        show the loaded settings (key redacted)
  /clear         clear the conversation
  /quit          exit";

#[derive(Debug, PartialEq, Eq)]
pub(crate) enum Command<'a> {
    Help,
    Clear,
    History,
    Config,
    Quit,
    AttachImage(&'a str),
    DetachImage,
    Model(&'a str),
    Key(&'a str),
    Unknown(&'a str),
    Message(&'a str),
}

impl<'a> Command<'a> {
    pub(crate) fn parse(line: &'a str) -> Self {
        let trimmed = line.trim();
        let Some(rest) = trimmed.strip_prefix('/') else {
            return Command::Message(line);
        };

        let (name, arg) = match rest.split_once(char::is_whitespace) {
            Some((name, arg)) => (name, arg.trim()),
            None => (rest, ""),
        };

        match (name, arg) {
            ("help", _) => Command::Help,
            ("clear", _) => Command::Clear,
            ("history", _) => Command::History,
            ("config", _) => Command::Config,
            ("quit" | "exit", _) => Command::Quit,
            ("image", "") => Command::DetachImage,
            ("image", path) => Command::AttachImage(path),
            ("model", model) => Command::Model(model),
            ("key", key) => Command::Key(key),
            _ => Command::Unknown(trimmed),
        }
    }
}

pub(crate) enum Step {
    Continue,
    Quit,
}

pub(crate) struct Repl {
    controller: ChatController,
    image: Option<ImageAttachment>,
    config: ClonerConfig,
}

impl Repl {
    pub(crate) fn new(
        controller: ChatController,
        image: Option<ImageAttachment>,
        config: ClonerConfig,
    ) -> Self {
        Self {
            controller,
            image,
            config,
        }
    }

    pub(crate) async fn run(mut self) -> std::io::Result<()> {
        println!("Section Cloner ({}). Type /help for commands.", self.controller.model());
        if !self.controller.has_credential() {
            println!("{CREDENTIAL_ADVISORY} Use /key or set GEMINI_API_KEY.");
        }

        let mut lines = BufReader::new(tokio::io::stdin()).lines();
        let mut block: Option<String> = None;

        loop {
            prompt(if block.is_some() { "... " } else { "> " })?;
            let Some(line) = lines.next_line().await? else {
                break;
            };

            if line.trim() == BLOCK_DELIMITER {
                match block.take() {
                    Some(text) => {
                        if let Step::Quit = self.submit(&text).await {
                            break;
                        }
                    }
                    None => block = Some(String::new()),
                }
                continue;
            }

            if let Some(ref mut text) = block {
                if !text.is_empty() {
                    text.push('\n');
                }
                text.push_str(&line);
                continue;
            }

            if let Step::Quit = self.dispatch(&line).await {
                break;
            }
        }

        info!("Exiting");
        Ok(())
    }

    async fn dispatch(&mut self, line: &str) -> Step {
        match Command::parse(line) {
            Command::Help => println!("{HELP}"),
            Command::Clear => {
                self.controller.clear();
                println!("Chat cleared.");
            }
            Command::History => {
                if let Some(session) = self.controller.session() {
                    println!(
                        "[session {} on {}, {} turns]",
                        session.id().short(),
                        session.model_id(),
                        session.turns()
                    );
                }
                if self.controller.history().is_empty() {
                    println!("(empty)");
                }
                for msg in self.controller.history() {
                    println!("{}\n", render::message(msg));
                }
            }
            Command::Config => println!("{}", cloner_config::config_to_json(&self.config)),
            Command::Quit => return Step::Quit,
            Command::AttachImage(path) => match ImageAttachment::load(Path::new(path)) {
                Ok(img) => {
                    println!("Attached {} ({} bytes).", img.file_name(), img.len());
                    self.image = Some(img);
                }
                Err(e) => println!("Could not attach image: {e}"),
            },
            Command::DetachImage => {
                self.image = None;
                println!("Screenshot detached.");
            }
            Command::Model(id) => match id.parse::<ModelChoice>() {
                Ok(model) => {
                    self.controller.set_model(model.as_str());
                    println!("Switched to {model}; chat cleared.");
                }
                Err(e) => println!("{e}"),
            },
            Command::Key(key) => match ApiKey::new(key) {
                Some(key) => {
                    self.controller.set_credential(Some(key));
                    println!("API key set.");
                }
                None => println!("Usage: /key <value>"),
            },
            Command::Unknown(cmd) => println!("Unknown command {cmd}. Type /help."),
            Command::Message(text) => return self.submit(text).await,
        }
        Step::Continue
    }

    async fn submit(&mut self, text: &str) -> Step {
        if text.trim().is_empty() {
            return Step::Continue;
        }

        eprintln!("Coding...");
        match self.controller.submit_turn(text, self.image.as_ref()).await {
            TurnOutcome::Ignored => {}
            TurnOutcome::Reply(response) => println!("{}\n", render::reply(&response)),
            TurnOutcome::Advisory => println!("{CREDENTIAL_ADVISORY} Use /key <value>.\n"),
            TurnOutcome::Failed { reason } => {
                warn!("Turn failed: {reason}");
                println!("Error: {reason}\n");
            }
        }
        Step::Continue
    }
}

fn prompt(text: &str) -> std::io::Result<()> {
    let mut stdout = std::io::stdout();
    stdout.write_all(text.as_bytes())?;
    stdout.flush()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_text_is_a_message() {
        assert_eq!(
            Command::parse("<div>Hello</div>"),
            Command::Message("<div>Hello</div>")
        );
        assert_eq!(
            Command::parse("Make the title bigger"),
            Command::Message("Make the title bigger")
        );
    }

    #[test]
    fn parses_commands() {
        assert_eq!(Command::parse("/help"), Command::Help);
        assert_eq!(Command::parse(" /clear "), Command::Clear);
        assert_eq!(Command::parse("/history"), Command::History);
        assert_eq!(Command::parse("/config"), Command::Config);
        assert_eq!(Command::parse("/quit"), Command::Quit);
        assert_eq!(Command::parse("/exit"), Command::Quit);
    }

    #[test]
    fn parses_commands_with_arguments() {
        assert_eq!(
            Command::parse("/image  shots/settings.png "),
            Command::AttachImage("shots/settings.png")
        );
        assert_eq!(Command::parse("/image"), Command::DetachImage);
        assert_eq!(
            Command::parse("/model gemini-1.5-pro"),
            Command::Model("gemini-1.5-pro")
        );
        assert_eq!(Command::parse("/key abc"), Command::Key("abc"));
        assert_eq!(Command::parse("/key"), Command::Key(""));
    }

    #[test]
    fn unknown_command_is_reported() {
        assert_eq!(Command::parse("/frobnicate now"), Command::Unknown("/frobnicate now"));
    }
}
