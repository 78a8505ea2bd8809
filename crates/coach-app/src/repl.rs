//! Line-oriented input loop.

use std::io::BufRead;
use std::time::Duration;

use crate::controller::Tutor;

const HELP: &str = "\
Commands:
  /list                    show tiers and exercises
  /exercise <tier> <n>     load exercise n of a tier
  /clear                   start a new conversation
  /history                 show turn and token counts
  /help                    show this help
  /quit                    exit
Anything else is sent to the tutor.";

const IDLE_POLL: Duration = Duration::from_millis(25);

#[derive(Debug, PartialEq, Eq)]
pub enum Command {
    Send(String),
    List,
    Exercise { tier: String, number: usize },
    Clear,
    History,
    Help,
    Quit,
    Empty,
    Invalid(String),
}

impl Command {
    pub fn parse(line: &str) -> Self {
        let line = line.trim();
        if line.is_empty() {
            return Self::Empty;
        }
        let Some(rest) = line.strip_prefix('/') else {
            return Self::Send(line.to_string());
        };

        let mut parts = rest.split_whitespace();
        match parts.next().unwrap_or_default() {
            "list" => Self::List,
            "clear" => Self::Clear,
            "history" => Self::History,
            "help" => Self::Help,
            "quit" | "exit" => Self::Quit,
            "exercise" => {
                let args: Vec<&str> = parts.collect();
                let [tier, number] = args.as_slice() else {
                    return Self::Invalid("usage: /exercise <tier> <n>".into());
                };
                match number.parse() {
                    Ok(number) => Self::Exercise {
                        tier: tier.to_string(),
                        number,
                    },
                    Err(_) => Self::Invalid(format!("not an exercise number: {number}")),
                }
            }
            other => Self::Invalid(format!("unknown command: /{other} (try /help)")),
        }
    }
}

/// Read commands from `input` until EOF or `/quit`.
///
/// Errors are already published by the controller, so they are only logged
/// here. Either way out waits for any in-flight request to finish, so its
/// reply is rendered before shutdown.
pub fn run<R: BufRead>(tutor: &Tutor, input: R) {
    for line in input.lines() {
        let line = match line {
            Ok(line) => line,
            Err(e) => {
                tracing::warn!(error = %e, "failed to read input");
                break;
            }
        };

        let result = match Command::parse(&line) {
            Command::Empty => Ok(()),
            Command::Send(text) => tutor.send_message(&text),
            Command::List => {
                tutor.list_exercises();
                Ok(())
            }
            Command::Exercise { tier, number } => tutor.load_exercise(&tier, number),
            Command::Clear => tutor.clear_conversation(),
            Command::History => tutor.show_history(),
            Command::Help => {
                tutor.notice(HELP);
                Ok(())
            }
            Command::Invalid(message) => {
                tutor.notice(message);
                Ok(())
            }
            Command::Quit => break,
        };

        if let Err(e) = result {
            tracing::debug!(error = %e, "command rejected");
        }
    }

    wait_until_idle(tutor);
}

fn wait_until_idle(tutor: &Tutor) {
    while tutor.is_busy() {
        std::thread::sleep(IDLE_POLL);
    }
}
