//! The interactive read-eval-print loop.

use std::io::Write;

use horadric_ai::Session;
use tokio::io::{AsyncBufRead, AsyncBufReadExt};

const RULE: &str = "--------------------------------------------------";
pub const GREETING: &str = "How can I help with your Project Diablo 2 character today?";
pub const FAREWELL: &str = "Thanks for chatting! Good luck in your adventures!";

/// Words that end the conversation, compared case-insensitively.
const EXIT_COMMANDS: [&str; 3] = ["exit", "quit", "bye"];

pub fn is_exit_command(line: &str) -> bool {
    let line = line.trim();
    EXIT_COMMANDS
        .iter()
        .any(|cmd| line.eq_ignore_ascii_case(cmd))
}

pub fn print_banner(out: &mut impl Write) -> std::io::Result<()> {
    writeln!(out, "Welcome to the Project Diablo 2 Chat Assistant!")?;
    writeln!(out, "Type 'exit' or 'quit' to end the conversation.")?;
    writeln!(out, "{RULE}")?;
    writeln!(out, "Tip: You can provide character URLs or guide URLs in your messages.")?;
    writeln!(out, "{RULE}")
}

/// Read questions from `input` until an exit word or end of input, printing
/// each answer to `out`.
pub async fn run<R, W>(session: &mut Session, input: R, out: &mut W) -> std::io::Result<()>
where
    R: AsyncBufRead + Unpin,
    W: Write,
{
    writeln!(out, "Assistant: {GREETING}")?;
    let mut lines = input.lines();

    loop {
        write!(out, "\nYou: ")?;
        out.flush()?;

        let Some(line) = lines.next_line().await? else {
            tracing::debug!("input closed");
            break;
        };
        let line = line.trim();

        if is_exit_command(line) {
            break;
        }
        if line.is_empty() {
            continue;
        }

        write!(out, "\nAssistant: ")?;
        out.flush()?;
        let answer = session.submit(line).await;
        writeln!(out, "{answer}")?;
    }

    writeln!(out, "\nAssistant: {FAREWELL}")?;
    out.flush()
}
