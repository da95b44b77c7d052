//! Interactive board: one interaction per input line, the board re-rendered after each.

use super::render::{outcome_message, render_board, write_message};
use colored::Colorize;
use noteboard::board::{BoardEvent, NoteBoard};
use noteboard::error::Result;
use noteboard::model::NoteId;
use noteboard::sync::SyncClient;
use std::io::{BufRead, Write};

pub const SESSION_HELP: &str = "\
Commands:
  select <id>       Edit a note (clicking its card)
  title <text>      Set the draft title
  content <text>    Set the draft content (\\n for a line break)
  save              Submit the form (add or save)
  cancel            Stop editing
  delete <id>       Delete a note
  refresh           Reload notes from the server
  show              Show the board
  help              Show this help
  quit              Leave the session
";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionCommand {
    Event(BoardEvent),
    Show,
    Help,
    Quit,
}

/// Parses one input line. Blank lines yield `None`.
pub fn parse_line(line: &str) -> std::result::Result<Option<SessionCommand>, String> {
    let line = line.trim_end_matches(['\r', '\n']);
    let trimmed = line.trim_start();
    if trimmed.trim().is_empty() {
        return Ok(None);
    }

    let (word, rest) = match trimmed.split_once(' ') {
        Some((word, rest)) => (word, rest),
        None => (trimmed.trim_end(), ""),
    };

    let command = match word {
        "select" | "open" => SessionCommand::Event(BoardEvent::ClickNote(parse_id(rest)?)),
        "title" => SessionCommand::Event(BoardEvent::EditTitle(rest.to_string())),
        "content" => SessionCommand::Event(BoardEvent::EditContent(rest.replace("\\n", "\n"))),
        "save" | "submit" | "add" => SessionCommand::Event(BoardEvent::Submit),
        "cancel" => SessionCommand::Event(BoardEvent::Cancel),
        "delete" | "rm" | "x" => SessionCommand::Event(BoardEvent::ClickDelete(parse_id(rest)?)),
        "refresh" => SessionCommand::Event(BoardEvent::Mount),
        "show" | "ls" => SessionCommand::Show,
        "help" | "?" => SessionCommand::Help,
        "quit" | "exit" | "q" => SessionCommand::Quit,
        other => return Err(format!("Unknown command: {}", other)),
    };
    Ok(Some(command))
}

fn parse_id(arg: &str) -> std::result::Result<NoteId, String> {
    let arg = arg.trim();
    arg.parse()
        .map_err(|_| format!("Expected a note id, got '{}'", arg))
}

/// Runs a session until `quit` or end of input. The board is expected to be mounted already.
pub async fn run_session<S, R, W>(
    board: &mut NoteBoard,
    client: &S,
    input: R,
    mut output: W,
) -> Result<()>
where
    S: SyncClient + ?Sized,
    R: BufRead,
    W: Write,
{
    write!(output, "{}", render_board(board.state()))?;
    writeln!(output, "{}", "Type 'help' for commands.".dimmed())?;

    for line in input.lines() {
        let line = line?;
        let command = match parse_line(&line) {
            Ok(Some(command)) => command,
            Ok(None) => continue,
            Err(e) => {
                writeln!(output, "{}", e.yellow())?;
                continue;
            }
        };

        match command {
            SessionCommand::Quit => break,
            SessionCommand::Help => write!(output, "{}", SESSION_HELP)?,
            SessionCommand::Show => write!(output, "{}", render_board(board.state()))?,
            SessionCommand::Event(event) => {
                let outcome = board.dispatch(client, event).await;
                if let Some(message) = outcome_message(&outcome, board.state()) {
                    write_message(&mut output, &message)?;
                }
                write!(output, "{}", render_board(board.state()))?;
            }
        }
        output.flush()?;
    }
    Ok(())
}
