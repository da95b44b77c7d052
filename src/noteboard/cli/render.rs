//! # Rendering
//!
//! Turns the view state into terminal text: the form on top, the note grid below.
//! Layout math (width, truncation, padding) is Unicode-aware.

use colored::Colorize;
use noteboard::board::Outcome;
use noteboard::state::ViewState;
use std::io::Write;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

pub const LINE_WIDTH: usize = 100;
pub const SELECTED_MARKER: &str = "▸";
const PREVIEW_CHARS: usize = 60;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    pub level: MessageLevel,
    pub content: String,
}

impl Message {
    fn new(level: MessageLevel, content: impl Into<String>) -> Self {
        Self {
            level,
            content: content.into(),
        }
    }
}

pub fn write_message<W: Write>(output: &mut W, message: &Message) -> std::io::Result<()> {
    match message.level {
        MessageLevel::Info => writeln!(output, "{}", message.content.dimmed()),
        MessageLevel::Success => writeln!(output, "{}", message.content.green()),
        MessageLevel::Warning => writeln!(output, "{}", message.content.yellow()),
    }
}

/// User-facing line for an outcome. Request failures have none: they go to the log.
pub fn outcome_message(outcome: &Outcome, state: &ViewState) -> Option<Message> {
    let title_of = |id| {
        state
            .find(id)
            .map(|n| n.title.clone())
            .unwrap_or_default()
    };
    match outcome {
        Outcome::Created(id) => Some(Message::new(
            MessageLevel::Success,
            format!("Note created (#{}): {}", id, title_of(*id)),
        )),
        Outcome::Updated(id) => Some(Message::new(
            MessageLevel::Success,
            format!("Note updated (#{}): {}", id, title_of(*id)),
        )),
        Outcome::Deleted(id) => Some(Message::new(
            MessageLevel::Success,
            format!("Note deleted (#{})", id),
        )),
        Outcome::Rejected(field) => Some(Message::new(
            MessageLevel::Warning,
            format!("A {} is required", field),
        )),
        Outcome::Ignored => Some(Message::new(MessageLevel::Info, "Nothing to do")),
        _ => None,
    }
}

pub fn render_board(state: &ViewState) -> String {
    let mut output = render_form(state);
    output.push('\n');
    output.push_str(&render_grid(state));
    output
}

pub fn render_form(state: &ViewState) -> String {
    let heading = match state.selected() {
        Some(note) => format!("Editing #{}", note.id).yellow().bold().to_string(),
        None => "New note".bold().to_string(),
    };
    format!(
        "{}\n  Title:   {}\n  Content: {}\n",
        heading,
        field_display(state.draft_title()),
        field_display(state.draft_content())
    )
}

fn field_display(value: &str) -> String {
    if value.is_empty() {
        "(empty)".dimmed().to_string()
    } else {
        value.replace('\n', " ⏎ ")
    }
}

pub fn render_grid(state: &ViewState) -> String {
    if state.notes().is_empty() {
        return "No notes found.\n".to_string();
    }

    let selected_id = state.selected().map(|n| n.id);
    let id_width = state
        .notes()
        .iter()
        .map(|n| format!("[{}]", n.id).width())
        .max()
        .unwrap_or(0);

    let mut output = String::new();
    for note in state.notes() {
        let is_selected = Some(note.id) == selected_id;
        let marker = if is_selected {
            format!("  {} ", SELECTED_MARKER)
        } else {
            "    ".to_string()
        };

        let id_str = format!("{:<width$} ", format!("[{}]", note.id), width = id_width);

        let preview: String = note
            .content
            .chars()
            .take(PREVIEW_CHARS)
            .map(|c| if c == '\n' { ' ' } else { c })
            .collect();

        let available = LINE_WIDTH.saturating_sub(marker.width() + id_str.width());
        let title = truncate_to_width(&note.title.replace('\n', " "), available);
        let remaining = available.saturating_sub(title.width() + 2);
        let preview = if remaining > 1 && !preview.is_empty() {
            format!("  {}", truncate_to_width(&preview, remaining).dimmed())
        } else {
            String::new()
        };

        let id_colored = if is_selected {
            id_str.yellow()
        } else {
            id_str.normal()
        };
        let title_colored = if is_selected {
            title.bold()
        } else {
            title.normal()
        };

        output.push_str(&format!(
            "{}{}{}{}\n",
            marker, id_colored, title_colored, preview
        ));
    }
    output
}

fn truncate_to_width(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }

    let mut result = String::new();
    let mut current_width = 0;

    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > max_width.saturating_sub(1) {
            result.push('…');
            return result;
        }
        result.push(c);
        current_width += char_width;
    }

    result
}
