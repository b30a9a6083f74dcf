//! The goal entry form, shown as a full-frame modal.

use std::mem;

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Padding, Paragraph};

use crate::theme::Theme;

/// The draft form for a new goal.
///
/// Owns nothing but the draft text. Whether the form is on screen is the
/// owner's call; it cannot show or hide itself. Cancel is likewise the
/// owner's concern: hiding the form leaves the draft in place, so a
/// reopened form shows whatever was typed before.
#[derive(Debug, Default)]
pub struct GoalInput {
    draft: String,
}

impl GoalInput {
    pub fn new() -> Self {
        Self::default()
    }

    /// The current draft text.
    pub fn draft(&self) -> &str {
        &self.draft
    }

    /// Appends a typed character. No validation, no length limit.
    pub fn on_char(&mut self, c: char) {
        self.draft.push(c);
    }

    /// Deletes the last character, if any.
    pub fn on_backspace(&mut self) {
        self.draft.pop();
    }

    /// Hands the draft to the owner and resets it to empty.
    ///
    /// The reset is unconditional, and an empty draft is handed over
    /// as-is rather than filtered out.
    pub fn submit(&mut self) -> String {
        mem::take(&mut self.draft)
    }

    /// Renders the form over the full frame, like the modal it stands for.
    pub fn render(&self, frame: &mut Frame, theme: &Theme) {
        let area = frame.area();

        frame.render_widget(
            Block::default().style(Style::default().bg(theme.surface)),
            area,
        );

        let chunks = Layout::vertical([
            Constraint::Length(3), // heading
            Constraint::Length(1), // text field
            Constraint::Min(0),    // spacer
            Constraint::Length(1), // button hints
        ])
        .split(area);

        // Heading.
        let heading = Paragraph::new(Line::from(Span::styled(
            "Add New Goal",
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        )))
        .block(Block::default().padding(Padding::new(2, 0, 1, 0)));
        frame.render_widget(heading, chunks[0]);

        // Text field: prompt, draft (or placeholder), block cursor.
        let field = if self.draft.is_empty() {
            Line::from(vec![
                Span::styled(" › ", Style::default().fg(Color::White)),
                Span::styled("Your goal", Style::default().fg(theme.muted)),
            ])
        } else {
            Line::from(vec![
                Span::styled(" › ", Style::default().fg(Color::White)),
                Span::styled(self.draft.as_str(), Style::default().fg(Color::White)),
                Span::styled("█", Style::default().fg(theme.muted)),
            ])
        };
        frame.render_widget(Paragraph::new(field), chunks[1]);

        // Add and cancel, as key hints.
        let buttons = Line::from(vec![
            Span::raw(" "),
            Span::styled(
                " ⏎ add ",
                Style::default().fg(Color::White).bg(theme.accent),
            ),
            Span::raw("  "),
            Span::styled(
                " esc cancel ",
                Style::default().fg(Color::White).bg(theme.danger),
            ),
        ]);
        frame.render_widget(Paragraph::new(buttons), chunks[3]);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn type_str(input: &mut GoalInput, s: &str) {
        for c in s.chars() {
            input.on_char(c);
        }
    }

    #[test]
    fn typing_and_backspace_edit_the_draft() {
        let mut input = GoalInput::new();

        type_str(&mut input, "Run 5k!");
        input.on_backspace();

        assert_eq!(input.draft(), "Run 5k");
    }

    #[test]
    fn submit_hands_over_the_draft_and_clears_it() {
        let mut input = GoalInput::new();
        type_str(&mut input, "Run 5k");

        assert_eq!(input.submit(), "Run 5k");
        assert_eq!(input.draft(), "");
    }

    #[test]
    fn empty_draft_submits_as_empty_string() {
        let mut input = GoalInput::new();

        assert_eq!(input.submit(), "");
        assert_eq!(input.draft(), "");
    }

    #[test]
    fn backspace_on_empty_draft_is_harmless() {
        let mut input = GoalInput::new();

        input.on_backspace();

        assert_eq!(input.draft(), "");
    }
}
