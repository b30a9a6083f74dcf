//! Home screen: the goal list, the add trigger, and the input modal.

use log::{debug, info};
use ratatui::Frame;
use ratatui::layout::{Constraint, Layout};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, List, ListItem, Padding, Paragraph};

use crate::model::{GoalId, GoalList};
use crate::theme::Theme;

use super::{GoalInput, GoalItem};

/// The root screen.
///
/// Owns the canonical goal list, the modal's visibility, and the input
/// form itself; rows and the form only ever talk back to it. Each piece of
/// state has exactly one owner — nothing here is shared or global.
#[derive(Debug, Default)]
pub struct HomeScreen {
    goals: GoalList,
    modal_visible: bool,
    input: GoalInput,
    selected: usize,
}

impl HomeScreen {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn goals(&self) -> &GoalList {
        &self.goals
    }

    pub fn modal_visible(&self) -> bool {
        self.modal_visible
    }

    pub fn input_mut(&mut self) -> &mut GoalInput {
        &mut self.input
    }

    /// Shows or hides the input modal.
    ///
    /// The add trigger and the form's cancel action are both wired here,
    /// so two calls land back where they started. The goal list and the
    /// draft are never touched.
    pub fn toggle_modal(&mut self) {
        self.modal_visible = !self.modal_visible;
        debug!(
            "modal {}",
            if self.modal_visible { "opened" } else { "closed" }
        );
    }

    /// Appends a goal and hides the modal.
    ///
    /// The text is taken as typed; an empty submission becomes an empty
    /// row rather than being rejected.
    pub fn add_goal(&mut self, text: impl Into<String>) -> GoalId {
        let id = self.goals.add(text);
        self.modal_visible = false;
        info!("added goal {id}");
        id
    }

    /// Deletes the goal with the given id, then clamps the cursor back
    /// into range. A miss is a silent no-op.
    pub fn delete_goal(&mut self, id: GoalId) {
        if self.goals.remove(id) {
            info!("deleted goal {id}");
        } else {
            debug!("delete ignored: no goal {id}");
        }
        self.selected = self.selected.min(self.goals.len().saturating_sub(1));
    }

    /// Activates the selected row: each row is bound to its goal's id, and
    /// activation requests exactly that deletion. No-op on an empty list.
    pub fn activate_selected(&mut self) {
        let bound = self
            .goals
            .get(self.selected)
            .map(|goal| GoalItem::new(goal, true).bound_id());
        if let Some(id) = bound {
            self.delete_goal(id);
        }
    }

    /// Takes the form's draft and appends it as a goal.
    pub fn submit_input(&mut self) {
        let text = self.input.submit();
        self.add_goal(text);
    }

    pub fn move_up(&mut self) {
        if self.selected > 0 {
            self.selected -= 1;
        }
    }

    pub fn move_down(&mut self) {
        if self.selected + 1 < self.goals.len() {
            self.selected += 1;
        }
    }

    /// Renders the screen: title, add trigger, goal list, key help — or
    /// the input modal over the full frame while it is visible.
    pub fn render(&self, frame: &mut Frame, theme: &Theme) {
        if self.modal_visible {
            self.input.render(frame, theme);
            return;
        }

        let area = frame.area();

        frame.render_widget(
            Block::default().style(Style::default().bg(theme.background)),
            area,
        );

        let chunks = Layout::vertical([
            Constraint::Length(3), // title
            Constraint::Length(2), // add trigger
            Constraint::Min(0),    // goal list
            Constraint::Length(1), // help
        ])
        .split(area);

        // Title.
        let title = Paragraph::new(Line::from(Span::styled(
            "Goals",
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        )))
        .block(Block::default().padding(Padding::new(2, 0, 1, 0)));
        frame.render_widget(title, chunks[0]);

        // Add trigger.
        let trigger = Paragraph::new(Line::from(vec![
            Span::styled(
                " a ",
                Style::default()
                    .fg(Color::White)
                    .bg(theme.trigger)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(" Add New Goal", Style::default().fg(Color::White)),
        ]))
        .block(Block::default().padding(Padding::new(2, 2, 0, 0)));
        frame.render_widget(trigger, chunks[1]);

        // Goal rows, one per goal, in list order.
        if self.goals.is_empty() {
            let hint = Paragraph::new(Line::from(Span::styled(
                "No goals yet.",
                Style::default().fg(theme.muted),
            )))
            .block(Block::default().padding(Padding::new(2, 2, 0, 0)));
            frame.render_widget(hint, chunks[2]);
        } else {
            let rows: Vec<ListItem> = self
                .goals
                .iter()
                .enumerate()
                .map(|(i, goal)| ListItem::new(GoalItem::new(goal, i == self.selected).line(theme)))
                .collect();

            let list = List::new(rows).block(Block::default().padding(Padding::new(2, 2, 0, 0)));
            frame.render_widget(list, chunks[2]);
        }

        // Help line.
        let help = Paragraph::new(Line::from(Span::styled(
            " a add  ↑↓ navigate  ⏎ delete  q quit",
            Style::default().fg(theme.muted),
        )));
        frame.render_widget(help, chunks[3]);
    }
}
