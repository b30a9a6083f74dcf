//! One row of the goal list.

use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};

use crate::model::{Goal, GoalId};
use crate::theme::Theme;

/// A single goal row, bound to the goal it displays.
///
/// Rows are rebuilt from the list every frame and hold no state of their
/// own; activating one asks the owner to delete the bound id. Repeated
/// requests for an id that is already gone are the owner's no-op, not the
/// row's problem.
pub struct GoalItem<'a> {
    goal: &'a Goal,
    selected: bool,
}

impl<'a> GoalItem<'a> {
    pub fn new(goal: &'a Goal, selected: bool) -> Self {
        Self { goal, selected }
    }

    /// The id this row requests deletion of when activated.
    pub fn bound_id(&self) -> GoalId {
        self.goal.id
    }

    /// The styled row line.
    ///
    /// The selected row swaps to the pressed variant: pointer, darker
    /// background, bold — standing in for the press feedback of a touch
    /// screen.
    pub fn line(&self, theme: &Theme) -> Line<'a> {
        let (pointer, style) = if self.selected {
            (
                "› ",
                Style::default()
                    .fg(Color::White)
                    .bg(theme.pressed)
                    .add_modifier(Modifier::BOLD),
            )
        } else {
            ("  ", Style::default().fg(Color::White).bg(theme.accent))
        };

        Line::from(vec![
            Span::styled(pointer, style),
            Span::styled(self.goal.text.as_str(), style),
            Span::styled(" ", style),
        ])
    }
}
