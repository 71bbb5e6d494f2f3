use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};

use crate::model::{Item, pluralize, remaining_count};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FooterSignal {
    Clear,
}

/// Remaining-count line plus the "clear completed" control.
#[derive(Debug, Default)]
pub struct FooterView {
    items: Vec<Item>,
    remaining: usize,
    show_clear: bool,
    visible: bool,
}

impl FooterView {
    /// Re-derives the display from `items`, or from the last supplied
    /// collection when `None`.
    pub fn render(&mut self, items: Option<&[Item]>) {
        if let Some(items) = items {
            self.items = items.to_vec();
        }
        self.remaining = remaining_count(&self.items);
        self.show_clear = self.items.iter().any(|item| item.completed);
        self.visible = !self.items.is_empty();
    }

    pub fn remaining(&self) -> usize {
        self.remaining
    }

    pub fn count_label(&self) -> String {
        format!(
            "{} {} left",
            self.remaining,
            pluralize(self.remaining, "item")
        )
    }

    pub fn shows_clear(&self) -> bool {
        self.show_clear
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn show(&mut self) {
        self.visible = true;
    }

    pub fn hide(&mut self) {
        self.visible = false;
    }

    /// The user asked to clear completed items. Only honoured while the
    /// control is on screen.
    pub fn request_clear(&self) -> Option<FooterSignal> {
        (self.visible && self.show_clear).then_some(FooterSignal::Clear)
    }

    pub fn line(&self) -> Line<'static> {
        if !self.visible {
            return Line::from("");
        }
        let mut spans = vec![Span::styled(
            self.count_label(),
            Style::default().fg(Color::Gray),
        )];
        if self.show_clear {
            spans.push(Span::raw("   "));
            spans.push(Span::styled(
                "c: clear completed",
                Style::default().fg(Color::Yellow),
            ));
        }
        Line::from(spans)
    }
}
