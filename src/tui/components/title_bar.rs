//! # TitleBar Component
//!
//! Bar across the top of every screen: a centred title with optional key
//! hints on either side.
//!
//! ## Design Decisions
//!
//! ### Stateless Component
//!
//! TitleBar is purely presentational. It receives all data as props and has
//! no internal state:
//!
//! ```rust,ignore
//! let mut title_bar = TitleBar::new("France")
//!     .with_left_hint("Esc Back")
//!     .with_right_hint("i Info");
//! title_bar.render(frame, title_area);
//! ```
//!
//! ### Height
//!
//! The bar fills whatever height it is given and centres its text line
//! vertically. Screens size it from their `ScreenMetrics`.

use crate::tui::component::Component;
use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Flex, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, Paragraph};
use unicode_width::UnicodeWidthStr;

pub struct TitleBar {
    pub title: String,
    pub left_hint: Option<String>,
    pub right_hint: Option<String>,
}

impl TitleBar {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            left_hint: None,
            right_hint: None,
        }
    }

    pub fn with_left_hint(mut self, hint: impl Into<String>) -> Self {
        self.left_hint = Some(hint.into());
        self
    }

    pub fn with_right_hint(mut self, hint: impl Into<String>) -> Self {
        self.right_hint = Some(hint.into());
        self
    }
}

impl Component for TitleBar {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let bar_style = Style::default().bg(Color::DarkGray).fg(Color::White);
        frame.render_widget(Block::default().style(bar_style), area);

        // Single text row, centred vertically
        let [row] = Layout::vertical([Constraint::Length(1)])
            .flex(Flex::Center)
            .areas(area);

        let left = self.left_hint.as_deref().map(|h| format!(" {h}")).unwrap_or_default();
        let right = self.right_hint.as_deref().map(|h| format!("{h} ")).unwrap_or_default();
        // Equal side columns keep the title centred on the whole row
        let side = left.width().max(right.width()) as u16;
        let [left_area, title_area, right_area] = Layout::horizontal([
            Constraint::Length(side),
            Constraint::Min(0),
            Constraint::Length(side),
        ])
        .areas(row);

        let title = Paragraph::new(Line::from(self.title.as_str()))
            .style(bar_style.add_modifier(Modifier::BOLD))
            .alignment(Alignment::Center);
        frame.render_widget(title, title_area);

        let hint_style = bar_style.fg(Color::Gray);
        frame.render_widget(
            Paragraph::new(left).style(hint_style).alignment(Alignment::Left),
            left_area,
        );
        frame.render_widget(
            Paragraph::new(right).style(hint_style).alignment(Alignment::Right),
            right_area,
        );
    }
}
