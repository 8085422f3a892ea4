//! # Disclaimer Screen
//!
//! Static notice about where the country facts come from. Reached from the
//! country info screen with `i`; Enter or Esc goes back to it.

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Color, Style};
use ratatui::widgets::{Block, Padding, Paragraph, Wrap};

use crate::core::screen::{Screen, ScreenMetrics};
use crate::tui::component::{Component, EventHandler};
use crate::tui::components::TitleBar;
use crate::tui::event::TuiEvent;
use crate::tui::ui::{fit_area, title_bar_height};

pub const DISCLAIMER_TEXT: &str = "The figures shown for each country are rounded \
    estimates collected from public sources and are provided for reference only. \
    Population and area values change over time and may differ from official \
    statistics.\n\nNo guarantee is given as to the accuracy or completeness of \
    this information.";

/// Events emitted by the disclaimer screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DisclaimerEvent {
    Close,
}

pub struct DisclaimerScreen {
    visible: bool,
    metrics: ScreenMetrics,
}

impl DisclaimerScreen {
    pub fn new(metrics: ScreenMetrics) -> Self {
        Self {
            visible: false,
            metrics,
        }
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }
}

impl Screen for DisclaimerScreen {
    fn show(&mut self) {
        self.visible = true;
    }

    fn hide(&mut self) {
        self.visible = false;
    }
}

impl EventHandler for DisclaimerScreen {
    type Event = DisclaimerEvent;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<DisclaimerEvent> {
        match event {
            TuiEvent::Submit => Some(DisclaimerEvent::Close),
            _ => None,
        }
    }
}

impl Component for DisclaimerScreen {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let area = fit_area(self.metrics, area);
        let [title_area, body_area] = Layout::vertical([
            Constraint::Length(title_bar_height(self.metrics)),
            Constraint::Min(0),
        ])
        .areas(area);

        TitleBar::new("Disclaimer")
            .with_left_hint("Esc Back")
            .render(frame, title_area);

        let body = Paragraph::new(DISCLAIMER_TEXT)
            .style(Style::default().fg(Color::Gray))
            .alignment(Alignment::Left)
            .wrap(Wrap { trim: true })
            .block(Block::default().padding(Padding::uniform(1)));
        frame.render_widget(body, body_area);
    }
}
