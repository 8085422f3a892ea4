//! # Country Info Screen
//!
//! Shows one country: its name in the title bar and five labelled facts
//! below. The controller pushes the country in with `set_displayed_country`
//! before every `show()`; the screen keeps only the label text.
//!
//! ```text
//! ┌──────────────────────────────────────┐
//! │ Esc Back       France        i Info  │  ← height/11 rows
//! ├──────────────────────────────────────┤
//! │                                      │
//! │ Population                           │  ← 2% left padding
//! │                                      │
//! │ 68,373,433                           │
//! │ ...                                  │
//! └──────────────────────────────────────┘
//! ```

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Padding, Paragraph, Wrap};

use crate::core::country::Country;
use crate::core::screen::{CountryDisplay, Screen, ScreenMetrics};
use crate::tui::component::{Component, EventHandler};
use crate::tui::components::TitleBar;
use crate::tui::event::TuiEvent;
use crate::tui::ui::{fit_area, title_bar_height};

const PADDING_LEFT_PERCENTAGE: u16 = 2;

pub const FIELD_LABELS: [&str; 5] = ["Population", "Area", "Languages", "Government", "Capital"];

/// Events emitted by the country info screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DetailEvent {
    ReturnToList,
    Info,
}

pub struct CountryInfoScreen {
    name: String,
    /// Same order as `FIELD_LABELS`.
    values: [String; 5],
    scroll: u16,
    max_scroll: u16,
    page_size: u16,
    visible: bool,
    metrics: ScreenMetrics,
    /// Whether to advertise the info key.
    has_info: bool,
}

impl CountryInfoScreen {
    pub fn new(metrics: ScreenMetrics, has_info: bool) -> Self {
        Self {
            name: String::new(),
            values: Default::default(),
            scroll: 0,
            max_scroll: 0,
            page_size: 1,
            visible: false,
            metrics,
            has_info,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Displayed text for the field labelled `label`.
    pub fn value(&self, label: &str) -> Option<&str> {
        FIELD_LABELS
            .iter()
            .position(|l| *l == label)
            .map(|i| self.values[i].as_str())
    }

    pub fn scroll(&self) -> u16 {
        self.scroll
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    fn scroll_to(&mut self, offset: u16) {
        self.scroll = offset.min(self.max_scroll);
    }
}

/// Left padding in columns for a body `width` columns wide.
fn padding_left(width: u16) -> u16 {
    let padding = u32::from(width) * u32::from(PADDING_LEFT_PERCENTAGE) / 100;
    u16::try_from(padding).unwrap_or(u16::MAX)
}

/// Spacer, label, spacer, value for every field.
fn body_lines(values: &[String; 5]) -> Vec<Line<'_>> {
    let label_style = Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD);
    let value_style = Style::default().fg(Color::White);

    let mut lines = Vec::with_capacity(FIELD_LABELS.len() * 4);
    for (label, value) in FIELD_LABELS.iter().zip(values.iter()) {
        lines.push(Line::default());
        lines.push(Line::from(Span::styled(*label, label_style)));
        lines.push(Line::default());
        lines.push(Line::from(Span::styled(value.as_str(), value_style)));
    }
    lines
}

impl Screen for CountryInfoScreen {
    fn show(&mut self) {
        self.scroll = 0;
        self.visible = true;
    }

    fn hide(&mut self) {
        self.visible = false;
    }
}

impl CountryDisplay for CountryInfoScreen {
    fn set_displayed_country(&mut self, country: &Country) {
        self.name = country.name.clone();
        self.values = [
            country.population.clone(),
            country.area.clone(),
            country.languages.clone(),
            country.government.clone(),
            country.capital.clone(),
        ];
    }
}

impl EventHandler for CountryInfoScreen {
    type Event = DetailEvent;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<DetailEvent> {
        match event {
            TuiEvent::ReturnToList => return Some(DetailEvent::ReturnToList),
            TuiEvent::Info => return Some(DetailEvent::Info),
            TuiEvent::CursorUp => self.scroll_to(self.scroll.saturating_sub(1)),
            TuiEvent::CursorDown => self.scroll_to(self.scroll.saturating_add(1)),
            TuiEvent::PageUp => self.scroll_to(self.scroll.saturating_sub(self.page_size)),
            TuiEvent::PageDown => self.scroll_to(self.scroll.saturating_add(self.page_size)),
            TuiEvent::Home => self.scroll_to(0),
            TuiEvent::End => self.scroll_to(u16::MAX),
            _ => {}
        }
        None
    }
}

impl Component for CountryInfoScreen {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let area = fit_area(self.metrics, area);
        let [title_area, body_area] = Layout::vertical([
            Constraint::Length(title_bar_height(self.metrics)),
            Constraint::Min(0),
        ])
        .areas(area);

        let mut title_bar = TitleBar::new(self.name.as_str()).with_left_hint("Esc Back");
        if self.has_info {
            title_bar = title_bar.with_right_hint("i Info");
        }
        title_bar.render(frame, title_area);

        let padding_left = padding_left(body_area.width);
        let body = Paragraph::new(body_lines(&self.values))
            .block(Block::default().padding(Padding::left(padding_left)))
            .wrap(Wrap { trim: false });

        let total = u16::try_from(body.line_count(body_area.width)).unwrap_or(u16::MAX);
        self.page_size = body_area.height.max(1);
        self.max_scroll = total.saturating_sub(body_area.height);
        self.scroll = self.scroll.min(self.max_scroll);

        frame.render_widget(body.scroll((self.scroll, 0)), body_area);
    }
}
