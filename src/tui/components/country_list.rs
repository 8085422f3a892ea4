//! # Country List Screen
//!
//! Every country in catalog order, with a highlighted cursor. Enter reports
//! the id under the cursor; the controller decides what happens next.
//!
//! Follows the persistent state + transient wrapper pattern:
//! - `CountryListScreen` is owned by the controller
//! - `CountryList` is created each frame with the borrowed catalog as a prop

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{List, ListItem, ListState, Padding, Paragraph, Block};

use crate::core::catalog::Catalog;
use crate::core::country::CountryId;
use crate::core::screen::{Screen, ScreenMetrics};
use crate::tui::component::{Component, EventHandler};
use crate::tui::components::TitleBar;
use crate::tui::event::TuiEvent;
use crate::tui::ui::{fit_area, title_bar_height, truncate_to_width};

/// Events emitted by the country list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListEvent {
    Selected(CountryId),
}

/// Persistent state for the country list.
pub struct CountryListScreen {
    ids: Vec<CountryId>,
    selected: usize,
    list_state: ListState,
    visible: bool,
    metrics: ScreenMetrics,
    /// Rows visible in the last render, used for paging.
    page_size: usize,
}

impl CountryListScreen {
    pub fn new(catalog: &Catalog, metrics: ScreenMetrics) -> Self {
        let ids: Vec<CountryId> = catalog.iter().map(|c| c.id).collect();
        let mut list_state = ListState::default();
        if !ids.is_empty() {
            list_state.select(Some(0));
        }
        Self {
            ids,
            selected: 0,
            list_state,
            visible: false,
            metrics,
            page_size: 10,
        }
    }

    pub fn selected_id(&self) -> Option<CountryId> {
        self.ids.get(self.selected).copied()
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    fn select(&mut self, index: usize) {
        if self.ids.is_empty() {
            return;
        }
        self.selected = index.min(self.ids.len() - 1);
        self.list_state.select(Some(self.selected));
    }
}

impl Screen for CountryListScreen {
    fn show(&mut self) {
        self.visible = true;
    }

    fn hide(&mut self) {
        self.visible = false;
    }
}

impl EventHandler for CountryListScreen {
    type Event = ListEvent;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<ListEvent> {
        match event {
            TuiEvent::CursorUp => self.select(self.selected.saturating_sub(1)),
            TuiEvent::CursorDown => self.select(self.selected + 1),
            TuiEvent::PageUp => self.select(self.selected.saturating_sub(self.page_size)),
            TuiEvent::PageDown => self.select(self.selected + self.page_size),
            TuiEvent::Home => self.select(0),
            TuiEvent::End => self.select(usize::MAX),
            TuiEvent::Submit => return self.selected_id().map(ListEvent::Selected),
            _ => {}
        }
        None
    }
}

/// Transient render wrapper for the country list.
pub struct CountryList<'a> {
    state: &'a mut CountryListScreen,
    catalog: &'a Catalog,
}

impl<'a> CountryList<'a> {
    pub fn new(state: &'a mut CountryListScreen, catalog: &'a Catalog) -> Self {
        Self { state, catalog }
    }
}

impl Component for CountryList<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let area = fit_area(self.state.metrics, area);
        let [title_area, list_area] = Layout::vertical([
            Constraint::Length(title_bar_height(self.state.metrics)),
            Constraint::Min(0),
        ])
        .areas(area);

        TitleBar::new("European Countries")
            .with_left_hint("Esc Quit")
            .with_right_hint("Enter Open")
            .render(frame, title_area);

        let block = Block::default().padding(Padding::horizontal(1));
        if self.state.ids.is_empty() {
            let empty = Paragraph::new("No countries available.")
                .style(Style::default().fg(Color::DarkGray))
                .alignment(Alignment::Center)
                .block(block);
            frame.render_widget(empty, list_area);
            return;
        }

        let name_width = list_area.width.saturating_sub(2) as usize; // padding
        let items: Vec<ListItem> = self
            .state
            .ids
            .iter()
            .map(|&id| {
                let name = match self.catalog.lookup(id) {
                    Ok(country) => truncate_to_width(&country.name, name_width),
                    Err(_) => format!("#{id}"),
                };
                ListItem::new(Line::from(name))
            })
            .collect();

        let list = List::new(items)
            .block(block)
            .style(Style::default().fg(Color::Gray))
            .highlight_style(
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD | Modifier::REVERSED),
            );

        self.state.page_size = (list_area.height as usize).max(1);
        frame.render_stateful_widget(list, list_area, &mut self.state.list_state);
    }
}
