//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use std::cell::RefCell;
use std::rc::Rc;

use ratatui::Terminal;
use ratatui::backend::TestBackend;

use crate::core::catalog::Catalog;
use crate::core::controller::{Controller, Reporter, Screens};
use crate::core::country::{Country, CountryId};
use crate::core::screen::{CountryDisplay, Screen};

/// Something the controller did to a [`RecordingScreen`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    Show,
    Hide,
    Display(CountryId),
}

/// A screen that renders nothing and remembers every call.
#[derive(Debug, Default)]
pub struct RecordingScreen {
    pub visible: bool,
    pub displayed: Option<Country>,
    pub calls: Vec<Call>,
}

impl Screen for RecordingScreen {
    fn show(&mut self) {
        self.visible = true;
        self.calls.push(Call::Show);
    }

    fn hide(&mut self) {
        self.visible = false;
        self.calls.push(Call::Hide);
    }
}

impl CountryDisplay for RecordingScreen {
    fn set_displayed_country(&mut self, country: &Country) {
        self.displayed = Some(country.clone());
        self.calls.push(Call::Display(country.id));
    }
}

/// Reporter that keeps the ids it was given. Clones share the same record.
#[derive(Clone, Default)]
pub struct RecordingReporter {
    reported: Rc<RefCell<Vec<CountryId>>>,
}

impl RecordingReporter {
    pub fn reported(&self) -> Vec<CountryId> {
        self.reported.borrow().clone()
    }
}

impl Reporter for RecordingReporter {
    fn unknown_country_id(&mut self, id: CountryId) {
        self.reported.borrow_mut().push(id);
    }
}

/// Build a country whose descriptive fields are derived from its name.
pub fn country(id: CountryId, name: &str, capital: &str) -> Country {
    Country {
        id,
        name: name.to_string(),
        population: format!("{name} population"),
        area: format!("{name} area"),
        languages: format!("{name} languages"),
        government: format!("{name} government"),
        capital: capital.to_string(),
    }
}

/// A two-country catalog: France (1) and Spain (2).
pub fn test_catalog() -> Catalog {
    Catalog::from_countries(vec![country(1, "France", "Paris"), country(2, "Spain", "Madrid")])
        .expect("test catalog is valid")
}

/// Controller over [`test_catalog`] with recording screens.
pub fn test_controller(
    with_disclaimer: bool,
) -> Controller<RecordingScreen, RecordingScreen, RecordingScreen> {
    let screens = Screens {
        list: RecordingScreen::default(),
        detail: RecordingScreen::default(),
        disclaimer: with_disclaimer.then(RecordingScreen::default),
    };
    Controller::new(test_catalog(), screens)
}

/// Every cell of the test terminal, concatenated row by row.
pub fn buffer_text(terminal: &Terminal<TestBackend>) -> String {
    terminal
        .backend()
        .buffer()
        .content()
        .iter()
        .map(|c| c.symbol())
        .collect()
}
