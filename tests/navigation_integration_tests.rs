use std::cell::RefCell;
use std::rc::Rc;

use eurocountries::core::catalog::{Catalog, CatalogError, CatalogSource, LookupError};
use eurocountries::core::controller::{Controller, Reporter, Screens};
use eurocountries::core::country::{Country, CountryId};
use eurocountries::core::screen::{
    BackObserver, CountryDisplay, DetailObserver, DisclaimerObserver, Flow, ListObserver, Screen,
    ScreenId, ScreenMetrics,
};
use eurocountries::tui::event::TuiEvent;
use eurocountries::tui::{build_screens, route_event};

// ============================================================================
// Helper Types
// ============================================================================

/// Screen double that records visibility and the last displayed country.
#[derive(Default)]
struct FakeScreen {
    visible: bool,
    shown: usize,
    displayed: Option<Country>,
}

impl Screen for FakeScreen {
    fn show(&mut self) {
        self.visible = true;
        self.shown += 1;
    }

    fn hide(&mut self) {
        self.visible = false;
    }
}

impl CountryDisplay for FakeScreen {
    fn set_displayed_country(&mut self, country: &Country) {
        self.displayed = Some(country.clone());
    }
}

#[derive(Clone, Default)]
struct SharedReporter(Rc<RefCell<Vec<CountryId>>>);

impl Reporter for SharedReporter {
    fn unknown_country_id(&mut self, id: CountryId) {
        self.0.borrow_mut().push(id);
    }
}

type FakeController = Controller<FakeScreen, FakeScreen, FakeScreen>;

fn bundled_controller(with_disclaimer: bool) -> (FakeController, SharedReporter) {
    let catalog = Catalog::load(&CatalogSource::Bundled).expect("bundled catalog loads");
    let reporter = SharedReporter::default();
    let screens = Screens {
        list: FakeScreen::default(),
        detail: FakeScreen::default(),
        disclaimer: with_disclaimer.then(FakeScreen::default),
    };
    let controller = Controller::with_reporter(catalog, screens, Box::new(reporter.clone()));
    (controller, reporter)
}

// ============================================================================
// Bundled Catalog
// ============================================================================

#[test]
fn test_bundled_catalog_is_complete() {
    let catalog = Catalog::load(&CatalogSource::Bundled).unwrap();
    assert_eq!(catalog.len(), 44);

    let france = catalog.lookup(14).unwrap();
    assert_eq!(france.name, "France");
    assert_eq!(france.capital, "Paris");

    for country in catalog.iter() {
        assert!(!country.name.trim().is_empty());
        assert_eq!(catalog.lookup(country.id).unwrap(), country);
    }
    assert!(matches!(catalog.lookup(999), Err(LookupError::NotFound(999))));
}

#[test]
fn test_missing_data_file_fails_startup() {
    let source = CatalogSource::File("/nonexistent/eurocountries/countries.json".into());
    let result = Controller::start(&source, |_: &Catalog| Screens {
        list: FakeScreen::default(),
        detail: FakeScreen::default(),
        disclaimer: None::<FakeScreen>,
    });
    assert!(matches!(result, Err(CatalogError::Io { .. })));
}

// ============================================================================
// Navigation Through Observers
// ============================================================================

#[test]
fn test_browse_france_then_unknown_id() {
    let (mut controller, reporter) = bundled_controller(true);
    assert_eq!(controller.current(), ScreenId::List);
    assert!(controller.list().visible);

    controller.on_country_selected(14);
    assert_eq!(controller.current(), ScreenId::Detail);
    assert_eq!(controller.detail().displayed.as_ref().unwrap().name, "France");
    assert!(!controller.list().visible);

    controller.on_info_requested();
    assert_eq!(controller.current(), ScreenId::Disclaimer);
    assert_eq!(controller.on_back_requested(), Flow::Continue);
    assert_eq!(controller.current(), ScreenId::Detail);

    controller.on_return_to_list_requested();
    assert_eq!(controller.current(), ScreenId::List);

    controller.on_country_selected(999);
    assert_eq!(controller.current(), ScreenId::List);
    assert_eq!(*reporter.0.borrow(), vec![999]);
    assert_eq!(controller.detail().displayed.as_ref().unwrap().name, "France");

    assert_eq!(controller.on_back_requested(), Flow::Exit);
    assert!(controller.is_terminated());
}

#[test]
fn test_disclaimer_close_and_absent_disclaimer() {
    let (mut controller, _) = bundled_controller(true);
    controller.on_country_selected(1);
    controller.on_info_requested();
    controller.on_disclaimer_closed();
    assert_eq!(controller.current(), ScreenId::Detail);

    let (mut plain, _) = bundled_controller(false);
    plain.on_country_selected(1);
    plain.on_info_requested();
    assert_eq!(plain.current(), ScreenId::Detail);
    assert!(!plain.has_disclaimer());
}

// ============================================================================
// Terminal Screens
// ============================================================================

#[test]
fn test_keyboard_walk_to_france() {
    let catalog = Catalog::load(&CatalogSource::Bundled).unwrap();
    let screens = build_screens(&catalog, ScreenMetrics::new(80, 24), true);
    let mut controller = Controller::new(catalog, screens);

    for _ in 0..13 {
        route_event(&mut controller, &TuiEvent::CursorDown);
    }
    assert_eq!(controller.list().selected_id(), Some(14));

    route_event(&mut controller, &TuiEvent::Submit);
    assert_eq!(controller.current(), ScreenId::Detail);
    assert_eq!(controller.detail().name(), "France");
    assert_eq!(controller.detail().value("Capital"), Some("Paris"));

    route_event(&mut controller, &TuiEvent::Info);
    assert_eq!(controller.current(), ScreenId::Disclaimer);
    assert!(controller.disclaimer().unwrap().is_visible());

    assert_eq!(route_event(&mut controller, &TuiEvent::Back), Flow::Continue);
    assert_eq!(route_event(&mut controller, &TuiEvent::Back), Flow::Continue);
    assert_eq!(controller.current(), ScreenId::List);
    assert_eq!(controller.list().selected_id(), Some(14));
    assert_eq!(route_event(&mut controller, &TuiEvent::Back), Flow::Exit);
}
