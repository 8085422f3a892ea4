//! # Navigation Controller
//!
//! Owns the catalog and the screen set, and is the only place that knows the
//! legal screen graph.
//!
//! ```text
//!            select(id) [lookup ok]
//!   ┌──────┐ ─────────────────────────► ┌────────┐  info   ┌────────────┐
//!   │ List │                            │ Detail │ ──────► │ Disclaimer │
//!   └──────┘ ◄───────────────────────── └────────┘ ◄────── └────────────┘
//!      │        back / return-to-list               back / close
//!      │ back
//!      ▼
//!   terminated
//! ```
//!
//! The frontmost screen is a [`ScreenId`] tag into the owned [`Screens`], and
//! `show()` is the only code that changes it. Screen events that do not come
//! from the frontmost screen are dropped.

use log::{debug, info, warn};

use crate::core::catalog::{Catalog, CatalogError, CatalogSource, LookupError};
use crate::core::country::CountryId;
use crate::core::screen::{
    BackObserver, CountryDisplay, DetailObserver, DisclaimerObserver, Flow, ListObserver, Screen,
    ScreenId,
};

/// Receives recoverable navigation problems.
pub trait Reporter {
    fn unknown_country_id(&mut self, id: CountryId);
}

/// Default reporter: writes a warning to the log.
pub struct LogReporter;

impl Reporter for LogReporter {
    fn unknown_country_id(&mut self, id: CountryId) {
        warn!("Invalid country id {}, staying on current screen", id);
    }
}

/// The fixed screen set. The disclaimer screen is optional.
pub struct Screens<L, D, X> {
    pub list: L,
    pub detail: D,
    pub disclaimer: Option<X>,
}

/// Borrowed view of the controller's parts, for rendering and event handling.
pub struct ScreenParts<'a, L, D, X> {
    pub catalog: &'a Catalog,
    pub list: &'a mut L,
    pub detail: &'a mut D,
    pub disclaimer: Option<&'a mut X>,
}

pub struct Controller<L, D, X> {
    catalog: Catalog,
    screens: Screens<L, D, X>,
    current: ScreenId,
    terminated: bool,
    reporter: Box<dyn Reporter>,
}

impl<L, D, X> Controller<L, D, X>
where
    L: Screen,
    D: CountryDisplay,
    X: Screen,
{
    /// Take ownership of a loaded catalog and its screens, then show the list.
    pub fn new(catalog: Catalog, screens: Screens<L, D, X>) -> Self {
        Self::with_reporter(catalog, screens, Box::new(LogReporter))
    }

    pub fn with_reporter(
        catalog: Catalog,
        screens: Screens<L, D, X>,
        reporter: Box<dyn Reporter>,
    ) -> Self {
        let mut controller = Self {
            catalog,
            screens,
            current: ScreenId::List,
            terminated: false,
            reporter,
        };
        controller.show(ScreenId::List);
        info!(
            "Controller ready: {} countries, disclaimer {}",
            controller.catalog.len(),
            if controller.has_disclaimer() { "enabled" } else { "disabled" }
        );
        controller
    }

    /// Load the catalog, build the screens against it, then construct.
    ///
    /// A load failure returns before any screen is built.
    pub fn start<F>(source: &CatalogSource, build: F) -> Result<Self, CatalogError>
    where
        F: FnOnce(&Catalog) -> Screens<L, D, X>,
    {
        let catalog = Catalog::load(source)?;
        let screens = build(&catalog);
        Ok(Self::new(catalog, screens))
    }

    pub fn current(&self) -> ScreenId {
        self.current
    }

    pub fn is_terminated(&self) -> bool {
        self.terminated
    }

    pub fn has_disclaimer(&self) -> bool {
        self.screens.disclaimer.is_some()
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn list(&self) -> &L {
        &self.screens.list
    }

    pub fn detail(&self) -> &D {
        &self.screens.detail
    }

    pub fn disclaimer(&self) -> Option<&X> {
        self.screens.disclaimer.as_ref()
    }

    pub fn parts_mut(&mut self) -> ScreenParts<'_, L, D, X> {
        ScreenParts {
            catalog: &self.catalog,
            list: &mut self.screens.list,
            detail: &mut self.screens.detail,
            disclaimer: self.screens.disclaimer.as_mut(),
        }
    }

    fn screen_mut(&mut self, id: ScreenId) -> Option<&mut dyn Screen> {
        match id {
            ScreenId::List => Some(&mut self.screens.list as &mut dyn Screen),
            ScreenId::Detail => Some(&mut self.screens.detail as &mut dyn Screen),
            ScreenId::Disclaimer => self
                .screens
                .disclaimer
                .as_mut()
                .map(|screen| screen as &mut dyn Screen),
        }
    }

    fn show(&mut self, target: ScreenId) {
        if self.screen_mut(target).is_none() {
            warn!("No {:?} screen configured", target);
            return;
        }
        let previous = self.current;
        if previous != target
            && let Some(screen) = self.screen_mut(previous)
        {
            screen.hide();
        }
        self.current = target;
        if let Some(screen) = self.screen_mut(target) {
            screen.show();
        }
        debug!("Showing {:?} (was {:?})", target, previous);
    }

    /// True when an event from `source` may act.
    fn accepts_from(&self, source: ScreenId) -> bool {
        if self.terminated {
            debug!("Ignoring {:?} event after termination", source);
            return false;
        }
        if self.current != source {
            debug!(
                "Ignoring {:?} event while {:?} is frontmost",
                source, self.current
            );
            return false;
        }
        true
    }
}

impl<L, D, X> ListObserver for Controller<L, D, X>
where
    L: Screen,
    D: CountryDisplay,
    X: Screen,
{
    fn on_country_selected(&mut self, id: CountryId) {
        if !self.accepts_from(ScreenId::List) {
            return;
        }
        match self.catalog.lookup(id) {
            Ok(country) => {
                debug!("Selected {} ({})", country.name, id);
                self.screens.detail.set_displayed_country(country);
            }
            Err(LookupError::NotFound(id)) => {
                self.reporter.unknown_country_id(id);
                return;
            }
        }
        self.show(ScreenId::Detail);
    }
}

impl<L, D, X> DetailObserver for Controller<L, D, X>
where
    L: Screen,
    D: CountryDisplay,
    X: Screen,
{
    fn on_return_to_list_requested(&mut self) {
        if self.accepts_from(ScreenId::Detail) {
            self.show(ScreenId::List);
        }
    }

    fn on_info_requested(&mut self) {
        if !self.accepts_from(ScreenId::Detail) {
            return;
        }
        if self.has_disclaimer() {
            self.show(ScreenId::Disclaimer);
        } else {
            debug!("Info requested but no disclaimer screen is configured");
        }
    }
}

impl<L, D, X> DisclaimerObserver for Controller<L, D, X>
where
    L: Screen,
    D: CountryDisplay,
    X: Screen,
{
    fn on_disclaimer_closed(&mut self) {
        if self.accepts_from(ScreenId::Disclaimer) {
            self.show(ScreenId::Detail);
        }
    }
}

impl<L, D, X> BackObserver for Controller<L, D, X>
where
    L: Screen,
    D: CountryDisplay,
    X: Screen,
{
    fn on_back_requested(&mut self) -> Flow {
        if self.terminated {
            return Flow::Exit;
        }
        match self.current {
            ScreenId::Detail => self.show(ScreenId::List),
            ScreenId::Disclaimer => self.show(ScreenId::Detail),
            ScreenId::List => {
                info!("Back pressed on country list, closing");
                self.terminated = true;
                return Flow::Exit;
            }
        }
        Flow::Continue
    }
}
