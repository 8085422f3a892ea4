//! # Screen Contract
//!
//! What the controller needs from a screen, and what a screen may tell the
//! controller. Screens are passive: they render and emit events, they never
//! navigate on their own.
//!
//! ```text
//!   Screen ──show()/hide()──────────────────────────┐
//!   CountryDisplay ──set_displayed_country(&Country)│  controller → screen
//!                                                   │
//!   ListObserver ──on_country_selected(id)          │
//!   DetailObserver ──on_return_to_list_requested()  │  screen → controller
//!                 ──on_info_requested()             │
//!   DisclaimerObserver ──on_disclaimer_closed()     │
//!   BackObserver ──on_back_requested() → Flow       │  host → controller
//! ```

use crate::core::country::{Country, CountryId};

/// Which member of the fixed screen set is frontmost.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScreenId {
    List,
    Detail,
    Disclaimer,
}

/// Whether the host should keep running after a back signal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Exit,
}

/// Screen size handed to every screen when it is built.
///
/// A zero width or height means "ask the host", which the terminal adapter
/// resolves to the terminal size before constructing screens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ScreenMetrics {
    pub width: u16,
    pub height: u16,
}

impl ScreenMetrics {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }

    /// Fill unset dimensions from the host size.
    pub fn or_host(self, host_width: u16, host_height: u16) -> Self {
        Self {
            width: if self.width == 0 { host_width } else { self.width },
            height: if self.height == 0 { host_height } else { self.height },
        }
    }
}

pub trait Screen {
    /// Make the screen frontmost. Idempotent.
    fn show(&mut self);

    /// Called when another screen takes the front.
    fn hide(&mut self) {}
}

/// A screen that renders a single country.
pub trait CountryDisplay: Screen {
    /// Always invoked before [`Screen::show`].
    fn set_displayed_country(&mut self, country: &Country);
}

pub trait ListObserver {
    fn on_country_selected(&mut self, id: CountryId);
}

pub trait DetailObserver {
    fn on_return_to_list_requested(&mut self);
    fn on_info_requested(&mut self);
}

pub trait DisclaimerObserver {
    fn on_disclaimer_closed(&mut self);
}

pub trait BackObserver {
    fn on_back_requested(&mut self) -> Flow;
}
