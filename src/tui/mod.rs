//! # TUI Adapter
//!
//! The ratatui-specific layer. Builds the concrete screens, renders the
//! frontmost one, and translates keyboard events into controller callbacks.
//!
//! This is the only module that knows about ratatui and crossterm.
//!
//! ## Event Routing
//!
//! ```text
//! crossterm Event ─► TuiEvent ─┬─ Back ──────────────► on_back_requested()
//!                              ├─ ForceQuit ─────────► exit
//!                              └─ other ─► frontmost screen.handle_event()
//!                                             │
//!                                             ▼
//!                     ListEvent / DetailEvent / DisclaimerEvent
//!                                             │
//!                                             ▼
//!                              observer method on the controller
//! ```
//!
//! Only the frontmost screen ever sees an input event.
//!
//! ## Redraw Strategy
//!
//! Nothing animates, so the loop blocks on input and redraws once per event.

mod component;
pub mod components;
pub mod event;
mod ui;

use log::{debug, info};
use std::error::Error;
use std::io::stdout;

use crossterm::cursor::{Hide, Show};
use crossterm::execute;
use ratatui::DefaultTerminal;

use crate::core::catalog::Catalog;
use crate::core::config::ResolvedConfig;
use crate::core::controller::{Controller, Screens};
use crate::core::screen::{
    BackObserver, DetailObserver, DisclaimerObserver, Flow, ListObserver, ScreenId, ScreenMetrics,
};
use crate::tui::component::{Component, EventHandler};
use crate::tui::components::{
    CountryInfoScreen, CountryListScreen, DetailEvent, DisclaimerEvent, DisclaimerScreen,
    ListEvent, LoadingScreen,
};
use crate::tui::event::{TuiEvent, read_event};

/// The controller as the terminal adapter instantiates it.
pub type AppController = Controller<CountryListScreen, CountryInfoScreen, DisclaimerScreen>;

struct TerminalModeGuard;

impl TerminalModeGuard {
    fn new() -> std::io::Result<Self> {
        execute!(stdout(), Hide)?;
        info!("Terminal modes enabled (cursor hidden)");
        Ok(Self)
    }
}

impl Drop for TerminalModeGuard {
    fn drop(&mut self) {
        let _ = execute!(stdout(), Show);
    }
}

/// Build the screen set for a loaded catalog.
pub fn build_screens(
    catalog: &Catalog,
    metrics: ScreenMetrics,
    show_disclaimer: bool,
) -> Screens<CountryListScreen, CountryInfoScreen, DisclaimerScreen> {
    Screens {
        list: CountryListScreen::new(catalog, metrics),
        detail: CountryInfoScreen::new(metrics, show_disclaimer),
        disclaimer: show_disclaimer.then(|| DisclaimerScreen::new(metrics)),
    }
}

/// Hand one input event to the controller or the frontmost screen.
pub fn route_event(controller: &mut AppController, event: &TuiEvent) -> Flow {
    match event {
        TuiEvent::ForceQuit => {
            info!("Force quit requested");
            return Flow::Exit;
        }
        TuiEvent::Back => return controller.on_back_requested(),
        TuiEvent::Resize => return Flow::Continue,
        _ => {}
    }

    match controller.current() {
        ScreenId::List => {
            let emitted = controller.parts_mut().list.handle_event(event);
            if let Some(ListEvent::Selected(id)) = emitted {
                controller.on_country_selected(id);
            }
        }
        ScreenId::Detail => {
            let emitted = controller.parts_mut().detail.handle_event(event);
            match emitted {
                Some(DetailEvent::ReturnToList) => controller.on_return_to_list_requested(),
                Some(DetailEvent::Info) => controller.on_info_requested(),
                None => {}
            }
        }
        ScreenId::Disclaimer => {
            let emitted = controller
                .parts_mut()
                .disclaimer
                .and_then(|screen| screen.handle_event(event));
            if let Some(DisclaimerEvent::Close) = emitted {
                controller.on_disclaimer_closed();
            }
        }
    }
    Flow::Continue
}

pub fn run(config: ResolvedConfig) -> Result<(), Box<dyn Error>> {
    let mut terminal = ratatui::init();
    let result = run_app(&mut terminal, &config);
    ratatui::restore();
    result
}

fn run_app(terminal: &mut DefaultTerminal, config: &ResolvedConfig) -> Result<(), Box<dyn Error>> {
    let _terminal_mode_guard = TerminalModeGuard::new()?;

    terminal.draw(|f| LoadingScreen.render(f, f.area()))?;

    let size = terminal.size()?;
    let metrics = config.metrics.or_host(size.width, size.height);
    debug!("Screen metrics: {}x{}", metrics.width, metrics.height);

    let mut controller = Controller::start(&config.catalog_source, |catalog| {
        build_screens(catalog, metrics, config.show_disclaimer)
    })?;

    loop {
        terminal.draw(|f| ui::draw_ui(f, &mut controller))?;

        let Some(event) = read_event()? else {
            continue;
        };
        if route_event(&mut controller, &event) == Flow::Exit {
            break;
        }
    }

    info!("Shutting down");
    Ok(())
}
