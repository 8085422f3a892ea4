//! # TUI Components
//!
//! The concrete screens the controller drives, plus the pieces they share.
//!
//! ## Component Architecture
//!
//! ### Stateless Components (Props-Based Rendering)
//!
//! - `TitleBar`: Bar across the top of every screen
//! - `LoadingScreen`: Shown while the catalog is read
//!
//! ### Screens (Event-Driven)
//!
//! Each screen implements the core `Screen` contract (`show`/`hide`),
//! `Component` for drawing and `EventHandler` for turning key events into
//! its own high-level event type. Screens never navigate: they hand their
//! events back to the event loop, which calls the controller.
//!
//! - `CountryListScreen`: emits `ListEvent::Selected(id)`
//! - `CountryInfoScreen`: emits `DetailEvent::{ReturnToList, Info}`
//! - `DisclaimerScreen`: emits `DisclaimerEvent::Close`
//!
//! ### Props-Based Data Flow
//!
//! The catalog is owned by the controller and lent to the list at render
//! time through the `CountryList` wrapper, instead of being stored in the
//! screen:
//!
//! ```rust,ignore
//! CountryList::new(&mut list_screen, catalog).render(frame, area);
//! ```
//!
//! ## Module Structure
//!
//! ```text
//! components/
//! ├── mod.rs           (this file)
//! ├── title_bar.rs     (Top bar)
//! ├── loading.rs       (Startup screen)
//! ├── country_list.rs  (List screen)
//! ├── country_info.rs  (Detail screen)
//! └── disclaimer.rs    (Disclaimer screen)
//! ```

mod title_bar;
pub use title_bar::TitleBar;

pub mod country_info;
pub mod country_list;
pub mod disclaimer;
pub mod loading;
pub use country_info::{CountryInfoScreen, DetailEvent};
pub use country_list::{CountryList, CountryListScreen, ListEvent};
pub use disclaimer::{DisclaimerEvent, DisclaimerScreen};
pub use loading::LoadingScreen;
