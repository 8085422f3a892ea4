//! # Core Application Logic
//!
//! The country catalog and the navigation rules. It knows nothing about any
//! specific UI technology.
//!
//! ```text
//!                    ┌─────────────────────────┐
//!                    │         CORE            │
//!                    │  (this module)          │
//!                    │                         │
//!                    │  • Catalog (records)    │
//!                    │  • Controller (nav)     │
//!                    │  • Screen contract      │
//!                    │                         │
//!                    │  No UI. No async.       │
//!                    └───────────┬─────────────┘
//!                                │ Screen / observer traits
//!                                ▼
//!                         ┌────────────┐
//!                         │    TUI     │
//!                         │  Adapter   │
//!                         │ (ratatui)  │
//!                         └────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`country`]: The `Country` record
//! - [`catalog`]: The `Catalog`, loaded once and read-only afterwards
//! - [`screen`]: `Screen`, `CountryDisplay` and the observer traits
//! - [`controller`]: The `Controller` state machine
//! - [`config`]: Settings and their override hierarchy

pub mod catalog;
pub mod config;
pub mod controller;
pub mod country;
pub mod screen;
