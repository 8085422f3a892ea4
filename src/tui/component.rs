use ratatui::Frame;
use ratatui::layout::Rect;

use crate::tui::event::TuiEvent;

/// Anything that draws itself into a region of the terminal.
///
/// Screens implement this directly. Pieces that need borrowed data at draw
/// time (the country list needs the catalog) use a short-lived wrapper that
/// holds `&mut` to the screen plus the borrowed data.
///
/// `render` takes `&mut self` because drawing is where page size and scroll
/// limits become known.
pub trait Component {
    fn render(&mut self, frame: &mut Frame, area: Rect);
}

/// Turns terminal input into a screen's own event type.
///
/// Returning `None` means the key was consumed or ignored; the caller only
/// acts on `Some`.
pub trait EventHandler {
    type Event;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<Self::Event>;
}
