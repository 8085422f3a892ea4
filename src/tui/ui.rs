use ratatui::Frame;
use ratatui::layout::Rect;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::core::screen::{ScreenId, ScreenMetrics};
use crate::tui::AppController;
use crate::tui::component::Component;
use crate::tui::components::CountryList;

/// Draw whichever screen the controller has in front.
pub fn draw_ui(frame: &mut Frame, controller: &mut AppController) {
    let area = frame.area();
    let current = controller.current();
    let parts = controller.parts_mut();
    match current {
        ScreenId::List => CountryList::new(parts.list, parts.catalog).render(frame, area),
        ScreenId::Detail => parts.detail.render(frame, area),
        ScreenId::Disclaimer => {
            if let Some(disclaimer) = parts.disclaimer {
                disclaimer.render(frame, area);
            }
        }
    }
}

/// The part of `area` a screen of the given size may use, anchored top-left.
pub fn fit_area(metrics: ScreenMetrics, area: Rect) -> Rect {
    let width = if metrics.width == 0 { area.width } else { metrics.width.min(area.width) };
    let height = if metrics.height == 0 { area.height } else { metrics.height.min(area.height) };
    Rect::new(area.x, area.y, width, height)
}

/// One eleventh of the screen height, at least one row.
pub fn title_bar_height(metrics: ScreenMetrics) -> u16 {
    (metrics.height / 11).max(1)
}

/// Truncate to `max_width` display columns, adding "..." if needed.
pub fn truncate_to_width(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }
    if max_width <= 3 {
        return ".".repeat(max_width);
    }
    let budget = max_width - 3;
    let mut used = 0;
    let mut out = String::new();
    for c in s.chars() {
        let w = c.width().unwrap_or(0);
        if used + w > budget {
            break;
        }
        used += w;
        out.push(c);
    }
    out.push_str("...");
    out
}
