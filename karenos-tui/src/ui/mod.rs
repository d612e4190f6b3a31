//! Top-level UI layout — navbar with scroll progress, scrolled page body,
//! status bar, overlays on top.

pub mod navbar;
pub mod overlays;
pub mod page;
pub mod simulators;
pub mod status_bar;
pub mod widgets;

use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::Frame;

use crate::app::{AppState, Overlay};

/// Split the terminal into navbar, progress, body and status rows.
fn chunks(area: Rect) -> [Rect; 4] {
    let c = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Min(3),
            Constraint::Length(1),
        ])
        .split(area);
    [c[0], c[1], c[2], c[3]]
}

/// Body area for a terminal of this size.
pub fn body_rect(area: Rect) -> Rect {
    chunks(area)[2]
}

/// Draw the entire UI.
pub fn draw(f: &mut Frame, app: &AppState) {
    let [nav_area, progress_area, body_area, status_area] = chunks(f.area());

    navbar::render(f, nav_area, app);
    navbar::render_progress(f, progress_area, app);
    page::render(f, body_area, app);
    status_bar::render(f, status_area, app);

    match app.overlay {
        Overlay::Help => overlays::render_help(f, body_area, app),
        Overlay::Nav => overlays::render_nav(f, body_area, app),
        Overlay::None => {}
    }
}

/// Compute a centered rect for overlays.
pub fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}

#[cfg(test)]
mod tests {
    use super::*;
    use karenos_core::ui_mode::MemoryStore;
    use karenos_core::{KarenConfig, Page};
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;
    use std::time::Duration;

    #[test]
    fn body_leaves_room_for_bars() {
        let body = body_rect(Rect::new(0, 0, 100, 40));
        assert_eq!(body.y, 2);
        assert_eq!(body.height, 37);
        assert_eq!(body.width, 100);
    }

    #[test]
    fn draws_every_overlay_without_panicking() {
        let page = Page::new(&KarenConfig::default(), Box::new(MemoryStore::new()));
        let mut app = AppState::new(page);
        let mut terminal = Terminal::new(TestBackend::new(100, 40)).unwrap();
        let body = body_rect(Rect::new(0, 0, 100, 40));
        let layout = page::build(&app);
        app.apply_layout(layout, body.width, body.height, Duration::ZERO);

        for overlay in [Overlay::None, Overlay::Help, Overlay::Nav] {
            app.overlay = overlay;
            terminal.draw(|f| draw(f, &app)).unwrap();
        }
        let buffer = terminal.backend().buffer();
        let top: String = (0..buffer.area.width)
            .map(|x| buffer[(x, 0)].symbol().to_string())
            .collect();
        assert!(top.contains("KarenOS"));
    }
}
