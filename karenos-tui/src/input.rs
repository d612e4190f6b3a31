//! Keyboard and mouse dispatch: overlays first, then global keys, then focus keys.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseEvent, MouseEventKind};
use ratatui::layout::Rect;

use karenos_core::ui_mode::KeyInput;

use crate::app::{AppState, Overlay, SECTIONS};

/// Page-level view of a key press, for the core's shortcut handling.
fn key_input(key: &KeyEvent) -> Option<KeyInput> {
    let KeyCode::Char(c) = key.code else {
        return None;
    };
    Some(KeyInput {
        key: c,
        ctrl: key.modifiers.contains(KeyModifiers::CONTROL),
        meta: key
            .modifiers
            .intersects(KeyModifiers::SUPER | KeyModifiers::META),
        alt: key.modifiers.contains(KeyModifiers::ALT),
    })
}

fn section_for_digit(c: char) -> Option<&'static str> {
    let i = c.to_digit(10)? as usize;
    SECTIONS.get(i).map(|(anchor, _)| *anchor)
}

/// Handle a key event.
pub fn handle_key(app: &mut AppState, key: KeyEvent) {
    // Only handle key press events (Windows sends both Press and Release).
    if key.kind != KeyEventKind::Press {
        return;
    }

    // 1. Overlays consume input first.
    match app.overlay {
        Overlay::Help => {
            if matches!(key.code, KeyCode::Esc | KeyCode::Char('?') | KeyCode::Char('q')) {
                app.overlay = Overlay::None;
            }
            return;
        }
        Overlay::Nav => {
            handle_nav_overlay(app, key);
            return;
        }
        Overlay::None => {}
    }

    // 2. Page shortcuts (neon toggle) see every plain character first.
    if let Some(input) = key_input(&key) {
        if app.page.key_press(input) {
            return;
        }
    }

    // 3. Global keys.
    let page_rows = app.body_height.saturating_sub(1).max(1) as isize;
    match key.code {
        KeyCode::Char('q') => app.running = false,
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => app.running = false,
        KeyCode::Char('?') => app.overlay = Overlay::Help,
        KeyCode::Char('m') => {
            app.page.toggle_mobile_nav();
            app.overlay = Overlay::Nav;
        }
        KeyCode::Char('r') => app.toggle_recruiter(),
        KeyCode::Char(c) if c.is_ascii_digit() => {
            if let Some(anchor) = section_for_digit(c) {
                app.jump_to(anchor);
            }
        }
        KeyCode::Char('j') | KeyCode::Down => app.scroll_by(1),
        KeyCode::Up => app.scroll_by(-1),
        KeyCode::PageDown => app.scroll_by(page_rows),
        KeyCode::PageUp => app.scroll_by(-page_rows),
        KeyCode::Char('g') | KeyCode::Home => app.scroll_to(0),
        KeyCode::Char('G') | KeyCode::End => app.scroll_to(usize::MAX),
        KeyCode::Tab => {
            if key.modifiers.contains(KeyModifiers::SHIFT) {
                app.focus_prev();
            } else {
                app.focus_next();
            }
        }
        KeyCode::BackTab => app.focus_prev(),
        KeyCode::Enter | KeyCode::Char(' ') => app.activate_focused(),
        KeyCode::Char('h') | KeyCode::Left => app.adjust_focused(-1),
        KeyCode::Char('l') | KeyCode::Right => app.adjust_focused(1),
        KeyCode::Esc => {
            app.page.hide_tooltip();
            app.focus = None;
        }
        _ => {}
    }
}

fn handle_nav_overlay(app: &mut AppState, key: KeyEvent) {
    match key.code {
        KeyCode::Esc | KeyCode::Char('m') | KeyCode::Char('q') => {
            if app.page.nav().is_open() {
                app.page.toggle_mobile_nav();
            }
            app.overlay = Overlay::None;
        }
        KeyCode::Char(c) => {
            if let Some(anchor) = section_for_digit(c) {
                app.jump_to(anchor);
            }
        }
        _ => {}
    }
}

/// Handle a mouse event. `body` is the page body area on screen.
pub fn handle_mouse(app: &mut AppState, mouse: MouseEvent, body: Rect) {
    let inside = mouse.column >= body.x
        && mouse.column < body.x + body.width
        && mouse.row >= body.y
        && mouse.row < body.y + body.height;
    match mouse.kind {
        MouseEventKind::Moved | MouseEventKind::Drag(_) if inside => {
            app.pointer_moved(mouse.column - body.x, mouse.row - body.y);
        }
        MouseEventKind::ScrollDown => app.scroll_by(3),
        MouseEventKind::ScrollUp => app.scroll_by(-3),
        _ => {}
    }
}
