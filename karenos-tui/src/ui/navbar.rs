//! Navbar row and the scroll progress bar under it.

use ratatui::layout::Rect;
use ratatui::style::Modifier;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use crate::app::{AppState, SECTIONS};
use crate::theme::Theme;

pub fn render(f: &mut Frame, area: Rect, app: &AppState) {
    let theme = Theme::for_mode(app.page.ui().neon());
    let scrolled = app.page.navbar_scrolled();
    let brand = if scrolled {
        theme.accent_bold().add_modifier(Modifier::REVERSED)
    } else {
        theme.accent_bold()
    };

    let mut spans = vec![Span::styled(format!(" {} ", app.page.content().name), brand)];
    spans.push(Span::raw("  "));
    for (i, (_, label)) in SECTIONS.iter().enumerate().skip(1) {
        spans.push(Span::styled(format!("{i}:{label} "), theme.muted()));
    }
    spans.push(Span::styled(
        format!("  [m] {}", app.page.nav().toggle_label()),
        theme.neutral(),
    ));
    f.render_widget(Paragraph::new(Line::from(spans)), area);
}

/// Progress bar cells filled for `progress` percent of `width`.
pub fn progress_cells(progress: f64, width: u16) -> usize {
    let frac = (progress / 100.0).clamp(0.0, 1.0);
    (frac * f64::from(width)).round() as usize
}

pub fn render_progress(f: &mut Frame, area: Rect, app: &AppState) {
    let theme = Theme::for_mode(app.page.ui().neon());
    let filled = progress_cells(app.page.scroll_progress(), area.width);
    let bar = "━".repeat(filled);
    f.render_widget(Paragraph::new(Span::styled(bar, theme.accent())), area);
}
