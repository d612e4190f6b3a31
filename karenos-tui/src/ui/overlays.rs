//! Overlay widgets — key help and the section drawer.

use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};
use ratatui::Frame;

use crate::app::{AppState, SECTIONS};
use crate::theme::Theme;
use crate::ui::centered_rect;

/// Key help overlay.
pub fn render_help(f: &mut Frame, area: Rect, app: &AppState) {
    let theme = Theme::for_mode(app.page.ui().neon());
    let popup = centered_rect(70, 80, area);
    f.render_widget(Clear, popup);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme.accent())
        .title(" Keys [Esc]close ")
        .title_style(theme.accent_bold());

    let mut lines: Vec<Line> = Vec::new();
    section(&mut lines, &theme, "Scrolling");
    key(&mut lines, &theme, "j / ↓  ↑", "Scroll down / up");
    key(&mut lines, &theme, "PgDn / PgUp", "Scroll a page");
    key(&mut lines, &theme, "g / G", "Top / bottom");
    key(&mut lines, &theme, "m", "Section drawer");
    lines.push(Line::from(""));

    section(&mut lines, &theme, "Panels and simulators");
    key(&mut lines, &theme, "Tab / Shift+Tab", "Focus next / previous item");
    key(&mut lines, &theme, "Enter / Space", "Open or close the focused panel");
    key(&mut lines, &theme, "h / l  ← / →", "Adjust slider or selector");
    key(&mut lines, &theme, "Esc", "Close tooltip, clear focus");
    lines.push(Line::from(""));

    section(&mut lines, &theme, "Modes");
    key(&mut lines, &theme, "r", "Recruiter mode (kept for the session)");
    key(&mut lines, &theme, "k", "Neon palette");
    key(&mut lines, &theme, "?", "This help");
    key(&mut lines, &theme, "q", "Quit");

    f.render_widget(Paragraph::new(lines).block(block), popup);
}

/// Section drawer, the terminal's mobile nav.
pub fn render_nav(f: &mut Frame, area: Rect, app: &AppState) {
    let theme = Theme::for_mode(app.page.ui().neon());
    let popup = centered_rect(40, 60, area);
    f.render_widget(Clear, popup);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme.accent())
        .title(format!(" {} ", app.page.nav().toggle_label()))
        .title_style(theme.accent_bold());

    let lines: Vec<Line> = SECTIONS
        .iter()
        .enumerate()
        .map(|(i, (_, label))| {
            Line::from(vec![
                Span::styled(format!("  {i}  "), theme.accent()),
                Span::styled(label.to_string(), theme.text()),
            ])
        })
        .collect();

    f.render_widget(Paragraph::new(lines).block(block), popup);
}

fn section<'a>(lines: &mut Vec<Line<'a>>, theme: &Theme, title: &str) {
    lines.push(Line::from(Span::styled(title.to_string(), theme.accent_bold())));
}

fn key<'a>(lines: &mut Vec<Line<'a>>, theme: &Theme, keys: &str, desc: &str) {
    lines.push(Line::from(vec![
        Span::styled(format!("  {:>18}  ", keys), theme.accent()),
        Span::styled(desc.to_string(), theme.muted()),
    ]));
}
