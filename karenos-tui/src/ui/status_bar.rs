//! Bottom status bar — mode flags, key hints, last status message.

use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use crate::app::{AppState, StatusLevel};
use crate::theme::Theme;

pub fn render(f: &mut Frame, area: Rect, app: &AppState) {
    let theme = Theme::for_mode(app.page.ui().neon());
    let ui = app.page.ui();
    let mut spans: Vec<Span> = Vec::new();

    if ui.recruiter() {
        spans.push(Span::styled(" RECRUITER ", theme.warning()));
    }
    if ui.neon() {
        spans.push(Span::styled(" NEON ", theme.accent_bold()));
    }

    spans.push(Span::styled(
        " Tab:focus Enter:open h/l:adjust r:recruiter k:neon ?:help q:quit",
        theme.muted(),
    ));
    spans.push(Span::raw(" | "));
    spans.push(Span::styled(
        format!("{:.0}%", app.page.scroll_progress()),
        theme.neutral(),
    ));

    if let Some((msg, level)) = &app.status_message {
        spans.push(Span::raw(" | "));
        let style = match level {
            StatusLevel::Info => theme.accent(),
            StatusLevel::Warning => theme.warning(),
        };
        spans.push(Span::styled(msg.as_str(), style));
    }

    f.render_widget(Paragraph::new(Line::from(spans)), area);
}
