//! Page body — every section laid out top to bottom into a `PageLayout`,
//! then drawn as a scrolled window with the cursor glow and tooltip on top.

use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};
use ratatui::Frame;

use karenos_core::engines::ModuleId;
use karenos_core::expansion::GroupKind;
use karenos_core::page::{CONTACT_BUTTONS, CONTACT_SUBTITLE, HERO_CONTENT, HERO_VISUAL, OPTIMIZATION_PANEL};

use crate::app::{AppState, Focus, TOOLTIP_COLS};
use crate::layout::{point_to_cell, PageLayout, COL_PX, ROW_PX};
use crate::theme::Theme;
use crate::ui::simulators;

/// Style for an element that may still be waiting to reveal.
fn reveal(app: &AppState, id: &str, style: Style) -> Style {
    if app.page.is_hidden(id) {
        style.add_modifier(Modifier::HIDDEN)
    } else {
        style
    }
}

fn heading(out: &mut PageLayout, theme: &Theme, anchor: &str, title: &str) {
    out.blank();
    out.anchor(anchor);
    out.push(Line::from(Span::styled(format!("── {title} "), theme.accent_bold())));
    out.blank();
}

fn marker(expanded: bool) -> &'static str {
    if expanded {
        "▾"
    } else {
        "▸"
    }
}

fn header_style(theme: &Theme, focused: bool, expanded: bool) -> Style {
    if focused {
        theme.focused()
    } else if expanded {
        theme.accent_bold()
    } else {
        theme.text()
    }
}

/// Lay out the whole page for the current state.
pub fn build(app: &AppState) -> PageLayout {
    let theme = Theme::for_mode(app.page.ui().neon());
    let mut out = PageLayout::new();
    hero(&mut out, app, &theme);
    metrics(&mut out, app, &theme);
    timeline(&mut out, app, &theme);
    architecture(&mut out, app, &theme);
    skills(&mut out, app, &theme);
    modules(&mut out, app, &theme);
    optimization(&mut out, app, &theme);
    contact(&mut out, app, &theme);
    out
}

fn hero(out: &mut PageLayout, app: &AppState, theme: &Theme) {
    let content = app.page.content();
    out.anchor("hero");
    out.blank();
    out.anchor(HERO_CONTENT);
    out.push(Line::from(Span::styled(
        format!("  {}", content.name),
        reveal(app, HERO_CONTENT, theme.accent_bold()),
    )));
    let typed = app
        .page
        .animator()
        .typewriter()
        .map(|t| t.visible())
        .unwrap_or_default();
    out.push(Line::from(vec![
        Span::styled(format!("  {typed}"), reveal(app, HERO_CONTENT, theme.text())),
        Span::styled("▌", reveal(app, HERO_CONTENT, theme.accent())),
    ]));
    out.blank();
    out.anchor(HERO_VISUAL);
    out.push(Line::from(Span::styled(
        "  [ data ] ──▶ [ models ] ──▶ [ decisions ] ──▶ [ impact ]",
        reveal(app, HERO_VISUAL, theme.neutral()),
    )));

    if app.page.ui().recruiter() {
        out.blank();
        out.anchor("recruiter-summary");
        out.push(Line::from(Span::styled("  Recruiter summary", theme.warning())));
        for line in &content.recruiter_summary {
            out.push(Line::from(Span::styled(format!("    • {line}"), theme.text())));
        }
    }
}

fn metrics(out: &mut PageLayout, app: &AppState, theme: &Theme) {
    heading(out, theme, "metrics", "Impact");
    for m in &app.page.content().metrics {
        let shown = app
            .page
            .animator()
            .count_up(&m.id)
            .map(|c| c.display().to_string())
            .unwrap_or_default();
        out.anchor(m.id.as_str());
        out.push(Line::from(vec![
            Span::styled(format!("  {shown:>8}  "), reveal(app, &m.id, theme.positive())),
            Span::styled(m.label.clone(), reveal(app, &m.id, theme.muted())),
        ]));
    }
}

fn timeline(out: &mut PageLayout, app: &AppState, theme: &Theme) {
    heading(out, theme, "timeline", "Experience");
    let group = app.page.group(GroupKind::Timeline);
    let focused = app.focused();
    for item in &app.page.content().timeline {
        let view = group.and_then(|g| g.panel(&item.id)).map(|p| p.view());
        let expanded = view.is_some_and(|v| v.header_expanded);
        let is_focused = focused == Some(Focus::Panel(GroupKind::Timeline, item.id.clone()));
        out.anchor(item.id.as_str());
        out.push(Line::from(vec![
            Span::styled(
                format!("  {} {}  {}", marker(expanded), item.period, item.title),
                reveal(app, &item.id, header_style(theme, is_focused, expanded)),
            ),
            Span::styled(format!(" · {}", item.organization), reveal(app, &item.id, theme.muted())),
        ]));
        if view.is_some_and(|v| !v.body_hidden) {
            for d in &item.details {
                out.push(Line::from(Span::styled(format!("      • {d}"), theme.text())));
            }
        }
    }
}

fn architecture(out: &mut PageLayout, app: &AppState, theme: &Theme) {
    heading(out, theme, "architecture", "Architecture");
    let focused = app.focused();
    for block in &app.page.content().architecture {
        let is_focused = focused == Some(Focus::ArchBlock(block.id.clone()));
        let style = if is_focused { theme.focused() } else { theme.neutral() };
        out.anchor(block.id.as_str());
        out.push(Line::from(vec![
            Span::styled(format!("  [ {} ]", block.label), reveal(app, &block.id, style)),
            Span::styled("  hover or Enter for details", reveal(app, &block.id, theme.muted())),
        ]));
    }
}

fn skills(out: &mut PageLayout, app: &AppState, theme: &Theme) {
    heading(out, theme, "skills", "Skills");
    let group = app.page.group(GroupKind::Skills);
    let focused = app.focused();
    for card in &app.page.content().skills {
        let view = group.and_then(|g| g.panel(&card.id)).map(|p| p.view());
        let expanded = view.is_some_and(|v| v.header_expanded);
        let is_focused = focused == Some(Focus::Panel(GroupKind::Skills, card.id.clone()));
        out.anchor(card.id.as_str());
        out.push(Line::from(Span::styled(
            format!("  {} {}", marker(expanded), card.name),
            reveal(app, &card.id, header_style(theme, is_focused, expanded)),
        )));
        match view {
            Some(v) if !v.body_hidden => {
                out.push(Line::from(Span::styled(format!("      {}", card.detail), theme.text())));
            }
            Some(v) if !v.preview_hidden => {
                out.push(Line::from(Span::styled(
                    format!("      {}", card.preview),
                    reveal(app, &card.id, theme.muted()),
                )));
            }
            _ => {}
        }
    }
}

fn modules(out: &mut PageLayout, app: &AppState, theme: &Theme) {
    heading(out, theme, "modules", "Modules");
    let group = app.page.group(GroupKind::Modules);
    let focused = app.focused();
    for block in &app.page.content().modules {
        let expanded = group.is_some_and(|g| g.is_expanded(&block.id));
        let is_focused = focused == Some(Focus::Panel(GroupKind::Modules, block.id.clone()));
        out.anchor(block.id.as_str());
        out.push(Line::from(vec![
            Span::styled(
                format!("  {} {}", marker(expanded), block.title),
                header_style(theme, is_focused, expanded),
            ),
            Span::styled(format!("  {}", block.summary), theme.muted()),
        ]));
        if !expanded {
            continue;
        }
        match block.simulator {
            Some(ModuleId::Revenue) => simulators::revenue_body(out, app, theme),
            Some(ModuleId::Risk) => simulators::risk_body(out, app, theme),
            Some(ModuleId::Architecture) => simulators::architecture_body(out, app, theme),
            Some(ModuleId::Optimization) | None => {}
        }
        out.blank();
    }
}

fn optimization(out: &mut PageLayout, app: &AppState, theme: &Theme) {
    heading(out, theme, "optimization", "Product Optimization");
    out.anchor(OPTIMIZATION_PANEL);
    simulators::optimization_body(out, app, theme);
}

fn contact(out: &mut PageLayout, app: &AppState, theme: &Theme) {
    let content = app.page.content();
    heading(out, theme, "contact", "Contact");
    out.anchor(CONTACT_SUBTITLE);
    out.push(Line::from(Span::styled(
        format!("  {}", content.contact_subtitle),
        reveal(app, CONTACT_SUBTITLE, theme.text()),
    )));
    out.blank();
    out.anchor(CONTACT_BUTTONS);
    let mut spans = vec![Span::raw("  ")];
    for link in &content.contact {
        spans.push(Span::styled(
            format!("[ {} ] {}   ", link.label, link.href),
            reveal(app, CONTACT_BUTTONS, theme.accent()),
        ));
    }
    out.push(Line::from(spans));
    out.blank();
}

// ─── Drawing ─────────────────────────────────────────────────────────

pub fn render(f: &mut Frame, area: Rect, app: &AppState) {
    let theme = Theme::for_mode(app.page.ui().neon());
    let lines = app.layout.lines();
    let start = app.scroll.min(lines.len());
    let end = (start + usize::from(area.height)).min(lines.len());
    let para = Paragraph::new(lines[start..end].to_vec())
        .style(Style::default().bg(theme.background));
    f.render_widget(para, area);

    render_glow(f, area, app, &theme);
    render_tooltip(f, area, app, &theme);
}

fn render_glow(f: &mut Frame, area: Rect, app: &AppState, theme: &Theme) {
    let glow = app.page.animator().glow();
    let opacity = glow.opacity();
    if opacity <= 0.0 {
        return;
    }
    let Some((col, row)) = point_to_cell(glow.position(), area.width, area.height) else {
        return;
    };
    let cell = Rect::new(area.x + col, area.y + row, 1, 1);
    f.render_widget(Paragraph::new("●").style(theme.glow(opacity)), cell);
}

fn render_tooltip(f: &mut Frame, area: Rect, app: &AppState, theme: &Theme) {
    let Some(tip) = app.page.tooltip() else {
        return;
    };
    let x = (tip.position.x / COL_PX).max(0.0) as u16;
    let y = (tip.position.y / ROW_PX).max(0.0) as u16;
    let width = TOOLTIP_COLS.min(area.width);
    let height = 4u16.min(area.height);
    let x = x.min(area.width.saturating_sub(width));
    let y = y.min(area.height.saturating_sub(height));
    let popup = Rect::new(area.x + x, area.y + y, width, height);

    f.render_widget(Clear, popup);
    // Keyboard-pinned tooltips get the accent border, hover ones stay muted.
    let pinned = matches!(app.focused(), Some(Focus::ArchBlock(_)));
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme.panel_border(pinned));
    let para = Paragraph::new(tip.text.clone())
        .style(theme.text())
        .block(block)
        .wrap(Wrap { trim: true });
    f.render_widget(para, popup);
}

#[cfg(test)]
mod tests {
    use super::*;
    use karenos_core::ui_mode::MemoryStore;
    use karenos_core::{KarenConfig, Page};
    use std::time::Duration;

    fn app() -> AppState {
        let page = Page::new(&KarenConfig::default(), Box::new(MemoryStore::new()));
        AppState::new(page)
    }

    fn text_of(layout: &PageLayout) -> String {
        layout
            .lines()
            .iter()
            .map(|l| l.spans.iter().map(|s| s.content.as_ref()).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn every_section_is_anchored() {
        let layout = build(&app());
        for (anchor, _) in crate::app::SECTIONS {
            assert!(layout.row_of(anchor).is_some(), "missing {anchor}");
        }
        assert!(layout.row_of("metric-years").is_some());
        assert!(layout.row_of("conv-slider").is_some());
    }

    #[test]
    fn collapsed_modules_hide_their_bodies() {
        let mut app = app();
        let text = text_of(&build(&app));
        assert!(!text.contains("Projected impact"));

        app.page.activate_panel(GroupKind::Modules, "module-revenue");
        let text = text_of(&build(&app));
        assert!(text.contains("Projected impact"));
        assert!(text.contains("$252.0K"));
        assert!(text.contains(" KILL "));
    }

    #[test]
    fn skill_cards_swap_preview_for_detail() {
        let mut app = app();
        let text = text_of(&build(&app));
        assert!(text.contains("Ranking, risk, forecasting"));
        app.page.activate_panel(GroupKind::Skills, "skill-ml");
        let text = text_of(&build(&app));
        assert!(!text.contains("Ranking, risk, forecasting"));
        assert!(text.contains("Gradient boosting"));
    }

    #[test]
    fn recruiter_mode_adds_summary() {
        let mut app = app();
        assert!(build(&app).row_of("recruiter-summary").is_none());
        app.page.toggle_recruiter();
        assert!(build(&app).row_of("recruiter-summary").is_some());
    }

    #[test]
    fn unrevealed_elements_render_hidden() {
        let mut app = app();
        let layout = build(&app);
        let row = layout.row_of("timeline-lead").unwrap();
        let hidden = layout.lines()[row].spans[0].style.add_modifier;
        assert!(hidden.contains(Modifier::HIDDEN));

        app.apply_layout(layout, 100, 400, Duration::ZERO);
        let layout = build(&app);
        let row = layout.row_of("timeline-lead").unwrap();
        assert!(!layout.lines()[row].spans[0].style.add_modifier.contains(Modifier::HIDDEN));
    }
}
