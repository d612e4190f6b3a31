//! Palette tokens for the KarenOS TUI
//!
//! Two palettes share one set of roles:
//! - **Standard**: muted slate with a teal accent (the default page look)
//! - **Neon**: electric cyan, hot pink and green on near-black (the `k` toggle)
//!
//! Widgets never pick colors directly; they ask the active `Theme` for a
//! role-based `Style`.

use ratatui::style::{Color, Modifier, Style};

use karenos_core::engines::{AlertState, Decision};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    /// Page background
    pub background: Color,
    /// Focus, headings, links
    pub accent: Color,
    /// GO decisions, revealed counters
    pub positive: Color,
    /// KILL decisions, active alerts
    pub negative: Color,
    /// ITERATE decisions, recruiter banner
    pub warning: Color,
    /// Secondary info
    pub neutral: Color,
    /// Hints, collapsed previews
    pub muted: Color,
    pub text_primary: Color,
    /// Cursor glow
    pub glow: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self::standard()
    }
}

impl Theme {
    pub fn standard() -> Self {
        Self {
            background: Color::Rgb(15, 23, 42),
            accent: Color::Rgb(45, 212, 191),
            positive: Color::Rgb(74, 222, 128),
            negative: Color::Rgb(248, 113, 113),
            warning: Color::Rgb(251, 191, 36),
            neutral: Color::Rgb(148, 163, 184),
            muted: Color::Rgb(100, 116, 139),
            text_primary: Color::Rgb(226, 232, 240),
            glow: Color::Rgb(94, 234, 212),
        }
    }

    pub fn neon() -> Self {
        Self {
            background: Color::Rgb(18, 18, 20),
            accent: Color::Rgb(0, 255, 255),
            positive: Color::Rgb(0, 255, 128),
            negative: Color::Rgb(255, 20, 147),
            warning: Color::Rgb(255, 140, 0),
            neutral: Color::Rgb(147, 112, 219),
            muted: Color::Rgb(100, 149, 237),
            text_primary: Color::White,
            glow: Color::Rgb(255, 0, 255),
        }
    }

    /// Palette for the current neon flag.
    pub fn for_mode(neon: bool) -> Self {
        if neon {
            Self::neon()
        } else {
            Self::standard()
        }
    }

    // ─── Styles ──────────────────────────────────────────────────────

    pub fn text(&self) -> Style {
        Style::default().fg(self.text_primary)
    }

    pub fn accent(&self) -> Style {
        Style::default().fg(self.accent)
    }

    pub fn accent_bold(&self) -> Style {
        self.accent().add_modifier(Modifier::BOLD)
    }

    pub fn muted(&self) -> Style {
        Style::default().fg(self.muted)
    }

    pub fn neutral(&self) -> Style {
        Style::default().fg(self.neutral)
    }

    pub fn positive(&self) -> Style {
        Style::default().fg(self.positive)
    }

    pub fn negative(&self) -> Style {
        Style::default().fg(self.negative)
    }

    pub fn warning(&self) -> Style {
        Style::default().fg(self.warning)
    }

    pub fn focused(&self) -> Style {
        self.accent().add_modifier(Modifier::REVERSED)
    }

    pub fn panel_border(&self, active: bool) -> Style {
        if active {
            self.accent()
        } else {
            self.muted()
        }
    }

    pub fn glow(&self, opacity: f64) -> Style {
        let style = Style::default().fg(self.glow);
        if opacity >= 0.3 {
            style.add_modifier(Modifier::BOLD)
        } else {
            style.add_modifier(Modifier::DIM)
        }
    }

    // ─── Domain colors ───────────────────────────────────────────────

    pub fn decision_style(&self, decision: Decision) -> Style {
        let color = match decision {
            Decision::Go => self.positive,
            Decision::Kill => self.negative,
            Decision::Iterate => self.warning,
        };
        Style::default().fg(color).add_modifier(Modifier::BOLD)
    }

    pub fn alert_style(&self, alert: AlertState) -> Style {
        match alert {
            AlertState::Active => self.negative().add_modifier(Modifier::BOLD),
            AlertState::Inactive => self.muted(),
        }
    }
}
