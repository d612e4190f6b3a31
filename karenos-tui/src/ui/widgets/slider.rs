//! Labeled horizontal slider line.
//!
//! Used by the simulator bodies and the optimization panel for every range control.

use ratatui::text::{Line, Span};

use karenos_core::controls::Control;

use crate::theme::Theme;

pub const SLIDER_WIDTH: usize = 24;

/// `[=====     ]` for a fraction in [0, 1].
pub fn slider_bar(fraction: f64, width: usize) -> String {
    let frac = if fraction.is_finite() {
        fraction.clamp(0.0, 1.0)
    } else {
        0.0
    };
    let filled = (frac * width as f64).round() as usize;
    let empty = width.saturating_sub(filled);
    format!("[{}{}]", "=".repeat(filled), " ".repeat(empty))
}

/// One slider row: label, bar, readout. Focused rows render reversed.
pub fn slider_line(theme: &Theme, control: &Control, readout: &str, focused: bool) -> Line<'static> {
    let label_style = if focused { theme.focused() } else { theme.muted() };
    let bar_style = if focused { theme.accent() } else { theme.muted() };
    Line::from(vec![
        Span::raw("    "),
        Span::styled(format!("{:>22}: ", control.spec.label), label_style),
        Span::styled(slider_bar(control.fraction(), SLIDER_WIDTH), bar_style),
        Span::styled(format!(" {readout}"), theme.text()),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bar_fills_proportionally() {
        assert_eq!(slider_bar(0.0, 4), "[    ]");
        assert_eq!(slider_bar(0.5, 4), "[==  ]");
        assert_eq!(slider_bar(1.0, 4), "[====]");
        assert_eq!(slider_bar(2.0, 4), "[====]");
        assert_eq!(slider_bar(f64::NAN, 4), "[    ]");
    }
}
