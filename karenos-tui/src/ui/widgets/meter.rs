//! Text meters: risk fill, confidence band and the precision–recall sparkline.

const SPARK: [char; 8] = ['▁', '▂', '▃', '▄', '▅', '▆', '▇', '█'];

/// Fill bar for a percentage in [0, 100].
pub fn fill_bar(pct: f64, width: usize) -> String {
    let frac = (pct / 100.0).clamp(0.0, 1.0);
    let filled = (frac * width as f64).round() as usize;
    format!("{}{}", "█".repeat(filled), "░".repeat(width.saturating_sub(filled)))
}

/// Band between two gradient stops (percent). Stops may arrive in either order.
pub fn band_bar(start: f64, end: f64, width: usize) -> String {
    let (lo, hi) = if start <= end { (start, end) } else { (end, start) };
    let w = width as f64;
    let lo = ((lo / 100.0).clamp(0.0, 1.0) * w).round() as usize;
    let hi = ((hi / 100.0).clamp(0.0, 1.0) * w).round() as usize;
    (0..width)
        .map(|i| if i >= lo && i < hi.max(lo + 1) { '▓' } else { '·' })
        .collect()
}

/// Parse an `M x,y L x,y ...` path back into points.
pub fn parse_path(path: &str) -> Vec<(f64, f64)> {
    path.trim_start_matches('M')
        .split(" L")
        .filter_map(|pair| {
            let (x, y) = pair.trim().split_once(',')?;
            Some((x.parse().ok()?, y.parse().ok()?))
        })
        .collect()
}

/// One block character per point. Screen y grows downward, so low y is a tall bar.
pub fn sparkline(points: &[(f64, f64)]) -> String {
    let Some(min) = points.iter().map(|p| p.1).reduce(f64::min) else {
        return String::new();
    };
    let max = points.iter().map(|p| p.1).fold(min, f64::max);
    let span = max - min;
    points
        .iter()
        .map(|(_, y)| {
            let level = if span > 0.0 { (max - y) / span } else { 0.5 };
            SPARK[((level * 7.0).round() as usize).min(7)]
        })
        .collect()
}
