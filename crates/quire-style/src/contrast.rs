//! Relative luminance, contrast ratio and contrast enforcement.
//!
//! Uses the standard two-color contrast formula:
//!
//! 1. Linearize each sRGB channel.
//! 2. `L = 0.2126 R + 0.7152 G + 0.0722 B`
//! 3. `ratio = (L_lighter + 0.05) / (L_darker + 0.05)`
//!
//! The ratio is symmetric and ranges from 1.0 (identical) to 21.0
//! (black on white).
//!
//! # Enforcement
//!
//! [`ensure_contrast`] nudges a foreground toward black or white (whichever
//! pole contrasts more with the background) in [`ENSURE_CONTRAST_STEPS`]
//! equal mix steps. The last step is the pole itself, so any target up to
//! roughly 4.58:1 is always reachable.
//!
//! ```rust
//! use quire_style::color::Rgb;
//! use quire_style::contrast::{contrast_ratio, ensure_contrast};
//!
//! let bg = Rgb(26, 26, 26);
//! let fg = ensure_contrast(Rgb(60, 60, 60), bg, 4.5);
//! assert!(contrast_ratio(fg, bg) >= 4.5);
//! ```

use crate::color::Rgb;

/// Number of mix steps [`ensure_contrast`] takes before giving up.
pub const ENSURE_CONTRAST_STEPS: u32 = 12;

/// Default minimum ratio for contrast-enforced pairs.
pub const DEFAULT_MIN_RATIO: f64 = 4.5;

/// Convert an sRGB component (0–255) to linear light (0.0–1.0).
fn srgb_to_linear(c: u8) -> f64 {
    let c = c as f64 / 255.0;
    if c <= 0.04045 {
        c / 12.92
    } else {
        ((c + 0.055) / 1.055).powf(2.4)
    }
}

/// Relative luminance in `[0.0, 1.0]`.
pub fn relative_luminance(color: Rgb) -> f64 {
    0.2126 * srgb_to_linear(color.0)
        + 0.7152 * srgb_to_linear(color.1)
        + 0.0722 * srgb_to_linear(color.2)
}

/// Contrast ratio between two colors, independent of argument order.
pub fn contrast_ratio(a: Rgb, b: Rgb) -> f64 {
    let la = relative_luminance(a);
    let lb = relative_luminance(b);
    let (lighter, darker) = if la >= lb { (la, lb) } else { (lb, la) };
    (lighter + 0.05) / (darker + 0.05)
}

/// Blends `a` toward `b` by `t` (0.0 = `a`, 1.0 = `b`) per sRGB channel.
pub fn mix(a: Rgb, b: Rgb, t: f64) -> Rgb {
    let t = t.clamp(0.0, 1.0);
    let channel = |x: u8, y: u8| {
        let v = x as f64 + (y as f64 - x as f64) * t;
        v.round().clamp(0.0, 255.0) as u8
    };
    Rgb(channel(a.0, b.0), channel(a.1, b.1), channel(a.2, b.2))
}

/// Flattens `over` drawn at `alpha` opacity onto an opaque `under`.
pub fn composite(over: Rgb, under: Rgb, alpha: f64) -> Rgb {
    mix(under, over, alpha)
}

/// Black or white, whichever contrasts more against `bg`.
pub fn best_pole(bg: Rgb) -> Rgb {
    if contrast_ratio(Rgb::BLACK, bg) >= contrast_ratio(Rgb::WHITE, bg) {
        Rgb::BLACK
    } else {
        Rgb::WHITE
    }
}

/// Returns `true` when `color` reads as a dark background.
pub fn is_dark(color: Rgb, threshold: f64) -> bool {
    relative_luminance(color) < threshold
}

/// Pushes `fg` toward the better pole until it reaches `target` against `bg`.
///
/// Returns `fg` unchanged when it already meets the target, the first mix
/// step that meets it otherwise, or the best candidate seen after exactly
/// [`ENSURE_CONTRAST_STEPS`] steps when the target is out of reach.
pub fn ensure_contrast(fg: Rgb, bg: Rgb, target: f64) -> Rgb {
    let start = contrast_ratio(fg, bg);
    if start >= target {
        return fg;
    }

    let pole = best_pole(bg);
    let mut best = fg;
    let mut best_ratio = start;

    for step in 1..=ENSURE_CONTRAST_STEPS {
        let candidate = mix(fg, pole, step as f64 / ENSURE_CONTRAST_STEPS as f64);
        let ratio = contrast_ratio(candidate, bg);
        if ratio >= target {
            return candidate;
        }
        if ratio > best_ratio {
            best = candidate;
            best_ratio = ratio;
        }
    }

    tracing::trace!(fg = %fg, bg = %bg, target, achieved = best_ratio, "contrast target unreachable");
    best
}

/// [`contrast_ratio`] over hex strings; `None` if either side is not analyzable.
pub fn contrast_ratio_hex(a: &str, b: &str) -> Option<f64> {
    let a = Rgb::parse_hex(a).ok()?;
    let b = Rgb::parse_hex(b).ok()?;
    Some(contrast_ratio(a, b))
}

/// [`ensure_contrast`] over hex strings; `None` if either side is not analyzable.
pub fn ensure_contrast_hex(fg: &str, bg: &str, target: f64) -> Option<String> {
    let fg = Rgb::parse_hex(fg).ok()?;
    let bg = Rgb::parse_hex(bg).ok()?;
    Some(ensure_contrast(fg, bg, target).to_hex())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn luminance_extremes() {
        assert!(relative_luminance(Rgb::BLACK).abs() < 1e-9);
        assert!((relative_luminance(Rgb::WHITE) - 1.0).abs() < 1e-9);
    }

    #[test]
    fn black_on_white_is_21() {
        let ratio = contrast_ratio(Rgb::BLACK, Rgb::WHITE);
        assert!((ratio - 21.0).abs() < 1e-9);
    }

    #[test]
    fn identical_colors_are_1() {
        let c = Rgb(120, 33, 200);
        assert!((contrast_ratio(c, c) - 1.0).abs() < 1e-12);
    }

    #[test]
    fn known_pair_ratio() {
        // #777 on white sits just under the 4.5 line.
        let ratio = contrast_ratio(Rgb(0x77, 0x77, 0x77), Rgb::WHITE);
        assert!(ratio > 4.4 && ratio < 4.5, "got {}", ratio);
    }

    #[test]
    fn mix_endpoints_and_midpoint() {
        let a = Rgb(0, 100, 200);
        let b = Rgb(200, 100, 0);
        assert_eq!(mix(a, b, 0.0), a);
        assert_eq!(mix(a, b, 1.0), b);
        assert_eq!(mix(a, b, 0.5), Rgb(100, 100, 100));
        assert_eq!(mix(a, b, 7.0), b);
    }

    #[test]
    fn best_pole_picks_the_stronger_side() {
        assert_eq!(best_pole(Rgb::WHITE), Rgb::BLACK);
        assert_eq!(best_pole(Rgb(26, 26, 26)), Rgb::WHITE);
    }

    #[test]
    fn ensure_contrast_keeps_readable_color() {
        let fg = Rgb(30, 58, 138);
        assert_eq!(ensure_contrast(fg, Rgb::WHITE, 4.5), fg);
    }

    #[test]
    fn ensure_contrast_lightens_on_dark_background() {
        let bg = Rgb(0x1a, 0x1a, 0x1a);
        let fg = ensure_contrast(Rgb(0x33, 0x33, 0x33), bg, 4.5);
        assert!(contrast_ratio(fg, bg) >= 4.5);
        assert!(relative_luminance(fg) > relative_luminance(Rgb(0x33, 0x33, 0x33)));
    }

    #[test]
    fn ensure_contrast_darkens_on_light_background() {
        let bg = Rgb(0xfa, 0xf7, 0xf0);
        let fg = ensure_contrast(Rgb(0xdd, 0xdd, 0xdd), bg, 4.5);
        assert!(contrast_ratio(fg, bg) >= 4.5);
    }

    #[test]
    fn ensure_contrast_returns_best_when_unreachable() {
        // Nothing reaches 21:1 against mid gray; the pole itself is the best.
        let bg = Rgb(0x80, 0x80, 0x80);
        let fg = ensure_contrast(Rgb(0x90, 0x90, 0x90), bg, 21.0);
        assert_eq!(fg, best_pole(bg));
    }

    #[test]
    fn hex_helpers_reject_non_analyzable() {
        assert!(contrast_ratio_hex("transparent", "#fff").is_none());
        assert!(ensure_contrast_hex("#fff", "gradient", 4.5).is_none());
        let ratio = contrast_ratio_hex("#000", "#ffffff").unwrap();
        assert!((ratio - 21.0).abs() < 1e-9);
        assert_eq!(ensure_contrast_hex("#000", "#fff", 4.5).as_deref(), Some("#000000"));
    }
}
