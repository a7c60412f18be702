//! Text measurement for layout.
//!
//! There is no font rasterizer in the layout path, so glyph advances come from
//! a per-character table tuned for bold system sans-serif faces. Wide (CJK,
//! fullwidth) characters take a full em. Vertical extents use fixed ascender
//! and descender ratios.

/// Ascender distance above the baseline, as a fraction of the font size.
const ASCENDER_RATIO: f64 = 0.86;
/// Descender distance below the baseline, as a fraction of the font size.
const DESCENDER_RATIO: f64 = 0.22;

/// Ink box of a single line of text anchored at its baseline center.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TextBox {
    pub width: f64,
    pub ascent: f64,
    pub descent: f64,
}

impl TextBox {
    pub fn height(&self) -> f64 {
        self.ascent + self.descent
    }
}

/// Measure `text` drawn at `size_px`.
pub fn measure(text: &str, size_px: f64) -> TextBox {
    let ems: f64 = text.chars().map(advance_em).sum();
    TextBox {
        width: ems * size_px,
        ascent: size_px * ASCENDER_RATIO,
        descent: size_px * DESCENDER_RATIO,
    }
}

fn advance_em(ch: char) -> f64 {
    match ch {
        ' ' => 0.28,
        'i' | 'l' | 'j' | '.' | ',' | ':' | ';' | '\'' | '|' | '!' | '`' => 0.3,
        'f' | 't' | 'r' | '(' | ')' | '[' | ']' | '-' | '/' => 0.4,
        'm' | 'w' => 0.9,
        'M' | 'W' => 0.95,
        'A'..='Z' => 0.72,
        '0'..='9' => 0.6,
        'a'..='z' => 0.6,
        c if is_wide(c) => 1.0,
        c if c.is_ascii() => 0.6,
        _ => 0.7,
    }
}

/// East Asian wide and fullwidth ranges.
fn is_wide(ch: char) -> bool {
    matches!(ch as u32,
        0x1100..=0x115F
        | 0x2E80..=0x303E
        | 0x3041..=0x33FF
        | 0x3400..=0x4DBF
        | 0x4E00..=0x9FFF
        | 0xA000..=0xA4CF
        | 0xAC00..=0xD7A3
        | 0xF900..=0xFAFF
        | 0xFE30..=0xFE4F
        | 0xFF00..=0xFF60
        | 0xFFE0..=0xFFE6
        | 0x20000..=0x2FFFD
        | 0x30000..=0x3FFFD)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn width_scales_with_size() {
        let small = measure("Rust", 12.0);
        let large = measure("Rust", 48.0);
        assert!((large.width - small.width * 4.0).abs() < 1e-9);
        assert!(large.height() > small.height());
    }

    #[test]
    fn wide_glyphs_take_a_full_em() {
        let jp = measure("機械学習", 20.0);
        assert_eq!(jp.width, 80.0);
        let kana = measure("パイソン", 10.0);
        assert_eq!(kana.width, 40.0);
    }

    #[test]
    fn narrow_glyphs_are_narrower() {
        assert!(measure("iiii", 20.0).width < measure("MMMM", 20.0).width);
    }

    #[test]
    fn empty_text_has_no_width() {
        let m = measure("", 30.0);
        assert_eq!(m.width, 0.0);
        assert!(m.ascent > 0.0);
    }
}
