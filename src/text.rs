//! Approximate text metrics. Region labels sit at fixed template anchors
//! and never need measuring; the legend box is the one element that must
//! grow to fit its contents, and coarse per-character width classes are
//! accurate enough for that.

/// Estimated pixel width of a single line at the given font size.
pub(crate) fn text_width(text: &str, font_size: f32) -> f32 {
    text.chars().map(char_width_factor).sum::<f32>() * font_size
}

// Width classes as a fraction of the font size, eyeballed against common
// sans-serif faces. Anything unlisted gets the average lowercase width.
fn char_width_factor(ch: char) -> f32 {
    match ch {
        'i' | 'j' | 'l' | '!' | '.' | ',' | ':' | ';' | '\'' | '|' => 0.28,
        'f' | 't' | 'r' | 'I' | 'J' | '-' | ' ' | '(' | ')' | '[' | ']' => 0.34,
        'm' | 'w' | 'M' | 'W' | '%' | '@' | '&' => 0.92,
        'A'..='Z' | '0'..='9' => 0.66,
        _ => 0.54,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn width_scales_linearly_with_font_size() {
        let narrow = text_width("Species A", 14.0);
        let wide = text_width("Species A", 28.0);
        assert!((wide - narrow * 2.0).abs() < 1e-3);
    }

    #[test]
    fn wide_glyphs_measure_wider_than_narrow_ones() {
        assert!(text_width("wwww", 14.0) > text_width("iiii", 14.0));
    }

    #[test]
    fn empty_text_has_zero_width() {
        assert_eq!(text_width("", 14.0), 0.0);
    }

    #[test]
    fn longer_names_measure_wider() {
        assert!(text_width("Invertebrates", 14.0) > text_width("Fish", 14.0));
    }
}
