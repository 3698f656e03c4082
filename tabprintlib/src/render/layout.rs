//! Cell measurement and centering.

/// Uniform cell width for a table whose longest text is `max_content_width`.
///
/// Always even and at least two wider than the content, so every cell has
/// at least one space of padding on each side.
pub fn cell_width(max_content_width: usize) -> usize {
    if max_content_width % 2 == 0 {
        max_content_width + 2
    } else {
        max_content_width + 3
    }
}

/// Left and right padding that centers `len` characters in `width`.
///
/// Left padding rounds down: odd-length content gets its extra space on the
/// right.
pub fn padding(len: usize, width: usize) -> (usize, usize) {
    let spare = width.saturating_sub(len);
    let left = spare / 2;
    let right = if len % 2 == 0 { spare / 2 } else { spare / 2 + 1 };
    (left, right)
}

/// Append `text` centered in a cell of `width` characters.
pub fn push_centered(out: &mut String, text: &str, width: usize) {
    let (left, right) = padding(text.chars().count(), width);
    out.extend(std::iter::repeat_n(' ', left));
    out.push_str(text);
    out.extend(std::iter::repeat_n(' ', right));
}

#[cfg(test)]
mod tests {
    use super::*;

    fn centered(text: &str, width: usize) -> String {
        let mut out = String::new();
        push_centered(&mut out, text, width);
        out
    }

    #[test]
    fn test_cell_width_even_and_odd() {
        assert_eq!(cell_width(2), 4);
        assert_eq!(cell_width(1), 4);
        assert_eq!(cell_width(10), 12);
        assert_eq!(cell_width(13), 16);
        assert_eq!(cell_width(0), 2);
    }

    #[test]
    fn test_padding_even_content() {
        assert_eq!(padding(2, 16), (7, 7));
        assert_eq!(padding(10, 12), (1, 1));
    }

    #[test]
    fn test_padding_odd_content_biased_right() {
        assert_eq!(padding(1, 4), (1, 2));
        assert_eq!(padding(13, 16), (1, 2));
        assert_eq!(padding(1, 16), (7, 8));
    }

    #[test]
    fn test_centered_width_matches() {
        for text in ["", "i", "id", "name", "Steven Seagal", "1234567890"] {
            assert_eq!(centered(text, 16).chars().count(), 16, "text {:?}", text);
        }
    }

    #[test]
    fn test_centered_text() {
        assert_eq!(centered("i", 12), "     i      ");
        assert_eq!(centered("Eva Song", 16), "    Eva Song    ");
        assert_eq!(centered("héé", 6), " héé  ");
    }
}
