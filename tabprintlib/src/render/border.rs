//! Box-drawing glyphs and horizontal border lines.

/// Box-drawing characters for a bordered table.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BorderChars {
    pub horizontal: char,
    pub vertical: char,
    pub top_left: char,
    pub top_right: char,
    pub bottom_left: char,
    pub bottom_right: char,
    pub left_t: char,
    pub cross: char,
    pub right_t: char,
    pub top_t: char,
    pub bottom_t: char,
}

impl BorderChars {
    /// Double-line Unicode box-drawing: ╔, ═, ╗, ║, ╚, ╝, ╠, ╬, ╣, ╦, ╩
    pub const DOUBLE: BorderChars = BorderChars {
        horizontal: '═',
        vertical: '║',
        top_left: '╔',
        top_right: '╗',
        bottom_left: '╚',
        bottom_right: '╝',
        left_t: '╠',
        cross: '╬',
        right_t: '╣',
        top_t: '╦',
        bottom_t: '╩',
    };

    /// Left edge, column joint and right edge for a line type.
    fn line_glyphs(&self, line_type: LineType) -> (char, char, char) {
        match line_type {
            LineType::Top => (self.top_left, self.top_t, self.top_right),
            LineType::Middle => (self.left_t, self.cross, self.right_t),
            LineType::Bottom => (self.bottom_left, self.bottom_t, self.bottom_right),
        }
    }

    /// Build a full horizontal line, newline included.
    ///
    /// Each of the `columns` segments is `cell_width` horizontal glyphs; a
    /// joint glyph sits between neighbouring segments.
    pub fn horizontal_line(
        &self,
        line_type: LineType,
        columns: usize,
        cell_width: usize,
    ) -> String {
        let (left, joint, right) = self.line_glyphs(line_type);
        let segment: String = std::iter::repeat_n(self.horizontal, cell_width).collect();

        let mut line = String::new();
        line.push(left);
        for i in 0..columns {
            if i > 0 {
                line.push(joint);
            }
            line.push_str(&segment);
        }
        line.push(right);
        line.push('\n');
        line
    }

    /// A closed box of `inner_width` horizontal glyphs, used for notices.
    pub fn plain_line(&self, line_type: LineType, inner_width: usize) -> String {
        self.horizontal_line(line_type, 1, inner_width)
    }
}

impl Default for BorderChars {
    fn default() -> Self {
        BorderChars::DOUBLE
    }
}

/// Type of horizontal line.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LineType {
    /// `╔ … ╦ … ╗`
    Top,
    /// `╠ … ╬ … ╣`
    Middle,
    /// `╚ … ╩ … ╝`
    Bottom,
}
