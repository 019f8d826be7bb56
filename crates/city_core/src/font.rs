//! Dot-matrix glyphs for voxel text.
//!
//! Each glyph is 7 rows of 5 columns. Lowercase input is folded to uppercase before
//! lookup; anything outside the table renders as a blank glyph of the same size.

/// Rows per glyph. Row 0 is the top of the letter.
pub const GLYPH_ROWS: usize = 7;
/// Columns per glyph.
pub const GLYPH_COLS: usize = 5;
/// Blank columns inserted after every glyph.
pub const LETTER_SPACING: usize = 1;
/// Height in gz of one glyph row at scale 1.
pub const VOXEL_ROW_HEIGHT: f32 = 10.0;

/// A 7x5 binary matrix. Each byte is one row; bit 4 is the leftmost column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Glyph {
    rows: [u8; GLYPH_ROWS],
}

impl Glyph {
    pub const BLANK: Glyph = Glyph { rows: [0; GLYPH_ROWS] };

    pub fn columns(&self) -> usize {
        GLYPH_COLS
    }

    pub fn is_on(&self, row: usize, col: usize) -> bool {
        row < GLYPH_ROWS && col < GLYPH_COLS && (self.rows[row] >> (GLYPH_COLS - 1 - col)) & 1 != 0
    }

    /// "On" cells as `(row, col)`, rows top to bottom, columns left to right.
    pub fn lit_cells(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        (0..GLYPH_ROWS).flat_map(move |row| {
            (0..GLYPH_COLS).filter_map(move |col| self.is_on(row, col).then_some((row, col)))
        })
    }

    pub fn lit_count(&self) -> usize {
        self.rows
            .iter()
            .map(|r| (r & ((1 << GLYPH_COLS) - 1)).count_ones() as usize)
            .sum()
    }
}

/// Look up the glyph for `ch`, case-folded. Unknown characters map to [`Glyph::BLANK`].
pub fn glyph(ch: char) -> Glyph {
    let code = ch.to_ascii_uppercase() as u32;
    match code {
        32..=95 => Glyph { rows: GLYPHS[(code - 32) as usize] },
        _ => Glyph::BLANK,
    }
}

/// Width of `text` in glyph columns, letter spacing between glyphs included.
pub fn text_columns(text: &str) -> usize {
    let n = text.chars().count();
    if n == 0 {
        return 0;
    }
    n * (GLYPH_COLS + LETTER_SPACING) - LETTER_SPACING
}

/// Height above its anchor that voxel text at `scale` reaches.
///
/// Row `r` sits at `(GLYPH_ROWS - r) * scale * VOXEL_ROW_HEIGHT` and is one row tall,
/// so the top row ends one row above `GLYPH_ROWS` rows.
pub fn voxel_text_height(scale: f32) -> f32 {
    (GLYPH_ROWS + 1) as f32 * scale * VOXEL_ROW_HEIGHT
}

/// ASCII 32 (' ') through 95 ('_'): punctuation, digits and uppercase letters.
#[rustfmt::skip]
const GLYPHS: [[u8; GLYPH_ROWS]; 64] = [
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00], // ' '
    [0x04, 0x04, 0x04, 0x04, 0x04, 0x00, 0x04], // '!'
    [0x0A, 0x0A, 0x00, 0x00, 0x00, 0x00, 0x00], // '"'
    [0x0A, 0x1F, 0x0A, 0x0A, 0x1F, 0x0A, 0x00], // '#'
    [0x04, 0x0F, 0x14, 0x0E, 0x05, 0x1E, 0x04], // '$'
    [0x18, 0x19, 0x02, 0x04, 0x08, 0x13, 0x03], // '%'
    [0x08, 0x14, 0x14, 0x08, 0x15, 0x12, 0x0D], // '&'
    [0x04, 0x04, 0x00, 0x00, 0x00, 0x00, 0x00], // '\''
    [0x02, 0x04, 0x08, 0x08, 0x08, 0x04, 0x02], // '('
    [0x08, 0x04, 0x02, 0x02, 0x02, 0x04, 0x08], // ')'
    [0x04, 0x15, 0x0E, 0x1F, 0x0E, 0x15, 0x04], // '*'
    [0x00, 0x04, 0x04, 0x1F, 0x04, 0x04, 0x00], // '+'
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x04, 0x08], // ','
    [0x00, 0x00, 0x00, 0x1F, 0x00, 0x00, 0x00], // '-'
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x04], // '.'
    [0x01, 0x01, 0x02, 0x04, 0x08, 0x10, 0x10], // '/'
    [0x0E, 0x11, 0x13, 0x15, 0x19, 0x11, 0x0E], // '0'
    [0x04, 0x0C, 0x04, 0x04, 0x04, 0x04, 0x0E], // '1'
    [0x0E, 0x11, 0x01, 0x06, 0x08, 0x10, 0x1F], // '2'
    [0x0E, 0x11, 0x01, 0x06, 0x01, 0x11, 0x0E], // '3'
    [0x02, 0x06, 0x0A, 0x12, 0x1F, 0x02, 0x02], // '4'
    [0x1F, 0x10, 0x1E, 0x01, 0x01, 0x11, 0x0E], // '5'
    [0x06, 0x08, 0x10, 0x1E, 0x11, 0x11, 0x0E], // '6'
    [0x1F, 0x01, 0x02, 0x04, 0x08, 0x08, 0x08], // '7'
    [0x0E, 0x11, 0x11, 0x0E, 0x11, 0x11, 0x0E], // '8'
    [0x0E, 0x11, 0x11, 0x0F, 0x01, 0x02, 0x0C], // '9'
    [0x00, 0x00, 0x04, 0x00, 0x00, 0x04, 0x00], // ':'
    [0x00, 0x00, 0x04, 0x00, 0x00, 0x04, 0x08], // ';'
    [0x02, 0x04, 0x08, 0x10, 0x08, 0x04, 0x02], // '<'
    [0x00, 0x00, 0x1F, 0x00, 0x1F, 0x00, 0x00], // '='
    [0x08, 0x04, 0x02, 0x01, 0x02, 0x04, 0x08], // '>'
    [0x0E, 0x11, 0x01, 0x02, 0x04, 0x00, 0x04], // '?'
    [0x0E, 0x11, 0x17, 0x15, 0x17, 0x10, 0x0E], // '@'
    [0x0E, 0x11, 0x11, 0x1F, 0x11, 0x11, 0x11], // 'A'
    [0x1E, 0x11, 0x11, 0x1E, 0x11, 0x11, 0x1E], // 'B'
    [0x0E, 0x11, 0x10, 0x10, 0x10, 0x11, 0x0E], // 'C'
    [0x1E, 0x11, 0x11, 0x11, 0x11, 0x11, 0x1E], // 'D'
    [0x1F, 0x10, 0x10, 0x1E, 0x10, 0x10, 0x1F], // 'E'
    [0x1F, 0x10, 0x10, 0x1E, 0x10, 0x10, 0x10], // 'F'
    [0x0E, 0x11, 0x10, 0x17, 0x11, 0x11, 0x0F], // 'G'
    [0x11, 0x11, 0x11, 0x1F, 0x11, 0x11, 0x11], // 'H'
    [0x0E, 0x04, 0x04, 0x04, 0x04, 0x04, 0x0E], // 'I'
    [0x07, 0x02, 0x02, 0x02, 0x02, 0x12, 0x0C], // 'J'
    [0x11, 0x12, 0x14, 0x18, 0x14, 0x12, 0x11], // 'K'
    [0x10, 0x10, 0x10, 0x10, 0x10, 0x10, 0x1F], // 'L'
    [0x11, 0x1B, 0x15, 0x15, 0x11, 0x11, 0x11], // 'M'
    [0x11, 0x19, 0x15, 0x13, 0x11, 0x11, 0x11], // 'N'
    [0x0E, 0x11, 0x11, 0x11, 0x11, 0x11, 0x0E], // 'O'
    [0x1E, 0x11, 0x11, 0x1E, 0x10, 0x10, 0x10], // 'P'
    [0x0E, 0x11, 0x11, 0x11, 0x15, 0x12, 0x0D], // 'Q'
    [0x1E, 0x11, 0x11, 0x1E, 0x14, 0x12, 0x11], // 'R'
    [0x0E, 0x11, 0x10, 0x0E, 0x01, 0x11, 0x0E], // 'S'
    [0x1F, 0x04, 0x04, 0x04, 0x04, 0x04, 0x04], // 'T'
    [0x11, 0x11, 0x11, 0x11, 0x11, 0x11, 0x0E], // 'U'
    [0x11, 0x11, 0x11, 0x11, 0x0A, 0x0A, 0x04], // 'V'
    [0x11, 0x11, 0x11, 0x15, 0x15, 0x1B, 0x11], // 'W'
    [0x11, 0x11, 0x0A, 0x04, 0x0A, 0x11, 0x11], // 'X'
    [0x11, 0x11, 0x0A, 0x04, 0x04, 0x04, 0x04], // 'Y'
    [0x1F, 0x01, 0x02, 0x04, 0x08, 0x10, 0x1F], // 'Z'
    [0x0E, 0x08, 0x08, 0x08, 0x08, 0x08, 0x0E], // '['
    [0x10, 0x10, 0x08, 0x04, 0x02, 0x01, 0x01], // '\\'
    [0x0E, 0x02, 0x02, 0x02, 0x02, 0x02, 0x0E], // ']'
    [0x04, 0x0A, 0x11, 0x00, 0x00, 0x00, 0x00], // '^'
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x1F], // '_'
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn glyph_zero_has_nineteen_cells() {
        let g = glyph('0');
        assert_eq!(g.lit_count(), 19);
        assert_eq!(g.lit_cells().count(), 19);
    }

    #[test]
    fn glyph_lookup_is_case_folded() {
        assert_eq!(glyph('m'), glyph('M'));
        assert_ne!(glyph('M'), Glyph::BLANK);
    }

    #[test]
    fn glyph_unknown_and_space_are_blank() {
        assert_eq!(glyph(' '), Glyph::BLANK);
        assert_eq!(glyph('é'), Glyph::BLANK);
        assert_eq!(glyph('~'), Glyph::BLANK);
        assert_eq!(Glyph::BLANK.lit_count(), 0);
    }

    #[test]
    fn glyph_top_row_of_t_is_full() {
        let t = glyph('T');
        assert!((0..GLYPH_COLS).all(|c| t.is_on(0, c)));
        assert!(t.is_on(6, 2));
        assert!(!t.is_on(6, 0));
    }

    #[test]
    fn text_columns_counts_spacing() {
        assert_eq!(text_columns(""), 0);
        assert_eq!(text_columns("1"), 5);
        assert_eq!(text_columns("SUN"), 17);
    }

    #[test]
    fn voxel_text_height_covers_all_rows() {
        assert_eq!(voxel_text_height(1.0), 80.0);
        assert_eq!(voxel_text_height(0.0), 0.0);
    }
}
