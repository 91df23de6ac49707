//! Framebuffer and style types for terminal rendering.

/// Upper half block: fg paints the top half, bg the bottom half.
pub const HALF_BLOCK: char = '▀';

/// 24-bit RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const BLACK: Rgb = Rgb::new(0, 0, 0);
    pub const WHITE: Rgb = Rgb::new(255, 255, 255);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// Minimal per-cell styling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CellStyle {
    pub fg: Rgb,
    pub bg: Rgb,
    pub bold: bool,
    pub dim: bool,
}

impl CellStyle {
    pub const fn colors(fg: Rgb, bg: Rgb) -> Self {
        Self {
            fg,
            bg,
            bold: false,
            dim: false,
        }
    }

    pub fn bold(mut self) -> Self {
        self.bold = true;
        self
    }

    pub fn dim(mut self) -> Self {
        self.dim = true;
        self
    }

    pub const fn into_cell(self, ch: char) -> Cell {
        Cell { ch, style: self }
    }
}

impl Default for CellStyle {
    fn default() -> Self {
        Self::colors(Rgb::new(220, 220, 220), Rgb::BLACK)
    }
}

/// A single terminal cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Cell {
    pub ch: char,
    pub style: CellStyle,
}

impl Default for Cell {
    fn default() -> Self {
        Self {
            ch: ' ',
            style: CellStyle::default(),
        }
    }
}

/// 2D framebuffer of styled character cells.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameBuffer {
    width: u16,
    height: u16,
    cells: Vec<Cell>,
}

impl FrameBuffer {
    pub fn new(width: u16, height: u16) -> Self {
        let len = (width as usize) * (height as usize);
        Self {
            width,
            height,
            cells: vec![Cell::default(); len],
        }
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    /// Resize the framebuffer.
    ///
    /// This preserves the underlying allocation when possible.
    pub fn resize(&mut self, width: u16, height: u16) {
        if self.width == width && self.height == height {
            return;
        }
        self.width = width;
        self.height = height;
        let len = (width as usize) * (height as usize);
        self.cells.resize(len, Cell::default());
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    #[inline(always)]
    fn idx(&self, x: u16, y: u16) -> Option<usize> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some((y as usize) * (self.width as usize) + (x as usize))
    }

    pub fn get(&self, x: u16, y: u16) -> Option<Cell> {
        self.idx(x, y).map(|i| self.cells[i])
    }

    pub fn set(&mut self, x: u16, y: u16, cell: Cell) {
        if let Some(i) = self.idx(x, y) {
            self.cells[i] = cell;
        }
    }

    pub fn clear(&mut self, cell: Cell) {
        self.cells.fill(cell);
    }

    pub fn put_char(&mut self, x: u16, y: u16, ch: char, style: CellStyle) {
        self.set(x, y, Cell { ch, style });
    }

    /// Write `s` from (x, y), clipped at the right edge. Returns the column after the text.
    pub fn put_str(&mut self, x: u16, y: u16, s: &str, style: CellStyle) -> u16 {
        let mut cx = x;
        for ch in s.chars() {
            if cx >= self.width {
                break;
            }
            self.put_char(cx, y, ch, style);
            cx += 1;
        }
        cx
    }

    /// Write a decimal number without allocating. Returns the column after the digits.
    pub fn put_u64(&mut self, x: u16, y: u16, mut v: u64, style: CellStyle) -> u16 {
        let mut digits = [0u8; 20];
        let mut n = 0;
        loop {
            digits[n] = b'0' + (v % 10) as u8;
            n += 1;
            v /= 10;
            if v == 0 {
                break;
            }
        }
        let mut cx = x;
        for &d in digits[..n].iter().rev() {
            self.put_char(cx, y, d as char, style);
            cx = cx.saturating_add(1);
        }
        cx
    }

    /// Signed variant of [`FrameBuffer::put_u64`].
    pub fn put_i64(&mut self, x: u16, y: u16, v: i64, style: CellStyle) -> u16 {
        if v < 0 {
            self.put_char(x, y, '-', style);
            self.put_u64(x.saturating_add(1), y, v.unsigned_abs(), style)
        } else {
            self.put_u64(x, y, v as u64, style)
        }
    }

    pub fn fill_rect(&mut self, x: u16, y: u16, w: u16, h: u16, ch: char, style: CellStyle) {
        for dy in 0..h {
            for dx in 0..w {
                self.put_char(x.saturating_add(dx), y.saturating_add(dy), ch, style);
            }
        }
    }

    /// Paint two vertically stacked pixels into one terminal cell.
    pub fn put_half_block(&mut self, x: u16, y: u16, top: Rgb, bottom: Rgb) {
        self.put_char(x, y, HALF_BLOCK, CellStyle::colors(top, bottom));
    }

    /// Row `y` as text (styles dropped). Handy for assertions.
    pub fn row_text(&self, y: u16) -> String {
        (0..self.width)
            .filter_map(|x| self.get(x, y))
            .map(|c| c.ch)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn put_str_clips_and_reports_end() {
        let mut fb = FrameBuffer::new(5, 1);
        let end = fb.put_str(2, 0, "abcdef", CellStyle::default());
        assert_eq!(end, 5);
        assert_eq!(fb.row_text(0), "  abc");
    }

    #[test]
    fn put_numbers() {
        let mut fb = FrameBuffer::new(12, 2);
        let end = fb.put_u64(0, 0, 10250, CellStyle::default());
        assert_eq!(end, 5);
        fb.put_i64(0, 1, -42, CellStyle::default());
        fb.put_u64(6, 0, 0, CellStyle::default());
        assert_eq!(fb.row_text(0).trim_end(), "10250 0");
        assert_eq!(fb.row_text(1).trim_end(), "-42");
    }

    #[test]
    fn half_block_carries_both_colors() {
        let mut fb = FrameBuffer::new(1, 1);
        fb.put_half_block(0, 0, Rgb::new(0, 0, 10), Rgb::new(0, 0, 20));
        let cell = fb.get(0, 0).unwrap();
        assert_eq!(cell.ch, HALF_BLOCK);
        assert_eq!(cell.style.fg, Rgb::new(0, 0, 10));
        assert_eq!(cell.style.bg, Rgb::new(0, 0, 20));
    }

    #[test]
    fn resize_keeps_cells_addressable() {
        let mut fb = FrameBuffer::new(2, 2);
        fb.resize(4, 3);
        assert_eq!(fb.cells().len(), 12);
        assert!(fb.get(3, 2).is_some());
        assert!(fb.get(4, 0).is_none());
    }
}
