//! Grid module - one buffer of cell health values
//!
//! Uses a flat vector for cache locality.
//! Coordinates: (x, y) with x in 0..width and y in 0..height, row-major storage
//! (y * width + x). Coordinates are signed so neighbour probes may step past the
//! edges; those simply resolve to `None`.

/// A width x height buffer of signed health values.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct HealthGrid {
    width: usize,
    height: usize,
    /// Flat array of cells, row-major order (y * width + x)
    cells: Vec<i32>,
}

impl HealthGrid {
    /// Create a grid with every cell at 0
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            cells: vec![0; width * height],
        }
    }

    /// Calculate flat index from (x, y) coordinates
    #[inline(always)]
    pub fn index(&self, x: i32, y: i32) -> Option<usize> {
        if x < 0 || y < 0 || x as usize >= self.width || y as usize >= self.height {
            return None;
        }
        Some((y as usize) * self.width + (x as usize))
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Number of cells
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Get cell at (x, y), `None` if out of bounds
    pub fn get(&self, x: i32, y: i32) -> Option<i32> {
        self.index(x, y).map(|i| self.cells[i])
    }

    /// Set cell at (x, y). Returns false if out of bounds.
    pub fn set(&mut self, x: i32, y: i32, value: i32) -> bool {
        match self.index(x, y) {
            Some(i) => {
                self.cells[i] = value;
                true
            }
            None => false,
        }
    }

    /// Overwrite every cell
    pub fn fill(&mut self, value: i32) {
        self.cells.fill(value);
    }

    /// Change dimensions and zero all cells, reusing the allocation when possible
    pub fn reset(&mut self, width: usize, height: usize) {
        self.width = width;
        self.height = height;
        self.cells.clear();
        self.cells.resize(width * height, 0);
    }

    pub fn cells(&self) -> &[i32] {
        &self.cells
    }

    pub fn cells_mut(&mut self) -> &mut [i32] {
        &mut self.cells
    }

    /// Row `y` as a slice
    pub fn row(&self, y: usize) -> Option<&[i32]> {
        if y >= self.height {
            return None;
        }
        let start = y * self.width;
        Some(&self.cells[start..start + self.width])
    }
}
