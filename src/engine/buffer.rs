/// A single generation of cells, stored row-major
#[derive(Debug, Clone, PartialEq, Eq)]
pub(super) struct Buffer {
    width: usize,
    cells: Vec<bool>,
}

impl Buffer {
    /// Creates an all-dead buffer of `width * height` cells
    pub(super) fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            cells: vec![false; width * height],
        }
    }

    /// Kills every cell, keeping the allocation
    #[inline]
    pub(super) fn clear(&mut self) {
        self.cells.fill(false);
    }

    /// `x` and `y` must already be in range
    #[inline]
    pub(super) fn get(&self, x: usize, y: usize) -> bool {
        self.cells[y * self.width + x]
    }

    #[inline]
    pub(super) fn set(&mut self, x: usize, y: usize, alive: bool) {
        self.cells[y * self.width + x] = alive;
    }

    #[inline]
    pub(super) fn alive_count(&self) -> usize {
        self.cells.iter().filter(|&&alive| alive).count()
    }

    #[inline]
    pub(super) fn rows(&self) -> std::slice::Chunks<'_, bool> {
        self.cells.chunks(self.width)
    }
}
