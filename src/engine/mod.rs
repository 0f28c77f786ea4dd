mod buffer;
mod rule;

use self::buffer::Buffer;

/// A toroidal Game of Life grid
///
/// Every coordinate wraps around both edges, so any `(x, y)` pair addresses
/// a valid cell. A cell's next state is decided by the alive cells in the
/// `(2 * radius + 1)²` square centred on it, the cell itself included.
#[derive(Debug, Clone)]
pub struct Grid {
    width: usize,
    height: usize,
    radius: usize,
    current: Buffer,
    previous: Buffer,
}

impl Grid {
    /// Creates an all-dead grid
    ///
    /// `width`, `height` and `radius` must all be at least 1. This is the
    /// caller's responsibility and is only checked in debug builds.
    pub fn new(width: usize, height: usize, radius: usize) -> Self {
        debug_assert!(width >= 1 && height >= 1, "empty grid");
        debug_assert!(radius >= 1, "radius must be at least 1");
        Self {
            width,
            height,
            radius,
            current: Buffer::new(width, height),
            previous: Buffer::new(width, height),
        }
    }

    #[inline]
    pub fn dimensions(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    #[inline]
    pub fn radius(&self) -> usize {
        self.radius
    }

    pub fn set_cell(&mut self, x: i64, y: i64, alive: bool) {
        let (x, y) = self.wrap(x, y);
        self.current.set(x, y, alive);
    }

    pub fn get_cell(&self, x: i64, y: i64) -> bool {
        let (x, y) = self.wrap(x, y);
        self.current.get(x, y)
    }

    /// Advances the grid by one generation
    pub fn next_generation(&mut self) {
        // the old generation is only ever read from `previous` from here on
        std::mem::swap(&mut self.current, &mut self.previous);
        self.current.clear();

        for y in 0..self.height {
            for x in 0..self.width {
                let neighbors = self.count_neighbors(x, y);
                let alive = self.previous.get(x, y);
                if rule::next_state(alive, neighbors) {
                    self.current.set(x, y, true);
                }
            }
        }
    }

    #[inline]
    pub fn alive_count(&self) -> usize {
        self.current.alive_count()
    }

    /// The rows of the current generation, top to bottom
    pub fn rows(&self) -> impl Iterator<Item = &[bool]> {
        self.current.rows()
    }

    /// Counts the alive cells of the previous generation in the window around `(x, y)`
    ///
    /// When the window is wider than the grid, cells reached by more than
    /// one offset are counted once per offset.
    fn count_neighbors(&self, x: usize, y: usize) -> usize {
        let r = self.radius as i64;
        let mut count = 0;
        for dy in -r..=r {
            for dx in -r..=r {
                let (nx, ny) = self.wrap(x as i64 + dx, y as i64 + dy);
                if self.previous.get(nx, ny) {
                    count += 1;
                }
            }
        }
        count
    }

    #[inline]
    fn wrap(&self, x: i64, y: i64) -> (usize, usize) {
        (
            x.rem_euclid(self.width as i64) as usize,
            y.rem_euclid(self.height as i64) as usize,
        )
    }
}
