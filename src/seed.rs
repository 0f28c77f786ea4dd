use crate::{Grid, Pos2};
use rand::Rng;

/// How the first generation of a [`Grid`] is populated
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Seeding {
    /// Each cell is alive with probability `1 / (radius² + 1)`
    Random,
    /// Every cell starts dead
    Empty,
    /// The given cells are alive, centred on the grid
    Pattern(Vec<Pos2>),
}

impl Seeding {
    /// Parses a fill mode name, either `random` or `empty`
    pub fn from_name<S: AsRef<str>>(s: S) -> Option<Self> {
        match s.as_ref() {
            "random" => Some(Self::Random),
            "empty" => Some(Self::Empty),
            _ => None,
        }
    }

    /// Writes the initial population into `grid`
    ///
    /// `rng` is only drawn from by [`Seeding::Random`], once per cell in row-major order
    pub fn populate<R: Rng>(&self, grid: &mut Grid, rng: &mut R) {
        let (w, h) = grid.dimensions();
        match self {
            Self::Random => {
                let denominator = random_denominator(grid.radius());
                for y in 0..h {
                    for x in 0..w {
                        let alive = rng.random_ratio(1, denominator);
                        grid.set_cell(x as i64, y as i64, alive);
                    }
                }
            }
            Self::Empty => {}
            Self::Pattern(cells) => {
                let Some((tl, br)) = Pos2::bounds(cells) else {
                    return;
                };
                let size = br - tl + Pos2 { x: 1, y: 1 };
                let origin_x = (w as i64 - size.x as i64) / 2 - tl.x as i64;
                let origin_y = (h as i64 - size.y as i64) / 2 - tl.y as i64;
                for cell in cells {
                    grid.set_cell(origin_x + cell.x as i64, origin_y + cell.y as i64, true);
                }
            }
        }
    }
}

/// `radius² + 1`, saturating at `u32::MAX` for huge radii
fn random_denominator(radius: usize) -> u32 {
    let r = u32::try_from(radius).unwrap_or(u32::MAX);
    r.saturating_mul(r).saturating_add(1)
}
