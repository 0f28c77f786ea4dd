use std::{
    cmp::Ordering,
    ops::{Add, Sub},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Pos2 {
    pub x: i32,
    pub y: i32,
}
impl Pos2 {
    #[inline]
    pub fn zero() -> Self {
        Self { x: 0, y: 0 }
    }

    /// The top-left and bottom-right corners (both inclusive) of the given positions
    ///
    /// Returns [`None`] for an empty slice
    pub fn bounds(positions: &[Pos2]) -> Option<(Pos2, Pos2)> {
        let first = *positions.first()?;
        Some(
            positions
                .iter()
                .fold((first, first), |(tl, br), &pos| {
                    (
                        Pos2 {
                            x: tl.x.min(pos.x),
                            y: tl.y.min(pos.y),
                        },
                        Pos2 {
                            x: br.x.max(pos.x),
                            y: br.y.max(pos.y),
                        },
                    )
                }),
        )
    }
}
impl Default for Pos2 {
    #[inline]
    fn default() -> Self {
        Self::zero()
    }
}
impl PartialOrd for Pos2 {
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
impl Ord for Pos2 {
    #[inline]
    fn cmp(&self, other: &Self) -> Ordering {
        // rows first, matching the order cells are scanned in
        Ord::cmp(&self.y, &other.y).then(Ord::cmp(&self.x, &other.x))
    }
}
impl Add for Pos2 {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self::Output {
        Self {
            x: self.x + rhs.x,
            y: self.y + rhs.y,
        }
    }
}
impl Sub for Pos2 {
    type Output = Pos2;

    #[inline]
    fn sub(self, rhs: Self) -> Self::Output {
        Self {
            x: self.x - rhs.x,
            y: self.y - rhs.y,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pos(x: i32, y: i32) -> Pos2 {
        Pos2 { x, y }
    }

    #[test]
    fn orders_by_row_then_column() {
        let mut positions = vec![pos(0, 1), pos(5, 0), pos(-1, 1)];
        positions.sort();

        assert_eq!(positions, vec![pos(5, 0), pos(-1, 1), pos(0, 1)]);
    }

    #[test]
    fn bounds_cover_all_positions() {
        let bounds = Pos2::bounds(&[pos(2, 0), pos(0, 3), pos(4, 1)]);

        assert_eq!(bounds, Some((pos(0, 0), pos(4, 3))));
        assert_eq!(Pos2::bounds(&[]), None);
    }
}
