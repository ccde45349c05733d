// Copyright 2020 Zachary Stewart
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.
use std::fmt;

/// The coordinates of a cell on the board. Rows and columns are 1-based, so on an
/// `N`x`N` board valid values lie in `[1, N]`. Values outside that range can still be
/// constructed; the board rejects them when they are used.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd)]
pub struct Coordinate {
    /// Vertical position of the cell.
    pub row: usize,
    /// Horizontal position of the cell.
    pub col: usize,
}

impl Coordinate {
    /// Construct a [`Coordinate`] from the given `row` and `col`.
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Get the coordinate offset by the given deltas, or `None` if either component
    /// would drop below zero.
    pub(crate) fn offset(self, drow: isize, dcol: isize) -> Option<Self> {
        let row = offset_component(self.row, drow)?;
        let col = offset_component(self.col, dcol)?;
        Some(Self { row, col })
    }
}

fn offset_component(value: usize, delta: isize) -> Option<usize> {
    if delta < 0 {
        value.checked_sub(delta.unsigned_abs())
    } else {
        value.checked_add(delta as usize)
    }
}

impl From<(usize, usize)> for Coordinate {
    /// Construct a [`Coordinate`] from the given `(row, col)` pair.
    fn from((row, col): (usize, usize)) -> Self {
        Self::new(row, col)
    }
}

impl From<Coordinate> for (usize, usize) {
    /// Convert the [`Coordinate`] into a `(row, col)` pair.
    fn from(coord: Coordinate) -> Self {
        (coord.row, coord.col)
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} {}", self.row, self.col)
    }
}

#[cfg(feature = "rng_gen")]
pub use self::uniform::UniformCoordinate;

#[cfg(feature = "rng_gen")]
mod uniform {
    use rand::{
        distributions::{
            uniform::{SampleBorrow, SampleUniform, Uniform, UniformSampler},
            Distribution,
        },
        Rng,
    };

    use super::Coordinate;

    /// Samples coordinates uniformly from the rectangle spanned by two corners.
    #[derive(Debug, Copy, Clone)]
    pub struct UniformCoordinate {
        row: Uniform<usize>,
        col: Uniform<usize>,
    }

    impl UniformSampler for UniformCoordinate {
        type X = Coordinate;

        fn new<B1, B2>(low: B1, high: B2) -> Self
        where
            B1: SampleBorrow<Coordinate> + Sized,
            B2: SampleBorrow<Coordinate> + Sized,
        {
            let (low, high) = (low.borrow(), high.borrow());
            Self {
                row: Uniform::new(low.row, high.row),
                col: Uniform::new(low.col, high.col),
            }
        }

        fn new_inclusive<B1, B2>(low: B1, high: B2) -> Self
        where
            B1: SampleBorrow<Coordinate> + Sized,
            B2: SampleBorrow<Coordinate> + Sized,
        {
            let (low, high) = (low.borrow(), high.borrow());
            Self {
                row: Uniform::new_inclusive(low.row, high.row),
                col: Uniform::new_inclusive(low.col, high.col),
            }
        }

        fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Coordinate {
            Coordinate::new(self.row.sample(rng), self.col.sample(rng))
        }
    }

    impl SampleUniform for Coordinate {
        type Sampler = UniformCoordinate;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn equality_is_structural() {
        assert_eq!(Coordinate::new(2, 5), Coordinate::from((2, 5)));
        assert_ne!(Coordinate::new(2, 5), Coordinate::new(5, 2));
        assert_eq!(<(usize, usize)>::from(Coordinate::new(4, 1)), (4, 1));
    }

    #[test]
    fn offset_stops_at_zero() {
        let c = Coordinate::new(1, 3);
        assert_eq!(c.offset(-1, 1), Some(Coordinate::new(0, 4)));
        assert_eq!(c.offset(-2, 0), None);
    }

    #[test]
    fn displays_row_then_col() {
        assert_eq!(Coordinate::new(3, 6).to_string(), "3 6");
    }

    #[cfg(feature = "rng_gen")]
    #[test]
    fn uniform_inclusive_stays_in_range() {
        use rand::{distributions::Uniform, rngs::SmallRng, Rng, SeedableRng};

        let mut rng = SmallRng::seed_from_u64(7);
        let range = Uniform::new_inclusive(Coordinate::new(1, 1), Coordinate::new(6, 6));
        let mut seen_max = false;
        for _ in 0..1000 {
            let c = rng.sample(&range);
            assert!((1..=6).contains(&c.row) && (1..=6).contains(&c.col), "{:?}", c);
            seen_max |= c == Coordinate::new(6, 6);
        }
        assert!(seen_max);
    }
}
