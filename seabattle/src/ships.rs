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

//! Ship geometry and damage tracking.

use crate::board::Coordinate;

pub use self::linear::Line;

mod linear;

/// Placement orientation of a ship. Ships extend from their bow towards increasing
/// column (horizontal) or increasing row (vertical).
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Orientation {
    Horizontal,
    Vertical,
}

#[cfg(feature = "rng_gen")]
impl rand::distributions::Distribution<Orientation> for rand::distributions::Standard {
    fn sample<R: rand::Rng + ?Sized>(&self, rng: &mut R) -> Orientation {
        if rng.gen() {
            Orientation::Horizontal
        } else {
            Orientation::Vertical
        }
    }
}

/// A straight ship anchored at its bow. The occupied cells are always derived from the
/// bow, length and orientation; only the remaining hitpoints change after creation.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Ship {
    length: usize,
    bow: Coordinate,
    orientation: Orientation,
    hitpoints: usize,
}

impl Ship {
    /// Construct a ship of `length` cells starting at `bow`. Panics if length is 0.
    pub fn new(length: usize, bow: Coordinate, orientation: Orientation) -> Self {
        assert!(length > 0, "ships must have a nonzero length");
        Self {
            length,
            bow,
            orientation,
            hitpoints: length,
        }
    }

    /// Number of cells the ship covers.
    pub fn len(&self) -> usize {
        self.length
    }

    pub fn bow(&self) -> Coordinate {
        self.bow
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// Cells that have not been hit yet.
    pub fn hitpoints(&self) -> usize {
        self.hitpoints
    }

    /// True once every cell has been hit.
    pub fn is_sunk(&self) -> bool {
        self.hitpoints == 0
    }

    /// Get an iterator over the coordinates this ship occupies, starting at the bow.
    pub fn coords(&self) -> Line {
        Line::new(self.bow, self.length, self.orientation)
    }

    /// Returns true if the coordinate is one of the cells this ship occupies.
    pub fn is_hit_by(&self, coord: &Coordinate) -> bool {
        self.coords().any(|c| c == *coord)
    }

    /// Take one point of damage. Returns true if this hit sank the ship.
    ///
    /// Callers must only apply one hit per distinct occupied coordinate; the board
    /// guarantees this by refusing repeated shots.
    pub(crate) fn hit(&mut self) -> bool {
        debug_assert!(self.hitpoints > 0, "hit applied to a sunk ship");
        self.hitpoints = self.hitpoints.saturating_sub(1);
        self.hitpoints == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn horizontal_steps_along_columns() {
        let ship = Ship::new(3, Coordinate::new(1, 1), Orientation::Horizontal);
        let coords: Vec<_> = ship.coords().collect();
        assert_eq!(
            coords,
            vec![
                Coordinate::new(1, 1),
                Coordinate::new(1, 2),
                Coordinate::new(1, 3)
            ]
        );
    }

    #[test]
    fn vertical_steps_along_rows() {
        let ship = Ship::new(2, Coordinate::new(4, 6), Orientation::Vertical);
        let coords: Vec<_> = ship.coords().collect();
        assert_eq!(coords, vec![Coordinate::new(4, 6), Coordinate::new(5, 6)]);
        assert!(ship.is_hit_by(&Coordinate::new(5, 6)));
        assert!(!ship.is_hit_by(&Coordinate::new(4, 5)));
    }

    #[test]
    fn sinks_after_length_hits() {
        let mut ship = Ship::new(2, Coordinate::new(2, 2), Orientation::Horizontal);
        assert!(!ship.hit());
        assert_eq!(ship.hitpoints(), 1);
        assert!(ship.hit());
        assert!(ship.is_sunk());
    }

    #[test]
    #[should_panic]
    fn zero_length_panics() {
        Ship::new(0, Coordinate::new(1, 1), Orientation::Vertical);
    }
}
