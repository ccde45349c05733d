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
use crate::board::Coordinate;

/// Dimensions of a square board with `size` rows and `size` columns, addressed with
/// 1-based [`Coordinate`]s.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct Dimensions {
    size: usize,
}

impl Dimensions {
    /// Create [`Dimensions`] for a `size`x`size` board.
    /// Panics if `size` is 0 or `size * size` exceeds `usize::max_value()`.
    pub fn new(size: usize) -> Self {
        match Self::try_new(size) {
            Some(dim) => dim,
            None if size == 0 => panic!("Dimensions must be nonzero, got {0}x{0}", size),
            None => panic!(
                "Dimensions too large: {} * {} > {}",
                size,
                size,
                usize::max_value()
            ),
        }
    }

    /// Create [`Dimensions`] for a `size`x`size` board. Returns `None` if `size` is 0 or
    /// the total number of cells overflows.
    pub fn try_new(size: usize) -> Option<Self> {
        if size == 0 {
            None
        } else {
            size.checked_mul(size).map(|_| Self { size })
        }
    }

    /// Number of rows (and columns).
    pub fn size(&self) -> usize {
        self.size
    }

    /// Compute the total number of cells. Used to allocate storage for the board.
    pub fn total_size(&self) -> usize {
        self.size * self.size
    }

    /// Returns true if the coordinate lies inside the board.
    #[inline]
    pub fn contains(&self, coord: &Coordinate) -> bool {
        (1..=self.size).contains(&coord.row) && (1..=self.size).contains(&coord.col)
    }

    /// Convert a coordinate to a linear index within these dimensions.
    /// Panics if the coordinate is out of bounds.
    pub fn linearize(&self, coord: &Coordinate) -> usize {
        match self.try_linearize(coord) {
            Some(v) => v,
            None => panic!("{:?} is out of bounds for {:?}", coord, self),
        }
    }

    /// Convert a coordinate to a linear index within these dimensions.
    /// Returns `None` if the coordinate is out of bounds.
    pub fn try_linearize(&self, coord: &Coordinate) -> Option<usize> {
        if self.contains(coord) {
            Some((coord.row - 1) * self.size + (coord.col - 1))
        } else {
            None
        }
    }

    /// Get an iterator over rows of the board. Each row is an iterator over the
    /// coordinates of that row.
    pub fn iter_coordinates(&self) -> impl Iterator<Item = impl Iterator<Item = Coordinate>> {
        let size = self.size;
        (1..=size).map(move |row| (1..=size).map(move |col| Coordinate::new(row, col)))
    }

    /// Iterate the in-bounds cells that touch `coord`, including diagonally.
    pub fn neighbors(&self, coord: Coordinate) -> NeighborIter {
        NeighborIter {
            dim: *self,
            coord,
            // Out of bounds coordinates have no neighbors on the board, so skip straight
            // to the end.
            step: if self.contains(&coord) {
                0
            } else {
                NEIGHBOR_OFFSETS.len()
            },
        }
    }
}

/// Offsets of the eight cells around a coordinate, row-major.
const NEIGHBOR_OFFSETS: [(isize, isize); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// Iterator over the neighbors of a coordinate.
#[derive(Debug, Clone)]
pub struct NeighborIter {
    dim: Dimensions,
    coord: Coordinate,
    step: usize,
}

impl Iterator for NeighborIter {
    type Item = Coordinate;

    fn next(&mut self) -> Option<Coordinate> {
        while let Some(&(drow, dcol)) = NEIGHBOR_OFFSETS.get(self.step) {
            self.step += 1;
            match self.coord.offset(drow, dcol) {
                Some(n) if self.dim.contains(&n) => return Some(n),
                _ => {}
            }
        }
        None
    }
}
