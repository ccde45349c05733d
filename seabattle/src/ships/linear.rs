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
use std::iter::FusedIterator;

use crate::{board::Coordinate, ships::Orientation};

/// Iterator over the cells of a straight ship, from the bow outwards.
#[derive(Debug, Clone)]
pub struct Line {
    next: Coordinate,
    remaining: usize,
    orientation: Orientation,
}

impl Line {
    pub(super) fn new(start: Coordinate, len: usize, orientation: Orientation) -> Self {
        Self {
            next: start,
            remaining: len,
            orientation,
        }
    }
}

impl Iterator for Line {
    type Item = Coordinate;

    fn next(&mut self) -> Option<Coordinate> {
        if self.remaining == 0 {
            return None;
        }
        self.remaining -= 1;
        let current = self.next;
        // Saturate rather than overflow; a ship this far out is already out of bounds.
        self.next = match self.orientation {
            Orientation::Horizontal => {
                Coordinate::new(current.row, current.col.saturating_add(1))
            }
            Orientation::Vertical => Coordinate::new(current.row.saturating_add(1), current.col),
        };
        Some(current)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl ExactSizeIterator for Line {}
impl FusedIterator for Line {}
