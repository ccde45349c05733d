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

//! Game configuration: board size, fleet composition and generator limits.

use std::{fmt, str::FromStr};

use thiserror::Error;

/// Side length of the standard board.
pub const DEFAULT_SIZE: usize = 6;

/// Largest supported side length. Keeps boards small enough to allocate and to label
/// with two-digit axis numbers.
pub const MAX_SIZE: usize = 99;

/// Ship lengths of the standard fleet, largest first.
pub const DEFAULT_FLEET: [usize; 7] = [3, 2, 2, 1, 1, 1, 1];

/// Reason a fleet description was rejected.
#[derive(Debug, Error, Clone, Eq, PartialEq)]
pub enum FleetError {
    /// The fleet has no ships.
    #[error("a fleet needs at least one ship")]
    Empty,
    /// A ship was given a length of zero.
    #[error("ship lengths must be at least 1")]
    ZeroLength,
    /// A ship cannot fit on the board in any orientation.
    #[error("a ship of length {length} does not fit on a {size}x{size} board")]
    TooLong { length: usize, size: usize },
    /// The board size is zero or larger than [`MAX_SIZE`].
    #[error("board size must be between 1 and {max}, got {size}")]
    BadSize { size: usize, max: usize },
    /// The fleet description could not be parsed.
    #[error("invalid fleet {input:?}, expected a list of lengths such as \"3,2,2,1\"")]
    Parse { input: String },
}

/// The multiset of ship lengths placed on each board. Always kept largest first, which
/// gives random placement the best chance of succeeding.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Fleet(Vec<usize>);

impl Fleet {
    /// Build a fleet from ship lengths in any order.
    pub fn new<I: IntoIterator<Item = usize>>(lengths: I) -> Result<Self, FleetError> {
        let mut lengths: Vec<usize> = lengths.into_iter().collect();
        if lengths.is_empty() {
            return Err(FleetError::Empty);
        }
        if lengths.contains(&0) {
            return Err(FleetError::ZeroLength);
        }
        lengths.sort_unstable_by(|a, b| b.cmp(a));
        Ok(Fleet(lengths))
    }

    /// One 3-cell, two 2-cell and four 1-cell ships.
    pub fn standard() -> Self {
        Fleet(DEFAULT_FLEET.to_vec())
    }

    /// Ship lengths, largest first.
    pub fn lengths(&self) -> &[usize] {
        &self.0
    }

    /// Number of ships.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Always false; fleets cannot be empty.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Number of cells covered by the whole fleet.
    pub fn total_cells(&self) -> usize {
        self.0.iter().sum()
    }

    /// Check that every ship can at least fit along one axis of a `size`x`size` board.
    pub fn check_fits(&self, size: usize) -> Result<(), FleetError> {
        // Sorted, so the first ship is the longest.
        match self.0.first() {
            Some(&length) if length > size => Err(FleetError::TooLong { length, size }),
            _ => Ok(()),
        }
    }
}

impl Default for Fleet {
    fn default() -> Self {
        Self::standard()
    }
}

impl FromStr for Fleet {
    type Err = FleetError;

    /// Parse lengths separated by commas and/or whitespace, e.g. `"3,2,2,1,1,1,1"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lengths = s
            .split(|ch: char| ch == ',' || ch.is_whitespace())
            .filter(|part| !part.is_empty())
            .map(|part| part.parse::<usize>())
            .collect::<Result<Vec<_>, _>>()
            .map_err(|_| FleetError::Parse {
                input: s.to_owned(),
            })?;
        Fleet::new(lengths)
    }
}

impl fmt::Display for Fleet {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let mut lengths = self.0.iter();
        if let Some(first) = lengths.next() {
            write!(f, "{}", first)?;
        }
        for length in lengths {
            write!(f, ",{}", length)?;
        }
        Ok(())
    }
}

/// Bounds on the random layout search.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct GeneratorLimits {
    /// Placement attempts allowed for a whole board before starting over.
    pub max_attempts: usize,
    /// How many times to start over before giving up.
    pub max_restarts: usize,
}

impl Default for GeneratorLimits {
    fn default() -> Self {
        Self {
            max_attempts: 2000,
            max_restarts: 1000,
        }
    }
}

/// Everything needed to set up a match.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct GameConfig {
    /// Rows and columns of each board.
    pub size: usize,
    /// Ships placed on each board.
    pub fleet: Fleet,
    /// Bounds on random fleet layout.
    pub limits: GeneratorLimits,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            size: DEFAULT_SIZE,
            fleet: Fleet::standard(),
            limits: GeneratorLimits::default(),
        }
    }
}
