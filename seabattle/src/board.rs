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

//! Types that make up the game board.

use std::collections::HashSet;

use log::{info, trace};

use crate::ships::Ship;

use self::grid::Grid;
pub use self::{
    coordinate::Coordinate,
    dimensions::{Dimensions, NeighborIter},
    errors::{
        CannotPlaceReason, CannotShootReason, GenerateError, PlaceError, ShotError,
    },
    grid::CellState,
    setup::{FleetGenerator, PlacementSource},
};
#[cfg(feature = "rng_gen")]
pub use self::{coordinate::UniformCoordinate, setup::RandomPlacement};

mod coordinate;
mod dimensions;
mod errors;
mod grid;
pub mod setup;

/// Result of a shot on a single player's board.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum ShotOutcome {
    /// The shot did not hit anything.
    Miss,
    /// The shot hit a ship but did not sink it.
    Hit,
    /// The shot hit the last intact cell of a ship.
    Sunk,
}

impl ShotOutcome {
    /// Whether the shooter gets to fire again. True for [`Hit`][ShotOutcome::Hit] and
    /// [`Sunk`][ShotOutcome::Sunk].
    pub fn keeps_turn(self) -> bool {
        match self {
            ShotOutcome::Miss => false,
            ShotOutcome::Hit | ShotOutcome::Sunk => true,
        }
    }
}

/// Where a board is in its lifecycle.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
enum Phase {
    /// Ships may be added.
    Setup,
    /// Placement marks were cleared; waiting for the first shot.
    Ready,
    /// At least one shot has been fired.
    Battle,
}

/// Represents a single player's board, including their ships and their side of the ocean.
#[derive(Debug, Clone)]
pub struct Board {
    /// Visible state of every cell.
    grid: Grid,

    /// Ships in the order they were placed.
    ships: Vec<Ship>,

    /// Coordinates no longer eligible: placed ships and their outlines during setup,
    /// shots and revealed outlines during battle.
    used: HashSet<Coordinate>,

    /// Ships that are not yet sunk.
    live_ships: usize,

    /// Whether observers see intact ship cells as empty water.
    hidden: bool,

    phase: Phase,
}

impl Board {
    /// Create an empty `size`x`size` board. Panics if `size` is 0.
    pub fn new(size: usize) -> Self {
        Self::with_dimensions(Dimensions::new(size))
    }

    /// Create an empty board with the given [`Dimensions`].
    pub fn with_dimensions(dim: Dimensions) -> Self {
        Self {
            grid: Grid::new(dim),
            ships: Vec::new(),
            used: HashSet::new(),
            live_ships: 0,
            hidden: false,
            phase: Phase::Setup,
        }
    }

    /// Get the [`Dimensions`] of this [`Board`].
    pub fn dimensions(&self) -> &Dimensions {
        &self.grid.dim
    }

    /// Number of rows and columns.
    pub fn size(&self) -> usize {
        self.grid.dim.size()
    }

    /// Ships on this board, in placement order.
    pub fn ships(&self) -> &[Ship] {
        &self.ships
    }

    /// Number of ships that are still afloat.
    pub fn live_ships(&self) -> usize {
        self.live_ships
    }

    /// Returns true if all of this player's ships have been sunk.
    pub fn is_defeated(&self) -> bool {
        self.live_ships == 0
    }

    /// Whether the coordinate is excluded from future shots (or, during setup, from
    /// future placements).
    pub fn is_used(&self, coord: &Coordinate) -> bool {
        self.used.contains(coord)
    }

    /// Whether ship cells are concealed from observers.
    pub fn is_hidden(&self) -> bool {
        self.hidden
    }

    /// Conceal or reveal intact ship cells when viewed through [`view`][Board::view].
    pub fn set_hidden(&mut self, hidden: bool) {
        self.hidden = hidden;
    }

    /// The true state of the cell. Returns `None` if the coordinate is out of bounds.
    pub fn cell(&self, coord: Coordinate) -> Option<CellState> {
        self.grid.get(coord)
    }

    /// The state of the cell as an observer sees it: intact ship cells read as
    /// [`Empty`][CellState::Empty] while the board is hidden. Returns `None` if the
    /// coordinate is out of bounds.
    pub fn view(&self, coord: Coordinate) -> Option<CellState> {
        self.cell(coord).map(|state| match state {
            CellState::Ship if self.hidden => CellState::Empty,
            other => other,
        })
    }

    /// Get an iterator over rows of the board. Each row is an iterator over the
    /// coordinates of that row.
    pub fn rows(&self) -> impl Iterator<Item = impl Iterator<Item = Coordinate>> {
        self.grid.dim.iter_coordinates()
    }

    /// Place a ship. Every cell must be on the board and not already used, which also
    /// rules out touching another ship since each ship reserves its outline. On failure
    /// the board is unchanged.
    pub fn add_ship(&mut self, ship: Ship) -> Result<(), PlaceError> {
        if self.phase != Phase::Setup {
            return Err(PlaceError::new(CannotPlaceReason::Sealed, ship));
        }
        for coord in ship.coords() {
            if !self.grid.dim.contains(&coord) {
                return Err(PlaceError::new(CannotPlaceReason::OutOfBounds, ship));
            }
            if self.used.contains(&coord) {
                return Err(PlaceError::new(CannotPlaceReason::Occupied, ship));
            }
        }
        // Already ensured that every position is valid and free.
        for coord in ship.coords() {
            self.grid[coord] = CellState::Ship;
            self.used.insert(coord);
        }
        self.used.extend(outline(&self.grid.dim, &ship));
        trace!("placed {:?}", ship);
        self.ships.push(ship);
        self.live_ships += 1;
        Ok(())
    }

    /// Forget the outline reservations made during placement so they do not read as
    /// earlier misses. Seals the board against further placements. Has no effect and
    /// returns false once a shot has been fired.
    pub fn reset_used_marks(&mut self) -> bool {
        if self.phase == Phase::Battle {
            return false;
        }
        self.used.clear();
        self.phase = Phase::Ready;
        true
    }

    /// Fire a shot at this board, returning why the shot was refused or what it hit.
    pub fn shot(&mut self, coord: Coordinate) -> Result<ShotOutcome, ShotError> {
        if !self.grid.dim.contains(&coord) {
            return Err(ShotError::new(CannotShootReason::OutOfBounds, coord));
        }
        if !self.used.insert(coord) {
            return Err(ShotError::new(CannotShootReason::AlreadyUsed, coord));
        }
        self.phase = Phase::Battle;

        let target = self
            .ships
            .iter()
            .position(|ship| !ship.is_sunk() && ship.is_hit_by(&coord));
        let outcome = match target {
            None => {
                self.grid[coord] = CellState::Miss;
                ShotOutcome::Miss
            }
            Some(idx) => {
                self.grid[coord] = CellState::Hit;
                if self.ships[idx].hit() {
                    self.reveal_outline(idx);
                    self.live_ships -= 1;
                    info!(
                        "ship of length {} sunk at {}, {} left",
                        self.ships[idx].len(),
                        coord,
                        self.live_ships
                    );
                    ShotOutcome::Sunk
                } else {
                    ShotOutcome::Hit
                }
            }
        };
        trace!("shot at {}: {:?}", coord, outcome);
        Ok(outcome)
    }

    /// Mark the ring around a sunk ship as used and paint its open water.
    fn reveal_outline(&mut self, idx: usize) {
        let ring: Vec<_> = outline(&self.grid.dim, &self.ships[idx]).collect();
        for coord in ring {
            self.used.insert(coord);
            let cell = &mut self.grid[coord];
            if *cell == CellState::Empty {
                *cell = CellState::Blocked;
            }
        }
    }
}

/// In-bounds cells touching the ship (including diagonally) that are not part of it.
/// May yield a coordinate more than once.
fn outline<'a>(dim: &'a Dimensions, ship: &'a Ship) -> impl 'a + Iterator<Item = Coordinate> {
    ship.coords()
        .flat_map(move |coord| dim.neighbors(coord))
        .filter(move |coord| !ship.is_hit_by(coord))
}
