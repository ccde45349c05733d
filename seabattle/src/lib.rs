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

//! Engine for a turn-based sea battle on square boards.
//!
//! Ships are straight lines that may not touch each other, not even diagonally. Each
//! side defends one [`Board`][board::Board]; shots resolve into a miss, a hit or a sink,
//! and a hit lets the shooter fire again. The [`Match`][game::Match] alternates between
//! two [`Player`][game::Player]s until one fleet is gone.
//!
//! ```
//! use seabattle::{
//!     board::{Board, CellState, Coordinate, ShotOutcome},
//!     ships::{Orientation, Ship},
//! };
//!
//! let mut board = Board::new(6);
//! board
//!     .add_ship(Ship::new(1, Coordinate::new(3, 3), Orientation::Horizontal))
//!     .unwrap();
//! board.reset_used_marks();
//! assert_eq!(board.shot(Coordinate::new(3, 3)), Ok(ShotOutcome::Sunk));
//! assert_eq!(board.cell(Coordinate::new(2, 2)), Some(CellState::Blocked));
//! assert!(board.is_defeated());
//! ```
//!
//! Enable the `rng_gen` feature (on by default) for random fleet layout and a
//! computer opponent backed by [`rand`].

pub mod board;
pub mod config;
pub mod game;
pub mod ships;

pub use crate::{
    board::{Board, Coordinate, FleetGenerator, ShotOutcome},
    config::{Fleet, GameConfig},
    game::{Match, MatchState, Player, Side},
    ships::{Orientation, Ship},
};
