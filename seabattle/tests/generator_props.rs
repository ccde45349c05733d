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

#![cfg(feature = "rng_gen")]

use proptest::prelude::*;
use rand::{rngs::SmallRng, SeedableRng};

use seabattle::{
    board::{
        Board, CannotShootReason, CellState, Coordinate, FleetGenerator, RandomPlacement,
        ShotOutcome,
    },
    config::{Fleet, GameConfig},
};

fn generate(seed: u64) -> Board {
    let generator = FleetGenerator::from_config(&GameConfig::default()).unwrap();
    generator
        .generate(&mut RandomPlacement::new(SmallRng::seed_from_u64(seed)))
        .unwrap()
}

fn cells(board: &Board) -> Vec<Coordinate> {
    board.rows().flatten().collect()
}

/// Chebyshev distance between two cells.
fn distance(a: Coordinate, b: Coordinate) -> usize {
    let drow = if a.row > b.row { a.row - b.row } else { b.row - a.row };
    let dcol = if a.col > b.col { a.col - b.col } else { b.col - a.col };
    drow.max(dcol)
}

proptest! {
    #[test]
    fn standard_fleet_is_laid_out_exactly(seed in any::<u64>()) {
        let board = generate(seed);
        let mut lengths: Vec<_> = board.ships().iter().map(|ship| ship.len()).collect();
        lengths.sort_unstable_by(|a, b| b.cmp(a));
        prop_assert_eq!(lengths, vec![3, 2, 2, 1, 1, 1, 1]);
        prop_assert_eq!(board.live_ships(), 7);

        let ship_cells: Vec<_> = cells(&board)
            .into_iter()
            .filter(|&c| board.cell(c) == Some(CellState::Ship))
            .collect();
        prop_assert_eq!(ship_cells.len(), 11);
        for coord in ship_cells {
            prop_assert!(board.ships().iter().any(|ship| ship.is_hit_by(&coord)));
        }
    }

    #[test]
    fn ships_never_touch(seed in any::<u64>()) {
        let board = generate(seed);
        let ships = board.ships();
        for (i, a) in ships.iter().enumerate() {
            for coord in a.coords() {
                prop_assert!(board.dimensions().contains(&coord));
            }
            for b in &ships[i + 1..] {
                for ca in a.coords() {
                    for cb in b.coords() {
                        prop_assert!(distance(ca, cb) > 1, "{:?} touches {:?}", a, b);
                    }
                }
            }
        }
    }

    #[test]
    fn shots_off_the_board_are_refused(
        seed in any::<u64>(),
        row in 0usize..20,
        col in 0usize..20,
    ) {
        prop_assume!(row == 0 || col == 0 || row > 6 || col > 6);
        let mut board = generate(seed);
        board.reset_used_marks();
        let err = board.shot(Coordinate::new(row, col)).unwrap_err();
        prop_assert_eq!(err.reason(), CannotShootReason::OutOfBounds);
    }

    #[test]
    fn second_shot_at_a_cell_is_refused(seed in any::<u64>(), row in 1usize..=6, col in 1usize..=6) {
        let mut board = generate(seed);
        board.reset_used_marks();
        let target = Coordinate::new(row, col);
        let first = board.shot(target).unwrap();
        let before = board.cell(target);
        let err = board.shot(target).unwrap_err();
        prop_assert_eq!(err.reason(), CannotShootReason::AlreadyUsed);
        prop_assert_eq!(board.cell(target), before);
        prop_assert!(first != ShotOutcome::Miss || before == Some(CellState::Miss));
    }

    #[test]
    fn fleet_text_survives_display(lengths in prop::collection::vec(1usize..6, 1..8)) {
        let fleet = Fleet::new(lengths).unwrap();
        let parsed: Fleet = fleet.to_string().parse().unwrap();
        prop_assert_eq!(parsed, fleet);
    }
}

#[test]
fn shooting_every_cell_sinks_the_fleet() {
    let mut board = generate(5);
    board.reset_used_marks();
    let mut sunk = 0;
    for coord in cells(&board) {
        match board.shot(coord) {
            Ok(ShotOutcome::Sunk) => sunk += 1,
            Ok(_) => {}
            // Outlines of sunk ships are closed to further shots.
            Err(err) => assert_eq!(err.reason(), CannotShootReason::AlreadyUsed),
        }
    }
    assert_eq!(sunk, 7);
    assert!(board.is_defeated());
    for coord in cells(&board) {
        assert_ne!(board.cell(coord), Some(CellState::Empty), "{}", coord);
    }
}
