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

//! Implements the setup phase of the board: random fleet layout.

use log::debug;

use crate::{
    board::{Board, CannotPlaceReason, Coordinate, Dimensions, GenerateError},
    config::{Fleet, FleetError, GameConfig, GeneratorLimits, MAX_SIZE},
    ships::{Orientation, Ship},
};

/// Source of candidate ship placements. Candidates do not need to be valid; the board
/// rejects those that fall off the edge or touch another ship.
pub trait PlacementSource {
    /// Propose a bow and orientation for a ship of `length` on a `size`x`size` board.
    fn candidate(&mut self, length: usize, size: usize) -> (Coordinate, Orientation);
}

impl<S: PlacementSource + ?Sized> PlacementSource for &mut S {
    fn candidate(&mut self, length: usize, size: usize) -> (Coordinate, Orientation) {
        (**self).candidate(length, size)
    }
}

/// Uniformly random placements: any bow on the board, either orientation.
#[cfg(feature = "rng_gen")]
#[derive(Debug, Clone)]
pub struct RandomPlacement<R>(R);

#[cfg(feature = "rng_gen")]
impl<R: rand::Rng> RandomPlacement<R> {
    pub fn new(rng: R) -> Self {
        RandomPlacement(rng)
    }
}

#[cfg(feature = "rng_gen")]
impl<R: rand::Rng> PlacementSource for RandomPlacement<R> {
    fn candidate(&mut self, _length: usize, size: usize) -> (Coordinate, Orientation) {
        let range = rand::distributions::Uniform::new_inclusive(
            Coordinate::new(1, 1),
            Coordinate::new(size, size),
        );
        let bow = self.0.sample(range);
        (bow, self.0.gen())
    }
}

/// Builds fully populated boards for a fixed fleet.
///
/// Ships are placed largest first by repeatedly asking a [`PlacementSource`] for
/// candidates. Greedy placement can leave no room for a later ship, so once a board
/// has used up its attempt budget it is thrown away and layout starts over, up to
/// `max_restarts` times.
#[derive(Debug, Clone)]
pub struct FleetGenerator {
    size: usize,
    fleet: Fleet,
    limits: GeneratorLimits,
}

impl FleetGenerator {
    /// Create a generator for `size`x`size` boards with default limits. Fails if the
    /// size is outside `1..=MAX_SIZE` or the longest ship does not fit.
    pub fn new(size: usize, fleet: Fleet) -> Result<Self, FleetError> {
        if size > MAX_SIZE || Dimensions::try_new(size).is_none() {
            return Err(FleetError::BadSize {
                size,
                max: MAX_SIZE,
            });
        }
        fleet.check_fits(size)?;
        Ok(Self {
            size,
            fleet,
            limits: GeneratorLimits::default(),
        })
    }

    /// Create a generator from a [`GameConfig`].
    pub fn from_config(config: &GameConfig) -> Result<Self, FleetError> {
        Ok(Self::new(config.size, config.fleet.clone())?.with_limits(config.limits))
    }

    /// Replace the search limits.
    pub fn with_limits(mut self, limits: GeneratorLimits) -> Self {
        self.limits = limits;
        self
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn fleet(&self) -> &Fleet {
        &self.fleet
    }

    pub fn limits(&self) -> GeneratorLimits {
        self.limits
    }

    /// Lay out the whole fleet on a fresh board. The returned board still carries its
    /// placement-time outline marks; call [`Board::reset_used_marks`] before play.
    pub fn generate<P: PlacementSource + ?Sized>(
        &self,
        source: &mut P,
    ) -> Result<Board, GenerateError> {
        for restart in 0..=self.limits.max_restarts {
            if let Some(board) = self.try_layout(source) {
                if restart > 0 {
                    debug!("fleet laid out after {} restarts", restart);
                }
                return Ok(board);
            }
            debug!(
                "no room left after {} attempts, restarting layout",
                self.limits.max_attempts
            );
        }
        Err(GenerateError::Exhausted {
            restarts: self.limits.max_restarts,
        })
    }

    /// One pass over the fleet. Returns `None` if the attempt budget runs out.
    fn try_layout<P: PlacementSource + ?Sized>(&self, source: &mut P) -> Option<Board> {
        let mut board = Board::new(self.size);
        let mut attempts = 0;
        for &length in self.fleet.lengths() {
            loop {
                attempts += 1;
                if attempts > self.limits.max_attempts {
                    return None;
                }
                let (bow, orientation) = source.candidate(length, self.size);
                match board.add_ship(Ship::new(length, bow, orientation)) {
                    Ok(()) => break,
                    Err(err) => match err.reason() {
                        CannotPlaceReason::OutOfBounds | CannotPlaceReason::Occupied => {}
                        // The board is fresh and never reset here.
                        CannotPlaceReason::Sealed => unreachable!(),
                    },
                }
            }
        }
        Some(board)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::VecDeque;

    use super::*;
    use crate::ships::Orientation::{Horizontal, Vertical};

    /// Replays a fixed list of candidates, cycling when exhausted.
    struct Scripted {
        candidates: VecDeque<(Coordinate, Orientation)>,
        asked: usize,
    }

    impl Scripted {
        fn new(candidates: &[((usize, usize), Orientation)]) -> Self {
            Self {
                candidates: candidates
                    .iter()
                    .map(|&(c, o)| (Coordinate::from(c), o))
                    .collect(),
                asked: 0,
            }
        }
    }

    impl PlacementSource for Scripted {
        fn candidate(&mut self, _length: usize, _size: usize) -> (Coordinate, Orientation) {
            self.asked += 1;
            let next = self.candidates.pop_front().unwrap();
            self.candidates.push_back(next);
            next
        }
    }

    #[test]
    fn retries_rejected_candidates() {
        let generator = FleetGenerator::new(4, Fleet::new(vec![2, 1]).unwrap()).unwrap();
        let mut source = Scripted::new(&[
            // Runs off the right edge.
            ((4, 4), Horizontal),
            ((1, 1), Horizontal),
            // Touches the first ship diagonally.
            ((2, 3), Vertical),
            ((4, 4), Vertical),
        ]);
        let board = generator.generate(&mut source).unwrap();
        assert_eq!(source.asked, 4);
        assert_eq!(board.live_ships(), 2);
        assert_eq!(board.ships()[0].bow(), Coordinate::new(1, 1));
        assert_eq!(board.ships()[1].bow(), Coordinate::new(4, 4));
    }

    #[test]
    fn gives_up_when_fleet_cannot_fit() {
        // Two single cells can never avoid each other on a 1x1 board.
        let generator = FleetGenerator::new(1, Fleet::new(vec![1, 1]).unwrap())
            .unwrap()
            .with_limits(GeneratorLimits {
                max_attempts: 10,
                max_restarts: 3,
            });
        let mut source = Scripted::new(&[((1, 1), Horizontal)]);
        assert_eq!(
            generator.generate(&mut source).unwrap_err(),
            GenerateError::Exhausted { restarts: 3 }
        );
        // Each of the 4 passes uses 10 attempts and the 11th trips the budget.
        assert_eq!(source.asked, 4 * 10);
    }

    #[test]
    fn restarts_after_painting_into_a_corner() {
        // On a 3x3 board a 1-cell ship in the centre blocks everything else.
        let generator = FleetGenerator::new(3, Fleet::new(vec![1, 1]).unwrap())
            .unwrap()
            .with_limits(GeneratorLimits {
                max_attempts: 3,
                max_restarts: 5,
            });
        let mut source = Scripted::new(&[
            ((2, 2), Horizontal),
            ((1, 1), Horizontal),
            ((3, 3), Horizontal),
            ((1, 1), Horizontal),
            ((3, 3), Horizontal),
        ]);
        let board = generator.generate(&mut source).unwrap();
        let bows: Vec<_> = board.ships().iter().map(Ship::bow).collect();
        assert_eq!(bows, vec![Coordinate::new(1, 1), Coordinate::new(3, 3)]);
    }

    #[test]
    fn rejects_fleet_longer_than_board() {
        assert_eq!(
            FleetGenerator::new(2, Fleet::standard()).unwrap_err(),
            FleetError::TooLong { length: 3, size: 2 }
        );
    }

    #[test]
    fn rejects_unusable_board_sizes() {
        for &size in &[0, MAX_SIZE + 1, usize::max_value()] {
            assert_eq!(
                FleetGenerator::new(size, Fleet::new(vec![1]).unwrap()).unwrap_err(),
                FleetError::BadSize {
                    size,
                    max: MAX_SIZE
                }
            );
        }
        let generator = FleetGenerator::new(MAX_SIZE, Fleet::standard()).unwrap();
        assert_eq!(generator.size(), MAX_SIZE);
    }

    #[cfg(feature = "rng_gen")]
    #[test]
    fn random_placement_builds_standard_fleet() {
        use rand::{rngs::SmallRng, SeedableRng};

        let generator = FleetGenerator::from_config(&GameConfig::default()).unwrap();
        let mut source = RandomPlacement::new(SmallRng::seed_from_u64(99));
        let board = generator.generate(&mut source).unwrap();
        let mut lengths: Vec<_> = board.ships().iter().map(Ship::len).collect();
        lengths.sort_unstable_by(|a, b| b.cmp(a));
        assert_eq!(lengths, vec![3, 2, 2, 1, 1, 1, 1]);
        assert_eq!(board.live_ships(), 7);
    }
}
