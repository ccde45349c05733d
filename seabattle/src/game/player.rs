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

//! Players choose where to fire. A [`Human`] forwards to an input collaborator, a
//! [`Computer`] fires uniformly at random.

use log::trace;

use crate::{
    board::{Board, Coordinate, ShotError, ShotOutcome},
    game::PlayerError,
};

/// Something that picks targets on the opponent's board.
pub trait Player {
    /// Display name of the player.
    fn name(&self) -> &str;

    /// Choose the next target. The opponent's board is passed so a player can inspect
    /// what it is allowed to see; the proposal does not need to be valid.
    fn propose_target(&mut self, opponent: &Board) -> Result<Coordinate, PlayerError>;

    /// Inform the player that its last proposal was refused. Another proposal follows.
    fn rejected(&mut self, _error: &ShotError) {}

    /// Inform the player of the outcome of its shot.
    fn resolved(&mut self, _target: Coordinate, _outcome: ShotOutcome) {}
}

/// The I/O collaborator behind a [`Human`]: reads already-parsed coordinates and
/// reports refused shots back to the person.
pub trait TargetInput {
    /// Block until the person enters a target.
    fn read_target(&mut self, opponent: &Board) -> Result<Coordinate, PlayerError>;

    /// Report a refused shot. Defaults to doing nothing.
    fn rejected(&mut self, _error: &ShotError) {}
}

/// A person entering targets through a [`TargetInput`].
#[derive(Debug)]
pub struct Human<I> {
    name: String,
    input: I,
}

impl<I: TargetInput> Human<I> {
    pub fn new<S: Into<String>>(name: S, input: I) -> Self {
        Self {
            name: name.into(),
            input,
        }
    }

    /// Get a mutable reference to the input collaborator.
    pub fn input_mut(&mut self) -> &mut I {
        &mut self.input
    }
}

impl<I: TargetInput> Player for Human<I> {
    fn name(&self) -> &str {
        &self.name
    }

    fn propose_target(&mut self, opponent: &Board) -> Result<Coordinate, PlayerError> {
        self.input.read_target(opponent)
    }

    fn rejected(&mut self, error: &ShotError) {
        self.input.rejected(error);
    }
}

/// Fires at a uniformly random cell of the opponent's board. Cells that were already
/// used are simply refused and resampled.
#[cfg(feature = "rng_gen")]
#[derive(Debug)]
pub struct Computer<R> {
    name: String,
    rng: R,
}

#[cfg(feature = "rng_gen")]
impl<R: rand::Rng> Computer<R> {
    pub fn new<S: Into<String>>(name: S, rng: R) -> Self {
        Self {
            name: name.into(),
            rng,
        }
    }
}

#[cfg(feature = "rng_gen")]
impl<R: rand::Rng> Player for Computer<R> {
    fn name(&self) -> &str {
        &self.name
    }

    fn propose_target(&mut self, opponent: &Board) -> Result<Coordinate, PlayerError> {
        let size = opponent.size();
        let range = rand::distributions::Uniform::new_inclusive(
            Coordinate::new(1, 1),
            Coordinate::new(size, size),
        );
        Ok(self.rng.sample(range))
    }
}

/// Ask the player for targets until one is accepted by the opponent's board. Refused
/// shots are reported back to the player and retried; input failures are returned.
pub fn take_turn<P: Player + ?Sized>(
    player: &mut P,
    opponent: &mut Board,
) -> Result<(Coordinate, ShotOutcome), PlayerError> {
    loop {
        let target = player.propose_target(opponent)?;
        match opponent.shot(target) {
            Ok(outcome) => {
                player.resolved(target, outcome);
                return Ok((target, outcome));
            }
            Err(err) => {
                trace!("{} retries: {}", player.name(), err);
                player.rejected(&err);
            }
        }
    }
}
