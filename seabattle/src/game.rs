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

//! Two-player match orchestration.
//!
//! A [`Match`] owns both boards and both [`Player`]s. Each turn the active side picks a
//! target on the opposing board; a hit or sink lets the same side fire again, a miss
//! passes the turn. The match is over as soon as either board has no ships left.

use log::info;

use crate::board::{Board, Coordinate, FleetGenerator, PlacementSource, ShotOutcome};

pub use self::{
    errors::{MatchError, PlayerError},
    player::{take_turn, Human, Player, TargetInput},
};
#[cfg(feature = "rng_gen")]
pub use self::player::Computer;

mod errors;
pub mod player;

/// One of the two sides of a match.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Side {
    First,
    Second,
}

impl Side {
    /// Get the opponent of this side.
    pub fn opponent(self) -> Self {
        match self {
            Side::First => Side::Second,
            Side::Second => Side::First,
        }
    }
}

/// Where a match is in its lifecycle.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum MatchState {
    /// Boards have not been installed yet.
    SetupPending,
    /// Waiting for the given side to fire.
    InProgress(Side),
    /// The given side has won.
    Finished(Side),
}

/// What happened during one call to [`Match::play_turn`].
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct TurnReport {
    /// Side that fired.
    pub side: Side,
    /// Cell that was hit or missed.
    pub target: Coordinate,
    pub outcome: ShotOutcome,
    /// State of the match after the shot.
    pub state: MatchState,
}

/// A player together with the board they defend.
struct Seat {
    player: Box<dyn Player>,
    board: Option<Board>,
}

/// Handles gameplay between two players.
pub struct Match {
    first: Seat,
    second: Seat,
    state: MatchState,
    /// Whether the active side is firing again after a hit.
    extra_turn: bool,
}

impl Match {
    /// Create a match. `first` fires first once boards are installed.
    pub fn new(first: Box<dyn Player>, second: Box<dyn Player>) -> Self {
        Self {
            first: Seat {
                player: first,
                board: None,
            },
            second: Seat {
                player: second,
                board: None,
            },
            state: MatchState::SetupPending,
            extra_turn: false,
        }
    }

    /// Generate a board for each side and start the match.
    pub fn setup<P: PlacementSource + ?Sized>(
        &mut self,
        generator: &FleetGenerator,
        source: &mut P,
    ) -> Result<(), MatchError> {
        if self.state != MatchState::SetupPending {
            return Err(MatchError::AlreadyStarted);
        }
        let first = generator.generate(source)?;
        let second = generator.generate(source)?;
        self.install(first, second)
    }

    /// Start the match with the given boards. Placement-time outline marks are cleared
    /// so they do not count as earlier shots.
    pub fn install(&mut self, mut first: Board, mut second: Board) -> Result<(), MatchError> {
        if self.state != MatchState::SetupPending {
            return Err(MatchError::AlreadyStarted);
        }
        first.reset_used_marks();
        second.reset_used_marks();
        self.first.board = Some(first);
        self.second.board = Some(second);
        self.extra_turn = false;
        self.state = match self.loser() {
            // A side with an empty fleet has lost before the first shot.
            Some(loser) => MatchState::Finished(loser.opponent()),
            None => MatchState::InProgress(Side::First),
        };
        info!(
            "match started: {} vs {}",
            self.first.player.name(),
            self.second.player.name()
        );
        Ok(())
    }

    pub fn state(&self) -> MatchState {
        self.state
    }

    /// The side whose turn it is, if the match is in progress.
    pub fn active(&self) -> Option<Side> {
        match self.state {
            MatchState::InProgress(side) => Some(side),
            _ => None,
        }
    }

    /// Get the winner, or `None` if the match is not over.
    pub fn winner(&self) -> Option<Side> {
        match self.state {
            MatchState::Finished(side) => Some(side),
            _ => None,
        }
    }

    /// Whether the active side earned its current turn by hitting on the previous one.
    pub fn extra_turn(&self) -> bool {
        self.extra_turn
    }

    /// The board defended by the given side, once installed.
    pub fn board(&self, side: Side) -> Option<&Board> {
        self.seat(side).board.as_ref()
    }

    /// The player on the given side.
    pub fn player(&self, side: Side) -> &dyn Player {
        self.seat(side).player.as_ref()
    }

    /// Conceal or reveal the ships of the given side's board to observers.
    pub fn set_hidden(&mut self, side: Side, hidden: bool) {
        if let Some(board) = self.seat_mut(side).board.as_mut() {
            board.set_hidden(hidden);
        }
    }

    /// Let the active side fire one accepted shot.
    pub fn play_turn(&mut self) -> Result<TurnReport, MatchError> {
        let side = match self.state {
            MatchState::SetupPending => return Err(MatchError::NotStarted),
            MatchState::Finished(_) => return Err(MatchError::AlreadyOver),
            MatchState::InProgress(side) => side,
        };
        let (shooter, defender) = match side {
            Side::First => (&mut self.first, &mut self.second),
            Side::Second => (&mut self.second, &mut self.first),
        };
        let board = defender.board.as_mut().ok_or(MatchError::NotStarted)?;
        let (target, outcome) = take_turn(shooter.player.as_mut(), board)?;

        self.state = match self.loser() {
            Some(loser) => {
                let winner = loser.opponent();
                info!("{} wins", self.seat(winner).player.name());
                self.extra_turn = false;
                MatchState::Finished(winner)
            }
            None if outcome.keeps_turn() => {
                self.extra_turn = true;
                MatchState::InProgress(side)
            }
            None => {
                self.extra_turn = false;
                MatchState::InProgress(side.opponent())
            }
        };
        Ok(TurnReport {
            side,
            target,
            outcome,
            state: self.state,
        })
    }

    /// Play turns until one side wins, returning the winner.
    pub fn run(&mut self) -> Result<Side, MatchError> {
        loop {
            if let MatchState::Finished(winner) = self.play_turn()?.state {
                return Ok(winner);
            }
        }
    }

    /// The first side (in seat order) whose fleet is gone.
    fn loser(&self) -> Option<Side> {
        [Side::First, Side::Second]
            .iter()
            .copied()
            .find(|&side| self.board(side).map_or(false, Board::is_defeated))
    }

    fn seat(&self, side: Side) -> &Seat {
        match side {
            Side::First => &self.first,
            Side::Second => &self.second,
        }
    }

    fn seat_mut(&mut self, side: Side) -> &mut Seat {
        match side {
            Side::First => &mut self.first,
            Side::Second => &mut self.second,
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::VecDeque;

    use super::*;
    use crate::ships::{Orientation, Ship};

    struct Script(VecDeque<(usize, usize)>);

    impl TargetInput for Script {
        fn read_target(&mut self, _opponent: &Board) -> Result<Coordinate, PlayerError> {
            self.0
                .pop_front()
                .map(Coordinate::from)
                .ok_or(PlayerError::InputClosed)
        }
    }

    fn scripted(name: &str, targets: &[(usize, usize)]) -> Box<dyn Player> {
        Box::new(Human::new(name, Script(targets.iter().copied().collect())))
    }

    fn board(ships: &[(usize, (usize, usize), Orientation)]) -> Board {
        let mut board = Board::new(6);
        for &(len, bow, orientation) in ships {
            board
                .add_ship(Ship::new(len, bow.into(), orientation))
                .unwrap();
        }
        board
    }

    #[test]
    fn single_sink_ends_match_immediately() {
        let mut game = Match::new(scripted("a", &[(3, 3)]), scripted("b", &[]));
        game.install(
            board(&[(1, (6, 6), Orientation::Horizontal)]),
            board(&[(1, (3, 3), Orientation::Horizontal)]),
        )
        .unwrap();
        let report = game.play_turn().unwrap();
        assert_eq!(report.outcome, ShotOutcome::Sunk);
        assert_eq!(report.state, MatchState::Finished(Side::First));
        assert_eq!(game.board(Side::Second).unwrap().live_ships(), 0);
        assert_eq!(game.winner(), Some(Side::First));
        assert!(matches!(game.play_turn(), Err(MatchError::AlreadyOver)));
    }

    #[test]
    fn hit_keeps_turn_and_miss_passes_it() {
        let mut game = Match::new(
            scripted("a", &[(1, 1), (5, 5), (1, 2)]),
            scripted("b", &[(4, 4)]),
        );
        game.install(
            board(&[(2, (4, 4), Orientation::Vertical)]),
            board(&[(2, (1, 1), Orientation::Horizontal)]),
        )
        .unwrap();
        assert_eq!(game.state(), MatchState::InProgress(Side::First));

        let hit = game.play_turn().unwrap();
        assert_eq!(hit.outcome, ShotOutcome::Hit);
        assert_eq!(hit.state, MatchState::InProgress(Side::First));
        assert!(game.extra_turn());

        let miss = game.play_turn().unwrap();
        assert_eq!(miss.outcome, ShotOutcome::Miss);
        assert_eq!(miss.state, MatchState::InProgress(Side::Second));
        assert!(!game.extra_turn());

        let reply = game.play_turn().unwrap();
        assert_eq!(reply.side, Side::Second);
        assert_eq!(reply.outcome, ShotOutcome::Hit);
        assert_eq!(reply.state, MatchState::InProgress(Side::Second));
    }

    #[test]
    fn run_reports_winner() {
        let mut game = Match::new(
            scripted("a", &[(1, 1), (6, 6)]),
            scripted("b", &[(2, 2), (3, 3)]),
        );
        game.install(
            board(&[(1, (3, 3), Orientation::Horizontal)]),
            board(&[(1, (6, 6), Orientation::Horizontal)]),
        )
        .unwrap();
        // a misses, b misses, a sinks.
        assert_eq!(game.run().unwrap(), Side::First);
        assert_eq!(game.board(Side::First).unwrap().live_ships(), 1);
    }

    #[test]
    fn outline_marks_do_not_block_first_shots() {
        let mut game = Match::new(scripted("a", &[(1, 2)]), scripted("b", &[]));
        game.install(
            board(&[(1, (6, 6), Orientation::Horizontal)]),
            board(&[(1, (1, 1), Orientation::Horizontal)]),
        )
        .unwrap();
        // (1, 2) was reserved as outline during placement.
        assert_eq!(game.play_turn().unwrap().outcome, ShotOutcome::Miss);
    }

    #[test]
    fn turns_require_setup() {
        let mut game = Match::new(scripted("a", &[]), scripted("b", &[]));
        assert_eq!(game.state(), MatchState::SetupPending);
        assert!(matches!(game.play_turn(), Err(MatchError::NotStarted)));
        game.install(
            board(&[(1, (1, 1), Orientation::Vertical)]),
            board(&[(1, (1, 1), Orientation::Vertical)]),
        )
        .unwrap();
        assert!(matches!(
            game.install(Board::new(6), Board::new(6)),
            Err(MatchError::AlreadyStarted)
        ));
    }

    #[test]
    fn input_failure_propagates() {
        let mut game = Match::new(scripted("a", &[]), scripted("b", &[]));
        game.install(
            board(&[(1, (1, 1), Orientation::Vertical)]),
            board(&[(1, (1, 1), Orientation::Vertical)]),
        )
        .unwrap();
        assert!(matches!(
            game.play_turn(),
            Err(MatchError::Player(PlayerError::InputClosed))
        ));
        assert_eq!(game.state(), MatchState::InProgress(Side::First));
    }

    #[test]
    fn empty_fleet_loses_at_install() {
        let mut game = Match::new(scripted("a", &[]), scripted("b", &[]));
        game.install(Board::new(6), board(&[(1, (2, 2), Orientation::Vertical)]))
            .unwrap();
        assert_eq!(game.winner(), Some(Side::Second));
    }

    #[test]
    fn hidden_flag_reaches_board() {
        let mut game = Match::new(scripted("a", &[]), scripted("b", &[]));
        game.install(
            board(&[(1, (1, 1), Orientation::Vertical)]),
            board(&[(1, (1, 1), Orientation::Vertical)]),
        )
        .unwrap();
        game.set_hidden(Side::Second, true);
        assert!(game.board(Side::Second).unwrap().is_hidden());
        assert!(!game.board(Side::First).unwrap().is_hidden());
    }
}
