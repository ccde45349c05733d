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
use std::io;

use thiserror::Error;

use crate::board::GenerateError;

/// Failure of the collaborator a player gets its targets from. Unlike a refused shot,
/// this ends the match.
#[derive(Debug, Error)]
pub enum PlayerError {
    /// The input stream ended.
    #[error("input closed")]
    InputClosed,
    /// Reading input failed.
    #[error("failed to read input: {0}")]
    Io(#[from] io::Error),
}

/// Error returned by [`Match`][super::Match] operations.
#[derive(Debug, Error)]
pub enum MatchError {
    /// Boards have not been set up yet.
    #[error("the match has not started")]
    NotStarted,
    /// Boards were already set up.
    #[error("the match has already started")]
    AlreadyStarted,
    /// A side has already won; no further turns are accepted.
    #[error("the match is already over")]
    AlreadyOver,
    #[error(transparent)]
    Player(#[from] PlayerError),
    #[error(transparent)]
    Generate(#[from] GenerateError),
}
