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
use std::{
    error::Error,
    io::{self, BufRead, BufReader},
};

use clap::{value_t, App, Arg, ArgMatches};
use log::info;
use rand::{rngs::StdRng, Rng, SeedableRng};

use seabattle::{
    board::{CellState, FleetGenerator, RandomPlacement, ShotOutcome},
    config::{Fleet, GameConfig, DEFAULT_SIZE},
    game::{Computer, Human, Match, MatchError, Player, PlayerError, Side},
};

use crate::{
    input::{ConsoleInput, InputReader},
    render::{glyph, BoardView},
};

mod input;
mod logging;
mod render;

fn main() -> Result<(), Box<dyn Error>> {
    logging::init_logging();

    let default_size = DEFAULT_SIZE.to_string();
    let default_fleet = Fleet::standard().to_string();
    let matches = App::new("Sea Battle")
        .version("0.1")
        .author("Zachary Stewart <zachary@zstewart.com>")
        .about("Command line sea battle against the computer.")
        .arg(
            Arg::with_name("first")
                .short("f")
                .long("first")
                .value_name("FIRST")
                .help("pre-specify who fires first")
                .takes_value(true)
                .possible_values(&["human", "me", "computer", "bot", "random", "rand"])
                .case_insensitive(true),
        )
        .arg(
            Arg::with_name("size")
                .short("s")
                .long("size")
                .value_name("N")
                .help("side length of the square boards")
                .takes_value(true)
                .default_value(&default_size),
        )
        .arg(
            Arg::with_name("fleet")
                .long("fleet")
                .value_name("LENGTHS")
                .help("comma separated ship lengths")
                .takes_value(true)
                .default_value(&default_fleet),
        )
        .arg(
            Arg::with_name("seed")
                .long("seed")
                .value_name("SEED")
                .help("seed for board layout and computer moves")
                .takes_value(true),
        )
        .arg(
            Arg::with_name("reveal")
                .long("reveal")
                .help("show the computer's ships"),
        )
        .get_matches();

    let size = value_t!(matches, "size", usize).unwrap_or_else(|e| e.exit());
    let fleet: Fleet = matches.value_of("fleet").unwrap_or_default().parse()?;
    let config = GameConfig {
        size,
        fleet,
        ..GameConfig::default()
    };
    let generator = FleetGenerator::from_config(&config)?;

    let (mut layout_rng, computer_rng) = match matches.value_of("seed") {
        Some(_) => {
            let seed = value_t!(matches, "seed", u64).unwrap_or_else(|e| e.exit());
            info!("using seed {}", seed);
            (
                StdRng::seed_from_u64(seed),
                StdRng::seed_from_u64(seed.wrapping_add(1)),
            )
        }
        None => (StdRng::from_entropy(), StdRng::from_entropy()),
    };

    greet(&config);

    let mut reader = InputReader::new(BufReader::new(io::stdin()));
    let human_side = match choose_first(&matches, &mut reader, &mut layout_rng) {
        Ok(side) => side,
        Err(err) if err.kind() == io::ErrorKind::UnexpectedEof => return Ok(()),
        Err(err) => return Err(err.into()),
    };
    let computer_side = human_side.opponent();

    let human: Box<dyn Player> = Box::new(Human::new("You", ConsoleInput::new(reader, size)));
    let computer: Box<dyn Player> = Box::new(Computer::new("Computer", computer_rng));
    let mut game = match human_side {
        Side::First => Match::new(human, computer),
        Side::Second => Match::new(computer, human),
    };
    game.setup(&generator, &mut RandomPlacement::new(layout_rng))?;
    game.set_hidden(computer_side, !matches.is_present("reveal"));

    while let Some(side) = game.active() {
        if side == human_side {
            show_boards(&game, human_side);
        }
        let report = match game.play_turn() {
            Ok(report) => report,
            Err(MatchError::Player(PlayerError::InputClosed)) => {
                println!("Goodbye!");
                return Ok(());
            }
            Err(err) => return Err(err.into()),
        };
        if report.side == computer_side {
            println!("Computer fires at: {}", report.target);
        }
        println!(
            "{}",
            match report.outcome {
                ShotOutcome::Miss => "Miss!",
                ShotOutcome::Hit => "Ship hit!",
                ShotOutcome::Sunk => "Ship destroyed!",
            }
        );
        if report.side == human_side && report.outcome.keeps_turn() && game.active().is_some()
        {
            println!("Fire again!");
        }
    }

    game.set_hidden(computer_side, false);
    show_boards(&game, human_side);
    match game.winner() {
        Some(side) if side == human_side => println!("All enemy ships are sunk. You win!"),
        Some(_) => println!("Your fleet is gone. The computer wins."),
        None => {}
    }
    Ok(())
}

/// Print the rules and the glyph legend.
fn greet(config: &GameConfig) {
    println!("Welcome to Sea Battle!");
    println!();
    println!(
        "Each side hides a fleet of ships with lengths {} on a {}x{} board.",
        config.fleet, config.size, config.size
    );
    println!("Ships are straight and never touch each other, not even at the corners.");
    println!("Hitting a ship lets you fire again. Sink the whole enemy fleet to win.");
    println!(
        "Enter targets as row and column, from 1 to {}, like \"2 3\" or \"2,3\".",
        config.size
    );
    println!(
        "Legend: {} water, {} ship, {} hit, {} miss, {} around a sunk ship.",
        glyph(CellState::Empty),
        glyph(CellState::Ship),
        glyph(CellState::Hit),
        glyph(CellState::Miss),
        glyph(CellState::Blocked),
    );
    println!();
}

/// Choose which [`Side`] the human plays based on either args or cli input.
fn choose_first<B: BufRead>(
    matches: &ArgMatches,
    input: &mut InputReader<B>,
    rng: &mut impl Rng,
) -> io::Result<Side> {
    Ok(if let Some(clichoice) = matches.value_of("first") {
        match clichoice.to_ascii_lowercase().as_str() {
            "human" | "me" => Side::First,
            "computer" | "bot" => Side::Second,
            _ if rng.gen() => Side::First,
            _ => Side::Second,
        }
    } else {
        input.read_input_lower("Do you want to go first? (Y/n)", |input| match input {
            "yes" | "y" | "first" | "1" | "1st" | "" => Some(Side::First),
            "no" | "n" | "second" | "2" | "2nd" => Some(Side::Second),
            _ => {
                println!("Invalid selection.");
                None
            }
        })?
    })
}

/// Print the human's own board followed by the enemy board.
fn show_boards(game: &Match, human_side: Side) {
    let computer_side = human_side.opponent();
    if let (Some(own), Some(enemy)) = (game.board(human_side), game.board(computer_side)) {
        println!();
        println!("Your board:");
        print!("{}", BoardView(own));
        println!();
        println!("Enemy board ({} ships left):", enemy.live_ships());
        print!("{}", BoardView(enemy));
        println!();
    }
}
