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
use std::io::{self, BufRead, Write};

use once_cell::sync::Lazy;
use regex::Regex;

use seabattle::{
    board::{Board, CannotShootReason, Coordinate, ShotError},
    game::{PlayerError, TargetInput},
};

/// Helper to read input from the player.
pub struct InputReader<B> {
    read: B,
    buf: String,
}

impl<B> InputReader<B> {
    pub fn new(read: B) -> Self {
        Self {
            read,
            buf: String::new(),
        }
    }
}

impl<B: BufRead> InputReader<B> {
    /// Repeatedly tries to read input until the input checker returns `Some`. Converts
    /// to ascii lower before running the checker.
    pub fn read_input_lower<F, T>(&mut self, prompt: &str, mut checker: F) -> io::Result<T>
    where
        F: FnMut(&str) -> Option<T>,
    {
        loop {
            self.read_input_inner(prompt)?;
            self.buf.make_ascii_lowercase();
            if let Some(val) = checker(self.buf.trim()) {
                return Ok(val);
            }
        }
    }

    /// Repeatedly tries to read input until the input checker returns `Some`.
    pub fn read_input<F, T>(&mut self, prompt: &str, mut checker: F) -> io::Result<T>
    where
        F: FnMut(&str) -> Option<T>,
    {
        loop {
            self.read_input_inner(prompt)?;
            if let Some(val) = checker(self.buf.trim()) {
                return Ok(val);
            }
        }
    }

    /// Print the prompt, clear the buffer and read a line. End of input is reported as
    /// [`io::ErrorKind::UnexpectedEof`].
    fn read_input_inner(&mut self, prompt: &str) -> io::Result<()> {
        print!("{} ", prompt);
        io::stdout().flush()?;
        self.buf.clear();
        if self.read.read_line(&mut self.buf)? == 0 {
            println!();
            return Err(io::ErrorKind::UnexpectedEof.into());
        }
        Ok(())
    }
}

/// Parse a target typed as `row col` or `row,col`. Range is not checked here.
pub fn parse_target(input: &str) -> Option<Coordinate> {
    static TARGET: Lazy<Regex> = Lazy::new(|| {
        Regex::new(r"^(?P<row>[0-9]+)(?:\s*,\s*|\s+)(?P<col>[0-9]+)$").unwrap()
    });
    let captures = TARGET.captures(input)?;
    let row = captures.name("row")?.as_str().parse().ok()?;
    let col = captures.name("col")?.as_str().parse().ok()?;
    Some(Coordinate::new(row, col))
}

/// Reads targets for the human player from the console.
pub struct ConsoleInput<B> {
    reader: InputReader<B>,
    size: usize,
}

impl<B: BufRead> ConsoleInput<B> {
    /// Create console input for an opponent board of `size`x`size`.
    pub fn new(reader: InputReader<B>, size: usize) -> Self {
        Self { reader, size }
    }
}

impl<B: BufRead> TargetInput for ConsoleInput<B> {
    fn read_target(&mut self, _opponent: &Board) -> Result<Coordinate, PlayerError> {
        let size = self.size;
        self.reader
            .read_input("Your target (row col):", |input| {
                let target = parse_target(input);
                if target.is_none() {
                    println!(
                        "Enter two numbers between 1 and {}, row first, like \"2 3\" or \"2,3\".",
                        size
                    );
                }
                target
            })
            .map_err(|err| match err.kind() {
                io::ErrorKind::UnexpectedEof => PlayerError::InputClosed,
                _ => PlayerError::Io(err),
            })
    }

    fn rejected(&mut self, error: &ShotError) {
        match error.reason() {
            CannotShootReason::OutOfBounds => println!(
                "{} is off the board. Rows and columns go from 1 to {}.",
                error.coord(),
                self.size
            ),
            CannotShootReason::AlreadyUsed => {
                println!("You already know what is at {}. Pick another cell.", error.coord())
            }
        }
    }
}
