#![recursion_limit = "1024"] // error_chain

use docopt::Docopt;
use itertools::Itertools;
use rand::Rng;
use serde_derive::Deserialize;
use tracing::info;
use tracing_subscriber::EnvFilter;
use maze_nav::{
    cells::Direction,
    generators,
    navigation::MoveResult,
    pathing,
    session::Session,
    units::{Height, Width},
};
use std::io;

const USAGE: &str = "Maze navigation driver

Usage:
    maze_nav_driver -h | --help
    maze_nav_driver [(--size=<n>|[--width=<w> --height=<h>])] [--seed=<s>] [--moves=<dirs>] [--solve]

Options:
    -h --help          Show this screen.
    --size=<n>         The grid size is n * n.
    --width=<w>        The grid width in a w*h grid [default: 10].
    --height=<h>       The grid height in a w*h grid [default: 10].
    --seed=<s>         Seed for the maze generator. A random seed is chosen and reported if not given.
    --moves=<dirs>     Directions to walk from the start cell, one letter per move: U, R, D or L.
    --solve            Show the route from the start cell to the goal cell, then walk it.

Set RUST_LOG (e.g. RUST_LOG=maze_nav=debug) for more detail.
";
#[derive(Debug, Deserialize)]
struct DriverArgs {
    flag_size: Option<usize>,
    flag_width: usize,
    flag_height: usize,
    flag_seed: Option<u64>,
    flag_moves: String,
    flag_solve: bool,
}

mod errors {
    use error_chain::error_chain;
    error_chain! {

        links {
            Maze(maze_nav::errors::Error, maze_nav::errors::ErrorKind);
        }

        foreign_links {
            DocOptFailure(::docopt::Error);
        }

        errors {
            UnknownDirection(letter: char) {
                description("unknown direction")
                display("unknown direction '{}', expected one of U, R, D or L", letter)
            }
        }
    }
}
use crate::errors::*;

fn main() -> Result<()> {

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(io::stderr)
        .init();

    let args: DriverArgs = match Docopt::new(USAGE).and_then(|d| d.deserialize()) {
        Ok(args) => args,
        Err(e) if e.fatal() => return Err(e.into()),
        Err(e) => e.exit(), // --help
    };

    let (width, height) = if let Some(square_grid_size) = args.flag_size {
        (square_grid_size, square_grid_size)
    } else {
        (args.flag_width, args.flag_height)
    };
    let seed = args.flag_seed.unwrap_or_else(|| rand::thread_rng().gen());

    // Check the moves before doing any work
    let moves = parse_moves(&args.flag_moves)?;

    info!(width, height, seed, "generating maze");
    let maze = generators::generate_seeded(Width(width), Height(height), seed)?;
    println!("Maze {}x{} seed {}: start {}, goal {}",
             width, height, seed, maze.start(), maze.goal());

    if !moves.is_empty() {
        let mut session = Session::new(&maze);
        walk(&mut session, &moves);
    }

    if args.flag_solve {
        let route = pathing::solve(&maze)
            .ok_or("The maze has no route from the start to the goal")?;
        println!("Route ({} moves): {}", route.len(), route.iter().map(|d| d.letter()).join(""));

        let mut session = Session::new(&maze);
        walk(&mut session, &route);
    }

    Ok(())
}

fn parse_moves(letters: &str) -> Result<Vec<Direction>> {
    letters.chars()
           .filter(|c| !c.is_whitespace() && *c != ',')
           .map(|c| Direction::from_letter(c).ok_or_else(|| ErrorKind::UnknownDirection(c).into()))
           .collect()
}

fn walk(session: &mut Session, moves: &[Direction]) {

    for &direction in moves {
        let from = session.position();
        let letter = direction.letter();

        match session.step(direction) {
            MoveResult::Blocked => println!("{} {} blocked", from, letter),
            MoveResult::Moved(to) => println!("{} {} -> {}", from, letter, to),
            MoveResult::GoalReached(to) => {
                println!("{} {} -> {} goal reached, back to {}",
                         from, letter, to, session.position())
            }
        }
    }

    println!("Stopped at {} after {} moves this run, goal reached {} time(s)",
             session.position(), session.moves(), session.completions());
}
