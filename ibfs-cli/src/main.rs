//! A command line interface to find an initial basic feasible solution of a
//! *Transportation Problem*.
//!
//! ## Usage
//!
//! - run all methods on a problem defined in json format:
//!
//!     `ibfs-cli solve json problem.json`
//!
//! - run Vogel's and Russell's methods on a csv tableau, checking results and writing them
//!   to the file:
//!
//!     `ibfs-cli solve csv problem.csv -m vogel -m russell --check -o solutions.json`
//!
//! - convert a csv tableau into json format:
//!
//!     `ibfs-cli import csv -i problem.csv -o problem.json`
//!
//! For more details, simply run
//!
//!     ibfs-cli --help

#[cfg(test)]
#[path = "../tests/unit/main_test.rs"]
mod main_test;

mod commands;

use self::cli::*;

fn main() {
    let matches = get_app().get_matches();

    run_subcommand(matches);
}

mod cli {
    use super::commands::create_write_buffer;
    use super::commands::example::{get_example_app, run_example};
    use super::commands::import::{get_import_app, run_import};
    use super::commands::solve::{get_solve_app, run_solve};
    use clap::{ArgMatches, Command};
    use std::process;

    pub fn get_app() -> Command {
        Command::new("Transportation Problem IBFS Solver")
            .version(env!("CARGO_PKG_VERSION"))
            .author(env!("CARGO_PKG_AUTHORS"))
            .about("A command line interface to find an initial basic feasible solution of a Transportation Problem")
            .subcommand(get_solve_app())
            .subcommand(get_example_app())
            .subcommand(get_import_app())
    }

    pub fn run_subcommand(matches: ArgMatches) {
        let result = match matches.subcommand() {
            Some(("solve", solve_matches)) => run_solve(solve_matches, create_write_buffer),
            Some(("example", example_matches)) => run_example(example_matches, create_write_buffer),
            Some(("import", import_matches)) => run_import(import_matches, create_write_buffer),
            _ => Err("no subcommand was used. Use -h to print help information.".into()),
        };

        if let Err(err) = result {
            eprintln!("{err}");
            process::exit(1);
        }
    }
}
