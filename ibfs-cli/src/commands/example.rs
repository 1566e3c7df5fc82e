#[cfg(test)]
#[path = "../../tests/unit/commands/example_test.rs"]
mod example_test;

use super::*;
use crate::commands::solve::write_solutions;
use ibfs_core::solver::Builder;
use ibfs_core::utils::Environment;
use ibfs_cli::extensions::import::create_example_problem;

const OUT_RESULT_ARG_NAME: &str = "out-result";
const LOG_ARG_NAME: &str = "log";

pub fn get_example_app() -> Command {
    Command::new("example")
        .about("Runs all methods on a small built-in problem")
        .arg(
            Arg::new(OUT_RESULT_ARG_NAME)
                .help("Specifies path to file for result output")
                .short('o')
                .long(OUT_RESULT_ARG_NAME)
                .required(false),
        )
        .arg(
            Arg::new(LOG_ARG_NAME)
                .help("Specifies whether default logging is enabled")
                .long(LOG_ARG_NAME)
                .required(false)
                .action(ArgAction::SetTrue),
        )
}

/// Runs all methods on the example problem.
pub fn run_example(
    matches: &ArgMatches,
    out_writer_func: fn(Option<File>) -> BufWriter<Box<dyn Write>>,
) -> GenericResult<()> {
    let environment = if matches.get_flag(LOG_ARG_NAME) { Environment::default() } else { Environment::silent() };
    let problem = create_example_problem()?;

    let solutions = Builder::default().with_environment(environment).with_check(true).build().run(&problem)?;

    write_solutions(matches, &solutions, out_writer_func)
}
