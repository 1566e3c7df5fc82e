#[cfg(test)]
#[path = "../../tests/unit/commands/solve_test.rs"]
mod solve_test;

use super::*;
use ibfs_core::solver::MethodSolution;
use ibfs_cli::extensions::import::import_problem;
use ibfs_cli::extensions::solve::config::{Config, LoggingConfig, TelemetryConfig, create_builder_from_config, read_config};
use ibfs_cli::extensions::solve::write_json_solutions;
use std::io::BufReader;

const FORMAT_ARG_NAME: &str = "FORMAT";
const PROBLEM_ARG_NAME: &str = "PROBLEM";
const METHOD_ARG_NAME: &str = "method";
const CONFIG_ARG_NAME: &str = "config";
const OUT_RESULT_ARG_NAME: &str = "out-result";
const CHECK_ARG_NAME: &str = "check";
const LOG_ARG_NAME: &str = "log";

pub fn get_solve_app() -> Command {
    Command::new("solve")
        .about("Finds an initial basic feasible solution of a transportation problem")
        .arg(
            Arg::new(FORMAT_ARG_NAME)
                .help("Specifies the problem format")
                .required(true)
                .value_parser(["json", "csv"])
                .index(1),
        )
        .arg(Arg::new(PROBLEM_ARG_NAME).help("Sets the problem file to use").required(true).index(2))
        .arg(
            Arg::new(METHOD_ARG_NAME)
                .help("Specifies a method to run, can be repeated. Default is all methods")
                .short('m')
                .long(METHOD_ARG_NAME)
                .required(false)
                .action(ArgAction::Append)
                .value_parser(["north-west-corner", "nwc", "vogel", "vam", "russell", "ram"]),
        )
        .arg(
            Arg::new(CONFIG_ARG_NAME)
                .help("Specifies path to solver configuration file")
                .short('c')
                .long(CONFIG_ARG_NAME)
                .required(false),
        )
        .arg(
            Arg::new(OUT_RESULT_ARG_NAME)
                .help("Specifies path to file for result output")
                .short('o')
                .long(OUT_RESULT_ARG_NAME)
                .required(false),
        )
        .arg(
            Arg::new(CHECK_ARG_NAME)
                .help("Specifies whether every allocation should be checked for feasibility")
                .long(CHECK_ARG_NAME)
                .required(false)
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new(LOG_ARG_NAME)
                .help("Specifies whether default logging is enabled")
                .long(LOG_ARG_NAME)
                .required(false)
                .action(ArgAction::SetTrue),
        )
}

/// Runs solver commands.
pub fn run_solve(
    matches: &ArgMatches,
    out_writer_func: fn(Option<File>) -> BufWriter<Box<dyn Write>>,
) -> GenericResult<()> {
    let problem_format = get_required_value(matches, FORMAT_ARG_NAME)?;
    let problem_path = get_required_value(matches, PROBLEM_ARG_NAME)?;

    let problem = import_problem(problem_format, BufReader::new(open_file(problem_path, "problem")?))
        .map_err(|err| format!("cannot read problem from '{problem_path}': {err}"))?;

    let config = get_config(matches)?;
    let solutions = create_builder_from_config(&config)?.build().run(&problem)?;

    write_solutions(matches, &solutions, out_writer_func)
}

pub(crate) fn write_solutions(
    matches: &ArgMatches,
    solutions: &[MethodSolution],
    out_writer_func: fn(Option<File>) -> BufWriter<Box<dyn Write>>,
) -> GenericResult<()> {
    let out_buffer = out_writer_func(get_out_file(matches, OUT_RESULT_ARG_NAME)?);

    write_json_solutions(out_buffer, solutions)
}

/// Reads config file, if specified, and overrides it with command line arguments.
fn get_config(matches: &ArgMatches) -> GenericResult<Config> {
    let mut config = matches
        .get_one::<String>(CONFIG_ARG_NAME)
        .map(|path| open_file(path, "config").and_then(|file| read_config(BufReader::new(file))))
        .transpose()?
        .unwrap_or_default();

    if let Some(methods) = matches.get_many::<String>(METHOD_ARG_NAME) {
        config.methods = Some(methods.cloned().collect());
    }

    if matches.get_flag(CHECK_ARG_NAME) {
        config.check = Some(true);
    }

    if matches.get_flag(LOG_ARG_NAME) {
        config.telemetry = Some(TelemetryConfig { logging: Some(LoggingConfig { enabled: true }) });
    }

    Ok(config)
}
