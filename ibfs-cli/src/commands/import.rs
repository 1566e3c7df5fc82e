#[cfg(test)]
#[path = "../../tests/unit/commands/import_test.rs"]
mod import_test;

use super::*;
use ibfs_cli::extensions::import::{import_problem, write_json_problem};
use std::io::BufReader;

const FORMAT_ARG_NAME: &str = "FORMAT";
const INPUT_ARG_NAME: &str = "input-file";
const OUT_RESULT_ARG_NAME: &str = "out-result";

pub fn get_import_app() -> Command {
    Command::new("import")
        .about("Converts a problem from csv tableau format to json format")
        .arg(
            Arg::new(FORMAT_ARG_NAME)
                .help("Specifies input format")
                .required(true)
                .value_parser(["csv", "json"])
                .index(1),
        )
        .arg(
            Arg::new(INPUT_ARG_NAME)
                .help("Sets input file which contains a problem definition")
                .short('i')
                .long(INPUT_ARG_NAME)
                .required(true),
        )
        .arg(
            Arg::new(OUT_RESULT_ARG_NAME)
                .help("Specifies path to file for result output")
                .short('o')
                .long(OUT_RESULT_ARG_NAME)
                .required(false),
        )
}

/// Runs import command.
pub fn run_import(
    matches: &ArgMatches,
    out_writer_func: fn(Option<File>) -> BufWriter<Box<dyn Write>>,
) -> GenericResult<()> {
    let input_format = get_required_value(matches, FORMAT_ARG_NAME)?;
    let input_path = get_required_value(matches, INPUT_ARG_NAME)?;

    let problem = import_problem(input_format, BufReader::new(open_file(input_path, "input")?))
        .map_err(|err| format!("cannot import problem: '{err}'"))?;

    let out_buffer = out_writer_func(get_out_file(matches, OUT_RESULT_ARG_NAME)?);

    write_json_problem(out_buffer, &problem)
}
