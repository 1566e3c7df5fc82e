use super::*;
use ibfs_cli::extensions::solve::JsonSolutions;

const JSON_PROBLEM_PATH: &str = "../data/problems/example.problem.json";
const CSV_PROBLEM_PATH: &str = "../data/problems/example.problem.csv";
const UNBALANCED_PROBLEM_PATH: &str = "../data/problems/unbalanced.problem.json";
const CONFIG_PATH: &str = "../data/config/config.full.json";

struct DummyWrite {}

impl Write for DummyWrite {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

fn run_solve_with_out_writer(matches: &ArgMatches) -> GenericResult<()> {
    run_solve(matches, |_| BufWriter::new(Box::new(DummyWrite {})))
}

fn run_solve_with_out_file(params: &[&str]) -> JsonSolutions {
    let tmpfile = tempfile::NamedTempFile::new().unwrap();
    let args = [params, &["--out-result", tmpfile.path().to_str().unwrap()][..]].concat();
    let matches = get_solve_app().try_get_matches_from(args).unwrap();

    run_solve(&matches, create_write_buffer).unwrap();

    serde_json::from_reader(BufReader::new(tmpfile.reopen().unwrap())).unwrap()
}

#[test]
fn can_solve_json_problem_with_all_methods() {
    let solutions = run_solve_with_out_file(&["solve", "json", JSON_PROBLEM_PATH]);

    assert_eq!(
        solutions.solutions.iter().map(|solution| (solution.method.as_str(), solution.total_cost)).collect::<Vec<_>>(),
        vec![("north-west-corner", 750), ("vogel", 655), ("russell", 780)]
    );
}

#[test]
fn can_solve_csv_problem_with_selected_methods() {
    let solutions = run_solve_with_out_file(&["solve", "csv", CSV_PROBLEM_PATH, "-m", "vam", "--method", "nwc", "--check"]);

    assert_eq!(
        solutions.solutions.iter().map(|solution| solution.method.as_str()).collect::<Vec<_>>(),
        vec!["vogel", "north-west-corner"]
    );
    assert_eq!(solutions.solutions[0].allocation, vec![vec![0, 15, 5, 0], vec![10, 0, 20, 0], vec![0, 10, 0, 15]]);
}

#[test]
fn can_override_config_methods_from_args() {
    let args = vec!["solve", "json", JSON_PROBLEM_PATH, "--config", CONFIG_PATH, "-m", "russell"];
    let matches = get_solve_app().try_get_matches_from(args).unwrap();

    let config = get_config(&matches).unwrap();

    assert_eq!(config.methods, Some(vec!["russell".to_string()]));
    assert_eq!(config.check, Some(true));
    assert!(config.is_logging_enabled());
}

#[test]
fn can_enable_check_and_logging_from_args() {
    let args = vec!["solve", "json", JSON_PROBLEM_PATH, "--check", "--log"];
    let matches = get_solve_app().try_get_matches_from(args).unwrap();

    let config = get_config(&matches).unwrap();

    assert!(config.methods.is_none());
    assert_eq!(config.check, Some(true));
    assert!(config.is_logging_enabled());
}

#[test]
fn can_solve_with_config() {
    let args = vec!["solve", "json", JSON_PROBLEM_PATH, "--config", CONFIG_PATH];
    let matches = get_solve_app().try_get_matches_from(args).unwrap();

    run_solve_with_out_writer(&matches).unwrap();
}

#[test]
fn can_refuse_unbalanced_problem() {
    let args = vec!["solve", "json", UNBALANCED_PROBLEM_PATH];
    let matches = get_solve_app().try_get_matches_from(args).unwrap();

    let result = run_solve_with_out_writer(&matches);

    assert_eq!(
        result.err().map(|err| err.to_string()),
        Some("problem is not balanced: total supply is 50, total demand is 35".to_string())
    );
}

#[test]
fn can_report_missing_problem_file() {
    let args = vec!["solve", "json", "../data/problems/not-existing.json"];
    let matches = get_solve_app().try_get_matches_from(args).unwrap();

    let result = run_solve_with_out_writer(&matches);

    assert!(result.unwrap_err().to_string().starts_with("cannot open problem file"));
}

#[test]
fn can_require_problem_path() {
    for format in &["json", "csv"] {
        get_solve_app().try_get_matches_from(vec!["solve", format]).unwrap_err();
    }
}

#[test]
fn can_reject_unknown_format_and_method() {
    get_solve_app().try_get_matches_from(vec!["solve", "xml", JSON_PROBLEM_PATH]).unwrap_err();
    get_solve_app().try_get_matches_from(vec!["solve", "json", JSON_PROBLEM_PATH, "-m", "modi"]).unwrap_err();
}
