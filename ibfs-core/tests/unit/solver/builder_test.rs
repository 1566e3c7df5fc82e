use super::*;
use crate::helpers::models::{create_example_problem, create_problem};
use std::cell::RefCell;
use std::rc::Rc;
use std::sync::Arc;

fn create_logging_environment() -> (Environment, Rc<RefCell<Vec<String>>>) {
    let messages = Rc::new(RefCell::new(Vec::new()));
    let sink = messages.clone();

    (Environment::new(Arc::new(move |msg: &str| sink.borrow_mut().push(msg.to_string()))), messages)
}

#[test]
fn can_run_all_methods_by_default() {
    let problem = create_example_problem();

    let solutions =
        Builder::default().with_environment(Environment::silent()).with_check(true).build().run(&problem).unwrap();

    assert_eq!(
        solutions.iter().map(|solution| (solution.method, solution.total_cost)).collect::<Vec<_>>(),
        vec![(MethodType::NorthWestCorner, 750), (MethodType::Vogel, 655), (MethodType::Russell, 780)]
    );
}

#[test]
fn can_run_every_method_on_untouched_problem() {
    let problem = create_example_problem();
    let original = problem.clone();

    let solutions = Builder::default()
        .with_methods(vec![MethodType::Russell, MethodType::NorthWestCorner, MethodType::Vogel])
        .with_environment(Environment::silent())
        .build()
        .run(&problem)
        .unwrap();

    assert_eq!(problem, original);
    assert_eq!(solutions.len(), 3);
    assert_eq!(solutions[1].allocation.to_rows(), vec![vec![10, 10, 0, 0], vec![0, 15, 15, 0], vec![0, 0, 10, 15]]);
    solutions.iter().for_each(|solution| assert_eq!(solution.allocation.total_units(), 75));
}

#[test]
fn can_refuse_unbalanced_problem_without_running_methods() {
    let problem = create_problem(vec![20, 30], vec![10, 25], vec![vec![1, 2], vec![3, 4]]);
    let (environment, messages) = create_logging_environment();

    let result = Builder::default().with_environment(environment).build().run(&problem);

    assert_eq!(result.unwrap_err().to_string(), "problem is not balanced: total supply is 50, total demand is 35");
    assert!(messages.borrow().iter().all(|msg| !msg.contains("built allocation")));
}

#[test]
fn can_log_progress() {
    let (environment, messages) = create_logging_environment();

    Builder::default()
        .with_methods(vec![MethodType::Vogel])
        .with_environment(environment)
        .build()
        .run(&create_example_problem())
        .unwrap();

    let messages = messages.borrow();
    assert_eq!(messages[0], "configured to use methods: vogel");
    assert_eq!(messages[1], "problem has 3 sources and 4 destinations, total supply is 75");
    assert!(messages[2].ends_with("vogel built allocation with total cost 655, occupied cells: 6"));
    assert!(messages[3].ends_with("all methods are completed"));
}

parameterized_test! {can_parse_method_type, (name, expected), {
    assert_eq!(name.parse::<MethodType>().ok(), expected);
}}

can_parse_method_type! {
    case01_nwc_full: ("north-west-corner", Some(MethodType::NorthWestCorner)),
    case02_nwc_short: ("nwc", Some(MethodType::NorthWestCorner)),
    case03_vogel: ("Vogel", Some(MethodType::Vogel)),
    case04_vam: ("vam", Some(MethodType::Vogel)),
    case05_russell: ("russell", Some(MethodType::Russell)),
    case06_ram: ("RAM", Some(MethodType::Russell)),
    case07_unknown: ("modi", None),
}

#[test]
fn can_display_method_type_as_parsable_name() {
    MethodType::all().into_iter().for_each(|method| {
        assert_eq!(method.to_string().parse::<MethodType>().unwrap(), method);
        assert_eq!(method.create_solver().name(), method.to_string());
    });
}
