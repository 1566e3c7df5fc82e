#[cfg(test)]
#[path = "../../tests/unit/solver/builder_test.rs"]
mod builder_test;

use crate::checker::check_allocation;
use crate::models::{Allocation, Problem};
use crate::solver::MethodType;
use crate::utils::{Environment, GenericError, GenericResult, Timer};
use crate::validation::validate_problem;
use std::time::Duration;

/// Keeps an allocation built by a specific method.
#[derive(Clone, Debug)]
pub struct MethodSolution {
    /// A method used to build the allocation.
    pub method: MethodType,
    /// An allocation.
    pub allocation: Allocation,
    /// Total shipping cost of the allocation.
    pub total_cost: i128,
    /// Time spent by the method.
    pub duration: Duration,
}

/// Provides configurable way to build a solver pipeline.
pub struct Builder {
    methods: Vec<MethodType>,
    environment: Environment,
    is_check_enabled: bool,
}

impl Default for Builder {
    fn default() -> Self {
        Self { methods: MethodType::all(), environment: Environment::default(), is_check_enabled: false }
    }
}

impl Builder {
    /// Sets methods to be run in the given order.
    /// Default is all methods.
    pub fn with_methods(mut self, methods: Vec<MethodType>) -> Self {
        self.methods = methods;
        self
    }

    /// Sets environment.
    /// Default is environment with logging to stdout.
    pub fn with_environment(mut self, environment: Environment) -> Self {
        self.environment = environment;
        self
    }

    /// Sets whether every allocation should be checked for feasibility.
    /// Default is false.
    pub fn with_check(mut self, is_check_enabled: bool) -> Self {
        self.is_check_enabled = is_check_enabled;
        self
    }

    /// Builds a solver pipeline.
    pub fn build(self) -> SolverPipeline {
        (self.environment.logger)(&format!(
            "configured to use methods: {}",
            self.methods.iter().map(|method| method.to_string()).collect::<Vec<_>>().join(", ")
        ));

        SolverPipeline { methods: self.methods, environment: self.environment, is_check_enabled: self.is_check_enabled }
    }
}

/// Runs configured methods one by one against the same problem.
pub struct SolverPipeline {
    methods: Vec<MethodType>,
    environment: Environment,
    is_check_enabled: bool,
}

impl SolverPipeline {
    /// Validates the problem and runs all configured methods. Nothing is run when validation
    /// fails.
    pub fn run(&self, problem: &Problem) -> GenericResult<Vec<MethodSolution>> {
        let logger = &self.environment.logger;

        validate_problem(problem)?;

        logger(&format!(
            "problem has {} sources and {} destinations, total supply is {}",
            problem.sources(),
            problem.destinations(),
            problem.total_supply()
        ));

        let timer = Timer::start();

        let solutions = self
            .methods
            .iter()
            .map(|&method| -> GenericResult<MethodSolution> {
                let solver = method.create_solver();
                let (allocation, duration) = Timer::measure_duration(|| solver.solve(problem));
                let allocation = allocation?;
                let total_cost = allocation.total_cost(&problem.costs);

                logger(&format!(
                    "[{}ms] {} built allocation with total cost {total_cost}, occupied cells: {}",
                    duration.as_millis(),
                    solver.name(),
                    allocation.occupied_cells()
                ));

                if self.is_check_enabled {
                    check_allocation(problem, &allocation).map_err(|errors| {
                        GenericError::from(format!("{} produced infeasible allocation:\n{}", method, errors.join("\n")))
                    })?;
                }

                Ok(MethodSolution { method, allocation, total_cost, duration })
            })
            .collect::<GenericResult<Vec<_>>>()?;

        logger(&format!("[{}ms] all methods are completed", timer.elapsed_millis()));

        Ok(solutions)
    }
}
