mod balanced;
mod engine;
mod numeric;
mod problem;
mod saturation;
mod select;
mod solution;

pub use balanced::{BalancedSolution, BalancedSolver};
pub use engine::Engine;
pub use problem::{InputField, ProductionProblem, ValidationError};
pub use saturation::SaturationEvaluator;
pub use select::OptionSelector;
pub use solution::{BalancedOption, Decision, Evaluation, OptionLabel, SingleVariableOption, SolveError};
