use std::fmt::Write;

use prodmix_solver::{Evaluation, OptionLabel, ProductionProblem};

/// Render an evaluation as a plain-text table
pub fn render(evaluation: &Evaluation) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "{:12} {:>12} {:>14}", "Option", "Units", "Profit");
    for option in &evaluation.options {
        let label = OptionLabel::Variable(option.variable).to_string();
        let _ = writeln!(out, "{:12} {:>12} {:>14.2}", label, option.units_produced, option.profit);
    }

    let units = evaluation
        .balanced
        .units
        .iter()
        .map(|u| u.to_string())
        .collect::<Vec<_>>()
        .join(" ");
    let _ = writeln!(
        out,
        "{:12} {:>12} {:>14.2}",
        OptionLabel::Balanced.to_string(),
        units,
        evaluation.balanced.profit
    );

    let _ = writeln!(out);
    let _ = writeln!(
        out,
        "Best option: {} with profit {:.2}",
        evaluation.decision.label, evaluation.decision.profit
    );
    out
}

/// Summarize a problem that passed validation
pub fn render_check(problem: &ProductionProblem) -> String {
    let mut out = String::new();
    let n = problem.num_variables();
    let _ = writeln!(out, "✓ problem is valid");
    let _ = writeln!(out, "  {} variables", n);
    let _ = writeln!(out, "  {} resources", n);
    let zero_rows = problem
        .consumption()
        .iter()
        .filter(|row| row.iter().all(|&x| x == 0.0))
        .count();
    if zero_rows > 0 {
        let _ = writeln!(out, "  unbounded (no resource use): {}", zero_rows);
    }
    out
}
