use prodmix_solver::{Engine, OptionLabel, ProductionProblem};

#[test]
fn two_products_balanced_mix_wins() {
    let problem = ProductionProblem::new(
        vec![50.0, 40.0],
        vec![vec![1.0, 2.0], vec![1.5, 1.0]],
        vec![750.0, 1000.0],
    )
    .unwrap();

    let evaluation = Engine::new().evaluate(&problem).unwrap();

    assert_eq!(evaluation.options.len(), 2);
    assert_eq!(evaluation.options[0].variable, 1);
    assert_eq!(evaluation.options[0].units_produced, 500);
    assert!((evaluation.options[0].profit - 25000.0).abs() < 1e-6);
    assert_eq!(evaluation.options[1].variable, 2);
    assert_eq!(evaluation.options[1].units_produced, 500);
    assert!((evaluation.options[1].profit - 20000.0).abs() < 1e-6);

    assert_eq!(evaluation.balanced.units, vec![375, 250]);
    assert!((evaluation.balanced.profit - 28750.0).abs() < 1e-6);

    assert_eq!(evaluation.decision.label, OptionLabel::Balanced);
    assert_eq!(evaluation.decision.label.to_string(), "BALANCED");
    assert!((evaluation.decision.profit - 28750.0).abs() < 1e-6);
}

#[test]
fn three_products_from_prompt_example() {
    // Rows are products; columns are resources
    let problem = ProductionProblem::new(
        vec![3000.0, 2000.0, 3000.0],
        vec![
            vec![2.0, 1.0, 8.0],
            vec![4.0, 2.0, 0.0],
            vec![5.0, 4.0, 3.0],
        ],
        vec![300.0, 200.0, 300.0],
    )
    .unwrap();

    let evaluation = Engine::new().evaluate(&problem).unwrap();

    // min(150, 200, 37.5) = 37
    assert_eq!(evaluation.options[0].units_produced, 37);
    // min(75, 100) = 75
    assert_eq!(evaluation.options[1].units_produced, 75);
    // min(60, 50, 100) = 50
    assert_eq!(evaluation.options[2].units_produced, 50);

    // x = 25, y = 20.83, z = 33.33
    assert_eq!(evaluation.balanced.units, vec![25, 20, 33]);
    let expected = 3000.0 * 25.0 + 2000.0 * 20.0 + 3000.0 * 33.0;
    assert!((evaluation.balanced.profit - expected).abs() < 1e-6);

    assert_eq!(evaluation.decision.label, OptionLabel::Balanced);
}
