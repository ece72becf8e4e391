use blendopt::config::{ComponentTable, EvolutionConfig, PenaltyWeights, Specification};
use blendopt::engines::evaluation::BlendEvaluator;
use blendopt::engines::generation::{
    ChannelProgressCallback, EvolutionEngine, ProgressCallback, ProgressMessage,
};

/// Counts generations as they complete
struct TestProgressCallback {
    completed: usize,
}

impl ProgressCallback for TestProgressCallback {
    fn on_generation_start(&mut self, _generation: usize) {}

    fn on_generation_complete(&mut self, _generation: usize, _best_fitness: f64) {
        self.completed += 1;
    }
}

fn default_evaluator() -> BlendEvaluator {
    BlendEvaluator::new(
        ComponentTable::default(),
        Specification::default(),
        PenaltyWeights::default(),
    )
}

fn seeded_config(seed: u64) -> EvolutionConfig {
    EvolutionConfig {
        seed: Some(seed),
        ..EvolutionConfig::default()
    }
}

#[test]
fn full_run_converges_to_a_feasible_low_cost_blend() {
    let evaluator = default_evaluator();

    // The equal-split blend is infeasible (octane 90 < 91), so the search
    // has to do real work to beat its cost with a feasible mixture
    let equal_split = vec![0.25; 4];
    assert!(evaluator.penalty(&equal_split).unwrap() > 0.0);
    let equal_split_cost = evaluator.cost(&equal_split).unwrap();

    let mut engine = EvolutionEngine::new(seeded_config(42), default_evaluator()).unwrap();
    let result = engine.run(TestProgressCallback { completed: 0 }).unwrap();

    assert_eq!(result.trajectory.len(), 100);

    let sum: f64 = result.best_blend.iter().sum();
    assert!((sum - 1.0).abs() < 1e-9);
    assert!(result.best_blend.iter().all(|p| *p >= 0.0));

    assert_eq!(result.best_penalty, 0.0, "best blend must be feasible");
    assert!(
        result.best_cost < equal_split_cost,
        "feasible optimum {:.4} should undercut the equal split at {:.4}",
        result.best_cost,
        equal_split_cost
    );
    assert!((result.best_fitness - result.best_cost).abs() < 1e-12);
}

#[test]
fn elitism_makes_the_trajectory_non_increasing() {
    let config = EvolutionConfig {
        population_size: 40,
        generations: 60,
        seed: Some(7),
        ..EvolutionConfig::default()
    };
    let mut engine = EvolutionEngine::new(config, default_evaluator()).unwrap();
    let result = engine.run(TestProgressCallback { completed: 0 }).unwrap();

    // The elite is copied unchanged and re-scored by the same deterministic
    // evaluator, so each generation's best can never regress
    for window in result.trajectory.windows(2) {
        assert!(
            window[1] <= window[0],
            "trajectory regressed: {} -> {}",
            window[0],
            window[1]
        );
    }
    assert_eq!(result.best_fitness, *result.trajectory.last().unwrap());
}

#[test]
fn seeded_runs_are_bit_identical() {
    let config = EvolutionConfig {
        population_size: 30,
        generations: 25,
        seed: Some(123),
        ..EvolutionConfig::default()
    };

    let mut first = EvolutionEngine::new(config.clone(), default_evaluator()).unwrap();
    let first_result = first.run(TestProgressCallback { completed: 0 }).unwrap();

    let mut second = EvolutionEngine::new(config, default_evaluator()).unwrap();
    let second_result = second.run(TestProgressCallback { completed: 0 }).unwrap();

    assert_eq!(first_result.trajectory, second_result.trajectory);
    assert_eq!(first_result.best_blend, second_result.best_blend);
    assert_eq!(first_result.best_fitness, second_result.best_fitness);
}

#[test]
fn callback_sees_every_generation() {
    let config = EvolutionConfig {
        population_size: 10,
        generations: 15,
        seed: Some(5),
        ..EvolutionConfig::default()
    };
    let mut engine = EvolutionEngine::new(config, default_evaluator()).unwrap();
    let (sender, receiver) = std::sync::mpsc::channel();
    engine.run(ChannelProgressCallback::new(sender)).unwrap();

    let messages: Vec<ProgressMessage> = receiver.try_iter().collect();
    let completions = messages
        .iter()
        .filter(|m| matches!(m, ProgressMessage::GenerationComplete { .. }))
        .count();
    assert_eq!(completions, 15);
}

#[test]
fn generalized_component_count_is_supported() {
    // A fifth, expensive but high-octane component; the invariants hold for
    // any table width
    let components = ComponentTable {
        costs: vec![2.50, 3.00, 1.80, 2.80, 3.50],
        octane: vec![95.0, 88.0, 85.0, 92.0, 98.0],
        vapor_pressure: vec![65.0, 55.0, 58.0, 64.0, 52.0],
        benzene: vec![2.5, 1.5, 1.2, 2.0, 1.0],
        sulfur: vec![60.0, 40.0, 35.0, 55.0, 30.0],
    };
    let evaluator = BlendEvaluator::new(
        components,
        Specification::default(),
        PenaltyWeights::default(),
    );

    let config = EvolutionConfig {
        population_size: 50,
        generations: 40,
        seed: Some(11),
        ..EvolutionConfig::default()
    };
    let mut engine = EvolutionEngine::new(config, evaluator).unwrap();
    let result = engine.run(TestProgressCallback { completed: 0 }).unwrap();

    assert_eq!(result.best_blend.len(), 5);
    let sum: f64 = result.best_blend.iter().sum();
    assert!((sum - 1.0).abs() < 1e-9);
}
