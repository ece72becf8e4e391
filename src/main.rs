use anyhow::Context;
use blendopt::config::ConfigManager;
use blendopt::engines::evaluation::BlendEvaluator;
use blendopt::engines::generation::{ConsoleProgressCallback, EvolutionEngine};
use blendopt::report;
use std::env;

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let args: Vec<String> = env::args().collect();

    let manager = ConfigManager::new();
    if let Some(path) = args.get(1) {
        manager
            .load_from_file(path)
            .with_context(|| format!("loading config from {}", path))?;
    }
    let mut config = manager.get();

    if let Some(seed) = args.get(2) {
        let seed = seed.parse().context("seed must be an unsigned integer")?;
        config.evolution.seed = Some(seed);
    }

    println!("=== Fuel Blend Optimizer ===\n");
    println!("Configuration:");
    println!("  Components:      {}", config.components.len());
    println!("  Population size: {}", config.evolution.population_size);
    println!("  Generations:     {}", config.evolution.generations);
    println!("  Crossover rate:  {}", config.evolution.crossover_rate);
    println!("  Mutation rate:   {}", config.evolution.mutation_rate);
    println!();

    let evaluator = BlendEvaluator::new(config.components, config.specification, config.penalties);
    let mut engine = EvolutionEngine::new(config.evolution, evaluator)?;

    let result = engine.run(ConsoleProgressCallback)?;

    println!();
    println!("{}", report::render(engine.evaluator(), &result)?);

    if let (Some(first), Some(last)) = (result.trajectory.first(), result.trajectory.last()) {
        println!(
            "Convergence: best fitness {:.4} -> {:.4} over {} generations",
            first,
            last,
            result.trajectory.len()
        );
    }

    Ok(())
}
