use log::{debug, info};
use rand::rngs::StdRng;
use rand::SeedableRng;

use super::blend::Blend;
use super::operators::{crossover, mutate, random_population, tournament_selection};
use crate::config::{traits::ConfigSection, EvolutionConfig};
use crate::engines::evaluation::BlendEvaluator;
use crate::error::{BlendoptError, Result};
use crate::types::OptimizationResult;

/// Receives notifications as an evolution run advances
pub trait ProgressCallback: Send {
    fn on_generation_start(&mut self, generation: usize);
    fn on_generation_complete(&mut self, generation: usize, best_fitness: f64);
}

/// Drives the generational search
///
/// Each generation scores the whole population, records the generation best,
/// then builds the next population from one elite copy of that best plus
/// offspring produced by tournament selection, crossover and mutation.
/// Termination is purely generation-count based.
pub struct EvolutionEngine {
    config: EvolutionConfig,
    evaluator: BlendEvaluator,
    rng: StdRng,
}

impl EvolutionEngine {
    pub fn new(config: EvolutionConfig, evaluator: BlendEvaluator) -> Result<Self> {
        config.validate()?;

        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        Ok(Self {
            config,
            evaluator,
            rng,
        })
    }

    pub fn evaluator(&self) -> &BlendEvaluator {
        &self.evaluator
    }

    /// Run the full search and return the best blend found
    pub fn run<C: ProgressCallback>(&mut self, mut callback: C) -> Result<OptimizationResult> {
        let components = self.evaluator.components().len();
        info!(
            "starting evolution: {} generations, population {}, {} components",
            self.config.generations, self.config.population_size, components
        );

        let mut population =
            random_population(self.config.population_size, components, &mut self.rng)?;

        let mut trajectory = Vec::with_capacity(self.config.generations);
        let mut best_blend: Option<Blend> = None;
        let mut best_fitness = f64::INFINITY;

        for generation in 0..self.config.generations {
            callback.on_generation_start(generation);

            let fitness = self.evaluator.evaluate_population(&population)?;

            // Generation best; ties resolve to the first occurrence
            let mut gen_best_idx = 0;
            for (idx, value) in fitness.iter().enumerate() {
                if *value < fitness[gen_best_idx] {
                    gen_best_idx = idx;
                }
            }
            let gen_best_fitness = fitness[gen_best_idx];
            trajectory.push(gen_best_fitness);

            if gen_best_fitness < best_fitness {
                best_fitness = gen_best_fitness;
                best_blend = Some(population[gen_best_idx].clone());
            }

            callback.on_generation_complete(generation, gen_best_fitness);

            // Elitism: the generation best survives into the next population
            // unchanged; the remaining slots are filled with offspring
            let mut next_generation = Vec::with_capacity(self.config.population_size);
            next_generation.push(population[gen_best_idx].clone());

            while next_generation.len() < self.config.population_size {
                let parent1 = tournament_selection(
                    &population,
                    &fitness,
                    self.config.tournament_size,
                    &mut self.rng,
                );
                let parent2 = tournament_selection(
                    &population,
                    &fitness,
                    self.config.tournament_size,
                    &mut self.rng,
                );

                let child = crossover(
                    &parent1,
                    &parent2,
                    self.config.crossover_rate,
                    &mut self.rng,
                )?;
                let child = mutate(
                    &child,
                    self.config.mutation_rate,
                    self.config.mutation_sigma,
                    &mut self.rng,
                )?;

                next_generation.push(child);
            }

            population = next_generation;
        }

        // validate() guarantees at least one generation ran
        let best_blend = best_blend.ok_or_else(|| {
            BlendoptError::Configuration("Generation count must be positive".to_string())
        })?;

        let best_cost = self.evaluator.cost(&best_blend)?;
        let best_penalty = self.evaluator.penalty(&best_blend)?;
        debug!("run complete: best fitness {:.6}", best_fitness);

        Ok(OptimizationResult {
            best_blend,
            best_fitness,
            best_cost,
            best_penalty,
            trajectory,
        })
    }
}
