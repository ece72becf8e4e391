use rand::Rng;
use rand_distr::StandardNormal;

use super::blend::{normalize, Blend};
use crate::error::Result;

/// Draw a random blend: uniform proportions normalized to sum to 1
pub fn random_blend<R: Rng>(components: usize, rng: &mut R) -> Result<Blend> {
    let mut blend: Blend = (0..components).map(|_| rng.gen::<f64>()).collect();
    normalize(&mut blend)?;
    Ok(blend)
}

/// Initial population of independent random blends
pub fn random_population<R: Rng>(size: usize, components: usize, rng: &mut R) -> Result<Vec<Blend>> {
    (0..size).map(|_| random_blend(components, rng)).collect()
}

/// Tournament selection: best of K members drawn with replacement
///
/// Returns a copy of the lowest-fitness member among the drawn set; ties
/// keep the first occurrence of the minimum.
pub fn tournament_selection<R: Rng>(
    population: &[Blend],
    fitness: &[f64],
    tournament_size: usize,
    rng: &mut R,
) -> Blend {
    let mut best_idx = rng.gen_range(0..population.len());

    for _ in 1..tournament_size {
        let idx = rng.gen_range(0..population.len());
        if fitness[idx] < fitness[best_idx] {
            best_idx = idx;
        }
    }

    population[best_idx].clone()
}

/// Uniform crossover with renormalization
///
/// With probability `crossover_rate`, each position takes parent1's or
/// parent2's value on an independent coin flip and the child is rescaled to
/// sum to 1. Otherwise the child is a copy of parent1.
pub fn crossover<R: Rng>(
    parent1: &Blend,
    parent2: &Blend,
    crossover_rate: f64,
    rng: &mut R,
) -> Result<Blend> {
    if rng.gen::<f64>() >= crossover_rate {
        return Ok(parent1.clone());
    }

    let mut child: Blend = parent1
        .iter()
        .zip(parent2)
        .map(|(a, b)| if rng.gen::<bool>() { *a } else { *b })
        .collect();
    normalize(&mut child)?;
    Ok(child)
}

/// Single-gene Gaussian mutation
///
/// With probability `mutation_rate`, one uniformly chosen position receives
/// Gaussian noise with standard deviation `sigma`; all positions are then
/// made non-negative and the blend is renormalized. Exactly one gene is
/// perturbed per mutation event.
pub fn mutate<R: Rng>(
    blend: &Blend,
    mutation_rate: f64,
    sigma: f64,
    rng: &mut R,
) -> Result<Blend> {
    if rng.gen::<f64>() >= mutation_rate {
        return Ok(blend.clone());
    }

    let mut mutated = blend.clone();
    let idx = rng.gen_range(0..mutated.len());
    let noise: f64 = rng.sample(StandardNormal);
    mutated[idx] += noise * sigma;

    for p in mutated.iter_mut() {
        *p = p.abs();
    }
    normalize(&mut mutated)?;
    Ok(mutated)
}
