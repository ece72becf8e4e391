use rayon::prelude::*;

use crate::config::{ComponentTable, PenaltyWeights, Specification};
use crate::engines::generation::Blend;
use crate::error::{BlendoptError, Result};
use crate::types::BlendProperties;

/// Scores candidate blends against component data and quality limits
///
/// Holds the immutable inputs of a run: the component table, the blend
/// specification and the penalty weights. Fitness is raw blend cost plus a
/// weighted penalty per violated constraint, minimized by the search. The
/// two terms are deliberately on different scales, so an infeasible blend
/// never outranks a feasible one on cost alone.
pub struct BlendEvaluator {
    components: ComponentTable,
    specs: Specification,
    weights: PenaltyWeights,
}

impl BlendEvaluator {
    pub fn new(components: ComponentTable, specs: Specification, weights: PenaltyWeights) -> Self {
        Self {
            components,
            specs,
            weights,
        }
    }

    pub fn components(&self) -> &ComponentTable {
        &self.components
    }

    pub fn specs(&self) -> &Specification {
        &self.specs
    }

    fn check_len(&self, blend: &Blend) -> Result<()> {
        if blend.len() != self.components.len() {
            return Err(BlendoptError::InvalidCandidate(format!(
                "expected {} proportions, got {}",
                self.components.len(),
                blend.len()
            )));
        }
        Ok(())
    }

    fn dot(blend: &Blend, column: &[f64]) -> f64 {
        blend.iter().zip(column).map(|(p, v)| p * v).sum()
    }

    /// Blended quality properties: proportion-weighted average of each column
    pub fn properties(&self, blend: &Blend) -> Result<BlendProperties> {
        self.check_len(blend)?;
        Ok(BlendProperties {
            octane: Self::dot(blend, &self.components.octane),
            vapor_pressure: Self::dot(blend, &self.components.vapor_pressure),
            benzene: Self::dot(blend, &self.components.benzene),
            sulfur: Self::dot(blend, &self.components.sulfur),
        })
    }

    /// Raw blend cost per liter
    pub fn cost(&self, blend: &Blend) -> Result<f64> {
        self.check_len(blend)?;
        Ok(Self::dot(blend, &self.components.costs))
    }

    /// Weighted sum of constraint violations; zero for a feasible blend
    ///
    /// Octane is a minimum constraint, the rest are maxima. Simultaneous
    /// violations compound additively.
    pub fn penalty(&self, blend: &Blend) -> Result<f64> {
        let props = self.properties(blend)?;
        let mut penalty = 0.0;
        if props.octane < self.specs.octane_min {
            penalty += self.weights.octane_deficit * (self.specs.octane_min - props.octane);
        }
        if props.vapor_pressure > self.specs.vapor_pressure_max {
            penalty += self.weights.vapor_pressure_excess
                * (props.vapor_pressure - self.specs.vapor_pressure_max);
        }
        if props.benzene > self.specs.benzene_max {
            penalty += self.weights.benzene_excess * (props.benzene - self.specs.benzene_max);
        }
        if props.sulfur > self.specs.sulfur_max {
            penalty += self.weights.sulfur_excess * (props.sulfur - self.specs.sulfur_max);
        }
        Ok(penalty)
    }

    /// Cost plus penalty; lower is better
    pub fn fitness(&self, blend: &Blend) -> Result<f64> {
        Ok(self.cost(blend)? + self.penalty(blend)?)
    }

    /// Fitness of every population member, in order
    ///
    /// Evaluation reads only the frozen tables, so members are scored in
    /// parallel. Results are position-stable regardless of scheduling.
    pub fn evaluate_population(&self, population: &[Blend]) -> Result<Vec<f64>> {
        population.par_iter().map(|blend| self.fitness(blend)).collect()
    }
}
