use crate::error::{BlendoptError, Result};

/// Candidate blend representation
///
/// A blend is a vector of volume fractions, one per fuel component, indexed
/// consistently with the columns of `ComponentTable`. Proportions are
/// non-negative and sum to 1.0; every genetic operator renormalizes its
/// output before handing a candidate back, so the invariant holds whenever a
/// blend reaches the evaluator or is stored in a population.
///
/// # Why proportions instead of absolute volumes?
///
/// Genetic operators stay trivial on a fraction vector:
/// - **Crossover**: mixing positions from two parents is array selection
/// - **Mutation**: perturbing one position is a single add
/// - **Validity**: renormalization restores the sum-to-one invariant after
///   any perturbation, so no operator can produce an unusable candidate
pub type Blend = Vec<f64>;

/// Rescale proportions in place so they sum to 1.0
///
/// Proportions are non-negative, so a zero sum means every entry collapsed
/// to zero and the candidate cannot be repaired.
pub fn normalize(blend: &mut Blend) -> Result<()> {
    let sum: f64 = blend.iter().sum();
    if sum <= 0.0 {
        return Err(BlendoptError::DegenerateRenormalization);
    }
    for p in blend.iter_mut() {
        *p /= sum;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_rescales_to_unit_sum() {
        let mut blend = vec![2.0, 1.0, 1.0];
        normalize(&mut blend).unwrap();
        assert_eq!(blend, vec![0.5, 0.25, 0.25]);
    }

    #[test]
    fn normalize_rejects_zero_sum() {
        let mut blend = vec![0.0, 0.0, 0.0, 0.0];
        let result = normalize(&mut blend);
        assert!(matches!(result, Err(BlendoptError::DegenerateRenormalization)));
    }
}
