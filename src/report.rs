//! Human-readable compliance report for a finished run.
//!
//! Pure rendering over the verbatim optimization output; the core never
//! rounds or reformats its own values.

use crate::engines::evaluation::BlendEvaluator;
use crate::error::Result;
use crate::types::OptimizationResult;

const RULE: &str =
    "======================================================================";

/// Render the optimization outcome as a compliance report
pub fn render(evaluator: &BlendEvaluator, result: &OptimizationResult) -> Result<String> {
    let components = evaluator.components();
    let specs = evaluator.specs();
    let props = evaluator.properties(&result.best_blend)?;

    let mut out = String::new();
    out.push_str(RULE);
    out.push_str("\nOPTIMIZATION RESULTS\n");
    out.push_str(RULE);
    out.push_str("\n\nOptimal Blend Composition:\n");

    for (i, proportion) in result.best_blend.iter().enumerate() {
        let cost_share = proportion * components.costs[i];
        out.push_str(&format!(
            "  C{}: {:6.2}% (cost share: {:.4}/L)\n",
            i + 1,
            proportion * 100.0,
            cost_share
        ));
    }

    out.push_str(&format!("\nTotal Blend Cost: {:.4}/L\n", result.best_cost));

    out.push_str("\nBlend Properties:\n");
    out.push_str(&format!(
        "  Octane:          {:6.2} RON  (min {:.2})\n",
        props.octane, specs.octane_min
    ));
    out.push_str(&format!(
        "  Vapor Pressure:  {:6.2} kPa  (max {:.2})\n",
        props.vapor_pressure, specs.vapor_pressure_max
    ));
    out.push_str(&format!(
        "  Benzene:         {:6.2} %v/v (max {:.2})\n",
        props.benzene, specs.benzene_max
    ));
    out.push_str(&format!(
        "  Sulfur:          {:6.2} ppm  (max {:.2})\n",
        props.sulfur, specs.sulfur_max
    ));

    out.push_str("\nConstraint Compliance:\n");
    let checks = [
        ("Octane", props.octane >= specs.octane_min),
        ("Vapor Pressure", props.vapor_pressure <= specs.vapor_pressure_max),
        ("Benzene", props.benzene <= specs.benzene_max),
        ("Sulfur", props.sulfur <= specs.sulfur_max),
    ];
    for (name, passed) in checks {
        if passed {
            out.push_str(&format!("  ✓ {}: PASS\n", name));
        } else {
            out.push_str(&format!("  ✗ {}: FAIL\n", name));
        }
    }

    if checks.iter().all(|(_, passed)| *passed) {
        out.push_str("\n  ✓ All specifications met\n");
    } else {
        out.push_str("\n  ✗ Some specifications not met\n");
    }

    out.push_str(RULE);
    out.push('\n');
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{ComponentTable, PenaltyWeights, Specification};

    fn result_for(blend: Vec<f64>, evaluator: &BlendEvaluator) -> OptimizationResult {
        let cost = evaluator.cost(&blend).unwrap();
        let penalty = evaluator.penalty(&blend).unwrap();
        OptimizationResult {
            best_blend: blend,
            best_fitness: cost + penalty,
            best_cost: cost,
            best_penalty: penalty,
            trajectory: vec![cost + penalty],
        }
    }

    #[test]
    fn feasible_blend_reports_all_pass() {
        let evaluator = BlendEvaluator::new(
            ComponentTable::default(),
            Specification::default(),
            PenaltyWeights::default(),
        );
        let result = result_for(vec![0.40, 0.45, 0.05, 0.10], &evaluator);

        let report = render(&evaluator, &result).unwrap();
        assert!(report.contains("All specifications met"));
        assert!(!report.contains("FAIL"));
    }

    #[test]
    fn infeasible_blend_reports_the_violated_constraint() {
        let evaluator = BlendEvaluator::new(
            ComponentTable::default(),
            Specification::default(),
            PenaltyWeights::default(),
        );
        // equal split is one octane point below spec
        let result = result_for(vec![0.25; 4], &evaluator);

        let report = render(&evaluator, &result).unwrap();
        assert!(report.contains("Octane: FAIL"));
        assert!(report.contains("Some specifications not met"));
    }
}
