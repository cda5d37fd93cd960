//! Formatted terminal output.
//!
//! We keep formatting code in one place so:
//! - the numerical code stays free of presentation
//! - output changes are localized (and covered by the snapshot-style tests below)

use crate::domain::{Evolution, LifetimeTable, Star, StarResult, ValidationReport};
use crate::math::convergence::ConvergenceStudy;

const RULE: &str = "----------------------------------------";

/// Lifetime of a single star given by mass.
pub fn format_estimate(mass_msun: f64, lifetime_years: f64) -> String {
    format!("Predicted lifetime for {mass_msun} M☉: {lifetime_years:.6e} years\n")
}

/// Block summary of one star.
pub fn format_star_summary(star: &Star) -> String {
    let mut out = String::new();
    out.push_str(RULE);
    out.push('\n');
    out.push_str(&format!("Star: {}\n", star.name()));
    out.push_str(&format!("Mass: {} M☉ ({:.6e} kg)\n", star.mass_msun(), star.mass_kg()));
    out.push_str(&format!(
        "Luminosity: {} L☉ ({:.6e} W)\n",
        star.luminosity_lsun(),
        star.luminosity_watts()
    ));
    out.push_str(&format!("Observed Age: {:.6e} years\n", star.observed_age_years()));
    out.push_str(&format!(
        "Fuel Lifetime Estimate: {:.6e} years\n",
        star.fuel_lifetime_years()
    ));
    out.push_str(RULE);
    out.push('\n');
    out
}

/// Summaries of `a` and `b` followed by their pairwise comparisons.
pub fn format_comparison(a: &Star, b: &Star) -> String {
    let mut out = String::new();
    out.push_str(&format_star_summary(a));
    out.push_str(&format_star_summary(b));

    let more = |yes: bool, adjective: &str| {
        let (first, second) = if yes { (a, b) } else { (b, a) };
        format!("{} is {adjective} than {}\n", first.name(), second.name())
    };
    out.push_str(&more(a.is_more_massive_than(b), "more massive"));
    out.push_str(&more(a.is_brighter_than(b), "brighter"));
    out.push_str(&more(a.is_older_than(b), "older"));
    out
}

pub fn format_evolution(star: &Star, evolution: &Evolution) -> String {
    format!(
        "{} evolved {:.6e} years: age now {:.6e} years, {:.2}% fuel remaining\n",
        star.name(),
        evolution.elapsed_years,
        star.observed_age_years(),
        evolution.remaining_fuel * 100.0
    )
}

pub fn format_lifetime_table(table: &LifetimeTable) -> String {
    let mut out = String::new();
    out.push_str(&format!(
        "Lifetime estimates: model={} | horizon={:.3e} years | S0={:.3e} J\n",
        table.model.display_name(),
        table.horizon_years,
        table.initial_fuel_j
    ));
    out.push_str(&format!("{:>6} {:>16} {:>16}\n", "n", "trapezoid", "simpson"));
    out.push_str(&format!("{:-<6} {:-<16} {:-<16}\n", "", "", ""));
    for row in &table.rows {
        out.push_str(&format!(
            "{:>6} {:>16.6e} {:>16.6e}\n",
            row.n, row.trapezoid_years, row.simpson_years
        ));
    }
    out
}

pub fn format_catalog_results(results: &[StarResult]) -> String {
    let mut out = String::new();
    out.push_str(
        format!(
            "{:<20} {:>8} {:>12} {:>14} {:>14} {:>12}\n",
            "name", "mass", "luminosity", "observed", "predicted", "rel_error"
        )
        .trim_end(),
    );
    out.push('\n');
    out.push_str(format!("{:-<20} {:-<8} {:-<12} {:-<14} {:-<14} {:-<12}\n", "", "", "", "", "", "").trim_end());
    out.push('\n');

    for r in results {
        let rel = r
            .rel_error
            .map(|v| format!("{v:.4}"))
            .unwrap_or_else(|| "n/a".to_string());
        out.push_str(
            format!(
                "{:<20} {:>8.3} {:>12.4} {:>14.4e} {:>14.4e} {:>12}\n",
                truncate(r.star.name(), 20),
                r.star.mass_msun(),
                r.star.luminosity_lsun(),
                r.star.observed_age_years(),
                r.predicted_lifetime_years,
                rel
            )
            .trim_end(),
        );
        out.push('\n');
    }
    out
}

pub fn format_validation(report: &ValidationReport) -> String {
    let mut out = String::new();

    out.push_str("=== Integration: ∫₀^π sin(x) dx = 2 ===\n");
    for c in &report.integration {
        out.push_str(&format!(
            "{:<10} n={:<6} value={:.12} abs={:.3e} rel={:.3e} bound={:.3e}\n",
            c.rule.display_name(),
            c.n,
            c.approx,
            c.abs_error,
            c.rel_error,
            c.bound
        ));
    }

    out.push_str("\n=== Differentiation: d/dx sin(x) at 0 = 1 ===\n");
    for d in &report.derivatives {
        out.push_str(&format!(
            "{:<10} h={:<8.1e} value={:.12} abs={:.3e}\n",
            d.scheme.display_name(),
            d.h,
            d.approx,
            d.abs_error
        ));
    }

    out.push_str("\n=== Observed convergence orders ===\n");
    for study in report.quadrature_studies.iter().chain(&report.derivative_studies) {
        out.push_str(&format!("{:<10} p={}\n", study.label, fmt_order(study)));
    }

    out.push_str("\n=== Stellar lifetime (1 M☉) ===\n");
    out.push_str(&format!("Analytic : {:.6e} years\n", report.analytic_lifetime_years));
    out.push_str(&format!("Recomputed: {:.6e} years\n", report.recomputed_lifetime_years));
    out.push_str(&format!("Rel error : {:.3e}\n", report.lifetime_rel_error));
    out.push_str(&format!(
        "Estimate (exp decay, Simpson): {:.6e} years\n",
        report.decay_estimate_years
    ));

    out
}

pub fn fmt_order(study: &ConvergenceStudy) -> String {
    study
        .observed_order()
        .map(|p| format!("{p:.3}"))
        .unwrap_or_else(|| "n/a".to_string())
}

fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        return s.to_string();
    }
    let mut out: String = s.chars().take(max.saturating_sub(1)).collect();
    out.push('…');
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::LifetimeTableRow;
    use crate::physics::luminosity::LuminosityModel;

    #[test]
    fn comparison_names_the_larger_star_first() {
        let txt = format_comparison(&Star::sun(), &Star::sirius_a());
        assert!(txt.contains("Sirius A is more massive than Sun\n"));
        assert!(txt.contains("Sirius A is brighter than Sun\n"));
        assert!(txt.contains("Sun is older than Sirius A\n"));
        assert_eq!(txt.matches(RULE).count(), 4);
    }

    #[test]
    fn table_snapshot() {
        let table = LifetimeTable {
            model: LuminosityModel::Constant,
            horizon_years: 10.0,
            initial_fuel_j: 5.0,
            rows: vec![LifetimeTableRow {
                n: 2,
                trapezoid_years: 5.0,
                simpson_years: 5.0,
            }],
        };
        let expected = concat!(
            "Lifetime estimates: model=constant | horizon=1.000e1 years | S0=5.000e0 J\n",
            "     n        trapezoid          simpson\n",
            "------ ---------------- ----------------\n",
            "     2       5.000000e0       5.000000e0\n",
        );
        assert_eq!(format_lifetime_table(&table), expected);
    }

    #[test]
    fn catalog_table_marks_missing_relative_error() {
        let results = vec![StarResult {
            star: Star::new("A very long star name indeed", 1.0, 1.0, 0.0).unwrap(),
            predicted_lifetime_years: 1e10,
            abs_error: 1e10,
            rel_error: None,
        }];
        let txt = format_catalog_results(&results);
        let last = txt.lines().last().unwrap();
        assert!(last.ends_with("n/a"));
        assert!(last.starts_with("A very long star na…"));
    }

    #[test]
    fn truncate_keeps_short_names() {
        assert_eq!(truncate("Sun", 20), "Sun");
    }
}
