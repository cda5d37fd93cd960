//! Debug bundle writer for inspecting a validation run sample by sample.

use std::fs::{File, create_dir_all};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use chrono::Local;

use crate::domain::{ValidationConfig, ValidationReport};
use crate::error::AppError;
use crate::math::convergence::ConvergenceStudy;
use crate::report::fmt_order;

/// Default bundle directory, relative to the working directory.
pub const DEBUG_DIR: &str = "debug";

/// Write a markdown bundle for `report` into `dir` and return its path.
pub fn write_debug_bundle(
    dir: &Path,
    config: &ValidationConfig,
    report: &ValidationReport,
) -> Result<PathBuf, AppError> {
    create_dir_all(dir).map_err(|e| AppError::io(format!("Failed to create debug dir: {e}")))?;

    let ts = Local::now().format("%Y%m%d_%H%M%S");
    let path = dir.join(format!(
        "stellar_debug_n{}_levels{}_{ts}.md",
        config.n, config.levels
    ));

    let file = File::create(&path)
        .map_err(|e| AppError::io(format!("Failed to create debug file: {e}")))?;
    let mut file = BufWriter::new(file);

    write_bundle(&mut file, config, report)
        .and_then(|()| file.flush())
        .map_err(|e| AppError::io(format!("Failed to write debug bundle '{}': {e}", path.display())))?;

    Ok(path)
}

fn write_bundle<W: Write>(out: &mut W, config: &ValidationConfig, report: &ValidationReport) -> std::io::Result<()> {
    writeln!(out, "# stellar debug bundle")?;
    writeln!(out, "- generated: {}", Local::now().to_rfc3339())?;
    writeln!(out, "- n: {}", config.n)?;
    writeln!(out, "- h: {:e}", config.h)?;
    writeln!(out, "- levels: {}", config.levels)?;

    writeln!(out, "\n## Integration of sin on [0, π]")?;
    writeln!(out, "| rule | n | approx | abs_error | rel_error | bound |")?;
    writeln!(out, "| - | - | - | - | - | - |")?;
    for c in &report.integration {
        writeln!(
            out,
            "| {} | {} | {:.15} | {:.3e} | {:.3e} | {:.3e} |",
            c.rule.display_name(),
            c.n,
            c.approx,
            c.abs_error,
            c.rel_error,
            c.bound
        )?;
    }

    writeln!(out, "\n## Derivatives of sin at 0")?;
    writeln!(out, "| scheme | h | approx | abs_error |")?;
    writeln!(out, "| - | - | - | - |")?;
    for d in &report.derivatives {
        writeln!(
            out,
            "| {} | {:e} | {:.15} | {:.3e} |",
            d.scheme.display_name(),
            d.h,
            d.approx,
            d.abs_error
        )?;
    }

    writeln!(out, "\n## Convergence studies")?;
    for study in report.quadrature_studies.iter().chain(&report.derivative_studies) {
        write_study(out, study)?;
    }

    writeln!(out, "\n## Stellar lifetime")?;
    writeln!(out, "- analytic_years: {:.6e}", report.analytic_lifetime_years)?;
    writeln!(out, "- recomputed_years: {:.6e}", report.recomputed_lifetime_years)?;
    writeln!(out, "- rel_error: {:.3e}", report.lifetime_rel_error)?;
    writeln!(out, "- exp_decay_estimate_years: {:.6e}", report.decay_estimate_years)?;

    Ok(())
}

fn write_study<W: Write>(out: &mut W, study: &ConvergenceStudy) -> std::io::Result<()> {
    writeln!(
        out,
        "\n### {} (exact={}, observed order={})",
        study.label,
        study.exact,
        fmt_order(study)
    )?;
    writeln!(out, "| step | approx | abs_error |")?;
    writeln!(out, "| - | - | - |")?;
    for s in &study.samples {
        writeln!(out, "| {:e} | {:.15} | {:.3e} |", s.step, s.approx, s.abs_error)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::pipeline::run_validation;

    #[test]
    fn bundle_contains_every_section() {
        let dir = std::env::temp_dir().join(format!("stellar-lifetimes-debug-{}", std::process::id()));
        let config = ValidationConfig {
            n: 100,
            levels: 3,
            ..ValidationConfig::default()
        };
        let report = run_validation(&config).unwrap();

        let path = write_debug_bundle(&dir, &config, &report).unwrap();
        assert!(path.starts_with(&dir));
        let text = std::fs::read_to_string(&path).unwrap();

        assert!(text.starts_with("# stellar debug bundle\n"));
        for section in [
            "## Integration of sin on [0, π]",
            "## Derivatives of sin at 0",
            "## Convergence studies",
            "## Stellar lifetime",
        ] {
            assert!(text.contains(section), "missing {section}");
        }
        let study_headers = text.matches("\n### ").count();
        assert_eq!(
            study_headers,
            report.quadrature_studies.len() + report.derivative_studies.len()
        );
    }
}
