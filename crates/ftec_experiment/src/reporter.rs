//! Sweep reporting and persistence
//!
//! Gantree: L8_Report → Reporter
//!
//! Writes the four plain-text series (`Ts.txt`, `dpq.txt`, `dpr.txt`,
//! `ratios.txt`, one `%.18e` float per line), a JSON summary, and
//! CSV/Markdown/text renderings.

use crate::sweep::{SweepPoint, SweepResult};
use ftec_core::{experiment, FtecError, FtecResult};
use log::info;
use std::fs;
use std::path::{Path, PathBuf};

/// Report format
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportFormat {
    /// Markdown table
    Markdown,
    /// JSON
    Json,
    /// CSV
    Csv,
    /// Plain text summary
    Text,
}

/// One reloaded line of the series files
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SeriesRow {
    /// Sweep length `t`
    pub length: usize,
    /// Mean `d(p, q)`
    pub dpq: f64,
    /// Mean `d(p, r)`
    pub dpr: f64,
    /// Mean accept ratio
    pub accept_ratio: f64,
}

/// Sweep reporter
/// Gantree: Reporter // 결과 리포팅
pub struct Reporter;

impl Reporter {
    // ========================================================================
    // Format Converters
    // ========================================================================

    /// Generate report in specified format
    pub fn report(result: &SweepResult, format: ReportFormat) -> FtecResult<String> {
        match format {
            ReportFormat::Markdown => Ok(Self::to_markdown(result)),
            ReportFormat::Json => Self::to_json(result),
            ReportFormat::Csv => Ok(Self::to_csv(&result.points)),
            ReportFormat::Text => Ok(Self::to_text(result)),
        }
    }

    /// Markdown summary and per-length table
    pub fn to_markdown(result: &SweepResult) -> String {
        let mut lines = vec![
            "# FTEC Sweep Results".to_string(),
            String::new(),
            "## Summary".to_string(),
            String::new(),
            format!("- **Trials per circuit**: {}", result.config.trials),
            format!("- **Repeats per length**: {}", result.config.repeats),
            format!("- **Parity check**: {}", result.config.parity_check),
            format!("- **Violations**: {}/{}", result.total_violations(), result.total_trials()),
            format!("- **Total shots**: {}", result.session.total_shots),
            format!("- **Total time**: {:.2}s", result.elapsed_ms as f64 / 1000.0),
            String::new(),
            "## Per Length".to_string(),
            String::new(),
            "| t | Gates | dpq | dpr | Accept | Violations |".to_string(),
            "|---|-------|-----|-----|--------|------------|".to_string(),
        ];

        lines.extend(result.points.iter().map(|p| {
            format!(
                "| {} | {} | {:.4} | {:.4} | {:.3} | {}/{} |",
                p.length,
                p.sequence_length,
                p.mean_dpq,
                p.mean_dpr,
                p.mean_accept_ratio,
                p.violations,
                p.repeats
            )
        }));

        lines.join("\n") + "\n"
    }

    /// Pretty JSON of the whole result
    pub fn to_json(result: &SweepResult) -> FtecResult<String> {
        Ok(serde_json::to_string_pretty(result)?)
    }

    /// One CSV row per length
    pub fn to_csv(points: &[SweepPoint]) -> String {
        let mut lines =
            vec!["length,sequence_length,repeats,mean_dpq,mean_dpr,mean_accept_ratio,violations"
                .to_string()];
        lines.extend(points.iter().map(|p| {
            format!(
                "{},{},{},{},{},{},{}",
                p.length,
                p.sequence_length,
                p.repeats,
                p.mean_dpq,
                p.mean_dpr,
                p.mean_accept_ratio,
                p.violations
            )
        }));
        lines.join("\n") + "\n"
    }

    /// Plain text summary
    pub fn to_text(result: &SweepResult) -> String {
        let mut lines = vec![
            "FTEC Sweep Results".to_string(),
            "==================".to_string(),
            String::new(),
            format!("  {}", result.config),
            format!(
                "  {} violations in {} trials",
                result.total_violations(),
                result.total_trials()
            ),
            String::new(),
        ];
        lines.extend(result.points.iter().map(|p| {
            format!(
                "  t={:<3} dpq={:.4} dpr={:.4} accept={:.3}{}",
                p.length,
                p.mean_dpq,
                p.mean_dpr,
                p.mean_accept_ratio,
                if p.is_fault_tolerant() {
                    ""
                } else {
                    " [not fault tolerant]"
                }
            )
        }));
        lines.join("\n") + "\n"
    }

    // ========================================================================
    // Series Files
    // ========================================================================

    /// Write the series files and `summary.json` into `dir`
    /// Gantree: write_all(result, dir) -> Result<Vec<PathBuf>> // savetxt
    pub fn write_all(result: &SweepResult, dir: impl AsRef<Path>) -> FtecResult<Vec<PathBuf>> {
        let dir = dir.as_ref();
        fs::create_dir_all(dir)
            .map_err(|e| FtecError::FileError(format!("{}: {}", dir.display(), e)))?;

        let lengths = result.points.iter().map(|p| scientific(p.length as f64));
        let dpq = result.points.iter().map(|p| scientific(p.mean_dpq));
        let dpr = result.points.iter().map(|p| scientific(p.mean_dpr));
        let ratios = result.points.iter().map(|p| scientific(p.mean_accept_ratio));

        let written = vec![
            write_lines(dir.join(experiment::LENGTHS_FILE), lengths)?,
            write_lines(dir.join(experiment::DPQ_FILE), dpq)?,
            write_lines(dir.join(experiment::DPR_FILE), dpr)?,
            write_lines(dir.join(experiment::RATIOS_FILE), ratios)?,
            write_text(dir.join(experiment::SUMMARY_FILE), &Self::to_json(result)?)?,
        ];

        info!("wrote {} result files to {}", written.len(), dir.display());
        Ok(written)
    }

    /// Read the series files back, one row per length
    pub fn load_series(dir: impl AsRef<Path>) -> FtecResult<Vec<SeriesRow>> {
        let dir = dir.as_ref();
        let lengths: Vec<f64> = read_column(&dir.join(experiment::LENGTHS_FILE))?;
        let dpq: Vec<f64> = read_column(&dir.join(experiment::DPQ_FILE))?;
        let dpr: Vec<f64> = read_column(&dir.join(experiment::DPR_FILE))?;
        let ratios: Vec<f64> = read_column(&dir.join(experiment::RATIOS_FILE))?;

        let n = lengths.len();
        if dpq.len() != n || dpr.len() != n || ratios.len() != n {
            return Err(FtecError::FileError(format!(
                "series lengths differ in {}: {} / {} / {} / {}",
                dir.display(),
                n,
                dpq.len(),
                dpr.len(),
                ratios.len()
            )));
        }

        lengths
            .into_iter()
            .zip(dpq)
            .zip(dpr)
            .zip(ratios)
            .map(|(((t, dpq), dpr), accept_ratio)| {
                if t < 0.0 || t.fract() != 0.0 {
                    return Err(FtecError::FileError(format!(
                        "{}: length {} is not a whole number",
                        dir.join(experiment::LENGTHS_FILE).display(),
                        t
                    )));
                }
                Ok(SeriesRow {
                    length: t as usize,
                    dpq,
                    dpr,
                    accept_ratio,
                })
            })
            .collect()
    }
}

// ============================================================================
// Helpers
// ============================================================================

/// `1.234500000000000000e-02` style, two-digit signed exponent
pub fn scientific(value: f64) -> String {
    let formatted = format!("{:.18e}", value);
    match formatted.split_once('e') {
        Some((mantissa, exp)) => match exp.parse::<i32>() {
            Ok(exp) => format!(
                "{}e{}{:02}",
                mantissa,
                if exp < 0 { '-' } else { '+' },
                exp.abs()
            ),
            Err(_) => formatted,
        },
        None => formatted,
    }
}

fn write_lines(path: PathBuf, lines: impl Iterator<Item = String>) -> FtecResult<PathBuf> {
    let mut text: String = lines.map(|line| line + "\n").collect();
    if text.is_empty() {
        text.push('\n');
    }
    write_text(path, &text)
}

fn write_text(path: PathBuf, text: &str) -> FtecResult<PathBuf> {
    fs::write(&path, text)
        .map_err(|e| FtecError::FileError(format!("{}: {}", path.display(), e)))?;
    Ok(path)
}

fn read_column<T: std::str::FromStr>(path: &Path) -> FtecResult<Vec<T>> {
    let text = fs::read_to_string(path)
        .map_err(|e| FtecError::FileError(format!("{}: {}", path.display(), e)))?;
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(|line| {
            line.parse::<T>().map_err(|_| {
                FtecError::FileError(format!("{}: cannot parse '{}'", path.display(), line))
            })
        })
        .collect()
}

// ============================================================================
// Tests
// ============================================================================
