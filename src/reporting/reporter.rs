use std::fmt;
use crate::core::PipelineReport;
use crate::utils::extract_filename;

/// Renders the human-readable run summary.
///
/// The output is free-form text for the terminal, not a machine contract.
pub struct PipelineReporter {
    report: PipelineReport,
}

impl PipelineReporter {
    pub fn from_report(report: PipelineReport) -> Self {
        Self { report }
    }

    fn safe_div(numerator: f64, denominator: f64) -> f64 {
        if denominator == 0.0 {
            0.0
        } else {
            numerator / denominator
        }
    }

    fn format_bytes(bytes: u64) -> String {
        const KB: u64 = 1024;
        const MB: u64 = KB * 1024;
        const GB: u64 = MB * 1024;

        if bytes >= GB {
            format!("{:.2} GB", Self::safe_div(bytes as f64, GB as f64))
        } else if bytes >= MB {
            format!("{:.2} MB", Self::safe_div(bytes as f64, MB as f64))
        } else if bytes >= KB {
            format!("{:.2} KB", Self::safe_div(bytes as f64, KB as f64))
        } else {
            format!("{} B", bytes)
        }
    }
}

impl fmt::Display for PipelineReporter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let opt = &self.report.optimization;

        writeln!(f, "=== Logo Optimization Report ===")?;
        writeln!(f)?;

        writeln!(f, "Primary Output:")?;
        writeln!(f, "- Source: {}", opt.original_path.display())?;
        writeln!(f, "- Optimized: {}", opt.optimized_path.display())?;
        writeln!(f, "- Size: {} → {}",
            Self::format_bytes(opt.original_size),
            Self::format_bytes(opt.optimized_size)
        )?;
        if opt.saved_bytes >= 0 {
            writeln!(f, "- Reduction: {:.1}% ({} saved)",
                opt.compression_ratio,
                Self::format_bytes(opt.saved_bytes.unsigned_abs())
            )?;
        } else {
            writeln!(f, "- Grew: {:.1}% ({} larger)",
                opt.compression_ratio.abs(),
                Self::format_bytes(opt.saved_bytes.unsigned_abs())
            )?;
        }
        writeln!(f)?;

        writeln!(f, "Size Variants:")?;
        for variant in &self.report.variants {
            writeln!(f, "  └── {}x{}: {} - {}",
                variant.width,
                variant.height,
                Self::format_bytes(variant.size_bytes),
                extract_filename(&variant.path)
            )?;
        }
        writeln!(f)?;

        writeln!(f, "Next Steps:")?;
        writeln!(f, "  └── Review {} for visual fidelity", opt.optimized_path.display())?;
        writeln!(f, "  └── Replace {} with the optimized copy if satisfied",
            opt.original_path.display()
        )?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;
    use crate::core::{OptimizationResult, VariantResult};

    fn sample_report() -> PipelineReport {
        PipelineReport {
            optimization: OptimizationResult {
                original_path: PathBuf::from("public/logo.png"),
                optimized_path: PathBuf::from("public/logo-optimized.png"),
                original_size: 200_000,
                optimized_size: 150_000,
                saved_bytes: 50_000,
                compression_ratio: 25.0,
            },
            variants: vec![VariantResult {
                width: 512,
                height: 512,
                path: PathBuf::from("public/logo-512.png"),
                size_bytes: 40_000,
            }],
        }
    }

    #[test]
    fn byte_formatting_tiers() {
        assert_eq!(PipelineReporter::format_bytes(512), "512 B");
        assert_eq!(PipelineReporter::format_bytes(2048), "2.00 KB");
        assert_eq!(PipelineReporter::format_bytes(3 * 1024 * 1024), "3.00 MB");
    }

    #[test]
    fn report_lists_variants_and_reduction() {
        let rendered = PipelineReporter::from_report(sample_report()).to_string();
        assert!(rendered.contains("Reduction: 25.0%"));
        assert!(rendered.contains("512x512: 39.06 KB - logo-512.png"));
    }

    #[test]
    fn growth_is_reported_without_negative_sizes() {
        let mut report = sample_report();
        report.optimization.saved_bytes = -1024;
        report.optimization.compression_ratio = -0.5;
        let rendered = PipelineReporter::from_report(report).to_string();
        assert!(rendered.contains("Grew: 0.5% (1.00 KB larger)"));
    }
}
