use std::collections::BTreeSet;

use crate::classpath::ClasspathRoot;
use crate::cli::Flags;
use crate::error::Result;

/// Boundary between the discovery pipeline and a detection engine. The engine
/// receives the resolved classpath root so it can read class bytecode itself;
/// the pipeline never inspects class contents.
pub trait Detector {
    fn analyze(
        &self,
        classpath: &dyn ClasspathRoot,
        prefix: &str,
        flags: &Flags,
        classes: &BTreeSet<String>,
    ) -> Result<AnalysisReport>;
}

#[derive(Debug, Clone)]
pub struct AnalysisReport {
    /// Complete graph document, ready to be written to the output file.
    pub graph_output: String,
    pub stats: ReportStats,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReportStats {
    pub classes_examined: usize,
    pub singletons: usize,
    pub hingletons: usize,
    pub mingletons: usize,
    pub fingletons: usize,
    pub others: usize,
}

impl AnalysisReport {
    /// Human-readable statistics summary. Verbose mode includes categories
    /// with a zero count; otherwise only non-zero ones appear after the total.
    pub fn stats_report(&self, verbose: bool) -> String {
        let s = &self.stats;
        let mut lines = vec![format!("Classes examined: {}", s.classes_examined)];
        for (label, count) in [
            ("Singletons", s.singletons),
            ("Hingletons", s.hingletons),
            ("Mingletons", s.mingletons),
            ("Fingletons", s.fingletons),
            ("Other classes drawn", s.others),
        ] {
            if verbose || count > 0 {
                lines.push(format!("{label}: {count}"));
            }
        }
        lines.join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stats_report_hides_zero_counts_unless_verbose() {
        let report = AnalysisReport {
            graph_output: String::new(),
            stats: ReportStats {
                classes_examined: 12,
                singletons: 2,
                ..ReportStats::default()
            },
        };

        let terse = report.stats_report(false);
        assert!(terse.contains("Classes examined: 12"));
        assert!(terse.contains("Singletons: 2"));
        assert!(!terse.contains("Hingletons"));

        let verbose = report.stats_report(true);
        assert!(verbose.contains("Hingletons: 0"));
        assert!(verbose.contains("Other classes drawn: 0"));
    }
}
