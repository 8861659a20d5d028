use std::collections::BTreeSet;

use crate::classpath::ClasspathRoot;
use crate::cli::Flags;
use crate::detector::{AnalysisReport, Detector, ReportStats};
use crate::error::Result;

/// Structural baseline engine: renders the discovered class set as an
/// unconnected GraphML graph, one labeled node per class. Classification
/// (singletons, hingletons, mingletons, fingletons) is the seam richer
/// engines plug into via [`Detector`]; here every category count stays zero
/// and the ignore toggles have nothing to hide.
pub struct ClassGraphEngine;

impl Detector for ClassGraphEngine {
    fn analyze(
        &self,
        _classpath: &dyn ClasspathRoot,
        prefix: &str,
        flags: &Flags,
        classes: &BTreeSet<String>,
    ) -> Result<AnalysisReport> {
        let stats = ReportStats {
            classes_examined: classes.len(),
            ..ReportStats::default()
        };

        let dotted_prefix = prefix.replace('/', ".");
        let mut graph = String::new();
        graph.push_str("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n");
        graph.push_str("<graphml xmlns=\"http://graphml.graphdrawing.org/xmlns\">\n");
        graph.push_str(
            "  <key id=\"label\" for=\"node\" attr.name=\"label\" attr.type=\"string\"/>\n",
        );
        graph.push_str("  <graph id=\"classes\" edgedefault=\"directed\">\n");

        if flags.show_banner {
            push_node(
                &mut graph,
                "banner",
                &format!("{} classes examined", classes.len()),
            );
        }

        for class in classes {
            // Nodes here never have edges, so any positive threshold
            // suppresses them all.
            let edges = 0;
            if edges < flags.threshold {
                continue;
            }
            let label = class.strip_prefix(&dotted_prefix).unwrap_or(class);
            push_node(&mut graph, class, label);
        }

        graph.push_str("  </graph>\n</graphml>\n");

        Ok(AnalysisReport {
            graph_output: graph,
            stats,
        })
    }
}

fn push_node(graph: &mut String, id: &str, label: &str) {
    graph.push_str(&format!(
        "    <node id=\"{}\"><data key=\"label\">{}</data></node>\n",
        xml_escape(id),
        xml_escape(label)
    ));
}

fn xml_escape(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}
