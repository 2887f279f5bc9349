//! Rendering of analysis results for the command line

use serde::Serialize;

use crate::analyzer::VersionAnalyzer;
use crate::analyzer::engine::Analysis;

#[derive(Debug, Serialize)]
struct JsonReport<'a> {
    templates: usize,
    variants: usize,
    #[serde(flatten)]
    analysis: &'a Analysis,
}

fn indented(versions: &[String]) -> String {
    versions.iter().map(|v| format!("  {}\n", v)).collect()
}

/// Human-readable report: configuration summary, sorted versions, older versions
pub fn render_text(analyzer: &VersionAnalyzer, analysis: &Analysis) -> String {
    let mut out = analyzer.to_string();

    out.push_str("\nAll versions (sorted):\n");
    out.push_str(&indented(analysis.sorted()));

    out.push_str(&format!("\nVersions older than {}:\n", analysis.target()));
    if analysis.older().is_empty() {
        out.push_str("  No older versions\n");
    } else {
        out.push_str(&indented(analysis.older()));
    }

    out
}

pub fn render_json(analyzer: &VersionAnalyzer, analysis: &Analysis) -> serde_json::Result<String> {
    serde_json::to_string_pretty(&JsonReport {
        templates: analyzer.template_count(),
        variants: analyzer.variants().len(),
        analysis,
    })
}
