//! Ordering and partitioning of expanded versions against a target

use serde::ser::{Serialize, SerializeStruct, Serializer};
use tracing::info;

use crate::analyzer::error::AnalyzerError;
use crate::analyzer::normalizer::{NormalizedVersion, Normalizer};

/// Result of one analysis pass
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Analysis {
    target: String,
    sorted: Vec<String>,
    older_len: usize,
}

impl Analysis {
    /// The version every entry was classified against
    pub fn target(&self) -> &str {
        &self.target
    }

    /// All expanded versions in ascending numeric order
    pub fn sorted(&self) -> &[String] {
        &self.sorted
    }

    /// Versions strictly older than the target, a prefix of [`Self::sorted`]
    pub fn older(&self) -> &[String] {
        &self.sorted[..self.older_len]
    }

    /// Versions equal to or newer than the target
    pub fn not_older(&self) -> &[String] {
        &self.sorted[self.older_len..]
    }
}

/// Serialized as `{ target, sorted, older }`
impl Serialize for Analysis {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("Analysis", 3)?;
        state.serialize_field("target", self.target())?;
        state.serialize_field("sorted", self.sorted())?;
        state.serialize_field("older", self.older())?;
        state.end()
    }
}

/// Sort `expanded` by normalized value and split off the versions older than `target`.
///
/// The normalization width is shared by `expanded` and `target`. Sorting is
/// stable, so entries that normalize equally keep their input order.
pub fn analyze(expanded: &[String], target: &str) -> Result<Analysis, AnalyzerError> {
    let normalizer = Normalizer::for_pool(
        expanded
            .iter()
            .map(String::as_str)
            .chain(std::iter::once(target)),
    );
    let normalized_target = normalizer.normalize(target)?;

    let mut keyed = expanded
        .iter()
        .map(|version| Ok((normalizer.normalize(version)?, version.clone())))
        .collect::<Result<Vec<(NormalizedVersion, String)>, AnalyzerError>>()?;
    keyed.sort_by(|(a, _), (b, _)| a.cmp(b));

    let (normalized, sorted): (Vec<NormalizedVersion>, Vec<String>) = keyed.into_iter().unzip();
    let older_len = older_prefix_len(&normalized, &normalized_target);

    info!(
        "Analyzed {} versions against {}: {} older",
        sorted.len(),
        target,
        older_len
    );

    Ok(Analysis {
        target: target.to_string(),
        sorted,
        older_len,
    })
}

/// Length of the leading run of `sorted` that is strictly less than `target`.
///
/// The scan stops at the first entry that is not older; for sorted input this
/// equals counting every entry below the target.
pub fn older_prefix_len(sorted: &[NormalizedVersion], target: &NormalizedVersion) -> usize {
    sorted
        .iter()
        .position(|version| version >= target)
        .unwrap_or(sorted.len())
}
