//! Fixed-width numeric normalization of version strings

use std::cmp::Ordering;

use tracing::debug;

use crate::analyzer::error::AnalyzerError;

/// A non-negative integer of any size, kept as its decimal digits without
/// leading zeros (`"0"` for zero).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Component(String);

impl Component {
    pub fn zero() -> Self {
        Self("0".to_string())
    }

    /// Parse a run of ASCII digits; anything else (including `""`) is `None`
    pub fn parse(digits: &str) -> Option<Self> {
        if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
        let trimmed = digits.trim_start_matches('0');
        if trimmed.is_empty() {
            Some(Self::zero())
        } else {
            Some(Self(trimmed.to_string()))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<u64> for Component {
    fn from(value: u64) -> Self {
        Self(value.to_string())
    }
}

/// Without leading zeros a longer digit string is the larger number;
/// equal lengths compare digit by digit.
impl Ord for Component {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0
            .len()
            .cmp(&other.0.len())
            .then_with(|| self.0.as_bytes().cmp(other.0.as_bytes()))
    }
}

impl PartialOrd for Component {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// A version as a sequence of non-negative integers, zero-padded to the
/// widest version of the current analysis.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizedVersion(Vec<Component>);

impl NormalizedVersion {
    pub fn new(components: Vec<Component>) -> Self {
        Self(components)
    }

    pub fn components(&self) -> &[Component] {
        &self.0
    }
}

/// Lexicographic order: the first differing component decides. Within one
/// analysis all tuples share a width; across widths a proper prefix sorts first.
impl Ord for NormalizedVersion {
    fn cmp(&self, other: &Self) -> Ordering {
        for (a, b) in self.0.iter().zip(&other.0) {
            match a.cmp(b) {
                Ordering::Equal => continue,
                decided => return decided,
            }
        }
        self.0.len().cmp(&other.0.len())
    }
}

impl PartialOrd for NormalizedVersion {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Normalizes versions to a shared width
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Normalizer {
    max_length: usize,
}

impl Normalizer {
    pub fn new(max_length: usize) -> Self {
        Self { max_length }
    }

    /// Width is the largest component count in `pool`
    pub fn for_pool<'a, I>(pool: I) -> Self
    where
        I: IntoIterator<Item = &'a str>,
    {
        let max_length = pool.into_iter().map(component_count).max().unwrap_or(0);
        debug!("Normalizing versions to {} components", max_length);
        Self::new(max_length)
    }

    pub fn max_length(&self) -> usize {
        self.max_length
    }

    /// Parse `version` and right-pad it with zeros to `max_length`.
    ///
    /// A version wider than `max_length` keeps all of its components.
    pub fn normalize(&self, version: &str) -> Result<NormalizedVersion, AnalyzerError> {
        let mut components = parse_components(version)?;
        if components.len() < self.max_length {
            components.resize(self.max_length, Component::zero());
        }
        Ok(NormalizedVersion(components))
    }
}

/// Number of dot-separated components in a version string
pub fn component_count(version: &str) -> usize {
    version.split('.').count()
}

/// Parse every dot-separated component as a base-10 non-negative integer.
///
/// Only ASCII digits are accepted; signs, whitespace and empty components
/// are malformed. There is no upper bound on the value.
pub fn parse_components(version: &str) -> Result<Vec<Component>, AnalyzerError> {
    version
        .split('.')
        .map(|component| {
            Component::parse(component).ok_or_else(|| AnalyzerError::MalformedVersion {
                version: version.to_string(),
                component: component.to_string(),
            })
        })
        .collect()
}
