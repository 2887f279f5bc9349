//! Template expansion
//!
//! Every wildcard of a template is replaced independently by `0` and `1`,
//! so a template with `k` wildcards denotes `2^k` concrete versions.
//! Duplicates are kept: each template variant is one entry, even when two
//! templates (or two assignments) spell the same version.

use tracing::debug;

use crate::analyzer::error::AnalyzerError;
use crate::analyzer::pattern::{Template, WILDCARD};

/// Number of concrete versions a template expands to, or `None` if `2^k`
/// does not fit in `usize`.
pub fn variant_count(template: &Template) -> Option<usize> {
    let wildcards = u32::try_from(template.wildcard_count()).ok()?;
    1usize.checked_shl(wildcards)
}

/// Expand one template into all concrete versions it denotes.
///
/// Assignments are enumerated like an odometer over `{0, 1}` with the first
/// wildcard as the most significant position, so `*.*` yields
/// `0.0, 0.1, 1.0, 1.1`. A template without wildcards yields itself.
pub fn expand(template: &Template) -> Result<Vec<String>, AnalyzerError> {
    let Some(count) = variant_count(template) else {
        return Err(AnalyzerError::ExpansionLimit {
            key: template.name.clone(),
            limit: usize::MAX,
        });
    };

    let components: Vec<&str> = template.components().collect();
    let wildcard_positions: Vec<usize> = components
        .iter()
        .enumerate()
        .filter(|(_, c)| **c == WILDCARD)
        .map(|(i, _)| i)
        .collect();

    if wildcard_positions.is_empty() {
        return Ok(vec![template.pattern.clone()]);
    }

    let width = wildcard_positions.len();
    let variants = (0..count)
        .map(|assignment| {
            let mut parts = components.clone();
            for (nth, &position) in wildcard_positions.iter().enumerate() {
                let bit = (assignment >> (width - 1 - nth)) & 1;
                parts[position] = if bit == 0 { "0" } else { "1" };
            }
            parts.join(".")
        })
        .collect::<Vec<_>>();

    debug!(
        "Expanded template {} ({}) into {} variants",
        template.name,
        template.pattern,
        variants.len()
    );

    Ok(variants)
}

/// Expand every template and pool the results in template order.
///
/// Fails before expanding anything if the pooled variant count would exceed
/// `max_variants`; the error names the template that crosses the limit.
pub fn expand_all(templates: &[Template], max_variants: usize) -> Result<Vec<String>, AnalyzerError> {
    let mut total: usize = 0;
    for template in templates {
        total = variant_count(template)
            .and_then(|count| total.checked_add(count))
            .filter(|total| *total <= max_variants)
            .ok_or_else(|| AnalyzerError::ExpansionLimit {
                key: template.name.clone(),
                limit: max_variants,
            })?;
    }

    let mut pooled = Vec::with_capacity(total);
    for template in templates {
        pooled.extend(expand(template)?);
    }
    Ok(pooled)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn template(pattern: &str) -> Template {
        Template::new("t", pattern).unwrap()
    }

    #[rstest]
    #[case("1.2.3", vec!["1.2.3"])]
    #[case("1.2.*", vec!["1.2.0", "1.2.1"])]
    #[case("2.*.0", vec!["2.0.0", "2.1.0"])]
    #[case("*.*", vec!["0.0", "0.1", "1.0", "1.1"])]
    #[case("*", vec!["0", "1"])]
    #[case("07.*", vec!["07.0", "07.1"])] // literals are copied verbatim
    fn expand_replaces_wildcards_with_zero_and_one(
        #[case] pattern: &str,
        #[case] expected: Vec<&str>,
    ) {
        assert_eq!(expand(&template(pattern)).unwrap(), expected);
    }

    #[rstest]
    #[case("1.2.3", 0)]
    #[case("1.*.3", 1)]
    #[case("*.*.3", 2)]
    #[case("*.*.*.*.*", 5)]
    fn expand_produces_two_to_the_k_variants(#[case] pattern: &str, #[case] wildcards: u32) {
        let variants = expand(&template(pattern)).unwrap();
        assert_eq!(variants.len(), 2usize.pow(wildcards));
    }

    #[test]
    fn expand_keeps_duplicate_assignments_distinct_per_template() {
        let variants = expand(&template("*.*.*")).unwrap();
        let mut unique = variants.clone();
        unique.sort();
        unique.dedup();
        assert_eq!(unique.len(), variants.len());
    }

    #[test]
    fn expand_all_pools_in_template_order_without_dedup() {
        let templates = vec![
            Template::new("a", "1.0").unwrap(),
            Template::new("b", "1.*").unwrap(),
        ];

        let pooled = expand_all(&templates, 16).unwrap();

        assert_eq!(pooled, vec!["1.0", "1.0", "1.1"]);
    }

    #[test]
    fn expand_all_rejects_pool_over_limit() {
        let templates = vec![
            Template::new("small", "1.*").unwrap(),
            Template::new("big", "*.*.*").unwrap(),
        ];

        let err = expand_all(&templates, 8).unwrap_err();

        assert_eq!(
            err,
            AnalyzerError::ExpansionLimit {
                key: "big".to_string(),
                limit: 8
            }
        );
    }

    #[test]
    fn expand_all_accepts_pool_exactly_at_limit() {
        let templates = vec![Template::new("a", "*.*.*").unwrap()];
        assert_eq!(expand_all(&templates, 8).unwrap().len(), 8);
    }

    #[test]
    fn variant_count_is_none_when_it_overflows() {
        let pattern = vec!["*"; usize::BITS as usize].join(".");
        assert_eq!(variant_count(&template(&pattern)), None);
        assert!(matches!(
            expand(&template(&pattern)),
            Err(AnalyzerError::ExpansionLimit { .. })
        ));
    }
}
