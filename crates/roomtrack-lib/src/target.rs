use crate::records::{Group, Location};

/// Minimum Jaro-Winkler similarity for a name to be offered as a suggestion.
const SUGGESTION_THRESHOLD: f64 = 0.8;

/// Resolve a requested destination to a location name.
///
/// Location names win over aliases. A group alias is followed exactly one
/// level; anything else comes back unchanged and simply matches no node.
pub fn resolve_target<'a>(
    requested: &'a str,
    locations: &[Location],
    groups: &'a [Group],
) -> &'a str {
    if locations.iter().any(|location| location.name == requested) {
        return requested;
    }

    groups
        .iter()
        .find(|group| group.name == requested)
        .map(|group| group.of.as_str())
        .unwrap_or(requested)
}

/// Location and group names that look like `requested`, best match first.
pub fn suggest_targets(
    requested: &str,
    locations: &[Location],
    groups: &[Group],
    limit: usize,
) -> Vec<String> {
    let needle = requested.to_lowercase();
    let mut scored: Vec<(f64, &str)> = locations
        .iter()
        .map(|location| location.name.as_str())
        .chain(groups.iter().map(|group| group.name.as_str()))
        .map(|name| (strsim::jaro_winkler(&needle, &name.to_lowercase()), name))
        .filter(|(score, _)| *score >= SUGGESTION_THRESHOLD)
        .collect();

    scored.sort_by(|a, b| b.0.total_cmp(&a.0).then_with(|| a.1.cmp(b.1)));
    scored.dedup_by(|a, b| a.1 == b.1);
    scored
        .into_iter()
        .take(limit)
        .map(|(_, name)| name.to_string())
        .collect()
}
