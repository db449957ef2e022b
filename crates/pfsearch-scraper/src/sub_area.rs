//! Sub-area resolution against the upstream's aggregation links.

use reqwest::Url;

use crate::types::AggregationLink;

/// Resolves a free-text sub-area name to the zone id carried by the matching
/// aggregation link.
///
/// Names are compared case-insensitively and otherwise exactly; the first
/// matching link in list order wins. Relative links are resolved against
/// `base`. Returns `None` when nothing matches or the matching link has no
/// non-empty `l` query parameter.
#[must_use]
pub fn resolve_sub_area(name: &str, links: &[AggregationLink], base: &Url) -> Option<String> {
    let wanted = name.to_lowercase();
    let matched = links.iter().find(|l| l.name.to_lowercase() == wanted)?;

    let url = match base.join(&matched.link) {
        Ok(url) => url,
        Err(e) => {
            tracing::warn!(
                link = %matched.link,
                error = %e,
                "aggregation link is not a valid URL"
            );
            return None;
        }
    };

    url.query_pairs()
        .find(|(key, _)| key == "l")
        .map(|(_, value)| value.into_owned())
        .filter(|value| !value.is_empty())
}
