//! Query parameters for the upstream search data endpoint.

use pfsearch_core::ResolvedFilter;

/// Ordered upstream query parameters.
///
/// Parameter names are fixed by the upstream (`l` zone id, `c` category,
/// `t` property type, `bdr[]` bedrooms, `fu` furnishing, `ob` ordering,
/// `page`). Setting an existing key replaces it in place so the serialized
/// order stays stable.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UpstreamParams {
    pairs: Vec<(&'static str, String)>,
}

impl UpstreamParams {
    /// Parameters for a validated search filter, without a page number.
    #[must_use]
    pub fn for_search(filter: &ResolvedFilter) -> Self {
        let mut params = Self::default();
        params.set("l", filter.location_id);
        params.set("c", filter.option_id);
        params.set("t", filter.property_type_id);
        if let Some(bedrooms) = &filter.bedrooms {
            params.set("bdr[]", bedrooms.as_str());
        }
        params.set("fu", "0");
        params.set("ob", "mr");
        params
    }

    /// Parameters used to list sub-locations: "Buy" apartments in the zone.
    #[must_use]
    pub fn for_sublocations(location_id: &str) -> Self {
        let mut params = Self::default();
        params.set("l", location_id);
        params.set("c", "1");
        params.set("t", "1");
        params.set("fu", "0");
        params.set("ob", "mr");
        params
    }

    /// Representative parameter set sent while scraping the build id.
    #[must_use]
    pub fn for_build_id_lookup() -> Self {
        let mut params = Self::default();
        params.set("l", "1");
        params.set("c", "2");
        params.set("t", "20");
        params.set("btr[]", "4");
        params.set("pf", "30000");
        params.set("fu", "0");
        params.set("rp", "y");
        params.set("ob", "mr");
        params
    }

    /// Rentals in a single zone, used when probing unknown zone ids.
    #[must_use]
    pub fn for_zone_probe(zone_id: u32) -> Self {
        let mut params = Self::default();
        params.set("l", zone_id.to_string());
        params.set("c", "2");
        params.set("fu", "0");
        params.set("rp", "y");
        params.set("ob", "mr");
        params
    }

    pub fn set(&mut self, key: &'static str, value: impl Into<String>) {
        let value = value.into();
        match self.pairs.iter_mut().find(|(k, _)| *k == key) {
            Some(pair) => pair.1 = value,
            None => self.pairs.push((key, value)),
        }
    }

    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.pairs
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.pairs.iter().map(|(k, v)| (*k, v.as_str()))
    }
}
