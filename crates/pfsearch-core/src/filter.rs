use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Number, Value};

use crate::lookup::{LookupError, LookupTable};

/// Bedroom count as clients send it: any JSON number or a label such as
/// `"2"` or `"studio"`. Passed through to the upstream verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Bedrooms {
    Count(Number),
    Label(String),
}

impl std::fmt::Display for Bedrooms {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Bedrooms::Count(n) => write!(f, "{n}"),
            Bedrooms::Label(s) => write!(f, "{s}"),
        }
    }
}

/// Human-readable search filters as received from a client.
///
/// Missing required fields deserialize to an empty string and non-string
/// values to their JSON text, so both fail lookup validation with a
/// field-specific message rather than a parse error.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchFilter {
    #[serde(default, deserialize_with = "lookup_name")]
    pub main_location: String,
    #[serde(default, deserialize_with = "lookup_name")]
    pub option: String,
    #[serde(default, deserialize_with = "lookup_name")]
    pub property_type: String,
    #[serde(default, rename = "number_of_bedrooms")]
    pub bedrooms: Option<Bedrooms>,
    #[serde(default)]
    pub sub_location: Option<String>,
}

/// A [`SearchFilter`] whose required fields have been translated to
/// upstream ids.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedFilter {
    pub location_id: &'static str,
    pub option_id: &'static str,
    pub property_type_id: &'static str,
    pub bedrooms: Option<String>,
    /// Free-text sub-area name; `None` when absent or blank.
    pub sub_location: Option<String>,
}

impl SearchFilter {
    /// Validates the filter against the lookup tables.
    ///
    /// Fields are checked in the order location, option, property type and
    /// only the first failure is reported.
    ///
    /// # Errors
    ///
    /// Returns [`LookupError::NotFound`] for the first field whose value is
    /// not a key of its table.
    pub fn resolve(&self) -> Result<ResolvedFilter, LookupError> {
        let location_id = LookupTable::Location.resolve(&self.main_location)?;
        let option_id = LookupTable::Option.resolve(&self.option)?;
        let property_type_id = LookupTable::PropertyType.resolve(&self.property_type)?;

        Ok(ResolvedFilter {
            location_id,
            option_id,
            property_type_id,
            bedrooms: self.bedrooms.as_ref().map(ToString::to_string),
            sub_location: self
                .sub_location
                .clone()
                .filter(|name| !name.is_empty()),
        })
    }
}

/// Reads a lookup-table key from any JSON value.
///
/// Strings are taken as-is, `null` becomes `""` and anything else its JSON
/// text, so `5` is looked up as `"5"`.
///
/// # Errors
///
/// Only fails when the input is not valid JSON.
pub fn lookup_name<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::String(name) => name,
        Value::Null => String::new(),
        other => other.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filter(location: &str, option: &str, property_type: &str) -> SearchFilter {
        SearchFilter {
            main_location: location.to_owned(),
            option: option.to_owned(),
            property_type: property_type.to_owned(),
            bedrooms: None,
            sub_location: None,
        }
    }

    #[test]
    fn resolve_translates_all_three_fields() {
        let resolved = filter("Dubai", "Rent", "Villa").resolve().unwrap();
        assert_eq!(resolved.location_id, "1");
        assert_eq!(resolved.option_id, "2");
        assert_eq!(resolved.property_type_id, "35");
        assert!(resolved.bedrooms.is_none());
    }

    #[test]
    fn resolve_reports_location_before_other_fields() {
        let err = filter("Atlantis", "Lease", "Castle").resolve().unwrap_err();
        assert_eq!(err.to_string(), "Location 'Atlantis' not found");
    }

    #[test]
    fn resolve_reports_option_before_property_type() {
        let err = filter("Sharjah", "Lease", "Castle").resolve().unwrap_err();
        assert_eq!(err.to_string(), "Option 'Lease' not found");
    }

    #[test]
    fn resolve_reports_property_type_last() {
        let err = filter("Sharjah", "Buy", "Castle").resolve().unwrap_err();
        assert_eq!(err.to_string(), "Property type 'Castle' not found");
    }

    #[test]
    fn missing_fields_deserialize_to_empty_and_fail_lookup() {
        let parsed: SearchFilter = serde_json::from_str(r#"{"option":"Rent"}"#).unwrap();
        let err = parsed.resolve().unwrap_err();
        assert_eq!(err.to_string(), "Location '' not found");
    }

    #[test]
    fn bedrooms_accepts_number_or_string() {
        let numeric: SearchFilter =
            serde_json::from_str(r#"{"number_of_bedrooms": 3}"#).unwrap();
        assert_eq!(numeric.bedrooms, Some(Bedrooms::Count(Number::from(3u64))));

        let label: SearchFilter =
            serde_json::from_str(r#"{"number_of_bedrooms": "2"}"#).unwrap();
        assert_eq!(label.bedrooms, Some(Bedrooms::Label("2".to_owned())));

        let null: SearchFilter =
            serde_json::from_str(r#"{"number_of_bedrooms": null}"#).unwrap();
        assert!(null.bedrooms.is_none());
    }

    #[test]
    fn resolve_renders_bedrooms_as_string() {
        let mut f = filter("Dubai", "Rent", "Apartment");
        f.bedrooms = Some(Bedrooms::Count(Number::from(2u64)));
        assert_eq!(f.resolve().unwrap().bedrooms.as_deref(), Some("2"));
    }

    #[test]
    fn bedrooms_accepts_any_json_number() {
        let float: SearchFilter =
            serde_json::from_str(r#"{"number_of_bedrooms": 2.0}"#).unwrap();
        assert_eq!(
            float.bedrooms.as_ref().map(ToString::to_string).as_deref(),
            Some("2.0")
        );

        let negative: SearchFilter =
            serde_json::from_str(r#"{"number_of_bedrooms": -1}"#).unwrap();
        assert_eq!(
            negative.bedrooms.as_ref().map(ToString::to_string).as_deref(),
            Some("-1")
        );
    }

    #[test]
    fn non_string_names_fail_lookup_with_their_json_text() {
        let parsed: SearchFilter = serde_json::from_str(
            r#"{"main_location": 5, "option": "Rent", "property_type": "Villa"}"#,
        )
        .unwrap();
        let err = parsed.resolve().unwrap_err();
        assert_eq!(err.to_string(), "Location '5' not found");

        let parsed: SearchFilter = serde_json::from_str(
            r#"{"main_location": "Dubai", "option": null, "property_type": "Villa"}"#,
        )
        .unwrap();
        assert_eq!(parsed.option, "");

        let parsed: SearchFilter = serde_json::from_str(
            r#"{"main_location": "Dubai", "option": "Rent", "property_type": true}"#,
        )
        .unwrap();
        let err = parsed.resolve().unwrap_err();
        assert_eq!(err.to_string(), "Property type 'true' not found");
    }

    #[test]
    fn resolve_drops_blank_sub_location() {
        let mut f = filter("Dubai", "Rent", "Apartment");
        f.sub_location = Some(String::new());
        assert!(f.resolve().unwrap().sub_location.is_none());

        f.sub_location = Some("Dubai Marina".to_owned());
        assert_eq!(
            f.resolve().unwrap().sub_location.as_deref(),
            Some("Dubai Marina")
        );
    }
}
