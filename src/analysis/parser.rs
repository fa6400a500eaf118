///! NASA NEO lookup JSON parser

use super::types::NeoDetail;
use crate::error::NeoError;

/// Parse the `neo/{id}` response body into a [`NeoDetail`]. Absent fields
/// are tolerated throughout; wrong-typed present fields fail the parse.
pub fn parse_neo_json(body: &str) -> Result<NeoDetail, NeoError> {
    Ok(serde_json::from_str(body)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    #[test]
    fn test_parse_representative_record() {
        let json = r#"{
            "neo_reference_id": "2099942",
            "name": "99942 Apophis (2004 MN4)",
            "designation": "99942",
            "nasa_jpl_url": "https://ssd.jpl.nasa.gov/tools/sbdb_lookup.html#/?sstr=2099942",
            "absolute_magnitude_h": 19.09,
            "is_potentially_hazardous_asteroid": true,
            "is_sentry_object": false,
            "estimated_diameter": {
                "meters": {"estimated_diameter_min": 310.0, "estimated_diameter_max": 680.0}
            },
            "orbital_data": {
                "semi_major_axis": ".9226568320227788",
                "eccentricity": ".1914424364883511",
                "orbit_class": {
                    "orbit_class_type": "ATE",
                    "orbit_class_description": "Near-Earth asteroid orbits similar to that of 2062 Aten"
                }
            },
            "close_approach_data": [
                {"close_approach_date": "2029-04-13",
                 "relative_velocity": {"kilometers_per_second": "7.42"},
                 "miss_distance": {"kilometers": "31664.3"}}
            ]
        }"#;
        let detail = parse_neo_json(json).unwrap();
        assert_eq!(detail.name.as_deref(), Some("99942 Apophis (2004 MN4)"));
        assert!(detail.is_potentially_hazardous_asteroid);
        assert_eq!(detail.average_diameter_m(), 495.0);
        assert_eq!(detail.close_approach_data.len(), 1);
        assert_eq!(
            detail.orbital_data.unwrap().orbit_class.unwrap().orbit_class_type.as_deref(),
            Some("ATE")
        );
    }

    #[test]
    fn test_empty_object_parses_with_defaults() {
        let detail = parse_neo_json("{}").unwrap();
        assert_eq!(detail.name, None);
        assert!(!detail.is_potentially_hazardous_asteroid);
        assert!(detail.close_approach_data.is_empty());
    }

    #[test]
    fn test_wrong_typed_field_is_structural() {
        let error = parse_neo_json(r#"{"close_approach_data":"nope"}"#).unwrap_err();
        assert_eq!(error.kind(), ErrorKind::Structural);
    }
}
