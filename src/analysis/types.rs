///! Raw types for the NASA `neo/{id}` lookup response
///!
///! Nearly every field is optional; the report renderer substitutes
///! "Unknown"/"N/A" for anything absent. NASA returns most orbital numbers
///! as strings, and those are displayed verbatim rather than re-parsed.

use chrono::NaiveDate;
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct NeoDetail {
    pub name: Option<String>,
    pub neo_reference_id: Option<String>,
    pub designation: Option<String>,
    pub nasa_jpl_url: Option<String>,
    pub absolute_magnitude_h: Option<f64>,
    #[serde(default)]
    pub is_potentially_hazardous_asteroid: bool,
    #[serde(default)]
    pub is_sentry_object: bool,
    pub estimated_diameter: Option<EstimatedDiameter>,
    pub orbital_data: Option<OrbitalData>,
    #[serde(default)]
    pub close_approach_data: Vec<CloseApproach>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct EstimatedDiameter {
    pub meters: Option<DiameterRange>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DiameterRange {
    pub estimated_diameter_min: Option<f64>,
    pub estimated_diameter_max: Option<f64>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct OrbitalData {
    pub first_observation_date: Option<String>,
    pub last_observation_date: Option<String>,
    pub data_arc_in_days: Option<i64>,
    pub observations_used: Option<i64>,
    pub semi_major_axis: Option<String>,
    pub eccentricity: Option<String>,
    pub inclination: Option<String>,
    pub orbital_period: Option<String>,
    pub perihelion_distance: Option<String>,
    pub aphelion_distance: Option<String>,
    pub orbit_uncertainty: Option<String>,
    pub minimum_orbit_intersection: Option<String>,
    pub orbit_class: Option<OrbitClass>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct OrbitClass {
    pub orbit_class_type: Option<String>,
    pub orbit_class_description: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CloseApproach {
    pub close_approach_date: Option<String>,
    pub relative_velocity: Option<RelativeVelocity>,
    pub miss_distance: Option<MissDistance>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RelativeVelocity {
    pub kilometers_per_second: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct MissDistance {
    pub kilometers: Option<String>,
}

impl NeoDetail {
    /// Midpoint of the estimated diameter range, in meters. Absent bounds
    /// count as zero, matching the report's "0.0 - 0.0 meters" display.
    pub fn average_diameter_m(&self) -> f64 {
        let (min, max) = self.diameter_range_m();
        (min + max) / 2.0
    }

    pub fn diameter_range_m(&self) -> (f64, f64) {
        let range = self
            .estimated_diameter
            .as_ref()
            .and_then(|diameter| diameter.meters.as_ref());
        (
            range
                .and_then(|range| range.estimated_diameter_min)
                .unwrap_or(0.0),
            range
                .and_then(|range| range.estimated_diameter_max)
                .unwrap_or(0.0),
        )
    }
}

impl CloseApproach {
    /// Approach date parsed as `YYYY-MM-DD`; None when absent or malformed.
    pub fn approach_date(&self) -> Option<NaiveDate> {
        self.close_approach_date
            .as_deref()
            .and_then(|date| NaiveDate::parse_from_str(date, "%Y-%m-%d").ok())
    }

    /// Miss distance in kilometers; None when absent or not numeric.
    pub fn miss_distance_km(&self) -> Option<f64> {
        self.miss_distance
            .as_ref()
            .and_then(|distance| distance.kilometers.as_deref())
            .and_then(|kilometers| kilometers.parse().ok())
    }

    pub fn velocity_km_s(&self) -> Option<&str> {
        self.relative_velocity
            .as_ref()
            .and_then(|velocity| velocity.kilometers_per_second.as_deref())
    }
}
