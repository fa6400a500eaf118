///! Assessment report renderer
///!
///! Builds the multi-section plain-text report for one NEO. Rendering is
///! pure: the reference time is passed in, so the same record and clock
///! always produce byte-identical text.

use chrono::{DateTime, NaiveDate, Utc};

use super::physics::{
    self, ImpactSetting, LUNAR_DISTANCE_KM, TYPICAL_IMPACT_VELOCITY_MS,
};
use super::types::{CloseApproach, NeoDetail};

const HISTORICAL_APPROACH_LIMIT: usize = 5;
const UPCOMING_APPROACH_LIMIT: usize = 5;

/// Closest recorded approach beyond this distance gets no risk section.
const RISK_ANALYSIS_CUTOFF_KM: f64 = 10_000_000.0;

/// Render the full assessment report for one NEO record.
pub fn render_report(detail: &NeoDetail, now: DateTime<Utc>) -> String {
    let mut lines: Vec<String> = Vec::new();
    let today = now.date_naive();

    let wide_rule = "=".repeat(80);
    lines.push(wide_rule.clone());
    lines.push(format!(
        "COMPREHENSIVE ASTEROID ASSESSMENT: {}",
        text_or(&detail.name, "Unknown")
    ));
    lines.push(wide_rule.clone());

    push_basic_information(&mut lines, detail);
    push_physical_characteristics(&mut lines, detail);
    push_hazard_assessment(&mut lines, detail);
    push_orbital_characteristics(&mut lines, detail);
    push_close_approaches(&mut lines, detail, now, today);
    push_impact_analysis(&mut lines, detail);
    push_consequences(&mut lines, detail);
    push_historical_context(&mut lines, detail);
    push_additional_resources(&mut lines, detail);

    lines.push(String::new());
    lines.push(wide_rule);

    let mut report = lines.join("\n");
    report.push('\n');
    report
}

fn push_section(lines: &mut Vec<String>, title: &str) {
    lines.push(format!("\n  {title}"));
    lines.push("-".repeat(40));
}

fn push_basic_information(lines: &mut Vec<String>, detail: &NeoDetail) {
    push_section(lines, "BASIC INFORMATION");
    lines.push(format!(
        "NASA Reference ID: {}",
        text_or(&detail.neo_reference_id, "Unknown")
    ));
    lines.push(format!("Full Name: {}", text_or(&detail.name, "Unknown")));
    lines.push(format!(
        "Designation: {}",
        text_or(&detail.designation, "N/A")
    ));

    let orbital = detail.orbital_data.as_ref();
    lines.push(format!(
        "Discovery: First observed {}",
        orbital
            .and_then(|orbital| orbital.first_observation_date.as_deref())
            .unwrap_or("Unknown")
    ));
    lines.push(format!(
        "Last observed: {}",
        orbital
            .and_then(|orbital| orbital.last_observation_date.as_deref())
            .unwrap_or("Unknown")
    ));
    lines.push(format!(
        "Data arc: {} days",
        orbital
            .and_then(|orbital| orbital.data_arc_in_days)
            .map_or_else(|| "Unknown".to_string(), |days| days.to_string())
    ));
    lines.push(format!(
        "Observations used: {}",
        orbital
            .and_then(|orbital| orbital.observations_used)
            .map_or_else(|| "Unknown".to_string(), |count| count.to_string())
    ));
}

fn push_physical_characteristics(lines: &mut Vec<String>, detail: &NeoDetail) {
    push_section(lines, "PHYSICAL CHARACTERISTICS");
    let (diameter_min, diameter_max) = detail.diameter_range_m();
    let diameter_avg = detail.average_diameter_m();
    lines.push(format!(
        "Estimated diameter: {diameter_min:.1} - {diameter_max:.1} meters"
    ));
    lines.push(format!("Average diameter: {diameter_avg:.1} meters"));
    lines.push(format!(
        "Absolute magnitude (H): {}",
        detail
            .absolute_magnitude_h
            .map_or_else(|| "Unknown".to_string(), |magnitude| magnitude.to_string())
    ));
    lines.push(format!(
        "Estimated mass: {:.2e} kg",
        physics::mass_kg(diameter_avg)
    ));
}

fn push_hazard_assessment(lines: &mut Vec<String>, detail: &NeoDetail) {
    push_section(lines, "HAZARD ASSESSMENT");
    let hazardous = detail.is_potentially_hazardous_asteroid;
    lines.push(format!(
        "Potentially Hazardous Asteroid (PHA): {}",
        if hazardous { "YES" } else { "NO" }
    ));
    if hazardous {
        lines.push("  This object meets NASA criteria for enhanced monitoring:".to_string());
        lines.push("  - Approaches within 7.5 million km of Earth".to_string());
        lines.push("  - Estimated diameter > 140 meters".to_string());
    }
}

fn push_orbital_characteristics(lines: &mut Vec<String>, detail: &NeoDetail) {
    push_section(lines, "ORBITAL CHARACTERISTICS");
    let orbital = detail.orbital_data.as_ref();
    let field = |value: Option<&str>| value.unwrap_or("Unknown").to_string();

    lines.push(format!(
        "Semi-major axis: {} AU",
        field(orbital.and_then(|orbital| orbital.semi_major_axis.as_deref()))
    ));
    lines.push(format!(
        "Eccentricity: {}",
        field(orbital.and_then(|orbital| orbital.eccentricity.as_deref()))
    ));
    lines.push(format!(
        "Inclination: {}°",
        field(orbital.and_then(|orbital| orbital.inclination.as_deref()))
    ));
    lines.push(format!(
        "Orbital period: {} days",
        field(orbital.and_then(|orbital| orbital.orbital_period.as_deref()))
    ));
    lines.push(format!(
        "Perihelion distance: {} AU",
        field(orbital.and_then(|orbital| orbital.perihelion_distance.as_deref()))
    ));
    lines.push(format!(
        "Aphelion distance: {} AU",
        field(orbital.and_then(|orbital| orbital.aphelion_distance.as_deref()))
    ));

    let orbit_class = orbital.and_then(|orbital| orbital.orbit_class.as_ref());
    lines.push(format!(
        "Orbit class: {} - {}",
        field(orbit_class.and_then(|class| class.orbit_class_type.as_deref())),
        field(orbit_class.and_then(|class| class.orbit_class_description.as_deref())),
    ));
}

fn push_close_approaches(
    lines: &mut Vec<String>,
    detail: &NeoDetail,
    now: DateTime<Utc>,
    today: NaiveDate,
) {
    push_section(lines, "CLOSE APPROACH HISTORY & FUTURE");
    let approaches = &detail.close_approach_data;
    if approaches.is_empty() {
        return;
    }

    lines.push(format!(
        "Total recorded close approaches: {}",
        approaches.len()
    ));

    let closest = closest_approach(approaches);
    let closest_distance_km = closest.and_then(CloseApproach::miss_distance_km).unwrap_or(0.0);
    lines.push(format!(
        "Current Reference Date: {} (UTC)",
        now.format("%Y-%m-%d")
    ));
    lines.push(format!(
        "Closest recorded approach: {}",
        closest
            .and_then(|approach| approach.close_approach_date.as_deref())
            .unwrap_or("Unknown")
    ));
    lines.push(format!(
        "Closest distance: {} km ({:.2} lunar distances)",
        format_thousands(closest_distance_km),
        closest_distance_km / LUNAR_DISTANCE_KM
    ));

    let historical = historical_approaches(approaches, today);
    if !historical.is_empty() {
        lines.push(format!(
            "\nLast {HISTORICAL_APPROACH_LIMIT} Historical Approaches:"
        ));
        for approach in historical {
            lines.push(approach_line(approach));
        }
    }

    let upcoming = upcoming_approaches(approaches, today);
    if !upcoming.is_empty() {
        lines.push(format!("\nUpcoming approaches: {}", upcoming.len()));
        for approach in upcoming.iter().take(UPCOMING_APPROACH_LIMIT) {
            lines.push(approach_line(approach));
        }
    }

    if closest_distance_km < RISK_ANALYSIS_CUTOFF_KM {
        let diameter_avg = detail.average_diameter_m();
        push_section(lines, "RISK ANALYSIS");
        lines.push(format!(
            "Size-based risk: {}",
            physics::size_risk(diameter_avg)
        ));
        lines.push(format!(
            "Approach risk: {}",
            physics::approach_risk(closest_distance_km)
        ));
    }
}

fn push_impact_analysis(lines: &mut Vec<String>, detail: &NeoDetail) {
    push_section(lines, "HYPOTHETICAL IMPACT ANALYSIS");
    lines.push("  NOTE: This is a theoretical analysis for educational purposes".to_string());

    let diameter_avg = detail.average_diameter_m();
    let mass_kg = physics::mass_kg(diameter_avg);
    let energy_j = physics::kinetic_energy_j(mass_kg, TYPICAL_IMPACT_VELOCITY_MS);
    let tnt_kg = physics::tnt_equivalent_kg(energy_j);

    lines.push("Assumed impact velocity: 20 km/s (typical)".to_string());
    lines.push(format!("Kinetic energy: {energy_j:.2e} Joules"));
    lines.push(format!(
        "TNT equivalent: {:.2e} kg ({:.1} gigatons)",
        tnt_kg,
        tnt_kg / 1.0e9
    ));
    lines.push(format!(
        "Estimated crater diameter: {:.0} meters",
        physics::crater_diameter_m(energy_j)
    ));
    lines.push(format!(
        "Equivalent earthquake magnitude: {:.1}",
        physics::seismic_magnitude(energy_j)
    ));
}

fn push_consequences(lines: &mut Vec<String>, detail: &NeoDetail) {
    push_section(lines, "POTENTIAL CONSEQUENCES");
    let diameter_avg = detail.average_diameter_m();
    lines.push(format!(
        "Urban impact casualties: {}",
        physics::casualty_estimate(diameter_avg, ImpactSetting::Urban)
    ));
    lines.push(format!(
        "Rural impact casualties: {}",
        physics::casualty_estimate(diameter_avg, ImpactSetting::Rural)
    ));
    lines.push(format!(
        "Economic damage estimate: {}",
        physics::economic_damage_estimate(diameter_avg)
    ));
}

fn push_historical_context(lines: &mut Vec<String>, detail: &NeoDetail) {
    push_section(lines, "HISTORICAL CONTEXT");
    for line in physics::historical_context(detail.average_diameter_m()) {
        lines.push(line.to_string());
    }
}

fn push_additional_resources(lines: &mut Vec<String>, detail: &NeoDetail) {
    push_section(lines, "ADDITIONAL RESOURCES");
    lines.push(format!(
        "NASA JPL Database: {}",
        text_or(&detail.nasa_jpl_url, "N/A")
    ));
    if detail.is_sentry_object {
        lines.push("  This object is on NASA's Sentry risk assessment system".to_string());
    }

    let orbital = detail.orbital_data.as_ref();
    lines.push(format!(
        "\nOrbit uncertainty: {}",
        orbital
            .and_then(|orbital| orbital.orbit_uncertainty.as_deref())
            .unwrap_or("Unknown")
    ));
    lines.push(format!(
        "Minimum orbit intersection distance: {} AU",
        orbital
            .and_then(|orbital| orbital.minimum_orbit_intersection.as_deref())
            .unwrap_or("Unknown")
    ));
}

/// "  <date>: <distance> km, <velocity> km/s"
fn approach_line(approach: &CloseApproach) -> String {
    format!(
        "  {}: {} km, {} km/s",
        approach.close_approach_date.as_deref().unwrap_or("Unknown"),
        format_thousands(approach.miss_distance_km().unwrap_or(0.0)),
        approach.velocity_km_s().unwrap_or("N/A"),
    )
}

/// Approach with the smallest recorded miss distance; approaches without
/// a usable distance sort last.
fn closest_approach(approaches: &[CloseApproach]) -> Option<&CloseApproach> {
    approaches.iter().min_by(|a, b| {
        a.miss_distance_km()
            .unwrap_or(f64::INFINITY)
            .total_cmp(&b.miss_distance_km().unwrap_or(f64::INFINITY))
    })
}

/// Approaches strictly before `today`, newest first, capped at
/// [`HISTORICAL_APPROACH_LIMIT`]. Undated approaches are skipped.
fn historical_approaches(approaches: &[CloseApproach], today: NaiveDate) -> Vec<&CloseApproach> {
    let mut past: Vec<(NaiveDate, &CloseApproach)> = approaches
        .iter()
        .filter_map(|approach| approach.approach_date().map(|date| (date, approach)))
        .filter(|(date, _)| *date < today)
        .collect();
    past.sort_by(|a, b| b.0.cmp(&a.0));
    past.into_iter()
        .take(HISTORICAL_APPROACH_LIMIT)
        .map(|(_, approach)| approach)
        .collect()
}

/// Approaches strictly after `today`, in response order.
fn upcoming_approaches(approaches: &[CloseApproach], today: NaiveDate) -> Vec<&CloseApproach> {
    approaches
        .iter()
        .filter(|approach| {
            approach
                .approach_date()
                .is_some_and(|date| date > today)
        })
        .collect()
}

fn text_or<'a>(value: &'a Option<String>, fallback: &'a str) -> &'a str {
    value.as_deref().unwrap_or(fallback)
}

/// Thousands separators for a rounded kilometre figure,
/// e.g. 31664.3 → "31,664".
fn format_thousands(value: f64) -> String {
    let rounded = value.round() as i64;
    let digits = rounded.unsigned_abs().to_string();
    let mut grouped = String::new();
    for (index, ch) in digits.chars().rev().enumerate() {
        if index > 0 && index % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    let grouped: String = grouped.chars().rev().collect();
    if rounded < 0 {
        format!("-{grouped}")
    } else {
        grouped
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::parser::parse_neo_json;
    use chrono::TimeZone;

    fn fixed_now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 8, 30, 12, 0, 0).unwrap()
    }

    fn sample_detail() -> NeoDetail {
        parse_neo_json(
            r#"{
                "neo_reference_id": "2099942",
                "name": "99942 Apophis (2004 MN4)",
                "designation": "99942",
                "nasa_jpl_url": "https://ssd.jpl.nasa.gov/tools/sbdb_lookup.html#/?sstr=2099942",
                "absolute_magnitude_h": 19.09,
                "is_potentially_hazardous_asteroid": true,
                "estimated_diameter": {
                    "meters": {"estimated_diameter_min": 310.0, "estimated_diameter_max": 680.0}
                },
                "orbital_data": {
                    "semi_major_axis": ".9226",
                    "eccentricity": ".1914",
                    "inclination": "3.34",
                    "orbital_period": "323.6",
                    "orbit_uncertainty": "0",
                    "minimum_orbit_intersection": ".000234",
                    "orbit_class": {
                        "orbit_class_type": "ATE",
                        "orbit_class_description": "Near-Earth asteroid orbits similar to that of 2062 Aten"
                    }
                },
                "close_approach_data": [
                    {"close_approach_date": "2021-03-06",
                     "relative_velocity": {"kilometers_per_second": "4.68"},
                     "miss_distance": {"kilometers": "16907011.9"}},
                    {"close_approach_date": "2029-04-13",
                     "relative_velocity": {"kilometers_per_second": "7.42"},
                     "miss_distance": {"kilometers": "31664.3"}},
                    {"close_approach_date": "2036-03-26",
                     "relative_velocity": {"kilometers_per_second": "5.93"},
                     "miss_distance": {"kilometers": "50112627.7"}}
                ]
            }"#,
        )
        .unwrap()
    }

    #[test]
    fn test_report_has_every_section() {
        let report = render_report(&sample_detail(), fixed_now());
        for title in [
            "BASIC INFORMATION",
            "PHYSICAL CHARACTERISTICS",
            "HAZARD ASSESSMENT",
            "ORBITAL CHARACTERISTICS",
            "CLOSE APPROACH HISTORY & FUTURE",
            "RISK ANALYSIS",
            "HYPOTHETICAL IMPACT ANALYSIS",
            "POTENTIAL CONSEQUENCES",
            "HISTORICAL CONTEXT",
            "ADDITIONAL RESOURCES",
        ] {
            assert!(report.contains(title), "missing section {title}");
        }
        assert!(report.contains("COMPREHENSIVE ASTEROID ASSESSMENT: 99942 Apophis (2004 MN4)"));
        assert!(report.ends_with("=\n"));
    }

    #[test]
    fn test_closest_approach_and_lunar_distances() {
        let report = render_report(&sample_detail(), fixed_now());
        assert!(report.contains("Closest recorded approach: 2029-04-13"));
        // 31664.3 km / 384400 km ≈ 0.08 lunar distances
        assert!(report.contains("Closest distance: 31,664 km (0.08 lunar distances)"));
    }

    #[test]
    fn test_approach_partition_around_today() {
        let report = render_report(&sample_detail(), fixed_now());
        // 2021 is history, 2029 and 2036 are upcoming relative to 2026-08-30.
        assert!(report.contains("  2021-03-06: 16,907,012 km, 4.68 km/s"));
        assert!(report.contains("Upcoming approaches: 2"));
        assert!(report.contains("  2029-04-13: 31,664 km, 7.42 km/s"));
        assert!(report.contains("  2036-03-26: 50,112,628 km, 5.93 km/s"));
    }

    #[test]
    fn test_risk_section_present_only_for_near_misses() {
        let mut detail = sample_detail();
        // Drop the 2029 near miss; the remaining distances exceed the cutoff.
        detail.close_approach_data.remove(1);
        let report = render_report(&detail, fixed_now());
        assert!(!report.contains("RISK ANALYSIS"));
    }

    #[test]
    fn test_hazard_section_reflects_flag() {
        let report = render_report(&sample_detail(), fixed_now());
        assert!(report.contains("Potentially Hazardous Asteroid (PHA): YES"));
        assert!(report.contains("enhanced monitoring"));

        let mut quiet = sample_detail();
        quiet.is_potentially_hazardous_asteroid = false;
        let report = render_report(&quiet, fixed_now());
        assert!(report.contains("Potentially Hazardous Asteroid (PHA): NO"));
        assert!(!report.contains("enhanced monitoring"));
    }

    #[test]
    fn test_empty_record_renders_with_fallbacks() {
        let detail = parse_neo_json("{}").unwrap();
        let report = render_report(&detail, fixed_now());
        assert!(report.contains("COMPREHENSIVE ASTEROID ASSESSMENT: Unknown"));
        assert!(report.contains("Designation: N/A"));
        assert!(report.contains("Semi-major axis: Unknown AU"));
        assert!(report.contains("Estimated diameter: 0.0 - 0.0 meters"));
        // No approaches: section header only, no totals line.
        assert!(!report.contains("Total recorded close approaches"));
    }

    #[test]
    fn test_rendering_is_deterministic() {
        let detail = sample_detail();
        assert_eq!(
            render_report(&detail, fixed_now()),
            render_report(&detail, fixed_now())
        );
    }

    #[test]
    fn test_format_thousands() {
        assert_eq!(format_thousands(31664.3), "31,664");
        assert_eq!(format_thousands(999.0), "999");
        assert_eq!(format_thousands(50_669_803.0), "50,669,803");
        assert_eq!(format_thousands(0.0), "0");
    }
}
