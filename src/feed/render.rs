///! Flat text rendering of a feed snapshot
///!
///! One line per object, `<name> | Hazardous: <bool> | Max Size (km): <n>`,
///! in snapshot traversal order. Rendering is pure; fetching the same body
///! twice produces byte-identical output.

use super::types::{FeedSnapshot, NearEarthObject};

/// Render the whole snapshot, one newline-terminated line per object,
/// dates in snapshot order with no separators between groups. Also emits
/// one debug log line per object.
pub fn render_feed(snapshot: &FeedSnapshot) -> String {
    let mut out = String::new();
    for group in &snapshot.groups {
        for object in &group.objects {
            let line = render_line(object);
            tracing::debug!("[{}] {}", group.date, line);
            out.push_str(&line);
            out.push('\n');
        }
    }
    out
}

pub fn render_line(object: &NearEarthObject) -> String {
    format!(
        "{} | Hazardous: {} | Max Size (km): {}",
        object.name,
        object.is_hazardous,
        format_size(object.max_size_km),
    )
}

/// Whole values keep one fractional digit so the absent-size sentinel
/// reads "-1.0" rather than "-1".
fn format_size(size_km: f64) -> String {
    if size_km.fract() == 0.0 && size_km.is_finite() {
        format!("{size_km:.1}")
    } else {
        format!("{size_km}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::feed::parser::parse_feed_json;

    #[test]
    fn test_render_known_object() {
        let json = r#"{"near_earth_objects":{"2025-10-04":[
            {"name":"Apophis",
             "is_potentially_hazardous_asteroid":true,
             "estimated_diameter":{"kilometers":{"estimated_diameter_max":0.5}}}
        ]}}"#;
        let snapshot = parse_feed_json(json).unwrap();
        assert_eq!(
            render_feed(&snapshot),
            "Apophis | Hazardous: true | Max Size (km): 0.5\n"
        );
    }

    #[test]
    fn test_render_all_defaults() {
        let json = r#"{"near_earth_objects":{"2025-10-04":[{}]}}"#;
        let snapshot = parse_feed_json(json).unwrap();
        assert_eq!(
            render_feed(&snapshot),
            "no name | Hazardous: false | Max Size (km): -1.0\n"
        );
    }

    #[test]
    fn test_two_groups_concatenate_in_response_order() {
        let json = r#"{"near_earth_objects":{
            "2025-10-05":[{"name":"B"}],
            "2025-10-04":[{"name":"A"}]
        }}"#;
        let snapshot = parse_feed_json(json).unwrap();
        let text = render_feed(&snapshot);
        assert_eq!(
            text,
            "B | Hazardous: false | Max Size (km): -1.0\n\
             A | Hazardous: false | Max Size (km): -1.0\n"
        );
        // No blank separator beyond the per-line newline.
        assert!(!text.contains("\n\n"));
    }

    #[test]
    fn test_line_count_matches_object_count() {
        let json = r#"{"near_earth_objects":{
            "2025-10-04":[{"name":"a"},{"name":"b"}],
            "2025-10-05":[{"name":"c"}]
        }}"#;
        let snapshot = parse_feed_json(json).unwrap();
        let text = render_feed(&snapshot);
        assert_eq!(text.lines().count(), snapshot.total_objects());
    }

    #[test]
    fn test_rendering_is_idempotent() {
        let json = r#"{"near_earth_objects":{"2025-10-04":[
            {"name":"(2019 UO)","estimated_diameter":{"kilometers":{"estimated_diameter_max":0.6209}}}
        ]}}"#;
        let snapshot = parse_feed_json(json).unwrap();
        assert_eq!(render_feed(&snapshot), render_feed(&snapshot));
    }

    #[test]
    fn test_format_size() {
        assert_eq!(format_size(-1.0), "-1.0");
        assert_eq!(format_size(0.5), "0.5");
        assert_eq!(format_size(2.0), "2.0");
        assert_eq!(format_size(0.6209), "0.6209");
    }
}
