use crate::model::{ElementKind, RouteMetadataSummary, TaggedElement};

pub const HIGHWAY: &str = "highway";
pub const SURFACE: &str = "surface";
pub const NAME: &str = "name";
pub const MAXSPEED: &str = "maxspeed";
pub const LANES: &str = "lanes";

/// reads the integer at the start of a tag value, in the manner of
/// `parseInt`. handles values such as:
///   - 50        (50)
///   - 30 mph    (30)
///   - 2.5       (2)
///   - " 3"      (3)
///
/// and yields nothing for text without leading digits ("two", "none", "").
/// a digit run too long for an `i64` also yields nothing, where `parseInt`
/// would still return an imprecise number.
pub fn parse_leading_integer(s: &str) -> Option<i64> {
    let trimmed = s.trim_start();
    let (negative, unsigned) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };
    let digits_end = unsigned
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(unsigned.len());
    if digits_end == 0 {
        return None;
    }
    let value = unsigned[..digits_end].parse::<i64>().ok()?;
    if negative {
        Some(-value)
    } else {
        Some(value)
    }
}

/// folds one element into the running summary. only ways with at least one
/// tag contribute; unparseable numeric tags are skipped.
pub fn accumulate(mut summary: RouteMetadataSummary, element: &TaggedElement) -> RouteMetadataSummary {
    if element.kind != ElementKind::Way || element.tags.is_empty() {
        return summary;
    }
    if let Some(highway) = element.tag(HIGHWAY) {
        summary.highway_types.insert(String::from(highway));
    }
    if let Some(surface) = element.tag(SURFACE) {
        summary.surfaces.insert(String::from(surface));
    }
    if let Some(name) = element.tag(NAME) {
        summary.road_names.insert(String::from(name));
    }
    if let Some(speed) = element.tag(MAXSPEED).and_then(parse_leading_integer) {
        summary.max_speeds.push(speed);
    }
    if let Some(lanes) = element.tag(LANES).and_then(parse_leading_integer) {
        summary.total_lanes = summary.total_lanes.saturating_add(lanes);
    }
    summary
}

/// reduces raw elements into a [`RouteMetadataSummary`].
pub fn summarize<'a, I>(elements: I) -> RouteMetadataSummary
where
    I: IntoIterator<Item = &'a TaggedElement>,
{
    elements
        .into_iter()
        .fold(RouteMetadataSummary::default(), accumulate)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{ElementKind, TaggedElement};

    fn way(tags: &[(&str, &str)]) -> TaggedElement {
        TaggedElement::new(ElementKind::Way, tags)
    }

    #[test]
    fn leading_integer() {
        assert_eq!(parse_leading_integer("50"), Some(50));
        assert_eq!(parse_leading_integer("30 mph"), Some(30));
        assert_eq!(parse_leading_integer("2.5"), Some(2));
        assert_eq!(parse_leading_integer("  3"), Some(3));
        assert_eq!(parse_leading_integer("-1"), Some(-1));
        assert_eq!(parse_leading_integer("+4"), Some(4));
        assert_eq!(parse_leading_integer("two"), None);
        assert_eq!(parse_leading_integer("none"), None);
        assert_eq!(parse_leading_integer("-"), None);
        assert_eq!(parse_leading_integer(""), None);
    }

    #[test]
    fn mph_speed_and_text_lanes() {
        let elements = vec![way(&[
            ("highway", "primary"),
            ("maxspeed", "30 mph"),
            ("lanes", "two"),
        ])];
        let summary = summarize(&elements);
        assert!(summary.highway_types.contains("primary"));
        assert_eq!(summary.max_speeds, vec![30]);
        assert_eq!(summary.total_lanes, 0);
    }

    #[test]
    fn total_lanes_sums_parseable_values() {
        let elements = vec![
            way(&[("highway", "primary"), ("lanes", "2")]),
            way(&[("highway", "secondary"), ("lanes", "3")]),
            way(&[("highway", "residential"), ("lanes", "many")]),
            way(&[("highway", "service")]),
        ];
        assert_eq!(summarize(&elements).total_lanes, 5);
    }

    #[test]
    fn huge_lane_counts_saturate() {
        let elements = vec![
            way(&[("highway", "primary"), ("lanes", "9223372036854775807")]),
            way(&[("highway", "primary"), ("lanes", "2")]),
        ];
        assert_eq!(summarize(&elements).total_lanes, i64::MAX);
        let negative = vec![
            way(&[("highway", "primary"), ("lanes", "-9223372036854775807")]),
            way(&[("highway", "primary"), ("lanes", "-5")]),
        ];
        assert_eq!(summarize(&negative).total_lanes, i64::MIN);
    }

    #[test]
    fn overlong_digit_run_is_skipped() {
        assert_eq!(parse_leading_integer("99999999999999999999"), None);
        let elements = vec![way(&[("highway", "primary"), ("lanes", "99999999999999999999")])];
        assert_eq!(summarize(&elements).total_lanes, 0);
    }

    #[test]
    fn nodes_and_untagged_ways_are_ignored() {
        let elements = vec![
            TaggedElement::new(ElementKind::Node, &[("amenity", "cafe"), ("name", "Bean")]),
            way(&[]),
            TaggedElement::new(ElementKind::Other, &[("highway", "primary")]),
        ];
        assert!(summarize(&elements).is_empty());
    }

    #[test]
    fn sets_dedup_and_speeds_keep_order() {
        let elements = vec![
            way(&[("highway", "primary"), ("maxspeed", "50"), ("name", "High St"), ("surface", "asphalt")]),
            way(&[("highway", "primary"), ("maxspeed", "30"), ("name", "High St"), ("surface", "Asphalt")]),
            way(&[("highway", "tertiary"), ("maxspeed", "50")]),
        ];
        let summary = summarize(&elements);
        assert_eq!(summary.highway_types.len(), 2);
        assert_eq!(summary.road_names.len(), 1);
        // case-sensitive, no normalization
        assert_eq!(summary.surfaces.len(), 2);
        assert_eq!(summary.max_speeds, vec![50, 30, 50]);
    }

    #[test]
    fn reduction_is_repeatable() {
        let elements = vec![
            way(&[("highway", "motorway"), ("maxspeed", "70 mph"), ("lanes", "3")]),
            way(&[("highway", "trunk"), ("maxspeed", "40"), ("lanes", "2")]),
        ];
        assert_eq!(summarize(&elements), summarize(&elements));
    }
}
