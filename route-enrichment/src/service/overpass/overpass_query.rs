use std::fmt::Display;

use crate::model::{Coordinate, ElementKind};

/// an existential tag clause such as `way["highway"]`.
/// see <https://wiki.openstreetmap.org/wiki/Overpass_API/Language_Guide#Tag_request_clauses_(or_%22tag_filters%22)>
#[derive(Debug, Clone, PartialEq)]
pub struct TagClause {
    pub kind: ElementKind,
    pub tag: String,
}

impl TagClause {
    pub fn new(kind: ElementKind, tag: &str) -> TagClause {
        TagClause {
            kind,
            tag: String::from(tag),
        }
    }
}

/// union of tag clauses around one point, written in Overpass QL with JSON
/// output, element bodies, then the recursed-down skeleton geometry.
#[derive(Debug, Clone, PartialEq)]
pub struct AroundQuery {
    pub center: Coordinate,
    pub radius_meters: u32,
    pub clauses: Vec<TagClause>,
}

impl AroundQuery {
    /// highway ways and amenity nodes around `center`.
    pub fn road_features(center: Coordinate, radius_meters: u32) -> AroundQuery {
        AroundQuery {
            center,
            radius_meters,
            clauses: vec![
                TagClause::new(ElementKind::Way, "highway"),
                TagClause::new(ElementKind::Node, "amenity"),
            ],
        }
    }
}

impl Display for AroundQuery {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "[out:json];")?;
        writeln!(f, "(")?;
        for clause in self.clauses.iter() {
            let element = match clause.kind {
                ElementKind::Way => "way",
                ElementKind::Node => "node",
                ElementKind::Other => "nwr",
            };
            writeln!(
                f,
                "    {element}[\"{}\"](around:{},{},{});",
                clause.tag,
                self.radius_meters,
                self.center.lat(),
                self.center.lon()
            )?;
        }
        writeln!(f, ");")?;
        writeln!(f, "out body;")?;
        writeln!(f, ">;")?;
        write!(f, "out skel qt;")
    }
}
