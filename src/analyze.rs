use crate::*;
use std::fmt;

/// Why a vertex list was rejected as an analyzable shape.
#[derive(Copy, Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum Rejection {
    /// Fewer than 3 vertices.
    InsufficientVertices,
    /// The boundary crosses itself.
    SelfIntersecting,
}

impl fmt::Display for Rejection {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Rejection::InsufficientVertices => write!(f, "insufficient vertices"),
            Rejection::SelfIntersecting => write!(f, "self-intersecting boundary"),
        }
    }
}

/// Outcome of analyzing one vertex list.
///
/// Built fresh per call; callers branch on the variant rather than catching an
/// error, as a rejected shape is a result, not a failure. Metrics are only
/// carried by the `Valid` arm: a rejected shape reports no perimeter or area
/// even where one could be computed.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub enum Analysis {
    Valid {
        vertices: usize,
        perimeter: f64,
        area: f64,
    },
    Invalid {
        vertices: usize,
        reason: Rejection,
    },
}

impl Analysis {
    pub fn is_valid(&self) -> bool {
        matches!(self, Analysis::Valid { .. })
    }

    pub fn vertices(&self) -> usize {
        match *self {
            Analysis::Valid { vertices, .. } | Analysis::Invalid { vertices, .. } => vertices,
        }
    }

    pub fn perimeter(&self) -> Option<f64> {
        match *self {
            Analysis::Valid { perimeter, .. } => Some(perimeter),
            Analysis::Invalid { .. } => None,
        }
    }

    pub fn area(&self) -> Option<f64> {
        match *self {
            Analysis::Valid { area, .. } => Some(area),
            Analysis::Invalid { .. } => None,
        }
    }

    pub fn rejection(&self) -> Option<Rejection> {
        match *self {
            Analysis::Valid { .. } => None,
            Analysis::Invalid { reason, .. } => Some(reason),
        }
    }
}

/// Analyze a textual vertex list with the lenient parse defaults.
///
/// The single entry point for callers such as an HTTP handler: parse,
/// validate, measure. Pure and stateless, so concurrent calls are fully
/// independent.
///
/// # Example
/// ```rust
/// use shapes::*;
/// let a = analyze("(0,0),(1,0),(1,1),(0,1)").unwrap();
/// assert_eq!(a, Analysis::Valid { vertices: 4, perimeter: 4.0, area: 1.0 });
/// ```
pub fn analyze(vertex_text: &str) -> Result<Analysis, ParseError> {
    analyze_with(vertex_text, ParseOptions::default())
}

/// [`analyze`] with explicit parse options.
pub fn analyze_with(vertex_text: &str, opts: ParseOptions) -> Result<Analysis, ParseError> {
    let points = parse_vertices_with(vertex_text, opts)?;
    log::debug!("received {} vertices: {:?}", points.len(), points);
    Ok(analyze_points(&points))
}

/// Analyze an already-parsed point sequence.
pub fn analyze_points(points: &[Point2]) -> Analysis {
    let vertices = points.len();
    match Polygon2::new(points) {
        Err(_) => Analysis::Invalid {
            vertices,
            reason: Rejection::InsufficientVertices,
        },
        Ok(polygon) => analyze_polygon(&polygon),
    }
}

/// Analyze a constructed polygon: reject self-intersecting boundaries,
/// otherwise measure.
pub fn analyze_polygon(polygon: &Polygon2) -> Analysis {
    let vertices = polygon.len();
    if self_intersects(polygon) {
        Analysis::Invalid {
            vertices,
            reason: Rejection::SelfIntersecting,
        }
    } else {
        Analysis::Valid {
            vertices,
            perimeter: polygon.perimeter(),
            area: polygon.area(),
        }
    }
}
