//! Analysis of simple polygons given as ordered vertex lists.
//!
//! The crate parses a textual coordinate list into points ([`parse_vertices`]),
//! computes perimeter and plan area over the implicitly closed boundary
//! ([`Perimeter`], [`Area`]), checks the boundary for self-intersection
//! ([`self_intersects`]), and rolls the lot up into a single verdict per
//! request ([`analyze`]).

#[cfg(test)]
extern crate quickcheck;
#[cfg(test)]
#[macro_use(quickcheck)]
extern crate quickcheck_macros;

mod analyze;
mod intersect;
mod parse;
mod point;
mod polygon;

pub use analyze::*;
pub use intersect::*;
pub use parse::*;
pub use point::*;
pub use polygon::*;

/// Area can be calculated from an object.
///
/// Note that area is contextual from the object.
/// For a [`Polygon2`] this is the _plan_ area enclosed by the boundary.
/// If implementing this trait be sure to be **explicit** about the area being calculated.
pub trait Area {
    /// Calculate the area of an object.
    fn area(&self) -> f64;
}

/// Perimeter can be calculated from an object.
///
/// For a [`Polygon2`] this is the cumulative edge length, closing edge included.
pub trait Perimeter {
    /// Calculate the perimeter of an object.
    fn perimeter(&self) -> f64;
}

/// Polygon generator with small integer coordinates.
///
/// Coordinates are kept within `i16` so shoelace terms and their sums stay
/// exactly representable, letting properties assert with `==`.
#[cfg(test)]
#[derive(Clone, Debug)]
struct LatticePoly {
    pub pts: Vec<Point2>,
}

#[cfg(test)]
impl quickcheck::Arbitrary for LatticePoly {
    fn arbitrary(g: &mut quickcheck::Gen) -> Self {
        let n = usize::arbitrary(g) % 13 + 3;
        let pts = std::iter::repeat_with(|| [i16::arbitrary(g) as f64, i16::arbitrary(g) as f64])
            .take(n)
            .collect();
        Self { pts }
    }
}
