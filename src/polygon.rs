use crate::*;

/// An ordered set of vertices describing a closed boundary.
///
/// The closing edge (last point back to the first) is implicit; it is never
/// stored but always yielded by [`Polygon2::edges`].
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Polygon2(Vec<Point2>);

impl Polygon2 {
    pub fn new<I, P>(points: I) -> Result<Self, &'static str>
    where
        I: IntoIterator<Item = P>,
        P: ToPoint2,
    {
        let points = points.into_iter().map(ToPoint2::to_p2).collect::<Vec<_>>();
        if points.len() < 3 {
            Err("polygon requires 3 or more points to be valid")
        } else {
            Ok(Polygon2(points))
        }
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn pts(&self) -> &[Point2] {
        &self.0
    }

    pub fn iter(&self) -> impl ExactSizeIterator<Item = Point2> + '_ {
        self.0.iter().copied()
    }

    /// Iterate the boundary edges in vertex order, wraparound edge last.
    pub fn edges(&self) -> impl Iterator<Item = (Point2, Point2)> + '_ {
        let wrap = std::iter::once((self.0[self.0.len() - 1], self.0[0]));
        self.0
            .iter()
            .zip(&self.0[1..])
            .map(|(&a, &b)| (a, b))
            .chain(wrap)
    }
}

impl Area for Polygon2 {
    /// 2D plan area via the shoelace formula.
    ///
    /// The winding direction does not matter, the magnitude is returned.
    ///
    /// # Example
    /// ```rust
    /// use shapes::*;
    /// let p = Polygon2::new([
    ///     [0.0, 0.0],
    ///     [2.0, 0.0],
    ///     [2.0, 3.0],
    ///     [0.0, 3.0]
    /// ]).unwrap();
    ///
    /// assert!((p.area() - 6.0).abs() < 1e-3);
    /// ```
    fn area(&self) -> f64 {
        // https://en.wikipedia.org/wiki/Shoelace_formula
        self.edges()
            .map(|([ax, ay], [bx, by])| ax * by - ay * bx)
            .sum::<f64>()
            .abs()
            * 0.5
    }
}

impl Perimeter for Polygon2 {
    /// Cumulative Euclidean edge length, closing edge included.
    ///
    /// # Example
    /// ```rust
    /// use shapes::*;
    /// let p = Polygon2::new([
    ///     [0.0, 0.0],
    ///     [4.0, 0.0],
    ///     [0.0, 3.0]
    /// ]).unwrap();
    ///
    /// assert!((p.perimeter() - 12.0).abs() < 1e-3);
    /// ```
    fn perimeter(&self) -> f64 {
        self.edges().map(|(a, b)| distance(a, b)).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quickcheck::TestResult;

    #[test]
    fn too_few_points() {
        assert!(Polygon2::new([[0.0, 0.0], [1.0, 1.0]]).is_err());
        assert!(Polygon2::new([[0.0, 0.0], [1.0, 1.0], [1.0, 0.0]]).is_ok());
    }

    #[test]
    fn edges_include_wraparound() {
        let p = Polygon2::new([[0.0, 0.0], [1.0, 0.0], [1.0, 1.0]]).unwrap();
        let edges = p.edges().collect::<Vec<_>>();
        assert_eq!(
            edges,
            vec![
                ([0.0, 0.0], [1.0, 0.0]),
                ([1.0, 0.0], [1.0, 1.0]),
                ([1.0, 1.0], [0.0, 0.0]),
            ]
        );
    }

    #[test]
    fn unit_square_metrics() {
        let p = Polygon2::new([[0.0, 0.0], [1.0, 0.0], [1.0, 1.0], [0.0, 1.0]]).unwrap();
        assert_eq!(p.area(), 1.0);
        assert_eq!(p.perimeter(), 4.0);
    }

    #[test]
    fn triangle_metrics() {
        let p = Polygon2::new([[0.0, 0.0], [4.0, 0.0], [0.0, 3.0]]).unwrap();
        assert_eq!(p.area(), 6.0);
        assert_eq!(p.perimeter(), 12.0);
    }

    #[test]
    fn collinear_points_zero_area() {
        let p = Polygon2::new([[0.0, 0.0], [1.0, 1.0], [2.0, 2.0]]).unwrap();
        assert_eq!(p.area(), 0.0);
    }

    #[test]
    fn winding_direction_ignored() {
        let cw = Polygon2::new([[0.0, 0.0], [0.0, 1.0], [1.0, 1.0], [1.0, 0.0]]).unwrap();
        let ccw = Polygon2::new([[0.0, 0.0], [1.0, 0.0], [1.0, 1.0], [0.0, 1.0]]).unwrap();
        assert_eq!(cw.area(), ccw.area());
    }

    #[quickcheck]
    fn area_invariant_under_rotation(poly: crate::LatticePoly, k: usize) -> bool {
        let k = k % poly.pts.len();
        let area = Polygon2::new(poly.pts.iter()).unwrap().area();
        let rotated = poly.pts[k..].iter().chain(&poly.pts[..k]);
        area == Polygon2::new(rotated).unwrap().area()
    }

    #[quickcheck]
    fn perimeter_non_negative(poly: crate::LatticePoly) -> TestResult {
        let p = Polygon2::new(poly.pts.iter()).unwrap();
        let per = p.perimeter();
        if per < 0.0 {
            return TestResult::failed();
        }
        // zero only when every point coincides
        if per == 0.0 {
            let first = poly.pts[0];
            return TestResult::from_bool(poly.pts.iter().all(|&p| p == first));
        }
        TestResult::passed()
    }
}
