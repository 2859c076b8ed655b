use std::ops;

pub trait Point: Copy + Sized + IntoIterator<Item = f64> {
    /// Set all the values to this value.
    fn all(v: f64) -> Self;

    /// Set all values to zero.
    fn zero() -> Self {
        Self::all(0.)
    }

    /// Scale point by multiplying all dimensions by `scalar`.
    fn scale(self, scalar: f64) -> Self;

    /// Calculate the magnitude of the vector.
    fn mag(self) -> f64 {
        self.into_iter()
            .zip(self)
            .map(|(a, b)| a * b)
            .sum::<f64>()
            .sqrt()
    }

    /// Return the minimum of each dimension.
    fn min_all(self, b: Self) -> Self {
        xfm(self, b, f64::min)
    }

    /// Return the maximum of each dimension.
    fn max_all(self, b: Self) -> Self {
        xfm(self, b, f64::max)
    }

    /// Perform a transformation on each pair of dimensions.
    fn xfm<F: Fn(f64, f64) -> f64>(self, b: Self, f: F) -> Self;
}

pub trait Add<Rhs = Self> {
    fn add(self, rhs: Rhs) -> Self;
    fn sub(self, rhs: Rhs) -> Self
    where
        Self: Sized + Copy,
        Rhs: Point,
    {
        self.add(rhs.scale(-1.0))
    }
}

/// 2D Point (X,Y).
pub type Point2 = [f64; 2];

impl Add for Point2 {
    fn add(self, rhs: Self) -> Self {
        xfm(self, rhs, ops::Add::add)
    }

    fn sub(self, rhs: Self) -> Self {
        xfm(self, rhs, ops::Sub::sub)
    }
}
impl Point for Point2 {
    fn all(v: f64) -> Self {
        [v; 2]
    }
    fn scale(self, scalar: f64) -> Self {
        self.map(|f| f * scalar)
    }
    fn xfm<F: Fn(f64, f64) -> f64>(self, b: Self, f: F) -> Self {
        let mut x = self.into_iter().zip(b).map(|(a, b)| f(a, b));
        [x.next().unwrap(), x.next().unwrap()]
    }
}

pub trait ToPoint2 {
    fn to_p2(self) -> Point2;
}

impl ToPoint2 for Point2 {
    fn to_p2(self) -> Point2 {
        self
    }
}
impl ToPoint2 for &Point2 {
    fn to_p2(self) -> Point2 {
        *self
    }
}

/// Euclidean distance between two points.
pub fn distance(a: Point2, b: Point2) -> f64 {
    b.sub(a).mag()
}

/// Helper function which effectively transforms to [`Point::xfm`].
#[inline(always)]
pub fn xfm<P: Point, F: Fn(f64, f64) -> f64>(a: P, b: P, f: F) -> P {
    P::xfm(a, b, f)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn point_adding() {
        let p = [0.0, 1.0].add([3.0, 1.0]);
        assert_eq!(p, [3.0, 2.0]);

        let p = [2.0, 1.0].sub([3.0, 1.0]);
        assert_eq!(p, [-1.0, 0.0]);
    }

    #[test]
    fn point_scaling() {
        let p = [0.0, 1.0].scale(2.0);
        assert_eq!(p, [0.0, 2.0]);

        let p = [-2.0, 0.5].scale(-0.5);
        assert_eq!(p, [1.0, -0.25]);
    }

    #[test]
    fn mag_testing() {
        let m = [3.0, 4.0].mag() - 5.0;
        assert!(m.abs() < 1e-11);

        let m = [3.0, -4.0].mag() - 5.0;
        assert!(m.abs() < 1e-11);

        let m = [-3.0, 4.0].mag() - 5.0;
        assert!(m.abs() < 1e-11);
    }

    #[test]
    fn distance_testing() {
        let d = distance([1.0, 1.0], [4.0, 5.0]) - 5.0;
        assert!(d.abs() < 1e-11);

        assert_eq!(distance([2.0, -3.0], [2.0, -3.0]), 0.0);
    }

    #[test]
    fn min_max_all() {
        assert_eq!([0.0, 5.0].min_all([1.0, 2.0]), [0.0, 2.0]);
        assert_eq!([0.0, 5.0].max_all([1.0, 2.0]), [1.0, 5.0]);
    }
}
