use nalgebra::{Point2, Point3, Vector2, Vector3};
use std::f32::consts::PI;

pub trait ExtendF32 {
    /// Normalize an angle to between -PI and PI.
    fn normalize_angle(self) -> Self;
}

impl ExtendF32 for f32 {
    fn normalize_angle(self) -> Self {
        let result = self % (PI * 2.0);
        if result < -PI {
            result + (PI * 2.0)
        } else if result >= PI {
            result - (PI * 2.0)
        } else {
            result
        }
    }
}

pub trait ExtendVector2 {
    fn to_3d(&self, z: f32) -> Vector3<f32>;
}

impl ExtendVector2 for Vector2<f32> {
    fn to_3d(&self, z: f32) -> Vector3<f32> {
        Vector3::new(self.x, self.y, z)
    }
}

pub trait ExtendVector3 {
    fn to_2d(&self) -> Vector2<f32>;
}

impl ExtendVector3 for Vector3<f32> {
    fn to_2d(&self) -> Vector2<f32> {
        Vector2::new(self.x, self.y)
    }
}

pub trait ExtendPoint2 {
    fn to_3d(&self, z: f32) -> Point3<f32>;
    /// The world-space heading from this point to `other`.
    fn angle_to(&self, other: Point2<f32>) -> f32;
}

impl ExtendPoint2 for Point2<f32> {
    fn to_3d(&self, z: f32) -> Point3<f32> {
        Point3::new(self.x, self.y, z)
    }

    fn angle_to(&self, other: Point2<f32>) -> f32 {
        let diff = other - self;
        f32::atan2(diff.y, diff.x)
    }
}

pub trait ExtendPoint3 {
    fn to_2d(&self) -> Point2<f32>;
}

impl ExtendPoint3 for Point3<f32> {
    fn to_2d(&self) -> Point2<f32> {
        Point2::new(self.x, self.y)
    }
}

#[cfg(test)]
mod tests {
    use crate::ext::{ExtendF32, ExtendPoint2};
    use nalgebra::Point2;
    use std::f32::consts::PI;

    #[test]
    fn normalize_angle() {
        assert!(((2.5 * PI).normalize_angle() - 0.5 * PI).abs() < 1e-6);
        assert!(((-2.5 * PI).normalize_angle() + 0.5 * PI).abs() < 1e-6);
        assert_eq!(0.0.normalize_angle(), 0.0);
    }

    #[test]
    fn angle_to() {
        let origin = Point2::new(0.0, 0.0);
        assert!((origin.angle_to(Point2::new(100.0, 0.0))).abs() < 1e-6);
        assert!((origin.angle_to(Point2::new(0.0, 100.0)) - 0.5 * PI).abs() < 1e-6);
    }
}
