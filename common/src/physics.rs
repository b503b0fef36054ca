use nalgebra::{Unit, UnitQuaternion, Vector3};

/// Returns the forward axis in world coordinates of a car with the given
/// rotation.
pub fn car_forward_axis(rot: UnitQuaternion<f32>) -> Unit<Vector3<f32>> {
    rot * Vector3::x_axis()
}
