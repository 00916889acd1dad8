use nalgebra::{Matrix3, Vector3};

/// ZYZ Euler angles in degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EulerAngles {
    pub alpha_deg: f64,
    pub beta_deg: f64,
    pub gamma_deg: f64,
}

const ANTIPARALLEL_EPS: f64 = 1e-12;
const GIMBAL_LOCK_EPS: f64 = 1e-10;

/// Rotation matrix carrying the direction of `from` onto the direction of
/// `to`, built with Rodrigues' formula. Both inputs must be nonzero.
///
/// Antiparallel directions make the formula divide by zero; that case is
/// detected and resolved as a 180° turn about an arbitrary axis orthogonal
/// to `from`. Parallel directions degenerate to the identity without a
/// special branch.
pub fn rotation_between(from: &Vector3<f64>, to: &Vector3<f64>) -> Matrix3<f64> {
    let v1 = from.normalize();
    let v2 = to.normalize();
    let dp = v1.dot(&v2);

    if 1.0 + dp < ANTIPARALLEL_EPS {
        let seed = if v1.x.abs() < 0.9 {
            Vector3::x()
        } else {
            Vector3::y()
        };
        let axis = (seed - v1 * v1.dot(&seed)).normalize();
        let k = skew(&axis);
        return Matrix3::identity() + 2.0 * k * k;
    }

    let k = skew(&v1.cross(&v2));
    Matrix3::identity() + k + k * k / (1.0 + dp)
}

/// Extracts extrinsic z-y-z Euler angles (alpha, beta, gamma) from a
/// rotation matrix, with beta in [0°, 180°].
///
/// At gimbal lock (beta near 0° or 180°) only the sum or difference of
/// alpha and gamma is determined; gamma is then fixed to 0 and alpha
/// carries the whole in-plane angle.
pub fn euler_zyz_degrees(rotation: &Matrix3<f64>) -> EulerAngles {
    let cos_beta = rotation[(2, 2)].clamp(-1.0, 1.0);

    if cos_beta >= 1.0 - GIMBAL_LOCK_EPS {
        let alpha = rotation[(1, 0)].atan2(rotation[(0, 0)]);
        return EulerAngles {
            alpha_deg: alpha.to_degrees(),
            beta_deg: 0.0,
            gamma_deg: 0.0,
        };
    }
    if cos_beta <= -1.0 + GIMBAL_LOCK_EPS {
        let alpha = rotation[(1, 0)].atan2(-rotation[(0, 0)]);
        return EulerAngles {
            alpha_deg: alpha.to_degrees(),
            beta_deg: 180.0,
            gamma_deg: 0.0,
        };
    }

    let alpha = rotation[(2, 1)].atan2(-rotation[(2, 0)]);
    let gamma = rotation[(1, 2)].atan2(rotation[(0, 2)]);
    EulerAngles {
        alpha_deg: alpha.to_degrees(),
        beta_deg: cos_beta.acos().to_degrees(),
        gamma_deg: gamma.to_degrees(),
    }
}

/// ZYZ Euler angles of the minimal rotation carrying `from` onto `to`.
pub fn euler_angles_between(from: &Vector3<f64>, to: &Vector3<f64>) -> EulerAngles {
    euler_zyz_degrees(&rotation_between(from, to))
}

fn skew(v: &Vector3<f64>) -> Matrix3<f64> {
    Matrix3::new(0.0, -v.z, v.y, v.z, 0.0, -v.x, -v.y, v.x, 0.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra::Rotation3;

    const TOLERANCE: f64 = 1e-9;

    fn zyz_matrix(angles: &EulerAngles) -> Matrix3<f64> {
        let rz_gamma =
            Rotation3::from_axis_angle(&Vector3::z_axis(), angles.gamma_deg.to_radians());
        let ry_beta = Rotation3::from_axis_angle(&Vector3::y_axis(), angles.beta_deg.to_radians());
        let rz_alpha =
            Rotation3::from_axis_angle(&Vector3::z_axis(), angles.alpha_deg.to_radians());
        *(rz_gamma * ry_beta * rz_alpha).matrix()
    }

    fn angles_approx_equal(a: &EulerAngles, b: &EulerAngles) -> bool {
        (a.alpha_deg - b.alpha_deg).abs() < TOLERANCE
            && (a.beta_deg - b.beta_deg).abs() < TOLERANCE
            && (a.gamma_deg - b.gamma_deg).abs() < TOLERANCE
    }

    #[test]
    fn identical_vectors_give_identity_angles() {
        let v = Vector3::new(0.3, -1.2, 2.5);
        let angles = euler_angles_between(&v, &v);
        assert!(angles_approx_equal(
            &angles,
            &EulerAngles {
                alpha_deg: 0.0,
                beta_deg: 0.0,
                gamma_deg: 0.0
            }
        ));
    }

    #[test]
    fn z_axis_to_x_axis_is_a_quarter_turn_about_y() {
        let angles = euler_angles_between(&Vector3::z(), &Vector3::x());
        assert!(angles_approx_equal(
            &angles,
            &EulerAngles {
                alpha_deg: 0.0,
                beta_deg: 90.0,
                gamma_deg: 0.0
            }
        ));
    }

    #[test]
    fn z_axis_to_body_diagonal_matches_reference_angles() {
        let diagonal = Vector3::new(1.0, 1.0, 1.0);
        let angles = euler_angles_between(&Vector3::z(), &diagonal);
        assert!((angles.alpha_deg - -45.0).abs() < 1e-9);
        assert!((angles.beta_deg - 54.735_610_317_245_346).abs() < 1e-9);
        assert!((angles.gamma_deg - 45.0).abs() < 1e-9);
    }

    #[test]
    fn result_is_invariant_under_input_scaling() {
        let v1 = Vector3::new(0.5, -0.25, 1.5);
        let v2 = Vector3::new(-1.0, 2.0, 0.5);
        let reference = euler_angles_between(&v1, &v2);
        let scaled = euler_angles_between(&(v1 * 7.0), &(v2 * 0.001));
        assert!(angles_approx_equal(&reference, &scaled));
    }

    #[test]
    fn rotation_carries_first_direction_onto_second() {
        let cases = [
            (Vector3::new(1.0, 0.0, 0.0), Vector3::new(0.0, 1.0, 0.0)),
            (Vector3::new(0.2, 0.3, 0.9), Vector3::new(-1.1, 0.4, 0.2)),
            (Vector3::new(-1.0, -1.0, -1.0), Vector3::new(0.0, 0.0, 1.0)),
        ];
        for (v1, v2) in cases {
            let rotation = rotation_between(&v1, &v2);
            let image = rotation * v1.normalize();
            assert!((image - v2.normalize()).norm() < TOLERANCE);
        }
    }

    #[test]
    fn extracted_angles_reconstruct_the_rotation() {
        let v1 = Vector3::new(0.3, -0.7, 0.1);
        let v2 = Vector3::new(1.2, 0.5, -0.8);
        let rotation = rotation_between(&v1, &v2);
        let rebuilt = zyz_matrix(&euler_zyz_degrees(&rotation));
        assert!((rotation - rebuilt).norm() < TOLERANCE);
    }

    #[test]
    fn swapped_arguments_compose_to_the_identity() {
        let v1 = Vector3::new(0.4, 1.3, -0.6);
        let v2 = Vector3::new(-0.9, 0.2, 1.7);
        let forward = zyz_matrix(&euler_angles_between(&v1, &v2));
        let backward = zyz_matrix(&euler_angles_between(&v2, &v1));
        assert!((forward * backward - Matrix3::identity()).norm() < TOLERANCE);
    }

    #[test]
    fn antiparallel_vectors_resolve_to_a_half_turn() {
        let angles = euler_angles_between(&Vector3::z(), &-Vector3::z());
        assert!(angles.alpha_deg.is_finite());
        assert!(angles.gamma_deg.is_finite());
        assert!((angles.beta_deg - 180.0).abs() < TOLERANCE);

        let rotation = rotation_between(&Vector3::z(), &-Vector3::z());
        let image = rotation * Vector3::z();
        assert!((image - -Vector3::z()).norm() < TOLERANCE);
    }

    #[test]
    fn antiparallel_handling_covers_x_dominant_directions() {
        let v = Vector3::new(2.0, 0.1, 0.1);
        let rotation = rotation_between(&v, &-v);
        let image = rotation * v.normalize();
        assert!((image - -v.normalize()).norm() < TOLERANCE);
        for value in rotation.iter() {
            assert!(value.is_finite());
        }
    }

    #[test]
    fn gimbal_lock_puts_the_whole_in_plane_angle_into_alpha() {
        let quarter_turn = *Rotation3::from_axis_angle(&Vector3::z_axis(), 90f64.to_radians())
            .matrix();
        let angles = euler_zyz_degrees(&quarter_turn);
        assert!((angles.alpha_deg - 90.0).abs() < TOLERANCE);
        assert_eq!(angles.beta_deg, 0.0);
        assert_eq!(angles.gamma_deg, 0.0);
    }
}
