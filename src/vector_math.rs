use nalgebra::Vector3;

/// Euclidean length of a 3-vector.
#[inline]
pub fn magnitude(vec: &Vector3<f64>) -> f64 {
    vec.norm()
}

/// `true` when all three components are finite real numbers.
#[inline]
pub fn is_finite_vector(vec: &Vector3<f64>) -> bool {
    vec.iter().all(|c| c.is_finite())
}

#[cfg(test)]
mod vector_math_test {
    use super::*;

    #[test]
    fn test_magnitude() {
        assert_eq!(magnitude(&Vector3::new(3.0, 4.0, 12.0)), 13.0);
        assert_eq!(magnitude(&Vector3::zeros()), 0.0);
        assert_eq!(magnitude(&Vector3::new(-1.0, 0.0, 0.0)), 1.0);
    }

    #[test]
    fn test_is_finite_vector() {
        assert!(is_finite_vector(&Vector3::new(1.0, -2.0, 3.0)));
        assert!(!is_finite_vector(&Vector3::new(1.0, f64::NAN, 3.0)));
        assert!(!is_finite_vector(&Vector3::new(f64::INFINITY, 0.0, 0.0)));
    }
}
