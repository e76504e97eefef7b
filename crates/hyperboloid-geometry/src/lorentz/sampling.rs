//! Random points on the hyperboloid.

use ndarray::{s, Array1};
use rand::Rng;
use rand_distr::{Distribution, Normal, NormalError};

use super::maps::exponential;
use super::points::basepoint;

/// Sample a point near the origin of the hyperboloid.
///
/// Draws the spacelike coordinates of a tangent vector at the basepoint from
/// `N(0, std_dev)` and maps it onto the manifold with the exponential map.
/// This is how the Minkowski trainer initialises its vectors.
///
/// # Errors
///
/// Returns [`NormalError`] when `std_dev` is negative.
pub fn random_hyperboloid_point<R: Rng + ?Sized>(
    rng: &mut R,
    ambient_dim: usize,
    std_dev: f64,
) -> Result<Array1<f64>, NormalError> {
    let normal = Normal::new(0.0, std_dev)?;
    let origin = basepoint(ambient_dim);
    if ambient_dim == 0 {
        return Ok(origin);
    }

    let mut tangent = Array1::zeros(ambient_dim);
    tangent
        .slice_mut(s![..ambient_dim - 1])
        .mapv_inplace(|_| normal.sample(rng));

    Ok(exponential(origin.view(), tangent.view()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lorentz::points::is_on_hyperboloid;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn test_samples_lie_on_hyperboloid() {
        let mut rng = ChaCha8Rng::seed_from_u64(42);
        for _ in 0..100 {
            let p = random_hyperboloid_point(&mut rng, 6, 0.5).expect("valid std dev");
            assert_eq!(p.len(), 6);
            assert!(is_on_hyperboloid(p.view(), 1e-9), "off manifold: {:?}", p);
        }
    }

    #[test]
    fn test_zero_std_dev_gives_basepoint() {
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        let p = random_hyperboloid_point(&mut rng, 3, 0.0).expect("zero std dev is valid");
        assert_eq!(p, basepoint(3));
    }

    #[test]
    fn test_invalid_std_dev() {
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        assert!(random_hyperboloid_point(&mut rng, 3, -1.0).is_err());
    }

    #[test]
    fn test_seeded_sampling_is_deterministic() {
        let a = random_hyperboloid_point(&mut ChaCha8Rng::seed_from_u64(1), 5, 0.1).unwrap();
        let b = random_hyperboloid_point(&mut ChaCha8Rng::seed_from_u64(1), 5, 0.1).unwrap();
        assert_eq!(a, b);
    }
}
