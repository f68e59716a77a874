/// Floor applied to a divisor so an all-zero score vector never divides by zero.
pub const EPSILON: f64 = 0.00001;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scale {
    /// Divide by the maximum; the best entry becomes 1.0.
    LargerIsBetter,
    /// Divide the smallest positive value by each entry; the best entry becomes 1.0.
    /// Entries `<= 0` mean "no signal" and become 0.
    SmallerIsBetter,
}

/// Rescale `scores` in place into `[0, 1]`.
pub fn normalize(scores: &mut [f64], scale: Scale) {
    match scale {
        Scale::LargerIsBetter => {
            let max = scores.iter().copied().fold(f64::MIN, f64::max).max(EPSILON);
            for s in scores.iter_mut() {
                *s /= max;
            }
        }
        Scale::SmallerIsBetter => {
            let min = scores.iter().copied().filter(|&s| s > 0.0).fold(f64::INFINITY, f64::min);
            for s in scores.iter_mut() {
                *s = if *s > 0.0 { min / s.max(EPSILON) } else { 0.0 };
            }
        }
    }
}

/// Divide every entry by the true maximum so the largest becomes exactly 1.0.
///
/// Unlike [`Scale::LargerIsBetter`] there is no divisor floor, so tiny values
/// (PageRank over a large corpus) still scale up. All-zero input is left as is.
pub fn scale_to_max(scores: &mut [f64]) {
    let max = scores.iter().copied().fold(0.0, f64::max);
    if max <= 0.0 {
        return;
    }
    for s in scores.iter_mut() {
        *s /= max;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn larger_is_better_scales_to_max() {
        let mut s = vec![0.0, 2.0, 4.0];
        normalize(&mut s, Scale::LargerIsBetter);
        assert_eq!(s, vec![0.0, 0.5, 1.0]);
    }

    #[test]
    fn larger_is_better_all_zero_stays_zero() {
        let mut s = vec![0.0, 0.0];
        normalize(&mut s, Scale::LargerIsBetter);
        assert_eq!(s, vec![0.0, 0.0]);
    }

    #[test]
    fn smaller_is_better_inverts_and_ignores_zero() {
        let mut s = vec![2.0, 0.0, 8.0];
        normalize(&mut s, Scale::SmallerIsBetter);
        assert_eq!(s, vec![1.0, 0.0, 0.25]);
    }

    #[test]
    fn scale_to_max_has_no_floor() {
        let mut s = vec![2.5e-6, 5e-6];
        scale_to_max(&mut s);
        assert_eq!(s, vec![0.5, 1.0]);

        let mut zeros = vec![0.0, 0.0];
        scale_to_max(&mut zeros);
        assert_eq!(zeros, vec![0.0, 0.0]);
    }

    #[test]
    fn empty_slice_is_fine() {
        let mut s: Vec<f64> = Vec::new();
        normalize(&mut s, Scale::SmallerIsBetter);
        normalize(&mut s, Scale::LargerIsBetter);
        scale_to_max(&mut s);
        assert!(s.is_empty());
    }
}
