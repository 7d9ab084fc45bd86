//! Closed-form reference values for `d/dθ E[x²]`, `x ~ Normal(θ, 1)`.

/// Exact gradient, `2θ`.
#[inline]
pub fn analytic_gradient(theta: f64) -> f64 {
    2.0 * theta
}

/// Variance of the score-function estimate from `n` draws.
///
/// With `x = θ + ε`, a single term is `θ²ε + 2θε² + ε³`, whose variance is
/// `θ⁴ + 14θ² + 15`.
#[inline]
pub fn score_function_variance(theta: f64, n: usize) -> f64 {
    let t2 = theta * theta;
    (t2 * t2 + 14.0 * t2 + 15.0) / n as f64
}

/// Variance of the reparameterized estimate from `n` draws, `4 / n`.
#[inline]
pub fn reparameterized_variance(n: usize) -> f64 {
    4.0 / n as f64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gradient_is_twice_theta() {
        assert_eq!(analytic_gradient(2.0), 4.0);
        assert_eq!(analytic_gradient(-0.5), -1.0);
    }

    #[test]
    fn score_variance_at_theta_two() {
        assert_eq!(score_function_variance(2.0, 1), 87.0);
        assert!((score_function_variance(2.0, 10) - 8.7).abs() < 1e-12);
    }

    #[test]
    fn score_variance_at_theta_zero_is_sixth_moment() {
        assert_eq!(score_function_variance(0.0, 1), 15.0);
    }

    #[test]
    fn reparameterized_variance_scales_inversely() {
        assert_eq!(reparameterized_variance(1), 4.0);
        assert_eq!(reparameterized_variance(100), 0.04);
    }

    #[test]
    fn zero_draws_is_unbounded() {
        assert!(reparameterized_variance(0).is_infinite());
    }
}
