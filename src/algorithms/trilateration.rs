//! Iterative nonlinear least-squares position estimation.

use nalgebra::{Matrix3x2, Vector2, Vector3};

use crate::core::Point;

/// Range floor applied when the estimate sits on top of an anchor, where
/// the residual's partial derivatives are otherwise undefined.
const MIN_RANGE: f64 = 1e-9;

/// Damped Gauss-Newton solver for 2D trilateration.
///
/// Three range measurements against two unknowns leave no exact solution
/// under noise; the estimate minimizes the sum of squared range residuals
/// `sum_i (dist(p, anchor_i) - d_i)^2`.
pub struct Trilateration {
    /// Maximum number of refinement iterations.
    pub max_iterations: usize,
    /// Step-norm threshold below which the estimate is considered converged.
    pub convergence_tolerance: f64,
    /// Damping floor added to the normal equations; keeps the step solvable
    /// when the anchor geometry is rank-deficient (collinear anchors).
    pub regularization_lambda: f64,
}

impl Default for Trilateration {
    fn default() -> Self {
        Self {
            max_iterations: 50,
            convergence_tolerance: 1e-6,
            regularization_lambda: 1e-6,
        }
    }
}

impl Trilateration {
    pub fn new() -> Self {
        Self::default()
    }

    /// Estimate the emitter position from three anchor positions and the
    /// measured distance to each.
    ///
    /// Terminates for any finite input. Non-convergence, for example from
    /// collinear anchors or heavily inconsistent ranges, degrades to the
    /// best estimate reached within the iteration cap rather than an error.
    /// Output is raw double precision; no rounding is applied here.
    pub fn estimate(&self, anchors: &[Point; 3], distances: &[f64; 3]) -> Point {
        // Start from the centroid of the anchors.
        let mut estimate = Vector2::new(
            (anchors[0].x + anchors[1].x + anchors[2].x) / 3.0,
            (anchors[0].y + anchors[1].y + anchors[2].y) / 3.0,
        );

        let mut lambda: f64 = 1e-3;
        for _ in 0..self.max_iterations {
            let (residuals, jacobian) = residuals_and_jacobian(anchors, distances, &estimate);
            let cost = residuals.dot(&residuals);

            let jt_j = jacobian.transpose() * jacobian;
            let jt_r = jacobian.transpose() * residuals;

            let damping = lambda.max(self.regularization_lambda);
            let mut damped = jt_j;
            damped[(0, 0)] += damping;
            damped[(1, 1)] += damping;

            let step = match damped.lu().solve(&jt_r) {
                Some(step) => step,
                None => {
                    // Numerically singular even with damping; damp harder.
                    lambda = (lambda * 10.0).min(1e6);
                    continue;
                }
            };

            let candidate = estimate - step;
            let (candidate_residuals, _) = residuals_and_jacobian(anchors, distances, &candidate);
            let candidate_cost = candidate_residuals.dot(&candidate_residuals);

            if candidate_cost <= cost {
                // Accept the step and relax the damping.
                estimate = candidate;
                lambda = (lambda * 0.5).max(self.regularization_lambda);
                if step.norm() < self.convergence_tolerance {
                    break;
                }
            } else {
                // Reject the step and damp harder.
                lambda = (lambda * 4.0).min(1e6);
            }
        }

        Point::new(estimate.x, estimate.y)
    }
}

fn residuals_and_jacobian(
    anchors: &[Point; 3],
    distances: &[f64; 3],
    estimate: &Vector2<f64>,
) -> (Vector3<f64>, Matrix3x2<f64>) {
    let mut residuals = Vector3::zeros();
    let mut jacobian = Matrix3x2::zeros();

    for i in 0..3 {
        let dx = estimate.x - anchors[i].x;
        let dy = estimate.y - anchors[i].y;
        let range = (dx * dx + dy * dy).sqrt().max(MIN_RANGE);

        residuals[i] = range - distances[i];
        jacobian[(i, 0)] = dx / range;
        jacobian[(i, 1)] = dy / range;
    }

    (residuals, jacobian)
}
