//! Epsilon-insensitive support-vector regression with a radial-basis
//! kernel.
//!
//! The regressor generalizes the sparse actual-interest scores across
//! the full catalogue. Hyperparameters are fixed design constants: no
//! cross-validation or search is performed, and the kernel width follows
//! the data-driven "scale" policy `1 / (n_features * variance)` computed
//! over the scaled training matrix.
//!
//! Training maximizes the standard SVR dual with a deterministic sweep
//! of pairwise coordinate updates. Each update moves a pair of dual
//! coefficients in opposition, which preserves the sum-to-zero equality
//! constraint by construction; the epsilon tube makes the pair objective
//! piecewise quadratic, so the exact maximizer is found by evaluating
//! the stationary point of each linear piece alongside the breakpoints
//! and box endpoints.

#![expect(
    clippy::float_arithmetic,
    clippy::indexing_slicing,
    clippy::cast_precision_loss,
    reason = "dual optimisation is dense numeric code over small fixed buffers"
)]

use crate::scale::Features;

/// Hyperparameters for the epsilon-insensitive regression.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SvrParams {
    /// Box constraint on each dual coefficient (regularization).
    pub c: f64,
    /// Half-width of the insensitive tube around the targets.
    pub epsilon: f64,
}

impl Default for SvrParams {
    fn default() -> Self {
        Self {
            c: 1.0,
            epsilon: 0.1,
        }
    }
}

const N_FEATURES: f64 = 3.0;
const SWEEP_EPOCHS: usize = 64;
const CONVERGENCE_TOL: f64 = 1e-8;
const MIN_CURVATURE: f64 = 1e-12;
const FREE_MARGIN: f64 = 1e-9;

/// A fitted RBF support-vector regressor.
#[derive(Debug, Clone, PartialEq)]
pub struct RbfSvr {
    gamma: f64,
    beta: Vec<f64>,
    bias: f64,
    support: Vec<Features>,
}

impl RbfSvr {
    /// Fit the regressor on scaled training features and their targets.
    ///
    /// Returns `None` when fewer than two samples are supplied or when
    /// the feature and target counts disagree; regression on a single
    /// observation is unrecoverable for this stage.
    #[must_use]
    pub fn fit(samples: &[Features], targets: &[f64], params: SvrParams) -> Option<Self> {
        if samples.len() < 2 || samples.len() != targets.len() {
            return None;
        }
        let gamma = scale_gamma(samples);
        let kernel = gram_matrix(samples, gamma);
        let (beta, output) = optimise_dual(&kernel, targets, params);
        let bias = estimate_bias(&beta, &output, targets, params);
        Some(Self {
            gamma,
            beta,
            bias,
            support: samples.to_vec(),
        })
    }

    /// The kernel width selected by the "scale" policy.
    #[must_use]
    pub const fn gamma(&self) -> f64 {
        self.gamma
    }

    /// Predict the target for one scaled feature vector.
    #[must_use]
    pub fn predict(&self, features: Features) -> f64 {
        let weighted: f64 = self
            .support
            .iter()
            .zip(&self.beta)
            .map(|(sv, beta)| beta * rbf(*sv, features, self.gamma))
            .sum();
        weighted + self.bias
    }
}

fn rbf(a: Features, b: Features, gamma: f64) -> f64 {
    let squared: f64 = a.iter().zip(b).map(|(x, y)| (x - y) * (x - y)).sum();
    (-gamma * squared).exp()
}

/// `gamma = 1 / (n_features * variance)` over the flattened training
/// matrix; falls back to `1.0` for a zero-variance matrix.
fn scale_gamma(samples: &[Features]) -> f64 {
    let count = (samples.len() * 3) as f64;
    let sum: f64 = samples.iter().flatten().sum();
    let mean = sum / count;
    let variance = samples
        .iter()
        .flatten()
        .map(|value| (value - mean).powi(2))
        .sum::<f64>()
        / count;
    if variance > 0.0 {
        1.0 / (N_FEATURES * variance)
    } else {
        1.0
    }
}

fn gram_matrix(samples: &[Features], gamma: f64) -> Vec<Vec<f64>> {
    samples
        .iter()
        .map(|a| samples.iter().map(|b| rbf(*a, *b, gamma)).collect())
        .collect()
}

/// Sweep pairwise coordinate updates over the dual until the largest
/// step falls below tolerance or the epoch budget runs out. Returns the
/// dual coefficients and the bias-free outputs `f_i = Σ_j β_j K_ij`.
fn optimise_dual(kernel: &[Vec<f64>], targets: &[f64], params: SvrParams) -> (Vec<f64>, Vec<f64>) {
    let n = targets.len();
    let mut beta = vec![0.0_f64; n];
    let mut output = vec![0.0_f64; n];

    for _ in 0..SWEEP_EPOCHS {
        let mut largest_step = 0.0_f64;
        for i in 0..n {
            for j in (i + 1)..n {
                let step = pair_step(kernel, targets, &beta, &output, i, j, params);
                if step.abs() <= CONVERGENCE_TOL {
                    continue;
                }
                beta[i] += step;
                beta[j] -= step;
                for k in 0..n {
                    output[k] += step * (kernel[k][i] - kernel[k][j]);
                }
                largest_step = largest_step.max(step.abs());
            }
        }
        if largest_step <= CONVERGENCE_TOL {
            break;
        }
    }
    (beta, output)
}

/// Exact maximizer of the pair subproblem `β_i += t`, `β_j -= t`.
///
/// The objective gain is `gap·t − η·t²/2 − ε·(|β_i+t| + |β_j−t| − |β_i|
/// − |β_j|)`, concave and piecewise quadratic in `t`. Candidates are the
/// stationary point of each sign regime, the two absolute-value
/// breakpoints, and the box endpoints; the best feasible candidate wins.
fn pair_step(
    kernel: &[Vec<f64>],
    targets: &[f64],
    beta: &[f64],
    output: &[f64],
    i: usize,
    j: usize,
    params: SvrParams,
) -> f64 {
    let eta = kernel[i][i] + kernel[j][j] - 2.0 * kernel[i][j];
    if eta <= MIN_CURVATURE {
        return 0.0;
    }
    let gap = (targets[i] - targets[j]) - (output[i] - output[j]);
    let lo = (-params.c - beta[i]).max(beta[j] - params.c);
    let hi = (params.c - beta[i]).min(beta[j] + params.c);
    if lo >= hi {
        return 0.0;
    }

    let mut candidates = [lo, hi, -beta[i], beta[j], 0.0, 0.0, 0.0, 0.0];
    let mut index = 4;
    for sign_i in [-1.0, 1.0] {
        for sign_j in [-1.0, 1.0] {
            candidates[index] = (gap - params.epsilon * (sign_i - sign_j)) / eta;
            index += 1;
        }
    }

    let gain = |t: f64| {
        gap * t - 0.5 * eta * t * t
            - params.epsilon
                * ((beta[i] + t).abs() + (beta[j] - t).abs() - beta[i].abs() - beta[j].abs())
    };

    // t = 0 is always feasible and gains nothing; only accept strict
    // improvements.
    let mut best_t = 0.0_f64;
    let mut best_gain = 0.0_f64;
    for t in candidates {
        if t < lo || t > hi {
            continue;
        }
        let value = gain(t);
        if value > best_gain {
            best_gain = value;
            best_t = t;
        }
    }
    best_t
}

/// Recover the bias from the KKT conditions of the fitted dual.
///
/// Free support vectors (strictly inside the box) sit exactly on the
/// tube edge, so each gives `b = y_i − f_i − ε·sign(β_i)`; their mean is
/// used. When no coefficient is free the mean residual stands in.
fn estimate_bias(beta: &[f64], output: &[f64], targets: &[f64], params: SvrParams) -> f64 {
    let mut sum = 0.0_f64;
    let mut count = 0_usize;
    for ((&b, &f), &y) in beta.iter().zip(output).zip(targets) {
        if b.abs() > FREE_MARGIN && b.abs() < params.c - FREE_MARGIN {
            sum += y - f - params.epsilon * b.signum();
            count += 1;
        }
    }
    if count > 0 {
        return sum / count as f64;
    }
    let residual: f64 = output
        .iter()
        .zip(targets)
        .map(|(&f, &y)| y - f)
        .sum();
    residual / targets.len() as f64
}
