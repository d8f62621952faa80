use ndarray::{Array, Dimension, IntoDimension};

/// Step size for the central finite difference.
const H: f64 = 1e-4;

/// Estimates the gradient of a scalar objective with central finite differences.
///
/// For every coordinate `i` of `params`, the objective is evaluated at
/// `params[i] + h` and `params[i] - h` (h = 1e-4) and the partial derivative is
/// approximated as `(f_plus - f_minus) / (2h)`. The perturbation happens on a
/// scratch copy: `params` itself is never mutated, and the objective receives
/// the perturbed array as an explicit argument rather than reading shared state.
///
/// This costs `2 * params.len()` full objective evaluations per call, which is
/// acceptable only for very small parameter arrays. That cost is the documented
/// trade-off for not deriving analytic gradients.
///
/// No validation is performed; NaN or infinite values in `params` or produced
/// by the objective propagate silently into the result.
///
/// # Parameters
///
/// - `objective` - Scalar-valued function of the (perturbed) parameter array
/// - `params` - Parameter array to differentiate with respect to; any dimensionality
///
/// # Returns
///
/// * `Array<f64, D>` - An array of the same shape as `params` holding the estimated partial derivatives
///
/// # Example
/// ```rust
/// use ndarray::array;
/// use numgradnet::gradient::numerical_gradient;
///
/// // f(x) = sum(x^2), true gradient 2x
/// let x = array![1.0, 2.0, 3.0];
/// let grad = numerical_gradient(|v| v.mapv(|e| e * e).sum(), &x);
/// assert!((grad[1] - 4.0).abs() < 1e-4);
/// ```
pub fn numerical_gradient<D, F>(mut objective: F, params: &Array<f64, D>) -> Array<f64, D>
where
    D: Dimension,
    F: FnMut(&Array<f64, D>) -> f64,
{
    let mut scratch = params.clone();
    let mut grads = Array::zeros(params.raw_dim());

    for pattern in ndarray::indices(params.raw_dim()) {
        let index = pattern.into_dimension();
        let original = scratch[index.clone()];

        scratch[index.clone()] = original + H;
        let f_plus = objective(&scratch);

        scratch[index.clone()] = original - H;
        let f_minus = objective(&scratch);

        scratch[index.clone()] = original;
        grads[index] = (f_plus - f_minus) / (2.0 * H);
    }

    grads
}
