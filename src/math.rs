use ndarray::{Array1, ArrayView1};

/// Small constant added to predictions before taking the logarithm, so that a
/// zero probability never produces `ln(0)`.
const CROSS_ENTROPY_DELTA: f64 = 1e-10;

/// Applies the logistic function elementwise.
///
/// # Parameters
///
/// * `x` - Input vector of any real values
///
/// # Returns
///
/// * `Array1<f64>` - A new vector with `1 / (1 + exp(-x))` applied to every element
///
/// # Example
/// ```rust
/// use ndarray::array;
/// use numgradnet::math::sigmoid;
///
/// let activated = sigmoid(array![0.0].view());
/// assert!((activated[0] - 0.5).abs() < 1e-12);
/// ```
pub fn sigmoid(x: ArrayView1<f64>) -> Array1<f64> {
    x.mapv(|v| 1.0 / (1.0 + (-v).exp()))
}

/// Maps a real vector to a probability distribution via normalized exponentials.
///
/// The maximum element is subtracted before exponentiating so that large
/// scores cannot overflow. Handles a single example only; batched input is out
/// of scope.
///
/// # Parameters
///
/// * `x` - Score vector for one example
///
/// # Returns
///
/// * `Array1<f64>` - A vector of the same length whose elements lie in \[0, 1\] and sum to 1
pub fn softmax(x: ArrayView1<f64>) -> Array1<f64> {
    let max = x.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let mut vals = x.mapv(|v| (v - max).exp());
    let sum = vals.sum();
    vals.mapv_inplace(|v| v / sum);
    vals
}

/// Calculates the half sum of squared differences between two vectors.
///
/// # Parameters
///
/// - `y` - Predicted values
/// - `t` - Target values, same length as `y`
///
/// # Returns
///
/// * `f64` - `sum((y - t)^2) / 2`
pub fn mean_squared_error(y: ArrayView1<f64>, t: ArrayView1<f64>) -> f64 {
    (&y - &t).mapv(|d| d * d).sum() / 2.0
}

/// Calculates the cross entropy between a predicted distribution and a one-hot
/// target for a single example.
///
/// A small delta is added to every prediction before the logarithm, so a
/// confident wrong prediction yields a large finite loss instead of infinity.
///
/// # Parameters
///
/// - `y` - Predicted probability distribution
/// - `t` - One-hot target vector, same length as `y`
///
/// # Returns
///
/// * `f64` - `-sum(t * ln(y + 1e-10))`
pub fn cross_entropy_error(y: ArrayView1<f64>, t: ArrayView1<f64>) -> f64 {
    -t.iter()
        .zip(y.iter())
        .map(|(&ti, &yi)| ti * (yi + CROSS_ENTROPY_DELTA).ln())
        .sum::<f64>()
}

/// Finds the index and value of the largest element.
///
/// Ties resolve to the first occurrence.
///
/// # Parameters
///
/// * `x` - Vector to scan
///
/// # Returns
///
/// * `Option<(usize, f64)>` - Index and value of the maximum, or `None` for an empty vector
pub fn argmax(x: ArrayView1<f64>) -> Option<(usize, f64)> {
    let mut best: Option<(usize, f64)> = None;
    for (i, &v) in x.iter().enumerate() {
        match best {
            Some((_, current)) if v <= current => {}
            _ => best = Some((i, v)),
        }
    }
    best
}
