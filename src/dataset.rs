use crate::error::ModelError;
use ndarray::{Array2, ArrayView1, array};

/// Loads the built-in single-example demo dataset.
///
/// One example with features `[1, 0, 1]` and one-hot label `[1, 0, 0]`, small
/// enough to watch every gradient by hand.
///
/// # Returns
///
/// * `(Array2<f64>, Array2<f64>)` - Feature matrix with shape (1, 3) and one-hot label matrix with shape (1, 3)
///
/// # Example
/// ```rust
/// use numgradnet::dataset::load_tiny;
///
/// let (x, y) = load_tiny();
/// assert_eq!(x.shape(), &[1, 3]);
/// assert_eq!(y.shape(), &[1, 3]);
/// ```
pub fn load_tiny() -> (Array2<f64>, Array2<f64>) {
    let x = array![[1.0, 0.0, 1.0]];
    let y = array![[1.0, 0.0, 0.0]];
    (x, y)
}

/// Converts integer class labels to a one-hot encoded matrix.
///
/// Each row of the result has a single 1.0 at the column of its label and 0.0
/// elsewhere.
///
/// # Parameters
///
/// - `labels` - Integer class labels
/// - `num_classes` - Optional number of classes; inferred as `max(labels) + 1` when `None`
///
/// # Returns
///
/// - `Ok(Array2<f64>)` - One-hot matrix with shape (labels.len(), num_classes)
/// - `Err(ModelError::InputValidationError)` - If an explicit `num_classes` is not greater than the maximum label
///
/// # Example
/// ```rust
/// use ndarray::array;
/// use numgradnet::dataset::one_hot;
///
/// let labels = array![0usize, 2, 1];
/// let encoded = one_hot(labels.view(), None).unwrap();
/// assert_eq!(encoded.shape(), &[3, 3]);
/// assert_eq!(encoded[[1, 2]], 1.0);
/// ```
pub fn one_hot(
    labels: ArrayView1<usize>,
    num_classes: Option<usize>,
) -> Result<Array2<f64>, ModelError> {
    let max_label = labels.iter().copied().max().unwrap_or(0);

    let n_classes = match num_classes {
        Some(n) => {
            if !labels.is_empty() && n <= max_label {
                return Err(ModelError::InputValidationError(format!(
                    "num_classes ({}) must be greater than the maximum label ({})",
                    n, max_label
                )));
            }
            n
        }
        None => max_label + 1,
    };

    let mut encoded = Array2::<f64>::zeros((labels.len(), n_classes));
    for (i, &label) in labels.iter().enumerate() {
        encoded[[i, label]] = 1.0;
    }

    Ok(encoded)
}
