/// A macro that generates a getter method for any field.
///
/// This macro creates a public getter method that returns the value
/// of the specified field. The generated method includes appropriate documentation
/// describing the field being accessed.
///
/// # Parameters
///
/// - `$method_name` - The name of the getter method (e.g., get_learning_rate)
/// - `$field_name` - The name of the field to access (e.g., learning_rate)
/// - `$return_type` - The return type of the getter method
macro_rules! get_field {
    ($method_name:ident, $field_name:ident, $return_type:ty) => {
        #[doc = concat!("Gets the `", stringify!($field_name), "` field.\n\n")]
        #[doc = "# Returns\n\n"]
        #[doc = concat!("* `", stringify!($return_type), "` - The value of the `", stringify!($field_name), "` field")]
        pub fn $method_name(&self) -> $return_type {
            self.$field_name
        }
    };
}

/// Module `error` defines the error types returned by the crate.
///
/// - `ModelError` - validation and processing failures raised by the model
/// - `IoError` - failures while writing debug dumps to disk
pub mod error;

/// Module `math` contains the activation and loss functions used by the network.
///
/// All functions operate on `f64` ndarray views and are pure: they never mutate
/// their inputs and perform no validation.
///
/// # Core Functions
///
/// - `sigmoid` - Elementwise logistic function
/// - `softmax` - Numerically stabilized softmax over a single example
/// - `mean_squared_error` - Half sum of squared differences
/// - `cross_entropy_error` - Single-example cross entropy with epsilon guard
/// - `argmax` - Index and value of the largest element
///
/// # Example
/// ```rust
/// use ndarray::array;
/// use numgradnet::math::softmax;
///
/// let scores = array![1.0, 2.0, 3.0];
/// let probabilities = softmax(scores.view());
/// assert!((probabilities.sum() - 1.0).abs() < 1e-12);
/// ```
pub mod math;

/// Module `gradient` provides the numerical gradient estimator.
///
/// Gradients are approximated by central finite differences, one coordinate at
/// a time, instead of analytic backpropagation. This costs one pair of full
/// objective evaluations per parameter and is only practical for tiny models;
/// that trade-off is the point of this crate.
///
/// # Example
/// ```rust
/// use ndarray::array;
/// use numgradnet::gradient::numerical_gradient;
///
/// let x = array![1.0, 2.0, 3.0];
/// let grad = numerical_gradient(|v| v.mapv(|e| e * e).sum(), &x);
/// assert!((grad[0] - 2.0).abs() < 1e-4);
/// ```
pub mod gradient;

/// Module `network` implements the two-layer perceptron `SimpleNet`.
///
/// The model holds two weight matrices and two bias vectors, predicts class
/// probabilities with a sigmoid hidden layer followed by a softmax output
/// layer, and trains by estimating the loss gradient of every parameter array
/// with finite differences.
///
/// # Example
/// ```rust
/// use numgradnet::dataset::load_tiny;
/// use numgradnet::network::SimpleNet;
///
/// let (x, y) = load_tiny();
/// let mut net = SimpleNet::new(3, 2, 3, 0.1, Some(42)).unwrap();
/// net.fit(x.view(), y.view(), 10, Some(42)).unwrap();
/// let probabilities = net.predict(x.row(0)).unwrap();
/// println!("prediction: {}", probabilities);
/// ```
pub mod network;

/// Module `dataset` offers a built-in demo dataset and label encoding helpers.
pub mod dataset;

/// A convenience module that re-exports the most commonly used items from this crate.
///
/// # Example
/// ```rust
/// use numgradnet::prelude::*;
/// ```
pub mod prelude;
