pub use crate::dataset::{load_tiny, one_hot};
pub use crate::error::{IoError, ModelError};
pub use crate::gradient::numerical_gradient;
pub use crate::math::{argmax, cross_entropy_error, mean_squared_error, sigmoid, softmax};
pub use crate::network::SimpleNet;
