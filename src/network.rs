use crate::error::{IoError, ModelError};
use crate::gradient::numerical_gradient;
use crate::math::{argmax, cross_entropy_error, sigmoid, softmax};
use ndarray::{Array1, Array2, ArrayView1, ArrayView2};
use ndarray_rand::RandomExt;
use ndarray_rand::rand::{Rng, SeedableRng, rngs::StdRng};
use ndarray_rand::rand_distr::Normal;
use std::fs::{File, OpenOptions};
use std::io::{BufWriter, Write};

/// Standard deviation of the zero-mean Gaussian used to initialize every
/// parameter. Small initial parameters keep the softmax close to uniform at the
/// start of training.
const INIT_STD_DEV: f64 = 0.01;

/// A two-layer perceptron trained with finite-difference gradients.
///
/// The forward pass is `softmax(sigmoid(x · w1 + b1) · w2 + b2)`. Training does
/// not use backpropagation: each step estimates the loss gradient of all four
/// parameter arrays with the numerical estimator from the `gradient` module,
/// then applies one gradient descent update. One step therefore costs two full
/// forward passes per parameter, which is the deliberate, documented cost of
/// this educational approach.
///
/// All four parameter arrays are owned exclusively by the model, have their
/// shapes fixed at construction, and are only mutated at the end of a training
/// step.
///
/// # Fields
///
/// - `input_size` - Number of input features
/// - `hidden_size` - Width of the sigmoid hidden layer
/// - `output_size` - Number of output classes
/// - `w1` - First weight matrix with shape (input_size, hidden_size)
/// - `b1` - First bias vector with shape (hidden_size)
/// - `w2` - Second weight matrix with shape (hidden_size, output_size)
/// - `b2` - Second bias vector with shape (output_size)
/// - `learning_rate` - Scale factor for each parameter update
/// - `verbose` - Whether training prints per-step diagnostics
///
/// # Example
/// ```rust
/// use numgradnet::dataset::load_tiny;
/// use numgradnet::network::SimpleNet;
///
/// let (x, y) = load_tiny();
///
/// let mut net = SimpleNet::new(3, 2, 3, 0.5, Some(42)).unwrap();
/// net.fit(x.view(), y.view(), 50, Some(42)).unwrap();
///
/// let accuracy = net.evaluate(x.view(), y.view()).unwrap();
/// println!("accuracy: {}", accuracy);
/// ```
pub struct SimpleNet {
    input_size: usize,
    hidden_size: usize,
    output_size: usize,
    w1: Array2<f64>,
    b1: Array1<f64>,
    w2: Array2<f64>,
    b2: Array1<f64>,
    learning_rate: f64,
    verbose: bool,
}

impl SimpleNet {
    /// Creates a new network with Gaussian-initialized parameters.
    ///
    /// All four parameter arrays are drawn from a zero-mean normal distribution
    /// with standard deviation 0.01.
    ///
    /// # Parameters
    ///
    /// - `input_size` - Number of input features, must be greater than 0
    /// - `hidden_size` - Width of the hidden layer, must be greater than 0
    /// - `output_size` - Number of output classes, must be greater than 0
    /// - `learning_rate` - Update step scale, must be positive and finite
    /// - `random_state` - Optional seed for reproducible initialization
    ///
    /// # Returns
    ///
    /// - `Ok(Self)` - An untrained network
    /// - `Err(ModelError::InputValidationError)` - If any size is 0 or the learning rate is invalid
    pub fn new(
        input_size: usize,
        hidden_size: usize,
        output_size: usize,
        learning_rate: f64,
        random_state: Option<u64>,
    ) -> Result<Self, ModelError> {
        if input_size == 0 || hidden_size == 0 || output_size == 0 {
            return Err(ModelError::InputValidationError(format!(
                "Layer sizes must be greater than 0, got input={}, hidden={}, output={}",
                input_size, hidden_size, output_size
            )));
        }
        if !learning_rate.is_finite() || learning_rate <= 0.0 {
            return Err(ModelError::InputValidationError(format!(
                "Learning rate must be positive and finite, got {}",
                learning_rate
            )));
        }

        let dist = Normal::new(0.0, INIT_STD_DEV).unwrap();
        let mut rng = match random_state {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        let w1 = Array2::random_using((input_size, hidden_size), dist, &mut rng);
        let b1 = Array1::random_using(hidden_size, dist, &mut rng);
        let w2 = Array2::random_using((hidden_size, output_size), dist, &mut rng);
        let b2 = Array1::random_using(output_size, dist, &mut rng);

        Ok(Self {
            input_size,
            hidden_size,
            output_size,
            w1,
            b1,
            w2,
            b2,
            learning_rate,
            verbose: false,
        })
    }

    // Getters
    get_field!(get_input_size, input_size, usize);
    get_field!(get_hidden_size, hidden_size, usize);
    get_field!(get_output_size, output_size, usize);
    get_field!(get_learning_rate, learning_rate, f64);
    get_field!(get_verbose, verbose, bool);

    /// Gets a view of the first weight matrix, shape (input_size, hidden_size).
    pub fn get_w1(&self) -> ArrayView2<'_, f64> {
        self.w1.view()
    }

    /// Gets a view of the first bias vector, shape (hidden_size).
    pub fn get_b1(&self) -> ArrayView1<'_, f64> {
        self.b1.view()
    }

    /// Gets a view of the second weight matrix, shape (hidden_size, output_size).
    pub fn get_w2(&self) -> ArrayView2<'_, f64> {
        self.w2.view()
    }

    /// Gets a view of the second bias vector, shape (output_size).
    pub fn get_b2(&self) -> ArrayView1<'_, f64> {
        self.b2.view()
    }

    /// Enables or disables per-step diagnostic printing.
    pub fn set_verbose(&mut self, verbose: bool) -> &mut Self {
        self.verbose = verbose;
        self
    }

    /// Forward pass through candidate parameters.
    ///
    /// Associated function so the training step can evaluate the loss with one
    /// perturbed array while the other three stay at their current values,
    /// without borrowing the whole model.
    fn forward_with(
        x: ArrayView1<f64>,
        w1: &Array2<f64>,
        b1: &Array1<f64>,
        w2: &Array2<f64>,
        b2: &Array1<f64>,
    ) -> Array1<f64> {
        let hidden = sigmoid((x.dot(w1) + b1).view());
        softmax((hidden.dot(w2) + b2).view())
    }

    /// Cross entropy of the forward pass through candidate parameters.
    fn loss_with(
        x: ArrayView1<f64>,
        target: ArrayView1<f64>,
        w1: &Array2<f64>,
        b1: &Array1<f64>,
        w2: &Array2<f64>,
        b2: &Array1<f64>,
    ) -> f64 {
        let output = Self::forward_with(x, w1, b1, w2, b2);
        cross_entropy_error(output.view(), target)
    }

    fn validate_input(&self, x: ArrayView1<f64>) -> Result<(), ModelError> {
        if x.len() != self.input_size {
            return Err(ModelError::InputValidationError(format!(
                "Input length mismatch: expected {}, got {}",
                self.input_size,
                x.len()
            )));
        }
        Ok(())
    }

    fn validate_target(&self, target: ArrayView1<f64>) -> Result<(), ModelError> {
        if target.len() != self.output_size {
            return Err(ModelError::InputValidationError(format!(
                "Target length mismatch: expected {}, got {}",
                self.output_size,
                target.len()
            )));
        }
        Ok(())
    }

    /// Predicts class probabilities for a single example.
    ///
    /// Pure given the current parameters: repeated calls with the same input
    /// and unchanged parameters return bit-identical output.
    ///
    /// # Parameters
    ///
    /// * `x` - Feature vector with length `input_size`
    ///
    /// # Returns
    ///
    /// - `Ok(Array1<f64>)` - Probability distribution over `output_size` classes
    /// - `Err(ModelError::InputValidationError)` - If the input length does not match
    pub fn predict(&self, x: ArrayView1<f64>) -> Result<Array1<f64>, ModelError> {
        self.validate_input(x)?;
        Ok(Self::forward_with(x, &self.w1, &self.b1, &self.w2, &self.b2))
    }

    /// Computes the cross entropy loss of the current parameters on one example.
    ///
    /// # Parameters
    ///
    /// - `x` - Feature vector with length `input_size`
    /// - `target` - One-hot label vector with length `output_size`
    ///
    /// # Returns
    ///
    /// - `Ok(f64)` - The loss value
    /// - `Err(ModelError::InputValidationError)` - If either length does not match
    pub fn loss(&self, x: ArrayView1<f64>, target: ArrayView1<f64>) -> Result<f64, ModelError> {
        self.validate_input(x)?;
        self.validate_target(target)?;
        Ok(Self::loss_with(
            x, target, &self.w1, &self.b1, &self.w2, &self.b2,
        ))
    }

    /// Runs one training step on a single example.
    ///
    /// The loss gradient of each of the four parameter arrays is estimated with
    /// four independent `numerical_gradient` calls; each call perturbs only its
    /// own array while the other three stay fixed at their current values. All
    /// four arrays are then updated in place with `w -= learning_rate * grad`,
    /// moving against the gradient so the loss shrinks.
    ///
    /// # Parameters
    ///
    /// - `x` - Feature vector with length `input_size`
    /// - `target` - One-hot label vector with length `output_size`
    ///
    /// # Returns
    ///
    /// - `Ok(f64)` - The loss on this example after the update
    /// - `Err(ModelError::InputValidationError)` - If either length does not match
    pub fn train_step(
        &mut self,
        x: ArrayView1<f64>,
        target: ArrayView1<f64>,
    ) -> Result<f64, ModelError> {
        self.validate_input(x)?;
        self.validate_target(target)?;

        let grad_w1 = numerical_gradient(
            |w1| Self::loss_with(x, target, w1, &self.b1, &self.w2, &self.b2),
            &self.w1,
        );
        let grad_b1 = numerical_gradient(
            |b1| Self::loss_with(x, target, &self.w1, b1, &self.w2, &self.b2),
            &self.b1,
        );
        let grad_w2 = numerical_gradient(
            |w2| Self::loss_with(x, target, &self.w1, &self.b1, w2, &self.b2),
            &self.w2,
        );
        let grad_b2 = numerical_gradient(
            |b2| Self::loss_with(x, target, &self.w1, &self.b1, &self.w2, b2),
            &self.b2,
        );

        if self.verbose {
            println!(
                "gradients: w1={} b1={} w2={} b2={}",
                grad_w1, grad_b1, grad_w2, grad_b2
            );
        }

        self.w1.scaled_add(-self.learning_rate, &grad_w1);
        self.b1.scaled_add(-self.learning_rate, &grad_b1);
        self.w2.scaled_add(-self.learning_rate, &grad_w2);
        self.b2.scaled_add(-self.learning_rate, &grad_b2);

        self.loss(x, target)
    }

    /// Trains the network by sampling one example per step.
    ///
    /// Each step draws a random row (with replacement) from the training data
    /// and runs `train_step` on it.
    ///
    /// # Parameters
    ///
    /// - `x` - Feature matrix with shape (n_samples, input_size)
    /// - `y` - One-hot label matrix with shape (n_samples, output_size)
    /// - `steps` - Number of training steps, must be greater than 0
    /// - `random_state` - Optional seed for reproducible example sampling
    ///
    /// # Returns
    ///
    /// - `Ok(&mut Self)` - The trained network, for method chaining
    /// - `Err(ModelError::InputValidationError)` - If the shapes do not line up or `steps` is 0
    /// - `Err(ModelError::ProcessingError)` - If the loss stops being finite during training
    pub fn fit(
        &mut self,
        x: ArrayView2<f64>,
        y: ArrayView2<f64>,
        steps: usize,
        random_state: Option<u64>,
    ) -> Result<&mut Self, ModelError> {
        self.validate_dataset(x, y)?;
        if steps == 0 {
            return Err(ModelError::InputValidationError(
                "Number of training steps must be greater than 0".to_string(),
            ));
        }

        let n_samples = x.nrows();
        let mut rng = match random_state {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        for step in 0..steps {
            let row = rng.gen_range(0..n_samples);
            let loss = self.train_step(x.row(row), y.row(row))?;

            if !loss.is_finite() {
                return Err(ModelError::ProcessingError(format!(
                    "Training diverged at step {}: loss is not finite",
                    step + 1
                )));
            }

            if self.verbose {
                println!("step {}/{}: row={} loss={:.6}", step + 1, steps, row, loss);
            }
        }

        Ok(self)
    }

    /// Measures classification accuracy on a labeled dataset.
    ///
    /// An example counts as correct when the argmax of the predicted
    /// distribution matches the argmax of its one-hot label.
    ///
    /// # Parameters
    ///
    /// - `x` - Feature matrix with shape (n_samples, input_size)
    /// - `y` - One-hot label matrix with shape (n_samples, output_size)
    ///
    /// # Returns
    ///
    /// - `Ok(f64)` - Fraction of correctly classified examples in \[0, 1\]
    /// - `Err(ModelError::InputValidationError)` - If the shapes do not line up
    pub fn evaluate(&self, x: ArrayView2<f64>, y: ArrayView2<f64>) -> Result<f64, ModelError> {
        self.validate_dataset(x, y)?;

        let mut correct = 0usize;
        for (xi, yi) in x.outer_iter().zip(y.outer_iter()) {
            let output = self.predict(xi)?;
            match (argmax(output.view()), argmax(yi)) {
                (Some((predicted, _)), Some((expected, _))) if predicted == expected => {
                    correct += 1;
                }
                _ => {}
            }
        }

        Ok(correct as f64 / x.nrows() as f64)
    }

    fn validate_dataset(&self, x: ArrayView2<f64>, y: ArrayView2<f64>) -> Result<(), ModelError> {
        if x.nrows() == 0 {
            return Err(ModelError::InputValidationError(
                "Dataset cannot be empty".to_string(),
            ));
        }
        if x.nrows() != y.nrows() {
            return Err(ModelError::InputValidationError(format!(
                "Row count mismatch: features have {} rows, labels have {} rows",
                x.nrows(),
                y.nrows()
            )));
        }
        if x.ncols() != self.input_size {
            return Err(ModelError::InputValidationError(format!(
                "Feature width mismatch: expected {}, got {}",
                self.input_size,
                x.ncols()
            )));
        }
        if y.ncols() != self.output_size {
            return Err(ModelError::InputValidationError(format!(
                "Label width mismatch: expected {}, got {}",
                self.output_size,
                y.ncols()
            )));
        }
        Ok(())
    }

    /// Writes the current parameter values as human-readable text.
    ///
    /// The file is created or truncated. The layout is for human inspection
    /// only and carries no compatibility guarantee.
    ///
    /// # Parameters
    ///
    /// * `path` - File path to write to
    ///
    /// # Returns
    ///
    /// - `Ok(())` - All four arrays were written and flushed
    /// - `Err(IoError::StdIoError)` - File creation or a write failed
    pub fn dump_parameters(&self, path: &str) -> Result<(), IoError> {
        let file = File::create(path).map_err(IoError::StdIoError)?;
        let mut writer = BufWriter::new(file);

        writeln!(writer, "w1={}\n", self.w1).map_err(IoError::StdIoError)?;
        writeln!(writer, "w2={}\n", self.w2).map_err(IoError::StdIoError)?;
        writeln!(writer, "b1={}\n", self.b1).map_err(IoError::StdIoError)?;
        writeln!(writer, "b2={}\n", self.b2).map_err(IoError::StdIoError)?;

        writer.flush().map_err(IoError::StdIoError)?;
        Ok(())
    }

    /// Appends one input example to a dump file as human-readable text.
    ///
    /// The file is created if it does not exist. Like `dump_parameters`, the
    /// layout carries no compatibility guarantee.
    ///
    /// # Parameters
    ///
    /// - `path` - File path to append to
    /// - `x` - Input example to record
    ///
    /// # Returns
    ///
    /// - `Ok(())` - The example was written and flushed
    /// - `Err(IoError::StdIoError)` - Opening the file or a write failed
    pub fn dump_input(&self, path: &str, x: ArrayView1<f64>) -> Result<(), IoError> {
        let file = OpenOptions::new()
            .append(true)
            .create(true)
            .open(path)
            .map_err(IoError::StdIoError)?;
        let mut writer = BufWriter::new(file);

        writeln!(writer, "input={}", x).map_err(IoError::StdIoError)?;

        writer.flush().map_err(IoError::StdIoError)?;
        Ok(())
    }
}
