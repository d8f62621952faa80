use approx::assert_abs_diff_eq;
use ndarray::{Array1, array};
use numgradnet::math::{argmax, cross_entropy_error, mean_squared_error, sigmoid, softmax};

#[test]
fn softmax_sums_to_one_with_elements_in_unit_interval() {
    let inputs = [
        array![1.0, 2.0, 3.0],
        array![-5.0, 0.0, 5.0],
        array![0.0, 0.0, 0.0, 0.0],
        array![42.0],
    ];

    for x in inputs {
        let probabilities = softmax(x.view());
        assert_eq!(probabilities.len(), x.len());
        assert_abs_diff_eq!(probabilities.sum(), 1.0, epsilon = 1e-12);
        for &p in probabilities.iter() {
            assert!(
                (0.0..=1.0).contains(&p),
                "softmax element {} outside [0, 1]",
                p
            );
        }
    }
}

#[test]
fn softmax_is_stable_for_large_scores() {
    // Without max-subtraction exp(1000) would overflow to infinity
    let x = array![1000.0, 1001.0, 1002.0];
    let probabilities = softmax(x.view());

    assert!(probabilities.iter().all(|p| p.is_finite()));
    assert_abs_diff_eq!(probabilities.sum(), 1.0, epsilon = 1e-12);
    // Shifting all scores by a constant must not change the distribution
    let shifted = softmax(array![0.0, 1.0, 2.0].view());
    for (&a, &b) in probabilities.iter().zip(shifted.iter()) {
        assert_abs_diff_eq!(a, b, epsilon = 1e-12);
    }
}

#[test]
fn softmax_sums_to_one_on_random_scores() {
    let scores: Array1<f64> = (0..32)
        .map(|_| rand::random::<f64>() * 20.0 - 10.0)
        .collect();

    let probabilities = softmax(scores.view());
    assert_abs_diff_eq!(probabilities.sum(), 1.0, epsilon = 1e-10);
}

#[test]
fn sigmoid_outputs_lie_strictly_between_zero_and_one() {
    let x = array![-30.0, -1.0, 0.0, 1.0, 30.0];
    let activated = sigmoid(x.view());

    for &a in activated.iter() {
        assert!(a > 0.0 && a < 1.0, "sigmoid output {} not in (0, 1)", a);
    }
    assert_abs_diff_eq!(activated[2], 0.5, epsilon = 1e-12);
}

#[test]
fn sigmoid_matches_scalar_formula() {
    let x = array![0.5, -2.0];
    let activated = sigmoid(x.view());

    assert_abs_diff_eq!(activated[0], 1.0 / (1.0 + (-0.5f64).exp()), epsilon = 1e-15);
    assert_abs_diff_eq!(activated[1], 1.0 / (1.0 + (2.0f64).exp()), epsilon = 1e-15);
}

#[test]
fn mean_squared_error_known_values() {
    let y = array![1.0, 2.0];
    let t = array![0.0, 0.0];
    // (1 + 4) / 2
    assert_abs_diff_eq!(mean_squared_error(y.view(), t.view()), 2.5, epsilon = 1e-12);

    let same = array![3.0, -1.0, 0.5];
    assert_abs_diff_eq!(
        mean_squared_error(same.view(), same.view()),
        0.0,
        epsilon = 1e-12
    );
}

#[test]
fn cross_entropy_known_value() {
    let y = array![0.5, 0.25, 0.25];
    let t = array![1.0, 0.0, 0.0];

    let loss = cross_entropy_error(y.view(), t.view());
    assert_abs_diff_eq!(loss, -(0.5f64).ln(), epsilon = 1e-6);
}

#[test]
fn cross_entropy_stays_finite_on_zero_prediction() {
    // The epsilon guard turns ln(0) into ln(1e-10)
    let y = array![0.0, 1.0];
    let t = array![1.0, 0.0];

    let loss = cross_entropy_error(y.view(), t.view());
    assert!(loss.is_finite());
    assert_abs_diff_eq!(loss, -(1e-10f64).ln(), epsilon = 1e-6);
}

#[test]
fn cross_entropy_is_near_zero_for_perfect_prediction() {
    let y = array![1.0, 0.0, 0.0];
    let t = array![1.0, 0.0, 0.0];

    let loss = cross_entropy_error(y.view(), t.view());
    assert_abs_diff_eq!(loss, 0.0, epsilon = 1e-9);
}

#[test]
fn argmax_finds_first_maximum() {
    assert_eq!(argmax(array![1.0, 3.0, 2.0].view()), Some((1, 3.0)));
    assert_eq!(argmax(array![7.0].view()), Some((0, 7.0)));
    // Ties resolve to the first occurrence
    assert_eq!(argmax(array![2.0, 5.0, 5.0].view()), Some((1, 5.0)));
}

#[test]
fn argmax_of_empty_vector_is_none() {
    let empty = Array1::<f64>::zeros(0);
    assert_eq!(argmax(empty.view()), None);
}
