use ndarray::{Array1, array};
use numgradnet::dataset::{load_tiny, one_hot};
use numgradnet::error::ModelError;

#[test]
fn load_tiny_returns_the_single_demo_example() {
    let (x, y) = load_tiny();

    assert_eq!(x.shape(), &[1, 3]);
    assert_eq!(y.shape(), &[1, 3]);
    assert_eq!(x.row(0), array![1.0, 0.0, 1.0]);
    assert_eq!(y.row(0), array![1.0, 0.0, 0.0]);
}

#[test]
fn one_hot_infers_class_count_from_labels() {
    let labels = array![0usize, 1, 2, 1, 0];
    let encoded = one_hot(labels.view(), None).unwrap();

    assert_eq!(encoded.shape(), &[5, 3]);
    for (i, &label) in labels.iter().enumerate() {
        for class in 0..3 {
            let expected = if class == label { 1.0 } else { 0.0 };
            assert_eq!(encoded[[i, class]], expected);
        }
    }
}

#[test]
fn one_hot_honors_an_explicit_class_count() {
    let labels = array![0usize, 1];
    let encoded = one_hot(labels.view(), Some(4)).unwrap();

    assert_eq!(encoded.shape(), &[2, 4]);
    assert_eq!(encoded[[0, 0]], 1.0);
    assert_eq!(encoded[[1, 1]], 1.0);
    assert_eq!(encoded.sum(), 2.0);
}

#[test]
fn one_hot_rejects_a_class_count_smaller_than_the_labels() {
    let labels = array![0usize, 2];

    assert!(matches!(
        one_hot(labels.view(), Some(2)),
        Err(ModelError::InputValidationError(_))
    ));
}

#[test]
fn one_hot_of_empty_labels_is_an_empty_matrix() {
    let labels = Array1::<usize>::zeros(0);
    let encoded = one_hot(labels.view(), Some(3)).unwrap();

    assert_eq!(encoded.shape(), &[0, 3]);
}
