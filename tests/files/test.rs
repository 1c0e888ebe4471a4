use std::env;
use std::fs;
use std::process;

use sparse_ops::algorithm::{Operation, add, multiply, subtract, transpose};
use sparse_ops::algorithm::error::OperationError;
use sparse_ops::data::linear_algebra::Dimensions;
use sparse_ops::data::linear_algebra::matrix::SparseMatrix;
use sparse_ops::io::error::ImportError;
use sparse_ops::io::{export, import};

use super::get_test_file_path;

fn load(name: &str) -> SparseMatrix {
    import(&get_test_file_path(name)).unwrap()
}

#[test]
fn square() {
    let square = load("square");
    let identity = load("identity");
    assert_eq!(identity, SparseMatrix::identity(2));

    let sum = add(&square, &identity).unwrap();
    assert_eq!(sum.triples(), vec![(0, 0, 2), (0, 1, 2), (1, 0, 3), (1, 1, 5)]);

    let difference = subtract(&square, &identity).unwrap();
    assert_eq!(difference.triples(), vec![(0, 1, 2), (1, 0, 3), (1, 1, 3)]);

    assert_eq!(multiply(&square, &identity), Ok(square.clone()));
    assert_eq!(transpose(&transpose(&square)), square);
}

#[test]
fn wide_times_tall() {
    let wide = load("wide");
    let tall = load("tall");
    assert_eq!(wide.dimensions(), Dimensions::new(3, 4));
    assert_eq!(wide.nnz(), 3);

    let product = multiply(&wide, &tall).unwrap();
    assert_eq!(product.dimensions(), Dimensions::new(3, 2));
    assert_eq!(product.triples(), vec![(0, 0, 14), (2, 0, -20), (2, 1, 5)]);

    assert!(matches!(
        multiply(&tall, &tall),
        Err(OperationError::DimensionMismatch { operation: Operation::Multiply, .. }),
    ));
    assert!(add(&wide, &transpose(&tall)).is_err());
}

#[test]
fn export_and_import() {
    let product = Operation::Multiply.apply(&load("wide"), Some(&load("tall"))).unwrap();

    let path = env::temp_dir().join(format!("sparse-ops-product-{}.txt", process::id()));
    export(&product, &path).unwrap();
    let text = fs::read_to_string(&path).unwrap();
    let reimported: SparseMatrix = import(&path).unwrap();
    fs::remove_file(&path).unwrap();

    assert_eq!(text, "rows=3\ncols=2\n(0,0,14)\n(2,0,-20)\n(2,1,5)\n");
    assert_eq!(reimported, product);
}

#[test]
fn malformed() {
    let path = get_test_file_path("malformed");

    match import::<i64>(&path) {
        Err(ImportError::Format { path: error_path, source }) => {
            assert_eq!(error_path, path);
            assert_eq!(source.line_number(), Some(4));
        },
        other => panic!("Expected a format error, got {:?}", other),
    }
}

#[test]
fn duplicate() {
    let result = import::<i64>(&get_test_file_path("duplicate"));

    assert!(matches!(
        result,
        Err(ImportError::Format { source, .. }) if source.line_number() == Some(4)
    ));
}

#[test]
fn missing_file() {
    let result = import::<i64>(&get_test_file_path("does_not_exist"));

    assert!(matches!(result, Err(ImportError::IO { .. })));
}
