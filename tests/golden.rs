//! Cross-crate golden tests: fixed vectors, cross-method equivalence,
//! padding transparency, and threshold-boundary behavior.

use matmul_bench::generate;
use matmul_core::{for_selector, standard, strassen, MatError, Matrix, Options};

fn all_strategies(opts: &Options) -> Vec<std::sync::Arc<dyn matmul_core::Multiply>> {
    for_selector("all", opts).unwrap()
}

#[test]
fn fixed_two_by_two_all_strategies() {
    let a = Matrix::from_rows(&[vec![1, 2], vec![3, 4]]).unwrap();
    let b = Matrix::from_rows(&[vec![5, 6], vec![7, 8]]).unwrap();
    for strat in all_strategies(&Options::default()) {
        let c = strat.multiply(&a, &b).unwrap();
        assert_eq!(
            c.to_rows(),
            vec![vec![19, 22], vec![43, 50]],
            "strategy {} produced the wrong product",
            strat.name()
        );
    }
}

#[test]
fn cross_method_equivalence_128() {
    // The index-sum / index-diff scenario at 128x128.
    let a = generate::index_sum(128);
    let b = generate::index_diff(128);
    let reference = standard::multiply(&a, &b, false, &Options::default()).unwrap();
    for strat in all_strategies(&Options::default()) {
        assert_eq!(
            strat.multiply(&a, &b).unwrap(),
            reference,
            "strategy {} disagrees with the sequential engine",
            strat.name()
        );
    }
}

#[test]
fn dimension_mismatch_rejected_by_all() {
    let a = Matrix::zeros(2, 3);
    let b = Matrix::zeros(4, 2);
    for strat in all_strategies(&Options::default()) {
        assert!(
            matches!(
                strat.multiply(&a, &b),
                Err(MatError::DimensionMismatch {
                    lhs_rows: 2,
                    lhs_cols: 3,
                    rhs_rows: 4,
                    rhs_cols: 2
                })
            ),
            "strategy {} accepted incompatible shapes",
            strat.name()
        );
    }
}

#[test]
fn padding_transparency_non_power_of_two() {
    for n in [65usize, 96, 100] {
        let a = generate::workload(n);
        let b = generate::index_diff(n);
        let reference = standard::multiply(&a, &b, false, &Options::default()).unwrap();
        let c = strassen::multiply(&a, &b, &Options::default()).unwrap();
        assert_eq!(c.rows(), n);
        assert_eq!(c.cols(), n);
        assert_eq!(c, reference, "padding leaked at size {n}");
    }
}

#[test]
fn threshold_boundary_sizes() {
    // One below, at, and one above the default Strassen base case.
    let opts = Options::default();
    for n in [63usize, 64, 65] {
        let a = generate::workload(n);
        let b = generate::index_sum(n);
        let reference = standard::multiply(&a, &b, false, &opts).unwrap();
        assert_eq!(
            strassen::multiply(&a, &b, &opts).unwrap(),
            reference,
            "base-case boundary broke at size {n}"
        );
        assert_eq!(
            standard::multiply(&a, &b, true, &opts).unwrap(),
            reference,
            "parallel band boundary broke at size {n}"
        );
    }
}

#[test]
fn tuned_thresholds_agree_on_small_inputs() {
    // Tiny thresholds force deep recursion even at 16x16.
    let opts = Options {
        parallel_threshold: 2,
        strassen_threshold: 2,
    };
    let a = generate::workload(16);
    let b = generate::index_diff(16);
    let reference = standard::multiply(&a, &b, false, &opts).unwrap();
    for strat in all_strategies(&opts) {
        assert_eq!(strat.multiply(&a, &b).unwrap(), reference);
    }
}

#[test]
fn construction_is_a_deep_copy() {
    let mut grid = vec![vec![1, 2], vec![3, 4]];
    let a = Matrix::from_rows(&grid).unwrap();
    let b = Matrix::from_rows(&[vec![5, 6], vec![7, 8]]).unwrap();
    let before = matmul_core::multiply(&a, &b).unwrap();

    // Mutating the source grid must not reach the matrix.
    grid[0][0] = 999;
    let after = matmul_core::multiply(&a, &b).unwrap();
    assert_eq!(before, after);
}

#[test]
fn snapshot_mutation_does_not_leak_back() {
    let a = Matrix::from_rows(&[vec![1, 2], vec![3, 4]]).unwrap();
    let mut snapshot = a.to_rows();
    snapshot[0][0] = 999;
    assert_eq!(a.to_rows(), vec![vec![1, 2], vec![3, 4]]);
}

#[test]
fn repeated_invocation_identical() {
    let a = generate::workload(32);
    let b = generate::workload(32);
    for strat in all_strategies(&Options::default()) {
        assert_eq!(
            strat.multiply(&a, &b).unwrap(),
            strat.multiply(&a, &b).unwrap()
        );
    }
}

#[test]
fn rectangular_cross_method() {
    let a = Matrix::from_fn(33, 47, |i, j| (i * 3 + j) as i32 - 50);
    let b = Matrix::from_fn(47, 29, |i, j| (i as i32) - 2 * (j as i32));
    let reference = standard::multiply(&a, &b, false, &Options::default()).unwrap();
    for strat in all_strategies(&Options::default()) {
        assert_eq!(strat.multiply(&a, &b).unwrap(), reference);
    }
}

#[test]
fn wrapping_overflow_is_uniform() {
    let a = Matrix::from_fn(65, 65, |i, j| {
        if (i + j) % 3 == 0 {
            i32::MAX
        } else {
            i32::MIN / 2
        }
    });
    let b = Matrix::from_fn(65, 65, |i, j| if i == j { i32::MAX } else { 7 });
    let reference = standard::multiply(&a, &b, false, &Options::default()).unwrap();
    for strat in all_strategies(&Options::default()) {
        assert_eq!(
            strat.multiply(&a, &b).unwrap(),
            reference,
            "strategy {} wraps differently",
            strat.name()
        );
    }
}
