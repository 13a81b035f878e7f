#![no_main]

use libfuzzer_sys::fuzz_target;

use matmul_core::{for_selector, standard, Matrix, Options};

fuzz_target!(|data: &[u8]| {
    if data.len() < 3 {
        return;
    }
    // Dimensions from the first 3 bytes, capped at 16 for speed.
    let rows = (data[0] as usize % 16) + 1;
    let inner = (data[1] as usize % 16) + 1;
    let cols = (data[2] as usize % 16) + 1;
    let values = &data[3..];

    let pick = |i: usize, j: usize, stride: usize| -> i32 {
        if values.is_empty() {
            0
        } else {
            i32::from(values[(i * stride + j) % values.len()]) - 128
        }
    };

    let a = Matrix::from_fn(rows, inner, |i, j| pick(i, j, inner));
    let b = Matrix::from_fn(inner, cols, |i, j| pick(i, j, cols));

    // Small thresholds so every engine path is exercised.
    let opts = Options {
        parallel_threshold: 2,
        strassen_threshold: 2,
    };

    let reference = standard::multiply(&a, &b, false, &opts).unwrap();
    for strat in for_selector("all", &opts).unwrap() {
        let result = strat.multiply(&a, &b).unwrap();
        assert_eq!(
            result,
            reference,
            "{} disagrees at {rows}x{inner}x{cols}",
            strat.name()
        );
    }
});
