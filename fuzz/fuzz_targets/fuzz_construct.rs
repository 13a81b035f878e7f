#![no_main]

use libfuzzer_sys::fuzz_target;

use matmul_core::Matrix;

fuzz_target!(|data: &[u8]| {
    // Interpret the input as a possibly-ragged grid: each byte after the
    // first is an element, the first byte picks row lengths.
    if data.is_empty() {
        return;
    }
    let mut grid: Vec<Vec<i32>> = Vec::new();
    let mut row_len = (data[0] as usize % 8) + 1;
    let mut row = Vec::new();
    for &byte in &data[1..] {
        row.push(i32::from(byte));
        if row.len() == row_len {
            grid.push(std::mem::take(&mut row));
            // Vary the length so ragged grids are common.
            row_len = (byte as usize % 9) + 1;
        }
    }
    if !row.is_empty() {
        grid.push(row);
    }

    // Construction must either succeed or reject eagerly, never panic.
    if let Ok(m) = Matrix::from_rows(&grid) {
        assert_eq!(m.rows(), grid.len());
        assert_eq!(m.to_rows(), grid);
        let _ = matmul_core::multiply(&m, &m);
    }
});
