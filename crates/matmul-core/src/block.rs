//! Square block algebra for the Strassen recursion.
//!
//! Blocks are owned buffers, never views into a parent: each recursive
//! frame creates its quadrants, combines its results, and drops them.

/// A square `n x n` block in row-major order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct SquareBlock {
    pub(crate) n: usize,
    pub(crate) data: Vec<i32>,
}

impl SquareBlock {
    pub(crate) fn zeros(n: usize) -> Self {
        Self {
            n,
            data: vec![0; n * n],
        }
    }

    /// Elementwise wrapping addition.
    pub(crate) fn add(&self, other: &Self) -> Self {
        debug_assert_eq!(self.n, other.n);
        let data = self
            .data
            .iter()
            .zip(&other.data)
            .map(|(&x, &y)| x.wrapping_add(y))
            .collect();
        Self { n: self.n, data }
    }

    /// Elementwise wrapping subtraction.
    pub(crate) fn sub(&self, other: &Self) -> Self {
        debug_assert_eq!(self.n, other.n);
        let data = self
            .data
            .iter()
            .zip(&other.data)
            .map(|(&x, &y)| x.wrapping_sub(y))
            .collect();
        Self { n: self.n, data }
    }

    /// Split into four `n/2 x n/2` quadrants (top-left, top-right,
    /// bottom-left, bottom-right). `n` must be even.
    pub(crate) fn split(&self) -> (Self, Self, Self, Self) {
        debug_assert_eq!(self.n % 2, 0);
        let half = self.n / 2;
        let mut q11 = Self::zeros(half);
        let mut q12 = Self::zeros(half);
        let mut q21 = Self::zeros(half);
        let mut q22 = Self::zeros(half);

        for i in 0..half {
            for j in 0..half {
                q11.data[i * half + j] = self.data[i * self.n + j];
                q12.data[i * half + j] = self.data[i * self.n + j + half];
                q21.data[i * half + j] = self.data[(i + half) * self.n + j];
                q22.data[i * half + j] = self.data[(i + half) * self.n + j + half];
            }
        }
        (q11, q12, q21, q22)
    }

    /// Reassemble four quadrants into one `2n x 2n` block.
    pub(crate) fn combine(c11: &Self, c12: &Self, c21: &Self, c22: &Self) -> Self {
        let half = c11.n;
        debug_assert!(half == c12.n && half == c21.n && half == c22.n);
        let n = half * 2;
        let mut out = Self::zeros(n);

        for i in 0..half {
            for j in 0..half {
                out.data[i * n + j] = c11.data[i * half + j];
                out.data[i * n + j + half] = c12.data[i * half + j];
                out.data[(i + half) * n + j] = c21.data[i * half + j];
                out.data[(i + half) * n + j + half] = c22.data[i * half + j];
            }
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn block(n: usize, values: &[i32]) -> SquareBlock {
        SquareBlock {
            n,
            data: values.to_vec(),
        }
    }

    #[test]
    fn add_and_sub_wrap() {
        let a = block(1, &[i32::MAX]);
        let b = block(1, &[1]);
        assert_eq!(a.add(&b).data, [i32::MIN]);
        let c = block(1, &[i32::MIN]);
        assert_eq!(c.sub(&b).data, [i32::MAX]);
    }

    #[test]
    fn split_quadrants() {
        let m = block(4, &(1..=16).collect::<Vec<i32>>());
        let (q11, q12, q21, q22) = m.split();
        assert_eq!(q11.data, [1, 2, 5, 6]);
        assert_eq!(q12.data, [3, 4, 7, 8]);
        assert_eq!(q21.data, [9, 10, 13, 14]);
        assert_eq!(q22.data, [11, 12, 15, 16]);
    }

    #[test]
    fn split_then_combine_round_trips() {
        let m = block(6, &(0..36).collect::<Vec<i32>>());
        let (q11, q12, q21, q22) = m.split();
        assert_eq!(SquareBlock::combine(&q11, &q12, &q21, &q22), m);
    }
}
