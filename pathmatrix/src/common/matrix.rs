//! Row-major layout of a square matrix stored in a single vector.

/// Number of cells, or `None` if it does not fit in `usize`.
pub fn linear_len(vertex_count: usize) -> Option<usize> {
    vertex_count.checked_mul(vertex_count)
}

pub fn index(row: usize, col: usize, vertex_count: usize) -> usize {
    row * vertex_count + col
}

pub fn coords(index: usize, vertex_count: usize) -> (usize, usize) {
    let col = index % vertex_count;
    let row = index / vertex_count;
    (row, col)
}

pub fn is_diagonal(index: usize, vertex_count: usize) -> bool {
    let (row, col) = coords(index, vertex_count);
    row == col
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn index_coords_inverse() {
        let n = 5;
        for i in 0..linear_len(n).unwrap() {
            let (row, col) = coords(i, n);
            assert_eq!(index(row, col, n), i);
        }
    }

    #[test]
    fn linear_len_overflow() {
        assert_eq!(linear_len(4), Some(16));
        assert_eq!(linear_len(usize::MAX), None);
        assert_eq!(linear_len(1 << (usize::BITS / 2)), None);
    }

    #[test]
    fn diagonal() {
        assert!(is_diagonal(0, 3));
        assert!(is_diagonal(4, 3));
        assert!(is_diagonal(8, 3));
        assert!(!is_diagonal(1, 3));
        assert!(!is_diagonal(3, 3));
    }
}
