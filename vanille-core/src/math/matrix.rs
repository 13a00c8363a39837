use std::fmt;

use thiserror::Error;

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatrixError {
    #[error("Matrix dimensions must be positive: width={width}, height={height}")]
    InvalidDimension { width: usize, height: usize },
    #[error("Position ({x}, {y}) out of bounds for {width}x{height} matrix")]
    OutOfBounds {
        x: usize,
        y: usize,
        width: usize,
        height: usize,
    },
    #[error("Expected {expected} cells for the matrix, got {actual}")]
    SizeMismatch { expected: usize, actual: usize },
}

/// A fixed size 2D container stored row-major, so `(x, y)` lives at `y * width + x`.
///
/// `x` is the column and `y` the row. Every coordinate access is bounds checked.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Matrix<T> {
    width: usize,
    height: usize,
    data: Vec<T>,
}

impl<T: Default> Matrix<T> {
    /// Creates a matrix with every cell set to `T::default()`.
    pub fn new(width: usize, height: usize) -> Result<Self, MatrixError> {
        Self::from_fn(width, height, |_, _| T::default())
    }
}

impl<T: Clone> Matrix<T> {
    pub fn filled(width: usize, height: usize, value: T) -> Result<Self, MatrixError> {
        let len = Self::checked_len(width, height)?;
        Ok(Self {
            width,
            height,
            data: vec![value; len],
        })
    }

    /// Returns a copy of the cell, or `default` when `(x, y)` is outside the matrix.
    pub fn get_or(&self, x: usize, y: usize, default: T) -> T {
        self.get(x, y).cloned().unwrap_or(default)
    }

    pub fn fill(&mut self, value: T) {
        self.data.fill(value);
    }

    /// Fills the half-open region `[start_x, end_x) x [start_y, end_y)`, clamped to the matrix.
    pub fn fill_region(
        &mut self,
        start_x: usize,
        start_y: usize,
        end_x: usize,
        end_y: usize,
        value: T,
    ) {
        for y in start_y..end_y.min(self.height) {
            for x in start_x..end_x.min(self.width) {
                let index = self.index(x, y);
                self.data[index] = value.clone();
            }
        }
    }

    pub fn sub_matrix(
        &self,
        start_x: usize,
        start_y: usize,
        width: usize,
        height: usize,
    ) -> Result<Self, MatrixError> {
        let end_x = start_x.saturating_add(width);
        let end_y = start_y.saturating_add(height);
        if end_x > self.width || end_y > self.height {
            return Err(MatrixError::OutOfBounds {
                x: end_x.saturating_sub(1),
                y: end_y.saturating_sub(1),
                width: self.width,
                height: self.height,
            });
        }
        Self::from_fn(width, height, |x, y| {
            self.data[self.index(start_x + x, start_y + y)].clone()
        })
    }

    pub fn transpose(&self) -> Self {
        Self {
            width: self.height,
            height: self.width,
            data: (0..self.width)
                .flat_map(|x| (0..self.height).map(move |y| (x, y)))
                .map(|(x, y)| self.data[self.index(x, y)].clone())
                .collect(),
        }
    }

    /// Flips the matrix left to right.
    pub fn mirror_horizontal(&self) -> Self {
        Self {
            width: self.width,
            height: self.height,
            data: self
                .data
                .chunks(self.width)
                .flat_map(|row| row.iter().rev().cloned())
                .collect(),
        }
    }
}

impl<T> Matrix<T> {
    pub fn from_fn(
        width: usize,
        height: usize,
        mut initializer: impl FnMut(usize, usize) -> T,
    ) -> Result<Self, MatrixError> {
        let len = Self::checked_len(width, height)?;
        let mut data = Vec::with_capacity(len);
        for y in 0..height {
            for x in 0..width {
                data.push(initializer(x, y));
            }
        }
        Ok(Self {
            width,
            height,
            data,
        })
    }

    /// Wraps row-major `data`, which must hold exactly `width * height` cells.
    pub fn from_vec(width: usize, height: usize, data: Vec<T>) -> Result<Self, MatrixError> {
        let expected = Self::checked_len(width, height)?;
        if data.len() != expected {
            return Err(MatrixError::SizeMismatch {
                expected,
                actual: data.len(),
            });
        }
        Ok(Self {
            width,
            height,
            data,
        })
    }

    pub const fn width(&self) -> usize {
        self.width
    }

    pub const fn height(&self) -> usize {
        self.height
    }

    pub const fn is_valid_position(&self, x: usize, y: usize) -> bool {
        x < self.width && y < self.height
    }

    pub fn get(&self, x: usize, y: usize) -> Result<&T, MatrixError> {
        self.check_bounds(x, y)?;
        Ok(&self.data[self.index(x, y)])
    }

    pub fn get_mut(&mut self, x: usize, y: usize) -> Result<&mut T, MatrixError> {
        self.check_bounds(x, y)?;
        let index = self.index(x, y);
        Ok(&mut self.data[index])
    }

    pub fn set(&mut self, x: usize, y: usize, value: T) -> Result<(), MatrixError> {
        *self.get_mut(x, y)? = value;
        Ok(())
    }

    /// Iterates row by row, yielding `(x, y, value)`.
    pub fn iter(&self) -> impl Iterator<Item = (usize, usize, &T)> {
        let width = self.width;
        self.data
            .iter()
            .enumerate()
            .map(move |(i, value)| (i % width, i / width, value))
    }

    pub fn map<R>(&self, mut mapper: impl FnMut(usize, usize, &T) -> R) -> Matrix<R> {
        Matrix {
            width: self.width,
            height: self.height,
            data: self.iter().map(|(x, y, value)| mapper(x, y, value)).collect(),
        }
    }

    pub fn any(&self, mut predicate: impl FnMut(usize, usize, &T) -> bool) -> bool {
        self.iter().any(|(x, y, value)| predicate(x, y, value))
    }

    pub fn all(&self, mut predicate: impl FnMut(usize, usize, &T) -> bool) -> bool {
        self.iter().all(|(x, y, value)| predicate(x, y, value))
    }

    pub fn into_vec(self) -> Vec<T> {
        self.data
    }

    const fn index(&self, x: usize, y: usize) -> usize {
        y * self.width + x
    }

    fn check_bounds(&self, x: usize, y: usize) -> Result<(), MatrixError> {
        if self.is_valid_position(x, y) {
            Ok(())
        } else {
            Err(MatrixError::OutOfBounds {
                x,
                y,
                width: self.width,
                height: self.height,
            })
        }
    }

    fn checked_len(width: usize, height: usize) -> Result<usize, MatrixError> {
        match width.checked_mul(height) {
            Some(len) if len > 0 => Ok(len),
            _ => Err(MatrixError::InvalidDimension { width, height }),
        }
    }
}

impl<T: fmt::Display> fmt::Display for Matrix<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Matrix[{}x{}]:", self.width, self.height)?;
        for row in self.data.chunks(self.width) {
            write!(f, "[")?;
            for (x, value) in row.iter().enumerate() {
                if x > 0 {
                    write!(f, ", ")?;
                }
                write!(f, "{value}")?;
            }
            writeln!(f, "]")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod test {
    use super::{Matrix, MatrixError};

    #[test]
    fn rejects_zero_dimensions() {
        assert_eq!(
            Matrix::<u8>::new(0, 3),
            Err(MatrixError::InvalidDimension {
                width: 0,
                height: 3
            })
        );
        assert!(Matrix::<u8>::new(3, 0).is_err());
        assert!(Matrix::<u8>::new(usize::MAX, 2).is_err());
    }

    #[test]
    fn new_uses_default() {
        let matrix = Matrix::<Option<char>>::new(2, 2).unwrap();
        assert!(matrix.all(|_, _, cell| cell.is_none()));
    }

    #[test]
    fn row_major_layout() {
        let matrix = Matrix::from_vec(3, 2, vec![0, 1, 2, 3, 4, 5]).unwrap();
        assert_eq!(*matrix.get(0, 0).unwrap(), 0);
        assert_eq!(*matrix.get(2, 0).unwrap(), 2);
        assert_eq!(*matrix.get(0, 1).unwrap(), 3);
        assert_eq!(*matrix.get(2, 1).unwrap(), 5);
    }

    #[test]
    fn from_vec_size_mismatch() {
        assert_eq!(
            Matrix::from_vec(3, 3, vec![0; 8]),
            Err(MatrixError::SizeMismatch {
                expected: 9,
                actual: 8
            })
        );
    }

    #[test]
    fn bounds_checked() {
        let mut matrix = Matrix::<u8>::new(3, 3).unwrap();
        assert!(matrix.is_valid_position(2, 2));
        assert!(!matrix.is_valid_position(3, 0));
        assert!(!matrix.is_valid_position(0, 3));
        assert_eq!(
            matrix.get(3, 1),
            Err(MatrixError::OutOfBounds {
                x: 3,
                y: 1,
                width: 3,
                height: 3
            })
        );
        assert!(matrix.set(1, 3, 7).is_err());
        matrix.set(1, 2, 7).unwrap();
        assert_eq!(*matrix.get(1, 2).unwrap(), 7);
        assert_eq!(matrix.get_or(5, 5, 9), 9);
        assert_eq!(matrix.get_or(1, 2, 9), 7);
    }

    #[test]
    fn value_equality() {
        let a = Matrix::from_fn(2, 2, |x, y| x + y).unwrap();
        let b = Matrix::from_vec(2, 2, vec![0, 1, 1, 2]).unwrap();
        assert_eq!(a, b);
        // same cells, different shape
        let c = Matrix::from_vec(4, 1, vec![0, 1, 1, 2]).unwrap();
        assert_ne!(a, c);
    }

    #[test]
    fn fill_region_is_clamped() {
        let mut matrix = Matrix::filled(3, 3, '.').unwrap();
        matrix.fill_region(1, 1, 10, 10, '#');
        assert_eq!(matrix.into_vec(), vec!['.', '.', '.', '.', '#', '#', '.', '#', '#']);
    }

    #[test]
    fn transforms() {
        let matrix = Matrix::from_vec(3, 2, vec![1, 2, 3, 4, 5, 6]).unwrap();

        let transposed = matrix.transpose();
        assert_eq!((transposed.width(), transposed.height()), (2, 3));
        assert_eq!(transposed.into_vec(), vec![1, 4, 2, 5, 3, 6]);

        let mirrored = matrix.mirror_horizontal();
        assert_eq!(mirrored.into_vec(), vec![3, 2, 1, 6, 5, 4]);

        let sub = matrix.sub_matrix(1, 0, 2, 2).unwrap();
        assert_eq!(sub.into_vec(), vec![2, 3, 5, 6]);
        assert!(matrix.sub_matrix(2, 0, 2, 1).is_err());

        let doubled = matrix.map(|_, _, value| value * 2);
        assert_eq!(*doubled.get(2, 1).unwrap(), 12);
        assert!(matrix.any(|x, y, value| x == 1 && y == 1 && *value == 5));
    }

    #[test]
    fn display() {
        let matrix = Matrix::from_vec(2, 2, vec![1, 2, 3, 4]).unwrap();
        assert_eq!(matrix.to_string(), "Matrix[2x2]:\n[1, 2]\n[3, 4]\n");
    }
}
