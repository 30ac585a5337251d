use std::fmt;

use num_traits::{Num, One, ToPrimitive, Zero};

use crate::config::{within_tolerance, LinalgConfig, Notation};
use crate::error::{LinalgError, Result};
use crate::math::vector::{render_values, Vector};

/// Dense row-major table of numeric values.
///
/// Coordinates named `x`/`y` are always (column, row): `x` is bounded by
/// `width` and `y` by `height`. Methods named after rows or columns take the
/// row or column index directly.
#[derive(Clone, Debug, PartialEq)]
pub struct Matrix<T> {
    data: Vec<T>,
    width: usize,
    height: usize,
}

impl<T> Matrix<T> {
    /// Build a matrix from a row-major buffer of `height * width` values.
    ///
    /// `shape` is `(height, width)`, i.e. `(rows, columns)`, the same order
    /// returned by [`Matrix::shape`]. Constructors taking separate arguments
    /// (`new`, `from_elem`, `resize`) take `width` first.
    pub fn from_shape_vec(shape: (usize, usize), data: Vec<T>) -> Result<Self> {
        let (height, width) = shape;
        match height.checked_mul(width) {
            Some(len) if len == data.len() => {}
            Some(len) => {
                return Err(LinalgError::InvalidArgument(format!(
                    "shape ({}, {}) requires {} values, got {}",
                    height,
                    width,
                    len,
                    data.len()
                )));
            }
            None => {
                return Err(LinalgError::InvalidArgument(format!(
                    "shape ({}, {}) overflows the addressable length",
                    height, width
                )));
            }
        }
        Ok(Self {
            data,
            width,
            height,
        })
    }

    /// Build a matrix from nested rows. Height is the number of rows and width
    /// the length of the first row; every other row must match it.
    pub fn from_rows(rows: Vec<Vec<T>>) -> Result<Self> {
        let height = rows.len();
        let width = rows.first().map_or(0, |r| r.len());
        let mut data = Vec::with_capacity(height * width);
        for (idx, row) in rows.into_iter().enumerate() {
            if row.len() != width {
                return Err(LinalgError::InvalidArgument(format!(
                    "row {} has {} values, expected {}",
                    idx,
                    row.len(),
                    width
                )));
            }
            data.extend(row);
        }
        Ok(Self {
            data,
            width,
            height,
        })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// `(height, width)`, i.e. `(rows, columns)`.
    pub fn shape(&self) -> (usize, usize) {
        (self.height, self.width)
    }

    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    #[inline]
    fn offset(&self, x: usize, y: usize) -> usize {
        y * self.width + x
    }

    fn check_region(&self, x: usize, y: usize, width: usize, height: usize) -> Result<()> {
        if x > self.width
            || width > self.width - x
            || y > self.height
            || height > self.height - y
        {
            return Err(LinalgError::RegionOutOfBounds {
                x,
                y,
                width,
                height,
                bounds: self.shape(),
            });
        }
        Ok(())
    }

    pub fn row_slice(&self, row: usize) -> Result<&[T]> {
        LinalgError::check_index(row, self.height)?;
        let start = self.offset(0, row);
        Ok(&self.data[start..start + self.width])
    }

    pub fn to_vec(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.data.clone()
    }

    pub fn to_rows(&self) -> Vec<Vec<T>>
    where
        T: Clone,
    {
        if self.width == 0 {
            return (0..self.height).map(|_| Vec::new()).collect();
        }
        self.data.chunks(self.width).map(|r| r.to_vec()).collect()
    }

    pub fn from_elem(width: usize, height: usize, value: T) -> Self
    where
        T: Clone,
    {
        Matrix {
            data: vec![value; width * height],
            width,
            height,
        }
    }

    pub fn zeros(width: usize, height: usize) -> Self
    where
        T: Clone + Zero,
    {
        Self::from_elem(width, height, T::zero())
    }

    pub fn ones(width: usize, height: usize) -> Self
    where
        T: Clone + One,
    {
        Self::from_elem(width, height, T::one())
    }
}

impl<T> Matrix<T>
where
    T: Num + Copy,
{
    /// Zero-filled matrix with `width` columns and `height` rows.
    pub fn new(width: usize, height: usize) -> Self {
        Self::zeros(width, height)
    }

    /// Square identity matrix: ones on the diagonal, zeros elsewhere.
    pub fn identity(size: usize) -> Self {
        log::debug!("Creating {}x{} identity matrix", size, size);
        let mut result = Self::zeros(size, size);
        for i in 0..size {
            let offset = result.offset(i, i);
            result.data[offset] = T::one();
        }
        result
    }

    pub fn get(&self, x: usize, y: usize) -> Result<T> {
        LinalgError::check_index(x, self.width)?;
        LinalgError::check_index(y, self.height)?;
        Ok(self.data[self.offset(x, y)])
    }

    pub fn set(&mut self, x: usize, y: usize, value: T) -> Result<()> {
        LinalgError::check_index(x, self.width)?;
        LinalgError::check_index(y, self.height)?;
        let offset = self.offset(x, y);
        self.data[offset] = value;
        Ok(())
    }

    /// Copy of one row as an independent vector.
    pub fn get_row(&self, row: usize) -> Result<Vector<T>> {
        Ok(Vector::from_vec(self.row_slice(row)?.to_vec()))
    }

    /// Copy of one column as an independent vector.
    pub fn get_column(&self, column: usize) -> Result<Vector<T>> {
        LinalgError::check_index(column, self.width)?;
        let mut values = Vec::with_capacity(self.height);
        for y in 0..self.height {
            values.push(self.data[self.offset(column, y)]);
        }
        Ok(Vector::from_vec(values))
    }

    /// Elementwise in-place sum with a matrix of the same shape.
    pub fn add(&mut self, other: &Matrix<T>) -> Result<()> {
        if other.shape() != self.shape() {
            return Err(LinalgError::ShapeMismatch {
                expected: self.shape(),
                found: other.shape(),
            });
        }
        for (a, &b) in self.data.iter_mut().zip(other.data.iter()) {
            *a = *a + b;
        }
        Ok(())
    }

    pub fn add_to_row(&mut self, row: usize, vector: &Vector<T>) -> Result<()> {
        LinalgError::check_index(row, self.height)?;
        LinalgError::check_size(self.width, vector.size())?;
        let start = self.offset(0, row);
        for (cell, &v) in self.data[start..start + self.width]
            .iter_mut()
            .zip(vector.iter())
        {
            *cell = *cell + v;
        }
        Ok(())
    }

    pub fn add_to_column(&mut self, column: usize, vector: &Vector<T>) -> Result<()> {
        LinalgError::check_index(column, self.width)?;
        LinalgError::check_size(self.height, vector.size())?;
        for (y, &v) in vector.iter().enumerate() {
            let offset = self.offset(column, y);
            self.data[offset] = self.data[offset] + v;
        }
        Ok(())
    }

    /// Matrix product `self * other`.
    ///
    /// Requires `other.height() == self.width()`. The result has the height of
    /// `self` and the width of `other`; cell `(x, y)` is the scalar product of
    /// row `y` of `self` and column `x` of `other`.
    pub fn multiply(&self, other: &Matrix<T>) -> Result<Matrix<T>> {
        if other.height != self.width {
            return Err(LinalgError::ShapeMismatch {
                expected: (self.width, other.width),
                found: other.shape(),
            });
        }
        log::trace!(
            "Multiplying {}x{} by {}x{}",
            self.height,
            self.width,
            other.height,
            other.width
        );

        let columns = (0..other.width)
            .map(|x| other.get_column(x))
            .collect::<Result<Vec<_>>>()?;

        let mut result = Matrix::new(other.width, self.height);
        for y in 0..self.height {
            let row = self.get_row(y)?;
            for (x, column) in columns.iter().enumerate() {
                let offset = result.offset(x, y);
                result.data[offset] = row.scalar_product(column)?;
            }
        }
        Ok(result)
    }

    pub fn scale_row(&mut self, row: usize, factor: T) -> Result<()> {
        LinalgError::check_index(row, self.height)?;
        let start = self.offset(0, row);
        for cell in self.data[start..start + self.width].iter_mut() {
            *cell = *cell * factor;
        }
        Ok(())
    }

    pub fn scale_column(&mut self, column: usize, factor: T) -> Result<()> {
        LinalgError::check_index(column, self.width)?;
        for y in 0..self.height {
            let offset = self.offset(column, y);
            self.data[offset] = self.data[offset] * factor;
        }
        Ok(())
    }

    pub fn scale(&mut self, factor: T) {
        for cell in self.data.iter_mut() {
            *cell = *cell * factor;
        }
    }

    /// New zero-filled `width x height` matrix holding the overlapping
    /// top-left region of `self`.
    pub fn resize(&self, width: usize, height: usize) -> Matrix<T> {
        log::trace!(
            "Resizing {}x{} matrix to {}x{}",
            self.width,
            self.height,
            width,
            height
        );
        let mut result = Matrix::new(width, height);
        let keep_width = width.min(self.width);
        for y in 0..height.min(self.height) {
            let src = self.offset(0, y);
            let dst = result.offset(0, y);
            result.data[dst..dst + keep_width].copy_from_slice(&self.data[src..src + keep_width]);
        }
        result
    }

    /// New `width x height` matrix holding the region that starts at column
    /// `x`, row `y`. The region must lie entirely inside `self`.
    pub fn copy(&self, x: usize, y: usize, width: usize, height: usize) -> Result<Matrix<T>> {
        self.check_region(x, y, width, height)?;
        log::trace!("Copying {}x{} region at ({}, {})", width, height, x, y);

        let mut data = Vec::with_capacity(width * height);
        for py in 0..height {
            let start = self.offset(x, y + py);
            data.extend_from_slice(&self.data[start..start + width]);
        }
        Ok(Matrix {
            data,
            width,
            height,
        })
    }

    /// Overwrite the region starting at column `x`, row `y` with `other`.
    pub fn paste(&mut self, other: &Matrix<T>, x: usize, y: usize) -> Result<()> {
        self.check_region(x, y, other.width, other.height)?;
        log::trace!(
            "Pasting {}x{} matrix at ({}, {})",
            other.width,
            other.height,
            x,
            y
        );

        for py in 0..other.height {
            let src = other.offset(0, py);
            let dst = self.offset(x, y + py);
            self.data[dst..dst + other.width].copy_from_slice(&other.data[src..src + other.width]);
        }
        Ok(())
    }

    pub fn paste_row(&mut self, row: usize, vector: &Vector<T>) -> Result<()> {
        LinalgError::check_index(row, self.height)?;
        LinalgError::check_size(self.width, vector.size())?;
        let start = self.offset(0, row);
        self.data[start..start + self.width].copy_from_slice(vector.as_slice());
        Ok(())
    }

    pub fn paste_column(&mut self, column: usize, vector: &Vector<T>) -> Result<()> {
        LinalgError::check_index(column, self.width)?;
        LinalgError::check_size(self.height, vector.size())?;
        for (y, &v) in vector.iter().enumerate() {
            let offset = self.offset(column, y);
            self.data[offset] = v;
        }
        Ok(())
    }

    /// Append `other` to the right of `self`. Heights must match.
    pub fn concatenate(&mut self, other: &Matrix<T>) -> Result<()> {
        if other.height != self.height {
            return Err(LinalgError::ShapeMismatch {
                expected: (self.height, other.width),
                found: other.shape(),
            });
        }

        let old_width = self.width;
        let mut result = self.resize(old_width + other.width, self.height);
        result.paste(other, old_width, 0)?;
        *self = result;

        log::debug!(
            "Concatenated matrix is now {}x{}",
            self.width,
            self.height
        );
        Ok(())
    }
}

impl<T: ToPrimitive> Matrix<T> {
    /// True when both matrices have the same shape and every pair of cells
    /// differs by at most `tolerance`.
    pub fn approx_eq(&self, other: &Matrix<T>, tolerance: f64) -> bool {
        self.shape() == other.shape()
            && self
                .data
                .iter()
                .zip(other.data.iter())
                .all(|(a, b)| within_tolerance(a, b, tolerance))
    }

    pub fn approx_eq_with(&self, other: &Matrix<T>, config: &LinalgConfig) -> bool {
        self.approx_eq(other, config.tolerance)
    }
}

impl<T> Matrix<T>
where
    T: fmt::Display + fmt::LowerExp,
{
    pub fn render(&self, notation: &Notation) -> String {
        (0..self.height)
            .map(|y| {
                let start = self.offset(0, y);
                render_values(&self.data[start..start + self.width], notation)
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl<T: fmt::Display> fmt::Display for Matrix<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for y in 0..self.height {
            write!(f, "(")?;
            for x in 0..self.width {
                write!(f, "{}", self.data[self.offset(x, y)])?;
                if x + 1 != self.width {
                    write!(f, ", ")?;
                }
            }
            write!(f, ")")?;
            if y + 1 != self.height {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn offset_is_row_major() {
        let m = Matrix::from_shape_vec((2, 3), vec![0, 1, 2, 3, 4, 5]).unwrap();
        assert_eq!(m.offset(2, 0), 2);
        assert_eq!(m.offset(0, 1), 3);
        assert_eq!(m.data[m.offset(1, 1)], 4);
    }

    #[test]
    fn check_region_accepts_exact_fit() {
        let m: Matrix<f64> = Matrix::new(3, 2);
        assert!(m.check_region(1, 0, 2, 2).is_ok());
        assert!(m.check_region(0, 0, 0, 0).is_ok());
        assert!(m.check_region(2, 0, 2, 1).is_err());
        assert!(m.check_region(4, 0, 0, 0).is_err());
        assert!(m.check_region(1, 1, usize::MAX, 1).is_err());
        assert!(m.check_region(0, usize::MAX, 1, 1).is_err());
    }

    #[test]
    fn to_rows_keeps_rows_of_zero_width_matrix() {
        let m: Matrix<i32> = Matrix::new(0, 2);
        assert_eq!(m.to_rows(), vec![Vec::<i32>::new(), Vec::new()]);
    }
}
