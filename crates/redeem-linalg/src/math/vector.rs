use std::fmt;
use std::iter::FromIterator;
use std::ops::{Index, IndexMut};
use std::slice::{Iter, IterMut};

use num_traits::{Num, One, ToPrimitive, Zero};

use crate::config::{within_tolerance, LinalgConfig, Notation};
use crate::error::{LinalgError, Result};

/// Fixed-size, owned sequence of numeric values.
///
/// The size is set at construction and never changes afterwards; all
/// mutating operations work in place.
#[derive(Clone, Debug, PartialEq)]
pub struct Vector<T> {
    data: Vec<T>,
}

impl<T> Vector<T> {
    /// Adopt `data` as the vector contents. No copy is made.
    pub fn from_vec(data: Vec<T>) -> Self {
        Self { data }
    }

    pub fn size(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn iter(&self) -> Iter<'_, T> {
        self.data.iter()
    }

    pub fn iter_mut(&mut self) -> IterMut<'_, T> {
        self.data.iter_mut()
    }

    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    pub fn mapv<U, F>(&self, mut f: F) -> Vector<U>
    where
        F: FnMut(&T) -> U,
    {
        Vector::from_vec(self.data.iter().map(|v| f(v)).collect())
    }

    pub fn to_vec(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.data.clone()
    }

    pub fn from_elem(len: usize, value: T) -> Self
    where
        T: Clone,
    {
        Vector::from_vec(vec![value; len])
    }

    pub fn zeros(len: usize) -> Self
    where
        T: Clone + Zero,
    {
        Vector::from_vec(vec![T::zero(); len])
    }

    pub fn ones(len: usize) -> Self
    where
        T: Clone + One,
    {
        Vector::from_vec(vec![T::one(); len])
    }
}

impl<T> Vector<T>
where
    T: Num + Copy,
{
    /// Zero-filled vector of the given size.
    pub fn new(size: usize) -> Self {
        Self::zeros(size)
    }

    /// Elementwise in-place sum with a vector of the same size.
    pub fn add(&mut self, other: &Vector<T>) -> Result<()> {
        LinalgError::check_size(self.size(), other.size())?;
        for (a, &b) in self.data.iter_mut().zip(other.data.iter()) {
            *a = *a + b;
        }
        Ok(())
    }

    /// Multiplies every element by `factor` in place.
    pub fn scale(&mut self, factor: T) {
        for v in self.data.iter_mut() {
            *v = *v * factor;
        }
    }

    /// Dot product with a vector of the same size.
    pub fn scalar_product(&self, other: &Vector<T>) -> Result<T> {
        LinalgError::check_size(self.size(), other.size())?;
        Ok(dot(self.as_slice(), other.as_slice()))
    }

    pub fn get(&self, position: usize) -> Result<T> {
        LinalgError::check_index(position, self.size())?;
        Ok(self.data[position])
    }

    pub fn set(&mut self, position: usize, value: T) -> Result<()> {
        LinalgError::check_index(position, self.size())?;
        self.data[position] = value;
        Ok(())
    }

    /// Sum of all elements; zero for an empty vector.
    pub fn sum(&self) -> T {
        self.data.iter().fold(T::zero(), |acc, &v| acc + v)
    }
}

impl<T: ToPrimitive> Vector<T> {
    /// True when both vectors have the same size and every pair of elements
    /// differs by at most `tolerance`.
    pub fn approx_eq(&self, other: &Vector<T>, tolerance: f64) -> bool {
        self.size() == other.size()
            && self
                .iter()
                .zip(other.iter())
                .all(|(a, b)| within_tolerance(a, b, tolerance))
    }

    pub fn approx_eq_with(&self, other: &Vector<T>, config: &LinalgConfig) -> bool {
        self.approx_eq(other, config.tolerance)
    }
}

impl<T> Vector<T>
where
    T: fmt::Display + fmt::LowerExp,
{
    /// Same layout as `Display`, with each value formatted by `notation`.
    pub fn render(&self, notation: &Notation) -> String {
        render_values(self.as_slice(), notation)
    }
}

pub(crate) fn dot<T: Num + Copy>(lhs: &[T], rhs: &[T]) -> T {
    lhs.iter()
        .zip(rhs.iter())
        .fold(T::zero(), |acc, (&a, &b)| acc + a * b)
}

pub(crate) fn render_values<T>(values: &[T], notation: &Notation) -> String
where
    T: fmt::Display + fmt::LowerExp,
{
    let parts: Vec<String> = values.iter().map(|v| notation.format(v)).collect();
    format!("({})", parts.join(", "))
}

impl<T> From<Vec<T>> for Vector<T> {
    fn from(value: Vec<T>) -> Self {
        Vector::from_vec(value)
    }
}

impl<T> From<Vector<T>> for Vec<T> {
    fn from(value: Vector<T>) -> Self {
        value.data
    }
}

impl<T> FromIterator<T> for Vector<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Vector::from_vec(iter.into_iter().collect())
    }
}

impl<T> Index<usize> for Vector<T> {
    type Output = T;

    fn index(&self, index: usize) -> &Self::Output {
        &self.data[index]
    }
}

impl<T> IndexMut<usize> for Vector<T> {
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        &mut self.data[index]
    }
}

impl<T: fmt::Display> fmt::Display for Vector<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "(")?;
        for (idx, value) in self.data.iter().enumerate() {
            write!(f, "{}", value)?;
            if idx + 1 != self.data.len() {
                write!(f, ", ")?;
            }
        }
        write!(f, ")")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dot_of_empty_slices_is_zero() {
        let empty: [f64; 0] = [];
        assert_eq!(dot(&empty, &empty), 0.0);
    }

    #[test]
    fn render_values_joins_with_commas() {
        let rendered = render_values(&[1.5f64, 2.24], &Notation::Fixed { precision: 1 });
        assert_eq!(rendered, "(1.5, 2.2)");
    }
}
