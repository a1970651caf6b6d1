use core::fmt;
use core::ops::{Add, AddAssign, Index, IndexMut, Mul, Sub, SubAssign};

use num_traits::AsPrimitive;

use crate::error::{MatError, Position};
use crate::scalar::Scalar;

/// Dense `N`x`M` matrix stored in row-major order.
///
/// Shape is part of the type: adding matrices of different shapes, or
/// multiplying with a mismatched inner dimension, does not compile. Element
/// indices are runtime values and go through checked accessors
/// ([`get`](Self::get), [`at`](Self::at)) or the panicking `Index` impls.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Mat<T, const N: usize, const M: usize> {
    data: [[T; M]; N],
}

/// `1`x`N` matrix.
pub type RowVec<T, const N: usize> = Mat<T, 1, N>;

/// `N`x`1` matrix.
pub type ColVec<T, const N: usize> = Mat<T, N, 1>;

impl<T: Scalar, const N: usize, const M: usize> Mat<T, N, M> {
    pub const ROWS: usize = N;
    pub const COLS: usize = M;
    pub const LEN: usize = N * M;

    /// Every element set to `value`.
    #[inline]
    pub fn filled(value: T) -> Self {
        Self { data: [[value; M]; N] }
    }

    #[inline]
    pub fn zero() -> Self {
        Self::filled(T::zero())
    }

    #[inline]
    pub const fn from_rows(data: [[T; M]; N]) -> Self {
        Self { data }
    }

    /// Builds a matrix from exactly `N * M` elements in row-major order.
    pub fn from_slice(elements: &[T]) -> Result<Self, MatError> {
        if elements.len() != Self::LEN {
            log::trace!(
                "rejecting {} elements for {}x{} matrix",
                elements.len(),
                N,
                M
            );
            return Err(MatError::SizeMismatch { expected: Self::LEN, actual: elements.len() });
        }

        let mut out = Self::zero();
        out.as_mut_slice().copy_from_slice(elements);
        Ok(out)
    }

    #[inline]
    pub fn into_rows(self) -> [[T; M]; N] {
        self.data
    }

    #[inline]
    pub const fn rows(&self) -> usize {
        N
    }

    #[inline]
    pub const fn cols(&self) -> usize {
        M
    }

    /// Total element count, `N * M`.
    #[inline]
    pub const fn len(&self) -> usize {
        N * M
    }

    #[inline]
    pub const fn is_empty(&self) -> bool {
        N * M == 0
    }

    /// Contiguous row-major view of the elements.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        self.data.as_flattened()
    }

    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        self.data.as_flattened_mut()
    }

    #[inline]
    pub fn iter(&self) -> core::slice::Iter<'_, T> {
        self.as_slice().iter()
    }

    /// Element at row-major offset `i`.
    pub fn get(&self, i: usize) -> Result<&T, MatError> {
        if i >= Self::LEN {
            return Err(out_of_range::<N, M>(Position::Linear(i)));
        }
        Ok(&self.as_slice()[i])
    }

    pub fn get_mut(&mut self, i: usize) -> Result<&mut T, MatError> {
        if i >= Self::LEN {
            return Err(out_of_range::<N, M>(Position::Linear(i)));
        }
        Ok(&mut self.as_mut_slice()[i])
    }

    /// Element at `(row, col)`.
    pub fn at(&self, row: usize, col: usize) -> Result<&T, MatError> {
        if row >= N || col >= M {
            return Err(out_of_range::<N, M>(Position::Grid { row, col }));
        }
        Ok(&self.data[row][col])
    }

    pub fn at_mut(&mut self, row: usize, col: usize) -> Result<&mut T, MatError> {
        if row >= N || col >= M {
            return Err(out_of_range::<N, M>(Position::Grid { row, col }));
        }
        Ok(&mut self.data[row][col])
    }

    /// Copies row `i` out as a row vector.
    pub fn row(&self, i: usize) -> Result<RowVec<T, M>, MatError> {
        if i >= N {
            return Err(out_of_range::<N, M>(Position::Grid { row: i, col: 0 }));
        }
        Ok(Mat::from_rows([self.data[i]]))
    }

    /// Copies column `j` out as a column vector.
    pub fn col(&self, j: usize) -> Result<ColVec<T, N>, MatError> {
        if j >= M {
            return Err(out_of_range::<N, M>(Position::Grid { row: 0, col: j }));
        }
        Ok(Mat::from_rows(core::array::from_fn(|i| [self.data[i][j]])))
    }

    /// `out(j, i) == self(i, j)`.
    pub fn transpose(&self) -> Mat<T, M, N> {
        Mat::from_rows(core::array::from_fn(|j| core::array::from_fn(|i| self.data[i][j])))
    }

    /// Matrix product with every dot product accumulated in `f32`.
    ///
    /// Operands are promoted before multiplying, so narrow integer products
    /// cannot overflow `T`. Each sum is converted back with
    /// [`Scalar::from_f32`]: integer results truncate toward zero and saturate.
    /// Use `*` for products in `T`'s own arithmetic.
    pub fn mul_promoted<const K: usize>(&self, rhs: &Mat<T, M, K>) -> Mat<T, N, K> {
        let mut out = Mat::<T, N, K>::zero();

        for i in 0..N {
            for j in 0..K {
                let mut sum = 0.0f32;
                for k in 0..M {
                    let a: f32 = self.data[i][k].as_();
                    let b: f32 = rhs.data[k][j].as_();
                    sum += a * b;
                }
                out.data[i][j] = T::from_f32(sum);
            }
        }

        out
    }
}

impl<T: Scalar, const N: usize> Mat<T, N, N> {
    /// Ones on the diagonal, zeros elsewhere.
    pub fn identity() -> Self {
        let mut out = Self::zero();
        for i in 0..N {
            out.data[i][i] = T::one();
        }
        out
    }
}

impl<T: Scalar + bytemuck::Pod, const N: usize, const M: usize> Mat<T, N, M> {
    /// Raw row-major bytes in native endianness, suitable for buffer uploads.
    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(self.as_slice())
    }
}

#[cold]
fn out_of_range<const N: usize, const M: usize>(index: Position) -> MatError {
    log::trace!("matrix index {} out of range for {}x{} matrix", index, N, M);
    MatError::IndexOutOfRange { index, rows: N, cols: M }
}

impl<T: Scalar, const N: usize, const M: usize> Default for Mat<T, N, M> {
    fn default() -> Self {
        Self::zero()
    }
}

impl<T: Scalar, const N: usize, const M: usize> From<[[T; M]; N]> for Mat<T, N, M> {
    fn from(data: [[T; M]; N]) -> Self {
        Self::from_rows(data)
    }
}

impl<T: Scalar, const N: usize, const M: usize> TryFrom<&[T]> for Mat<T, N, M> {
    type Error = MatError;

    fn try_from(elements: &[T]) -> Result<Self, MatError> {
        Self::from_slice(elements)
    }
}

impl<T: Scalar, const N: usize, const M: usize> TryFrom<Vec<T>> for Mat<T, N, M> {
    type Error = MatError;

    fn try_from(elements: Vec<T>) -> Result<Self, MatError> {
        Self::from_slice(&elements)
    }
}

// ── indexing ──────────────────────────────────────────────────────────────

impl<T: Scalar, const N: usize, const M: usize> Index<usize> for Mat<T, N, M> {
    type Output = T;

    fn index(&self, i: usize) -> &T {
        match self.get(i) {
            Ok(v) => v,
            Err(e) => panic!("{e}"),
        }
    }
}

impl<T: Scalar, const N: usize, const M: usize> IndexMut<usize> for Mat<T, N, M> {
    fn index_mut(&mut self, i: usize) -> &mut T {
        match self.get_mut(i) {
            Ok(v) => v,
            Err(e) => panic!("{e}"),
        }
    }
}

impl<T: Scalar, const N: usize, const M: usize> Index<(usize, usize)> for Mat<T, N, M> {
    type Output = T;

    fn index(&self, (row, col): (usize, usize)) -> &T {
        match self.at(row, col) {
            Ok(v) => v,
            Err(e) => panic!("{e}"),
        }
    }
}

impl<T: Scalar, const N: usize, const M: usize> IndexMut<(usize, usize)> for Mat<T, N, M> {
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut T {
        match self.at_mut(row, col) {
            Ok(v) => v,
            Err(e) => panic!("{e}"),
        }
    }
}

// ── arithmetic ────────────────────────────────────────────────────────────

impl<T: Scalar, const N: usize, const M: usize> AddAssign for Mat<T, N, M> {
    #[inline]
    fn add_assign(&mut self, rhs: Self) {
        for (a, b) in self.as_mut_slice().iter_mut().zip(rhs.as_slice()) {
            *a += *b;
        }
    }
}

impl<T: Scalar, const N: usize, const M: usize> SubAssign for Mat<T, N, M> {
    #[inline]
    fn sub_assign(&mut self, rhs: Self) {
        for (a, b) in self.as_mut_slice().iter_mut().zip(rhs.as_slice()) {
            *a -= *b;
        }
    }
}

impl<T: Scalar, const N: usize, const M: usize> Add for Mat<T, N, M> {
    type Output = Self;
    #[inline]
    fn add(mut self, rhs: Self) -> Self {
        self += rhs;
        self
    }
}

impl<T: Scalar, const N: usize, const M: usize> Sub for Mat<T, N, M> {
    type Output = Self;
    #[inline]
    fn sub(mut self, rhs: Self) -> Self {
        self -= rhs;
        self
    }
}

impl<T: Scalar, const N: usize, const K: usize, const M: usize> Mul<Mat<T, K, M>> for Mat<T, N, K> {
    type Output = Mat<T, N, M>;

    fn mul(self, rhs: Mat<T, K, M>) -> Mat<T, N, M> {
        let mut out = Mat::<T, N, M>::zero();

        for i in 0..N {
            for j in 0..M {
                let mut sum = T::zero();
                for k in 0..K {
                    sum += self.data[i][k] * rhs.data[k][j];
                }
                out.data[i][j] = sum;
            }
        }

        out
    }
}

/// Diagnostic rendering: a `NxM matrix` header, then one `[ a b c ]` line per
/// row. Not a data interchange format.
impl<T: Scalar, const N: usize, const M: usize> fmt::Display for Mat<T, N, M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}x{} matrix", N, M)?;
        for row in &self.data {
            f.write_str("[ ")?;
            for v in row {
                write!(f, "{v} ")?;
            }
            f.write_str("]\n")?;
        }
        Ok(())
    }
}
