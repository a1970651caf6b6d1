//! Fixed-size matrix math for the **kiln** renderer.
//!
//! Matrix dimensions are const generic parameters, so shape mismatches in
//! arithmetic are compile errors. Element indices are checked at runtime.
//!
//! # Structure
//!
//! | Module | Contents |
//! |--------|----------|
//! | [`matrix`] | `Mat`, `RowVec`, `ColVec` |
//! | [`scalar`] | `Scalar` element trait |
//! | [`error`] | `MatError`, `Position` |
//! | [`logging`] | `init_logging`, `LoggingConfig` |
//!
//! # Quick start
//!
//! ```rust
//! use kiln_math::Mat;
//!
//! let a: Mat<i32, 2, 2> = Mat::from_rows([[1, 2], [3, 4]]);
//! let b: Mat<i32, 2, 2> = Mat::from_rows([[5, 6], [7, 8]]);
//!
//! let c = a * b;
//! assert_eq!(c, Mat::from_rows([[19, 22], [43, 50]]));
//! assert_eq!(*c.at(1, 0).unwrap(), 43);
//! ```

pub mod error;
pub mod logging;
pub mod matrix;
pub mod scalar;

pub use error::{MatError, Position};
pub use matrix::{ColVec, Mat, RowVec};
pub use scalar::Scalar;
