use anyhow::{Context, Result};
use kiln_math::logging::{init_logging, LoggingConfig};
use kiln_math::{ColVec, Mat, MatError, RowVec};

fn main() -> Result<()> {
    let config = match std::env::args().nth(1) {
        Some(filter) => LoggingConfig::with_filter(filter),
        None => LoggingConfig::default(),
    };
    init_logging(config);

    println!();
    println!("  kiln-math diagnostics");
    println!("  ─────────────────────");
    println!();

    // ── transpose ─────────────────────────────────────────────────────────
    let a: Mat<i32, 2, 3> = Mat::try_from(vec![1, 2, 3, 4, 5, 6]).context("building 2x3 matrix")?;
    println!("{a}");
    println!("transposed:\n{}", a.transpose());

    // ── product ───────────────────────────────────────────────────────────
    let lhs: Mat<i32, 2, 2> = Mat::from_rows([[1, 2], [3, 4]]);
    let rhs: Mat<i32, 2, 2> = Mat::from_rows([[5, 6], [7, 8]]);
    println!("product:\n{}", lhs * rhs);

    let big: Mat<i32, 1, 1> = Mat::filled(16_777_217);
    let one: Mat<i32, 1, 1> = Mat::identity();
    println!(
        "native accumulation: {}  f32 accumulation: {}",
        (big * one)[0],
        big.mul_promoted(&one)[0]
    );
    println!();

    // ── vectors ───────────────────────────────────────────────────────────
    let row: RowVec<f32, 3> = Mat::from_rows([[1.0, 2.0, 3.0]]);
    let col: ColVec<f32, 3> = row.transpose();
    println!("dot:\n{}", row * col);
    println!("outer:\n{}", col * row);

    let mut acc: Mat<f32, 3, 3> = Mat::identity();
    acc += col * row;
    acc -= col * row;
    let diag = acc.col(1).context("reading identity column")?;
    println!("identity column 1:\n{diag}");
    log::debug!("uploading {} bytes", acc.as_bytes().len());

    // ── contract violations ───────────────────────────────────────────────
    match Mat::<i32, 2, 3>::from_slice(&[1, 2, 3]) {
        Err(e @ MatError::SizeMismatch { .. }) => log::warn!("{e}"),
        other => anyhow::bail!("expected size mismatch, got {other:?}"),
    }
    match a.at(2, 0) {
        Err(e @ MatError::IndexOutOfRange { .. }) => log::warn!("{e}"),
        other => anyhow::bail!("expected out-of-range, got {other:?}"),
    }

    Ok(())
}
