use anyhow::Result;
use redeem_linalg::{LinalgConfig, Matrix, Notation, Vector};

fn main() -> Result<()> {
    // RUST_LOG=redeem_linalg=trace shows the shape of every region operation
    env_logger::init();

    let config = LinalgConfig::new(1e-9, Notation::Fixed { precision: 2 });

    let mut a = Matrix::from_rows(vec![vec![1.0, 2.0], vec![3.0, 4.0]])?;
    let b = Matrix::identity(2);
    let product = a.multiply(&b)?;
    println!("A * I =\n{}", product.render(&config.notation));
    println!("A * I == A: {}", product.approx_eq_with(&a, &config));

    let weights = Vector::from_vec(vec![0.5, -1.0]);
    a.add_to_row(0, &weights)?;
    a.scale_column(1, 10.0)?;
    println!("after row update and column scaling:\n{}", a);

    let extra = Matrix::from_rows(vec![vec![9.0], vec![9.0]])?;
    a.concatenate(&extra)?;
    println!("concatenated ({}x{}):\n{}", a.width(), a.height(), a);

    let corner = a.copy(1, 0, 2, 2)?;
    let mut canvas = Matrix::new(4, 3);
    canvas.paste(&corner, 2, 1)?;
    println!("canvas:\n{}", canvas);

    let row = canvas.get_row(1)?;
    println!("row 1 = {} (sum {})", row, row.sum());
    Ok(())
}
