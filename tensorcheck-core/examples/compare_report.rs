// Run with: RUST_LOG=debug cargo run -p tensorcheck-core --example compare_report

use rand::rngs::StdRng;
use rand::SeedableRng;
use tensorcheck_core::tensor::randn;
use tensorcheck_core::{compare, CompareOptions, DifferenceType, TensorError};

fn main() -> Result<(), TensorError> {
    env_logger::init();

    let mut rng = StdRng::seed_from_u64(2024);
    let expected = randn(&[2, 3, 9], 0.0f32, 1.0, &mut rng)?;
    let mut actual = expected.clone();
    actual[[0, 1, 4]] += 0.5;
    actual[[1, 2, 8]] -= 0.25;

    let mut stdout = std::io::stdout();
    if let Err(e) = expected.debug_print(&mut stdout, "expected") {
        eprintln!("Failed to print tensor: {}", e);
    }

    let options = CompareOptions::new(0.01, DifferenceType::Absolute)
        .with_description("randn [2, 3, 9] with two perturbed elements");
    let report = compare(&actual, &expected, &options)?;
    println!(
        "passed = {}, error_count = {}",
        report.passed, report.error_count
    );
    if let Some(message) = report.message {
        println!("{}", message);
    }
    Ok(())
}
