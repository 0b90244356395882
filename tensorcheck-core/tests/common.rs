use std::sync::Once;
use tensorcheck_core::{Element, Tensor};

// Helper to initialize the logger only once for all tests in a test binary.
static LOGGER_INIT: Once = Once::new();

#[allow(dead_code)]
pub fn setup_logger() {
    LOGGER_INIT.call_once(|| {
        // If another test already installed a logger, that's okay.
        let _ = env_logger::builder().is_test(true).try_init();
    });
}

// Helper function to create a tensor from row-major data.
// Added allow(dead_code) because usage across different test crates isn't detected easily.
#[allow(dead_code)]
pub fn create_test_tensor<T: Element>(data: Vec<T>, shape: Vec<usize>) -> Tensor<T> {
    Tensor::from_vec(data, shape).expect("Test tensor creation failed")
}

// Row-major sequence 0, 1, 2, ... as f32.
#[allow(dead_code)]
pub fn arange_tensor(shape: Vec<usize>) -> Tensor<f32> {
    let size: usize = shape.iter().product();
    create_test_tensor((0..size).map(|x| x as f32).collect(), shape)
}
