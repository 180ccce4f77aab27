use lazy_static::lazy_static;

lazy_static! {
    static ref LOG: u64 = init_log_once();
}

// install a logger facility
fn init_log_once() -> u64 {
    let _res = env_logger::try_init();
    log::debug!("logger initialized");
    1
}

/// initialize env_logger, level given by RUST_LOG. Can be called more than once.
pub fn init_log() {
    lazy_static::initialize(&LOG);
}

pub mod error;
pub mod reducer;
pub mod stats;
pub mod table;

pub use error::ReduceError;
pub use reducer::reduce;
