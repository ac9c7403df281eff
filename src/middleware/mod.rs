pub mod panic_recovery;
pub mod request_logging;
