//! Handler implementations: request logging and the file command dispatcher.

mod file_handler;
mod logging_handler;

pub use file_handler::FileCommandHandler;
pub use logging_handler::LoggingHandler;
