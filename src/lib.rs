pub mod cli;
pub mod generate;
pub mod logging;
pub mod payload;
pub mod qr;

pub use cli::Cli;
pub use generate::{generate, generate_with, GenerateOptions, GenerateResult};
pub use payload::{format_data, format_tagged, DataType};
pub use qr::{ImageBackend, QrBackend, QrOptions, QrRaster};
