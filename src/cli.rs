use clap::Parser;
use std::path::PathBuf;

use crate::generate::{GenerateOptions, DEFAULT_OUTPUT, DEFAULT_SIZE};
use crate::payload::DataType;
use crate::qr::QrOptions;

#[derive(Parser, Debug)]
#[command(name = "qr-create")]
#[command(author, version, about = "Generate QR codes from text or URLs", long_about = None)]
pub struct Cli {
    /// The string to encode in the QR code
    pub data: String,

    /// Type of data being encoded
    #[arg(short = 't', long = "type", value_enum, default_value_t = DataType::Text)]
    pub data_type: DataType,

    /// Size of the output image in pixels
    #[arg(short, long, default_value_t = DEFAULT_SIZE, value_parser = clap::value_parser!(u32).range(1..))]
    pub size: u32,

    /// Output filename; the image format follows the extension
    #[arg(short, long, default_value = DEFAULT_OUTPUT)]
    pub output: PathBuf,

    /// Enable debug logging
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    pub fn into_options(self) -> GenerateOptions {
        GenerateOptions {
            data: self.data,
            data_type: self.data_type,
            size: self.size,
            output: self.output,
            qr: QrOptions::default(),
        }
    }
}
