use anyhow::{bail, Result};
use qrcode::Version;
use std::path::PathBuf;
use tracing::{debug, info};

use crate::payload::{format_data, DataType};
use crate::qr::{ImageBackend, QrBackend, QrOptions};

pub const DEFAULT_SIZE: u32 = 256;
pub const DEFAULT_OUTPUT: &str = "qrcode.png";

#[derive(Debug, Clone)]
pub struct GenerateOptions {
    pub data: String,
    pub data_type: DataType,
    /// Side length of the square output image, in pixels.
    pub size: u32,
    pub output: PathBuf,
    pub qr: QrOptions,
}

impl GenerateOptions {
    pub fn new(data: impl Into<String>) -> Self {
        Self {
            data: data.into(),
            data_type: DataType::default(),
            size: DEFAULT_SIZE,
            output: PathBuf::from(DEFAULT_OUTPUT),
            qr: QrOptions::default(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct GenerateResult {
    pub output: PathBuf,
    pub payload: String,
    pub size: u32,
    pub version: Version,
}

impl std::fmt::Display for GenerateResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "QR code saved to {}", self.output.display())
    }
}

/// Formats the input, renders it as a QR code and writes the image to `options.output`.
pub fn generate(options: &GenerateOptions) -> Result<GenerateResult> {
    generate_with(&ImageBackend, options)
}

pub fn generate_with<B: QrBackend>(backend: &B, options: &GenerateOptions) -> Result<GenerateResult> {
    if options.size == 0 {
        bail!("Image size must be at least 1 pixel");
    }

    let payload = format_data(&options.data, options.data_type);
    debug!(data_type = %options.data_type, %payload, "formatted payload");

    let raster = backend.encode(&payload, &options.qr)?;
    let image = backend.resize(&raster.image, options.size);
    debug!(
        from = raster.image.width(),
        to = options.size,
        "resized QR image"
    );

    backend.save(&image, &options.output)?;
    info!(path = %options.output.display(), size = options.size, "wrote QR image");

    Ok(GenerateResult {
        output: options.output.clone(),
        payload,
        size: options.size,
        version: raster.version,
    })
}
