use anyhow::{anyhow, bail, Context, Result};
use image::imageops::{self, FilterType};
use image::{Rgb, RgbImage};
use qrcode::{Color, EcLevel, QrCode, Version};
use std::path::Path;
use tracing::debug;

pub const DEFAULT_BOX_SIZE: u32 = 10;
pub const DEFAULT_BORDER: u32 = 4;
pub const BLACK: Rgb<u8> = Rgb([0, 0, 0]);
pub const WHITE: Rgb<u8> = Rgb([255, 255, 255]);

/// Rendering parameters for a single QR symbol.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct QrOptions {
    pub ec_level: EcLevel,
    /// Pixels per module.
    pub box_size: u32,
    /// Quiet zone width, in modules.
    pub border: u32,
    pub dark: Rgb<u8>,
    pub light: Rgb<u8>,
}

impl Default for QrOptions {
    fn default() -> Self {
        Self {
            ec_level: EcLevel::H,
            box_size: DEFAULT_BOX_SIZE,
            border: DEFAULT_BORDER,
            dark: BLACK,
            light: WHITE,
        }
    }
}

/// A rendered symbol together with the version the encoder picked for it.
#[derive(Debug, Clone)]
pub struct QrRaster {
    pub image: RgbImage,
    pub version: Version,
}

/// The imaging operations the generator needs.
pub trait QrBackend {
    fn encode(&self, payload: &str, options: &QrOptions) -> Result<QrRaster>;

    fn resize(&self, image: &RgbImage, size: u32) -> RgbImage;

    fn save(&self, image: &RgbImage, path: &Path) -> Result<()>;
}

/// [`QrBackend`] built on the `qrcode` and `image` crates.
#[derive(Debug, Default, Clone, Copy)]
pub struct ImageBackend;

impl QrBackend for ImageBackend {
    fn encode(&self, payload: &str, options: &QrOptions) -> Result<QrRaster> {
        if options.box_size == 0 {
            bail!("Box size must be at least 1 pixel");
        }

        let code = QrCode::with_error_correction_level(payload, options.ec_level)
            .map_err(|e| anyhow!("Failed to create QR code: {}", e))?;

        let version = code.version();
        let image = render_modules(&code, options)?;

        debug!(
            ?version,
            modules = code.width(),
            width = image.width(),
            "rendered QR symbol"
        );

        Ok(QrRaster { image, version })
    }

    fn resize(&self, image: &RgbImage, size: u32) -> RgbImage {
        // Nearest keeps module edges hard instead of smearing them into grey.
        imageops::resize(image, size, size, FilterType::Nearest)
    }

    fn save(&self, image: &RgbImage, path: &Path) -> Result<()> {
        image
            .save(path)
            .with_context(|| format!("Failed to save QR image to {}", path.display()))?;
        Ok(())
    }
}

fn render_modules(code: &QrCode, options: &QrOptions) -> Result<RgbImage> {
    let modules = code.width() as u32;
    let (side, offset) = raster_layout(modules, options)
        .ok_or_else(|| anyhow!("QR raster dimensions overflow"))?;

    let mut image = RgbImage::from_pixel(side, side, options.light);

    for (i, color) in code.to_colors().iter().enumerate() {
        if *color != Color::Dark {
            continue;
        }
        let x0 = offset + (i as u32 % modules) * options.box_size;
        let y0 = offset + (i as u32 / modules) * options.box_size;
        for dy in 0..options.box_size {
            for dx in 0..options.box_size {
                image.put_pixel(x0 + dx, y0 + dy, options.dark);
            }
        }
    }

    Ok(image)
}

/// Side length and quiet-zone offset in pixels, or `None` if the buffer can't be addressed.
fn raster_layout(modules: u32, options: &QrOptions) -> Option<(u32, u32)> {
    let side = options
        .border
        .checked_mul(2)?
        .checked_add(modules)?
        .checked_mul(options.box_size)?;
    let offset = options.border.checked_mul(options.box_size)?;

    // Three channels per pixel.
    (side as usize)
        .checked_mul(side as usize)?
        .checked_mul(3)?;

    Some((side, offset))
}
