//! # 图像读写模块
//!
//! 通过 `image` crate 把无损图像文件与 [`PixelBuffer`] 互相转换。
//! 隐写结果依赖每个通道值在保存后保持不变，因此只允许写出无损格式。

use crate::pixel::PixelBuffer;
use anyhow::{Context, Result};
use colored::Colorize;
use image::{ColorType, ImageFormat, ImageReader, RgbImage};
use std::fmt;
use std::path::Path;

/// 保存时允许使用的无损格式。
const LOSSLESS_FORMATS: [ImageFormat; 5] = [
    ImageFormat::Png,
    ImageFormat::Bmp,
    ImageFormat::Tiff,
    ImageFormat::WebP,
    ImageFormat::Qoi,
];

/// 载入图像时附带的元数据。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ImageMetadata {
    pub width: u32,
    pub height: u32,
    pub format: Option<ImageFormat>,
    pub color_type: ColorType,
}

impl fmt::Display for ImageMetadata {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let format = self
            .format
            .map_or_else(|| "unknown".to_string(), |format| format!("{format:?}"));
        write!(
            f,
            "{}x{}, format: {}, color: {:?}",
            self.width, self.height, format, self.color_type
        )
    }
}

/// 读取图像文件并转换为 RGB 像素缓冲区。
///
/// 带透明通道或灰度的图像会被转换为 8 位 RGB，原有透明度不会保留。
///
/// # Errors
///
/// 文件无法打开、格式无法识别或解码失败时返回错误。
pub fn load(path: &Path) -> Result<(PixelBuffer, ImageMetadata)> {
    let reader = ImageReader::open(path)
        .with_context(|| {
            format!(
                "Unable to read image file: {}",
                path.to_string_lossy().red().bold()
            )
        })?
        .with_guessed_format()
        .with_context(|| {
            format!(
                "Unable to detect the format of: {}",
                path.to_string_lossy().red().bold()
            )
        })?;

    let format = reader.format();
    let image = reader.decode().with_context(|| {
        format!(
            "Unable to decode image file: {}",
            path.to_string_lossy().red().bold()
        )
    })?;

    let metadata = ImageMetadata {
        width: image.width(),
        height: image.height(),
        format,
        color_type: image.color(),
    };
    log::debug!("loaded {}: {}", path.display(), metadata);
    if metadata.color_type != ColorType::Rgb8 {
        log::warn!(
            "{} is {:?}; converting to 8-bit RGB, alpha and extra precision will be lost on save",
            path.display(),
            metadata.color_type
        );
    }

    let rgb = image.into_rgb8();
    let pixels = PixelBuffer::new(
        rgb.width() as usize,
        rgb.height() as usize,
        rgb.into_raw(),
    )?;

    Ok((pixels, metadata))
}

/// 将像素缓冲区以无损格式写入 `path`，格式由扩展名决定。
///
/// # Errors
///
/// 扩展名对应的格式不是无损格式，或写入失败时返回错误。
pub fn save(path: &Path, pixels: &PixelBuffer) -> Result<()> {
    let format = ImageFormat::from_path(path).with_context(|| {
        format!(
            "Unable to determine the output format from: {}",
            path.to_string_lossy().red().bold()
        )
    })?;

    anyhow::ensure!(
        LOSSLESS_FORMATS.contains(&format),
        "Unsupported output format {:?} for {}. \nUse a lossless format such as PNG or BMP.",
        format,
        path.to_string_lossy().red().bold()
    );

    let width = u32::try_from(pixels.width()).context("Image width exceeds u32")?;
    let height = u32::try_from(pixels.height()).context("Image height exceeds u32")?;
    let data: Vec<u8> = pixels.rows().flatten().copied().collect();
    let image = RgbImage::from_raw(width, height, data)
        .context("Pixel buffer does not match the image dimensions")?;

    image.save_with_format(path, format).with_context(|| {
        format!(
            "Unable to write to target image file: {}",
            path.to_string_lossy().red().bold()
        )
    })?;
    log::debug!("saved {} as {:?}", path.display(), format);

    Ok(())
}
