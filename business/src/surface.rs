//! Owned pixel surface the encoders draw into.
//!
//! One surface belongs to one generator instance. Drawing replaces the
//! whole pixel buffer, so a failed draw leaves the previous contents intact.

use std::convert::Infallible;

use embedded_graphics::{
    mono_font::{MonoTextStyle, ascii::FONT_10X20},
    pixelcolor::BinaryColor,
    prelude::*,
    text::{Baseline, Text},
};
use image::{ExtendedColorType, ImageEncoder, Rgba, RgbaImage, codecs::png::PngEncoder};

use crate::{EncodeFault, Mode, Snapshot};

const INK: Rgba<u8> = Rgba([0, 0, 0, 255]);
const PAPER: Rgba<u8> = Rgba([255, 255, 255, 255]);

/// Light modules around a matrix symbol, on every side.
const QUIET_ZONE: usize = 4;

/// Blank pixels around a linear symbol, on every side.
const MARGIN: u32 = 10;

/// Gap between the bars and the value label.
const TEXT_MARGIN: u32 = 2;

/// Box the surface is shown in, in logical pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DisplayBox {
    /// Stretched to a `side × side` square.
    Square(f32),
    /// Fixed width; the height follows the pixel aspect ratio.
    FitWidth(f32),
}

impl DisplayBox {
    pub fn size(&self, pixel_width: u32, pixel_height: u32) -> [f32; 2] {
        match *self {
            Self::Square(side) => [side, side],
            Self::FitWidth(width) if pixel_width == 0 => [width, 0.0],
            Self::FitWidth(width) => [width, width * pixel_height as f32 / pixel_width as f32],
        }
    }
}

#[derive(Debug, Default)]
pub struct Surface {
    pixels: Option<RgbaImage>,
    display: Option<DisplayBox>,
}

impl Surface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn pixels(&self) -> Option<&RgbaImage> {
        self.pixels.as_ref()
    }

    pub fn display(&self) -> Option<DisplayBox> {
        self.display
    }

    pub fn set_display(&mut self, display: DisplayBox) {
        self.display = Some(display);
    }

    /// Draws a square module matrix with a quiet zone.
    ///
    /// `modules` is row-major, `true` meaning dark. The module size is the
    /// largest integer that keeps the symbol within `target_width`, and
    /// never less than one pixel.
    pub fn draw_matrix(
        &mut self,
        modules: &[bool],
        side: usize,
        target_width: u32,
    ) -> Result<(), EncodeFault> {
        if side == 0 || modules.len() != side * side {
            return Err(EncodeFault::MatrixShape {
                len: modules.len(),
                side,
            });
        }

        let total = side + 2 * QUIET_ZONE;
        let scale = (target_width as usize / total).max(1);
        let dimension = u32::try_from(total * scale).map_err(|_| EncodeFault::MatrixShape {
            len: modules.len(),
            side,
        })?;

        let mut img = RgbaImage::from_pixel(dimension, dimension, PAPER);
        for (index, _) in modules.iter().enumerate().filter(|(_, dark)| **dark) {
            let x0 = (index % side + QUIET_ZONE) * scale;
            let y0 = (index / side + QUIET_ZONE) * scale;
            for y in y0..y0 + scale {
                for x in x0..x0 + scale {
                    img.put_pixel(x as u32, y as u32, INK);
                }
            }
        }

        self.pixels = Some(img);
        Ok(())
    }

    /// Draws a linear symbol from its module pattern (`1` = bar).
    ///
    /// When `label` is given it is printed centered beneath the bars.
    pub fn draw_linear(
        &mut self,
        bars: &[u8],
        module_width: u32,
        bar_height: u32,
        label: Option<&str>,
    ) -> Result<(), EncodeFault> {
        let module_width = module_width.max(1);
        let font_height = FONT_10X20.character_size.height;
        let label_height = label.map_or(0, |_| TEXT_MARGIN + font_height);

        let bars_width = bars.len() as u32 * module_width;
        let width = bars_width + 2 * MARGIN;
        let height = 2 * MARGIN + bar_height + label_height;

        let mut img = RgbaImage::from_pixel(width, height, PAPER);
        for (index, _) in bars.iter().enumerate().filter(|(_, bar)| **bar == 1) {
            let x0 = MARGIN + index as u32 * module_width;
            for y in MARGIN..MARGIN + bar_height {
                for x in x0..x0 + module_width {
                    img.put_pixel(x, y, INK);
                }
            }
        }

        if let Some(label) = label {
            let glyph_width = FONT_10X20.character_size.width + FONT_10X20.character_spacing;
            let text_width = label.chars().count() as u32 * glyph_width;
            let x = width.saturating_sub(text_width) / 2;
            let y = MARGIN + bar_height + TEXT_MARGIN;

            // Control characters have no glyph and `\n` would start a new line.
            let label: String = label
                .chars()
                .map(|c| if c.is_control() { ' ' } else { c })
                .collect();
            let style = MonoTextStyle::new(&FONT_10X20, BinaryColor::On);
            let text = Text::with_baseline(
                &label,
                Point::new(x as i32, y as i32),
                style,
                Baseline::Top,
            );
            let Ok(_) = text.draw(&mut LabelTarget(&mut img));
        }

        self.pixels = Some(img);
        Ok(())
    }

    /// Encodes the current pixels as PNG.
    pub fn to_png(&self) -> Result<Vec<u8>, EncodeFault> {
        let pixels = self.pixels.as_ref().ok_or(EncodeFault::EmptySurface)?;
        let mut png = Vec::new();
        PngEncoder::new(&mut png).write_image(
            pixels.as_raw(),
            pixels.width(),
            pixels.height(),
            ExtendedColorType::Rgba8,
        )?;
        Ok(png)
    }

    /// Captures the current contents as a portable snapshot.
    pub fn snapshot(&self, mode: Mode, revision: u64) -> Result<Snapshot, EncodeFault> {
        let pixels = self.pixels.as_ref().ok_or(EncodeFault::EmptySurface)?;
        let (width, height) = pixels.dimensions();
        let display = self
            .display
            .unwrap_or(DisplayBox::FitWidth(width as f32))
            .size(width, height);

        Ok(Snapshot {
            mode,
            revision,
            width,
            height,
            display_size: display,
            rgba: pixels.as_raw().clone(),
            png: self.to_png()?,
        })
    }
}

/// Adapter letting `embedded-graphics` text land on an RGBA buffer.
struct LabelTarget<'a>(&'a mut RgbaImage);

impl OriginDimensions for LabelTarget<'_> {
    fn size(&self) -> Size {
        Size::new(self.0.width(), self.0.height())
    }
}

impl DrawTarget for LabelTarget<'_> {
    type Color = BinaryColor;
    type Error = Infallible;

    fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        for Pixel(point, color) in pixels {
            let (Ok(x), Ok(y)) = (u32::try_from(point.x), u32::try_from(point.y)) else {
                continue;
            };
            if color.is_on() && x < self.0.width() && y < self.0.height() {
                self.0.put_pixel(x, y, INK);
            }
        }
        Ok(())
    }
}
