//! Encoder seams.
//!
//! The symbol encodings themselves come from `qrcode` and `barcoders`; the
//! traits exist so the render controller can be driven by fakes in tests.

use barcoders::sym::code128::Code128;
use qrcode::{Color, EcLevel, QrCode};

use crate::{EncodeFault, Surface};

/// Code set A start or switch character understood by `barcoders`.
const CODE128_SET_A: char = '\u{00C0}';
/// Code set B start or switch character understood by `barcoders`.
const CODE128_SET_B: char = '\u{0181}';
/// Code set C start character understood by `barcoders`.
const CODE128_SET_C: char = '\u{0106}';

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QrOptions {
    /// Target symbol width in pixels, quiet zone included.
    pub width: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Symbology {
    #[default]
    Code128,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BarcodeOptions {
    pub format: Symbology,
    /// Pixels per module.
    pub module_width: u32,
    /// Bar height in pixels.
    pub height: u32,
    /// Print the encoded value beneath the bars.
    pub display_value: bool,
}

impl Default for BarcodeOptions {
    fn default() -> Self {
        Self {
            format: Symbology::Code128,
            module_width: 2,
            height: 100,
            display_value: true,
        }
    }
}

pub trait QrEncoder {
    fn encode(&self, surface: &mut Surface, text: &str, options: QrOptions)
    -> Result<(), EncodeFault>;
}

pub trait BarcodeEncoder {
    fn encode(
        &self,
        surface: &mut Surface,
        text: &str,
        options: &BarcodeOptions,
    ) -> Result<(), EncodeFault>;
}

/// QR encoder backed by the `qrcode` crate, error correction level M.
#[derive(Debug, Default, Clone, Copy)]
pub struct QrcodeEncoder;

impl QrEncoder for QrcodeEncoder {
    fn encode(
        &self,
        surface: &mut Surface,
        text: &str,
        options: QrOptions,
    ) -> Result<(), EncodeFault> {
        let code = QrCode::with_error_correction_level(text.as_bytes(), EcLevel::M)?;
        let side = code.width();
        let modules: Vec<bool> = code
            .to_colors()
            .into_iter()
            .map(|color| matches!(color, Color::Dark))
            .collect();

        log::debug!("QR symbol is {side}x{side} modules, target width {}", options.width);
        surface.draw_matrix(&modules, side, options.width)
    }
}

/// CODE128 encoder backed by the `barcoders` crate.
#[derive(Debug, Default, Clone, Copy)]
pub struct Code128Encoder;

impl BarcodeEncoder for Code128Encoder {
    fn encode(
        &self,
        surface: &mut Surface,
        text: &str,
        options: &BarcodeOptions,
    ) -> Result<(), EncodeFault> {
        let Symbology::Code128 = options.format;

        let data = code128_data(text)?;
        let bars = Code128::new(&data).map_err(EncodeFault::Barcode)?.encode();

        log::debug!("CODE128 symbol is {} modules wide", bars.len());
        surface.draw_linear(
            &bars,
            options.module_width,
            options.height,
            options.display_value.then_some(text),
        )
    }
}

/// Prefixes `text` with the code set to encode it in.
///
/// Even-length digit strings use the dense numeric set C. Anything else
/// starts in set B, or in set A when a control character shows up before
/// any lowercase letter, and switches between A and B wherever a character
/// exists in only one of them. Non-ASCII and DEL have no encoding.
fn code128_data(text: &str) -> Result<String, EncodeFault> {
    if let Some(bad) = text.chars().find(|c| !c.is_ascii() || *c == '\u{7f}') {
        return Err(EncodeFault::UnsupportedCharacter(bad));
    }

    let numeric =
        !text.is_empty() && text.len() % 2 == 0 && text.bytes().all(|b| b.is_ascii_digit());
    if numeric {
        return Ok(format!("{CODE128_SET_C}{text}"));
    }

    let mut set = text
        .chars()
        .find_map(exclusive_set)
        .unwrap_or(CODE128_SET_B);
    let mut data = String::with_capacity(text.len() + 4);
    data.push(set);
    for c in text.chars() {
        if let Some(required) = exclusive_set(c)
            && required != set
        {
            data.push(required);
            set = required;
        }
        data.push(c);
    }
    Ok(data)
}

/// The only code set holding `c`, when A and B do not share it.
fn exclusive_set(c: char) -> Option<char> {
    match c {
        '\0'..='\u{1f}' => Some(CODE128_SET_A),
        '`'..='~' => Some(CODE128_SET_B),
        _ => None,
    }
}
