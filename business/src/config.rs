use crate::{BarcodeOptions, Mode};

/// Tunables of the code generator.
#[derive(Debug, Clone, PartialEq)]
pub struct GeneratorConfig {
    /// Hard ceiling, in logical pixels, for the rendered symbol width.
    pub max_size: f32,
    pub qr_default: String,
    pub barcode_default: String,
    /// Shortest barcode value that is rendered at all.
    pub barcode_min_len: usize,
    pub initial_mode: Mode,
    pub barcode: BarcodeOptions,
}

impl GeneratorConfig {
    /// Width the symbol is rendered at for a container of `container_width`.
    ///
    /// Negative and NaN widths collapse to zero.
    pub fn target_size(&self, container_width: f32) -> f32 {
        container_width.max(0.0).min(self.max_size)
    }
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            max_size: 300.0,
            qr_default: "https://example.com".to_owned(),
            barcode_default: "1234567890".to_owned(),
            barcode_min_len: 3,
            initial_mode: Mode::Qr,
            barcode: BarcodeOptions::default(),
        }
    }
}
