use base64::{Engine as _, engine::general_purpose::STANDARD};

use crate::Mode;

/// Image captured after a successful render.
///
/// Holds both the raw RGBA pixels (for an on-screen preview) and the PNG
/// encoding of the same pixels (for download).
#[derive(Debug, Clone, PartialEq)]
pub struct Snapshot {
    /// Mode the snapshot was rendered for.
    pub mode: Mode,
    /// Increases with every capture of the owning controller.
    pub revision: u64,
    pub width: u32,
    pub height: u32,
    /// Size the symbol is displayed at, in logical pixels.
    pub display_size: [f32; 2],
    pub rgba: Vec<u8>,
    pub png: Vec<u8>,
}

impl Snapshot {
    pub fn is_empty(&self) -> bool {
        self.png.is_empty()
    }

    /// `data:` URI of the PNG encoding, suitable for a download link.
    pub fn data_uri(&self) -> String {
        format!("data:image/png;base64,{}", STANDARD.encode(&self.png))
    }
}
