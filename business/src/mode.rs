/// Which symbol the generator is producing.
///
/// Each mode owns its own input value; switching modes never touches the
/// other mode's value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Mode {
    #[default]
    Qr,
    Barcode,
}

impl Mode {
    /// All modes in tab order.
    pub const ALL: [Self; 2] = [Self::Qr, Self::Barcode];

    /// File name used when the snapshot of this mode is downloaded.
    pub fn file_name(self) -> &'static str {
        match self {
            Self::Qr => "qrcode.png",
            Self::Barcode => "barcode.png",
        }
    }

    pub fn tab_label(self) -> &'static str {
        match self {
            Self::Qr => "QR Code",
            Self::Barcode => "Barcode",
        }
    }

    pub fn download_label(self) -> &'static str {
        match self {
            Self::Qr => "Download QR Code",
            Self::Barcode => "Download Barcode",
        }
    }
}
