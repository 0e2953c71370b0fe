use thiserror::Error;

/// Low-level reason a symbol could not be drawn or captured.
#[derive(Debug, Error)]
pub enum EncodeFault {
    #[error("qr encoder failed: {0}")]
    Qr(#[from] qrcode::types::QrError),
    #[error("barcode encoder failed: {0:?}")]
    Barcode(barcoders::error::Error),
    #[error("character {0:?} cannot be encoded")]
    UnsupportedCharacter(char),
    #[error("{len} modules do not form a {side}x{side} matrix")]
    MatrixShape { len: usize, side: usize },
    #[error("png encoding failed: {0}")]
    Png(#[from] image::ImageError),
    #[error("surface has nothing drawn on it")]
    EmptySurface,
}

/// Error shown inline under the preview.
///
/// The `Display` output is the exact message presented to the user.
#[derive(Debug, Error)]
pub enum GenerateError {
    #[error("Barcode value must be at least {min_len} characters long")]
    BarcodeTooShort { min_len: usize },
    #[error("Failed to generate QR code")]
    QrEncoding(#[source] EncodeFault),
    #[error("Failed to generate barcode")]
    BarcodeEncoding(#[source] EncodeFault),
}

impl GenerateError {
    /// True when the input was rejected before any encoder ran.
    pub(crate) fn is_validation(&self) -> bool {
        matches!(self, Self::BarcodeTooShort { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_facing_messages() {
        assert_eq!(
            GenerateError::BarcodeTooShort { min_len: 3 }.to_string(),
            "Barcode value must be at least 3 characters long"
        );
        assert_eq!(
            GenerateError::QrEncoding(EncodeFault::EmptySurface).to_string(),
            "Failed to generate QR code"
        );
        assert_eq!(
            GenerateError::BarcodeEncoding(EncodeFault::UnsupportedCharacter('é')).to_string(),
            "Failed to generate barcode"
        );
    }

    #[test]
    fn test_encoding_errors_keep_their_cause() {
        use std::error::Error as _;

        let err = GenerateError::BarcodeEncoding(EncodeFault::UnsupportedCharacter('é'));
        let cause = err.source().map(ToString::to_string);
        assert_eq!(cause.as_deref(), Some("character 'é' cannot be encoded"));
        assert!(!err.is_validation());
        assert!(GenerateError::BarcodeTooShort { min_len: 3 }.is_validation());
    }
}
