//! Render controller.
//!
//! Every render is a function of [`RenderInputs`] alone: it picks the
//! encoding path for the active mode, drives the owned [`Surface`] and
//! leaves the controller either `Valid` with a fresh snapshot or `Invalid`
//! with an error. A failed render keeps the previous snapshot.

use std::error::Error as _;

use crate::{
    BarcodeEncoder, DisplayBox, GenerateError, GeneratorConfig, Mode, QrEncoder, QrOptions,
    Snapshot, Surface,
};

/// Everything a render depends on.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderInputs {
    pub mode: Mode,
    pub qr_value: String,
    pub barcode_value: String,
    /// Width of the container the symbol is laid out in. `None` until the
    /// container has been measured.
    pub container_width: Option<f32>,
}

impl RenderInputs {
    pub fn from_config(config: &GeneratorConfig) -> Self {
        Self {
            mode: config.initial_mode,
            qr_value: config.qr_default.clone(),
            barcode_value: config.barcode_default.clone(),
            container_width: None,
        }
    }

    /// Value of the field belonging to `mode`.
    pub fn value(&self, mode: Mode) -> &str {
        match mode {
            Mode::Qr => &self.qr_value,
            Mode::Barcode => &self.barcode_value,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderStatus {
    /// Nothing rendered yet, or no container to render into.
    Idle,
    /// The last render succeeded; the snapshot belongs to the active mode.
    Valid,
    /// The last render failed; see the error.
    Invalid,
}

#[derive(Debug)]
pub struct RenderController<Q, B> {
    config: GeneratorConfig,
    qr: Q,
    barcode: B,
    surface: Surface,
    snapshot: Option<Snapshot>,
    error: Option<GenerateError>,
    status: RenderStatus,
    revision: u64,
}

impl<Q, B> RenderController<Q, B>
where
    Q: QrEncoder,
    B: BarcodeEncoder,
{
    pub fn new(config: GeneratorConfig, qr: Q, barcode: B) -> Self {
        Self {
            config,
            qr,
            barcode,
            surface: Surface::new(),
            snapshot: None,
            error: None,
            status: RenderStatus::Idle,
            revision: 0,
        }
    }

    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    pub fn status(&self) -> RenderStatus {
        self.status
    }

    pub fn error(&self) -> Option<&GenerateError> {
        self.error.as_ref()
    }

    pub fn snapshot(&self) -> Option<&Snapshot> {
        self.snapshot.as_ref()
    }

    pub fn surface(&self) -> &Surface {
        &self.surface
    }

    /// Re-renders the active mode from `inputs`.
    pub fn render(&mut self, inputs: &RenderInputs) -> RenderStatus {
        let Some(container_width) = inputs.container_width else {
            log::debug!("Container not measured yet, nothing to render");
            self.error = None;
            self.status = RenderStatus::Idle;
            return self.status;
        };

        let size = self.config.target_size(container_width);
        let result = match inputs.mode {
            Mode::Qr => self.render_qr(&inputs.qr_value, size),
            Mode::Barcode => self.render_barcode(&inputs.barcode_value, size),
        };

        match result {
            Ok(snapshot) => {
                log::debug!(
                    "Rendered {:?} at {}x{} px (revision {})",
                    snapshot.mode,
                    snapshot.width,
                    snapshot.height,
                    snapshot.revision
                );
                self.snapshot = Some(snapshot);
                self.error = None;
                self.status = RenderStatus::Valid;
            }
            Err(err) => {
                match err.source() {
                    Some(cause) if !err.is_validation() => log::error!("{err}: {cause}"),
                    _ => log::debug!("Rejected input: {err}"),
                }
                self.error = Some(err);
                self.status = RenderStatus::Invalid;
            }
        }
        self.status
    }

    fn render_qr(&mut self, value: &str, size: f32) -> Result<Snapshot, GenerateError> {
        // The encoder refuses empty input; a lone space keeps the symbol valid.
        let text = if value.is_empty() { " " } else { value };
        let options = QrOptions {
            width: size.floor() as u32,
        };

        self.qr
            .encode(&mut self.surface, text, options)
            .map_err(GenerateError::QrEncoding)?;
        self.surface.set_display(DisplayBox::Square(size));
        self.capture(Mode::Qr).map_err(GenerateError::QrEncoding)
    }

    fn render_barcode(&mut self, value: &str, width: f32) -> Result<Snapshot, GenerateError> {
        let min_len = self.config.barcode_min_len;
        if value.chars().count() < min_len {
            return Err(GenerateError::BarcodeTooShort { min_len });
        }

        self.barcode
            .encode(&mut self.surface, value, &self.config.barcode)
            .map_err(GenerateError::BarcodeEncoding)?;
        self.surface.set_display(DisplayBox::FitWidth(width));
        self.capture(Mode::Barcode)
            .map_err(GenerateError::BarcodeEncoding)
    }

    fn capture(&mut self, mode: Mode) -> Result<Snapshot, crate::EncodeFault> {
        let snapshot = self.surface.snapshot(mode, self.revision + 1)?;
        self.revision += 1;
        Ok(snapshot)
    }
}
