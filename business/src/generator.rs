//! Event dispatcher tying user input to the render controller.

use crate::{
    BarcodeEncoder, Code128Encoder, Download, GenerateError, GeneratorConfig, Mode, QrEncoder,
    QrcodeEncoder, RenderController, RenderInputs, RenderStatus, Snapshot, export,
};

/// Something that happened to the component.
#[derive(Debug, Clone, PartialEq)]
pub enum GeneratorEvent {
    QrValueChanged(String),
    BarcodeValueChanged(String),
    ModeSelected(Mode),
    ContainerResized(f32),
}

/// The code generator component state.
///
/// Holds the four render inputs and the controller that owns the surface.
/// Every dispatched event updates the inputs and re-renders synchronously,
/// so the latest event always wins.
#[derive(Debug)]
pub struct CodeGenerator<Q = QrcodeEncoder, B = Code128Encoder> {
    inputs: RenderInputs,
    controller: RenderController<Q, B>,
}

impl CodeGenerator {
    pub fn new(config: GeneratorConfig) -> Self {
        Self::with_encoders(config, QrcodeEncoder, Code128Encoder)
    }
}

impl Default for CodeGenerator {
    fn default() -> Self {
        Self::new(GeneratorConfig::default())
    }
}

impl<Q, B> CodeGenerator<Q, B>
where
    Q: QrEncoder,
    B: BarcodeEncoder,
{
    pub fn with_encoders(config: GeneratorConfig, qr: Q, barcode: B) -> Self {
        Self {
            inputs: RenderInputs::from_config(&config),
            controller: RenderController::new(config, qr, barcode),
        }
    }

    pub fn dispatch(&mut self, event: GeneratorEvent) -> RenderStatus {
        log::debug!("Dispatching {event:?}");
        match event {
            GeneratorEvent::QrValueChanged(value) => self.inputs.qr_value = value,
            GeneratorEvent::BarcodeValueChanged(value) => self.inputs.barcode_value = value,
            GeneratorEvent::ModeSelected(mode) => self.inputs.mode = mode,
            GeneratorEvent::ContainerResized(width) => self.inputs.container_width = Some(width),
        }
        self.controller.render(&self.inputs)
    }

    pub fn config(&self) -> &GeneratorConfig {
        self.controller.config()
    }

    pub fn inputs(&self) -> &RenderInputs {
        &self.inputs
    }

    pub fn mode(&self) -> Mode {
        self.inputs.mode
    }

    pub fn qr_value(&self) -> &str {
        &self.inputs.qr_value
    }

    pub fn barcode_value(&self) -> &str {
        &self.inputs.barcode_value
    }

    pub fn status(&self) -> RenderStatus {
        self.controller.status()
    }

    pub fn error(&self) -> Option<&GenerateError> {
        self.controller.error()
    }

    pub fn snapshot(&self) -> Option<&Snapshot> {
        self.controller.snapshot()
    }

    pub fn can_export(&self) -> bool {
        self.export().is_some()
    }

    /// The download for the current state, if exporting is allowed.
    pub fn export(&self) -> Option<Download<'_>> {
        export(self.inputs.mode, self.status(), self.snapshot())
    }
}
