//! UI-free core of the code generator: symbol encoding, the owned render
//! surface, the render controller state machine and export gating.

mod config;
mod encoder;
mod error;
mod export;
mod generator;
mod mode;
mod render;
mod snapshot;
mod surface;

pub use config::GeneratorConfig;
pub use encoder::{
    BarcodeEncoder, BarcodeOptions, Code128Encoder, QrEncoder, QrOptions, QrcodeEncoder,
    Symbology,
};
pub use error::{EncodeFault, GenerateError};
pub use export::{Download, export};
pub use generator::{CodeGenerator, GeneratorEvent};
pub use mode::Mode;
pub use render::{RenderController, RenderInputs, RenderStatus};
pub use snapshot::Snapshot;
pub use surface::{DisplayBox, Surface};
