use codegen_business::{CodeGenerator, GeneratorConfig};

use crate::utils::{
    download::{DownloadHandler, SystemDownloadHandler},
    preview::PreviewTexture,
    resize::ResizeWatcher,
};

/// The main application state.
///
/// Note: We manually implement Default because the download handler is a
/// trait object.
pub struct State {
    /// Inputs, render controller and surface of the generator.
    pub generator: CodeGenerator,
    /// Tracks the preview container width between frames.
    pub resize: ResizeWatcher,
    /// Texture showing the latest snapshot.
    pub preview: PreviewTexture,
    /// Where exported images go.
    pub download: Box<dyn DownloadHandler>,
}

impl Default for State {
    fn default() -> Self {
        Self::new(GeneratorConfig::default(), Box::new(SystemDownloadHandler))
    }
}

impl State {
    pub fn new(config: GeneratorConfig, download: Box<dyn DownloadHandler>) -> Self {
        Self {
            generator: CodeGenerator::new(config),
            resize: ResizeWatcher::new(),
            preview: PreviewTexture::default(),
            download,
        }
    }

    pub fn with_download_handler(download: impl DownloadHandler + 'static) -> Self {
        Self::new(GeneratorConfig::default(), Box::new(download))
    }
}
