use std::cell::RefCell;
use std::rc::Rc;

use codegen_business::Download;
use codegen_ui::CodeGenApp;
use codegen_ui::state::State;
use codegen_ui::utils::download::DownloadHandler;
use egui_kittest::Harness;

/// Download handler remembering the file names it was asked to save.
#[derive(Debug, Default, Clone)]
pub struct RecordingDownloadHandler {
    saved: Rc<RefCell<Vec<&'static str>>>,
}

impl DownloadHandler for RecordingDownloadHandler {
    fn download(&self, download: &Download<'_>) -> anyhow::Result<()> {
        self.saved.borrow_mut().push(download.file_name);
        Ok(())
    }
}

pub struct TestCtx<'a> {
    harness: Harness<'a, CodeGenApp>,
    downloads: RecordingDownloadHandler,
}

impl<'a> TestCtx<'a> {
    pub fn new_app() -> Self {
        let _ = env_logger::builder().is_test(true).try_init();
        let downloads = RecordingDownloadHandler::default();
        let state = State::with_download_handler(downloads.clone());
        let app = CodeGenApp::builder().state(state).build();
        let harness = Harness::new_eframe(|_| app);

        Self { harness, downloads }
    }

    pub fn harness_mut(&mut self) -> &mut Harness<'a, CodeGenApp> {
        &mut self.harness
    }

    #[allow(unused)]
    pub fn downloads(&self) -> Vec<&'static str> {
        self.downloads.saved.borrow().clone()
    }

    /// Runs enough frames for measurement, render and texture upload.
    pub fn settle(&mut self) {
        for _ in 0..3 {
            self.harness.step();
        }
    }
}
