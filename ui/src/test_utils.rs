use std::cell::RefCell;
use std::rc::Rc;

use codegen_business::Download;
use egui_kittest::Harness;

use crate::state::State;
use crate::utils::download::DownloadHandler;

/// Download handler remembering the file names it was asked to save.
#[derive(Debug, Default, Clone)]
pub struct RecordingDownloadHandler {
    saved: Rc<RefCell<Vec<&'static str>>>,
}

impl RecordingDownloadHandler {
    pub fn saved(&self) -> Vec<&'static str> {
        self.saved.borrow().clone()
    }
}

impl DownloadHandler for RecordingDownloadHandler {
    fn download(&self, download: &Download<'_>) -> anyhow::Result<()> {
        self.saved.borrow_mut().push(download.file_name);
        Ok(())
    }
}

pub struct TestCtx<'a> {
    harness: Harness<'a, State>,
    downloads: RecordingDownloadHandler,
}

impl<'a> TestCtx<'a> {
    pub fn new(app: impl FnMut(&mut egui::Ui, &mut State) + 'a) -> Self {
        let _ = env_logger::builder().is_test(true).try_init();
        let downloads = RecordingDownloadHandler::default();
        let state = State::with_download_handler(downloads.clone());
        let harness = Harness::new_ui_state(app, state);

        Self { harness, downloads }
    }

    pub fn harness_mut(&mut self) -> &mut Harness<'a, State> {
        &mut self.harness
    }

    #[allow(unused)]
    pub fn harness(&self) -> &Harness<'a, State> {
        &self.harness
    }

    pub fn downloads(&self) -> Vec<&'static str> {
        self.downloads.saved()
    }

    /// Runs enough frames for measurement, render and texture upload.
    pub fn settle(&mut self) {
        for _ in 0..3 {
            self.harness.step();
        }
    }
}
