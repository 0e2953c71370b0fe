//! Download handlers turning an exported snapshot into a saved file.
//!
//! This module provides trait-based abstractions for the host's save
//! mechanism, enabling mock implementations for testing without opening
//! system dialogs.
//!
//! # Platform Support
//!
//! - **Native (Windows, macOS, Linux)**: save dialog via the `rfd` crate, or a
//!   fixed directory with [`DirectoryDownloadHandler`].
//! - **Web (WASM)**: a temporary `<a download>` link pointing at the PNG data
//!   URI is clicked, which starts the browser's download flow.

use codegen_business::Download;

/// Trait for saving downloads, enabling mock implementations for testing.
pub trait DownloadHandler {
    /// Hand `download` to the host. Cancelling a dialog is not an error.
    fn download(&self, download: &Download<'_>) -> anyhow::Result<()>;
}

/// Default download handler for the current platform.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemDownloadHandler;

#[cfg(not(target_arch = "wasm32"))]
impl DownloadHandler for SystemDownloadHandler {
    fn download(&self, download: &Download<'_>) -> anyhow::Result<()> {
        let Some(path) = rfd::FileDialog::new()
            .set_title("Save image")
            .set_file_name(download.file_name)
            .add_filter("PNG image", &["png"])
            .save_file()
        else {
            log::debug!("Save dialog for {} was cancelled", download.file_name);
            return Ok(());
        };

        write_png(&path, download)
    }
}

#[cfg(target_arch = "wasm32")]
impl DownloadHandler for SystemDownloadHandler {
    fn download(&self, download: &Download<'_>) -> anyhow::Result<()> {
        use anyhow::{Context as _, anyhow};
        use eframe::wasm_bindgen::JsCast as _;

        let document = web_sys::window()
            .and_then(|window| window.document())
            .context("no document to attach the download link to")?;

        let anchor = document
            .create_element("a")
            .map_err(|e| anyhow!("failed to create download link: {e:?}"))?
            .dyn_into::<web_sys::HtmlAnchorElement>()
            .map_err(|e| anyhow!("download link is not an anchor: {e:?}"))?;

        anchor.set_href(&download.data_uri());
        anchor.set_download(download.file_name);
        anchor.click();

        log::info!("Started browser download of {}", download.file_name);
        Ok(())
    }
}

/// Writes every download into a fixed directory, no dialog involved.
#[cfg(not(target_arch = "wasm32"))]
#[derive(Debug, Clone)]
pub struct DirectoryDownloadHandler {
    dir: std::path::PathBuf,
}

#[cfg(not(target_arch = "wasm32"))]
impl DirectoryDownloadHandler {
    pub fn new(dir: impl Into<std::path::PathBuf>) -> Self {
        Self { dir: dir.into() }
    }
}

#[cfg(not(target_arch = "wasm32"))]
impl DownloadHandler for DirectoryDownloadHandler {
    fn download(&self, download: &Download<'_>) -> anyhow::Result<()> {
        use anyhow::Context as _;

        std::fs::create_dir_all(&self.dir)
            .with_context(|| format!("failed to create {}", self.dir.display()))?;
        write_png(&self.dir.join(download.file_name), download)
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn write_png(path: &std::path::Path, download: &Download<'_>) -> anyhow::Result<()> {
    use anyhow::Context as _;

    std::fs::write(path, download.png())
        .with_context(|| format!("failed to write {}", path.display()))?;
    log::info!(
        "Saved {} ({} bytes) to {}",
        download.file_name,
        download.png().len(),
        path.display()
    );
    Ok(())
}
