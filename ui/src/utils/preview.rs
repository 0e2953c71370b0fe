//! GPU texture holding the latest snapshot for on-screen preview.

use codegen_business::Snapshot;
use egui::{Color32, ColorImage, Context, TextureHandle, TextureOptions};
use image::imageops::{self, FilterType};
use image::{ImageBuffer, Rgba};

const PREVIEW_TEXTURE_NAME: &str = "code_generator_preview";

/// Uploads snapshots to a single texture, skipping revisions already shown.
#[derive(Default)]
pub struct PreviewTexture {
    revision: Option<u64>,
    texture: Option<TextureHandle>,
}

impl std::fmt::Debug for PreviewTexture {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PreviewTexture")
            .field("revision", &self.revision)
            .field("loaded", &self.texture.is_some())
            .finish()
    }
}

impl PreviewTexture {
    /// Returns a texture showing `snapshot`, uploading it if it changed.
    ///
    /// Snapshots larger than the backend's texture limit are scaled down;
    /// the snapshot itself keeps full resolution for export.
    pub fn sync(&mut self, ctx: &Context, snapshot: &Snapshot) -> TextureHandle {
        let stale = self.revision != Some(snapshot.revision);
        let max_side = ctx.input(|i| i.max_texture_side);
        let texture = match self.texture.take() {
            Some(texture) if !stale => texture,
            Some(mut texture) => {
                texture.set(color_image(snapshot, max_side), TextureOptions::NEAREST);
                texture
            }
            None => ctx.load_texture(
                PREVIEW_TEXTURE_NAME,
                color_image(snapshot, max_side),
                TextureOptions::NEAREST,
            ),
        };
        if stale {
            log::debug!("Uploaded preview revision {}", snapshot.revision);
            self.revision = Some(snapshot.revision);
        }

        self.texture = Some(texture.clone());
        texture
    }

    /// Revision of the snapshot currently uploaded.
    pub fn revision(&self) -> Option<u64> {
        self.revision
    }
}

fn color_image(snapshot: &Snapshot, max_side: usize) -> ColorImage {
    let longest = snapshot.width.max(snapshot.height) as usize;
    if longest <= max_side {
        return ColorImage::from_rgba_unmultiplied(
            [snapshot.width as usize, snapshot.height as usize],
            &snapshot.rgba,
        );
    }

    let Some(pixels) = ImageBuffer::<Rgba<u8>, &[u8]>::from_raw(
        snapshot.width,
        snapshot.height,
        snapshot.rgba.as_slice(),
    ) else {
        log::warn!(
            "Snapshot {} holds {} bytes, not {}x{} RGBA",
            snapshot.revision,
            snapshot.rgba.len(),
            snapshot.width,
            snapshot.height
        );
        return ColorImage::filled([1, 1], Color32::TRANSPARENT);
    };

    let scale = max_side as f64 / longest as f64;
    let width = ((f64::from(snapshot.width) * scale).round() as u32).clamp(1, max_side as u32);
    let height = ((f64::from(snapshot.height) * scale).round() as u32).clamp(1, max_side as u32);
    log::debug!(
        "Scaling preview {}x{} -> {width}x{height} (texture limit {max_side})",
        snapshot.width,
        snapshot.height
    );
    let scaled = imageops::resize(&pixels, width, height, FilterType::Triangle);
    ColorImage::from_rgba_unmultiplied([width as usize, height as usize], scaled.as_raw())
}
