use crate::{Mode, RenderStatus, Snapshot};

/// A snapshot ready to be handed to the host's save mechanism.
#[derive(Debug, Clone, Copy)]
pub struct Download<'a> {
    pub file_name: &'static str,
    pub snapshot: &'a Snapshot,
}

impl Download<'_> {
    pub fn png(&self) -> &[u8] {
        &self.snapshot.png
    }

    pub fn data_uri(&self) -> String {
        self.snapshot.data_uri()
    }
}

/// Builds the download for the active mode.
///
/// Only a `Valid` render whose snapshot belongs to `mode` can be exported;
/// every other combination yields `None`.
pub fn export(
    mode: Mode,
    status: RenderStatus,
    snapshot: Option<&Snapshot>,
) -> Option<Download<'_>> {
    if status != RenderStatus::Valid {
        return None;
    }
    let snapshot = snapshot.filter(|s| s.mode == mode && !s.is_empty())?;
    Some(Download {
        file_name: mode.file_name(),
        snapshot,
    })
}
