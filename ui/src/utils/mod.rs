pub mod colors;
pub mod download;
pub mod preview;
pub mod resize;
