//! Final palette assembly.
//!
//! Writes the palette buffer in its fixed order: reserved anchors, then
//! lightness centroids ascending, then hue centroids ascending. Slots with
//! no surviving bucket keep the zero/black default, so the output is always
//! exactly `num_colors * 3` bytes.

use crate::channel::ImageChannels;

use super::allocate::Allocation;
use super::error::{AssembleError, Stage};
use super::palette::Palette;

/// Assemble the output palette from the reduced channels.
///
/// # Errors
///
/// Returns [`AssembleError::SlotOverrun`] if the surviving buckets plus
/// reserved anchors exceed `num_colors`. That can only happen through a
/// slot-accounting bug upstream; correct allocation makes this unreachable.
pub fn assemble(
    channels: &ImageChannels,
    allocation: &Allocation,
    num_colors: usize,
) -> Result<Palette, AssembleError> {
    let mut writer = SlotWriter::new(num_colors);

    for &anchor in &allocation.anchors {
        writer.write(anchor, Stage::Anchors)?;
    }
    for index in channels.lightness.active() {
        writer.write(channels.lightness.bucket(index).centroid(), Stage::Lightness)?;
    }
    for index in channels.hue.active() {
        writer.write(channels.hue.bucket(index).centroid(), Stage::Hue)?;
    }

    Ok(writer.finish())
}

/// Cursor over the fixed-size palette buffer.
struct SlotWriter {
    bytes: Vec<u8>,
    capacity: usize,
    cursor: usize,
}

impl SlotWriter {
    fn new(capacity: usize) -> Self {
        Self {
            bytes: vec![0u8; capacity * 3],
            capacity,
            cursor: 0,
        }
    }

    fn write(&mut self, color: [u8; 3], stage: Stage) -> Result<(), AssembleError> {
        if self.cursor >= self.capacity {
            return Err(AssembleError::SlotOverrun {
                stage,
                capacity: self.capacity,
            });
        }
        let at = self.cursor * 3;
        self.bytes[at..at + 3].copy_from_slice(&color);
        self.cursor += 1;
        Ok(())
    }

    fn finish(self) -> Palette {
        Palette::from_bytes(self.bytes)
    }
}
