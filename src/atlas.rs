use std::convert::TryFrom;

use serde::{Deserialize, Serialize};

/// One packed sub-rectangle of the sprite sheet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Frame {
    /// Source X-position on the image
    pub x: u64,
    /// Source Y-position on the image
    pub y: u64,
    /// Source width on the image
    pub width: u64,
    /// Source height on the image
    pub height: u64,
    /// X offset of the frame inside the logical sprite
    pub local_x: u64,
    /// Y offset of the frame inside the logical sprite
    pub local_y: u64,
    /// Packed rotated 90 degrees
    pub rotated: bool,
}

impl Frame {
    /// Width and height the frame occupies on the sheet.
    pub fn packed_size(&self) -> (u64, u64) {
        if self.rotated {
            (self.height, self.width)
        } else {
            (self.width, self.height)
        }
    }
}

/// A named run of frames, `start..=end`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Animation {
    pub name: String,
    /// Nominal sprite width
    pub width: u64,
    /// Nominal sprite height
    pub height: u64,
    /// Zero-indexed first frame
    pub start: u64,
    /// Zero-indexed last frame, inclusive
    pub end: u64,
}

impl Animation {
    /// Number of frames in the sequence.
    pub fn len(&self) -> u64 {
        self.end.saturating_add(1).saturating_sub(self.start)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Atlas {
    pub frames: Vec<Frame>,
    pub animations: Vec<Animation>,
    pub version: u32,
}

impl Atlas {
    pub fn animation(&self, name: &str) -> Option<&Animation> {
        self.animations.iter().find(|a| a.name == name)
    }

    /// Frames covered by `animation`, or `None` if its range does not fit
    /// this atlas.
    pub fn animation_frames(&self, animation: &Animation) -> Option<&[Frame]> {
        let start = usize::try_from(animation.start).ok()?;
        let end = usize::try_from(animation.end).ok()?;
        self.frames.get(start..=end)
    }
}
