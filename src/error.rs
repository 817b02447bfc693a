use std::fmt;

use thiserror::Error;

/// Slot of a frame record, in record order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameField {
    X,
    Y,
    Width,
    Height,
    LocalX,
    LocalY,
    Rotated,
}

impl FrameField {
    pub fn name(self) -> &'static str {
        match self {
            FrameField::X => "x",
            FrameField::Y => "y",
            FrameField::Width => "width",
            FrameField::Height => "height",
            FrameField::LocalX => "localX",
            FrameField::LocalY => "localY",
            FrameField::Rotated => "rotated",
        }
    }
}

impl fmt::Display for FrameField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Slot of an animation record, in record order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnimationField {
    Name,
    Width,
    Height,
    Start,
    End,
}

impl AnimationField {
    pub fn name(self) -> &'static str {
        match self {
            AnimationField::Name => "name",
            AnimationField::Width => "width",
            AnimationField::Height => "height",
            AnimationField::Start => "start",
            AnimationField::End => "end",
        }
    }
}

impl fmt::Display for AnimationField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Every way decoding an atlas string can fail.
///
/// Decoding stops at the first failure, so a call yields exactly one of these.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormatError {
    /// Input was not text (non-UTF-8 bytes, or a non-string JSON value)
    #[error("not a string")]
    NotAString,
    /// First token is not `f`
    #[error("must start with frames marker")]
    MissingFramesMarker,
    /// No `v` token anywhere
    #[error("must include version marker")]
    MissingVersionMarker,
    /// Token is not a JSON scalar literal
    #[error("invalid literal token '{0}'")]
    InvalidLiteral(String),
    /// Version missing, not an integer, or outside `1..=MAX_VERSION`
    #[error("invalid version")]
    InvalidVersion,
    /// Frame literal count is zero or not a multiple of the record width
    #[error("invalid frame length")]
    InvalidFrameLength,
    #[error("invalid frame {0}")]
    InvalidFrame(FrameField),
    /// Animation literal count is zero or not a multiple of the record width
    #[error("invalid animation length")]
    InvalidAnimationLength,
    #[error("invalid animation {0}")]
    InvalidAnimation(AnimationField),
    #[error("duplicate animation name '{0}'")]
    DuplicateAnimationName(String),
}
