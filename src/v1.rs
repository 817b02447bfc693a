//! Record decoders for version 1 of the format.
//!
//! Frames are seven literals `x y width height localX localY rotated`,
//! animations are five literals `name width height start end`.

use std::collections::HashSet;

use serde_json::Value;

use crate::atlas::{Animation, Frame};
use crate::error::{AnimationField, FormatError, FrameField};
use crate::literal::{self, flag, whole};
use crate::record::{decode_records, Slot};

impl Slot for FrameField {
    const WIDTH: usize = 7;

    fn index(self) -> usize {
        self as usize
    }

    fn invalid(self) -> FormatError {
        FormatError::InvalidFrame(self)
    }

    fn invalid_length() -> FormatError {
        FormatError::InvalidFrameLength
    }
}

impl Slot for AnimationField {
    const WIDTH: usize = 5;

    fn index(self) -> usize {
        self as usize
    }

    fn invalid(self) -> FormatError {
        FormatError::InvalidAnimation(self)
    }

    fn invalid_length() -> FormatError {
        FormatError::InvalidAnimationLength
    }
}

pub fn decode_frames(literals: &[Value]) -> Result<Vec<Frame>, FormatError> {
    decode_records::<FrameField, _, _>(literals, |record| {
        Ok(Frame {
            x: record.read(FrameField::X, whole)?,
            y: record.read(FrameField::Y, whole)?,
            width: record.read(FrameField::Width, whole)?,
            height: record.read(FrameField::Height, whole)?,
            local_x: record.read(FrameField::LocalX, whole)?,
            local_y: record.read(FrameField::LocalY, whole)?,
            rotated: record.read(FrameField::Rotated, flag)?,
        })
    })
}

/// Decodes animation records against an already decoded frame list.
///
/// `end` must index into `frames` and may not precede `start`. Names are
/// unique within an atlas.
pub fn decode_animations(literals: &[Value], frames: &[Frame]) -> Result<Vec<Animation>, FormatError> {
    let last_frame = frames.len().checked_sub(1);
    let mut seen = HashSet::new();

    decode_records::<AnimationField, _, _>(literals, |record| {
        let name = record.read(AnimationField::Name, literal::name)?;
        let width = record.read(AnimationField::Width, whole)?;
        let height = record.read(AnimationField::Height, whole)?;
        let start = record.read(AnimationField::Start, whole)?;
        let end = record.read(AnimationField::End, |v| {
            whole(v).filter(|end| last_frame.map_or(false, |last| *end <= last as u64))
        })?;
        if start > end {
            return Err(AnimationField::Start.invalid());
        }
        if !seen.insert(name) {
            return Err(FormatError::DuplicateAnimationName(name.to_string()));
        }

        Ok(Animation {
            name: name.to_string(),
            width,
            height,
            start,
            end,
        })
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::literal::decode_all;
    use crate::token::tokenize;

    fn literals(s: &str) -> Vec<Value> {
        decode_all(&tokenize(s)).unwrap()
    }

    fn frames(n: usize) -> Vec<Frame> {
        decode_frames(&literals(&vec!["0 0 1 1 0 0 0"; n].join(" "))).unwrap()
    }

    #[test]
    fn test_decode_single_frame() {
        let decoded = decode_frames(&literals("1 2 3 4 5 6 1")).unwrap();
        assert_eq!(
            decoded,
            vec![Frame {
                x: 1,
                y: 2,
                width: 3,
                height: 4,
                local_x: 5,
                local_y: 6,
                rotated: true,
            }]
        );
    }

    #[test]
    fn test_frame_field_errors() {
        let cases = [
            ("-1 0 1 1 0 0 0", FrameField::X),
            ("0 null 1 1 0 0 0", FrameField::Y),
            ("0 0 1.5 1 0 0 0", FrameField::Width),
            ("0 0 1 \"1\" 0 0 0", FrameField::Height),
            ("0 0 1 1 true 0 0", FrameField::LocalX),
            ("0 0 1 1 0 -2 0", FrameField::LocalY),
            ("0 0 1 1 0 0 2", FrameField::Rotated),
        ];
        for (input, field) in cases.iter() {
            assert_eq!(
                decode_frames(&literals(input)),
                Err(FormatError::InvalidFrame(*field)),
                "input {:?}",
                input
            );
        }
    }

    #[test]
    fn test_rotated_rejects_json_booleans() {
        assert_eq!(
            decode_frames(&literals("0 0 1 1 0 0 false")),
            Err(FormatError::InvalidFrame(FrameField::Rotated))
        );
    }

    #[test]
    fn test_frame_length() {
        assert_eq!(decode_frames(&[]), Err(FormatError::InvalidFrameLength));
        assert_eq!(
            decode_frames(&literals("0 0 1 1 0 0 0 0")),
            Err(FormatError::InvalidFrameLength)
        );
    }

    #[test]
    fn test_decode_animations() {
        let decoded = decode_animations(&literals("\"idle\" 16 16 0 0 \"walk\" 16 16 1 2"), &frames(3)).unwrap();
        assert_eq!(decoded.len(), 2);
        assert_eq!(decoded[0].name, "idle");
        assert_eq!(decoded[1].start, 1);
        assert_eq!(decoded[1].end, 2);
    }

    #[test]
    fn test_animation_end_bounded_by_frames() {
        assert_eq!(
            decode_animations(&literals("\"h\" 0 0 0 3"), &frames(3)),
            Err(FormatError::InvalidAnimation(AnimationField::End))
        );
        assert!(decode_animations(&literals("\"h\" 0 0 0 2"), &frames(3)).is_ok());
    }

    #[test]
    fn test_animation_start_after_end() {
        assert_eq!(
            decode_animations(&literals("\"h\" 0 0 2 1"), &frames(3)),
            Err(FormatError::InvalidAnimation(AnimationField::Start))
        );
    }

    #[test]
    fn test_duplicate_animation_names() {
        assert_eq!(
            decode_animations(&literals("\"h\" 0 0 0 0 \"h\" 0 0 0 0"), &frames(1)),
            Err(FormatError::DuplicateAnimationName("h".to_string()))
        );
    }

    #[test]
    fn test_animation_length() {
        assert_eq!(
            decode_animations(&[], &frames(1)),
            Err(FormatError::InvalidAnimationLength)
        );
        assert_eq!(
            decode_animations(&literals("\"h\" 0 0 0"), &frames(1)),
            Err(FormatError::InvalidAnimationLength)
        );
    }
}
