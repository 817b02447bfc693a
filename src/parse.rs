//! The decode pipeline: tokens, regions, literals, version, records.

use log::debug;
use serde_json::Value;

use crate::atlas::Atlas;
use crate::error::FormatError;
use crate::literal::{self, decode_all};
use crate::token::{segment, tokenize};
use crate::v1;

/// Highest format version this crate decodes.
pub const MAX_VERSION: u32 = 1;

/// Version reported when the version marker is the last token.
const MISSING_VERSION: u32 = 0;

/// Decodes an atlas string.
///
/// ```
/// let atlas = tinyatlas::parse("f 0 0 16 16 0 0 1 a \"spin\" 16 16 0 0 v 1").unwrap();
/// assert_eq!(atlas.frames.len(), 1);
/// assert!(atlas.frames[0].rotated);
/// assert_eq!(atlas.animations[0].name, "spin");
/// ```
pub fn parse(format: &str) -> Result<Atlas, FormatError> {
    let tokens = tokenize(format);
    let segments = segment(&tokens)?;

    let frames = decode_all(segments.frames)?;
    let animations = segments.animations.map(decode_all).transpose()?;
    let version = match segments.version {
        Some(token) => read_version(&literal::decode(token)?),
        None => MISSING_VERSION,
    };

    let atlas = match version {
        1 => {
            let frames = v1::decode_frames(&frames)?;
            let animations = match animations {
                Some(literals) => v1::decode_animations(&literals, &frames)?,
                None => Vec::new(),
            };
            Atlas {
                frames,
                animations,
                version,
            }
        }
        _ => return Err(FormatError::InvalidVersion),
    };

    debug!(
        "decoded atlas v{} with {} frames and {} animations",
        atlas.version,
        atlas.frames.len(),
        atlas.animations.len()
    );
    Ok(atlas)
}

/// Reads the decoded version literal. Anything outside `1..=MAX_VERSION`
/// collapses to `MISSING_VERSION`.
fn read_version(value: &Value) -> u32 {
    match literal::whole(value) {
        Some(v) if (1..=u64::from(MAX_VERSION)).contains(&v) => v as u32,
        _ => MISSING_VERSION,
    }
}

/// Decodes an atlas from raw bytes, which must be UTF-8 text.
pub fn parse_bytes(bytes: &[u8]) -> Result<Atlas, FormatError> {
    let format = std::str::from_utf8(bytes).map_err(|_| FormatError::NotAString)?;
    parse(format)
}

/// Decodes an atlas held in a JSON value, which must be a string.
pub fn parse_value(value: &Value) -> Result<Atlas, FormatError> {
    match value {
        Value::String(format) => parse(format),
        _ => Err(FormatError::NotAString),
    }
}

impl std::str::FromStr for Atlas {
    type Err = FormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse(s)
    }
}

impl std::convert::TryFrom<&str> for Atlas {
    type Error = FormatError;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        parse(s)
    }
}
