//! Tokenizer and region segmenter for the atlas format.

use log::trace;

use crate::error::FormatError;

/// Reserved tokens delimiting the regions of an atlas string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Marker {
    /// Start of frame records, always the first token
    Frames,
    /// Start of animation records, optional
    Animations,
    /// Precedes the version literal
    Version,
}

impl Marker {
    pub fn token(self) -> &'static str {
        match self {
            Marker::Frames => "f",
            Marker::Animations => "a",
            Marker::Version => "v",
        }
    }

    fn position(self, tokens: &[&str]) -> Option<usize> {
        tokens.iter().position(|t| *t == self.token())
    }
}

/// Splits `format` on the ASCII space character.
///
/// Consecutive spaces produce empty tokens; they are kept so that the literal
/// decoder can reject them.
///
/// ```
/// use tinyatlas::token::tokenize;
///
/// assert_eq!(tokenize("f 0  v"), vec!["f", "0", "", "v"]);
/// ```
pub fn tokenize(format: &str) -> Vec<&str> {
    format.split(' ').collect()
}

/// Token regions of an atlas string, still undecoded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Segments<'a> {
    pub frames: &'a [&'a str],
    /// `None` when the string has no animations marker
    pub animations: Option<&'a [&'a str]>,
    /// Token right after the version marker, if there is one
    pub version: Option<&'a str>,
}

/// Locates the markers and partitions `tokens` into regions.
///
/// Frame tokens run from the frames marker up to the first animations or
/// version marker, whichever comes first. Animation tokens run from the
/// animations marker up to the version marker.
pub fn segment<'a>(tokens: &'a [&'a str]) -> Result<Segments<'a>, FormatError> {
    if tokens.first() != Some(&Marker::Frames.token()) {
        return Err(FormatError::MissingFramesMarker);
    }
    let version_at = Marker::Version
        .position(tokens)
        .ok_or(FormatError::MissingVersionMarker)?;
    let animations_at = Marker::Animations.position(tokens);

    let frames_end = animations_at.map_or(version_at, |at| at.min(version_at));
    let frames = &tokens[1..frames_end];
    // an animations marker after the version marker yields no animation tokens
    let animations = animations_at.map(|at| tokens.get(at + 1..version_at).unwrap_or(&[]));
    let version = tokens.get(version_at + 1).copied();

    trace!(
        "segmented {} tokens: {} frame, {} animation, version token {:?}",
        tokens.len(),
        frames.len(),
        animations.map_or(0, |a| a.len()),
        version
    );

    Ok(Segments {
        frames,
        animations,
        version,
    })
}
