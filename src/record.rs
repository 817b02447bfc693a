//! Fixed-width positional records over a flat run of decoded literals.

use std::marker::PhantomData;

use serde_json::Value;

use crate::error::FormatError;

/// A named position inside a fixed-width record.
pub trait Slot: Copy {
    /// Literals per record
    const WIDTH: usize;

    fn index(self) -> usize;

    /// Error reported when the value in this slot is rejected
    fn invalid(self) -> FormatError;

    /// Error reported when the literal count is not a positive multiple of `WIDTH`
    fn invalid_length() -> FormatError;
}

/// One record's worth of literals.
#[derive(Debug, Clone, Copy)]
pub struct Record<'v, S> {
    values: &'v [Value],
    slot: PhantomData<S>,
}

impl<'v, S: Slot> Record<'v, S> {
    /// Reads `slot` with `reader`, failing with the slot's error when the
    /// reader rejects the value.
    pub fn read<T, R>(&self, slot: S, reader: R) -> Result<T, FormatError>
    where
        R: FnOnce(&'v Value) -> Option<T>,
    {
        self.values
            .get(slot.index())
            .and_then(reader)
            .ok_or_else(|| slot.invalid())
    }
}

/// Groups `literals` into `S::WIDTH`-wide records and decodes each in order.
///
/// An empty run is a length error: every region that is present must hold at
/// least one record.
pub fn decode_records<'v, S, T, F>(literals: &'v [Value], mut decode: F) -> Result<Vec<T>, FormatError>
where
    S: Slot,
    F: FnMut(Record<'v, S>) -> Result<T, FormatError>,
{
    if literals.is_empty() || literals.len() % S::WIDTH != 0 {
        return Err(S::invalid_length());
    }
    literals
        .chunks_exact(S::WIDTH)
        .map(|values| {
            decode(Record {
                values,
                slot: PhantomData,
            })
        })
        .collect()
}
