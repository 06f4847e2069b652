//! Array encoding for tagged fixed-arity payloads.
//!
//! Requests and replies travel as positional arrays with a string tag in
//! slot 0, e.g. `["guess_coordinate", "player1", 3, 4]`. A type opts in by
//! implementing [`TupleShape`] and routing its `Serialize` impl through
//! [`serialize`]. Because every serde data format drives the same
//! `Serialize` impl, one adapter covers the streaming JSON writer and the
//! `serde_json::Value` encoder alike.

use serde::ser::{SerializeSeq, Serializer};

/// A value that encodes as an ordered, heterogeneous array.
pub trait TupleShape {
    /// Number of elements, tag included. Zero for the empty sentinel.
    fn arity(&self) -> usize;

    /// Writes each element in order.
    fn serialize_elements<S: SerializeSeq>(&self, seq: &mut S) -> Result<(), S::Error>;
}

/// Encodes `value` as a sequence of exactly [`TupleShape::arity`] elements.
pub fn serialize<T, S>(value: &T, serializer: S) -> Result<S::Ok, S::Error>
where
    T: TupleShape + ?Sized,
    S: Serializer,
{
    let mut seq = serializer.serialize_seq(Some(value.arity()))?;
    value.serialize_elements(&mut seq)?;
    seq.end()
}
