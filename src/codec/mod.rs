//! Uniform encode/decode surface over the JSON libraries under comparison.
//!
//! Each adapter is a stateless strategy. Adapters never coerce mismatched
//! types: anything the underlying library rejects comes back as a
//! [`CodecError`].

mod serde_codec;
mod simd_codec;
mod sonic_codec;

pub use serde_codec::SerdeJsonCodec;
pub use simd_codec::SimdJsonCodec;
pub use sonic_codec::SonicCodec;

use crate::error::CodecError;
use crate::fixture::Record;

/// Value handed to [`Codec::encode`].
#[derive(Debug, Clone, Copy)]
pub enum Payload<'a> {
    Record(&'a Record),
    Batch(&'a [Record]),
}

/// Caller-owned location [`Codec::decode`] writes into.
#[derive(Debug)]
pub enum Target<'a> {
    Record(&'a mut Record),
    Batch(&'a mut Vec<Record>),
}

pub trait Codec: Send + Sync {
    fn name(&self) -> &'static str;
    fn encode(&self, payload: Payload<'_>) -> Result<Vec<u8>, CodecError>;
    /// Replaces the contents of `target` with the value decoded from `bytes`.
    /// On error `target` is left untouched.
    fn decode(&self, bytes: &[u8], target: Target<'_>) -> Result<(), CodecError>;
}

/// All adapters in declaration order.
pub fn default_codecs() -> Vec<Box<dyn Codec>> {
    vec![
        Box::new(SerdeJsonCodec),
        Box::new(SimdJsonCodec),
        Box::new(SonicCodec),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixture::{make_batch, make_malformed, make_record};

    #[test]
    fn every_codec_should_round_trip_record() {
        let record = make_record();
        for codec in default_codecs() {
            let bytes = codec.encode(Payload::Record(&record)).unwrap();
            let mut decoded = Record::default();
            codec
                .decode(&bytes, Target::Record(&mut decoded))
                .unwrap();
            assert_eq!(decoded, record, "codec: {}", codec.name());
        }
    }

    #[test]
    fn every_codec_should_round_trip_batch_in_order() {
        let mut batch = make_batch(50);
        for (i, record) in batch.iter_mut().enumerate() {
            record.first_integer = i as i64;
        }
        for codec in default_codecs() {
            let bytes = codec.encode(Payload::Batch(&batch)).unwrap();
            let mut decoded = vec![Record::default(); 3];
            codec.decode(&bytes, Target::Batch(&mut decoded)).unwrap();
            assert_eq!(decoded, batch, "codec: {}", codec.name());
        }
    }

    #[test]
    fn every_codec_should_reject_malformed_payload() {
        let malformed = make_malformed();
        for codec in default_codecs() {
            let mut decoded = Record::default();
            let result = codec.decode(&malformed, Target::Record(&mut decoded));
            assert!(
                matches!(result, Err(CodecError::Decode { .. })),
                "codec {} accepted malformed input",
                codec.name()
            );
            assert_eq!(decoded, Record::default());
        }
    }

    #[test]
    fn every_codec_should_reject_truncated_input() {
        for codec in default_codecs() {
            let mut decoded = Record::default();
            assert!(codec
                .decode(br#"{"FirstString":"1"#, Target::Record(&mut decoded))
                .is_err());
        }
    }

    #[test]
    fn codec_names_should_be_unique() {
        let names: Vec<_> = default_codecs().iter().map(|c| c.name()).collect();
        assert_eq!(names, ["serde_json", "simd-json", "sonic-rs"]);
    }
}
