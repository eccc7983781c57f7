use super::{Codec, Payload, Target};
use crate::error::CodecError;

const NAME: &str = "simd-json";

/// Adapter over `simd-json`. The parser mutates its input, so every decode
/// works on its own scratch copy of the bytes.
#[derive(Debug, Default, Clone, Copy)]
pub struct SimdJsonCodec;

impl Codec for SimdJsonCodec {
    fn name(&self) -> &'static str {
        NAME
    }

    fn encode(&self, payload: Payload<'_>) -> Result<Vec<u8>, CodecError> {
        match payload {
            Payload::Record(record) => simd_json::serde::to_vec(record),
            Payload::Batch(batch) => simd_json::serde::to_vec(batch),
        }
        .map_err(|e| CodecError::encode(NAME, e))
    }

    fn decode(&self, bytes: &[u8], target: Target<'_>) -> Result<(), CodecError> {
        let mut scratch = bytes.to_vec();
        match target {
            Target::Record(slot) => {
                *slot = simd_json::serde::from_slice(&mut scratch)
                    .map_err(|e| CodecError::decode(NAME, e))?;
            }
            Target::Batch(slot) => {
                *slot = simd_json::serde::from_slice(&mut scratch)
                    .map_err(|e| CodecError::decode(NAME, e))?;
            }
        }
        Ok(())
    }
}
