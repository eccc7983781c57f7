use super::{Codec, Payload, Target};
use crate::error::CodecError;

const NAME: &str = "serde_json";

/// Reference adapter over `serde_json`.
#[derive(Debug, Default, Clone, Copy)]
pub struct SerdeJsonCodec;

impl Codec for SerdeJsonCodec {
    fn name(&self) -> &'static str {
        NAME
    }

    fn encode(&self, payload: Payload<'_>) -> Result<Vec<u8>, CodecError> {
        match payload {
            Payload::Record(record) => serde_json::to_vec(record),
            Payload::Batch(batch) => serde_json::to_vec(batch),
        }
        .map_err(|e| CodecError::encode(NAME, e))
    }

    fn decode(&self, bytes: &[u8], target: Target<'_>) -> Result<(), CodecError> {
        match target {
            Target::Record(slot) => {
                *slot = serde_json::from_slice(bytes).map_err(|e| CodecError::decode(NAME, e))?;
            }
            Target::Batch(slot) => {
                *slot = serde_json::from_slice(bytes).map_err(|e| CodecError::decode(NAME, e))?;
            }
        }
        Ok(())
    }
}
