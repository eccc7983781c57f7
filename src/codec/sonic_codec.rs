use super::{Codec, Payload, Target};
use crate::error::CodecError;

const NAME: &str = "sonic-rs";

#[derive(Debug, Default, Clone, Copy)]
pub struct SonicCodec;

impl Codec for SonicCodec {
    fn name(&self) -> &'static str {
        NAME
    }

    fn encode(&self, payload: Payload<'_>) -> Result<Vec<u8>, CodecError> {
        match payload {
            Payload::Record(record) => sonic_rs::to_vec(record),
            Payload::Batch(batch) => sonic_rs::to_vec(batch),
        }
        .map_err(|e| CodecError::encode(NAME, e))
    }

    fn decode(&self, bytes: &[u8], target: Target<'_>) -> Result<(), CodecError> {
        match target {
            Target::Record(slot) => {
                *slot = sonic_rs::from_slice(bytes).map_err(|e| CodecError::decode(NAME, e))?;
            }
            Target::Batch(slot) => {
                *slot = sonic_rs::from_slice(bytes).map_err(|e| CodecError::decode(NAME, e))?;
            }
        }
        Ok(())
    }
}
