//! Error types.
//!
//! Only configuration and save-state handling can fail. Executing an opcode
//! never does: every slot of a built descriptor is mapped.

use thiserror::Error;

use crate::VariantId;

/// A CPU core was configured with data it cannot run.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("unknown CPU variant `{0}`")]
    UnknownVariant(String),
    #[error("dispatch table has no entry for opcode ${0:02X}")]
    UnmappedOpcode(u8),
}

/// A context blob could not be encoded, decoded or applied.
#[derive(Debug, Error)]
pub enum ContextError {
    #[error("failed to encode CPU context: {0}")]
    Encode(#[from] rmp_serde::encode::Error),
    #[error("failed to decode CPU context: {0}")]
    Decode(#[from] rmp_serde::decode::Error),
    #[error("context was saved from a {found} core, cannot restore into {expected}")]
    VariantMismatch { expected: VariantId, found: VariantId },
}
