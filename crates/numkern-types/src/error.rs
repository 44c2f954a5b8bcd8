// ─────────────────────────────────────────────────────────────────────
// Numkern — Error
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
use thiserror::Error;

use crate::tier::TierKind;

#[derive(Error, Debug)]
pub enum KernelError {
    #[error("Band {band} has length {actual}, expected {expected}")]
    DimensionMismatch {
        band: &'static str,
        expected: usize,
        actual: usize,
    },

    #[error("Slice length mismatch: input {input}, output {output}")]
    LengthMismatch { input: usize, output: usize },

    #[error("Singular matrix: no usable pivot in column {column}")]
    SingularMatrix { column: usize },

    #[error("Singular matrix: coefficient row {row} is all zero")]
    ZeroRow { row: usize },

    #[error("Precision tier {0:?} has no native representation")]
    UnsupportedTier(TierKind),

    #[error("Configured tier pairing {configured} does not match compiled pairing {compiled}")]
    PairingMismatch { configured: u8, compiled: u8 },

    #[error("Invalid buffer alignment {0} (must be a power of two of at least 16)")]
    Alignment(usize),

    #[error("Cannot parse {text:?} as {kind:?}")]
    Parse { text: String, kind: TierKind },

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type KernelResult<T> = Result<T, KernelError>;
