// ─────────────────────────────────────────────────────────────────────
// Numkern — Config
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
use serde::{Deserialize, Serialize};

use crate::error::{KernelError, KernelResult};
use crate::tier::{TierPairing, PAIRING};

/// Kernel configuration, loaded from JSON.
///
/// The tier pairing itself is fixed at build time; `pairing` records the
/// code a consumer expects so a mismatched build is caught at load.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KernelConfig {
    #[serde(default = "default_pairing")]
    pub pairing: u8,
    #[serde(default)]
    pub acceptance: AcceptanceConfig,
}

/// Escalating-epsilon acceptance parameters.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AcceptanceConfig {
    /// Largest epsilon multiplier tried (power of two).
    #[serde(default = "default_max_multiplier")]
    pub max_multiplier: u32,
    /// Sample count per function when sweeping a domain.
    #[serde(default = "default_samples")]
    pub samples: usize,
    #[serde(default = "default_seed")]
    pub seed: u64,
}

fn default_pairing() -> u8 {
    PAIRING.code
}
fn default_max_multiplier() -> u32 {
    1024
}
fn default_samples() -> usize {
    4096
}
fn default_seed() -> u64 {
    0x5eed_1234
}

impl Default for AcceptanceConfig {
    fn default() -> Self {
        AcceptanceConfig {
            max_multiplier: default_max_multiplier(),
            samples: default_samples(),
            seed: default_seed(),
        }
    }
}

impl Default for KernelConfig {
    fn default() -> Self {
        KernelConfig {
            pairing: default_pairing(),
            acceptance: AcceptanceConfig::default(),
        }
    }
}

impl KernelConfig {
    /// Load from a JSON file and validate it against the compiled build.
    pub fn from_file(path: &str) -> KernelResult<Self> {
        let contents = std::fs::read_to_string(path)?;
        let config = Self::from_json(&contents)?;
        tracing::info!(path, pairing = config.pairing, "loaded kernel config");
        Ok(config)
    }

    pub fn from_json(text: &str) -> KernelResult<Self> {
        let config: Self = serde_json::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> KernelResult<()> {
        let pairing = TierPairing::from_code(self.pairing)?;
        if pairing != PAIRING {
            return Err(KernelError::PairingMismatch {
                configured: pairing.code,
                compiled: PAIRING.code,
            });
        }
        let k = self.acceptance.max_multiplier;
        if k == 0 || !k.is_power_of_two() {
            return Err(KernelError::ConfigError(format!(
                "acceptance.max_multiplier must be a power of two, got {k}"
            )));
        }
        if self.acceptance.samples == 0 {
            return Err(KernelError::ConfigError(
                "acceptance.samples must be >= 1".to_string(),
            ));
        }
        Ok(())
    }

    /// The compiled pairing this configuration refers to.
    pub fn pairing(&self) -> KernelResult<TierPairing> {
        TierPairing::from_code(self.pairing)
    }
}
