//! Block ID generation for blockref
//!
//! ID format: `b` followed by 5 lowercase hex digits, e.g. `b3f9a1`.
//! Candidates come from the thread-local CSPRNG and are checked against the
//! identifiers already known to the caller. After a bounded number of
//! collisions a time-derived identifier is used instead.
//!
//! Uniqueness is only guaranteed against the set passed in (one file at
//! stamping time), never across the whole vault.

use std::collections::HashSet;
use std::time::{SystemTime, UNIX_EPOCH};

use rand::RngCore;
use serde::{Deserialize, Serialize};

/// Block identifier as embedded in Markdown (`^<id>`)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BlockId(String);

impl BlockId {
    /// Fixed leading letter of generated identifiers
    pub const PREFIX: char = 'b';

    /// Number of random hex digits after the prefix
    pub const HEX_LEN: usize = 5;

    /// Attempts before falling back to a time-derived identifier
    pub const MAX_ATTEMPTS: usize = 64;

    /// Length bounds accepted for a marker identifier
    pub const MIN_LEN: usize = 4;
    pub const MAX_LEN: usize = 12;

    /// Whether `id` has the shape of a block identifier
    pub fn is_valid(id: &str) -> bool {
        (Self::MIN_LEN..=Self::MAX_LEN).contains(&id.len())
            && id
                .chars()
                .all(|c| c.is_ascii_digit() || c.is_ascii_lowercase())
    }

    /// Normalize user input (`^ABC123`, `abc123`) into a lookup identifier
    pub fn normalize(input: &str) -> String {
        input.trim().trim_start_matches('^').to_lowercase()
    }

    /// Generate an identifier not present in `existing`
    pub fn generate(existing: &HashSet<String>) -> Self {
        Self::generate_with(existing, random_candidate)
    }

    /// Generate using a caller-supplied candidate source
    pub fn generate_with(
        existing: &HashSet<String>,
        mut next_candidate: impl FnMut() -> String,
    ) -> Self {
        for _ in 0..Self::MAX_ATTEMPTS {
            let candidate = next_candidate();
            if !existing.contains(&candidate) {
                return BlockId(candidate);
            }
        }

        let fallback = time_candidate();
        tracing::warn!(
            attempts = Self::MAX_ATTEMPTS,
            id = %fallback,
            "Random block ID space exhausted, using time-derived ID"
        );
        BlockId(fallback)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl std::fmt::Display for BlockId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for BlockId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

fn random_candidate() -> String {
    let mut bytes = [0u8; 3];
    rand::thread_rng().fill_bytes(&mut bytes);
    let hex = hex::encode(bytes);
    format!("{}{}", BlockId::PREFIX, &hex[..BlockId::HEX_LEN])
}

/// Prefix plus the low 44 bits of the current nanosecond clock, in hex
fn time_candidate() -> String {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos())
        .unwrap_or_default();
    let width = BlockId::MAX_LEN - 1;
    let masked = nanos & ((1u128 << (width * 4)) - 1);
    format!("{}{:0width$x}", BlockId::PREFIX, masked, width = width)
}
