//! Snapshot encoding for the persistence boundary.
//!
//! The core performs no I/O. External storage hands bytes in and out; this
//! module converts a [`PlayerSimulationState`] to and from a checksummed
//! binary frame (magic, payload length, bincode payload, SHA-256) or a
//! plain JSON document. Round-trips reproduce an identical state.

use sha2::{Digest, Sha256};
use thiserror::Error;

use crate::player::PlayerSimulationState;

/// Frame magic, bumped on incompatible layout changes.
pub const SNAPSHOT_MAGIC: u64 = 0x444C_5645_5633_0001;

const MAGIC_LEN: usize = 8;
const LEN_FIELD: usize = 4;
const CHECKSUM_LEN: usize = 32;

#[derive(Debug, Error)]
pub enum SnapshotError {
    #[error("snapshot truncated: {0} bytes")]
    TooShort(usize),
    #[error("bad snapshot magic: expected {expected:#018x}, got {found:#018x}")]
    BadMagic { expected: u64, found: u64 },
    #[error("snapshot length field disagrees with payload size")]
    LengthMismatch,
    #[error("snapshot checksum mismatch")]
    ChecksumMismatch,
    #[error("snapshot payload corrupt: {0}")]
    Corrupt(#[from] bincode::Error),
    #[error("json snapshot invalid: {0}")]
    Json(#[from] serde_json::Error),
}

/// Encodes a state into the checksummed binary frame.
pub fn encode(state: &PlayerSimulationState) -> Result<Vec<u8>, SnapshotError> {
    let payload = bincode::serialize(state)?;
    let payload_len = payload.len() as u32;

    let mut hasher = Sha256::new();
    hasher.update(SNAPSHOT_MAGIC.to_le_bytes());
    hasher.update(payload_len.to_le_bytes());
    hasher.update(&payload);
    let checksum = hasher.finalize();

    let mut out = Vec::with_capacity(MAGIC_LEN + LEN_FIELD + payload.len() + CHECKSUM_LEN);
    out.extend_from_slice(&SNAPSHOT_MAGIC.to_le_bytes());
    out.extend_from_slice(&payload_len.to_le_bytes());
    out.extend_from_slice(&payload);
    out.extend_from_slice(&checksum);
    Ok(out)
}

/// Decodes a binary frame, verifying magic and checksum before touching
/// the payload.
pub fn decode(bytes: &[u8]) -> Result<PlayerSimulationState, SnapshotError> {
    if bytes.len() < MAGIC_LEN + LEN_FIELD + CHECKSUM_LEN {
        return Err(SnapshotError::TooShort(bytes.len()));
    }

    let magic = u64::from_le_bytes(bytes[..MAGIC_LEN].try_into().unwrap());
    if magic != SNAPSHOT_MAGIC {
        return Err(SnapshotError::BadMagic {
            expected: SNAPSHOT_MAGIC,
            found: magic,
        });
    }

    let payload_len =
        u32::from_le_bytes(bytes[MAGIC_LEN..MAGIC_LEN + LEN_FIELD].try_into().unwrap()) as usize;
    let payload_start = MAGIC_LEN + LEN_FIELD;
    if bytes.len() != payload_start + payload_len + CHECKSUM_LEN {
        return Err(SnapshotError::LengthMismatch);
    }

    let payload = &bytes[payload_start..payload_start + payload_len];
    let stored_checksum = &bytes[payload_start + payload_len..];

    let mut hasher = Sha256::new();
    hasher.update(magic.to_le_bytes());
    hasher.update((payload_len as u32).to_le_bytes());
    hasher.update(payload);
    let computed = hasher.finalize();
    if computed.as_slice() != stored_checksum {
        return Err(SnapshotError::ChecksumMismatch);
    }

    Ok(bincode::deserialize(payload)?)
}

/// JSON snapshot for document stores.
pub fn to_json(state: &PlayerSimulationState) -> Result<String, SnapshotError> {
    Ok(serde_json::to_string(state)?)
}

pub fn from_json(json: &str) -> Result<PlayerSimulationState, SnapshotError> {
    Ok(serde_json::from_str(json)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::{Clock, FixedClock};
    use crate::economy::Currency;
    use crate::effects::{EffectCatalog, EffectEngine};
    use crate::inventory::{ItemCategory, ItemDescriptor};

    fn populated_state() -> PlayerSimulationState {
        let catalog = EffectCatalog::builtin();
        let clock = FixedClock(777);
        let engine = EffectEngine::new(&catalog, &clock);

        let mut state = PlayerSimulationState::new(clock.now());
        state.add_currency(Currency::Gold, 12_345);
        state.add_currency(Currency::Dng, 9);
        state.add_item(&ItemDescriptor::new("iron axe", ItemCategory::Weapon), 1);
        state.add_item(&ItemDescriptor::new("potion", ItemCategory::Consumable), 4);
        state.add_item(&ItemDescriptor::new("key", ItemCategory::Key), 2);
        state.advance_floor();
        state.record_exploration();
        state.apply_effect(&engine, "poisoned", None);
        state.apply_effect(&engine, "vampiric", None);
        state
    }

    #[test]
    fn test_binary_round_trip_is_identical() {
        let state = populated_state();
        let bytes = encode(&state).unwrap();
        let loaded = decode(&bytes).unwrap();
        assert_eq!(loaded, state);
    }

    #[test]
    fn test_json_round_trip_is_identical() {
        let state = populated_state();
        let json = to_json(&state).unwrap();
        let loaded = from_json(&json).unwrap();
        assert_eq!(loaded, state);
    }

    #[test]
    fn test_decode_rejects_truncated_input() {
        let err = decode(&[0u8; 10]).unwrap_err();
        assert!(matches!(err, SnapshotError::TooShort(10)));
    }

    #[test]
    fn test_decode_rejects_bad_magic() {
        let mut bytes = encode(&populated_state()).unwrap();
        bytes[0] ^= 0xFF;
        let err = decode(&bytes).unwrap_err();
        assert!(matches!(err, SnapshotError::BadMagic { .. }));
    }

    #[test]
    fn test_decode_rejects_flipped_payload_byte() {
        let mut bytes = encode(&populated_state()).unwrap();
        let mid = bytes.len() / 2;
        bytes[mid] ^= 0xFF;
        let err = decode(&bytes).unwrap_err();
        assert!(matches!(err, SnapshotError::ChecksumMismatch));
    }

    #[test]
    fn test_decode_rejects_truncated_payload() {
        let mut bytes = encode(&populated_state()).unwrap();
        bytes.truncate(bytes.len() - 1);
        let err = decode(&bytes).unwrap_err();
        assert!(matches!(err, SnapshotError::LengthMismatch));
    }

    #[test]
    fn test_json_snapshot_without_optional_sections_loads() {
        // Snapshots written before the ledger/inventory/effects sections
        // existed must load with defaults, as with old save files.
        let minimal = serde_json::json!({
            "id": "abc-123",
            "created_at": 5,
            "health": 80,
            "max_health": 100,
            "mana": 10,
            "max_mana": 50
        });
        let loaded = from_json(&minimal.to_string()).unwrap();
        assert_eq!(loaded.health, 80);
        assert_eq!(loaded.ledger.gold, 0);
        assert!(loaded.inventory.weapons.is_empty());
        assert!(loaded.effects.is_empty());
        assert_eq!(loaded.progression.floor, 0);
    }
}
