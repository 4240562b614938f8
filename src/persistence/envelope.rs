//! Versioned save envelope
//!
//! On disk a save looks like:
//!
//! ```json
//! { "version": 1, "session": { "min": 1, "max": 10, "target": 7 } }
//! ```

use serde::{Deserialize, Serialize};

use crate::consts::SAVE_VERSION;
use crate::error::GameError;
use crate::game::GameSession;

/// Minimal serialized form of a session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SaveRecord {
    pub min: i32,
    pub max: i32,
    pub target: i32,
}

impl SaveRecord {
    pub fn from_session(session: &GameSession) -> Self {
        Self {
            min: session.min(),
            max: session.max(),
            target: session.target(),
        }
    }

    /// Sanity check applied before a loaded record may replace the active session
    pub fn validate(&self) -> Result<(), GameError> {
        if self.min <= 0 || self.max <= 0 {
            return Err(GameError::CorruptedSave(format!(
                "bounds must be positive (min {}, max {})",
                self.min, self.max
            )));
        }
        if self.min >= self.max {
            return Err(GameError::CorruptedSave(format!(
                "min {} is not below max {}",
                self.min, self.max
            )));
        }
        if self.target < self.min || self.target > self.max {
            return Err(GameError::CorruptedSave(format!(
                "target {} outside {}..={}",
                self.target, self.min, self.max
            )));
        }
        Ok(())
    }
}

/// Wrapper carrying the format version alongside the record
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SaveEnvelope {
    pub version: u32,
    pub session: SaveRecord,
}

/// Serialize a session into a save blob. Refuses anything `decode` would reject.
pub fn encode(session: &GameSession) -> Result<Vec<u8>, GameError> {
    let record = SaveRecord::from_session(session);
    record.validate().map_err(|e| match e {
        GameError::CorruptedSave(reason) => GameError::Unsaveable(reason),
        other => other,
    })?;

    let envelope = SaveEnvelope {
        version: SAVE_VERSION,
        session: record,
    };
    serde_json::to_vec_pretty(&envelope).map_err(GameError::Encode)
}

/// Parse and validate a save blob
pub fn decode(bytes: &[u8]) -> Result<GameSession, GameError> {
    let envelope: SaveEnvelope = serde_json::from_slice(bytes)
        .map_err(|e| GameError::CorruptedSave(format!("malformed save: {}", e)))?;

    if envelope.version != SAVE_VERSION {
        return Err(GameError::CorruptedSave(format!(
            "unsupported save version {}",
            envelope.version
        )));
    }

    let record = envelope.session;
    record.validate()?;
    Ok(GameSession::from_parts(record.min, record.max, record.target))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::FixedRandom;

    #[test]
    fn test_encode_layout() {
        let session = GameSession::create(1, 10, &mut FixedRandom::new(7)).unwrap();
        let bytes = encode(&session).unwrap();
        let value: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(value["version"], 1);
        assert_eq!(value["session"]["min"], 1);
        assert_eq!(value["session"]["max"], 10);
        assert_eq!(value["session"]["target"], 7);
    }

    #[test]
    fn test_encode_refuses_non_positive_bounds() {
        let session = GameSession::create(-5, 5, &mut FixedRandom::new(0)).unwrap();
        assert!(matches!(encode(&session), Err(GameError::Unsaveable(_))));
    }

    #[test]
    fn test_decode_rejects_garbage() {
        let err = decode(b"not json at all").unwrap_err();
        assert!(matches!(err, GameError::CorruptedSave(_)));
    }

    #[test]
    fn test_decode_rejects_missing_field() {
        let err = decode(br#"{"version":1,"session":{"min":1,"max":10}}"#).unwrap_err();
        assert!(matches!(err, GameError::CorruptedSave(_)));
    }

    #[test]
    fn test_decode_rejects_unknown_version() {
        let err = decode(br#"{"version":99,"session":{"min":1,"max":10,"target":3}}"#)
            .unwrap_err();
        assert!(matches!(err, GameError::CorruptedSave(_)));
    }

    #[test]
    fn test_validate_non_positive_bounds() {
        let record = SaveRecord {
            min: 0,
            max: 10,
            target: 5,
        };
        assert!(record.validate().is_err());

        let record = SaveRecord {
            min: -5,
            max: -1,
            target: -3,
        };
        assert!(record.validate().is_err());
    }

    #[test]
    fn test_validate_inverted_bounds() {
        let record = SaveRecord {
            min: 10,
            max: 1,
            target: 5,
        };
        assert!(record.validate().is_err());
    }

    #[test]
    fn test_validate_target_out_of_range() {
        let record = SaveRecord {
            min: 1,
            max: 10,
            target: 11,
        };
        assert!(record.validate().is_err());
    }

    #[test]
    fn test_decode_valid() {
        let session = decode(br#"{"version":1,"session":{"min":3,"max":30,"target":12}}"#)
            .unwrap();
        assert_eq!(session.min(), 3);
        assert_eq!(session.max(), 30);
        assert_eq!(session.target(), 12);
    }
}
