use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Identifier of a registered account.
/// Carried as the subject of issued bearer tokens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct UserId(Uuid);

impl UserId {
    /// Generates a fresh random identifier.
    pub fn generate() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn as_uuid(&self) -> Uuid {
        self.0
    }
}

impl std::fmt::Display for UserId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<Uuid> for UserId {
    fn from(id: Uuid) -> Self {
        Self(id)
    }
}

impl std::str::FromStr for UserId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Uuid::parse_str(s).map(Self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_generate_distinct_user_ids() {
        let first = UserId::generate();
        let second = UserId::generate();

        assert_ne!(first, second);
    }

    #[test]
    fn should_display_user_id_as_hyphenated_uuid() {
        let uuid = Uuid::new_v4();
        let user_id = UserId::from(uuid);

        assert_eq!(format!("{}", user_id), uuid.to_string());
    }

    #[test]
    fn should_parse_user_id_from_string() {
        let uuid = Uuid::new_v4();
        let parsed: UserId = uuid.to_string().parse().unwrap();

        assert_eq!(parsed.as_uuid(), uuid);
    }

    #[test]
    fn should_reject_malformed_user_id() {
        let parsed = "not-a-uuid".parse::<UserId>();

        assert!(parsed.is_err());
    }
}
