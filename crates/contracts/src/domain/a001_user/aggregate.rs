use crate::domain::common::aggregate_id::parse_numeric_id;
use crate::domain::common::AggregateId;
use serde::{Deserialize, Serialize};

// ============================================================================
// ID Type
// ============================================================================

/// Уникальный идентификатор пользователя
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct UserId(pub u32);

impl UserId {
    pub fn new(value: u32) -> Self {
        Self(value)
    }

    pub fn value(&self) -> u32 {
        self.0
    }
}

impl AggregateId for UserId {
    fn as_string(&self) -> String {
        self.0.to_string()
    }

    fn from_string(s: &str) -> Result<Self, String> {
        parse_numeric_id(s).map(UserId::new)
    }
}

// ============================================================================
// Sex
// ============================================================================

/// Пол пользователя (в исходных данных: "m" / "f")
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Sex {
    #[serde(rename = "m")]
    Male,
    #[serde(rename = "f")]
    Female,
}

impl Sex {
    pub fn code(&self) -> &'static str {
        match self {
            Sex::Male => "m",
            Sex::Female => "f",
        }
    }

    pub fn is_male(&self) -> bool {
        matches!(self, Sex::Male)
    }
}

// ============================================================================
// Aggregate Root
// ============================================================================

/// Пользователь, владелец категорий
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: UserId,
    pub name: String,
    pub sex: Sex,
}

impl User {
    pub fn new(id: u32, name: impl Into<String>, sex: Sex) -> Self {
        Self {
            id: UserId::new(id),
            name: name.into(),
            sex,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_deserialize() {
        let user: User = serde_json::from_str(r#"{"id": 2, "name": "Anna", "sex": "f"}"#).unwrap();
        assert_eq!(user, User::new(2, "Anna", Sex::Female));
        assert!(!user.sex.is_male());
    }

    #[test]
    fn test_unknown_sex_is_rejected() {
        let result = serde_json::from_str::<User>(r#"{"id": 1, "name": "X", "sex": "x"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_user_id_roundtrip() {
        let id = UserId::from_string("3").unwrap();
        assert_eq!(id.value(), 3);
        assert_eq!(id.as_string(), "3");
        assert!(UserId::from_string("three").is_err());
    }
}
