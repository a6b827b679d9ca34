use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    Admin,
    Analyst,
}

impl UserRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            UserRole::Admin => "admin",
            UserRole::Analyst => "analyst",
        }
    }

    /// Parse a server role string. Unknown or missing roles map to `Analyst`.
    pub fn from_code_or_default(code: &str) -> Self {
        match code {
            "admin" => UserRole::Admin,
            _ => UserRole::Analyst,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_role_defaults_to_analyst() {
        assert_eq!(UserRole::from_code_or_default("admin"), UserRole::Admin);
        assert_eq!(UserRole::from_code_or_default("analyst"), UserRole::Analyst);
        assert_eq!(UserRole::from_code_or_default("owner"), UserRole::Analyst);
        assert_eq!(UserRole::from_code_or_default(""), UserRole::Analyst);
    }
}
