//! Administrator profile slice.

use serde::{Deserialize, Serialize};

/// Contact card shown for the administrator, replaced wholesale on update.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdminProfile {
    /// Display name.
    pub name: String,
    /// Contact email.
    pub email: String,
    /// Contact phone number.
    pub phone: String,
    /// Department the administrator belongs to.
    pub department: String,
}

impl Default for AdminProfile {
    fn default() -> Self {
        Self {
            name: "Admin User".to_owned(),
            email: "admin@sits.edu.in".to_owned(),
            phone: "+91 8734 290 290".to_owned(),
            department: "Administration".to_owned(),
        }
    }
}

#[cfg(test)]
mod tests {
    //! Regression coverage for this module.
    use super::*;

    #[test]
    fn default_profile_matches_the_seeded_administrator() {
        let profile = AdminProfile::default();
        assert_eq!(profile.email, "admin@sits.edu.in");
        assert_eq!(profile.department, "Administration");
    }

    #[test]
    fn profile_round_trips_through_serde() {
        let profile = AdminProfile::default();
        let json = serde_json::to_string(&profile).expect("profile serialises");
        let restored: AdminProfile = serde_json::from_str(&json).expect("profile deserialises");
        assert_eq!(restored, profile);
    }
}
