// src/model/family.rs
use serde::{Deserialize, Serialize};

/// Surname-keyed aggregate, recomputed from the person set on every build.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Family {
    pub surname: String,
    /// Other spellings (case variants included) seen under the same key.
    #[serde(default)]
    pub alternate_spellings: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub origin: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub origin_country: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub migration_history: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default)]
    pub member_ids: Vec<String>,
    #[serde(default)]
    pub statistics: FamilyStatistics,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FamilyStatistics {
    pub total_members: usize,
    pub generations: usize,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub oldest_member: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub youngest_member: Option<String>,
}

impl Family {
    /// Case-insensitive surname comparison.
    #[must_use]
    pub fn matches_surname(&self, surname: &str) -> bool {
        self.surname.to_lowercase() == surname.trim().to_lowercase()
    }
}
