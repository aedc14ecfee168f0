//! Lawyer profile aggregate: the profile row, its owned child collections,
//! and the write payload with its normalization rules.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::records::{Funding, Report, Staff};
use crate::config::{REGISTRATION_IN_PROCESS, REGISTRATION_NOT_REGISTERED, REGISTRATION_REGISTERED};
use crate::types::lenient;

/// Profile row as stored.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct LawyerProfile {
    #[schema(example = 1)]
    pub lawyer_id: i32,
    pub user_id: Option<i32>,
    #[schema(example = "Haki Legal Aid Centre")]
    pub name: String,
    #[schema(example = "NGO")]
    pub provider_type: String,
    #[schema(example = "Registered with MoCLA")]
    pub registration_status: Option<String>,
    pub registration_year: Option<i32>,
    pub registration_number: Option<String>,
    pub registration_stage: Option<String>,
    pub process_more_than_21_days: Option<bool>,
    pub process_days: Option<i32>,
    pub registrar_responded_in_21_days: Option<bool>,
    pub respond_to_registrar_days: Option<i32>,
    pub license_status: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub website: Option<String>,
    pub mode_of_operation: Option<String>,
    pub verified: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct Location {
    pub location_id: i32,
    pub lawyer_id: i32,
    #[schema(example = "Dar es Salaam")]
    pub region: String,
    pub district: Option<String>,
    pub ward: Option<String>,
    pub village: Option<String>,
    pub street: Option<String>,
}

/// Area of law practiced by a profile, with its share of the caseload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct AreaShare {
    #[schema(example = "Family Law")]
    pub area_name: String,
    #[schema(example = 40)]
    pub case_percentage: Option<i32>,
}

/// Profile expanded with its collections.
///
/// `staff`, `funding` and `reports` are only present on the detail view.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct LawyerView {
    #[serde(flatten)]
    pub profile: LawyerProfile,
    pub locations: Vec<Location>,
    pub areas_of_law: Vec<AreaShare>,
    pub services: Vec<String>,
    pub target_clients: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub staff: Option<Vec<Staff>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub funding: Option<Vec<Funding>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reports: Option<Vec<Report>>,
}

/// The four collections a profile owns outright.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProfileCollections {
    pub locations: Vec<Location>,
    pub areas_of_law: Vec<AreaShare>,
    pub services: Vec<String>,
    pub target_clients: Vec<String>,
}

impl LawyerView {
    /// Summary view as returned by the listing.
    pub fn new(profile: LawyerProfile, collections: ProfileCollections) -> Self {
        Self {
            profile,
            locations: collections.locations,
            areas_of_law: collections.areas_of_law,
            services: collections.services,
            target_clients: collections.target_clients,
            staff: None,
            funding: None,
            reports: None,
        }
    }

    /// Attach the independently managed records for the detail view.
    pub fn with_records(mut self, staff: Vec<Staff>, funding: Vec<Funding>, reports: Vec<Report>) -> Self {
        self.staff = Some(staff);
        self.funding = Some(funding);
        self.reports = Some(reports);
        self
    }
}

/// Optional, AND-combined list filters. Blank values mean "no filter".
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct LawyerFilter {
    /// Case-insensitive substring of name or email
    #[serde(default, deserialize_with = "lenient::opt_text")]
    pub search: Option<String>,
    #[serde(default, deserialize_with = "lenient::opt_text")]
    pub region: Option<String>,
    #[serde(default, deserialize_with = "lenient::opt_text")]
    pub area_of_law: Option<String>,
    #[serde(default, deserialize_with = "lenient::opt_text")]
    pub service: Option<String>,
    #[serde(default, deserialize_with = "lenient::opt_text")]
    pub license_status: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, ToSchema)]
pub struct LocationInput {
    #[serde(default, deserialize_with = "lenient::opt_text")]
    pub region: Option<String>,
    #[serde(default, deserialize_with = "lenient::opt_text")]
    pub district: Option<String>,
    #[serde(default, deserialize_with = "lenient::opt_text")]
    pub ward: Option<String>,
    #[serde(default, deserialize_with = "lenient::opt_text")]
    pub village: Option<String>,
    #[serde(default, deserialize_with = "lenient::opt_text")]
    pub street: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, ToSchema)]
pub struct AreaShareInput {
    #[serde(default, deserialize_with = "lenient::opt_text")]
    pub area_name: Option<String>,
    #[serde(default, deserialize_with = "lenient::opt_i32")]
    pub case_percentage: Option<i32>,
}

/// Create/update body for a lawyer profile.
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct ProfilePayload {
    #[serde(default, deserialize_with = "lenient::opt_text")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "lenient::opt_text")]
    pub provider_type: Option<String>,
    /// Free-text provider type; replaces `provider_type` when set
    #[serde(default, deserialize_with = "lenient::opt_text")]
    pub provider_type_other: Option<String>,
    #[serde(default, deserialize_with = "lenient::opt_text")]
    pub registration_status: Option<String>,
    #[serde(default, deserialize_with = "lenient::opt_i32")]
    pub registration_year: Option<i32>,
    #[serde(default, deserialize_with = "lenient::opt_text")]
    pub registration_number: Option<String>,
    #[serde(default, deserialize_with = "lenient::opt_text")]
    pub registration_stage: Option<String>,
    #[serde(default, deserialize_with = "lenient::opt_bool")]
    pub process_more_than_21_days: Option<bool>,
    #[serde(default, deserialize_with = "lenient::opt_i32")]
    pub process_days: Option<i32>,
    #[serde(default, deserialize_with = "lenient::opt_bool")]
    pub registrar_responded_in_21_days: Option<bool>,
    #[serde(default, deserialize_with = "lenient::opt_i32")]
    pub respond_to_registrar_days: Option<i32>,
    #[serde(default, deserialize_with = "lenient::opt_text")]
    pub license_status: Option<String>,
    #[serde(default, deserialize_with = "lenient::opt_text")]
    pub phone: Option<String>,
    #[serde(default, deserialize_with = "lenient::opt_text")]
    pub email: Option<String>,
    #[serde(default, deserialize_with = "lenient::opt_text")]
    pub website: Option<String>,
    #[serde(default, deserialize_with = "lenient::opt_text")]
    pub mode_of_operation: Option<String>,
    #[serde(default, deserialize_with = "lenient::opt_bool")]
    pub verified: Option<bool>,
    /// Login for a linked LAWYER account (create only)
    #[serde(default, deserialize_with = "lenient::opt_text")]
    pub username: Option<String>,
    #[serde(default, deserialize_with = "lenient::opt_text")]
    pub password: Option<String>,
    /// History entry text; defaults to "Profile created"/"Profile updated"
    #[serde(default, deserialize_with = "lenient::opt_text")]
    pub update_description: Option<String>,
    #[serde(default)]
    pub locations: Option<Vec<LocationInput>>,
    #[serde(default)]
    pub areas_of_law: Option<Vec<AreaShareInput>>,
    #[serde(default)]
    pub services: Option<Vec<String>>,
    #[serde(default)]
    pub target_clients: Option<Vec<String>>,
}

/// Normalized scalar columns of a profile write.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProfileFields {
    pub name: Option<String>,
    pub provider_type: Option<String>,
    pub registration_status: Option<String>,
    pub registration_year: Option<i32>,
    pub registration_number: Option<String>,
    pub registration_stage: Option<String>,
    pub process_more_than_21_days: Option<bool>,
    pub process_days: Option<i32>,
    pub registrar_responded_in_21_days: Option<bool>,
    pub respond_to_registrar_days: Option<i32>,
    pub license_status: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub website: Option<String>,
    pub mode_of_operation: Option<String>,
    pub verified: bool,
}

impl ProfileFields {
    /// True when both required columns are present.
    pub fn has_required(&self) -> bool {
        self.name.is_some() && self.provider_type.is_some()
    }

    fn normalize_registration(&mut self) {
        match self.registration_status.as_deref() {
            Some(REGISTRATION_REGISTERED) => {
                self.registration_stage = None;
                self.process_more_than_21_days = None;
                self.process_days = None;
                self.registrar_responded_in_21_days = None;
                self.respond_to_registrar_days = None;
            }
            Some(REGISTRATION_IN_PROCESS) => {
                self.registration_year = None;
                self.registration_number = None;
            }
            Some(REGISTRATION_NOT_REGISTERED) => {
                self.registration_year = None;
                self.registration_number = None;
                self.registration_stage = None;
                self.process_more_than_21_days = None;
                self.process_days = None;
                self.registrar_responded_in_21_days = None;
                self.respond_to_registrar_days = None;
            }
            _ => {}
        }
    }
}

/// Replacement sets for the owned collections, already cleaned:
/// locations without a region and blank names are dropped, duplicates collapsed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChildSets {
    pub locations: Vec<LocationInput>,
    pub areas_of_law: Vec<AreaShareInput>,
    pub services: Vec<String>,
    pub target_clients: Vec<String>,
}

/// Credentials for the optional linked account.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewAccount {
    pub username: String,
    pub password: String,
}

/// A payload split into the pieces the write transaction consumes.
#[derive(Debug, Clone)]
pub struct ProfileParts {
    pub fields: ProfileFields,
    pub children: ChildSets,
    pub account: Option<NewAccount>,
    pub description: Option<String>,
}

impl ProfilePayload {
    pub fn into_parts(self) -> ProfileParts {
        let provider_type = self.provider_type_other.or(self.provider_type);

        let mut fields = ProfileFields {
            name: self.name,
            provider_type,
            registration_status: self.registration_status,
            registration_year: self.registration_year,
            registration_number: self.registration_number,
            registration_stage: self.registration_stage,
            process_more_than_21_days: self.process_more_than_21_days,
            process_days: self.process_days,
            registrar_responded_in_21_days: self.registrar_responded_in_21_days,
            respond_to_registrar_days: self.respond_to_registrar_days,
            license_status: self.license_status,
            phone: self.phone,
            email: self.email,
            website: self.website,
            mode_of_operation: self.mode_of_operation,
            verified: self.verified.unwrap_or(false),
        };
        fields.normalize_registration();

        let locations = self
            .locations
            .unwrap_or_default()
            .into_iter()
            .filter(|loc| loc.region.is_some())
            .collect();

        let mut areas_of_law: Vec<AreaShareInput> = Vec::new();
        for area in self.areas_of_law.unwrap_or_default() {
            let duplicate = areas_of_law.iter().any(|a| a.area_name == area.area_name);
            if area.area_name.is_some() && !duplicate {
                areas_of_law.push(area);
            }
        }

        let account = match (self.username, self.password) {
            (Some(username), Some(password)) => Some(NewAccount { username, password }),
            _ => None,
        };

        ProfileParts {
            fields,
            children: ChildSets {
                locations,
                areas_of_law,
                services: distinct_names(self.services.unwrap_or_default()),
                target_clients: distinct_names(self.target_clients.unwrap_or_default()),
            },
            account,
            description: self.update_description,
        }
    }
}

fn distinct_names(names: Vec<String>) -> Vec<String> {
    let mut out: Vec<String> = Vec::with_capacity(names.len());
    for name in names {
        if !name.trim().is_empty() && !out.contains(&name) {
            out.push(name);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn payload(json: serde_json::Value) -> ProfilePayload {
        serde_json::from_value(json).unwrap()
    }

    #[test]
    fn test_blank_strings_become_none() {
        let parts = payload(serde_json::json!({
            "name": "Haki Centre",
            "provider_type": "NGO",
            "phone": "",
            "email": "  ",
            "verified": "1"
        }))
        .into_parts();

        assert_eq!(parts.fields.phone, None);
        assert_eq!(parts.fields.email, None);
        assert!(parts.fields.verified);
        assert!(parts.fields.has_required());
    }

    #[test]
    fn test_provider_type_other_wins() {
        let parts = payload(serde_json::json!({
            "name": "X",
            "provider_type": "Other",
            "provider_type_other": "Faith-based organisation"
        }))
        .into_parts();

        assert_eq!(
            parts.fields.provider_type.as_deref(),
            Some("Faith-based organisation")
        );
    }

    #[test]
    fn test_registered_clears_in_process_fields() {
        let parts = payload(serde_json::json!({
            "registration_status": "Registered with MoCLA",
            "registration_year": "2019",
            "registration_number": "MoCLA/123",
            "registration_stage": "Submitted",
            "process_days": 30
        }))
        .into_parts();

        assert_eq!(parts.fields.registration_year, Some(2019));
        assert_eq!(parts.fields.registration_number.as_deref(), Some("MoCLA/123"));
        assert_eq!(parts.fields.registration_stage, None);
        assert_eq!(parts.fields.process_days, None);
    }

    #[test]
    fn test_in_process_clears_year_and_number() {
        let parts = payload(serde_json::json!({
            "registration_status": "In Process",
            "registration_year": 2020,
            "registration_number": "N-1",
            "process_more_than_21_days": true,
            "process_days": 45
        }))
        .into_parts();

        assert_eq!(parts.fields.registration_year, None);
        assert_eq!(parts.fields.registration_number, None);
        assert_eq!(parts.fields.process_more_than_21_days, Some(true));
        assert_eq!(parts.fields.process_days, Some(45));
    }

    #[test]
    fn test_not_registered_clears_everything() {
        let parts = payload(serde_json::json!({
            "registration_status": "Not Registered",
            "registration_year": 2020,
            "registration_stage": "Waiting",
            "respond_to_registrar_days": 3
        }))
        .into_parts();

        let fields = parts.fields;
        assert_eq!(fields.registration_year, None);
        assert_eq!(fields.registration_stage, None);
        assert_eq!(fields.respond_to_registrar_days, None);
    }

    #[test]
    fn test_children_are_cleaned() {
        let parts = payload(serde_json::json!({
            "locations": [{"region": "Arusha"}, {"district": "No region"}],
            "areas_of_law": [
                {"area_name": "Family Law", "case_percentage": "40"},
                {"area_name": "Family Law", "case_percentage": 10},
                {"case_percentage": 5}
            ],
            "services": ["Mediation/ADR", "", "Mediation/ADR", "Legal Education"],
            "target_clients": ["Women"]
        }))
        .into_parts();

        assert_eq!(parts.children.locations.len(), 1);
        assert_eq!(parts.children.areas_of_law.len(), 1);
        assert_eq!(parts.children.areas_of_law[0].case_percentage, Some(40));
        assert_eq!(parts.children.services, vec!["Mediation/ADR", "Legal Education"]);
        assert_eq!(parts.children.target_clients, vec!["Women"]);
    }

    #[test]
    fn test_account_requires_username_and_password() {
        let parts = payload(serde_json::json!({"username": "haki", "password": ""})).into_parts();
        assert!(parts.account.is_none());

        let parts =
            payload(serde_json::json!({"username": "haki", "password": "pw"})).into_parts();
        assert_eq!(
            parts.account,
            Some(NewAccount {
                username: "haki".into(),
                password: "pw".into()
            })
        );
    }
}
