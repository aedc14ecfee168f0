//! Records owned by a profile but managed independently: staff, funding
//! and compliance reports.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::types::lenient;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct Staff {
    pub staff_id: i32,
    pub lawyer_id: i32,
    #[schema(example = "Asha Mwinyi")]
    pub name: String,
    #[schema(example = "Advocate")]
    pub role: Option<String>,
    pub gender: Option<String>,
    pub age: Option<i32>,
    pub education_level: Option<String>,
    pub specialization: Option<String>,
    pub years_of_practice: Option<i32>,
    pub practicing_certificate_status: Option<String>,
}

/// Create/update body for a staff member. `staff_id` is required on update.
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct StaffPayload {
    #[serde(default, deserialize_with = "lenient::opt_i32")]
    pub staff_id: Option<i32>,
    #[serde(default, deserialize_with = "lenient::opt_i32")]
    pub lawyer_id: Option<i32>,
    #[serde(default, deserialize_with = "lenient::opt_text")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "lenient::opt_text")]
    pub role: Option<String>,
    #[serde(default, deserialize_with = "lenient::opt_text")]
    pub gender: Option<String>,
    #[serde(default, deserialize_with = "lenient::opt_i32")]
    pub age: Option<i32>,
    #[serde(default, deserialize_with = "lenient::opt_text")]
    pub education_level: Option<String>,
    #[serde(default, deserialize_with = "lenient::opt_text")]
    pub specialization: Option<String>,
    #[serde(default, deserialize_with = "lenient::opt_i32")]
    pub years_of_practice: Option<i32>,
    #[serde(default, deserialize_with = "lenient::opt_text")]
    pub practicing_certificate_status: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct Funding {
    pub funding_id: i32,
    pub lawyer_id: i32,
    #[schema(example = "Legal Services Facility")]
    pub funding_source: Option<String>,
    #[schema(example = 25000.0)]
    pub amount: Option<f64>,
    #[schema(example = "Adequate")]
    pub adequacy: Option<String>,
    pub year: Option<i32>,
    /// Owning profile name, only present on the unfiltered listing
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lawyer_name: Option<String>,
}

/// Create/update body for a funding record. `funding_id` is required on update.
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct FundingPayload {
    #[serde(default, deserialize_with = "lenient::opt_i32")]
    pub funding_id: Option<i32>,
    #[serde(default, deserialize_with = "lenient::opt_i32")]
    pub lawyer_id: Option<i32>,
    #[serde(default, deserialize_with = "lenient::opt_text")]
    pub funding_source: Option<String>,
    #[serde(default, deserialize_with = "lenient::opt_f64")]
    pub amount: Option<f64>,
    #[serde(default, deserialize_with = "lenient::opt_text")]
    pub adequacy: Option<String>,
    #[serde(default, deserialize_with = "lenient::opt_i32")]
    pub year: Option<i32>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct Report {
    pub report_id: i32,
    pub lawyer_id: i32,
    #[schema(example = "Quarterly")]
    pub reporting_frequency: Option<String>,
    pub authority: Option<String>,
    pub last_submitted: Option<NaiveDate>,
}
