//! Lookup reference data used to populate selectors and to resolve join rows.

use serde::Serialize;
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct AreaOfLaw {
    pub area_id: i32,
    pub area_name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct ServiceEntry {
    pub service_id: i32,
    pub service_name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct TargetClient {
    pub client_id: i32,
    pub client_type: String,
}

/// All three lookup tables, each ordered by display name.
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct LookupTables {
    pub areas_of_law: Vec<AreaOfLaw>,
    pub services: Vec<ServiceEntry>,
    pub target_clients: Vec<TargetClient>,
}
