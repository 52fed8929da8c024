use serde::{Deserialize, Serialize};

/// Text shown when a user has no role that can be labelled.
pub const NO_ROLES_LABEL: &str = "No roles assigned";

/// Cultivation staff role.
///
/// The backend stores roles as plain code strings; only these seven codes
/// have display labels.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub enum RoleCode {
    AssistantGrower,
    Grower,
    Manager,
    Qa,
    Supervisor,
    ItAdmin,
    BusinessAdmin,
}

impl RoleCode {
    /// Parse a stored role code. Matching is exact; unknown codes yield `None`.
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "assistant_grower" => Some(RoleCode::AssistantGrower),
            "grower" => Some(RoleCode::Grower),
            "manager" => Some(RoleCode::Manager),
            "qa" => Some(RoleCode::Qa),
            "supervisor" => Some(RoleCode::Supervisor),
            "it_admin" => Some(RoleCode::ItAdmin),
            "business_admin" => Some(RoleCode::BusinessAdmin),
            _ => None,
        }
    }

    /// Code string as stored by the backend.
    pub fn as_str(&self) -> &'static str {
        match self {
            RoleCode::AssistantGrower => "assistant_grower",
            RoleCode::Grower => "grower",
            RoleCode::Manager => "manager",
            RoleCode::Qa => "qa",
            RoleCode::Supervisor => "supervisor",
            RoleCode::ItAdmin => "it_admin",
            RoleCode::BusinessAdmin => "business_admin",
        }
    }

    /// Human-readable name for display in UI.
    pub fn label(&self) -> &'static str {
        match self {
            RoleCode::AssistantGrower => "Assistant Grower",
            RoleCode::Grower => "Grower",
            RoleCode::Manager => "Manager",
            RoleCode::Qa => "QA",
            RoleCode::Supervisor => "Supervisor",
            RoleCode::ItAdmin => "IT Admin",
            RoleCode::BusinessAdmin => "Business Admin",
        }
    }
}

/// Known roles among `codes`, in input order. Unknown codes are skipped.
pub fn known_roles(codes: &[String]) -> Vec<RoleCode> {
    codes.iter().filter_map(|c| RoleCode::from_code(c)).collect()
}

/// Comma-joined labels for `codes`, preserving input order.
///
/// Unknown codes are skipped. Absent input, empty input, or input with no
/// known code yields [`NO_ROLES_LABEL`].
pub fn role_labels(codes: Option<&[String]>) -> String {
    let labels: Vec<&'static str> = codes
        .map(known_roles)
        .unwrap_or_default()
        .iter()
        .map(RoleCode::label)
        .collect();

    if labels.is_empty() {
        NO_ROLES_LABEL.to_string()
    } else {
        labels.join(", ")
    }
}
