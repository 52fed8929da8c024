//! Fixed copy shown on the dashboard.

pub const BRAND: &str = "VitaCore CMS";
pub const HEADING: &str = "Dashboard";
pub const TAGLINE: &str = "Welcome to VitaCore CMS - Cannabis Cultivation Management System";

pub const ROLES_TITLE: &str = "Your Role(s)";

/// A stat card that does not depend on the user.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StaticStat {
    pub title: &'static str,
    pub value: &'static str,
    pub caption: &'static str,
}

pub const MODULES_STAT: StaticStat = StaticStat {
    title: "System Modules",
    value: "5",
    caption: "Core cultivation modules",
};

pub const CONFIGURATION_STAT: StaticStat = StaticStat {
    title: "Configuration",
    value: "Ready",
    caption: "System configured",
};

pub const GETTING_STARTED_TITLE: &str = "Getting Started";
pub const GETTING_STARTED_DESCRIPTION: &str =
    "Phase 1 - Foundation & Administration is now complete";

pub const COMPLETED_TITLE: &str = "Completed Features";
pub const COMPLETED_FEATURES: &[&str] = &[
    "User authentication (login/signup)",
    "Role-based access control with 7 user roles",
    "User management for administrators",
    "Dynamic lookup tables management",
    "Secure database with Row Level Security",
];

pub const COMING_NEXT_TITLE: &str = "Coming Next";
pub const COMING_NEXT: &[&str] = &[
    "Module 1: Batch & Plant Lifecycle Management",
    "Module 2: Cultivation Operations & Compliance",
    "Module 3: IPM & Chemical Management",
    "Module 4: Hygiene & Sanitation Protocols",
    "Module 5: Harvest & Post-Processing",
];
