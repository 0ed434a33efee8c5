use std::fmt;
use std::str::FromStr;

use campus_core::{bail_portal, PortalResult};
use serde::{Deserialize, Serialize};

/// Who is signed in. Each role has its own dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    Student,
    Parent,
    Teacher,
    SchoolAdmin,
    SuperAdmin,
}

impl Role {
    pub const ALL: [Role; 5] = [
        Role::Student,
        Role::Parent,
        Role::Teacher,
        Role::SchoolAdmin,
        Role::SuperAdmin,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Student => "student",
            Role::Parent => "parent",
            Role::Teacher => "teacher",
            Role::SchoolAdmin => "school_admin",
            Role::SuperAdmin => "super_admin",
        }
    }

    pub fn dashboard_path(&self) -> &'static str {
        match self {
            Role::Student => "/dashboard/student",
            Role::Parent => "/dashboard/parent",
            Role::Teacher => "/dashboard/teacher",
            Role::SchoolAdmin => "/dashboard/school-admin",
            Role::SuperAdmin => "/dashboard/super-admin",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> PortalResult<Self> {
        let normalized = s.trim().to_lowercase().replace('-', "_");
        if let Some(role) = Role::ALL.into_iter().find(|r| r.as_str() == normalized) {
            return Ok(role);
        }
        bail_portal!(bad_request, "Unknown role: {}", s);
    }
}
