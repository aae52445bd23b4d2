//! Actor role enumeration.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Roles in the diocese → school → classroom hierarchy.
///
/// Roles are ordered by privilege level:
/// Superuser > DioceseAdmin > SchoolAdmin > Teacher > Parent > Student.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActorRole {
    /// Platform superuser with access to the god-mode console.
    Superuser,
    /// Administers all schools within a diocese.
    DioceseAdmin,
    /// Administers a single school.
    SchoolAdmin,
    /// Manages one or more classrooms of students.
    Teacher,
    /// Guardian account; the holder of any premium subscription.
    Parent,
    /// A child whose reading is tracked.
    Student,
}

impl ActorRole {
    /// Return the privilege level (higher = more privileged).
    pub fn privilege_level(&self) -> u8 {
        match self {
            Self::Superuser => 6,
            Self::DioceseAdmin => 5,
            Self::SchoolAdmin => 4,
            Self::Teacher => 3,
            Self::Parent => 2,
            Self::Student => 1,
        }
    }

    /// Check if this role has at least the given role's privileges.
    pub fn has_at_least(&self, other: &ActorRole) -> bool {
        self.privilege_level() >= other.privilege_level()
    }

    /// Check if this role administers a school or more.
    pub fn is_admin(&self) -> bool {
        self.has_at_least(&Self::SchoolAdmin)
    }

    /// Check if this role can hold a premium subscription.
    pub fn holds_subscription(&self) -> bool {
        matches!(self, Self::Parent)
    }

    /// Return the role as a snake_case string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Superuser => "superuser",
            Self::DioceseAdmin => "diocese_admin",
            Self::SchoolAdmin => "school_admin",
            Self::Teacher => "teacher",
            Self::Parent => "parent",
            Self::Student => "student",
        }
    }
}

impl fmt::Display for ActorRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for ActorRole {
    type Err = lectio_core::AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "superuser" => Ok(Self::Superuser),
            "diocese_admin" => Ok(Self::DioceseAdmin),
            "school_admin" => Ok(Self::SchoolAdmin),
            "teacher" => Ok(Self::Teacher),
            "parent" => Ok(Self::Parent),
            "student" => Ok(Self::Student),
            _ => Err(lectio_core::AppError::validation(format!(
                "Invalid actor role: '{s}'. Expected one of: superuser, diocese_admin, \
                 school_admin, teacher, parent, student"
            ))),
        }
    }
}
