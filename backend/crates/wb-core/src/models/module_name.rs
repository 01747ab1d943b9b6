use crate::{CoreError, CoreResult};

use std::fmt;
use std::panic::Location;
use std::str::FromStr;

use error_location::ErrorLocation;
use serde::{Deserialize, Serialize};

/// Product categories. Modules are seeded, one per variant.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum ModuleName {
    Workmanagement,
    #[serde(rename = "CRM")]
    Crm,
    Dev,
    Service,
}

impl ModuleName {
    pub const ALL: [ModuleName; 4] = [Self::Workmanagement, Self::Crm, Self::Dev, Self::Service];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Workmanagement => "Workmanagement",
            Self::Crm => "CRM",
            Self::Dev => "Dev",
            Self::Service => "Service",
        }
    }

    pub fn default_description(&self) -> &'static str {
        match self {
            Self::Workmanagement => "Plan and track everyday work",
            Self::Crm => "Manage leads, contacts and deals",
            Self::Dev => "Run sprints, tasks and bug tracking",
            Self::Service => "Handle tickets and incidents",
        }
    }
}

impl fmt::Display for ModuleName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ModuleName {
    type Err = CoreError;

    #[track_caller]
    fn from_str(s: &str) -> CoreResult<Self> {
        match s {
            "Workmanagement" => Ok(Self::Workmanagement),
            "CRM" => Ok(Self::Crm),
            "Dev" => Ok(Self::Dev),
            "Service" => Ok(Self::Service),
            _ => Err(CoreError::InvalidModuleName {
                value: s.to_string(),
                location: ErrorLocation::from(Location::caller()),
            }),
        }
    }
}
