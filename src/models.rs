use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Which fixed set of strings the text routes answer with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Variant {
    #[default]
    Classic,
    Eks,
}

/// The three bodies served by `/`, `/version` and `/health-simple`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Responses {
    pub greeting: &'static str,
    pub version: &'static str,
    pub health: &'static str,
}

const CLASSIC: Responses = Responses {
    greeting: "Hi world from yasin",
    version: "Sample Java App - Version 1.0.0",
    health: "OK - Application is running!",
};

const EKS: Responses = Responses {
    greeting: "Hello from EKS!",
    version: "Sample Java App v1.1 - CI/CD Pipeline Ready!",
    health: "Application is running successfully on Kubernetes!",
};

impl Variant {

    pub fn responses(self) -> Responses {

        match self {
            Variant::Classic => CLASSIC,
            Variant::Eks => EKS,
        }

    }

    pub fn as_str(self) -> &'static str {

        match self {
            Variant::Classic => "classic",
            Variant::Eks => "eks",
        }

    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
#[error("unknown variant {0:?} (expected \"classic\" or \"eks\")")]
pub struct UnknownVariant(pub String);

impl FromStr for Variant {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {

        // names are matched loosely, values are not
        match s.trim().to_lowercase().as_str() {
            "classic" => Ok(Variant::Classic),
            "eks" => Ok(Variant::Eks),
            _ => Err(UnknownVariant(s.to_string())),
        }

    }
}

#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
}

impl HealthResponse {
    pub fn up() -> Self {
        Self { status: "UP" }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct AppInfo {
    pub name: &'static str,
    pub version: &'static str,
    pub variant: Variant,
}

#[derive(Debug, Clone, Serialize)]
pub struct InfoResponse {
    pub app: AppInfo,
    pub started_at: DateTime<Utc>,
}
