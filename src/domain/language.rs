use crate::error::{Result, VersError};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Version strings for each supported package ecosystem
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LanguageVersions {
    /// Generic semantic version
    pub semver: String,
    /// PEP440-style version
    pub python: String,
    /// npm-style version
    pub javascript: String,
    /// .NET-style version
    pub dotnet: String,
    /// Go module-path style version
    pub go: String,
}

impl LanguageVersions {
    /// Derive all five strings from a generic and a PEP440 rendering.
    ///
    /// .NET reuses the generic string; npm and Go prefix it with `v`.
    pub fn from_generic(generic: impl Into<String>, python: impl Into<String>) -> Self {
        let generic = generic.into();
        LanguageVersions {
            javascript: format!("v{}", generic),
            dotnet: generic.clone(),
            go: format!("v{}", generic),
            python: python.into(),
            semver: generic,
        }
    }

    /// Development placeholder used when no repository is available
    pub fn fallback() -> Self {
        LanguageVersions {
            semver: "0.0.0-dev".to_string(),
            python: "0.0.0.dev0".to_string(),
            javascript: "v0.0.0-dev".to_string(),
            dotnet: "0.0.0-dev".to_string(),
            go: "v0.0.0-dev".to_string(),
        }
    }

    /// The string for one ecosystem
    pub fn get(&self, language: Language) -> &str {
        match language {
            Language::Generic => &self.semver,
            Language::Python => &self.python,
            Language::JavaScript => &self.javascript,
            Language::DotNet => &self.dotnet,
            Language::Go => &self.go,
        }
    }
}

/// Output ecosystem selector
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", try_from = "String")]
pub enum Language {
    #[default]
    Generic,
    Python,
    JavaScript,
    DotNet,
    Go,
}

impl FromStr for Language {
    type Err = VersError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "generic" | "semver" => Ok(Language::Generic),
            "python" => Ok(Language::Python),
            "javascript" | "js" | "node" => Ok(Language::JavaScript),
            "dotnet" | ".net" | "csharp" => Ok(Language::DotNet),
            "go" | "golang" => Ok(Language::Go),
            other => Err(VersError::config(format!("unknown language '{}'", other))),
        }
    }
}

impl TryFrom<String> for Language {
    type Error = VersError;

    fn try_from(value: String) -> Result<Self> {
        value.parse()
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Language::Generic => "generic",
            Language::Python => "python",
            Language::JavaScript => "javascript",
            Language::DotNet => "dotnet",
            Language::Go => "go",
        };
        write!(f, "{}", name)
    }
}
