use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Gender {
    Male,
    Female,
}

impl Gender {
    /// Display label used in documents and the gender form field.
    pub fn label(&self) -> &'static str {
        match self {
            Gender::Male => "男",
            Gender::Female => "女",
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Role of the interviewee. Each role routes to its own case-resolution
/// rules and template.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PersonType {
    /// The injured worker themself (本人).
    #[default]
    #[serde(rename = "self")]
    SelfParty,
    /// A witness to the incident (证人).
    Witness,
    /// A legal-entity representative (法人).
    LegalEntity,
}

impl PersonType {
    /// Chinese label; also the prefix of the person-specific template fields
    /// (本人姓名, 证人姓名, …).
    pub fn label(&self) -> &'static str {
        match self {
            PersonType::SelfParty => "本人",
            PersonType::Witness => "证人",
            PersonType::LegalEntity => "法人",
        }
    }
}

impl FromStr for PersonType {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "self" | "本人" => Ok(PersonType::SelfParty),
            "witness" | "证人" => Ok(PersonType::Witness),
            "legal-entity" | "法人" => Ok(PersonType::LegalEntity),
            other => Err(CoreError::InvalidPersonType(other.to_string())),
        }
    }
}

impl fmt::Display for PersonType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Identity details of the interviewee as recorded in the case index.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersonInfo {
    pub name: String,
    pub gender: Option<Gender>,
    pub age: Option<u16>,
    pub phone: String,
}
