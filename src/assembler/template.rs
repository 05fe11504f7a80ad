use crate::error::GenerationError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The supported document variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TemplateId {
    /// Claim form: institution, victim, event, vehicle, referral, physician and totals.
    Furips1,
    /// Itemised relation of billed services.
    Furips2,
}

impl TemplateId {
    pub const ALL: [TemplateId; 2] = [TemplateId::Furips1, TemplateId::Furips2];

    pub fn as_str(&self) -> &'static str {
        match self {
            TemplateId::Furips1 => "furips1",
            TemplateId::Furips2 => "furips2",
        }
    }
}

impl fmt::Display for TemplateId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TemplateId {
    type Err = GenerationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        TemplateId::ALL
            .into_iter()
            .find(|id| id.as_str().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| GenerationError::Input(format!("unknown template '{}'", s)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_case_insensitively() {
        assert_eq!("FURIPS1".parse::<TemplateId>().unwrap(), TemplateId::Furips1);
        assert_eq!(" furips2 ".parse::<TemplateId>().unwrap(), TemplateId::Furips2);
    }

    #[test]
    fn unknown_template_is_input_error() {
        assert!(matches!("furips3".parse::<TemplateId>(), Err(GenerationError::Input(_))));
    }

    #[test]
    fn serde_uses_lowercase_names() {
        assert_eq!(serde_json::to_string(&TemplateId::Furips2).unwrap(), "\"furips2\"");
        let id: TemplateId = serde_json::from_str("\"furips1\"").unwrap();
        assert_eq!(id, TemplateId::Furips1);
    }
}
