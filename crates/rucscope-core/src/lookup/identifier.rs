//! Identifier kinds accepted by the lookup endpoints.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

use crate::error::{ClientError, Result};

/// Kind of identifier a lookup is keyed by.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum IdentifierKind {
    /// Taxpayer registry number, 11 digits
    #[default]
    Ruc,
    /// National identity document, 8 digits
    Dni,
}

impl IdentifierKind {
    /// Number of digits the input field accepts for this kind.
    pub fn digits(&self) -> usize {
        match self {
            Self::Ruc => 11,
            Self::Dni => 8,
        }
    }

    /// Backend path for looking up `identifier`.
    pub fn path(&self, identifier: &str) -> String {
        match self {
            Self::Ruc => format!("/api/ruc/{identifier}"),
            Self::Dni => format!("/api/ruc/dni/{identifier}"),
        }
    }

    /// Input-level masking: keeps ASCII digits and truncates to the kind's
    /// length.
    pub fn mask_input(&self, raw: &str) -> String {
        raw.chars()
            .filter(char::is_ascii_digit)
            .take(self.digits())
            .collect()
    }
}

/// Checks that `identifier` is a non-empty string of ASCII digits.
///
/// Length is deliberately not checked here; that rule belongs to the input
/// mask.
pub fn validate_identifier(identifier: &str) -> Result<()> {
    if identifier.is_empty() {
        return Err(ClientError::validation("Identifier is required"));
    }
    if !identifier.chars().all(|c| c.is_ascii_digit()) {
        return Err(ClientError::validation(format!(
            "Identifier must contain only digits: '{identifier}'"
        )));
    }
    Ok(())
}
