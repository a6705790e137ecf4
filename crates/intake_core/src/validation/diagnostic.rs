//! User-facing validation diagnostics.
//!
//! Message text is shown verbatim by the UI and must not change.

use crate::model::patient::FormField;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// First failing rule found for a form submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldDiagnostic {
    MissingName,
    MissingCpf,
    MissingEmail,
    MissingPhone,
    MissingBirthDate,
    InvalidName,
    InvalidCpf,
    InvalidBirthDate,
    InvalidEmail,
    InvalidPhone,
}

impl FieldDiagnostic {
    /// Form field the diagnostic points at.
    pub fn field(self) -> FormField {
        match self {
            Self::MissingName | Self::InvalidName => FormField::Name,
            Self::MissingCpf | Self::InvalidCpf => FormField::Cpf,
            Self::MissingEmail | Self::InvalidEmail => FormField::Email,
            Self::MissingPhone | Self::InvalidPhone => FormField::Phone,
            Self::MissingBirthDate | Self::InvalidBirthDate => FormField::BirthDate,
        }
    }

    /// Whether the field was left blank, as opposed to malformed.
    pub fn is_missing(self) -> bool {
        matches!(
            self,
            Self::MissingName
                | Self::MissingCpf
                | Self::MissingEmail
                | Self::MissingPhone
                | Self::MissingBirthDate
        )
    }

    /// Message displayed to the user.
    pub fn message(self) -> &'static str {
        match self {
            Self::MissingName => "Preencha o campo nome.",
            Self::MissingCpf => "Preencha o campo CPF.",
            Self::MissingEmail => "Preencha o campo email.",
            Self::MissingPhone => "Preencha o campo telefone.",
            Self::MissingBirthDate => "Preencha o campo data de nascimento.",
            Self::InvalidName => "Nome deve conter somente letras.",
            Self::InvalidCpf => {
                "CPF deve conter somente dígitos numéricos e ser no formato 999.999.999-99"
            }
            Self::InvalidBirthDate => "Data de nascimento deve ser no formato dd/mm/aaaa.",
            Self::InvalidEmail => "ATENÇÃO! Digite um email válido.",
            Self::InvalidPhone => {
                "Telefone deve conter somente dígitos numéricos e ser no formato (99)99999-9999."
            }
        }
    }

    fn rule(self) -> &'static str {
        if self.is_missing() {
            "missing"
        } else {
            "format"
        }
    }
}

impl Display for FieldDiagnostic {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.message())
    }
}

impl Error for FieldDiagnostic {}

/// Log-safe summary: field key and rule, never the typed value.
pub(crate) fn log_summary(diagnostic: FieldDiagnostic) -> String {
    format!("field={} rule={}", diagnostic.field(), diagnostic.rule())
}

#[cfg(test)]
mod tests {
    use super::{log_summary, FieldDiagnostic};
    use crate::model::patient::FormField;

    #[test]
    fn display_matches_message() {
        let diagnostic = FieldDiagnostic::InvalidEmail;
        assert_eq!(diagnostic.to_string(), "ATENÇÃO! Digite um email válido.");
    }

    #[test]
    fn missing_and_invalid_point_at_same_field() {
        assert_eq!(FieldDiagnostic::MissingCpf.field(), FormField::Cpf);
        assert_eq!(FieldDiagnostic::InvalidCpf.field(), FormField::Cpf);
        assert!(FieldDiagnostic::MissingCpf.is_missing());
        assert!(!FieldDiagnostic::InvalidCpf.is_missing());
    }

    #[test]
    fn log_summary_omits_message_text() {
        let summary = log_summary(FieldDiagnostic::InvalidPhone);
        assert_eq!(summary, "field=phone rule=format");
    }
}
