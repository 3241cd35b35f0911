//! Runtime boundary for enumerated wire vocabularies.
//!
//! Enum-typed values are never re-validated; this helper exists only for
//! strings arriving from outside the type system (caller-supplied
//! configuration, CLI-style input, and the like).

use std::str::FromStr;

use strum::VariantNames;

use crate::error::{CompassError, Result};

/// Parse a caller-supplied string into an enumerated wire literal.
///
/// `field` names the parameter in the error message.
///
/// # Errors
///
/// Returns [`CompassError::InvalidLiteral`] carrying the offending value,
/// the field name, and the full list of valid options when the string is
/// not a member of the vocabulary.
pub fn parse_label<T>(value: &str, field: &str) -> Result<T>
where
    T: FromStr + VariantNames,
{
    T::from_str(value).map_err(|_| CompassError::InvalidLiteral {
        value: value.to_string(),
        field: field.to_string(),
        options: T::VARIANTS,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::roles::PatchOperation;
    use crate::types::sort::SortField;

    #[test]
    fn test_parse_label_accepts_every_declared_option() {
        for label in PatchOperation::VARIANTS {
            let parsed: PatchOperation = parse_label(label, "patch_operation").unwrap();
            assert_eq!(&parsed.to_string(), label);
        }
    }

    #[test]
    fn test_parse_label_rejects_unknown_value_with_context() {
        let err = parse_label::<SortField>("MODIFIED", "sort_field").unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("MODIFIED"));
        assert!(msg.contains("sort_field"));
        assert!(msg.contains("NAME"));
        assert!(msg.contains("LAST_MODIFIED"));
    }
}
