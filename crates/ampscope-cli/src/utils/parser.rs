use ampscope::core::residues::{AminoAcid, ParseAminoAcidError};
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    #[error("Invalid --set format: '{0}'. Expected KEY=VALUE.")]
    InvalidKeyValue(String),

    #[error("Key cannot be empty in '{0}'.")]
    EmptyKey(String),
}

/// Splits a `KEY=VALUE` override at the first `=`. Both sides are trimmed.
pub fn parse_key_value(pair: &str) -> Result<(&str, &str), ParseError> {
    let (key, value) = pair
        .split_once('=')
        .ok_or_else(|| ParseError::InvalidKeyValue(pair.to_string()))?;
    let key = key.trim();
    if key.is_empty() {
        return Err(ParseError::EmptyKey(pair.to_string()));
    }
    Ok((key, value.trim()))
}

/// Parses a residue list such as `CM`, `c,m` or `C M` into distinct amino acids, keeping
/// first-seen order.
pub fn parse_residue_list(codes: &str) -> Result<Vec<AminoAcid>, ParseAminoAcidError> {
    let mut residues = Vec::new();
    for code in codes
        .chars()
        .filter(|c| !c.is_whitespace() && *c != ',')
    {
        let residue = AminoAcid::try_from(code.to_ascii_uppercase())?;
        if !residues.contains(&residue) {
            residues.push(residue);
        }
    }
    Ok(residues)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn key_value_splits_at_first_equals_sign() {
        assert_eq!(
            parse_key_value("filter.threshold=0.5"),
            Ok(("filter.threshold", "0.5"))
        );
        assert_eq!(parse_key_value(" a = b=c "), Ok(("a", "b=c")));
        assert_eq!(parse_key_value("filter.excluded-residues="), Ok(("filter.excluded-residues", "")));
    }

    #[test]
    fn key_value_without_separator_is_rejected() {
        assert_eq!(
            parse_key_value("filter.threshold"),
            Err(ParseError::InvalidKeyValue("filter.threshold".to_string()))
        );
        assert_eq!(
            parse_key_value("=0.5"),
            Err(ParseError::EmptyKey("=0.5".to_string()))
        );
    }

    #[test]
    fn residue_list_accepts_several_separators_and_cases() {
        let expected = vec![AminoAcid::Cysteine, AminoAcid::Methionine];
        assert_eq!(parse_residue_list("CM").unwrap(), expected);
        assert_eq!(parse_residue_list("c, m").unwrap(), expected);
        assert_eq!(parse_residue_list("C M C").unwrap(), expected);
    }

    #[test]
    fn empty_residue_list_is_allowed() {
        assert!(parse_residue_list("").unwrap().is_empty());
        assert!(parse_residue_list(" , ").unwrap().is_empty());
    }

    #[test]
    fn non_canonical_codes_are_rejected() {
        assert_eq!(
            parse_residue_list("CX"),
            Err(ParseAminoAcidError::NonCanonical('X'))
        );
    }
}
