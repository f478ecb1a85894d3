//! WhatsApp deep-link construction.

use crate::constants::PHONE_COUNTRY_PREFIX;
use crate::errors::{Error, ValidationError};
use crate::Result;

/// Normalizes a free-text phone number for `wa.me`: strip everything but
/// digits and rewrite a local leading `0` to the country prefix.
pub fn normalize_phone(raw: &str) -> Result<String> {
    let digits: String = raw.chars().filter(|c| c.is_ascii_digit()).collect();
    if digits.is_empty() {
        return Err(Error::Validation(ValidationError::InvalidInput(format!(
            "'{}' contains no phone digits",
            raw
        ))));
    }
    if let Some(rest) = digits.strip_prefix('0') {
        Ok(format!("{}{}", PHONE_COUNTRY_PREFIX, rest))
    } else {
        Ok(digits)
    }
}

/// Builds the pre-filled `wa.me` deep link for a composed message.
pub fn whatsapp_link(phone: &str, message: &str) -> Result<String> {
    let normalized = normalize_phone(phone)?;
    Ok(format!(
        "https://wa.me/{}?text={}",
        normalized,
        urlencoding::encode(message)
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_local_number() {
        assert_eq!(normalize_phone("0812-3456-7890").unwrap(), "6281234567890");
        assert_eq!(normalize_phone("+62 812 3456 7890").unwrap(), "6281234567890");
        assert_eq!(normalize_phone("6281234567890").unwrap(), "6281234567890");
    }

    #[test]
    fn test_normalize_rejects_digitless_input() {
        assert!(normalize_phone("belum ada").is_err());
        assert!(normalize_phone("").is_err());
    }

    #[test]
    fn test_whatsapp_link_encodes_message() {
        let link = whatsapp_link("081234567890", "Halo Ibu Siti & keluarga").unwrap();
        assert_eq!(
            link,
            "https://wa.me/6281234567890?text=Halo%20Ibu%20Siti%20%26%20keluarga"
        );
    }
}
