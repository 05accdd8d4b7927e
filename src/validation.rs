use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Missing required parameter: {0}")]
    MissingParameter(String),

    #[error("Invalid wallet address format: {0}")]
    InvalidWalletAddress(String),
}

/// Wallet addresses are `0x` followed by 40 hex digits. Case is not normalized.
pub fn validate_wallet_address(address: &str) -> Result<(), ValidationError> {
    // Check if address is empty
    if address.trim().is_empty() {
        return Err(ValidationError::MissingParameter("address".to_string()));
    }

    let hex = match address.strip_prefix("0x") {
        Some(rest) => rest,
        None => return Err(ValidationError::InvalidWalletAddress(address.to_string())),
    };

    if hex.len() != 40 || !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(ValidationError::InvalidWalletAddress(address.to_string()));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_hex_addresses() {
        assert!(validate_wallet_address("0xba8a8f39b2315d4bc725c026ce3898c2c7e74f57").is_ok());
        assert!(validate_wallet_address("0xBA8A8F39B2315D4BC725C026CE3898C2C7E74F57").is_ok());
    }

    #[test]
    fn rejects_malformed_addresses() {
        assert_eq!(
            validate_wallet_address("  "),
            Err(ValidationError::MissingParameter("address".to_string()))
        );
        for bad in [
            "ba8a8f39b2315d4bc725c026ce3898c2c7e74f57",
            "0xba8a8f39b2315d4bc725c026ce3898c2c7e74f5",
            "0xzz8a8f39b2315d4bc725c026ce3898c2c7e74f57",
        ] {
            assert_eq!(
                validate_wallet_address(bad),
                Err(ValidationError::InvalidWalletAddress(bad.to_string()))
            );
        }
    }
}
