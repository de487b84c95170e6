use bcrypt::BcryptError;

use super::AuthError;

/// Hash a plaintext password with bcrypt at the given cost.
pub fn hash_password(password: &str, cost: u32) -> Result<String, AuthError> {
    Ok(bcrypt::hash(password, cost)?)
}

/// Compare a plaintext password against a stored bcrypt hash.
///
/// A mismatch is `Ok(false)`, and so is a stored value that does not
/// parse as a bcrypt hash.
pub fn verify_password(password: &str, stored_hash: &str) -> Result<bool, AuthError> {
    match bcrypt::verify(password, stored_hash) {
        Ok(matched) => Ok(matched),
        Err(
            e @ (BcryptError::InvalidHash(_)
            | BcryptError::InvalidPrefix(_)
            | BcryptError::InvalidCost(_)
            | BcryptError::CostNotAllowed(_)
            | BcryptError::InvalidBase64(_)),
        ) => {
            tracing::warn!("Stored password is not a bcrypt hash: {}", e);
            Ok(false)
        }
        Err(e) => Err(e.into()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Minimum bcrypt cost keeps the tests fast
    const TEST_COST: u32 = 4;

    #[test]
    fn verifies_matching_password() {
        let hash = hash_password("correct", TEST_COST).unwrap();
        assert!(hash.starts_with("$2"));
        assert!(verify_password("correct", &hash).unwrap());
    }

    #[test]
    fn rejects_wrong_password() {
        let hash = hash_password("correct", TEST_COST).unwrap();
        assert!(!verify_password("wrong", &hash).unwrap());
    }

    #[test]
    fn hashes_are_salted() {
        let a = hash_password("same", TEST_COST).unwrap();
        let b = hash_password("same", TEST_COST).unwrap();
        assert_ne!(a, b);
    }

    #[test]
    fn malformed_hash_is_a_mismatch() {
        assert!(!verify_password("correct", "plaintext").unwrap());
        assert!(!verify_password("correct", "").unwrap());
        assert!(!verify_password("correct", "$2b$xx$notahash").unwrap());
        assert!(!verify_password("correct", "$9z$04$abcdefghijklmnopqrstuv").unwrap());
    }
}
