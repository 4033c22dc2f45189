use crate::error::ApiError;

pub fn validate_min_len(field: &str, value: &str, min: usize) -> Result<(), ApiError> {
    if value.chars().count() < min {
        return Err(ApiError::bad_request(format!(
            "{field} must be at least {min} characters."
        )));
    }
    Ok(())
}

/// Shape check only; the authority owns real address validation.
pub fn validate_email(email: &str) -> Result<(), ApiError> {
    match email.split_once('@') {
        Some((local, domain)) if !local.is_empty() && domain.contains('.') => Ok(()),
        _ => Err(ApiError::bad_request("email is not a valid address.")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn min_len_counts_characters() {
        assert!(validate_min_len("name", "토마토", 3).is_ok());
        assert!(validate_min_len("name", "ab", 3).is_err());
        assert!(validate_min_len("password", "12345678", 8).is_ok());
    }

    #[test]
    fn email_shape() {
        assert!(validate_email("tester@example.com").is_ok());
        assert!(validate_email("tester.example.com").is_err());
        assert!(validate_email("@example.com").is_err());
        assert!(validate_email("tester@localhost").is_err());
    }
}
