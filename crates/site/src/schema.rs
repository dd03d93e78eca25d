//! Login form validation.

use validator::Validate;

/// Credentials submitted by the login form.
#[derive(Debug, Validate)]
pub(crate) struct LoginCredentials {
    #[validate(email(message = "Email inválido"))]
    pub email: String,
    #[validate(length(min = 1, message = "Informe a senha"))]
    pub password: String,
}

/// Validates raw form values against the login schema.
pub(crate) fn parse_login(
    email: &str,
    password: &str,
) -> Result<LoginCredentials, validator::ValidationErrors> {
    let credentials = LoginCredentials {
        email: email.to_owned(),
        password: password.to_owned(),
    };
    credentials.validate()?;
    Ok(credentials)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_well_formed_credentials() {
        assert!(parse_login("a@b.com", "hunter2").is_ok());
    }

    #[test]
    fn rejects_malformed_email() {
        assert!(parse_login("", "hunter2").is_err());
        assert!(parse_login("not-an-email", "hunter2").is_err());
    }

    #[test]
    fn rejects_empty_password() {
        assert!(parse_login("a@b.com", "").is_err());
    }
}
