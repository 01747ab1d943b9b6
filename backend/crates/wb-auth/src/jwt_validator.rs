use crate::{AuthError, Claims, Result as AuthErrorResult, TokenPurpose};

use std::panic::Location;

use error_location::ErrorLocation;
use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::{Algorithm, DecodingKey, Validation, decode};

/// Stateless HS256 validator.
pub struct JwtValidator {
    decoding_key: DecodingKey,
    validation: Validation,
}

impl JwtValidator {
    pub fn with_hs256(secret: &[u8]) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_exp = true;
        validation.validate_nbf = true;
        validation.leeway = 30;

        Self {
            decoding_key: DecodingKey::from_secret(secret),
            validation,
        }
    }

    /// Verifies signature and expiry. Expiry is reported separately from
    /// every other rejection.
    #[track_caller]
    pub fn validate(&self, token: &str) -> AuthErrorResult<Claims> {
        let token_data = decode::<Claims>(token, &self.decoding_key, &self.validation).map_err(
            |e| match e.kind() {
                ErrorKind::ExpiredSignature => AuthError::TokenExpired {
                    location: ErrorLocation::from(Location::caller()),
                },
                _ => AuthError::JwtDecode {
                    source: e,
                    location: ErrorLocation::from(Location::caller()),
                },
            },
        )?;

        token_data.claims.validate()?;

        Ok(token_data.claims)
    }

    #[track_caller]
    pub fn validate_for(&self, token: &str, purpose: TokenPurpose) -> AuthErrorResult<Claims> {
        let claims = self.validate(token)?;

        if claims.purpose != purpose {
            return Err(AuthError::InvalidToken {
                message: format!(
                    "expected a {} token, got {}",
                    purpose.as_str(),
                    claims.purpose.as_str()
                ),
                location: ErrorLocation::from(Location::caller()),
            });
        }

        Ok(claims)
    }
}
