// JWT token creation and verification
// Handles role-carrying bearer tokens with 8-hour expiry

use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Role required for every write operation on categories
pub const WRITER_ROLE: &str = "Writer";

/// JWT claims structure
///
/// # Fields
/// * `sub` - Subject (user_id)
/// * `roles` - Role names granted to the subject
/// * `exp` - Expiry time (seconds since epoch)
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Claims {
    /// User ID (subject)
    pub sub: Uuid,
    /// Granted roles, compared exactly
    #[serde(default)]
    pub roles: Vec<String>,
    /// Expiry timestamp (seconds since epoch)
    pub exp: usize,
}

impl Claims {
    /// Returns true when `role` is among the granted roles
    pub fn has_role(&self, role: &str) -> bool {
        self.roles.iter().any(|granted| granted == role)
    }
}

/// Creates a JWT token for a user
///
/// # Arguments
/// * `user_id` - The user's ID to include in the token
/// * `roles` - Roles to grant
/// * `secret` - The secret key for signing
///
/// # Token Properties
/// - Expires after 8 hours
/// - Signed with HS256 algorithm
///
/// # Example
/// ```
/// use blog_categories_api::auth::jwt::{create_token, WRITER_ROLE};
/// use uuid::Uuid;
///
/// let token = create_token(Uuid::new_v4(), &[WRITER_ROLE], "your-secret-key")
///     .expect("valid token");
/// assert!(!token.is_empty());
/// ```
pub fn create_token(
    user_id: Uuid,
    roles: &[&str],
    secret: &str,
) -> Result<String, jsonwebtoken::errors::Error> {
    let expiry = Utc::now() + Duration::hours(8);
    let claims = Claims {
        sub: user_id,
        roles: roles.iter().map(|role| role.to_string()).collect(),
        exp: expiry.timestamp() as usize,
    };

    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(secret.as_ref()),
    )
}

/// Verifies and decodes a JWT token
///
/// # Returns
/// * `Ok(Claims)` - The decoded claims if token is valid
/// * `Err(_)` - If the signature is wrong, the token is malformed or expired
pub fn verify_token(token: &str, secret: &str) -> Result<Claims, jsonwebtoken::errors::Error> {
    decode::<Claims>(
        token,
        &DecodingKey::from_secret(secret.as_ref()),
        &Validation::default(),
    )
    .map(|data| data.claims)
}
