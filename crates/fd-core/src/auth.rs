//! Explicit authentication context.
//!
//! Auth enters the console as a value handed down at construction time.
//! Nothing reads tokens from ambient storage; whoever builds the adapters
//! decides where the token comes from.

/// Operator identity plus the bearer token used on every request.
#[derive(Clone)]
pub struct AuthContext {
    operator: String,
    token: String,
}

impl AuthContext {
    pub fn new(operator: impl Into<String>, token: impl Into<String>) -> Self {
        Self {
            operator: operator.into(),
            token: token.into(),
        }
    }

    pub fn operator(&self) -> &str {
        &self.operator
    }

    pub fn bearer_token(&self) -> &str {
        &self.token
    }
}

// Token must never reach logs.
impl std::fmt::Debug for AuthContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuthContext")
            .field("operator", &self.operator)
            .field("token", &"***")
            .finish()
    }
}
