//! Frontend configuration

/// Authentication configuration
pub struct AuthConfig;

impl AuthConfig {
    /// Storage key for the bearer token
    pub const TOKEN_KEY: &'static str = "token";

    /// Storage key for the display username
    pub const USERNAME_KEY: &'static str = "username";
}

/// User-facing notice texts
pub struct Notices;

impl Notices {
    /// Shown when the server rejects the session
    pub const SESSION_EXPIRED: &'static str = "Session expired, please log in again";

    /// Shown when a protected route is opened without a session
    pub const LOGIN_REQUIRED: &'static str = "Please log in first";
}
