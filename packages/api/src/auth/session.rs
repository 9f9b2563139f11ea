//! Session key constants.

/// Key for storing the member's user id in the tower session.
pub const SESSION_USER_ID_KEY: &str = "user_id";

/// Key for storing the broker-issued session token alongside the user id. The
/// token is never re-sent to the broker; it is kept so a later audit can tie a
/// cookie session back to the broker exchange that created it.
pub const SESSION_BROKER_TOKEN_KEY: &str = "broker_token";
