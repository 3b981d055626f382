pub const IDENTITY_COOKIE_NAME: &str = "owner_id";
pub const MAX_AGE_COOKIES: i64 = chrono::TimeDelta::days(30).num_seconds();

/// Request header carrying the client's IANA timezone
pub const TIMEZONE_HEADER: &str = "timezone";

pub const MAX_NAME_LEN: usize = 80;
pub const MAX_TEXT_LEN: usize = 2_000;
