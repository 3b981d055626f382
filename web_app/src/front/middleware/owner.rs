use ntex::{
    http::Payload,
    web::{Error, FromRequest, HttpRequest},
};
use ntex_identity::{CookieIdentityPolicy, RequestIdentity};
use uuid::Uuid;

use crate::{consts, front::errors};

/// Private cookie holding the owner uuid, encrypted with `key`.
///
/// A sign-in callback mounted behind this policy issues it with
/// `Identity::remember(owner_id.to_string())`. `key` must be at least 32 bytes.
pub fn identity_policy(key: &[u8], domain: &str, secure: bool) -> CookieIdentityPolicy {
    CookieIdentityPolicy::new(key)
        .name(consts::IDENTITY_COOKIE_NAME)
        .path("/")
        .domain(domain.to_string())
        .max_age(consts::MAX_AGE_COOKIES)
        .secure(secure)
}

/// Owner of the profiles, taken from the identity cookie
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OwnerId(pub Uuid);

/// Parses the owner uuid stored by the sign-in flow in the identity cookie
fn get_owner_id(identity_cookie: Option<String>) -> Result<OwnerId, Error> {
    if let Some(Ok(owner_id)) = identity_cookie.map(|v| Uuid::parse_str(v.trim())) {
        return Ok(OwnerId(owner_id));
    }

    Err(errors::UserError::Unauthorized.into())
}

impl<Err> FromRequest<Err> for OwnerId {
    type Error = Error;

    fn from_request(
        req: &HttpRequest,
        _: &mut Payload,
    ) -> impl std::future::Future<Output = Result<Self, Self::Error>> {
        let identity_cookie = req.get_identity();
        futures::future::ready(get_owner_id(identity_cookie))
    }
}
