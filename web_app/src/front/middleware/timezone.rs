use chrono::{DateTime, NaiveDate, Utc};
use chrono_tz::Tz;
use ntex::{
    http::Payload,
    web::{Error, FromRequest, HttpRequest},
};

use crate::{config, front::utils};

/// Timezone used to resolve "today" for the request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClientTimezone(pub Tz);

impl ClientTimezone {
    pub fn today(&self, now: DateTime<Utc>) -> NaiveDate {
        crate::utils::local_today(now, self.0)
    }
}

fn default_tz() -> Tz {
    config::APP_CONFIG
        .get()
        .and_then(|c| c.default_tz().ok())
        .unwrap_or(Tz::UTC)
}

impl<Err> FromRequest<Err> for ClientTimezone {
    type Error = Error;

    fn from_request(
        req: &HttpRequest,
        _: &mut Payload,
    ) -> impl std::future::Future<Output = Result<Self, Self::Error>> {
        let tz = utils::extract_usertimezone(req.headers()).unwrap_or_else(|_| default_tz());
        futures::future::ready(Ok(ClientTimezone(tz)))
    }
}
