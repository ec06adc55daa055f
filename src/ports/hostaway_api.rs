use async_trait::async_trait;

use crate::domain::month::FetchWindow;
use crate::domain::reservation::Reservation;
use crate::error::Result;

/// Bearer token from the client-credentials exchange.
#[derive(Clone, PartialEq, Eq)]
pub struct AccessToken(String);

impl AccessToken {
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    pub fn secret(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Debug for AccessToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("AccessToken(<redacted>)")
    }
}

/// The two upstream calls. A reservation fetch needs a token from a prior
/// successful `access_token` call.
#[async_trait]
pub trait HostawayApi: Send + Sync {
    async fn access_token(&self) -> Result<AccessToken>;

    /// Reservations whose arrival date falls inside `window`, any status.
    async fn list_reservations(
        &self,
        token: &AccessToken,
        window: &FetchWindow,
    ) -> Result<Vec<Reservation>>;
}
