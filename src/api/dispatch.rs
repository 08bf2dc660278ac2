use serde::de::DeserializeOwned;
use tracing::debug;

use crate::error::BettingError;
use crate::models::Params;
use crate::session::Session;
use crate::transport::Transport;

/// Service group every betting call is routed to.
pub const SERVICE_GROUP: &str = "betting";

/// Run one betting call and decode the reply into `T`.
///
/// The session's locale overwrites whatever `params.locale` held. Errors are
/// returned, never logged or retried.
pub async fn dispatch<T, X>(
    session: &Session<X>,
    method: &str,
    mut params: Params,
) -> Result<T, BettingError>
where
    T: DeserializeOwned,
    X: Transport,
{
    params.locale = session.locale().map(str::to_owned);

    let body = serde_json::to_vec(&params).map_err(|source| BettingError::Serialization {
        method: method.to_string(),
        source,
    })?;
    debug!(method, request_bytes = body.len(), "dispatching");

    let reply = session
        .transport()
        .invoke(SERVICE_GROUP, method, body)
        .await?;
    debug!(method, response_bytes = reply.len(), "received");

    serde_json::from_slice(&reply).map_err(|source| BettingError::Deserialization {
        method: method.to_string(),
        source,
    })
}
