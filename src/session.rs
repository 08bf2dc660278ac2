use crate::config::Config;
use crate::transport::{HttpTransport, Transport, TransportError};

/// Handle shared by every call: the locale stamped onto requests and the
/// transport that carries them. Calls only read from it.
#[derive(Debug)]
pub struct Session<X> {
    locale: Option<String>,
    transport: X,
}

impl<X: Transport> Session<X> {
    /// An empty locale is treated as no locale.
    pub fn new(locale: Option<String>, transport: X) -> Self {
        let locale = locale.filter(|l| !l.is_empty());
        Self { locale, transport }
    }

    pub fn locale(&self) -> Option<&str> {
        self.locale.as_deref()
    }

    pub fn transport(&self) -> &X {
        &self.transport
    }
}

impl Session<HttpTransport> {
    /// Session over HTTP using the configured endpoint and credentials.
    pub fn from_config(config: &Config) -> Result<Self, TransportError> {
        let transport = HttpTransport::new(
            config.general.endpoint.as_str(),
            &config.credentials.app_key,
            &config.credentials.session_token,
        )?;
        Ok(Self::new(config.general.locale.clone(), transport))
    }
}
