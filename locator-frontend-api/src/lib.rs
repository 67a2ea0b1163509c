use gloo_net::http::Response;
use serde::de::DeserializeOwned;
use thiserror::Error;

mod geosearch;

pub use self::geosearch::*;

type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum Error {
    #[error("{0}")]
    Fetch(String),

    #[error("{0}")]
    Decode(String),

    #[error("{message} ({status})")]
    Api { status: u16, message: String },
}

impl From<gloo_net::Error> for Error {
    fn from(err: gloo_net::Error) -> Self {
        match err {
            gloo_net::Error::SerdeError(err) => Self::Decode(err.to_string()),
            err => Self::Fetch(format!("{err}")),
        }
    }
}

impl From<Error> for locator_core::Error {
    fn from(from: Error) -> Self {
        match from {
            Error::Fetch(msg) => Self::Fetch(msg),
            Error::Decode(msg) => Self::Decode(msg),
            Error::Api { status, message } => Self::Api { status, message },
        }
    }
}

pub async fn into_json<T>(response: Response) -> Result<T>
where
    T: DeserializeOwned,
{
    // ensure we've got 2xx status
    if response.ok() {
        Ok(response.json().await?)
    } else {
        let status = response.status();
        let message = response
            .json::<locator_boundary::ErrorResponse>()
            .await
            .ok()
            .and_then(|res| res.meta.errors.into_iter().next())
            .map_or_else(|| response_status_message(status), |err| err.message);
        Err(Error::Api { status, message })
    }
}

fn response_status_message(status: u16) -> String {
    format!("HTTP status {status}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn convert_into_core_error() {
        let err = locator_core::Error::from(Error::Api {
            status: 404,
            message: "Not found".into(),
        });
        assert!(matches!(err, locator_core::Error::Api { status: 404, .. }));
        let err = locator_core::Error::from(Error::Decode("eof".into()));
        assert!(matches!(err, locator_core::Error::Decode(_)));
    }
}
