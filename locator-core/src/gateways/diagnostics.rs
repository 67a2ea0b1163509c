use crate::Error;

/// Receives everything that went wrong while resolving nearby locations.
///
/// None of these problems is shown to the visitor of a page.
pub trait DiagnosticsGateway {
    fn missing_api_key(&self);
    fn query_failed(&self, err: &Error);
}

/// Reports through the `log` facade.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogDiagnostics;

impl DiagnosticsGateway for LogDiagnostics {
    fn missing_api_key(&self) {
        log::error!("Add the nearby API key to the site configuration to enable nearby locations");
    }
    fn query_failed(&self, err: &Error) {
        log::error!("Unable to fetch nearby locations: {err}");
    }
}
