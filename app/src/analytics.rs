use strum::{AsRefStr, EnumIter, IntoEnumIterator};
use thiserror::Error;
use wasm_bindgen::prelude::*;

/// Autotrack plugins registered on page load.
#[derive(Clone, Copy, Debug, PartialEq, Eq, AsRefStr, EnumIter)]
pub enum Tracker {
    #[strum(serialize = "eventTracker")]
    Event,
    #[strum(serialize = "outboundLinkTracker")]
    OutboundLink,
    #[strum(serialize = "urlChangeTracker")]
    UrlChange,
}

impl Tracker {
    pub fn all() -> Vec<Tracker> {
        Tracker::iter().collect()
    }
}

#[derive(Debug, Error)]
pub enum AnalyticsError {
    #[error("analytics client rejected plugin `{plugin}`: {reason}")]
    Rejected { plugin: String, reason: String },
}

pub trait AnalyticsClient {
    fn require(&self, plugin: &str) -> Result<(), AnalyticsError>;
}

/// Registers `trackers` in order, stopping at the first one the client
/// rejects. Calling this twice registers every tracker twice.
pub fn register_trackers(
    client: &dyn AnalyticsClient,
    trackers: &[Tracker],
) -> Result<(), AnalyticsError> {
    for tracker in trackers {
        client.require(tracker.as_ref())?;
        log::debug!("registered analytics plugin {}", tracker.as_ref());
    }
    Ok(())
}

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(catch, js_name = ga)]
    fn ga_command(command: &str, plugin: &str) -> Result<(), JsValue>;
}

/// Talks to the `ga` command queue the host page installs.
pub struct GoogleAnalytics;

impl AnalyticsClient for GoogleAnalytics {
    fn require(&self, plugin: &str) -> Result<(), AnalyticsError> {
        ga_command("require", plugin).map_err(|error| AnalyticsError::Rejected {
            plugin: plugin.to_string(),
            reason: format!("{error:?}"),
        })
    }
}

pub struct NoopAnalytics;

impl AnalyticsClient for NoopAnalytics {
    fn require(&self, _plugin: &str) -> Result<(), AnalyticsError> {
        Ok(())
    }
}
