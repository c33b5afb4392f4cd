use gloo::events::EventListener;
use thiserror::Error;
use web_sys::{DocumentReadyState, Element};
use yew::AppHandle;

use crate::analytics::{register_trackers, AnalyticsClient, GoogleAnalytics, NoopAnalytics, Tracker};
use crate::app::{Shell, ShellProps};
use crate::store::CalibrationState;

pub const MOUNT_SELECTOR: &str = "#app";

#[derive(Debug, Error)]
pub enum BootError {
    #[error("mount target `{0}` does not exist")]
    MountTargetMissing(String),
    #[error("`{selector}` is not a valid selector: {reason}")]
    InvalidSelector { selector: String, reason: String },
}

#[derive(Clone, Debug, PartialEq)]
pub struct BootConfig {
    pub mount_selector: String,
    pub analytics_enabled: bool,
    pub trackers: Vec<Tracker>,
    pub title: String,
    pub log_level: log::Level,
}

impl Default for BootConfig {
    fn default() -> Self {
        BootConfig {
            mount_selector: MOUNT_SELECTOR.to_string(),
            analytics_enabled: true,
            trackers: Tracker::all(),
            title: "Calibrate".to_string(),
            log_level: if cfg!(debug_assertions) {
                log::Level::Debug
            } else {
                log::Level::Info
            },
        }
    }
}

pub fn find_mount_target(selector: &str) -> Result<Element, BootError> {
    gloo::utils::document()
        .query_selector(selector)
        .map_err(|error| BootError::InvalidSelector {
            selector: selector.to_string(),
            reason: format!("{error:?}"),
        })?
        .ok_or_else(|| BootError::MountTargetMissing(selector.to_string()))
}

/// Registers the analytics trackers, then mounts the shell.
///
/// Must run once per page load. Tracker failures are logged and do not
/// prevent the mount; a missing mount target does.
pub fn bootstrap(
    analytics: &dyn AnalyticsClient,
    config: &BootConfig,
) -> Result<AppHandle<Shell>, BootError> {
    if let Err(error) = register_trackers(analytics, &config.trackers) {
        log::warn!("analytics tracking incomplete: {error}");
    }

    let root = find_mount_target(&config.mount_selector)?;
    let props = ShellProps {
        initial_state: CalibrationState::default(),
        title: config.title.clone().into(),
    };

    log::info!("mounting application into {}", config.mount_selector);
    Ok(yew::Renderer::<Shell>::with_root_and_props(root, props).render())
}

/// Runs [`bootstrap`] once the page has finished loading.
pub fn start(config: BootConfig) {
    when_loaded(gloo::utils::document().ready_state(), move || run(&config));
}

/// Calls `f` exactly once: right away if `ready_state` is already complete,
/// otherwise on the window's first `load` event.
pub fn when_loaded<F>(ready_state: DocumentReadyState, f: F)
where
    F: FnOnce() + 'static,
{
    if ready_state == DocumentReadyState::Complete {
        f();
        return;
    }

    let window = gloo::utils::window();
    EventListener::once(&window, "load", move |_| f()).forget();
}

fn run(config: &BootConfig) {
    let analytics: &dyn AnalyticsClient = if config.analytics_enabled {
        &GoogleAnalytics
    } else {
        &NoopAnalytics
    };

    if let Err(error) = bootstrap(analytics, config) {
        log::error!("failed to start application: {error}");
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn default_config_mounts_on_app_with_all_trackers() {
        let config = BootConfig::default();
        assert_eq!(config.mount_selector, "#app");
        assert!(config.analytics_enabled);
        assert_eq!(
            config.trackers,
            vec![Tracker::Event, Tracker::OutboundLink, Tracker::UrlChange]
        );
    }

    #[test]
    fn missing_target_names_selector() {
        let error = BootError::MountTargetMissing(MOUNT_SELECTOR.to_string());
        assert_eq!(error.to_string(), "mount target `#app` does not exist");
    }
}
