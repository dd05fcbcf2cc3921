//! Third-party map API requests.
//!
//! When another application drives the map through the API action, the
//! parsed request is recorded as the current API session so later UI steps
//! (returning to the caller, point picking) can consult it.

use std::sync::{Mutex, PoisonError};

use serde::{Deserialize, Serialize};

use crate::keys::{
    EXTRA_API_CALLER_APP_INFO, EXTRA_API_CUSTOM_BUTTON_NAME, EXTRA_API_PICK_POINT,
    EXTRA_API_RETURN_ON_BALLOON_CLICK, EXTRA_API_TITLE, EXTRA_API_VERSION,
};
use crate::request::Extras;

/// A parsed third-party API request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiRequest {
    url: String,
    title: Option<String>,
    caller_app_name: Option<String>,
    api_version: i64,
    pick_point: bool,
    return_on_balloon_click: bool,
    custom_button_name: Option<String>,
}

impl ApiRequest {
    /// Creates a request for `url` with every optional field unset.
    #[must_use]
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            title: None,
            caller_app_name: None,
            api_version: 0,
            pick_point: false,
            return_on_balloon_click: false,
            custom_button_name: None,
        }
    }

    /// Extracts the request fields carried next to the API URL.
    #[must_use]
    pub fn from_extras(url: &str, extras: &Extras) -> Self {
        Self {
            url: url.to_owned(),
            title: extras.string(EXTRA_API_TITLE).map(str::to_owned),
            caller_app_name: extras.string(EXTRA_API_CALLER_APP_INFO).map(str::to_owned),
            api_version: extras.long_or(EXTRA_API_VERSION, 0),
            pick_point: extras.bool_or(EXTRA_API_PICK_POINT, false),
            return_on_balloon_click: extras.bool_or(EXTRA_API_RETURN_ON_BALLOON_CLICK, false),
            custom_button_name: extras
                .string(EXTRA_API_CUSTOM_BUTTON_NAME)
                .map(str::to_owned),
        }
    }

    /// Marks the request as a point-picking session.
    #[must_use]
    pub const fn with_pick_point(mut self, pick_point: bool) -> Self {
        self.pick_point = pick_point;
        self
    }

    /// Returns the API URL.
    #[must_use]
    pub const fn url(&self) -> &str {
        self.url.as_str()
    }

    /// Returns the title to display while the request is active.
    #[must_use]
    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    /// Returns the calling application's display name.
    #[must_use]
    pub fn caller_app_name(&self) -> Option<&str> {
        self.caller_app_name.as_deref()
    }

    /// Returns the caller's API version, `0` when unspecified.
    #[must_use]
    pub const fn api_version(&self) -> i64 {
        self.api_version
    }

    /// Returns `true` when the caller wants the user to pick a point.
    #[must_use]
    pub const fn is_pick_point(&self) -> bool {
        self.pick_point
    }

    /// Returns `true` when a balloon tap returns to the caller.
    #[must_use]
    pub const fn return_on_balloon_click(&self) -> bool {
        self.return_on_balloon_click
    }

    /// Returns the label of the caller's custom button.
    #[must_use]
    pub fn custom_button_name(&self) -> Option<&str> {
        self.custom_button_name.as_deref()
    }
}

/// Store for the API request currently driving the map.
pub trait ApiSession {
    /// Records `request` as the current API request.
    fn set_current_request(&self, request: ApiRequest);

    /// Returns the current API request.
    fn current_request(&self) -> Option<ApiRequest>;

    /// Returns `true` when the current request asks for point picking.
    fn is_pick_point_mode(&self) -> bool {
        self.current_request()
            .is_some_and(|request| request.is_pick_point())
    }
}

/// Process-local [`ApiSession`].
#[derive(Debug, Default)]
pub struct InMemoryApiSession {
    current: Mutex<Option<ApiRequest>>,
}

impl InMemoryApiSession {
    /// Creates a session with no current request.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl ApiSession for InMemoryApiSession {
    fn set_current_request(&self, request: ApiRequest) {
        let mut current = self.current.lock().unwrap_or_else(PoisonError::into_inner);
        *current = Some(request);
    }

    fn current_request(&self) -> Option<ApiRequest> {
        self.current
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

#[cfg(test)]
mod tests;
