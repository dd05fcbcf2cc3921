//! Normalized view of an externally delivered request.
//!
//! An [`InboundRequest`] is built once per delivery from the host platform's
//! action tag, data locator, typed extras, and attached resource locator. It
//! is read-only afterwards and is discarded once dispatch completes.

mod extras;

use std::fmt;

use percent_encoding::percent_decode_str;
use serde::{Deserialize, Serialize};
use url::Url;

use crate::error::IntentError;

pub use self::extras::{ExtraValue, Extras, TypedExtras};

/// Tracing target for request decoding.
pub(crate) const REQUEST_TARGET: &str = concat!(env!("CARGO_PKG_NAME"), "::request");

/// URI-shaped data locator of a request.
///
/// The raw text is kept verbatim so recognizers can forward it unchanged;
/// the parsed parts are each optional because opaque URIs such as
/// `geo:37.7,-122.4` carry no host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataLocator {
    raw: String,
    scheme: Option<String>,
    host: Option<String>,
    path: Option<String>,
    query: Option<String>,
}

impl DataLocator {
    /// Parses a locator from its textual form.
    ///
    /// # Errors
    ///
    /// Returns [`IntentError::InvalidLocator`] when the text is not an
    /// absolute URI.
    ///
    /// # Example
    ///
    /// ```
    /// use omaps_intent::DataLocator;
    ///
    /// let locator = DataLocator::parse("https://omaps.app/c4AJ")?;
    /// assert_eq!(locator.scheme(), Some("https"));
    /// assert_eq!(locator.host(), Some("omaps.app"));
    /// assert_eq!(locator.path(), Some("/c4AJ"));
    /// # Ok::<(), omaps_intent::IntentError>(())
    /// ```
    pub fn parse(raw: &str) -> Result<Self, IntentError> {
        let url = Url::parse(raw).map_err(|source| IntentError::InvalidLocator {
            locator: raw.to_owned(),
            source,
        })?;
        // The parser lower-cases schemes; keep the delivered spelling.
        let (scheme, rest) = raw
            .trim_start()
            .split_once(':')
            .unwrap_or((url.scheme(), ""));
        Ok(Self {
            raw: raw.to_owned(),
            scheme: Some(scheme.to_owned()),
            host: url.host_str().map(str::to_owned),
            path: decoded_path(rest),
            query: url.query().map(str::to_owned),
        })
    }

    /// Builds a locator from already separated parts.
    #[must_use]
    pub fn from_parts(
        raw: impl Into<String>,
        scheme: Option<&str>,
        host: Option<&str>,
        path: Option<&str>,
        query: Option<&str>,
    ) -> Self {
        Self {
            raw: raw.into(),
            scheme: scheme.map(str::to_owned),
            host: host.map(str::to_owned),
            path: path.map(str::to_owned),
            query: query.map(str::to_owned),
        }
    }

    /// Returns the locator exactly as delivered.
    #[must_use]
    pub const fn as_str(&self) -> &str {
        self.raw.as_str()
    }

    /// Returns the URI scheme.
    #[must_use]
    pub fn scheme(&self) -> Option<&str> {
        self.scheme.as_deref()
    }

    /// Returns the URI host.
    #[must_use]
    pub fn host(&self) -> Option<&str> {
        self.host.as_deref()
    }

    /// Returns the URI path.
    #[must_use]
    pub fn path(&self) -> Option<&str> {
        self.path.as_deref()
    }

    /// Returns the URI query.
    #[must_use]
    pub fn query(&self) -> Option<&str> {
        self.query.as_deref()
    }
}

/// Extracts the percent-decoded path from the text after the scheme.
///
/// The path is taken as delivered: dot segments survive and a bare
/// authority yields an empty path. Opaque locators have no path.
fn decoded_path(scheme_specific: &str) -> Option<String> {
    let hierarchical = match scheme_specific.strip_prefix("//") {
        Some(authority_and_path) => authority_and_path
            .find(['/', '?', '#'])
            .and_then(|start| authority_and_path.get(start..))
            .unwrap_or_default(),
        None if scheme_specific.starts_with('/') => scheme_specific,
        None => return None,
    };
    let path = hierarchical
        .split(['?', '#'])
        .next()
        .unwrap_or_default();
    Some(percent_decode_str(path).decode_utf8_lossy().into_owned())
}

impl fmt::Display for DataLocator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

/// Locator of a document attached to a share-style request.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ResourceLocator(String);

impl ResourceLocator {
    /// Wraps a locator string.
    #[must_use]
    pub fn new(locator: impl Into<String>) -> Self {
        Self(locator.into())
    }

    /// Returns the locator text.
    #[must_use]
    pub const fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for ResourceLocator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&DataLocator> for ResourceLocator {
    fn from(locator: &DataLocator) -> Self {
        Self::new(locator.as_str())
    }
}

/// An inbound "open this" request.
///
/// # Example
///
/// ```
/// use omaps_intent::{ExtraValue, InboundRequest};
///
/// let request = InboundRequest::builder()
///     .action("com.mapswithme.maps.pro.action.SHOW_ON_MAP")
///     .extra("lat", ExtraValue::Double(55.75))
///     .extra("lon", ExtraValue::Double(37.61))
///     .build();
/// assert_eq!(request.action(), Some("com.mapswithme.maps.pro.action.SHOW_ON_MAP"));
/// assert!(request.extras().contains("lat"));
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct InboundRequest {
    action: Option<String>,
    data: Option<DataLocator>,
    extras: Extras,
    stream: Option<ResourceLocator>,
}

impl InboundRequest {
    /// Starts building a request.
    #[must_use]
    pub fn builder() -> InboundRequestBuilder {
        InboundRequestBuilder::default()
    }

    /// Returns the action tag.
    #[must_use]
    pub fn action(&self) -> Option<&str> {
        self.action.as_deref()
    }

    /// Returns the data locator.
    #[must_use]
    pub const fn data(&self) -> Option<&DataLocator> {
        self.data.as_ref()
    }

    /// Returns the scheme of the data locator.
    #[must_use]
    pub fn scheme(&self) -> Option<&str> {
        self.data.as_ref().and_then(DataLocator::scheme)
    }

    /// Returns the typed extras.
    #[must_use]
    pub const fn extras(&self) -> &Extras {
        &self.extras
    }

    /// Returns the attached resource locator.
    #[must_use]
    pub const fn stream(&self) -> Option<&ResourceLocator> {
        self.stream.as_ref()
    }
}

/// Builder for [`InboundRequest`].
#[derive(Debug, Default)]
pub struct InboundRequestBuilder {
    request: InboundRequest,
}

impl InboundRequestBuilder {
    /// Sets the action tag.
    #[must_use]
    pub fn action(mut self, action: impl Into<String>) -> Self {
        self.request.action = Some(action.into());
        self
    }

    /// Sets an already parsed data locator.
    #[must_use]
    pub fn data(mut self, locator: DataLocator) -> Self {
        self.request.data = Some(locator);
        self
    }

    /// Parses and sets the data locator.
    ///
    /// # Errors
    ///
    /// Returns [`IntentError::InvalidLocator`] when the text is not an
    /// absolute URI.
    pub fn data_uri(self, raw: &str) -> Result<Self, IntentError> {
        Ok(self.data(DataLocator::parse(raw)?))
    }

    /// Adds an extra.
    #[must_use]
    pub fn extra(mut self, key: impl Into<String>, value: ExtraValue) -> Self {
        self.request.extras.insert(key, value);
        self
    }

    /// Replaces all extras.
    #[must_use]
    pub fn extras(mut self, extras: Extras) -> Self {
        self.request.extras = extras;
        self
    }

    /// Sets the attached resource locator.
    #[must_use]
    pub fn stream(mut self, locator: ResourceLocator) -> Self {
        self.request.stream = Some(locator);
        self
    }

    /// Finishes the request.
    #[must_use]
    pub fn build(self) -> InboundRequest {
        self.request
    }
}

#[cfg(test)]
mod tests;
