//! Executable, persistable outcomes of request recognition.
//!
//! A [`Command`] is plain data: it carries every value it needs and reaches
//! the host only through the [`ExecutionContext`] handed to
//! [`Command::execute`]. Commands survive process restarts by way of
//! [`Command::encode`] and [`Command::decode`].

mod build_route;
mod open_url;

use serde::{Deserialize, Serialize};
use strum::IntoStaticStr;
use tracing::debug;

use crate::collaborators::ExecutionContext;
use crate::error::IntentError;

pub use self::build_route::BuildRoute;

/// Tracing target for command execution.
pub(crate) const COMMAND_TARGET: &str = concat!(env!("CARGO_PKG_NAME"), "::command");

/// What the map should do in response to an inbound request.
///
/// # Example
///
/// ```
/// use omaps_intent::Command;
///
/// let command = Command::ShowCountry { country_id: "Germany".into() };
/// let json = command.encode()?;
/// assert_eq!(json, r#"{"kind":"show_country","country_id":"Germany"}"#);
/// assert_eq!(Command::decode(&json)?, command);
/// # Ok::<(), omaps_intent::IntentError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, IntoStaticStr)]
#[serde(tag = "kind", rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum Command {
    /// Opens a map API or deep-link URL.
    OpenUrl {
        /// URL handed to the native parser.
        url: String,
    },
    /// Opens a third-party web map link.
    OpenHttpMapsUrl {
        /// Link as delivered.
        url: String,
    },
    /// Shows a country.
    ShowCountry {
        /// Country identifier.
        country_id: String,
    },
    /// Shows a bookmark category.
    ShowBookmarkCategory {
        /// Category identifier.
        category_id: u64,
    },
    /// Shows a single bookmark.
    ShowBookmark {
        /// Category owning the bookmark.
        category_id: u64,
        /// Bookmark identifier.
        bookmark_id: u64,
    },
    /// Shows a single track.
    ShowTrack {
        /// Category owning the track.
        category_id: u64,
        /// Track identifier.
        track_id: u64,
    },
    /// Centres the map on a coordinate.
    ShowPoint {
        /// Latitude in degrees.
        lat: f64,
        /// Longitude in degrees.
        lon: f64,
    },
    /// Builds a route.
    BuildRoute(BuildRoute),
    /// Restores an interrupted route.
    RestoreRoute,
    /// Shows a dialog unless it is already displayed.
    ShowDialog {
        /// Dialog identity.
        name: String,
    },
}

impl Command {
    /// Returns the persisted `kind` tag.
    #[must_use]
    pub fn kind(&self) -> &'static str {
        self.into()
    }

    /// Serializes the command to its persisted JSON form.
    ///
    /// # Errors
    ///
    /// Returns [`IntentError::EncodeCommand`] when serialization fails.
    pub fn encode(&self) -> Result<String, IntentError> {
        serde_json::to_string(self).map_err(IntentError::EncodeCommand)
    }

    /// Reconstructs a command from its persisted JSON form.
    ///
    /// # Errors
    ///
    /// Returns [`IntentError::DecodeCommand`] when the document is not a
    /// known command.
    pub fn decode(json: &str) -> Result<Self, IntentError> {
        serde_json::from_str(json).map_err(|source| IntentError::DecodeCommand {
            message: source.to_string(),
            source,
        })
    }

    /// Applies the command to the live map.
    ///
    /// Returns whether the command was applied; `false` marks a recoverable
    /// refusal, not an error.
    #[must_use]
    pub fn execute(&self, context: &ExecutionContext<'_>) -> bool {
        debug!(target: COMMAND_TARGET, kind = self.kind(), "executing command");
        match self {
            Self::OpenUrl { url } => open_url::execute(url, context),
            Self::OpenHttpMapsUrl { url } => context.map.show_map_for_url(url),
            Self::ShowCountry { country_id } => {
                context.map.show_country(country_id, false);
                true
            }
            Self::ShowBookmarkCategory { category_id } => {
                context.map.show_bookmark_category_on_map(*category_id);
                true
            }
            Self::ShowBookmark { bookmark_id, .. } => {
                context.map.show_bookmark_on_map(*bookmark_id);
                true
            }
            Self::ShowTrack { track_id, .. } => {
                context.map.show_track_on_map(*track_id);
                true
            }
            Self::ShowPoint { lat, lon } => {
                let rendered = context
                    .map
                    .show_map_for_url(&format!("mapsme://map?ll={lat:.6},{lon:.6}"));
                debug!(target: COMMAND_TARGET, rendered, "point shown");
                true
            }
            Self::BuildRoute(route) => route.execute(context.routing, context.location),
            Self::RestoreRoute => {
                context.routing.restore_route();
                true
            }
            Self::ShowDialog { name } => {
                if context.dialogs.is_showing(name) {
                    debug!(target: COMMAND_TARGET, name = name.as_str(), "dialog already shown");
                } else {
                    context.dialogs.show(name);
                }
                true
            }
        }
    }
}
