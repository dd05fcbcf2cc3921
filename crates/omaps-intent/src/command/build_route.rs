//! Route construction requested through the build-route action.

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::COMMAND_TARGET;
use crate::collaborators::{LocationProvider, RoutingController};
use crate::route::{Coordinates, RouterType, route_point};

/// Builds a route to a destination, optionally from an explicit start.
///
/// Start and destination addresses only name the route points; they never
/// affect which routing entry point is used.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BuildRoute {
    to: Coordinates,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    from: Option<Coordinates>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    saddr: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    daddr: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    router: Option<String>,
}

impl BuildRoute {
    /// Routes from the device position to `to`.
    ///
    /// The router token is kept verbatim and decoded at execution time.
    #[must_use]
    pub const fn towards(to: Coordinates, router: Option<String>) -> Self {
        Self {
            to,
            from: None,
            saddr: None,
            daddr: None,
            router,
        }
    }

    /// Routes between two explicit points.
    #[must_use]
    pub const fn between(
        from: Coordinates,
        to: Coordinates,
        saddr: Option<String>,
        daddr: Option<String>,
    ) -> Self {
        Self {
            to,
            from: Some(from),
            saddr,
            daddr,
            router: None,
        }
    }

    /// Attaches a router token.
    #[must_use]
    pub fn with_router(mut self, router: impl Into<String>) -> Self {
        self.router = Some(router.into());
        self
    }

    /// Returns the destination.
    #[must_use]
    pub const fn to(&self) -> Coordinates {
        self.to
    }

    /// Returns the explicit start, if any.
    #[must_use]
    pub const fn from(&self) -> Option<Coordinates> {
        self.from
    }

    /// Returns the start address.
    #[must_use]
    pub fn saddr(&self) -> Option<&str> {
        self.saddr.as_deref()
    }

    /// Returns the destination address.
    #[must_use]
    pub fn daddr(&self) -> Option<&str> {
        self.daddr.as_deref()
    }

    /// Returns the raw router token.
    #[must_use]
    pub fn router(&self) -> Option<&str> {
        self.router.as_deref()
    }

    /// Decodes the router token; absent tokens are unspecified.
    #[must_use]
    pub fn router_type(&self) -> RouterType {
        RouterType::from_token(self.router.as_deref().unwrap_or_default())
    }

    /// Hands the route to the routing controller.
    ///
    /// An explicit start honours any known travel mode, vehicle included.
    /// Without one, only codes above zero override the controller's mode,
    /// so a vehicle token falls through to the plain preparation.
    pub(crate) fn execute(
        &self,
        routing: &dyn RoutingController,
        location: &dyn LocationProvider,
    ) -> bool {
        let router = self.router_type();
        let code = router.code();
        let to = route_point(self.to, self.daddr.as_deref());

        match self.from {
            Some(from) => {
                let start = Some(route_point(from, self.saddr.as_deref()));
                if code >= 0 {
                    debug!(target: COMMAND_TARGET, %router, "routing between explicit points");
                    routing.prepare_with_router(start, to, router, true);
                } else {
                    debug!(target: COMMAND_TARGET, "routing between explicit points");
                    routing.prepare(start, to, true);
                }
            }
            None => {
                let start = location.current_position();
                debug!(
                    target: COMMAND_TARGET,
                    %router,
                    position_known = start.is_some(),
                    "routing from current position"
                );
                if code > 0 {
                    routing.prepare_with_router(start, to, router, true);
                } else {
                    routing.prepare(start, to, true);
                }
            }
        }
        true
    }
}
