//! Navigation sink: turns a committed selection into a route transition.

use toolrack_types::{NavTarget, Route};
use tracing::debug;

/// The host router seam. The TUI's view stack implements this; tests use a
/// recording stub.
pub trait Navigator {
    fn navigate(&mut self, route: Route);
}

/// Resolve a committed target to its route.
///
/// A chosen record goes to its own path; an unmatched raw query goes to the
/// search-results route carrying the query url-encoded.
#[must_use]
pub fn resolve(target: &NavTarget) -> Route {
    match target {
        NavTarget::Tool { record } => Route::parse(&record.path),
        NavTarget::Query { query } => Route::tools_search(query.clone()),
    }
}

/// Resolve and perform the transition.
pub fn commit<N: Navigator>(target: NavTarget, navigator: &mut N) {
    let route = resolve(&target);
    debug!(%route, "commit");
    navigator.navigate(route);
}
