//! Page routes, browser-style history, and the URL hand-off between pages.

use feedback_core::draft::FeedbackDraft;
use feedback_core::transfer::{self, TRANSFER_PARAM};
use reqwest::Url;

use crate::error::ClientError;

/// Pages of the tester-facing app.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    /// Landing page hosting the submission form.
    Home,
    /// Read-only review of a draft before it is committed.
    Confirmation,
}

impl Route {
    pub fn path(self) -> &'static str {
        match self {
            Self::Home => "/",
            Self::Confirmation => "/confirmation",
        }
    }

    pub fn from_path(path: &str) -> Option<Self> {
        match path {
            "" | "/" => Some(Self::Home),
            "/confirmation" => Some(Self::Confirmation),
            _ => None,
        }
    }
}

/// Navigation history for one tester session.
///
/// Starts on [`Route::Home`]. The history is never empty; going back from
/// the first entry stays there.
#[derive(Debug, Clone)]
pub struct Navigator {
    base: Url,
    history: Vec<Url>,
}

impl Navigator {
    pub fn new(app_url: &str) -> Result<Self, ClientError> {
        let base = Url::parse(app_url).map_err(|e| ClientError::InvalidUrl {
            url: app_url.to_string(),
            reason: e.to_string(),
        })?;
        let home = route_url(&base, Route::Home);
        Ok(Self {
            base,
            history: vec![home],
        })
    }

    pub fn url_for(&self, route: Route) -> Url {
        route_url(&self.base, route)
    }

    /// Confirmation page URL carrying `draft` in the `formData` parameter.
    pub fn confirmation_url(&self, draft: &FeedbackDraft) -> Result<Url, ClientError> {
        let payload = transfer::encode(draft)?;
        let mut url = self.url_for(Route::Confirmation);
        url.query_pairs_mut().append_pair(TRANSFER_PARAM, &payload);
        Ok(url)
    }

    pub fn push(&mut self, url: Url) {
        tracing::debug!(path = url.path(), "Navigating");
        self.history.push(url);
    }

    pub fn go(&mut self, route: Route) {
        self.push(self.url_for(route));
    }

    /// Step back one entry and return the new current URL.
    pub fn back(&mut self) -> &Url {
        if self.history.len() > 1 {
            self.history.pop();
        }
        let current = self.current();
        tracing::debug!(path = current.path(), "Navigated back");
        current
    }

    pub fn current(&self) -> &Url {
        // `history` always holds at least the initial entry.
        &self.history[self.history.len() - 1]
    }

    pub fn current_route(&self) -> Option<Route> {
        Route::from_path(self.current().path())
    }

    pub fn depth(&self) -> usize {
        self.history.len()
    }
}

/// Raw `formData` value of a URL, percent-decoded.
pub fn transfer_payload(url: &Url) -> Option<String> {
    url.query_pairs()
        .find(|(key, _)| key == TRANSFER_PARAM)
        .map(|(_, value)| value.into_owned())
}

fn route_url(base: &Url, route: Route) -> Url {
    let mut url = base.clone();
    url.set_path(route.path());
    url.set_query(None);
    url.set_fragment(None);
    url
}
