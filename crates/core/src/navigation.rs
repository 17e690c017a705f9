//! Client-side route model shared by the shell renderer and the front-end
//! contract. Exactly one [`Route`] is active at any time.

use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Route {
    Home,
    Grader,
    Market,
    Oracle,
    Portfolio,
    Compass,
}

impl Route {
    pub const ALL: [Route; 6] = [
        Route::Home,
        Route::Grader,
        Route::Market,
        Route::Oracle,
        Route::Portfolio,
        Route::Compass,
    ];

    pub fn path(self) -> &'static str {
        match self {
            Route::Home => "/",
            Route::Grader => "/grader",
            Route::Market => "/market",
            Route::Oracle => "/oracle",
            Route::Portfolio => "/portfolio",
            Route::Compass => "/compass",
        }
    }

    /// Stable identifier used in markup and serialized state.
    pub fn key(self) -> &'static str {
        match self {
            Route::Home => "home",
            Route::Grader => "grader",
            Route::Market => "market",
            Route::Oracle => "oracle",
            Route::Portfolio => "portfolio",
            Route::Compass => "compass",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Route::Home => "Home",
            Route::Grader => "AI Grader",
            Route::Market => "Market Scanner",
            Route::Oracle => "Oracle",
            Route::Portfolio => "Portfolio",
            Route::Compass => "Compass",
        }
    }

    /// Endpoints the view issues when it mounts or submits, as `METHOD /path`.
    /// The built-in shell reads its fetch targets from this list.
    pub fn api_calls(self) -> &'static [&'static str] {
        match self {
            Route::Home => &["GET /api/health"],
            Route::Grader => &["POST /api/grader/predict", "POST /api/grade-card"],
            Route::Market => &["GET /api/market/top-picks"],
            Route::Oracle => &["POST /api/oracle/ask"],
            Route::Portfolio => &["GET /api/portfolio/value"],
            Route::Compass => &[],
        }
    }

    /// Resolves a browser path by its first segment. Query strings, fragments
    /// and trailing slashes are ignored. Returns `None` for unknown paths.
    pub fn from_path(path: &str) -> Option<Route> {
        let path = path.split(['?', '#']).next().unwrap_or_default();
        let first = path.trim_start_matches('/').split('/').next().unwrap_or_default();
        if first.is_empty() {
            return Some(Route::Home);
        }
        Route::ALL
            .into_iter()
            .find(|r| r.path().trim_start_matches('/') == first)
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavEvent {
    /// In-app link click.
    LinkClicked(Route),
    /// Direct URL entry or page reload.
    UrlEntered(String),
}

#[derive(Debug, Clone)]
pub struct NavLink {
    pub route: Route,
    pub path: &'static str,
    pub label: &'static str,
    pub active: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavState {
    active: Route,
}

impl Default for NavState {
    fn default() -> Self {
        Self {
            active: Route::Home,
        }
    }
}

impl NavState {
    /// State after loading the app at `path`. Unknown paths land on home.
    pub fn from_deep_link(path: &str) -> Self {
        let mut state = Self::default();
        state.apply(NavEvent::UrlEntered(path.to_string()));
        state
    }

    pub fn active(&self) -> Route {
        self.active
    }

    pub fn is_active(&self, route: Route) -> bool {
        self.active == route
    }

    /// Both triggers go through the same resolution, so a deep link and a
    /// click on the link to the same path end in the same state.
    pub fn apply(&mut self, event: NavEvent) -> Route {
        self.active = match event {
            NavEvent::LinkClicked(route) => route,
            NavEvent::UrlEntered(path) => Route::from_path(&path).unwrap_or(Route::Home),
        };
        self.active
    }

    pub fn links(&self) -> Vec<NavLink> {
        Route::ALL
            .into_iter()
            .map(|route| NavLink {
                route,
                path: route.path(),
                label: route.label(),
                active: self.is_active(route),
            })
            .collect()
    }
}
