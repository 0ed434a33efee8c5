//! Route gate: decides whether a request may enter the protected portal.
//!
//! Only the presence of the auth cookie is checked. The token is never
//! verified here; that is the backend's job.

use campus_core::PortalConfigSnapshot;
use tracing::debug;

pub const DEFAULT_TOKEN_COOKIE: &str = "auth-token";
pub const DEFAULT_LOGIN_PATH: &str = "/login";
pub const DEFAULT_HOME_PATH: &str = "/dashboard";

const PUBLIC_PATHS: &[&str] = &["/", "/login", "/register", "/forgot-password", "/admission"];
const PUBLIC_PREFIXES: &[&str] = &["/_next/", "/api/public/", "/static/", "/images/", "/favicon"];

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GateDecision {
    Allow,
    Redirect { location: String },
}

#[derive(Debug, Clone)]
pub struct RouteGate {
    cookie_name: String,
    login_path: String,
    home_path: String,
    public_paths: Vec<String>,
    public_prefixes: Vec<String>,
}

impl Default for RouteGate {
    fn default() -> Self {
        Self {
            cookie_name: DEFAULT_TOKEN_COOKIE.to_string(),
            login_path: DEFAULT_LOGIN_PATH.to_string(),
            home_path: DEFAULT_HOME_PATH.to_string(),
            public_paths: PUBLIC_PATHS.iter().map(|p| p.to_string()).collect(),
            public_prefixes: PUBLIC_PREFIXES.iter().map(|p| p.to_string()).collect(),
        }
    }
}

impl RouteGate {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reads `gate.cookie`, `gate.login_path` and `gate.home_path`.
    pub fn from_config(config: &PortalConfigSnapshot) -> Self {
        let mut gate = Self::default();
        if let Some(cookie) = config.get_string("gate.cookie") {
            gate.cookie_name = cookie;
        }
        if let Some(login) = config.get_string("gate.login_path") {
            gate.public_paths.push(login.clone());
            gate.login_path = login;
        }
        if let Some(home) = config.get_string("gate.home_path") {
            gate.home_path = home;
        }
        gate
    }

    pub fn with_public_path(mut self, path: impl Into<String>) -> Self {
        self.public_paths.push(path.into());
        self
    }

    pub fn with_public_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.public_prefixes.push(prefix.into());
        self
    }

    pub fn cookie_name(&self) -> &str {
        &self.cookie_name
    }

    pub fn is_public(&self, path: &str) -> bool {
        let path = strip_query(path);
        self.public_paths.iter().any(|p| p == path)
            || self.public_prefixes.iter().any(|p| path.starts_with(p.as_str()))
    }

    /// Decide for a request path and its raw `Cookie` header.
    pub fn decide(&self, path: &str, cookie_header: Option<&str>) -> GateDecision {
        let has_token = cookie_header
            .and_then(|h| cookie_value(h, &self.cookie_name))
            .is_some_and(|v| !v.is_empty());

        if has_token && strip_query(path) == self.login_path {
            return GateDecision::Redirect {
                location: self.home_path.clone(),
            };
        }

        if has_token || self.is_public(path) {
            return GateDecision::Allow;
        }

        debug!(path, "no auth cookie, redirecting to login");
        GateDecision::Redirect {
            location: format!("{}?from={}", self.login_path, urlencoding::encode(path)),
        }
    }
}

fn strip_query(path: &str) -> &str {
    path.split(['?', '#']).next().unwrap_or(path)
}

/// Value of cookie `name` in a `Cookie` header (`a=1; b=2`).
pub fn cookie_value<'a>(header: &'a str, name: &str) -> Option<&'a str> {
    header.split(';').find_map(|pair| {
        let (key, value) = pair.trim().split_once('=')?;
        (key.trim() == name).then(|| value.trim().trim_matches('"'))
    })
}
