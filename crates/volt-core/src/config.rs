//! Runtime configuration: data location and the `/api` rewrite rule.

use std::path::{Path, PathBuf};

use crate::error::{Result, VoltError};
use crate::session::SessionStore;

/// Prefix of requests that are forwarded to the backend.
pub const API_PREFIX: &str = "/api";
/// Environment variable naming the backend base URL.
pub const API_URL_ENV: &str = "API_URL";

/// Forwards `/api/*` to an external base URL when one is configured.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ApiRewrite {
    base: Option<String>,
}

impl ApiRewrite {
    /// Serve `/api/*` locally.
    pub fn local() -> Self {
        Self::default()
    }

    /// Forward to `base`, which must be an absolute http(s) URL.
    pub fn to_base(base: &str) -> Result<Self> {
        let trimmed = base.trim().trim_end_matches('/');
        let valid = trimmed
            .strip_prefix("https://")
            .or_else(|| trimmed.strip_prefix("http://"))
            .is_some_and(|host| !host.is_empty());
        if !valid {
            return Err(VoltError::InvalidApiUrl(base.to_string()));
        }
        Ok(Self {
            base: Some(trimmed.to_string()),
        })
    }

    /// Build from an optional value, treating empty as unset.
    pub fn from_option(base: Option<&str>) -> Result<Self> {
        match base.map(str::trim).filter(|b| !b.is_empty()) {
            Some(base) => Self::to_base(base),
            None => Ok(Self::local()),
        }
    }

    /// Read [`API_URL_ENV`].
    pub fn from_env() -> Result<Self> {
        Self::from_option(std::env::var(API_URL_ENV).ok().as_deref())
    }

    pub fn base(&self) -> Option<&str> {
        self.base.as_deref()
    }

    /// Map a request path to its destination.
    ///
    /// `/api/:path*` becomes `{base}/:path*` when a base is set; every other
    /// path, and every path when no base is set, is returned unchanged.
    pub fn rewrite(&self, path: &str) -> String {
        let Some(base) = &self.base else {
            return path.to_string();
        };
        match path.strip_prefix(API_PREFIX) {
            Some("") => format!("{base}/"),
            Some(rest) if rest.starts_with('/') => format!("{base}{rest}"),
            _ => path.to_string(),
        }
    }
}

/// Resolved application configuration.
#[derive(Clone, Debug)]
pub struct AppConfig {
    pub data_dir: PathBuf,
    pub api: ApiRewrite,
}

impl AppConfig {
    pub fn new(data_dir: impl AsRef<Path>, api: ApiRewrite) -> Self {
        Self {
            data_dir: data_dir.as_ref().to_path_buf(),
            api,
        }
    }

    pub fn session_store(&self) -> SessionStore {
        SessionStore::in_dir(&self.data_dir)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn local_rewrite_is_identity() {
        let api = ApiRewrite::local();
        assert_eq!(api.rewrite("/api/auth/login/"), "/api/auth/login/");
    }

    #[test]
    fn forwards_api_paths_only() {
        let api = ApiRewrite::to_base("https://backend.example.com/").unwrap();
        assert_eq!(
            api.rewrite("/api/auth/login/"),
            "https://backend.example.com/auth/login/"
        );
        assert_eq!(api.rewrite("/api"), "https://backend.example.com/");
        assert_eq!(api.rewrite("/apiary"), "/apiary");
        assert_eq!(api.rewrite("/dashboard"), "/dashboard");
    }

    #[test]
    fn rejects_non_http_base() {
        assert!(ApiRewrite::to_base("ftp://x").is_err());
        assert!(ApiRewrite::to_base("https://").is_err());
        assert_eq!(ApiRewrite::from_option(Some("  ")).unwrap(), ApiRewrite::local());
    }

    #[test]
    fn session_store_lives_in_data_dir() {
        let config = AppConfig::new("/tmp/volt", ApiRewrite::local());
        assert_eq!(
            config.session_store().path(),
            Path::new("/tmp/volt/session.json")
        );
    }
}
