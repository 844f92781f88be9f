//! Same-origin path resolution.
//!
//! Resource paths that do not start with `http` are treated as served by the
//! explorer's own deployment and rewritten before dispatch.

use crate::config::ExplorerConfig;

/// Rewrites a resource path into the URL the transport should request.
pub trait ResolvePath: Send + Sync {
    fn resolve(&self, path: &str) -> String;
}

/// Leaves every path untouched.
#[derive(Debug, Clone, Copy, Default)]
pub struct IdentityResolver;

impl ResolvePath for IdentityResolver {
    fn resolve(&self, path: &str) -> String {
        path.to_string()
    }
}

/// Deployment policy: `/<base_path>/<path>` (or `/<path>` in development),
/// optionally joined onto an absolute origin.
#[derive(Debug, Clone)]
pub struct DeploymentResolver {
    origin: Option<url::Url>,
    base_path: String,
    development: bool,
}

impl DeploymentResolver {
    pub fn new(origin: Option<url::Url>, base_path: impl Into<String>, development: bool) -> Self {
        Self {
            origin,
            base_path: base_path.into().trim_matches('/').to_string(),
            development,
        }
    }

    /// Builds the policy from config. An unparseable origin is logged and ignored.
    pub fn from_config(cfg: &ExplorerConfig) -> Self {
        let origin = cfg.origin.as_deref().and_then(|o| match url::Url::parse(o) {
            Ok(u) => Some(u),
            Err(e) => {
                tracing::warn!("ignoring invalid origin {:?}: {}", o, e);
                None
            }
        });
        Self::new(origin, cfg.base_path.clone(), cfg.development)
    }
}

impl ResolvePath for DeploymentResolver {
    fn resolve(&self, path: &str) -> String {
        if path.starts_with("http") {
            return path.to_string();
        }

        let mut resolved = format!("/{}", path);
        if !self.development && !self.base_path.is_empty() {
            resolved = format!("/{}{}", self.base_path, resolved);
        }

        match &self.origin {
            Some(origin) => match origin.join(&resolved) {
                Ok(u) => u.to_string(),
                Err(e) => {
                    tracing::warn!("cannot join {} onto {}: {}", resolved, origin, e);
                    resolved
                }
            },
            None => resolved,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absolute_urls_pass_through() {
        let r = DeploymentResolver::new(None, "ir-lab-ws-23", false);
        assert_eq!(
            r.resolve("https://example.org/run-details.jsonl"),
            "https://example.org/run-details.jsonl"
        );
        assert_eq!(r.resolve("http://localhost/x"), "http://localhost/x");
    }

    #[test]
    fn same_origin_gets_base_path() {
        let r = DeploymentResolver::new(None, "ir-lab-ws-23", false);
        assert_eq!(r.resolve("topics.jsonl"), "/ir-lab-ws-23/topics.jsonl");
    }

    #[test]
    fn development_mode_skips_base_path() {
        let r = DeploymentResolver::new(None, "ir-lab-ws-23", true);
        assert_eq!(r.resolve("topics.jsonl"), "/topics.jsonl");
    }

    #[test]
    fn origin_is_joined() {
        let origin = url::Url::parse("https://example.org/ignored/").unwrap();
        let r = DeploymentResolver::new(Some(origin), "/deploy/", false);
        assert_eq!(
            r.resolve("data/topics.jsonl"),
            "https://example.org/deploy/data/topics.jsonl"
        );
    }

    #[test]
    fn from_config_ignores_bad_origin() {
        let cfg = ExplorerConfig {
            origin: Some("not a url".to_string()),
            ..ExplorerConfig::default()
        };
        let r = DeploymentResolver::from_config(&cfg);
        assert_eq!(r.resolve("a.jsonl"), "/ir-lab-ws-23/a.jsonl");
    }

    #[test]
    fn identity_keeps_path() {
        assert_eq!(IdentityResolver.resolve("a.jsonl"), "a.jsonl");
    }
}
