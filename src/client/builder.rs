use std::sync::Arc;
use std::time::Duration;

use crate::api::{CallLogger, TemplateCache};
use crate::{Client, Env, Result};

use super::templates;

/// Well-formed address used to probe the API key at build time.
const KEY_PROBE_EMAIL: &str = "webmaster@fundlink.example";

const DEFAULT_TIMEOUT: Duration = Duration::from_secs(20);

/// Builder for [`Client`].
///
/// Keep this surface small and predictable: API key, environment, a uniform
/// per-request timeout, and an optional call logger.
pub struct ClientBuilder {
    api_key: String,
    env: Env,
    timeout: Duration,
    logger: Option<Arc<dyn CallLogger>>,
    base_url_override: Option<String>,
    extra_templates: Vec<(String, String)>,
    validate_key: bool,
}

impl ClientBuilder {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            env: Env::default(),
            timeout: DEFAULT_TIMEOUT,
            logger: None,
            base_url_override: None,
            extra_templates: Vec::new(),
            validate_key: true,
        }
    }

    pub fn env(mut self, env: Env) -> Self {
        self.env = env;
        self
    }

    /// Uniform timeout applied to every request this client transports.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Inject a call logger. Without one, call logging is a no-op.
    pub fn logger(mut self, logger: Arc<dyn CallLogger>) -> Self {
        self.logger = Some(logger);
        self
    }

    /// Override the environment base URL.
    ///
    /// This is primarily for testing with mock servers and for
    /// [`Env::Local`]; in production the environment's own base path is used.
    pub fn base_url_override(mut self, base_url: impl Into<String>) -> Self {
        self.base_url_override = Some(base_url.into());
        self
    }

    /// Register an additional body template alongside the built-in set.
    pub fn template(mut self, name: impl Into<String>, text: impl Into<String>) -> Self {
        self.extra_templates.push((name.into(), text.into()));
        self
    }

    /// Skip the build-time API key probe (one availability-check request).
    pub fn skip_key_validation(mut self) -> Self {
        self.validate_key = false;
        self
    }

    /// Build the client, probing the API key unless opted out.
    pub async fn build(self) -> Result<Client> {
        let http = reqwest::Client::builder().timeout(self.timeout).build()?;

        let base_path = self
            .base_url_override
            .unwrap_or_else(|| self.env.base_path().to_string());

        let mut cache = TemplateCache::new();
        templates::register_builtin(&mut cache);
        for (name, text) in &self.extra_templates {
            cache.register(name, text);
        }

        let client = Client {
            api_key: self.api_key,
            base_path,
            http,
            origin: String::new(),
            logger: self.logger,
            templates: cache,
        };

        if self.validate_key {
            client.account_availability_check(KEY_PROBE_EMAIL).await?;
        }

        Ok(client)
    }
}
