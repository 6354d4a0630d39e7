//! # Configuration
//!
//! Configuration loading shared by the gateway and both entity
//! microservices.
//!
//! # Configuration Sources
//!
//! Configuration is loaded in the following order (later sources override earlier):
//! 1. Default values
//! 2. Configuration file (`config.toml`, or the path in `CATALOG_CONFIG_FILE`)
//! 3. Environment variables (prefixed with `CATALOG_`)
//!
//! # Environment Variables
//!
//! | Variable | Description | Default |
//! |----------|-------------|---------|
//! | `CATALOG_SUPPLIER_SERVICE_HOST` | Supplier service bind host | `0.0.0.0` |
//! | `CATALOG_SUPPLIER_SERVICE_PORT` | Supplier service port | `50053` |
//! | `CATALOG_SUPPLIER_SERVICE_ENDPOINT` | Supplier endpoint used by the gateway | `http://localhost:50053` |
//! | `CATALOG_PRODUCT_SERVICE_HOST` | Product service bind host | `0.0.0.0` |
//! | `CATALOG_PRODUCT_SERVICE_PORT` | Product service port | `50054` |
//! | `CATALOG_PRODUCT_SERVICE_ENDPOINT` | Product endpoint used by the gateway | `http://localhost:50054` |
//! | `CATALOG_REST_HOST` | REST server host | `0.0.0.0` |
//! | `CATALOG_REST_PORT` | REST server port | `3000` |
//! | `CATALOG_GRAPHQL_HOST` | GraphQL server host | `0.0.0.0` |
//! | `CATALOG_GRAPHQL_PORT` | GraphQL server port | `4000` |
//! | `CATALOG_GRAPHQL_PATH` | GraphQL endpoint path | `/graphql` |
//! | `CATALOG_STORE_BACKEND` | Record store (postgres/memory) | `postgres` |
//! | `CATALOG_STORE_URL` | Record store connection string | `postgres://localhost/catalog` |
//! | `CATALOG_LOG_LEVEL` | Log level | `info` |
//! | `CATALOG_LOG_FORMAT` | Log format (json/pretty) | `json` |
//! | `CATALOG_SERVICE_NAME` | Service name for tracing | `catalog` |
//!
//! # Examples
//!
//! ```ignore
//! use catalog_gateway::config::AppConfig;
//!
//! let config = AppConfig::load()?;
//! println!("REST server: {}:{}", config.rest.host, config.rest.port);
//! ```

use crate::domain::entities::EntityKind;
use serde::{Deserialize, Deserializer, Serialize};
use std::net::SocketAddr;
use std::path::Path;
use std::time::Duration;
use thiserror::Error;

/// Prefix of every environment override.
pub const ENV_PREFIX: &str = "CATALOG_";

// ============================================================================
// Configuration Errors
// ============================================================================

/// Configuration loading errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to read configuration file.
    #[error("failed to read config file: {0}")]
    FileRead(#[from] std::io::Error),

    /// Failed to parse configuration.
    #[error("failed to parse config: {0}")]
    Parse(String),

    /// Invalid configuration value.
    #[error("invalid config value for {field}: {message}")]
    InvalidValue {
        /// Field name.
        field: String,
        /// Error message.
        message: String,
    },
}

impl ConfigError {
    fn invalid(field: &str, message: impl Into<String>) -> Self {
        Self::InvalidValue {
            field: field.to_string(),
            message: message.into(),
        }
    }
}

fn socket_addr(field: &str, host: &str, port: u16) -> Result<SocketAddr, ConfigError> {
    format!("{host}:{port}")
        .parse()
        .map_err(|e| ConfigError::invalid(field, format!("{e}")))
}

// ============================================================================
// Entity Service Configuration
// ============================================================================

/// Configuration of one entity microservice.
///
/// The microservice binds `host:port`. The gateway dials `endpoint`, which
/// defaults to `http://localhost:<port>`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EntityServiceConfig {
    /// Bind host address.
    pub host: String,

    /// Port.
    pub port: u16,

    /// URI the gateway connects to.
    pub endpoint: Option<String>,
}

/// An entity service section as written in the file. Missing keys take the
/// defaults of the kind the section belongs to.
#[derive(Debug, Deserialize)]
struct EntityServiceSection {
    host: Option<String>,
    port: Option<u16>,
    endpoint: Option<String>,
}

impl EntityServiceSection {
    fn resolve(self, kind: EntityKind) -> EntityServiceConfig {
        let defaults = EntityServiceConfig::for_kind(kind);
        EntityServiceConfig {
            host: self.host.unwrap_or(defaults.host),
            port: self.port.unwrap_or(defaults.port),
            endpoint: self.endpoint,
        }
    }
}

fn supplier_section<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<EntityServiceConfig, D::Error> {
    EntityServiceSection::deserialize(deserializer).map(|s| s.resolve(EntityKind::Supplier))
}

fn product_section<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<EntityServiceConfig, D::Error> {
    EntityServiceSection::deserialize(deserializer).map(|s| s.resolve(EntityKind::Product))
}

impl EntityServiceConfig {
    /// Default configuration for `kind`: Supplier on `50053`, Product on
    /// `50054`.
    #[must_use]
    pub fn for_kind(kind: EntityKind) -> Self {
        let port = match kind {
            EntityKind::Supplier => 50053,
            EntityKind::Product => 50054,
        };
        Self {
            host: default_host(),
            port,
            endpoint: None,
        }
    }

    /// Returns the socket address the microservice binds.
    ///
    /// # Errors
    ///
    /// Returns an error if the address cannot be parsed.
    pub fn socket_addr(&self) -> Result<SocketAddr, ConfigError> {
        socket_addr("entity_service.host:port", &self.host, self.port)
    }

    /// Returns the URI the gateway connects to.
    #[must_use]
    pub fn client_endpoint(&self) -> String {
        self.endpoint
            .clone()
            .unwrap_or_else(|| format!("http://localhost:{}", self.port))
    }
}

// ============================================================================
// Gateway Configuration
// ============================================================================

/// REST server configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RestConfig {
    /// Server host address.
    #[serde(default = "default_host")]
    pub host: String,

    /// Server port.
    #[serde(default = "default_rest_port")]
    pub port: u16,
}

impl Default for RestConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_rest_port(),
        }
    }
}

impl RestConfig {
    /// Returns the socket address for the REST server.
    ///
    /// # Errors
    ///
    /// Returns an error if the address cannot be parsed.
    pub fn socket_addr(&self) -> Result<SocketAddr, ConfigError> {
        socket_addr("rest.host:port", &self.host, self.port)
    }
}

/// GraphQL server configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphQlConfig {
    /// Server host address.
    #[serde(default = "default_host")]
    pub host: String,

    /// Server port.
    #[serde(default = "default_graphql_port")]
    pub port: u16,

    /// Endpoint path.
    #[serde(default = "default_graphql_path")]
    pub path: String,

    /// Serve the GraphiQL explorer on `GET <path>`.
    #[serde(default = "default_true")]
    pub enable_graphiql: bool,
}

impl Default for GraphQlConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_graphql_port(),
            path: default_graphql_path(),
            enable_graphiql: true,
        }
    }
}

impl GraphQlConfig {
    /// Returns the socket address for the GraphQL server.
    ///
    /// # Errors
    ///
    /// Returns an error if the address cannot be parsed.
    pub fn socket_addr(&self) -> Result<SocketAddr, ConfigError> {
        socket_addr("graphql.host:port", &self.host, self.port)
    }
}

// ============================================================================
// Store Configuration
// ============================================================================

/// Record store backends.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum StoreBackend {
    /// PostgreSQL document table.
    #[default]
    Postgres,
    /// Process-local store. Data is lost on exit.
    Memory,
}

/// Record store configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoreConfig {
    /// Backend.
    #[serde(default)]
    pub backend: StoreBackend,

    /// Connection string.
    #[serde(default = "default_store_url")]
    pub url: String,

    /// Maximum connection pool size.
    #[serde(default = "default_pool_size")]
    pub max_connections: u32,

    /// Connection timeout in seconds.
    #[serde(default = "default_connection_timeout")]
    pub connect_timeout_secs: u64,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            backend: StoreBackend::default(),
            url: default_store_url(),
            max_connections: default_pool_size(),
            connect_timeout_secs: default_connection_timeout(),
        }
    }
}

impl StoreConfig {
    /// Returns the connection timeout.
    #[must_use]
    pub fn connect_timeout(&self) -> Duration {
        Duration::from_secs(self.connect_timeout_secs)
    }
}

// ============================================================================
// Logging Configuration
// ============================================================================

/// Log format options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// JSON format (structured logging).
    #[default]
    Json,
    /// Pretty format (human-readable).
    Pretty,
}

/// Logging configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogConfig {
    /// Log level (trace, debug, info, warn, error).
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Log format.
    #[serde(default)]
    pub format: LogFormat,

    /// Include target (module path) in logs.
    #[serde(default = "default_true")]
    pub include_target: bool,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: LogFormat::Json,
            include_target: true,
        }
    }
}

// ============================================================================
// Application Configuration
// ============================================================================

/// Main application configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Supplier microservice.
    #[serde(
        default = "default_supplier_service",
        deserialize_with = "supplier_section"
    )]
    pub supplier_service: EntityServiceConfig,

    /// Product microservice.
    #[serde(
        default = "default_product_service",
        deserialize_with = "product_section"
    )]
    pub product_service: EntityServiceConfig,

    /// REST façade.
    #[serde(default)]
    pub rest: RestConfig,

    /// GraphQL façade.
    #[serde(default)]
    pub graphql: GraphQlConfig,

    /// Record store.
    #[serde(default)]
    pub store: StoreConfig,

    /// Logging configuration.
    #[serde(default)]
    pub log: LogConfig,

    /// Service name for tracing.
    #[serde(default = "default_service_name")]
    pub service_name: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            supplier_service: default_supplier_service(),
            product_service: default_product_service(),
            rest: RestConfig::default(),
            graphql: GraphQlConfig::default(),
            store: StoreConfig::default(),
            log: LogConfig::default(),
            service_name: default_service_name(),
        }
    }
}

impl AppConfig {
    /// Loads configuration from environment variables and optional config file.
    ///
    /// # Errors
    ///
    /// Returns an error if the config file exists but cannot be read or
    /// parsed.
    pub fn load() -> Result<Self, ConfigError> {
        let mut config = Self::default();

        let config_path = std::env::var(format!("{ENV_PREFIX}CONFIG_FILE"))
            .unwrap_or_else(|_| "config.toml".to_string());

        if Path::new(&config_path).exists() {
            config = Self::from_file(&config_path)?;
        }

        config.apply_overrides(|key| std::env::var(format!("{ENV_PREFIX}{key}")).ok());

        Ok(config)
    }

    /// Loads configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn from_file(path: &str) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml(&content)
    }

    /// Parses configuration from TOML text.
    ///
    /// # Errors
    ///
    /// Returns an error if the text is not valid configuration.
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// Returns the configuration of the `kind` microservice.
    #[must_use]
    pub fn entity_service(&self, kind: EntityKind) -> &EntityServiceConfig {
        match kind {
            EntityKind::Supplier => &self.supplier_service,
            EntityKind::Product => &self.product_service,
        }
    }

    /// Applies overrides looked up by unprefixed key, e.g. `REST_PORT`.
    ///
    /// Values that fail to parse, including unknown backend or format
    /// names, are ignored and the current value is kept.
    pub fn apply_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        // Entity services
        for (prefix, service) in [
            ("SUPPLIER_SERVICE", &mut self.supplier_service),
            ("PRODUCT_SERVICE", &mut self.product_service),
        ] {
            if let Some(host) = lookup(&format!("{prefix}_HOST")) {
                service.host = host;
            }
            if let Some(port) = lookup(&format!("{prefix}_PORT"))
                && let Ok(p) = port.parse()
            {
                service.port = p;
            }
            if let Some(endpoint) = lookup(&format!("{prefix}_ENDPOINT")) {
                service.endpoint = Some(endpoint);
            }
        }

        // REST configuration
        if let Some(host) = lookup("REST_HOST") {
            self.rest.host = host;
        }
        if let Some(port) = lookup("REST_PORT")
            && let Ok(p) = port.parse()
        {
            self.rest.port = p;
        }

        // GraphQL configuration
        if let Some(host) = lookup("GRAPHQL_HOST") {
            self.graphql.host = host;
        }
        if let Some(port) = lookup("GRAPHQL_PORT")
            && let Ok(p) = port.parse()
        {
            self.graphql.port = p;
        }
        if let Some(path) = lookup("GRAPHQL_PATH") {
            self.graphql.path = path;
        }

        // Store configuration
        if let Some(backend) = lookup("STORE_BACKEND") {
            match backend.to_lowercase().as_str() {
                "postgres" => self.store.backend = StoreBackend::Postgres,
                "memory" => self.store.backend = StoreBackend::Memory,
                _ => {}
            }
        }
        if let Some(url) = lookup("STORE_URL") {
            self.store.url = url;
        }

        // Logging configuration
        if let Some(level) = lookup("LOG_LEVEL") {
            self.log.level = level;
        }
        if let Some(format) = lookup("LOG_FORMAT") {
            match format.to_lowercase().as_str() {
                "json" => self.log.format = LogFormat::Json,
                "pretty" => self.log.format = LogFormat::Pretty,
                _ => {}
            }
        }

        if let Some(name) = lookup("SERVICE_NAME") {
            self.service_name = name;
        }
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if validation fails.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.supplier_service.socket_addr()?;
        self.product_service.socket_addr()?;
        let rest = self.rest.socket_addr()?;
        let graphql = self.graphql.socket_addr()?;

        if rest.port() == graphql.port() {
            return Err(ConfigError::invalid(
                "graphql.port",
                format!("port {} is already used by the REST server", graphql.port()),
            ));
        }

        if !self.graphql.path.starts_with('/') {
            return Err(ConfigError::invalid(
                "graphql.path",
                format!("'{}' must start with '/'", self.graphql.path),
            ));
        }

        if self.store.backend == StoreBackend::Postgres && self.store.url.trim().is_empty() {
            return Err(ConfigError::invalid("store.url", "must not be empty"));
        }

        if self.store.max_connections == 0 {
            return Err(ConfigError::invalid(
                "store.max_connections",
                "must be at least 1",
            ));
        }

        let valid_levels = ["trace", "debug", "info", "warn", "error"];
        if !valid_levels.contains(&self.log.level.to_lowercase().as_str()) {
            return Err(ConfigError::invalid(
                "log.level",
                format!(
                    "invalid log level '{}', must be one of: {:?}",
                    self.log.level, valid_levels
                ),
            ));
        }

        Ok(())
    }
}

// ============================================================================
// Default Value Functions
// ============================================================================

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_supplier_service() -> EntityServiceConfig {
    EntityServiceConfig::for_kind(EntityKind::Supplier)
}

fn default_product_service() -> EntityServiceConfig {
    EntityServiceConfig::for_kind(EntityKind::Product)
}

fn default_rest_port() -> u16 {
    3000
}

fn default_graphql_port() -> u16 {
    4000
}

fn default_graphql_path() -> String {
    "/graphql".to_string()
}

fn default_true() -> bool {
    true
}

fn default_store_url() -> String {
    "postgres://localhost/catalog".to_string()
}

fn default_pool_size() -> u32 {
    10
}

fn default_connection_timeout() -> u64 {
    30
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_service_name() -> String {
    "catalog".to_string()
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn app_config_default() {
        let config = AppConfig::default();
        assert_eq!(config.supplier_service.port, 50053);
        assert_eq!(config.product_service.port, 50054);
        assert_eq!(config.rest.port, 3000);
        assert_eq!(config.graphql.port, 4000);
        assert_eq!(config.graphql.path, "/graphql");
        assert_eq!(config.store.backend, StoreBackend::Postgres);
        assert_eq!(config.log.level, "info");
    }

    #[test]
    fn client_endpoint_defaults_to_localhost() {
        let config = AppConfig::default();
        assert_eq!(
            config.entity_service(EntityKind::Supplier).client_endpoint(),
            "http://localhost:50053"
        );
        assert_eq!(
            config.entity_service(EntityKind::Product).client_endpoint(),
            "http://localhost:50054"
        );
    }

    #[test]
    fn app_config_validate_valid() {
        assert!(AppConfig::default().validate().is_ok());
    }

    #[test]
    fn app_config_validate_invalid_log_level() {
        let mut config = AppConfig::default();
        config.log.level = "invalid".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn app_config_validate_port_clash() {
        let mut config = AppConfig::default();
        config.graphql.port = config.rest.port;
        assert!(config.validate().is_err());
    }

    #[test]
    fn app_config_validate_graphql_path() {
        let mut config = AppConfig::default();
        config.graphql.path = "graphql".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn memory_backend_needs_no_url() {
        let mut config = AppConfig::default();
        config.store.backend = StoreBackend::Memory;
        config.store.url = String::new();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn rest_config_invalid_address() {
        let config = RestConfig {
            host: "invalid host with spaces".to_string(),
            ..Default::default()
        };
        assert!(config.socket_addr().is_err());
    }

    #[test]
    fn from_toml_partial_sections() {
        let config = AppConfig::from_toml(
            r#"
            service_name = "supplier-service"

            [supplier_service]
            port = 6000
            endpoint = "http://suppliers:6000"

            [store]
            backend = "memory"

            [log]
            format = "pretty"
            "#,
        )
        .unwrap();

        assert_eq!(config.service_name, "supplier-service");
        assert_eq!(config.supplier_service.host, "0.0.0.0");
        assert_eq!(config.supplier_service.client_endpoint(), "http://suppliers:6000");
        assert_eq!(config.product_service.port, 50054);
        assert_eq!(config.store.backend, StoreBackend::Memory);
        assert_eq!(config.log.format, LogFormat::Pretty);
        assert_eq!(config.rest.port, 3000);
    }

    #[test]
    fn from_toml_entity_section_without_port() {
        let config = AppConfig::from_toml(
            r#"
            [supplier_service]
            host = "127.0.0.1"

            [product_service]
            endpoint = "http://products:50054"
            "#,
        )
        .unwrap();

        assert_eq!(config.supplier_service.host, "127.0.0.1");
        assert_eq!(config.supplier_service.port, 50053);
        assert_eq!(config.product_service.host, "0.0.0.0");
        assert_eq!(config.product_service.port, 50054);
        assert_eq!(config.product_service.client_endpoint(), "http://products:50054");
    }

    #[test]
    fn from_toml_rejects_unknown_backend() {
        let err = AppConfig::from_toml("[store]\nbackend = \"mongo\"").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn overrides_replace_values() {
        let env: HashMap<&str, &str> = HashMap::from([
            ("PRODUCT_SERVICE_PORT", "7000"),
            ("PRODUCT_SERVICE_ENDPOINT", "http://products:7000"),
            ("REST_PORT", "8080"),
            ("GRAPHQL_PATH", "/api/graphql"),
            ("STORE_BACKEND", "memory"),
            ("LOG_LEVEL", "debug"),
            ("SUPPLIER_SERVICE_PORT", "not-a-port"),
        ]);

        let mut config = AppConfig::default();
        config.apply_overrides(|key| env.get(key).map(ToString::to_string));

        assert_eq!(config.product_service.port, 7000);
        assert_eq!(config.product_service.client_endpoint(), "http://products:7000");
        assert_eq!(config.rest.port, 8080);
        assert_eq!(config.graphql.path, "/api/graphql");
        assert_eq!(config.store.backend, StoreBackend::Memory);
        assert_eq!(config.log.level, "debug");
        assert_eq!(config.supplier_service.port, 50053);
    }

    #[test]
    fn overrides_ignore_unknown_names() {
        let env: HashMap<&str, &str> =
            HashMap::from([("STORE_BACKEND", "mongo"), ("LOG_FORMAT", "xml")]);

        let mut config = AppConfig::default();
        config.store.backend = StoreBackend::Memory;
        config.log.format = LogFormat::Pretty;
        config.apply_overrides(|key| env.get(key).map(ToString::to_string));

        assert_eq!(config.store.backend, StoreBackend::Memory);
        assert_eq!(config.log.format, LogFormat::Pretty);
    }
}
