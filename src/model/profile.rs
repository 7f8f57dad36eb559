use std::hash::{Hash, Hasher};
use std::net::Ipv6Addr;

use serde::{Deserialize, Serialize};

/// Default port used when a share link carries none.
pub const DEFAULT_PORT: u16 = 8388;
/// Default per-server timeout in seconds.
pub const DEFAULT_TIMEOUT_SEC: u32 = 5;
/// Upper bound for the per-server timeout; mutators clamp against it.
pub const MAX_TIMEOUT_SEC: u32 = 20;

/// One configured upstream proxy endpoint.
///
/// Built either as a default-valued placeholder for interactive editing
/// (`ServerProfile::new()`) or by the share-link parser. The configuration
/// layer owning the server list serializes it as-is, e.g.:
/// `{ "host":"example.com", "port":8388, "method":"aes-256-cfb", ... }`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerProfile {
    pub host: String,
    pub port: u16,
    pub password: String,
    pub method: String,
    pub plugin: String,
    pub plugin_opts: String,
    pub remarks: String,
    pub timeout_sec: u32,
}

impl Default for ServerProfile {
    fn default() -> Self {
        Self {
            host: String::new(),
            port: DEFAULT_PORT,
            password: String::new(),
            method: "aes-256-cfb".into(),
            plugin: String::new(),
            plugin_opts: String::new(),
            remarks: String::new(),
            timeout_sec: DEFAULT_TIMEOUT_SEC,
        }
    }
}

/// Identity is `(host, port)` only; credentials, remarks and plugin settings
/// never distinguish two profiles. `Hash` follows the same key so set/map
/// dedup agrees with `==`.
impl PartialEq for ServerProfile {
    fn eq(&self, other: &Self) -> bool {
        self.host == other.host && self.port == other.port
    }
}

impl Eq for ServerProfile {}

impl Hash for ServerProfile {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.host.hash(state);
        self.port.hash(state);
    }
}

impl ServerProfile {
    /// A placeholder profile with every field at its default.
    pub fn new() -> Self {
        Self::default()
    }

    /// Stable lookup/dedup key, `"host:port"`. Computed unconditionally,
    /// consistent with equality.
    pub fn identifier(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Human-readable label for list UIs.
    ///
    /// `translate` is the caller's localization lookup; it is only consulted
    /// for the `"New server"` placeholder shown while `host` is still empty.
    /// A literal IPv6 host is bracketed (`[::1]:8388`); classification is by
    /// address parsing, never by name lookup.
    pub fn friendly_name(&self, translate: impl Fn(&str) -> String) -> String {
        if self.host.is_empty() {
            return translate("New server");
        }
        let endpoint = if self.host.parse::<Ipv6Addr>().is_ok() {
            format!("[{}]:{}", self.host, self.port)
        } else {
            format!("{}:{}", self.host, self.port)
        };
        if self.remarks.is_empty() {
            endpoint
        } else {
            format!("{} ({})", self.remarks, endpoint)
        }
    }

    /// Set the per-server timeout, clamped into `1..=MAX_TIMEOUT_SEC`.
    /// The parser never touches this field; only editors do.
    pub fn set_timeout_sec(&mut self, secs: u32) {
        self.timeout_sec = secs.clamp(1, MAX_TIMEOUT_SEC);
    }
}
