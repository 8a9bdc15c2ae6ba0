//! DNS resolver initialization.

use std::sync::Arc;
use std::time::Duration;

use hickory_resolver::config::{NameServerConfigGroup, ResolverConfig, ResolverOpts};
use hickory_resolver::TokioAsyncResolver;

use crate::config::{Config, DNS_PORT};

/// Initializes the DNS resolver from the configuration.
///
/// Uses `config.nameservers` over UDP/TCP port 53 when any are given, and the
/// default upstream configuration (Google Public DNS) otherwise. The search
/// list is never applied (`ndots = 0`), so names are always queried as given.
///
/// # Returns
///
/// A configured `TokioAsyncResolver` wrapped in `Arc` for sharing across tasks.
pub fn init_resolver(config: &Config) -> Arc<TokioAsyncResolver> {
    let mut opts = ResolverOpts::default();
    opts.timeout = Duration::from_secs(config.dns_timeout_secs);
    opts.attempts = config.dns_attempts;
    opts.ndots = 0;

    Arc::new(TokioAsyncResolver::tokio(resolver_config(config), opts))
}

fn resolver_config(config: &Config) -> ResolverConfig {
    if config.nameservers.is_empty() {
        return ResolverConfig::default();
    }
    log::debug!("Using nameservers {:?}", config.nameservers);
    let group = NameServerConfigGroup::from_ips_clear(&config.nameservers, DNS_PORT, true);
    ResolverConfig::from_parts(None, Vec::new(), group)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::net::{IpAddr, Ipv4Addr};

    #[test]
    fn test_resolver_config_default() {
        let config = Config::default();
        let resolver_config = resolver_config(&config);
        assert!(!resolver_config.name_servers().is_empty());
    }

    #[test]
    fn test_resolver_config_custom_nameservers() {
        let config = Config {
            nameservers: vec![IpAddr::V4(Ipv4Addr::new(9, 9, 9, 9))],
            ..Default::default()
        };
        let resolver_config = resolver_config(&config);
        // One UDP and one TCP entry per address
        assert_eq!(resolver_config.name_servers().len(), 2);
        assert!(resolver_config
            .name_servers()
            .iter()
            .all(|ns| ns.socket_addr.ip() == IpAddr::V4(Ipv4Addr::new(9, 9, 9, 9))));
        assert!(resolver_config.search().is_empty());
    }

    #[tokio::test]
    async fn test_init_resolver() {
        let resolver = init_resolver(&Config::default());
        assert_eq!(Arc::strong_count(&resolver), 1);
    }
}
