use std::net::{IpAddr, Ipv4Addr, SocketAddr};

use once_cell::sync::Lazy;

pub static CONFIG: Lazy<Config> = Lazy::new(Config::default);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub host: IpAddr,
    pub port: u16,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: IpAddr::V4(Ipv4Addr::UNSPECIFIED),
            port: 4000,
        }
    }
}

impl Config {
    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }

    /// URL a client on this machine would use to reach the server.
    pub fn public_url(&self) -> String {
        let host = if self.host.is_unspecified() || self.host.is_loopback() {
            "localhost".to_string()
        } else {
            self.host.to_string()
        };
        format!("http://{}:{}/", host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_all_interfaces_on_4000() {
        assert_eq!(CONFIG.socket_addr(), "0.0.0.0:4000".parse().unwrap());
        assert_eq!(CONFIG.public_url(), "http://localhost:4000/");
    }

    #[test]
    fn public_url_uses_concrete_host() {
        let config = Config {
            host: "10.1.2.3".parse().unwrap(),
            port: 8080,
        };
        assert_eq!(config.public_url(), "http://10.1.2.3:8080/");
    }
}
