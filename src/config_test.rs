use super::*;

fn lookup(vars: &'static [(&'static str, &'static str)]) -> impl Fn(&str) -> Option<String> {
    move |name: &str| vars.iter().find(|(k, _)| *k == name).map(|(_, v)| (*v).to_owned())
}

#[test]
fn from_lookup_uses_defaults_when_unset() {
    let config = ServerConfig::from_lookup(lookup(&[])).unwrap();
    assert_eq!(config, ServerConfig::default());
    assert_eq!(config.socket_addr().to_string(), "0.0.0.0:3000");
}

#[test]
fn from_lookup_reads_port_and_bind_addr() {
    let config = ServerConfig::from_lookup(lookup(&[("PORT", "8080"), ("BIND_ADDR", "127.0.0.1")])).unwrap();
    assert_eq!(config.port, 8080);
    assert_eq!(config.socket_addr().to_string(), "127.0.0.1:8080");
}

#[test]
fn from_lookup_blank_values_fall_back() {
    let config = ServerConfig::from_lookup(lookup(&[("PORT", "  "), ("BIND_ADDR", "")])).unwrap();
    assert_eq!(config, ServerConfig::default());
}

#[test]
fn from_lookup_trims_whitespace() {
    let config = ServerConfig::from_lookup(lookup(&[("PORT", " 4000 ")])).unwrap();
    assert_eq!(config.port, 4000);
}

#[test]
fn from_lookup_rejects_invalid_port() {
    let err = ServerConfig::from_lookup(lookup(&[("PORT", "http")])).unwrap_err();
    assert!(matches!(err, ServerError::InvalidEnv { name: "PORT", .. }));
    assert_eq!(err.to_string(), "invalid PORT: \"http\"");
}

#[test]
fn from_lookup_rejects_out_of_range_port() {
    assert!(ServerConfig::from_lookup(lookup(&[("PORT", "70000")])).is_err());
}

#[test]
fn from_lookup_rejects_invalid_bind_addr() {
    let err = ServerConfig::from_lookup(lookup(&[("BIND_ADDR", "localhost")])).unwrap_err();
    assert!(matches!(err, ServerError::InvalidEnv { name: "BIND_ADDR", .. }));
}
