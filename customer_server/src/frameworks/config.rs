use std::{env, net::IpAddr};

// Runtime/server settings read from the environment.

pub fn http_port() -> u16 {
    env::var("CUSTOMER_SERVER_PORT")
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(8080)
}

pub fn http_host() -> IpAddr {
    env::var("CUSTOMER_SERVER_HOST")
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(IpAddr::from([127, 0, 0, 1]))
}

pub fn seed_demo_data() -> bool {
    parse_flag(env::var("CUSTOMER_SEED_DEMO_DATA").ok().as_deref()).unwrap_or(true)
}

fn parse_flag(value: Option<&str>) -> Option<bool> {
    match value?.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
