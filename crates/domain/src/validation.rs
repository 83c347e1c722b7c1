//! Input checks run before any network traffic.

use crate::DomainError;
use fancy_regex::Regex;
use std::net::IpAddr;
use std::sync::LazyLock;

const MAX_LABEL_LEN: usize = 63;
const MAX_NAME_LEN: usize = 253;

static DOMAIN_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?!-)[A-Za-z0-9-]{1,63}(?<!-)(\.[A-Za-z]{2,})+$")
        .expect("domain pattern is a valid regex")
});

/// Accepts names such as `example.com` or `example.com.`; rejects the empty
/// string, a leading hyphen and names without a TLD.
pub fn validate_domain(domain: &str) -> bool {
    let relative = domain.strip_suffix('.').unwrap_or(domain);
    DOMAIN_PATTERN.is_match(relative).unwrap_or(false)
}

pub fn validate_ip(ip: &str) -> bool {
    ip.parse::<IpAddr>().is_ok()
}

/// Lowercases the name and makes it absolute (trailing dot).
pub fn canonicalize_domain(domain: &str) -> Result<String, DomainError> {
    let relative = domain.trim().strip_suffix('.').unwrap_or(domain.trim());
    if relative.is_empty() {
        return Err(DomainError::InvalidDomainName(domain.to_string()));
    }
    if relative.len() > MAX_NAME_LEN {
        return Err(DomainError::InvalidDomainName(format!(
            "{}: name exceeds {} octets",
            domain, MAX_NAME_LEN
        )));
    }

    for label in relative.split('.') {
        if label.is_empty() || label.len() > MAX_LABEL_LEN {
            return Err(DomainError::InvalidDomainName(format!(
                "{}: invalid label '{}'",
                domain, label
            )));
        }
    }

    Ok(format!("{}.", relative.to_ascii_lowercase()))
}

/// `in-addr.arpa.` / `ip6.arpa.` name used for PTR lookups of `ip`.
pub fn reverse_name(ip: &IpAddr) -> String {
    match ip {
        IpAddr::V4(ipv4) => {
            let octets = ipv4.octets();
            format!(
                "{}.{}.{}.{}.in-addr.arpa.",
                octets[3], octets[2], octets[1], octets[0]
            )
        }
        IpAddr::V6(ipv6) => {
            let mut nibbles = Vec::with_capacity(32);
            for byte in ipv6.octets().iter().rev() {
                nibbles.push(format!("{:x}", byte & 0x0f));
                nibbles.push(format!("{:x}", (byte >> 4) & 0x0f));
            }
            format!("{}.ip6.arpa.", nibbles.join("."))
        }
    }
}
