use crate::DomainError;
use std::fmt::Write;
use std::net::IpAddr;

/// Removes every trailing `.` from a name.
pub fn strip_trailing_dots(name: &str) -> &str {
    name.trim_end_matches('.')
}

/// Builds the reverse-lookup name for an address given as text.
///
/// - `192.0.2.7` → `7.2.0.192.in-addr.arpa.`
/// - `2001:db8::1` → `1.0.0.0. ... .8.b.d.0.1.0.0.2.ip6.arpa.`
pub fn reverse_pointer_name(ip: &str) -> Result<String, DomainError> {
    let addr: IpAddr = ip
        .parse()
        .map_err(|_| DomainError::InvalidIpAddress(ip.to_string()))?;
    Ok(reverse_pointer_name_for(addr))
}

pub fn reverse_pointer_name_for(addr: IpAddr) -> String {
    match addr {
        IpAddr::V4(v4) => {
            let [a, b, c, d] = v4.octets();
            format!("{}.{}.{}.{}.in-addr.arpa.", d, c, b, a)
        }
        IpAddr::V6(v6) => {
            let mut name = String::with_capacity(73);
            for byte in v6.octets().iter().rev() {
                let _ = write!(name, "{:x}.{:x}.", byte & 0x0f, byte >> 4);
            }
            name.push_str("ip6.arpa.");
            name
        }
    }
}
