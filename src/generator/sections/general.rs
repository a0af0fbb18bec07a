use log::debug;

use crate::error::ConvertError;
use crate::generator::yaml::clash::ClashYamlOutput;
use crate::models::SectionBody;

/// Convert `[General]`: listen addresses and the outbound interface
///
/// A listen address without a usable `host:port` fails the whole conversion.
pub fn general_to_clash(
    mut cfg: ClashYamlOutput,
    section: SectionBody,
) -> Result<ClashYamlOutput, ConvertError> {
    for (key, value) in section {
        match key.as_str() {
            "interface" => match value {
                Some(address) => cfg.bind_address = Some(address),
                None => debug!("Ignoring interface flag without a value"),
            },
            "http-listen" => cfg.port = Some(port_from_addr(&key, value.as_deref())?),
            "socks5-listen" => cfg.socks_port = Some(port_from_addr(&key, value.as_deref())?),
            _ => {}
        }
    }
    Ok(cfg)
}

/// Extract the port of a `host:port` listen address
///
/// The port is taken after the last colon, so bracketed IPv6 hosts such as
/// `[::1]:6152` resolve too.
fn port_from_addr(key: &str, addr: Option<&str>) -> Result<u16, ConvertError> {
    let addr = addr.ok_or_else(|| ConvertError::MalformedAddress(key.to_string()))?;
    let (_, port) = addr
        .rsplit_once(':')
        .ok_or_else(|| ConvertError::MalformedAddress(addr.to_string()))?;
    port.trim()
        .parse::<u16>()
        .map_err(|_| ConvertError::InvalidPort(addr.to_string()))
}
