use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use log::debug;
use url::{Host, Url};

use crate::model::profile::{ServerProfile, DEFAULT_PORT};
use crate::parser::errors::ShareLinkError;

const SCHEME_PREFIX: &str = "ss://";

/// Decode a batch of `ss://` share links, one per line.
///
/// Best-effort by contract: every line is an independent attempt, and a line
/// that is blank, carries another scheme, or is malformed in any way is
/// dropped without failing the batch. The result keeps the relative order of
/// the source lines. Pure function of its input; safe to call from anywhere.
pub fn parse_all(text: &str) -> Vec<ServerProfile> {
    let mut profiles = Vec::new();
    for line in text.split(['\r', '\n']) {
        let line = line.trim();
        if !has_scheme_prefix(line) {
            continue;
        }
        match parse_line(line) {
            Ok(profile) => profiles.push(profile),
            Err(e) => debug!("skipping share link {:?}: {}", line, e),
        }
    }
    profiles
}

fn has_scheme_prefix(line: &str) -> bool {
    let bytes = line.as_bytes();
    bytes.len() >= SCHEME_PREFIX.len()
        && bytes[..SCHEME_PREFIX.len()].eq_ignore_ascii_case(SCHEME_PREFIX.as_bytes())
}

/// Decode one trimmed line that is known to start with the scheme prefix.
fn parse_line(line: &str) -> Result<ServerProfile, ShareLinkError> {
    let body = &line[SCHEME_PREFIX.len()..];

    // The base64 segment runs up to the first userinfo/path/fragment
    // delimiter; in the legacy form the whole body is encoded.
    let encoded = match body.find(['@', '/', '#']) {
        Some(idx) => &body[..idx],
        None => body,
    };
    let decoded = decode_web_safe_base64(encoded)?;

    // Splice the decoded text back in place of the encoded segment and parse
    // the result as a generic URI. Covers both the SIP002 form (segment is
    // the user-info) and the legacy form (segment is the whole authority).
    let reconstructed = format!(
        "{}{}{}",
        &line[..SCHEME_PREFIX.len()],
        decoded,
        &body[encoded.len()..]
    );
    let uri = Url::parse(&reconstructed)?;

    // A credential pair is mandatory; no `:` in the user-info invalidates
    // the whole entry. Either side of the `:` may be empty, which
    // `Url::password()` cannot represent, so the pair is taken from the raw
    // authority text instead.
    let user_info = urlencoding::decode(user_info_of(&reconstructed))?;
    let (method, password) = user_info
        .split_once(':')
        .ok_or(ShareLinkError::BadUserInfo)?;
    let method = method.to_string();
    let password = password.to_string();

    let host = match uri.host() {
        Some(Host::Ipv6(addr)) => addr.to_string(),
        Some(Host::Ipv4(addr)) => addr.to_string(),
        Some(Host::Domain(domain)) => domain.to_string(),
        None => String::new(),
    };
    let remarks = urlencoding::decode(uri.fragment().unwrap_or(""))?.into_owned();

    // `plugin=<name>;<opts>`; only the first `;` separates, extra ones stay
    // inside the options blob.
    let plugin_value = uri
        .query_pairs()
        .find(|(key, _)| key == "plugin")
        .map(|(_, value)| value.into_owned())
        .unwrap_or_default();
    let (plugin, plugin_opts) = match plugin_value.split_once(';') {
        Some((name, opts)) => (name.to_string(), opts.to_string()),
        None => (plugin_value, String::new()),
    };

    Ok(ServerProfile {
        host,
        port: uri.port().unwrap_or(DEFAULT_PORT),
        password,
        method,
        plugin,
        plugin_opts,
        remarks,
        ..ServerProfile::default()
    })
}

/// User-info of a reconstructed line: everything between the scheme prefix
/// and the last `@` of the authority, empty when there is none.
fn user_info_of(uri: &str) -> &str {
    let body = &uri[SCHEME_PREFIX.len()..];
    let authority = match body.find(['/', '?', '#']) {
        Some(idx) => &body[..idx],
        None => body,
    };
    match authority.rfind('@') {
        Some(at) => &authority[..at],
        None => "",
    }
}

/// Normalize a web-safe, possibly unpadded base64 segment and decode it to
/// UTF-8 text: `-`/`_` back to `+`/`/`, then right-pad with `=` to a
/// multiple of four characters.
fn decode_web_safe_base64(segment: &str) -> Result<String, ShareLinkError> {
    let mut normalized = segment.replace('-', "+").replace('_', "/");
    let pad = (4 - normalized.len() % 4) % 4;
    normalized.extend(std::iter::repeat('=').take(pad));
    let bytes = BASE64.decode(normalized)?;
    Ok(String::from_utf8(bytes)?)
}
