//! Structural validation of domain names.
//!
//! Accepts presentation-format names restricted to hostname-compatible LDH
//! labels plus SRV-style underscore labels (RFC 1035, RFC 3696).

use crate::config::{ParsePolicy, MAX_DOMAIN_LEN, MAX_LABEL_LEN};
use crate::error_handling::{DomainError, InvalidReason};

/// Checks that `name` is a valid presentation-format domain name.
///
/// The trailing dot is optional. Without it the effective maximum length is
/// 253; with it, 254 is still accepted.
///
/// # Errors
///
/// Returns `DomainError::InvalidDomain` carrying the first rule the name broke.
pub fn validate(name: &str, policy: &ParsePolicy) -> Result<(), DomainError> {
    let bytes = name.as_bytes();
    let len = bytes.len();

    if len == 0 || len > MAX_DOMAIN_LEN + 1 || (len == MAX_DOMAIN_LEN + 1 && bytes[len - 1] != b'.')
    {
        return Err(DomainError::invalid(name, InvalidReason::Length));
    }
    if name == "." {
        return if policy.accept_root_and_bare_tld {
            Ok(())
        } else {
            Err(DomainError::invalid(name, InvalidReason::Root))
        };
    }
    if bytes[0] == b'.' {
        return Err(DomainError::invalid(name, InvalidReason::LeadingDot));
    }

    let mut last = b'.';
    let mut non_numeric = false;
    let mut label_len = 0usize;

    for &c in bytes {
        match c {
            b'a'..=b'z' | b'A'..=b'Z' | b'_' => {
                non_numeric = true;
                label_len += 1;
            }
            b'0'..=b'9' => label_len += 1,
            b'-' => {
                if last == b'.' {
                    return Err(DomainError::invalid(name, InvalidReason::Hyphen));
                }
                label_len += 1;
            }
            b'.' => {
                if last == b'.' {
                    return Err(DomainError::invalid(name, InvalidReason::EmptyLabel));
                }
                if last == b'-' {
                    return Err(DomainError::invalid(name, InvalidReason::Hyphen));
                }
                if label_len > MAX_LABEL_LEN {
                    return Err(DomainError::invalid(name, InvalidReason::LabelLength));
                }
                label_len = 0;
            }
            _ => return Err(DomainError::invalid(name, InvalidReason::Character)),
        }
        last = c;
    }

    if last == b'-' {
        return Err(DomainError::invalid(name, InvalidReason::Hyphen));
    }
    if label_len > MAX_LABEL_LEN {
        return Err(DomainError::invalid(name, InvalidReason::LabelLength));
    }

    let without_root = name.strip_suffix('.').unwrap_or(name);
    if !policy.accept_root_and_bare_tld && !without_root.contains('.') {
        return Err(DomainError::invalid(name, InvalidReason::BareTld));
    }

    if !non_numeric {
        return Err(DomainError::invalid(name, InvalidReason::Numeric));
    }

    Ok(())
}

/// Returns whether `label` is a valid single label (e.g. a subdomain part or
/// a second-level domain).
///
/// Up to 63 characters of `a-z`, `A-Z`, `0-9` and `-`; it cannot start or end
/// with a hyphen and cannot contain two consecutive hyphens.
pub fn is_valid_label(label: &str) -> bool {
    let bytes = label.as_bytes();
    if bytes.is_empty() || bytes.len() > MAX_LABEL_LEN {
        return false;
    }
    if bytes[0] == b'-' || bytes[bytes.len() - 1] == b'-' {
        return false;
    }
    if label.contains("--") {
        return false;
    }
    bytes
        .iter()
        .all(|c| c.is_ascii_alphanumeric() || *c == b'-')
}

/// Returns whether `name` is a wildcard record name such as `*.example.com`.
pub fn is_wildcard_name(name: &str, policy: &ParsePolicy) -> bool {
    match name.strip_prefix("*.") {
        Some(rest) => validate(rest, policy).is_ok(),
        None => false,
    }
}
