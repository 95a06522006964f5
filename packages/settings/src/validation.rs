// ABOUTME: Input validation for the Contact Us settings form
// ABOUTME: Comma-separated email address list checking

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Please enter valid email address(es), separated by commas.")]
    InvalidEmailList,
}

/// Validate a comma-separated list of email addresses.
///
/// Every candidate is trimmed, then must pass two independent checks: a loose
/// RFC-5321-style length/shape check and a stricter structural check on the
/// local part and domain. The first failing candidate fails the whole field;
/// the error deliberately does not say which address was rejected.
pub fn validate_email_list(raw: &str) -> Result<(), ValidationError> {
    for candidate in raw.split(',') {
        let address = candidate.trim();
        if !is_rfc5321_mailbox(address) || !is_strict_address(address) {
            return Err(ValidationError::InvalidEmailList);
        }
    }
    Ok(())
}

/// Loose syntactic check: exactly one `@`, RFC 5321 length limits, no
/// whitespace or control characters anywhere.
fn is_rfc5321_mailbox(address: &str) -> bool {
    if address.is_empty() || address.len() > 254 {
        return false;
    }
    if address
        .chars()
        .any(|c| c.is_whitespace() || c.is_control())
    {
        return false;
    }
    let Some((local, domain)) = address.split_once('@') else {
        return false;
    };
    if domain.contains('@') {
        return false;
    }
    !local.is_empty() && local.len() <= 64 && !domain.is_empty() && domain.len() <= 255
}

/// Strict structural check: dot-atom local part and a dotted hostname with an
/// alphabetic top-level label.
fn is_strict_address(address: &str) -> bool {
    let Some((local, domain)) = address.split_once('@') else {
        return false;
    };
    is_dot_atom(local) && is_hostname(domain)
}

fn is_dot_atom(local: &str) -> bool {
    if local.is_empty() {
        return false;
    }
    local
        .split('.')
        .all(|atom| !atom.is_empty() && atom.chars().all(is_atext))
}

fn is_atext(c: char) -> bool {
    c.is_ascii_alphanumeric() || "!#$%&'*+-/=?^_`{|}~".contains(c)
}

fn is_hostname(domain: &str) -> bool {
    let labels: Vec<&str> = domain.split('.').collect();
    if labels.len() < 2 {
        return false;
    }
    let tld = labels[labels.len() - 1];
    if tld.len() < 2 || !tld.chars().all(|c| c.is_ascii_alphabetic()) {
        return false;
    }
    labels.iter().all(|label| {
        !label.is_empty()
            && label.len() <= 63
            && label
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '-')
            && !label.starts_with('-')
            && !label.ends_with('-')
    })
}
