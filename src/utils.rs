use std::fs::OpenOptions;
use std::io::Write;

/// Mask a bearer token for the header badge.
///
/// Counted in characters, not bytes; tokens are operator-entered text and
/// may contain multi-byte characters.
pub fn mask_token(token: &str) -> String {
    let chars: Vec<char> = token.chars().collect();
    if chars.len() <= 15 {
        // Too short to safely show, just show dots
        return "●".repeat(chars.len());
    }

    let first: String = chars[..7].iter().collect();
    let last: String = chars[chars.len() - 6..].iter().collect();
    format!("{}...{}", first, last)
}

/// Append a diagnostic line to /tmp/royalty-console.log.
///
/// Transport failures are never shown raw to the operator; they land here.
pub fn log_debug(msg: &str) {
    let _ = OpenOptions::new()
        .create(true)
        .append(true)
        .open("/tmp/royalty-console.log")
        .and_then(|mut f| writeln!(f, "{msg}"));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_tokens_are_fully_masked() {
        assert_eq!(mask_token("abc"), "●●●");
        assert!(!mask_token("secret-token-12").contains("secret"));
    }

    #[test]
    fn multibyte_tokens_never_split_a_character() {
        // 10 characters, 30 bytes; must take the short-token path.
        assert_eq!(mask_token("ありがとうございます"), "●".repeat(10));

        // 25 characters with multi-byte text on both edges.
        let masked = mask_token("トークンtoken-トークン-0123456789");
        assert_eq!(masked, "トークンtok...456789");
    }

    #[test]
    fn long_tokens_keep_edges_only() {
        let masked = mask_token("eyJhbGciOiJIUzI1NiJ9.payload.signature");
        assert!(masked.starts_with("eyJhbGc"));
        assert!(masked.ends_with("nature"));
        assert!(masked.contains("..."));
    }
}
