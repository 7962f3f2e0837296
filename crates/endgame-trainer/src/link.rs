//! Practice links for generated positions.

use urlencoding::encode;

/// Builds the link that opens `fen` against the computer on the practice site.
///
/// Slashes between ranks stay readable; everything else outside the
/// unreserved set is percent-escaped.
pub fn practice_link(link_base: &str, fen: &str) -> String {
    let escaped = encode(fen).replace("%2F", "/");
    format!("{}?fen={}#ai", link_base, escaped)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DEFAULT_LINK_BASE;

    #[test]
    fn escapes_spaces_and_keeps_slashes() {
        let fen = "4k3/8/8/8/8/8/8/3QK3 w - - 0 1";
        assert_eq!(
            practice_link(DEFAULT_LINK_BASE, fen),
            "https://lichess.org/?fen=4k3/8/8/8/8/8/8/3QK3%20w%20-%20-%200%201#ai"
        );
    }

    #[test]
    fn uses_the_configured_base() {
        let link = practice_link("http://localhost:8080/analysis", "8/8/8/8/8/8/8/8 w - - 0 1");
        assert!(link.starts_with("http://localhost:8080/analysis?fen=8/8/"));
        assert!(link.ends_with("#ai"));
    }
}
