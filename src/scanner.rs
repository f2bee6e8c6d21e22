use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// Matches a maximal `0x`-prefixed hexadecimal literal. The word
    /// boundaries prevent matching inside longer identifiers, so neither
    /// `myvar0x10` nor `0x10abcxyz` produces a match.
    static ref HEX_LITERAL: Regex = Regex::new(r"\b0x[0-9a-fA-F]+\b").unwrap();
}

/// A hexadecimal literal found in the source text.
///
/// `start` and `end` are byte offsets into the scanned text, with `end`
/// exclusive. `text` is the matched literal, including the `0x` prefix.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HexLiteral<'src> {
    pub start: usize,
    pub end: usize,
    pub text: &'src str,
}

impl<'src> HexLiteral<'src> {
    /// The hexadecimal digits of the literal, without the `0x` prefix.
    pub fn digits(&self) -> &'src str {
        &self.text[2..]
    }
}

/// Returns an iterator over all hexadecimal literals in `src`, scanning
/// left to right. Matches never overlap.
pub fn scan(src: &str) -> impl Iterator<Item = HexLiteral<'_>> {
    HEX_LITERAL.find_iter(src).map(|m| HexLiteral {
        start: m.start(),
        end: m.end(),
        text: m.as_str(),
    })
}

#[cfg(test)]
mod tests {
    use super::scan;
    use pretty_assertions::assert_eq;

    fn matches(src: &str) -> Vec<&str> {
        scan(src).map(|lit| lit.text).collect()
    }

    #[test]
    fn literals() {
        assert_eq!(matches("reg = <0x0 0x1000>;"), vec!["0x0", "0x1000"]);
        assert_eq!(matches("0xDEADbeef"), vec!["0xDEADbeef"]);
        assert_eq!(matches("0x10,0x20"), vec!["0x10", "0x20"]);
    }

    #[test]
    fn word_boundaries() {
        assert!(matches("myvar0x10").is_empty());
        assert!(matches("0x10abcxyz").is_empty());
        assert!(matches("0x").is_empty());
        assert!(matches("x10").is_empty());
        // Punctuation and whitespace are valid boundaries.
        assert_eq!(matches("<0xff>"), vec!["0xff"]);
    }

    #[test]
    fn offsets() {
        let lits: Vec<_> = scan("a = 0x1A;").collect();
        assert_eq!(lits.len(), 1);
        assert_eq!(lits[0].start, 4);
        assert_eq!(lits[0].end, 8);
        assert_eq!(lits[0].digits(), "1A");
    }
}
