/*! Lexical context classification for hexadecimal literals.

Decides whether a literal at some span of the document sits in live code
or inside a string literal, a `//` comment, or a `/* */` comment. The three
tests are heuristics: quote counting does not track escaped quotes, and
block comments do not nest. Classification is a plain text scan, not a
tokenizer.
*/

/// The lexical context surrounding a literal, which determines whether it
/// gets rewritten. Only literals in [`LexicalContext::Code`] are converted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LexicalContext {
    Code,
    StringLiteral,
    LineComment,
    BlockComment,
}

/// Classifies the context of the span `[start, end)` within `src`.
///
/// The three non-code tests are independent; the span is considered code
/// only when all of them are negative. When more than one holds, the
/// contexts are reported with string literal taking precedence over line
/// comment, and line comment over block comment.
pub fn classify(src: &str, start: usize, end: usize) -> LexicalContext {
    if in_string(src, start, end) {
        LexicalContext::StringLiteral
    } else if in_line_comment(src, start) {
        LexicalContext::LineComment
    } else if in_block_comment(src, start, end) {
        LexicalContext::BlockComment
    } else {
        LexicalContext::Code
    }
}

/// Quote-parity test: the span is inside a string if an odd number of `"`
/// characters precede it and an odd number follow it. Escaped quotes are
/// not tracked; the parity rule is global to the document.
pub fn in_string(src: &str, start: usize, end: usize) -> bool {
    let quotes_before = src[..start].matches('"').count();
    let quotes_after = src[end..].matches('"').count();
    quotes_before % 2 == 1 && quotes_after % 2 == 1
}

/// The span is inside a `//` comment if its line contains a `//` marker
/// before the span's start.
pub fn in_line_comment(src: &str, start: usize) -> bool {
    let line_start = match src[..start].rfind('\n') {
        Some(pos) => pos + 1,
        None => 0,
    };
    src[line_start..start].contains("//")
}

/// The span is inside a `/* */` comment if the nearest `/*` before it is
/// not yet closed when the span begins, and a `*/` appears somewhere after
/// the span. Nested block comments are not supported; the first pair found
/// governs.
pub fn in_block_comment(src: &str, start: usize, end: usize) -> bool {
    let last_open = src[..start].rfind("/*");
    let last_close = src[..start].rfind("*/");

    let open_at_start = match (last_open, last_close) {
        (Some(open), Some(close)) => open > close,
        (Some(_), None) => true,
        (None, _) => false,
    };

    open_at_start && src[end..].contains("*/")
}
