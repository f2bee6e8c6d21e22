use std::borrow::Cow;

use log::debug;

use crate::context::{classify, LexicalContext};
use crate::scanner::scan;

/// Rewrites every in-code hexadecimal literal in `src` as decimal.
///
/// Literals inside strings and comments, and all text in between literals,
/// are copied unchanged. Returns `Cow::Borrowed` when nothing was converted.
pub fn rewrite(src: &str) -> Cow<str> {
    let mut out = String::new();
    let mut copied = 0;
    let mut seen = 0;
    let mut converted = 0;

    for lit in scan(src) {
        seen += 1;

        let replacement = match classify(src, lit.start, lit.end) {
            // Overflow of u128 keeps the literal as-is. The scanner only
            // hands out hex digits, so nothing else can fail here.
            LexicalContext::Code => match u128::from_str_radix(lit.digits(), 16) {
                Ok(value) => value.to_string(),
                Err(_) => continue,
            },
            _ => continue,
        };

        out.push_str(&src[copied..lit.start]);
        out.push_str(&replacement);
        copied = lit.end;
        converted += 1;
    }

    debug!("{seen} hex literals found, {converted} converted");

    if converted == 0 {
        return Cow::Borrowed(src);
    }

    out.push_str(&src[copied..]);
    Cow::Owned(out)
}
