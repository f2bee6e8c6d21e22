/*! Converts hexadecimal literals in device-tree source files to decimal

DTS files routinely mix hexadecimal register values with C-style comments
and double-quoted strings. This crate rewrites every `0x...` literal that
appears in live code to its decimal form, while leaving hex-looking
substrings inside strings, `//` comments and `/* */` comments untouched.
Everything that is not a converted literal is preserved byte-for-byte.

# Usage

```no_run
# use std::fs::File;
use dts_hex2dec::Converter;

let input = File::open("board.dts").unwrap();
let output = File::create("board_dec.dts").unwrap();

Converter::new().convert(input, output).unwrap();
```
*/
use std::io;

use thiserror::Error;

pub use crate::context::{classify, LexicalContext};
pub use crate::rewriter::rewrite;
pub use crate::scanner::{scan, HexLiteral};

mod context;
mod rewriter;
mod scanner;


/// Errors returned by [`Converter::convert`].
#[derive(Error, Debug)]
pub enum Error {
    /// Error while reading from input.
    #[error("Read error")]
    ReadError(io::Error),

    /// Error while writing to output.
    #[error("Write error")]
    WriteError(io::Error),
}

/// Rewrites hexadecimal literals in DTS source code as decimal.
pub struct Converter {}

impl Default for Converter {
    fn default() -> Self {
        Self::new()
    }
}

impl Converter {
    /// Creates a new converter.
    pub fn new() -> Self {
        Converter {}
    }

    /// Reads DTS source code from `input` and writes it into `output` with
    /// in-code hexadecimal literals converted to decimal.
    ///
    /// The input must be valid UTF-8. Returns `true` if at least one literal
    /// was converted, `false` if the output is identical to the input.
    pub fn convert<R, W>(&self, mut input: R, mut output: W) -> Result<bool, Error>
    where
        R: io::Read,
        W: io::Write,
    {
        let mut src = String::new();

        input.read_to_string(&mut src).map_err(Error::ReadError)?;

        let result = rewriter::rewrite(&src);
        let changed = matches!(result, std::borrow::Cow::Owned(_));

        output.write_all(result.as_bytes()).map_err(Error::WriteError)?;

        Ok(changed)
    }
}
