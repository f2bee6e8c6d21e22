use std::fs::File;
use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::{arg, value_parser, Command};
use dts_hex2dec::Converter;

const APP_HELP_TEMPLATE: &str = r#"{about-with-newline}
{author-with-newline}
{before-help}{usage-heading}
    {usage}

{all-args}{after-help}
"#;

fn main() -> anyhow::Result<()> {
    #[cfg(feature = "logging")]
    env_logger::init();

    let args = Command::new("dtsdec")
        .about("Convert hexadecimal literals in DTS files to decimal")
        .version(env!("CARGO_PKG_VERSION"))
        .author(env!("CARGO_PKG_AUTHORS"))
        .help_template(APP_HELP_TEMPLATE)
        .arg(
            arg!(<INPUT>)
                .help("Path to DTS source file")
                .value_parser(value_parser!(PathBuf)),
        )
        .arg(
            arg!([OUTPUT])
                .help("Path to write converted output (default: <INPUT>_dec.dts)")
                .value_parser(value_parser!(PathBuf)),
        )
        .get_matches();

    let input = args.get_one::<PathBuf>("INPUT").unwrap();
    let output = match args.get_one::<PathBuf>("OUTPUT") {
        Some(path) => path.clone(),
        None => default_output_path(input),
    };

    let src = File::open(input)
        .with_context(|| format!("can't open {}", input.display()))?;

    // The output goes to a temporary file that is renamed into place once
    // the conversion succeeds, so a failed run never leaves a truncated
    // file under the final name.
    let dir = output.parent().filter(|p| !p.as_os_str().is_empty());
    let tmp = tempfile::NamedTempFile::new_in(dir.unwrap_or(Path::new(".")))
        .with_context(|| format!("can't create output in {}", output.display()))?;

    Converter::new().convert(src, tmp.as_file())?;

    tmp.persist(&output)
        .with_context(|| format!("can't write {}", output.display()))?;

    println!("converted {} -> {}", input.display(), output.display());

    Ok(())
}

/// Default output path: the input path with its extension removed and
/// `_dec.dts` appended. `board.dts` becomes `board_dec.dts`.
fn default_output_path(input: &Path) -> PathBuf {
    let mut stem = input.with_extension("").into_os_string();
    stem.push("_dec.dts");
    PathBuf::from(stem)
}

#[cfg(test)]
mod tests {
    use super::default_output_path;
    use pretty_assertions::assert_eq;
    use std::path::{Path, PathBuf};

    #[test]
    fn default_naming() {
        assert_eq!(
            default_output_path(Path::new("chip.dts")),
            PathBuf::from("chip_dec.dts")
        );
        assert_eq!(
            default_output_path(Path::new("boards/imx8.dtsi")),
            PathBuf::from("boards/imx8_dec.dts")
        );
        assert_eq!(
            default_output_path(Path::new("noext")),
            PathBuf::from("noext_dec.dts")
        );
    }
}
