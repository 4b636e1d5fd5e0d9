//! DTD text output.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use tracing::info;

use crate::formats::registry::{FormatError, Formatter};
use crate::pipeline::DtdParser;

const XML_HEADER: &str = "<?xml version=\"1.0\" encoding=\"UTF-8\"?>";

/// Re-serializes every parsed file's declarations as DTD text, depth-first
/// across the parser tree.
pub struct DtdFormatter;

impl Formatter for DtdFormatter {
    fn name(&self) -> &str {
        "dtd"
    }

    fn serialize(&self, parser: &DtdParser) -> Result<String, FormatError> {
        let mut out = String::new();
        write_node(parser, &mut out);
        Ok(out)
    }

    fn description(&self) -> &str {
        "DTD declaration text, files in resolution order"
    }
}

fn write_node(parser: &DtdParser, out: &mut String) {
    for declaration in parser.declarations() {
        out.push_str(&declaration.render());
        out.push('\n');
    }
    for child in parser.children() {
        write_node(child, out);
    }
}

/// Write one output DTD per parsed source file under `out_dir`.
///
/// The directory layout of the sources is preserved relative to their
/// longest common directory prefix; each output file starts with an XML
/// header line.
pub fn render_to_directory(parser: &DtdParser, out_dir: &Path) -> io::Result<()> {
    let mut dirs = Vec::new();
    collect_dirs(parser, &mut dirs);
    let prefix = common_prefix(&dirs);
    write_file(parser, out_dir, &prefix)
}

fn collect_dirs(parser: &DtdParser, dirs: &mut Vec<PathBuf>) {
    let dir = parser.path().parent().unwrap_or_else(|| Path::new(""));
    dirs.push(dir.to_path_buf());
    for child in parser.children() {
        collect_dirs(child, dirs);
    }
}

/// The longest directory prefix shared by all paths, component-wise.
fn common_prefix(paths: &[PathBuf]) -> PathBuf {
    let Some(first) = paths.first() else {
        return PathBuf::new();
    };
    let mut prefix = first.clone();
    for path in &paths[1..] {
        while !path.starts_with(&prefix) {
            if !prefix.pop() {
                return PathBuf::new();
            }
        }
    }
    prefix
}

fn write_file(parser: &DtdParser, out_dir: &Path, prefix: &Path) -> io::Result<()> {
    let source_dir = parser.path().parent().unwrap_or_else(|| Path::new(""));
    let relative = source_dir.strip_prefix(prefix).unwrap_or_else(|_| Path::new(""));
    let target_dir = out_dir.join(relative);
    fs::create_dir_all(&target_dir)?;

    let file_name = parser
        .path()
        .file_name()
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("out.dtd"));
    let target = target_dir.join(file_name);

    let mut out = String::from(XML_HEADER);
    out.push('\n');
    for declaration in parser.declarations() {
        out.push_str(&declaration.render());
        out.push('\n');
    }
    fs::write(&target, out)?;
    info!(path = %target.display(), "rendered");

    for child in parser.children() {
        write_file(child, out_dir, prefix)?;
    }
    Ok(())
}
