// ScanShelf - platform/fs.rs
//
// Small filesystem helpers shared by the repository and the delete service:
// streaming line counts, artifact-suffix checks, and confinement of
// caller-supplied names to the artifact directory.

use std::io::{self, Read};
use std::path::{Component, Path, PathBuf};

/// Count the lines in a file without loading it into memory.
///
/// Every `\n` ends a line, and a trailing fragment with no terminating
/// newline counts as one more line. An empty file has zero lines.
pub fn count_lines(path: &Path) -> io::Result<u64> {
    let file = std::fs::File::open(path)?;
    count_lines_in(file)
}

/// Line-count any reader using the same rules as [`count_lines`].
pub fn count_lines_in<R: Read>(mut reader: R) -> io::Result<u64> {
    let mut buf = vec![0u8; crate::util::constants::LINE_COUNT_BUFFER_SIZE];
    let mut lines: u64 = 0;
    let mut last_byte: Option<u8> = None;

    loop {
        let n = match reader.read(&mut buf) {
            Ok(0) => break,
            Ok(n) => n,
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(e),
        };
        let chunk = &buf[..n];
        lines += chunk.iter().filter(|&&b| b == b'\n').count() as u64;
        last_byte = chunk.last().copied();
    }

    if matches!(last_byte, Some(b) if b != b'\n') {
        lines += 1;
    }
    Ok(lines)
}

/// Returns true if `file_name` ends with `suffix`, ignoring ASCII case.
pub fn has_suffix_ignore_case(file_name: &str, suffix: &str) -> bool {
    file_name.len() >= suffix.len()
        && file_name.is_char_boundary(file_name.len() - suffix.len())
        && file_name[file_name.len() - suffix.len()..].eq_ignore_ascii_case(suffix)
}

/// Strip `suffix` from the end of `file_name` (ASCII case-insensitive),
/// keeping the original case of the remaining stem.
///
/// Returns `None` when the name does not carry the suffix.
pub fn strip_suffix_ignore_case<'a>(file_name: &'a str, suffix: &str) -> Option<&'a str> {
    if has_suffix_ignore_case(file_name, suffix) {
        Some(&file_name[..file_name.len() - suffix.len()])
    } else {
        None
    }
}

/// Resolve a caller-supplied artifact name to a path directly inside `dir`.
///
/// Only a single plain filename component is accepted: anything with a
/// separator, a `.`/`..` component, a root or drive prefix is rejected
/// with a short reason.
pub fn resolve_within(dir: &Path, name: &str) -> Result<PathBuf, &'static str> {
    if name.is_empty() {
        return Err("empty artifact name");
    }
    if name.contains('/') || name.contains('\\') {
        return Err("artifact name must not contain path separators");
    }

    let mut components = Path::new(name).components();
    match (components.next(), components.next()) {
        (Some(Component::Normal(part)), None) => Ok(dir.join(part)),
        (Some(Component::CurDir), None) | (Some(Component::ParentDir), None) => {
            Err("artifact name must not be a relative directory reference")
        }
        _ => Err("artifact name must be a plain filename"),
    }
}
