//! Splitting `+++` TOML front matter from a Markdown body.

/// Front matter delimiter line.
const DELIMITER: &str = "+++";

/// Result of looking for front matter at the start of a file.
#[derive(Debug, PartialEq, Eq)]
pub enum Split<'a> {
    /// `(front matter, body)`
    Found(&'a str, &'a str),
    /// No opening delimiter: the whole file is body.
    Absent,
    /// Opening delimiter without a closing one.
    Unterminated,
}

/// Split `content` into front matter and body.
///
/// The opening `+++` must be the first non-blank line, the closing one must
/// sit on its own line.
pub fn split(content: &str) -> Split<'_> {
    let trimmed = content.trim_start();
    let Some(rest) = trimmed.strip_prefix(DELIMITER) else {
        return Split::Absent;
    };

    // Opening delimiter must end its line
    let rest = match rest.split_once('\n') {
        Some((tail, rest)) if tail.trim().is_empty() => rest,
        None if rest.trim().is_empty() => return Split::Unterminated,
        _ => return Split::Absent,
    };

    let mut offset = 0;
    for line in rest.split_inclusive('\n') {
        if line.trim_end() == DELIMITER {
            let front = &rest[..offset];
            let body = rest[offset + line.len()..].trim_start_matches(['\r', '\n']);
            return Split::Found(front, body);
        }
        offset += line.len();
    }

    Split::Unterminated
}
