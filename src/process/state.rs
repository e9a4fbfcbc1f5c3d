//! Liveness check based on the state field of `/proc/<pid>/stat`.

use std::fs::File;
use std::io::{self, Read};
use std::path::Path;
use tracing::{debug, warn};

/// Extracts the single-letter process state from a `stat` line.
///
/// The line looks like `10751 (cat) R 2663 10751 ...`. The name may contain
/// spaces, parentheses and bytes that are not UTF-8, so the line is handled
/// as raw bytes and the state is taken after the last `)`.
pub fn parse_stat_state(content: &[u8]) -> Option<char> {
    let close = content.iter().rposition(|&b| b == b')')?;
    content[close + 1..]
        .iter()
        .find(|b| !b.is_ascii_whitespace())
        .map(|&b| char::from(b))
}

fn read_state(stat: &mut File) -> io::Result<char> {
    let mut content = Vec::new();
    stat.read_to_end(&mut content)?;
    parse_stat_state(&content).ok_or_else(|| io::Error::other("Invalid stat format"))
}

/// Returns whether the process behind `proc_path` is alive.
///
/// An unopenable `stat` file means the process is gone. A zombie holds no
/// memory and counts as dead.
pub fn is_alive(proc_path: &Path) -> bool {
    let mut stat = match File::open(proc_path.join("stat")) {
        Ok(f) => f,
        Err(_) => return false,
    };
    let state = match read_state(&mut stat) {
        Ok(s) => s,
        Err(e) => {
            warn!("is_alive: reading {}/stat failed: {}", proc_path.display(), e);
            return false;
        }
    };
    debug!("process state: {}", state);
    state != 'Z'
}
