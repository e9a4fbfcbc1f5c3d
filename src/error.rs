//! Error taxonomy for the global memory reader and the fatal-exit boundary.
//!
//! Reading `/proc/meminfo` can fail in two unrecoverable ways: the file cannot
//! be opened or read at all, or a mandatory field is missing. Both surface as a
//! [`MemInfoError`] so the parsing core stays side-effect free; only [`fatal`]
//! terminates the process.
//!
//! Exit code mapping (stable, callers rely on it):
//!
//! | code | meaning                                   |
//! |------|-------------------------------------------|
//! | 102  | could not open or read `/proc/meminfo`    |
//! | 104  | mandatory entry missing in `/proc/meminfo` |

use std::io;
use std::path::PathBuf;
use tracing::error;

/// Exit status when `/proc/meminfo` cannot be opened or read.
pub const EXIT_MEMINFO_UNREADABLE: i32 = 102;

/// Exit status when a mandatory `/proc/meminfo` entry is missing.
pub const EXIT_MEMINFO_FIELD_MISSING: i32 = 104;

#[derive(Debug, thiserror::Error)]
pub enum MemInfoError {
    #[error("could not open {}: {source}", .path.display())]
    Open { path: PathBuf, source: io::Error },

    #[error("could not read {}: {source}", .path.display())]
    Read { path: PathBuf, source: io::Error },

    #[error("could not read {}: no data", .path.display())]
    Empty { path: PathBuf },

    #[error("could not find entry '{0}' in /proc/meminfo")]
    MissingField(&'static str),
}

impl MemInfoError {
    /// Process exit status associated with this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            MemInfoError::Open { .. } | MemInfoError::Read { .. } | MemInfoError::Empty { .. } => {
                EXIT_MEMINFO_UNREADABLE
            }
            MemInfoError::MissingField(_) => EXIT_MEMINFO_FIELD_MISSING,
        }
    }
}

/// Logs `err` and terminates the process with its exit code.
pub fn fatal(err: &MemInfoError) -> ! {
    error!("fatal: {}", err);
    std::process::exit(err.exit_code())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_code_mapping() {
        let open = MemInfoError::Open {
            path: PathBuf::from("/proc/meminfo"),
            source: io::Error::from(io::ErrorKind::NotFound),
        };
        let empty = MemInfoError::Empty {
            path: PathBuf::from("/proc/meminfo"),
        };
        let missing = MemInfoError::MissingField("MemTotal:");

        assert_eq!(open.exit_code(), 102);
        assert_eq!(empty.exit_code(), 102);
        assert_eq!(missing.exit_code(), 104);
    }

    #[test]
    fn test_missing_field_message_names_entry() {
        let err = MemInfoError::MissingField("SwapFree:");
        assert_eq!(
            err.to_string(),
            "could not find entry 'SwapFree:' in /proc/meminfo"
        );
    }
}
