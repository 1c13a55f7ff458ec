use std::io;

use thiserror::Error;

/// Everything that can stop a pomodoro run.
///
/// The `Display` output of each variant is exactly what gets printed to the
/// user, so keep these messages stable.
#[derive(Error, Debug)]
pub enum Error {
    #[error("pomodoro takes one arg")]
    Usage,

    #[error("unknown tomato: {0}")]
    UnknownTomato(String),

    #[error("failed to write result: {0}")]
    Io(#[from] io::Error),
}

impl Error {
    /// Process exit status for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            Error::Usage => 1,
            Error::UnknownTomato(_) => 1,
            Error::Io(_) => 1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_usage_message() {
        assert_eq!(Error::Usage.to_string(), "pomodoro takes one arg");
    }

    #[test]
    fn test_unknown_tomato_message() {
        let err = Error::UnknownTomato(String::from("roma"));
        assert_eq!(err.to_string(), "unknown tomato: roma");
    }

    #[test]
    fn test_exit_codes() {
        assert_eq!(Error::Usage.exit_code(), 1);
        assert_eq!(Error::UnknownTomato(String::new()).exit_code(), 1);

        let io_err = io::Error::new(io::ErrorKind::BrokenPipe, "closed");
        assert_eq!(Error::from(io_err).exit_code(), 1);
    }
}
