//! Exit code definitions for the s3path CLI
//!
//! Scripts depend on these values; existing codes never change meaning.

/// Exit codes for the s3path CLI application.
///
/// These codes follow a consistent convention to allow scripts and automation
/// to handle different error scenarios appropriately.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// Operation completed successfully
    Success = 0,

    /// General/unspecified error
    GeneralError = 1,

    /// User input error: invalid arguments, malformed URI, bad config
    UsageError = 2,

    /// Transformation rejected: empty name, invalid name or suffix
    InvalidTransform = 3,

    /// Locator is not under the requested base
    NotRelative = 4,
}

impl ExitCode {
    /// Convert exit code to i32 for use with std::process::exit
    #[inline]
    pub const fn as_i32(self) -> i32 {
        self as i32
    }

    /// Create exit code from i32 value
    ///
    /// Returns None if the value doesn't correspond to a known exit code.
    pub const fn from_i32(code: i32) -> Option<Self> {
        match code {
            0 => Some(Self::Success),
            1 => Some(Self::GeneralError),
            2 => Some(Self::UsageError),
            3 => Some(Self::InvalidTransform),
            4 => Some(Self::NotRelative),
            _ => None,
        }
    }

    /// Map a core error to the exit code scripts should see
    pub fn from_error(error: &s3path_core::Error) -> Self {
        Self::from_i32(error.exit_code()).unwrap_or(Self::GeneralError)
    }

    /// Get a human-readable description of the exit code
    pub const fn description(self) -> &'static str {
        match self {
            Self::Success => "Operation completed successfully",
            Self::GeneralError => "General error",
            Self::UsageError => "Invalid arguments or URI format",
            Self::InvalidTransform => "Invalid name or suffix transformation",
            Self::NotRelative => "Locator is not relative to the base",
        }
    }
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> Self {
        code.as_i32()
    }
}

impl std::fmt::Display for ExitCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.description(), self.as_i32())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use s3path_core::Error;

    #[test]
    fn test_exit_code_values() {
        assert_eq!(ExitCode::Success.as_i32(), 0);
        assert_eq!(ExitCode::GeneralError.as_i32(), 1);
        assert_eq!(ExitCode::UsageError.as_i32(), 2);
        assert_eq!(ExitCode::InvalidTransform.as_i32(), 3);
        assert_eq!(ExitCode::NotRelative.as_i32(), 4);
    }

    #[test]
    fn test_exit_code_from_i32() {
        assert_eq!(ExitCode::from_i32(0), Some(ExitCode::Success));
        assert_eq!(ExitCode::from_i32(3), Some(ExitCode::InvalidTransform));
        assert_eq!(ExitCode::from_i32(4), Some(ExitCode::NotRelative));
        assert_eq!(ExitCode::from_i32(99), None);
    }

    #[test]
    fn test_exit_code_from_error() {
        let err = Error::MalformedUri("x".into());
        assert_eq!(ExitCode::from_error(&err), ExitCode::UsageError);
        let err = Error::InvalidSuffix("txt".into());
        assert_eq!(ExitCode::from_error(&err), ExitCode::InvalidTransform);
        let err = Error::NotRelative("x".into());
        assert_eq!(ExitCode::from_error(&err), ExitCode::NotRelative);
        let err = Error::Io(std::io::Error::other("x"));
        assert_eq!(ExitCode::from_error(&err), ExitCode::GeneralError);
    }

    #[test]
    fn test_exit_code_into_i32() {
        let code: i32 = ExitCode::Success.into();
        assert_eq!(code, 0);

        let code: i32 = ExitCode::InvalidTransform.into();
        assert_eq!(code, 3);
    }

    #[test]
    fn test_exit_code_display() {
        let display = format!("{}", ExitCode::Success);
        assert!(display.contains("0"));
        assert!(display.contains("successfully"));

        let display = format!("{}", ExitCode::NotRelative);
        assert!(display.contains("4"));
        assert!(display.contains("not relative"));
    }
}
