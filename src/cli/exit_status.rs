use std::process::ExitCode;

/// Exit status for the CLI.
///
/// - `Success` (0): Run completed; findings are reported but do not fail it
/// - `Error` (2): Run aborted (invalid root, missing filter list, I/O error)
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ExitStatus {
    /// Run completed.
    Success,
    /// Run aborted due to an error.
    Error,
}

impl From<ExitStatus> for ExitCode {
    fn from(status: ExitStatus) -> Self {
        match status {
            ExitStatus::Success => ExitCode::from(0),
            ExitStatus::Error => ExitCode::from(2),
        }
    }
}
