use std::process::ExitCode;

/// Process exit status.
///
/// - `Success` (0): the command did its job (warnings do not change this)
/// - `Failure` (1): the command refused to act, e.g. `init` over an existing config
/// - `Error` (2): the command failed (bad project path, invalid config, unwritable report)
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ExitStatus {
    Success,
    Failure,
    Error,
}

impl From<ExitStatus> for ExitCode {
    fn from(status: ExitStatus) -> Self {
        match status {
            ExitStatus::Success => ExitCode::from(0),
            ExitStatus::Failure => ExitCode::from(1),
            ExitStatus::Error => ExitCode::from(2),
        }
    }
}
