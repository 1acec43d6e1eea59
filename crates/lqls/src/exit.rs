use std::process::ExitCode;

use crate::args::GlobalArgs;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Status {
    Success,
    Error,
}

/// Outcome of a command, with an optional message for the user.
#[derive(Debug)]
pub struct Exit {
    status: Status,
    message: Option<String>,
}

impl Exit {
    pub fn success() -> Self {
        Self {
            status: Status::Success,
            message: None,
        }
    }

    pub fn error() -> Self {
        Self {
            status: Status::Error,
            message: None,
        }
    }

    #[must_use]
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    /// Print the message (stderr for errors) unless `--quiet`, and convert to
    /// a process exit code.
    pub fn report(self, args: &GlobalArgs) -> ExitCode {
        if let Some(message) = self.message.filter(|_| !args.quiet) {
            match self.status {
                Status::Success => println!("{message}"),
                Status::Error => eprintln!("{message}"),
            }
        }

        match self.status {
            Status::Success => ExitCode::SUCCESS,
            Status::Error => ExitCode::FAILURE,
        }
    }
}
