//! Handing exported files to a share action.

use super::types::ExportError;
use std::path::PathBuf;
use std::process::{Command, Stdio};

/// MIME type of exported drawings.
pub const PNG_MIME: &str = "image/png";

/// Environment variable carrying the MIME type to share commands.
pub const SHARE_MIME_ENV: &str = "KIDSDRAW_SHARE_MIME";

/// A file ready to be shared.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShareRequest {
    /// Absolute path of the exported file
    pub path: PathBuf,
    /// MIME type of the file
    pub mime: &'static str,
}

impl ShareRequest {
    /// Share request for an exported PNG.
    pub fn png(path: PathBuf) -> Self {
        Self {
            path,
            mime: PNG_MIME,
        }
    }
}

/// Abstraction over the platform share sheet.
pub trait ShareTarget: Send + Sync {
    fn share(&self, request: &ShareRequest) -> Result<(), ExportError>;
}

/// Shares by launching an external command with the file path appended.
#[derive(Debug, Clone)]
pub struct CommandShare {
    argv: Vec<String>,
}

impl CommandShare {
    /// Returns `None` for an empty argv.
    pub fn new(argv: Vec<String>) -> Option<Self> {
        if argv.is_empty() {
            None
        } else {
            Some(Self { argv })
        }
    }

    fn command(&self, request: &ShareRequest) -> Command {
        let mut command = Command::new(&self.argv[0]);
        command
            .args(&self.argv[1..])
            .arg(&request.path)
            .env(SHARE_MIME_ENV, request.mime)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null());
        command
    }
}

impl ShareTarget for CommandShare {
    fn share(&self, request: &ShareRequest) -> Result<(), ExportError> {
        match self.command(request).spawn() {
            Ok(mut child) => {
                log::info!(
                    "Launched share command '{}' for {} (pid: {})",
                    self.argv[0],
                    request.path.display(),
                    child.id()
                );
                let program = self.argv[0].clone();
                // Reap the child so long-lived hosts don't collect zombies.
                std::thread::spawn(move || match child.wait() {
                    Ok(status) if !status.success() => {
                        log::warn!("Share command '{}' exited with {}", program, status);
                    }
                    Ok(_) => {}
                    Err(err) => log::warn!("Failed to wait for share command '{}': {}", program, err),
                });
                Ok(())
            }
            Err(err) => {
                log::error!("Failed to launch share command '{}': {}", self.argv[0], err);
                Err(ExportError::Share(format!("{}: {}", self.argv[0], err)))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_argv_is_rejected() {
        assert!(CommandShare::new(Vec::new()).is_none());
    }

    #[test]
    fn command_appends_path_and_mime() {
        let share = CommandShare::new(vec!["open".into(), "--new".into()]).unwrap();
        let request = ShareRequest::png(PathBuf::from("/tmp/KidDrawingApp_1.png"));
        let command = share.command(&request);

        assert_eq!(command.get_program(), "open");
        let args: Vec<_> = command.get_args().collect();
        assert_eq!(args, ["--new", "/tmp/KidDrawingApp_1.png"]);
        let mime = command
            .get_envs()
            .find(|(key, _)| *key == SHARE_MIME_ENV)
            .and_then(|(_, value)| value);
        assert_eq!(mime, Some(std::ffi::OsStr::new("image/png")));
    }

    #[cfg(unix)]
    #[test]
    fn share_command_runs_with_path_and_mime() {
        let temp = tempfile::TempDir::new().unwrap();
        let marker = temp.path().join("shared.txt");
        let script = format!(
            "printf '%s %s' \"$1\" \"${}\" > '{}'",
            SHARE_MIME_ENV,
            marker.display()
        );
        let share = CommandShare::new(vec![
            "sh".into(),
            "-c".into(),
            script,
            "share".into(),
        ])
        .unwrap();

        share
            .share(&ShareRequest::png(PathBuf::from("/tmp/KidDrawingApp_7.png")))
            .unwrap();

        let mut written = String::new();
        for _ in 0..100 {
            written = std::fs::read_to_string(&marker).unwrap_or_default();
            if !written.is_empty() {
                break;
            }
            std::thread::sleep(std::time::Duration::from_millis(20));
        }
        assert_eq!(written, "/tmp/KidDrawingApp_7.png image/png");
    }

    #[test]
    fn missing_program_reports_share_error() {
        let share = CommandShare::new(vec!["kidsdraw-no-such-share-program".into()]).unwrap();
        let err = share
            .share(&ShareRequest::png(PathBuf::from("/tmp/x.png")))
            .unwrap_err();
        assert!(matches!(err, ExportError::Share(_)));
    }
}
