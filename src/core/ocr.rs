// External OCR binary (Capture2Text CLI) reading a screen rectangle
use std::io::Read;
use std::process::{Command, Stdio};
use std::time::Duration;
use wait_timeout::ChildExt;
use crate::core::ocr_parser::parse_upgrade_points;
use crate::core::window::bring_to_front;
use crate::error::OcrError;
use crate::settings::{OcrSettings, UiElement};

pub struct OcrCommand {
    binary: String,
    language: String,
    timeout: Duration,
}

impl OcrCommand {
    pub fn new(binary: &str, language: &str, timeout: Duration) -> Self {
        Self {
            binary: binary.to_string(),
            language: language.to_string(),
            timeout,
        }
    }

    pub fn from_settings(settings: &OcrSettings) -> Self {
        Self::new(
            &settings.binary,
            &settings.language,
            Duration::from_millis(settings.timeout_ms),
        )
    }

    /// Arguments for a screen rectangle given as (x, y, width, height)
    pub fn args(&self, rect: (i32, i32, i32, i32)) -> Vec<String> {
        let (x, y, w, h) = rect;
        vec![
            "-l".to_string(),
            self.language.clone(),
            "--screen-rect".to_string(),
            format!("{} {} {} {}", x, y, x + w, y + h),
        ]
    }

    /// Run the OCR binary on a screen rectangle and return its stdout
    pub fn read_rect(&self, rect: (i32, i32, i32, i32)) -> Result<String, OcrError> {
        let mut child = Command::new(&self.binary)
            .args(self.args(rect))
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::null())
            .spawn()
            .map_err(|e| OcrError::Spawn {
                binary: self.binary.clone(),
                source: e,
            })?;

        let status = match child.wait_timeout(self.timeout)? {
            Some(status) => status,
            None => {
                let _ = child.kill();
                let _ = child.wait();
                return Err(OcrError::Timeout(self.timeout));
            }
        };

        if !status.success() {
            return Err(OcrError::Failed(status.to_string()));
        }

        let mut raw = Vec::new();
        if let Some(mut stdout) = child.stdout.take() {
            stdout.read_to_end(&mut raw)?;
        }
        Ok(String::from_utf8_lossy(&raw).to_string())
    }
}

/// Bring the game forward and OCR the upgrade points counter.
/// Every failure is logged and yields None.
pub fn read_upgrade_points(
    window_title: &str,
    element: &UiElement,
    settings: &OcrSettings,
) -> Option<u32> {
    let Some(rect) = element.as_rect() else {
        log::error!("{}", OcrError::NotARectangle);
        return None;
    };

    if !bring_to_front(window_title) {
        return None;
    }

    let ocr = OcrCommand::from_settings(settings);
    match ocr.read_rect(rect) {
        Ok(text) => {
            log::debug!("OCR raw text: {:?}", text);
            parse_upgrade_points(&text)
        }
        Err(e) => {
            log::error!("OCR failed: {}", e);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_args_use_corner_coordinates() {
        let ocr = OcrCommand::new("ocr.exe", "English", Duration::from_secs(1));
        assert_eq!(
            ocr.args((422, 898, 60, 50)),
            vec!["-l", "English", "--screen-rect", "422 898 482 948"]
        );
    }

    #[test]
    fn test_missing_binary_is_spawn_error() {
        let ocr = OcrCommand::new(
            "definitely-not-an-ocr-binary-xyz",
            "English",
            Duration::from_secs(1),
        );
        assert!(matches!(ocr.read_rect((0, 0, 10, 10)), Err(OcrError::Spawn { .. })));
    }

    #[test]
    fn test_point_element_reads_nothing() {
        let element = UiElement::point(10, 10);
        assert_eq!(
            read_upgrade_points("No Such Window", &element, &OcrSettings::default()),
            None
        );
    }

    #[cfg(unix)]
    #[test]
    fn test_hanging_binary_times_out() {
        let dir = tempfile::TempDir::new().unwrap();
        let script = dir.path().join("slow-ocr.sh");
        std::fs::write(&script, "#!/bin/sh\nsleep 5\n").unwrap();
        use std::os::unix::fs::PermissionsExt;
        std::fs::set_permissions(&script, std::fs::Permissions::from_mode(0o755)).unwrap();

        let ocr = OcrCommand::new(script.to_str().unwrap(), "English", Duration::from_millis(100));
        assert!(matches!(ocr.read_rect((0, 0, 10, 10)), Err(OcrError::Timeout(_))));
    }

    #[cfg(unix)]
    #[test]
    fn test_stdout_is_returned() {
        let dir = tempfile::TempDir::new().unwrap();
        let script = dir.path().join("fake-ocr.sh");
        std::fs::write(&script, "#!/bin/sh\nprintf '(12)'\n").unwrap();
        use std::os::unix::fs::PermissionsExt;
        std::fs::set_permissions(&script, std::fs::Permissions::from_mode(0o755)).unwrap();

        let ocr = OcrCommand::new(script.to_str().unwrap(), "English", Duration::from_secs(5));
        let text = ocr.read_rect((0, 0, 10, 10)).unwrap();
        assert_eq!(parse_upgrade_points(&text), Some(12));
    }
}
