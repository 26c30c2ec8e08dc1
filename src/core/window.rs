#[cfg(windows)]
use windows::{
    Win32::Foundation::{BOOL, HWND, LPARAM, POINT},
    Win32::UI::WindowsAndMessaging::{
        EnumWindows, GetCursorPos, GetWindowTextLengthW, GetWindowTextW, IsWindow,
        SetForegroundWindow, ShowWindow, SW_MINIMIZE, SW_RESTORE,
    },
};

/// Handle to the game's top-level window
#[derive(Debug, Clone, Copy)]
pub struct GameWindow {
    #[cfg(windows)]
    hwnd: HWND,
}

#[cfg(windows)]
struct TitleSearch<'a> {
    title: &'a str,
    found: Option<HWND>,
}

#[cfg(windows)]
unsafe extern "system" fn match_title(hwnd: HWND, lparam: LPARAM) -> BOOL {
    let search = &mut *(lparam.0 as *mut TitleSearch);
    if window_title(hwnd).as_deref() == Some(search.title) {
        search.found = Some(hwnd);
        return BOOL(0); // stop enumerating
    }
    BOOL(1)
}

#[cfg(windows)]
fn window_title(hwnd: HWND) -> Option<String> {
    unsafe {
        let len = GetWindowTextLengthW(hwnd);
        if len <= 0 {
            return None;
        }
        let mut buffer = vec![0u16; len as usize + 1];
        let copied = GetWindowTextW(hwnd, &mut buffer);
        if copied <= 0 {
            return None;
        }
        Some(String::from_utf16_lossy(&buffer[..copied as usize]))
    }
}

impl GameWindow {
    /// Find a top-level window whose title is exactly `title` (case-sensitive)
    #[cfg(windows)]
    pub fn find(title: &str) -> Option<Self> {
        let mut search = TitleSearch { title, found: None };
        unsafe {
            // Returns Err when the callback stops early, which is the success case
            let _ = EnumWindows(
                Some(match_title),
                LPARAM(&mut search as *mut TitleSearch as isize),
            );
        }
        search
            .found
            .filter(|hwnd| unsafe { IsWindow(*hwnd).as_bool() })
            .map(|hwnd| Self { hwnd })
    }

    #[cfg(not(windows))]
    pub fn find(_title: &str) -> Option<Self> {
        None
    }

    /// Minimize then restore, which reliably pulls a fullscreen game forward
    #[cfg(windows)]
    pub fn bring_to_front(&self) {
        unsafe {
            let _ = ShowWindow(self.hwnd, SW_MINIMIZE);
            let _ = ShowWindow(self.hwnd, SW_RESTORE);
            let _ = SetForegroundWindow(self.hwnd);
        }
    }

    #[cfg(not(windows))]
    pub fn bring_to_front(&self) {}

    #[cfg(windows)]
    pub fn send_to_background(&self) {
        unsafe {
            let _ = ShowWindow(self.hwnd, SW_MINIMIZE);
        }
    }

    #[cfg(not(windows))]
    pub fn send_to_background(&self) {}
}

/// Locate the game window and bring it to the foreground.
/// Returns false (and logs) if no window has exactly this title.
pub fn bring_to_front(title: &str) -> bool {
    match GameWindow::find(title) {
        Some(window) => {
            window.bring_to_front();
            log::debug!("Brought '{}' to front", title);
            true
        }
        None => {
            log::error!("Window titled '{}' could not be found", title);
            false
        }
    }
}

/// Get current cursor position in screen coordinates
#[cfg(windows)]
pub fn get_cursor_pos() -> Option<(i32, i32)> {
    unsafe {
        let mut point = POINT::default();
        if GetCursorPos(&mut point).is_ok() {
            Some((point.x, point.y))
        } else {
            None
        }
    }
}

#[cfg(not(windows))]
pub fn get_cursor_pos() -> Option<(i32, i32)> {
    None
}
