#[cfg(windows)]
use windows::Win32::UI::Input::KeyboardAndMouse::{GetAsyncKeyState, GetKeyState};

#[cfg(windows)]
const VK_CAPITAL: i32 = 0x14;
#[cfg(windows)]
const VK_ESCAPE: i32 = 0x1B;

/// Check if ESC key is currently down (works even when app doesn't have focus)
#[cfg(windows)]
pub fn is_escape_key_down() -> bool {
    unsafe {
        let key_state = GetAsyncKeyState(VK_ESCAPE);
        (key_state as u16) & 0x8000 != 0
    }
}

#[cfg(not(windows))]
pub fn is_escape_key_down() -> bool {
    false
}

/// Check if caps lock is toggled on
#[cfg(windows)]
pub fn is_capslock_active() -> bool {
    unsafe {
        let key_state = GetKeyState(VK_CAPITAL);
        (key_state as u16) & 0x0001 != 0
    }
}

#[cfg(not(windows))]
pub fn is_capslock_active() -> bool {
    false
}
