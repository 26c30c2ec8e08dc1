use rand::Rng;
use rustautogui::RustAutoGui;
use std::thread;
use std::time::Duration;
use crate::core::input::is_capslock_active;
use crate::core::window::get_cursor_pos;
use crate::error::ReplayError;

/// Delay for a specified number of milliseconds
pub fn delay_ms(ms: u64) {
    if ms > 0 {
        thread::sleep(Duration::from_millis(ms));
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Enter,
    Delete,
    CapsLock,
    Control,
    A,
}

impl Key {
    /// Key name as understood by rustautogui
    pub fn name(self) -> &'static str {
        match self {
            Key::Enter => "enter",
            Key::Delete => "delete",
            Key::CapsLock => "capslock",
            Key::Control => "ctrl",
            Key::A => "a",
        }
    }
}

/// OS-level input injection, in absolute screen coordinates
pub trait InputDriver {
    fn move_to(&mut self, x: i32, y: i32) -> Result<(), ReplayError>;
    fn cursor_position(&self) -> Option<(i32, i32)>;
    fn click(&mut self) -> Result<(), ReplayError>;
    fn double_click(&mut self) -> Result<(), ReplayError>;
    fn press(&mut self, key: Key) -> Result<(), ReplayError>;
    fn press_combo(&mut self, modifier: Key, key: Key) -> Result<(), ReplayError>;
    fn type_text(&mut self, text: &str) -> Result<(), ReplayError>;
    fn capslock_active(&self) -> bool;
}

fn input_err(action: &str, e: impl std::fmt::Display) -> ReplayError {
    ReplayError::Input(format!("{}: {}", action, e))
}

/// Physical mouse/keyboard input through rustautogui
pub struct AutoGuiDriver {
    gui: RustAutoGui,
}

impl AutoGuiDriver {
    pub fn new() -> Result<Self, ReplayError> {
        let gui = RustAutoGui::new(false)
            .map_err(|e| input_err("Failed to initialize RustAutoGui", e))?;
        Ok(Self { gui })
    }
}

impl InputDriver for AutoGuiDriver {
    fn move_to(&mut self, x: i32, y: i32) -> Result<(), ReplayError> {
        self.gui
            .move_mouse_to_pos(x.max(0) as u32, y.max(0) as u32, 0.0)
            .map_err(|e| input_err("move", e))
    }

    fn cursor_position(&self) -> Option<(i32, i32)> {
        get_cursor_pos()
    }

    fn click(&mut self) -> Result<(), ReplayError> {
        self.gui.left_click().map_err(|e| input_err("click", e))
    }

    fn double_click(&mut self) -> Result<(), ReplayError> {
        self.gui.double_click().map_err(|e| input_err("double click", e))
    }

    fn press(&mut self, key: Key) -> Result<(), ReplayError> {
        self.gui
            .keyboard_command(key.name())
            .map_err(|e| input_err(key.name(), e))
    }

    fn press_combo(&mut self, modifier: Key, key: Key) -> Result<(), ReplayError> {
        self.gui
            .keyboard_multi_key(modifier.name(), key.name(), None)
            .map_err(|e| input_err("key combo", e))
    }

    fn type_text(&mut self, text: &str) -> Result<(), ReplayError> {
        self.gui
            .keyboard_input(text)
            .map_err(|e| input_err("typing", e))
    }

    fn capslock_active(&self) -> bool {
        is_capslock_active()
    }
}

/// Quadratic ease-out: fast start, slow finish
pub fn ease_out_quad(t: f64) -> f64 {
    let t = t.clamp(0.0, 1.0);
    t * (2.0 - t)
}

/// Intermediate pointer positions from `from` to `to` (inclusive of `to`)
pub fn eased_path(from: (i32, i32), to: (i32, i32), steps: usize) -> Vec<(i32, i32)> {
    let steps = steps.max(1);
    (1..=steps)
        .map(|i| {
            let k = ease_out_quad(i as f64 / steps as f64);
            let x = from.0 as f64 + (to.0 - from.0) as f64 * k;
            let y = from.1 as f64 + (to.1 - from.1) as f64 * k;
            (x.round() as i32, y.round() as i32)
        })
        .collect()
}

/// Target offset by a uniform random amount in [-jitter, jitter] per axis
pub fn jittered<R: Rng>(target: (i32, i32), jitter: i32, rng: &mut R) -> (i32, i32) {
    if jitter <= 0 {
        return target;
    }
    (
        target.0 + rng.gen_range(-jitter..=jitter),
        target.1 + rng.gen_range(-jitter..=jitter),
    )
}
