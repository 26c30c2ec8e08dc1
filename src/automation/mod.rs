pub mod context;
pub mod interaction;
pub mod replay;

#[cfg(test)]
pub mod testing {
    use super::interaction::{InputDriver, Key};
    use crate::error::ReplayError;

    #[derive(Debug, Clone, PartialEq, Eq)]
    pub enum Action {
        MoveTo(i32, i32),
        Click,
        DoubleClick,
        Press(Key),
        Combo(Key, Key),
        Type(String),
    }

    /// Records input instead of sending it
    #[derive(Default)]
    pub struct RecordingDriver {
        pub actions: Vec<Action>,
        pub cursor: Option<(i32, i32)>,
        pub capslock: bool,
        pub fail_typing: bool,
    }

    impl InputDriver for RecordingDriver {
        fn move_to(&mut self, x: i32, y: i32) -> Result<(), ReplayError> {
            self.actions.push(Action::MoveTo(x, y));
            Ok(())
        }

        fn cursor_position(&self) -> Option<(i32, i32)> {
            self.cursor
        }

        fn click(&mut self) -> Result<(), ReplayError> {
            self.actions.push(Action::Click);
            Ok(())
        }

        fn double_click(&mut self) -> Result<(), ReplayError> {
            self.actions.push(Action::DoubleClick);
            Ok(())
        }

        fn press(&mut self, key: Key) -> Result<(), ReplayError> {
            if key == Key::CapsLock {
                self.capslock = !self.capslock;
            }
            self.actions.push(Action::Press(key));
            Ok(())
        }

        fn press_combo(&mut self, modifier: Key, key: Key) -> Result<(), ReplayError> {
            self.actions.push(Action::Combo(modifier, key));
            Ok(())
        }

        fn type_text(&mut self, text: &str) -> Result<(), ReplayError> {
            if self.fail_typing {
                return Err(ReplayError::Input("keyboard unavailable".to_string()));
            }
            self.actions.push(Action::Type(text.to_string()));
            Ok(())
        }

        fn capslock_active(&self) -> bool {
            self.capslock
        }
    }
}
