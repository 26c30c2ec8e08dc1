// Reproduces a trait selection on the in-game trait screen
use crate::automation::context::{AutomationContext, CancelSignal};
use crate::automation::interaction::{delay_ms, InputDriver, Key};
use crate::error::ReplayError;
use crate::settings::{AutomationSettings, UiCoordinates};

pub struct TraitReplayer<D: InputDriver, C: CancelSignal> {
    ctx: AutomationContext<D, C>,
    coords: UiCoordinates,
    dialog_wait_ms: u64,
    focus_settle_ms: u64,
}

impl<D: InputDriver, C: CancelSignal> TraitReplayer<D, C> {
    pub fn new(driver: D, cancel: C, coords: UiCoordinates, settings: AutomationSettings) -> Self {
        let dialog_wait_ms = settings.dialog_wait_ms;
        let focus_settle_ms = settings.focus_settle_ms;
        Self {
            ctx: AutomationContext::new(driver, cancel, settings),
            coords,
            dialog_wait_ms,
            focus_settle_ms,
        }
    }

    /// Search for one trait and add it to the loadout
    pub fn add_trait(&mut self, name: &str) -> Result<(), ReplayError> {
        log::info!("Adding trait: {}", name);

        self.ctx
            .smooth_move("move to search input", &self.coords.traits_search_input)?;
        self.ctx.step("focus search input", |d| d.click())?;

        self.ctx.step("release caps lock", |d| {
            if d.capslock_active() {
                d.press(Key::CapsLock)
            } else {
                Ok(())
            }
        })?;

        self.ctx.step("clear search input", |d| {
            d.press_combo(Key::Control, Key::A)?;
            d.press(Key::Delete)
        })?;
        self.ctx.step("type trait name", |d| d.type_text(name))?;
        self.ctx.step("submit search", |d| d.press(Key::Enter))?;

        self.ctx
            .smooth_move("move to first match", &self.coords.traits_first_match)?;
        self.ctx.step("apply first match", |d| d.double_click())?;

        // Shown when the trait can't be applied (e.g. not enough points)
        self.ctx
            .smooth_move("move to dialog button", &self.coords.failure_dialog_ok)?;
        self.ctx.wait(self.dialog_wait_ms)?;
        self.ctx.step("dismiss failure dialog", |d| d.click())
    }

    /// Focus the game and add each trait in order.
    /// `focus` brings the game window to the front and reports whether it exists.
    pub fn equip_traits<F>(&mut self, names: &[String], focus: F) -> Result<usize, ReplayError>
    where
        F: FnOnce() -> Result<(), ReplayError>,
    {
        self.ctx.check()?;
        focus()?;
        delay_ms(self.focus_settle_ms);

        for (i, name) in names.iter().enumerate() {
            self.add_trait(name)?;
            log::debug!("Equipped {}/{}", i + 1, names.len());
        }
        Ok(names.len())
    }

    #[cfg(test)]
    pub fn driver(&self) -> &D {
        &self.ctx.driver
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::automation::testing::{Action, RecordingDriver};
    use std::cell::Cell;
    use std::rc::Rc;

    fn instant_settings() -> AutomationSettings {
        AutomationSettings {
            jitter_px: 0,
            move_duration_ms: 0,
            eased_motion: false,
            dialog_wait_ms: 0,
            focus_settle_ms: 0,
            step_delay_ms: 0,
        }
    }

    fn replayer<C: CancelSignal>(cancel: C) -> TraitReplayer<RecordingDriver, C> {
        TraitReplayer::new(
            RecordingDriver::default(),
            cancel,
            UiCoordinates::default(),
            instant_settings(),
        )
    }

    #[test]
    fn test_add_trait_step_sequence() {
        let mut r = replayer(|| false);
        r.add_trait("Doctor").unwrap();

        assert_eq!(
            r.driver().actions,
            vec![
                Action::MoveTo(980, 225),
                Action::Click,
                Action::Combo(Key::Control, Key::A),
                Action::Press(Key::Delete),
                Action::Type("Doctor".to_string()),
                Action::Press(Key::Enter),
                Action::MoveTo(775, 395),
                Action::DoubleClick,
                Action::MoveTo(1235, 735),
                Action::Click,
            ]
        );
    }

    #[test]
    fn test_capslock_is_released_before_typing() {
        let mut r = TraitReplayer::new(
            RecordingDriver {
                capslock: true,
                ..Default::default()
            },
            || false,
            UiCoordinates::default(),
            instant_settings(),
        );
        r.add_trait("Doctor").unwrap();

        let actions = &r.driver().actions;
        let caps = actions
            .iter()
            .position(|a| *a == Action::Press(Key::CapsLock))
            .unwrap();
        let typed = actions
            .iter()
            .position(|a| matches!(a, Action::Type(_)))
            .unwrap();
        assert!(caps < typed);
    }

    #[test]
    fn test_cancel_before_first_step_performs_nothing() {
        let mut r = replayer(|| true);
        assert!(matches!(r.add_trait("Doctor"), Err(ReplayError::Cancelled)));
        assert!(r.driver().actions.is_empty());
    }

    #[test]
    fn test_cancel_mid_sequence_skips_remaining_steps() {
        // Cancel after three checks have passed
        let checks = Rc::new(Cell::new(0));
        let counter = checks.clone();
        let mut r = replayer(move || {
            counter.set(counter.get() + 1);
            counter.get() > 3
        });

        assert!(matches!(r.add_trait("Doctor"), Err(ReplayError::Cancelled)));
        let actions = &r.driver().actions;
        assert!(!actions.is_empty());
        assert!(!actions.iter().any(|a| matches!(a, Action::Type(_))));
        assert!(!actions.contains(&Action::DoubleClick));
    }

    #[test]
    fn test_equip_traits_in_order() {
        let mut r = replayer(|| false);
        let names = vec!["Doctor".to_string(), "Greyhound".to_string()];
        assert_eq!(r.equip_traits(&names, || Ok(())).unwrap(), 2);

        let typed: Vec<_> = r
            .driver()
            .actions
            .iter()
            .filter_map(|a| match a {
                Action::Type(t) => Some(t.as_str()),
                _ => None,
            })
            .collect();
        assert_eq!(typed, vec!["Doctor", "Greyhound"]);
    }

    #[test]
    fn test_missing_window_aborts_before_input() {
        let mut r = replayer(|| false);
        let result = r.equip_traits(&["Doctor".to_string()], || {
            Err(ReplayError::WindowNotFound("Hunt: Showdown".to_string()))
        });
        assert!(matches!(result, Err(ReplayError::WindowNotFound(_))));
        assert!(r.driver().actions.is_empty());
    }

    #[test]
    fn test_input_error_stops_replay() {
        let mut r = TraitReplayer::new(
            RecordingDriver {
                fail_typing: true,
                ..Default::default()
            },
            || false,
            UiCoordinates::default(),
            instant_settings(),
        );
        let names = vec!["Doctor".to_string(), "Greyhound".to_string()];
        assert!(matches!(
            r.equip_traits(&names, || Ok(())),
            Err(ReplayError::Input(_))
        ));
        assert!(!r.driver().actions.contains(&Action::DoubleClick));
    }

    #[test]
    fn test_eased_move_steps_from_cursor() {
        let mut settings = instant_settings();
        settings.eased_motion = true;
        settings.move_duration_ms = 50;
        let mut r = TraitReplayer::new(
            RecordingDriver {
                cursor: Some((0, 0)),
                ..Default::default()
            },
            || false,
            UiCoordinates::default(),
            settings,
        );
        r.add_trait("Doctor").unwrap();

        let moves_before_click = r
            .driver()
            .actions
            .iter()
            .take_while(|a| **a != Action::Click)
            .count();
        assert_eq!(moves_before_click, 5);
        assert_eq!(r.driver().actions[4], Action::MoveTo(980, 225));
    }
}
