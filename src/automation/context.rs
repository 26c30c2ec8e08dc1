use rand::rngs::StdRng;
use rand::SeedableRng;
use crate::automation::interaction::{delay_ms, eased_path, jittered, InputDriver};
use crate::error::ReplayError;
use crate::settings::{AutomationSettings, UiElement};

/// Interval between pointer updates during eased motion
const MOTION_TICK_MS: u64 = 10;

/// Emergency stop polled before every automation step
pub trait CancelSignal {
    fn is_cancelled(&self) -> bool;
}

impl<F: Fn() -> bool> CancelSignal for F {
    fn is_cancelled(&self) -> bool {
        self()
    }
}

/// Input driver plus the cancel guard and pacing shared by every step
pub struct AutomationContext<D: InputDriver, C: CancelSignal> {
    pub driver: D,
    cancel: C,
    settings: AutomationSettings,
    rng: StdRng,
}

impl<D: InputDriver, C: CancelSignal> AutomationContext<D, C> {
    pub fn new(driver: D, cancel: C, settings: AutomationSettings) -> Self {
        Self {
            driver,
            cancel,
            settings,
            rng: StdRng::from_entropy(),
        }
    }

    /// Fail with Cancelled if the stop condition is set
    pub fn check(&self) -> Result<(), ReplayError> {
        if self.cancel.is_cancelled() {
            Err(ReplayError::Cancelled)
        } else {
            Ok(())
        }
    }

    /// Run one discrete input step, skipped when cancelled
    pub fn step<F>(&mut self, label: &str, action: F) -> Result<(), ReplayError>
    where
        F: FnOnce(&mut D) -> Result<(), ReplayError>,
    {
        if let Err(e) = self.check() {
            log::info!("Skipped by esc: {}", label);
            return Err(e);
        }
        log::trace!("Step: {}", label);
        action(&mut self.driver)?;
        delay_ms(self.settings.step_delay_ms);
        Ok(())
    }

    /// Wait, then make sure we were not cancelled meanwhile
    pub fn wait(&self, ms: u64) -> Result<(), ReplayError> {
        self.check()?;
        delay_ms(ms);
        self.check()
    }

    /// Move the pointer to a UI element with jitter and optional easing
    pub fn smooth_move(&mut self, label: &str, element: &UiElement) -> Result<(), ReplayError> {
        let target = jittered((element.x, element.y), self.settings.jitter_px, &mut self.rng);
        let duration = self.settings.move_duration_ms;
        let start = if self.settings.eased_motion && duration > 0 {
            self.driver.cursor_position()
        } else {
            None
        };

        match start {
            Some(from) => {
                let ticks = (duration / MOTION_TICK_MS).max(1) as usize;
                log::trace!("Step: {}", label);
                for point in eased_path(from, target, ticks) {
                    self.check()?;
                    self.driver.move_to(point.0, point.1)?;
                    delay_ms(MOTION_TICK_MS);
                }
                delay_ms(self.settings.step_delay_ms);
                Ok(())
            }
            None => self.step(label, |d| d.move_to(target.0, target.1)),
        }
    }
}
