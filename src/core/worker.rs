use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};
use std::thread;

/// Shared handles passed into a worker task
#[derive(Clone)]
pub struct WorkerHandle {
    // Per run: a later start() never revives a stopped task
    running: Arc<AtomicBool>,
    status: Arc<Mutex<String>>,
}

impl WorkerHandle {
    /// False once the UI asked this run to stop
    pub fn is_running(&self) -> bool {
        self.running.load(Ordering::SeqCst)
    }

    pub fn set_status(&self, text: &str) {
        *self.status.lock().unwrap_or_else(|e| e.into_inner()) = text.to_string();
    }
}

/// Runs one background task at a time and exposes its status to the UI
pub struct Worker {
    status: Arc<Mutex<String>>,
    /// Set by start(), cleared only when the thread exits
    alive: Arc<AtomicBool>,
    current_run: Option<Arc<AtomicBool>>,
}

impl Worker {
    pub fn new() -> Self {
        Self {
            status: Arc::new(Mutex::new("Ready".to_string())),
            alive: Arc::new(AtomicBool::new(false)),
            current_run: None,
        }
    }

    /// Spawn `task` on a new thread and return true. Refused (false) while a
    /// previous task, stopped or not, is still alive. `on_finish` is called
    /// after the thread is marked finished (used to wake the UI).
    pub fn start<F, D>(&mut self, task: F, on_finish: D) -> bool
    where
        F: FnOnce(&WorkerHandle) + Send + 'static,
        D: FnOnce() + Send + 'static,
    {
        if self.alive.swap(true, Ordering::SeqCst) {
            log::warn!("Previous task is still finishing, not starting another");
            return false;
        }

        let run = Arc::new(AtomicBool::new(true));
        self.current_run = Some(run.clone());

        let handle = WorkerHandle {
            running: run,
            status: self.status.clone(),
        };
        let alive = self.alive.clone();
        thread::spawn(move || {
            task(&handle);
            handle.running.store(false, Ordering::SeqCst);
            alive.store(false, Ordering::SeqCst);
            on_finish();
        });
        true
    }

    /// Ask the current task to stop at its next checkpoint.
    /// The worker stays busy until the thread has actually exited.
    pub fn stop(&self) {
        if let Some(run) = &self.current_run {
            if run.swap(false, Ordering::SeqCst) && self.is_running() {
                self.set_status("Stopping...");
            }
        }
    }

    /// True until the task thread has exited, even after stop()
    pub fn is_running(&self) -> bool {
        self.alive.load(Ordering::SeqCst)
    }

    pub fn get_status(&self) -> String {
        self.status.lock().unwrap_or_else(|e| e.into_inner()).clone()
    }

    pub fn set_status(&self, text: &str) {
        *self.status.lock().unwrap_or_else(|e| e.into_inner()) = text.to_string();
    }
}
