// Shared trait for background tools driven from the UI

/// Common interface of tools that run on a worker thread
pub trait Tool {
    /// Stop the tool (emergency stop)
    fn stop(&mut self);

    /// Check if the tool is currently running
    fn is_running(&self) -> bool;

    /// Get current status message
    fn get_status(&self) -> String;
}
