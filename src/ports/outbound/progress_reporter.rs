/// ProgressReporter port for reporting progress during a run
///
/// All progress goes to a side channel (stderr for the CLI) so that stdout
/// only carries the path of the written viewer.
pub trait ProgressReporter: Send + Sync {
    /// Reports a progress message
    fn report(&self, message: &str);

    /// Reports a non-fatal problem
    fn report_warning(&self, message: &str);

    /// Reports an error message
    fn report_error(&self, message: &str);

    /// Reports completion of an operation
    fn report_completion(&self, message: &str);

    /// Starts an indeterminate "waiting" indicator
    ///
    /// Used while input is still arriving; the default does nothing.
    fn start_waiting(&self, _message: &str) {}

    /// Stops the indicator started by `start_waiting`, if any
    fn stop_waiting(&self) {}
}
