/// Scoped run context acquired at pipeline entry.
///
/// The host's init/exit bracketing is modeled as a guard: acquisition logs
/// the run start, and `Drop` guarantees the matching release diagnostic on
/// every exit path, including the fatal-failure one.
pub(crate) struct RunContext {
    connector: &'static str,
}

impl RunContext {
    pub(crate) fn acquire(connector: &'static str) -> Self {
        tracing::debug!(connector, "run context acquired");
        Self { connector }
    }
}

impl Drop for RunContext {
    fn drop(&mut self) {
        tracing::debug!(connector = self.connector, "run context released");
    }
}
