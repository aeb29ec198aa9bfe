//! Cleanup handlers run when the loader tears down.

/// A callback registered to run at teardown.
pub trait CleanupHandler {
    /// Label used in logs.
    fn name(&self) -> &str;

    /// Perform the cleanup.
    fn run(&self);
}

/// A [`CleanupHandler`] made from a label and a closure.
pub struct Cleanup<F> {
    name: String,
    callback: F,
}

impl<F: Fn()> Cleanup<F> {
    /// Wrap `callback` under `name`.
    pub fn new(name: impl Into<String>, callback: F) -> Self {
        Self {
            name: name.into(),
            callback,
        }
    }
}

impl<F: Fn()> CleanupHandler for Cleanup<F> {
    fn name(&self) -> &str {
        &self.name
    }

    fn run(&self) {
        (self.callback)()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn closure_handler_runs_callback() {
        let hits = Cell::new(0);
        let h = Cleanup::new("fini", || hits.set(hits.get() + 1));
        h.run();
        h.run();
        assert_eq!(hits.get(), 2);
        assert_eq!(h.name(), "fini");
    }
}
