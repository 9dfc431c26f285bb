use std::cell::RefCell;
use std::time::Duration;

/// Where the emitter's waiting happens.
pub trait RunBackend {
    fn sleep(&self, delay: Duration);
}

/// Blocks the calling thread for the requested delay.
pub struct SystemRunBackend;

impl RunBackend for SystemRunBackend {
    fn sleep(&self, delay: Duration) {
        std::thread::sleep(delay);
    }
}

/// Records requested delays without sleeping.
#[derive(Default)]
pub struct RecordingRunBackend {
    pub sleeps: RefCell<Vec<Duration>>,
}

impl RunBackend for RecordingRunBackend {
    fn sleep(&self, delay: Duration) {
        self.sleeps.borrow_mut().push(delay);
    }
}
