use std::thread;
use std::time::Duration;

/// Runtime knobs collected from the command line.
#[derive(Clone, Debug, PartialEq)]
pub struct Settings {
    pub instructions_pause: Duration,
    pub no_data_pause: Duration,
}

impl Settings {
    /// No pauses at all, for scripted runs.
    #[cfg(test)]
    pub fn immediate() -> Self {
        Self {
            instructions_pause: Duration::ZERO,
            no_data_pause: Duration::ZERO,
        }
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            instructions_pause: Duration::from_secs(10),
            no_data_pause: Duration::from_secs(5),
        }
    }
}

pub fn pause(duration: Duration) {
    if !duration.is_zero() {
        log::trace!("pausing for {:?}", duration);
        thread::sleep(duration);
    }
}
