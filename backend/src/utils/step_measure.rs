use log::{debug, log_enabled, Level};
use std::time::{Duration, Instant};

fn format_duration(duration: Duration) -> String {
    let secs = duration.as_secs();
    let millis_rem = duration.subsec_millis();
    if secs == 0 {
        format!("{} ms", duration.as_millis())
    } else if secs < 60 {
        format!("{secs}.{millis_rem:03} s")
    } else {
        format!("{}:{:02}.{millis_rem:03} min", secs / 60, secs % 60)
    }
}

/// Logs the elapsed time of an action at debug level.
pub struct StepMeasure {
    enabled: bool,
    name: String,
    start: Instant,
}

impl StepMeasure {
    pub fn new(name: &str) -> Self {
        Self {
            enabled: log_enabled!(Level::Debug),
            name: name.to_owned(),
            start: Instant::now(),
        }
    }

    pub fn stop(&mut self) {
        if self.enabled {
            debug!("{}: finished in {}", self.name, format_duration(self.start.elapsed()));
            self.enabled = false;
        }
    }
}

impl Drop for StepMeasure {
    fn drop(&mut self) {
        self.stop();
    }
}

#[cfg(test)]
mod tests {
    use super::format_duration;
    use std::time::Duration;

    #[test]
    fn test_format_duration() {
        assert_eq!(format_duration(Duration::from_millis(250)), "250 ms");
        assert_eq!(format_duration(Duration::from_millis(2_500)), "2.500 s");
        assert_eq!(format_duration(Duration::from_millis(61_005)), "1:01.005 min");
    }
}
