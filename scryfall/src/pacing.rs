use std::{thread, time::Duration};

/// Waits between consecutive requests.
pub trait Pacer {
    fn pause(&mut self);
}

/// A flat sleep after every request.
#[derive(Debug, Clone, Copy)]
pub struct FixedDelay(pub Duration);

impl Pacer for FixedDelay {
    fn pause(&mut self) {
        thread::sleep(self.0);
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct NoDelay;

impl Pacer for NoDelay {
    fn pause(&mut self) {}
}

/// Fixed delay, or no pacing at all for a zero delay.
pub fn pacer_for(delay: Duration) -> Box<dyn Pacer> {
    if delay.is_zero() {
        Box::new(NoDelay)
    } else {
        Box::new(FixedDelay(delay))
    }
}

#[cfg(test)]
mod tests {
    use std::time::Instant;

    use super::*;

    #[test]
    fn fixed_delay_sleeps() {
        let mut pacer = FixedDelay(Duration::from_millis(20));
        let start = Instant::now();
        pacer.pause();
        assert!(start.elapsed() >= Duration::from_millis(20));
    }

    #[test]
    fn zero_delay_does_not_sleep() {
        let mut pacer = pacer_for(Duration::ZERO);
        let start = Instant::now();
        for _ in 0..1000 {
            pacer.pause();
        }
        assert!(start.elapsed() < Duration::from_millis(500));
    }
}
