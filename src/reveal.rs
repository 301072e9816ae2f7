use std::time::Duration;

/// Fade-in gate for content that waits on a headline to finish typing.
///
/// Hidden until [`Reveal::trigger`] is called, then visible once `delay`
/// more time has been fed in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reveal {
    delay: Duration,
    since_trigger: Option<Duration>,
}

impl Reveal {
    pub fn after(delay: Duration) -> Self {
        Self {
            delay,
            since_trigger: None,
        }
    }

    /// Start the countdown. Triggering again does not restart it.
    pub fn trigger(&mut self) {
        if self.since_trigger.is_none() {
            self.since_trigger = Some(Duration::ZERO);
        }
    }

    pub fn advance(&mut self, elapsed: Duration) {
        if let Some(since) = self.since_trigger.as_mut() {
            *since = since.saturating_add(elapsed);
        }
    }

    pub fn is_triggered(&self) -> bool {
        self.since_trigger.is_some()
    }

    pub fn is_visible(&self) -> bool {
        self.since_trigger.is_some_and(|since| since >= self.delay)
    }
}
