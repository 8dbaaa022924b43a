//! Where the bar's progress messages go.

/// Accepts progress messages in the order they are produced.
pub trait Notifier {
    fn notify(&mut self, message: &str);
}

/// Forwards every message to `tracing` at info level.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingNotifier;

impl Notifier for TracingNotifier {
    fn notify(&mut self, message: &str) {
        tracing::info!(target: "sandwich_bar::notify", "{message}");
    }
}

// Records messages, handy for checking what a customer was told.
impl Notifier for Vec<String> {
    fn notify(&mut self, message: &str) {
        self.push(message.to_owned());
    }
}

impl<N: Notifier + ?Sized> Notifier for &mut N {
    fn notify(&mut self, message: &str) {
        (**self).notify(message);
    }
}
