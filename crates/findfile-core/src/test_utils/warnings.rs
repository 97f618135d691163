//! Tracing layer that records `WARN` events.
//!
//! Self-contained so the integration tests can compile the same file.

use std::fmt;
use std::sync::{Arc, Mutex};

use tracing::field::{Field, Visit};
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::layer::{Context, Layer, SubscriberExt};

/// Records the message of every `WARN` event.
#[derive(Clone, Default)]
pub struct WarningRecorder {
    messages: Arc<Mutex<Vec<String>>>,
}

impl WarningRecorder {
    pub fn count(&self) -> usize {
        self.messages.lock().unwrap().len()
    }

    pub fn messages(&self) -> Vec<String> {
        self.messages.lock().unwrap().clone()
    }
}

#[derive(Default)]
struct MessageVisitor(String);

impl Visit for MessageVisitor {
    fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
        if field.name() == "message" {
            self.0 = format!("{value:?}");
        }
    }
}

impl<S: Subscriber> Layer<S> for WarningRecorder {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        if *event.metadata().level() == Level::WARN {
            let mut visitor = MessageVisitor::default();
            event.record(&mut visitor);
            self.messages.lock().unwrap().push(visitor.0);
        }
    }
}

/// Run `f` with a thread-scoped subscriber and return what it warned.
pub fn capture_warnings<R>(f: impl FnOnce() -> R) -> (R, WarningRecorder) {
    let recorder = WarningRecorder::default();
    let subscriber = tracing_subscriber::registry().with(recorder.clone());
    let result = tracing::subscriber::with_default(subscriber, f);
    (result, recorder)
}
