//! Recording layer for asserting spans and events in tests.

use std::collections::HashMap;
use std::fmt::{self, Write as _};
use std::sync::{Arc, Mutex, PoisonError};

use ::tracing::field::{Field, Visit};
use ::tracing::span::{Attributes, Id, Record};
use ::tracing::{Event, Level, Subscriber};
use tracing_subscriber::Layer;
use tracing_subscriber::layer::{Context, SubscriberExt};
use tracing_subscriber::registry::LookupSpan;

/// Layer that keeps closed spans and emitted events for later assertions.
///
/// Clones share storage, so a clone can be installed in a subscriber while
/// the first handle is inspected afterwards.
///
/// # Examples
/// ```
/// use hampath_test_support::tracing::RecordingLayer;
///
/// let (value, layer) = RecordingLayer::capture(|| {
///     tracing::info!(answer = 42_u64, "computed");
///     7
/// });
/// assert_eq!(value, 7);
/// let events = layer.events();
/// assert_eq!(events[0].message(), Some("computed"));
/// assert_eq!(events[0].fields.get("answer"), Some(&"42".to_owned()));
/// ```
#[derive(Clone, Default)]
pub struct RecordingLayer {
    spans: Arc<Mutex<Vec<SpanRecord>>>,
    events: Arc<Mutex<Vec<EventRecord>>>,
}

impl RecordingLayer {
    /// Runs `f` with a fresh recording subscriber installed as the thread
    /// default, returning its result and the populated layer.
    pub fn capture<T>(f: impl FnOnce() -> T) -> (T, Self) {
        let layer = Self::default();
        let subscriber = tracing_subscriber::registry().with(layer.clone());
        let value = ::tracing::subscriber::with_default(subscriber, f);
        (value, layer)
    }

    /// Closed spans in completion order.
    #[must_use]
    pub fn spans(&self) -> Vec<SpanRecord> {
        self.spans
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Emitted events in emission order.
    #[must_use]
    pub fn events(&self) -> Vec<EventRecord> {
        self.events
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// First closed span with the given name.
    #[must_use]
    pub fn span_named(&self, name: &str) -> Option<SpanRecord> {
        self.spans().into_iter().find(|span| span.name == name)
    }
}

/// Snapshot of a closed span.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpanRecord {
    /// Span name from the tracing metadata.
    pub name: String,
    /// Fields recorded at creation or through `Span::record`.
    pub fields: HashMap<String, String>,
}

/// Snapshot of an emitted event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventRecord {
    /// Event level.
    pub level: Level,
    /// Event target, usually the emitting module path.
    pub target: String,
    /// Structured fields, including `message`.
    pub fields: HashMap<String, String>,
}

impl EventRecord {
    /// The formatted event message, if the event carried one.
    #[must_use]
    pub fn message(&self) -> Option<&str> {
        self.fields.get("message").map(String::as_str)
    }
}

struct PendingSpan {
    name: String,
    fields: HashMap<String, String>,
}

impl<S> Layer<S> for RecordingLayer
where
    S: Subscriber + for<'span> LookupSpan<'span>,
{
    fn on_new_span(&self, attrs: &Attributes<'_>, id: &Id, ctx: Context<'_, S>) {
        let Some(span) = ctx.span(id) else {
            return;
        };
        let mut pending = PendingSpan {
            name: attrs.metadata().name().to_owned(),
            fields: HashMap::new(),
        };
        attrs.record(&mut FieldRecorder(&mut pending.fields));
        span.extensions_mut().insert(pending);
    }

    fn on_record(&self, id: &Id, values: &Record<'_>, ctx: Context<'_, S>) {
        let Some(span) = ctx.span(id) else {
            return;
        };
        let mut extensions = span.extensions_mut();
        if let Some(pending) = extensions.get_mut::<PendingSpan>() {
            values.record(&mut FieldRecorder(&mut pending.fields));
        }
    }

    fn on_close(&self, id: Id, ctx: Context<'_, S>) {
        let Some(span) = ctx.span(&id) else {
            return;
        };
        let Some(pending) = span.extensions_mut().remove::<PendingSpan>() else {
            return;
        };
        self.spans
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(SpanRecord {
                name: pending.name,
                fields: pending.fields,
            });
    }

    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let mut fields = HashMap::new();
        event.record(&mut FieldRecorder(&mut fields));
        self.events
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(EventRecord {
                level: *event.metadata().level(),
                target: event.metadata().target().to_owned(),
                fields,
            });
    }
}

/// Stores every field as its display string.
struct FieldRecorder<'a>(&'a mut HashMap<String, String>);

impl FieldRecorder<'_> {
    fn put(&mut self, field: &Field, value: String) {
        self.0.insert(field.name().to_owned(), value);
    }
}

impl Visit for FieldRecorder<'_> {
    fn record_bytes(&mut self, field: &Field, value: &[u8]) {
        let mut hex = String::with_capacity(value.len() * 2);
        for byte in value {
            let _ = write!(hex, "{byte:02x}");
        }
        self.put(field, hex);
    }

    fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
        self.put(field, format!("{value:?}"));
    }

    fn record_str(&mut self, field: &Field, value: &str) {
        self.put(field, value.to_owned());
    }

    fn record_error(&mut self, field: &Field, value: &(dyn std::error::Error + 'static)) {
        self.put(field, value.to_string());
    }

    fn record_bool(&mut self, field: &Field, value: bool) {
        self.put(field, value.to_string());
    }

    fn record_i64(&mut self, field: &Field, value: i64) {
        self.put(field, value.to_string());
    }

    fn record_u64(&mut self, field: &Field, value: u64) {
        self.put(field, value.to_string());
    }

    fn record_f64(&mut self, field: &Field, value: f64) {
        self.put(field, value.to_string());
    }
}
