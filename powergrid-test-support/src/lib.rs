//! Test helpers shared by the powergrid crates.

pub mod tracing {
    //! A `tracing` layer that keeps every closed span and emitted event so
    //! tests can assert on instrumentation.
    use std::collections::HashMap;
    use std::fmt;
    use std::sync::{Arc, Mutex, MutexGuard};

    use tracing::field::{Field, Visit};
    use tracing::span::{Attributes, Id, Record};
    use tracing::{Event, Level, Subscriber};
    use tracing_subscriber::Layer;
    use tracing_subscriber::layer::Context;
    use tracing_subscriber::registry::LookupSpan;

    /// Captures spans (on close) and events (on emission). Clones share the
    /// same storage, so keep one clone for assertions and hand the other to
    /// the subscriber.
    ///
    /// # Examples
    /// ```
    /// use powergrid_test_support::tracing::RecordingLayer;
    /// use tracing_subscriber::layer::SubscriberExt;
    ///
    /// let layer = RecordingLayer::default();
    /// let subscriber = tracing_subscriber::registry().with(layer.clone());
    /// tracing::subscriber::with_default(subscriber, || {
    ///     let _span = tracing::info_span!("unit", answer = 42).entered();
    ///     tracing::info!("inside");
    /// });
    /// assert_eq!(layer.span("unit").and_then(|s| s.field("answer")), Some("42".into()));
    /// assert!(layer.has_event(tracing::Level::INFO, "inside"));
    /// ```
    #[derive(Clone, Default)]
    pub struct RecordingLayer {
        spans: Arc<Mutex<Vec<SpanRecord>>>,
        events: Arc<Mutex<Vec<EventRecord>>>,
    }

    impl RecordingLayer {
        /// Closed spans in completion order.
        #[must_use]
        pub fn spans(&self) -> Vec<SpanRecord> {
            lock(&self.spans).clone()
        }

        /// Events in emission order.
        #[must_use]
        pub fn events(&self) -> Vec<EventRecord> {
            lock(&self.events).clone()
        }

        /// First closed span called `name`.
        #[must_use]
        pub fn span(&self, name: &str) -> Option<SpanRecord> {
            lock(&self.spans)
                .iter()
                .find(|span| span.name == name)
                .cloned()
        }

        /// Returns `true` when an event at `level` carried `message`.
        #[must_use]
        pub fn has_event(&self, level: Level, message: &str) -> bool {
            lock(&self.events)
                .iter()
                .any(|event| event.level == level && event.message() == Some(message))
        }
    }

    /// A closed span: its name and the final value of each field.
    #[derive(Debug, Clone, PartialEq, Eq)]
    pub struct SpanRecord {
        pub name: String,
        pub fields: HashMap<String, String>,
    }

    impl SpanRecord {
        /// Returns the recorded value of `name`, rendered as text.
        #[must_use]
        pub fn field(&self, name: &str) -> Option<String> {
            self.fields.get(name).cloned()
        }
    }

    /// An emitted event with its level, target and fields.
    #[derive(Debug, Clone, PartialEq, Eq)]
    pub struct EventRecord {
        pub level: Level,
        pub target: String,
        pub fields: HashMap<String, String>,
    }

    impl EventRecord {
        /// Returns the event's `message` field.
        #[must_use]
        pub fn message(&self) -> Option<&str> {
            self.fields.get("message").map(String::as_str)
        }
    }

    /// Span name and fields, parked in the registry's extensions until the
    /// span closes.
    struct OpenSpan {
        name: &'static str,
        fields: HashMap<String, String>,
    }

    fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
        mutex.lock().expect("recording layer lock poisoned")
    }

    impl<S> Layer<S> for RecordingLayer
    where
        S: Subscriber + for<'span> LookupSpan<'span>,
    {
        fn on_new_span(&self, attrs: &Attributes<'_>, id: &Id, ctx: Context<'_, S>) {
            let Some(span) = ctx.span(id) else {
                return;
            };
            let mut open = OpenSpan {
                name: attrs.metadata().name(),
                fields: HashMap::new(),
            };
            attrs.record(&mut FieldCollector(&mut open.fields));
            span.extensions_mut().insert(open);
        }

        fn on_record(&self, id: &Id, values: &Record<'_>, ctx: Context<'_, S>) {
            let Some(span) = ctx.span(id) else {
                return;
            };
            if let Some(open) = span.extensions_mut().get_mut::<OpenSpan>() {
                values.record(&mut FieldCollector(&mut open.fields));
            }
        }

        fn on_close(&self, id: Id, ctx: Context<'_, S>) {
            let Some(span) = ctx.span(&id) else {
                return;
            };
            let Some(open) = span.extensions_mut().remove::<OpenSpan>() else {
                return;
            };
            lock(&self.spans).push(SpanRecord {
                name: open.name.to_owned(),
                fields: open.fields,
            });
        }

        fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
            let mut fields = HashMap::new();
            event.record(&mut FieldCollector(&mut fields));
            let metadata = event.metadata();
            lock(&self.events).push(EventRecord {
                level: *metadata.level(),
                target: metadata.target().to_owned(),
                fields,
            });
        }
    }

    /// Renders every field as text: strings verbatim, numbers and booleans
    /// via `Display`, everything else via `Debug`.
    struct FieldCollector<'a>(&'a mut HashMap<String, String>);

    impl FieldCollector<'_> {
        fn put(&mut self, field: &Field, value: String) {
            self.0.insert(field.name().to_owned(), value);
        }
    }

    impl Visit for FieldCollector<'_> {
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
}

pub mod ci;
