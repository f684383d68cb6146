/*!

The `tracing` plumbing: a filter layer that drops events logged above the
global threshold, and a field formatter that renders the message while hiding
the internal `threshold` field. Both work through the visitor machinery the
`tracing` crate requires.

*/

use std::fmt::Debug;

use tracing::{
  field::{Field, Visit},
  Event,
  Subscriber,
};
use tracing_subscriber::{
  field::RecordFields,
  fmt::{format::Writer, FormatFields},
  layer::Context,
  registry::LookupSpan,
  Layer,
};

use super::get_global_logging_threshold;

/// Drops events whose `threshold` field exceeds the global logging threshold.
pub(crate) struct ThresholdFilter;

impl<S> Layer<S> for ThresholdFilter
where
    S: Subscriber + for<'lookup> LookupSpan<'lookup>,
{
  fn event_enabled(&self, event: &Event<'_>, _ctx: Context<'_, S>) -> bool {
    let mut visitor = ThresholdVisitor { threshold: None };
    event.record(&mut visitor);
    match visitor.threshold {
      Some(threshold) => threshold <= get_global_logging_threshold(),
      // No threshold recorded: treat as threshold 0, which is always emitted.
      None => true,
    }
  }
}

/// Extracts the `threshold` field from an event's records.
struct ThresholdVisitor {
  threshold: Option<u8>,
}

impl Visit for ThresholdVisitor {
  fn record_u64(&mut self, field: &Field, value: u64) {
    if field.name() == "threshold" {
      assert!(
        value <= u8::MAX as u64,
        "invalid threshold value supplied to the logger: {}",
        value
      );
      self.threshold = Some(value as u8);
    }
  }

  fn record_i64(&mut self, field: &Field, value: i64) {
    if field.name() == "threshold" {
      assert!(
        (0..=u8::MAX as i64).contains(&value),
        "invalid threshold value supplied to the logger: {}",
        value
      );
      self.threshold = Some(value as u8);
    }
  }

  fn record_debug(&mut self, _field: &Field, _value: &dyn Debug) {}
}

/// Renders event fields, hiding the internal `threshold` field.
pub(crate) struct ThresholdFields;

impl<'writer> FormatFields<'writer> for ThresholdFields {
  fn format_fields<R: RecordFields>(&self, writer: Writer<'writer>, fields: R) -> std::fmt::Result {
    let mut visitor = FieldWriter { writer };
    fields.record(&mut visitor);
    Ok(())
  }
}

struct FieldWriter<'writer> {
  writer: Writer<'writer>,
}

impl<'writer> Visit for FieldWriter<'writer> {
  fn record_debug(&mut self, field: &Field, value: &dyn Debug) {
    match field.name() {

      "message" => {
        let _ = write!(self.writer, "{:?}", value);
      }

      "threshold" => {
        // Do not print.
      }

      name => {
        let _ = write!(self.writer, "{}={:?} ", name, value);
      }

    }
  }
}
