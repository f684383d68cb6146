/*!

Logging with a global numeric verbosity threshold on top of `tracing`.

Every message is logged *at* a threshold; only messages whose threshold is at
most the global threshold are emitted. The level macros (`error!`,
`warning!`, `info!`, `debug!`, `trace!`) take an optional leading threshold
argument, defaulting to 0, which is always emitted:

```
use hierlib::log::set_global_logging_threshold;

set_global_logging_threshold(2);
hierlib::info!(1, "emitted: {} registries", 3);
hierlib::debug!(3, "not emitted");
hierlib::warning!("no threshold argument, always emitted");
```

The subscriber installs itself on first use; no explicit initialization is
required. The global threshold is an atomic, so it can be adjusted from any
thread at any time.

*/

mod layers;
mod macros;

use std::sync::{
  atomic::{AtomicU8, Ordering},
  LazyLock,
};

use tracing_subscriber::{fmt, layer::SubscriberExt, Registry};

use layers::{ThresholdFields, ThresholdFilter};
pub use macros::*;

/// Used for implicit initialization.
static INIT_LOGGER: LazyLock<()> = LazyLock::new(|| {
  let subscriber = Registry::default()
      .with(ThresholdFilter)
      .with(
        fmt::layer()
            .fmt_fields(ThresholdFields)
            .with_target(false)
            .without_time()
            .with_writer(std::io::stderr),
      );

  tracing::subscriber::set_global_default(subscriber).expect("failed to set tracing subscriber");
});

/// This does not need to be called directly. Installs the subscriber.
pub fn init_logger() {
  LazyLock::force(&INIT_LOGGER);
}

static GLOBAL_LOGGING_THRESHOLD: AtomicU8 = AtomicU8::new(1); // Default threshold

/// Sets the global threshold. Messages logged at a greater threshold are not emitted.
pub fn set_global_logging_threshold(new_threshold: u8) {
  GLOBAL_LOGGING_THRESHOLD.store(new_threshold, Ordering::SeqCst);
}

/// Retrieves the global threshold.
pub fn get_global_logging_threshold() -> u8 {
  GLOBAL_LOGGING_THRESHOLD.load(Ordering::SeqCst)
}
