#![allow(unused_macros)]

// Diagnostics for the removal paths. The arguments are only evaluated when the
// `tracing` feature is enabled.
cfg_if::cfg_if! {
    if #[cfg(feature = "tracing")] {
        macro_rules! trace {
            ($($arg:tt)+) => {
                tracing::trace!(target: "sequeue", $($arg)+)
            };
        }
    } else {
        macro_rules! trace {
            ($($arg:tt)+) => {};
        }
    }
}
