// src/log.rs
//! Logging front door.
//!
//! The library only talks to the `log` facade through the short macros below.
//! The binary installs `env_logger` via [`init`], formatting every line as
//! `[hh:mm:ss.mmm][LEVEL] message` with the time elapsed since start.

#[cfg(feature = "cli")]
use std::sync::OnceLock;
#[cfg(feature = "cli")]
use std::time::Instant;

#[cfg(feature = "cli")]
static START: OnceLock<Instant> = OnceLock::new();

#[cfg(feature = "cli")]
fn start() -> Instant {
    *START.get_or_init(Instant::now)
}

pub fn fmt_elapsed(ms: u128) -> String {
    let total_ms = ms as u64;
    let h = total_ms / 3_600_000;
    let m = (total_ms % 3_600_000) / 60_000;
    let s = (total_ms % 60_000) / 1_000;
    let ms = total_ms % 1_000;
    format!("{h:02}:{m:02}:{s:02}.{ms:03}")
}

/// Install the global logger. `RUST_LOG` wins over `verbose` when set.
#[cfg(feature = "cli")]
pub fn init(verbose: bool) {
    use std::io::Write;

    let default = if verbose { "debug" } else { "info" };
    let env = env_logger::Env::default().default_filter_or(default);
    let started = start();

    let _ = env_logger::Builder::from_env(env)
        .format(move |buf, record| {
            let elapsed = fmt_elapsed(started.elapsed().as_millis());
            writeln!(buf, "[{elapsed}][{}] {}", record.level(), record.args())
        })
        .try_init();
}

/// Info-level logging
#[macro_export]
macro_rules! logf {
    ($($arg:tt)*) => {
        ::log::info!($($arg)*)
    };
}

/// Debug-level logging
#[macro_export]
macro_rules! logd {
    ($($arg:tt)*) => {
        ::log::debug!($($arg)*)
    };
}

/// Warn-level logging
#[macro_export]
macro_rules! logw {
    ($($arg:tt)*) => {
        ::log::warn!($($arg)*)
    };
}

/// Error-level logging
#[macro_export]
macro_rules! loge {
    ($($arg:tt)*) => {
        ::log::error!($($arg)*)
    };
}

#[cfg(test)]
mod tests {
    use super::fmt_elapsed;

    #[test]
    fn elapsed_is_zero_padded() {
        assert_eq!(fmt_elapsed(0), "00:00:00.000");
        assert_eq!(fmt_elapsed(3_723_004), "01:02:03.004");
    }
}
