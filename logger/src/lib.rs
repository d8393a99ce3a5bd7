//! Default logging setup for andgraph binaries and demos
#![deny(unsafe_op_in_unsafe_fn)]
#![warn(clippy::undocumented_unsafe_blocks)]
#![warn(missing_docs)]

use std::{sync::Mutex, time::Instant};

/// Environment variable holding the `env_logger` filter directives.
pub const FILTER_ENV: &str = "ANDGRAPH_LOG";

/// Environment variable selecting when to emit colored output (`auto`, `always`, `never`).
pub const STYLE_ENV: &str = "ANDGRAPH_LOG_STYLE";

/// Filter used when [`FILTER_ENV`] is unset.
pub const DEFAULT_FILTER: &str = "info";

const TIMESTAMP_STYLE: anstyle::Style =
    anstyle::Style::new().fg_color(Some(anstyle::Color::Ansi(anstyle::AnsiColor::BrightBlack)));

const TARGET_STYLE: anstyle::Style =
    anstyle::Style::new().fg_color(Some(anstyle::Color::Ansi(anstyle::AnsiColor::Magenta)));

fn builder() -> env_logger::Builder {
    let start_time = Instant::now();

    let last_target = Mutex::new(String::new());

    let mut builder = env_logger::Builder::from_env(
        env_logger::Env::new()
            .filter_or(FILTER_ENV, DEFAULT_FILTER)
            .write_style(STYLE_ENV),
    );

    builder.format(move |buf, record| {
        use std::io::Write;

        let timestamp = start_time.elapsed();
        let level = record.level();
        let target = record.target();

        // A poisoned lock only means another thread panicked mid-format, the string is intact.
        let mut last_target = last_target
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());

        if target != *last_target {
            last_target.clear();
            last_target.push_str(target);

            writeln!(
                buf,
                "{} {}",
                format_args!("{style}{timestamp:>9.2?}{style:#}", style = TIMESTAMP_STYLE),
                format_args!("{style}{target}{style:#}", style = TARGET_STYLE)
            )?;
        }
        writeln!(
            buf,
            "{} {} {}",
            format_args!("{style}{timestamp:>9.2?}{style:#}", style = TIMESTAMP_STYLE),
            format_args!(
                "{style}{level:<5}{style:#}",
                style = buf.default_level_style(level),
            ),
            record.args(),
        )
    });

    builder
}

/// Perform the default logging setup used by andgraph binaries.
///
/// Log records are grouped by target: whenever the target changes a header line naming it is
/// printed before the record. The filter is read from [`FILTER_ENV`], defaulting to
/// [`DEFAULT_FILTER`].
///
/// # Panics
///
/// Panics if a global logger was already installed.
pub fn setup() {
    builder().init();
}

/// Like [`setup`], but returns an error instead of panicking when a global logger is already
/// installed.
///
/// This is useful in tests, where multiple test functions of the same binary may each attempt to
/// install a logger.
pub fn try_setup() -> Result<(), log::SetLoggerError> {
    builder().try_init()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn repeated_setup_is_reported() {
        // The first call may race with other tests of this binary, the second never succeeds.
        let _ = try_setup();
        assert!(try_setup().is_err());
        log::info!("logger installed");
    }
}
