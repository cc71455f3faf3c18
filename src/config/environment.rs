// ABOUTME: Tracker configuration loaded from environment variables
// ABOUTME: Selects report locale, output format, and logging settings
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::env;

use tracing::debug;
use workout_core::constants::env_config;
use workout_core::errors::AppResult;

use crate::formatters::{OutputFormat, ReportLocale, Reporter};
use crate::logging::LoggingConfig;

/// Complete runtime configuration for one tracker run
#[derive(Debug, Clone, Default)]
pub struct TrackerConfig {
    /// Language of text reports
    pub report_locale: ReportLocale,
    /// Text or JSON output
    pub output_format: OutputFormat,
    /// Logging setup
    pub logging: LoggingConfig,
}

impl TrackerConfig {
    /// Load configuration from the process environment
    ///
    /// # Errors
    ///
    /// Returns an error if a variable is set to an unsupported value
    pub fn from_env() -> AppResult<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration through an arbitrary variable lookup
    ///
    /// # Errors
    ///
    /// Returns an error if a variable is set to an unsupported value
    pub fn from_lookup<F>(lookup: F) -> AppResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let report_locale = lookup(env_config::REPORT_LOCALE)
            .map(|value| ReportLocale::from_str_param(&value))
            .transpose()?
            .unwrap_or_default();
        let output_format = lookup(env_config::OUTPUT_FORMAT)
            .map(|value| OutputFormat::from_str_param(&value))
            .transpose()?
            .unwrap_or_default();
        let logging = LoggingConfig::from_lookup(&lookup);

        Ok(Self {
            report_locale,
            output_format,
            logging,
        })
    }

    /// Record the effective settings; call once the subscriber is installed
    pub fn log_loaded(&self) {
        debug!(
            report.locale = %self.report_locale,
            report.format = %self.output_format,
            log.level = %self.logging.level,
            "Tracker configuration loaded"
        );
    }

    /// Reporter matching this configuration
    #[must_use]
    pub const fn reporter(&self) -> Reporter {
        Reporter::new(self.report_locale).with_format(self.output_format)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::io;
    use std::sync::{Arc, Mutex};
    use workout_core::errors::ErrorCode;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| ((*k).to_owned(), (*v).to_owned()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[derive(Clone, Default)]
    struct CapturedLogs(Arc<Mutex<Vec<u8>>>);

    impl CapturedLogs {
        fn contents(&self) -> String {
            String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
        }
    }

    impl io::Write for CapturedLogs {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    fn capture_debug<F: FnOnce()>(action: F) -> String {
        let logs = CapturedLogs::default();
        let writer = logs.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_max_level(tracing::Level::DEBUG)
            .with_ansi(false)
            .with_writer(move || writer.clone())
            .finish();
        tracing::subscriber::with_default(subscriber, action);
        logs.contents()
    }

    #[test]
    fn test_loading_is_silent_until_settings_are_logged() {
        let mut loaded = None;
        let output = capture_debug(|| {
            loaded = Some(
                TrackerConfig::from_lookup(lookup_from(&[("WORKOUT_OUTPUT_FORMAT", "json")]))
                    .unwrap(),
            );
        });
        assert!(output.is_empty(), "unexpected events: {output}");

        let config = loaded.unwrap();
        let output = capture_debug(|| config.log_loaded());
        assert!(output.contains("Tracker configuration loaded"));
        assert!(output.contains("report.format=json"));
    }

    #[test]
    fn test_defaults_without_variables() {
        let config = TrackerConfig::from_lookup(|_| None).unwrap();
        assert_eq!(config.report_locale, ReportLocale::Russian);
        assert_eq!(config.output_format, OutputFormat::Text);
    }

    #[test]
    fn test_reads_locale_and_format() {
        let config = TrackerConfig::from_lookup(lookup_from(&[
            ("WORKOUT_REPORT_LOCALE", "en"),
            ("WORKOUT_OUTPUT_FORMAT", "json"),
        ]))
        .unwrap();

        let reporter = config.reporter();
        assert_eq!(reporter.locale(), ReportLocale::English);
        assert_eq!(reporter.format(), OutputFormat::Json);
    }

    #[test]
    fn test_rejects_unknown_format() {
        let err = TrackerConfig::from_lookup(lookup_from(&[("WORKOUT_OUTPUT_FORMAT", "xml")]))
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::ConfigInvalid);
    }
}
