use crate::locale::Locale;

#[derive(Debug, Clone, Default)]
pub struct Config {
    /// Language used for customer notifications and user-facing errors.
    pub locale: Locale,
    /// Verbosity reduction. `0` prints everything, `1` drops headers and
    /// decorations, `2` and above only prints results and errors.
    pub quiet: u8,
    /// Disables ANSI colors in terminal output.
    pub no_color: bool,
}

impl Config {
    pub fn new(locale: Locale, quiet: u8, no_color: bool) -> Self {
        Self {
            locale,
            quiet,
            no_color,
        }
    }

    /// Default tracing filter directive derived from the quiet level.
    ///
    /// Used when `RUST_LOG` is not set.
    pub fn log_directive(&self) -> &'static str {
        match self.quiet {
            0 => "info",
            1 => "warn",
            _ => "error",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let cfg = Config::default();
        assert_eq!(cfg.locale, Locale::En);
        assert_eq!(cfg.quiet, 0);
        assert!(!cfg.no_color);
    }

    #[test]
    fn test_log_directive_follows_quiet_level() {
        assert_eq!(Config::new(Locale::En, 0, false).log_directive(), "info");
        assert_eq!(Config::new(Locale::En, 1, false).log_directive(), "warn");
        assert_eq!(Config::new(Locale::Ru, 2, true).log_directive(), "error");
        assert_eq!(Config::new(Locale::Ru, 9, true).log_directive(), "error");
    }
}
