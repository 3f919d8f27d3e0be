use std::fmt::Debug;

use colored::*;
use lodgr_common::config::Config;
use tracing::field::{Field, Visit};
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt::FormatEvent;
use tracing_subscriber::fmt::format::{self, Writer};
use tracing_subscriber::registry::LookupSpan;

/// Events on this target are terminal output, written without decoration.
pub const PRINT_TARGET: &str = "lodgr::print";
/// Events on this target are customer notifications.
pub const NOTIFY_TARGET: &str = "lodgr::notify";

pub struct LodgrFormatter;

impl<S, N> FormatEvent<S, N> for LodgrFormatter
where
    S: Subscriber + for<'a> LookupSpan<'a>,
    N: for<'a> format::FormatFields<'a> + 'static,
{
    fn format_event(
        &self,
        ctx: &tracing_subscriber::fmt::FmtContext<'_, S, N>,
        mut writer: Writer<'_>,
        event: &Event<'_>,
    ) -> std::fmt::Result {
        let meta = event.metadata();

        if meta.target() == PRINT_TARGET {
            let mut raw = RawMessage::default();
            event.record(&mut raw);
            return writeln!(writer, "{}", raw.0);
        }

        let (symbol, color_func): (&str, fn(ColoredString) -> ColoredString) =
            if meta.target() == NOTIFY_TARGET {
                ("[@]", |s| s.cyan().bold())
            } else {
                match *meta.level() {
                    Level::TRACE => ("[ ]", |s| s.dimmed()),
                    Level::DEBUG => ("[?]", |s| s.blue()),
                    Level::INFO => ("[+]", |s| s.green().bold()),
                    Level::WARN => ("[*]", |s| s.yellow().bold()),
                    Level::ERROR => ("[-]", |s| s.red().bold()),
                }
            };

        write!(writer, "{} ", color_func(symbol.into()))?;

        ctx.field_format().format_fields(writer.by_ref(), event)?;

        writeln!(writer)
    }
}

#[derive(Default)]
struct RawMessage(String);

impl Visit for RawMessage {
    fn record_str(&mut self, field: &Field, value: &str) {
        if field.name() == "raw_msg" {
            self.0 = value.to_string();
        }
    }

    fn record_debug(&mut self, field: &Field, value: &dyn Debug) {
        if field.name() == "raw_msg" {
            self.0 = format!("{value:?}");
        }
    }
}

/// Installs the global subscriber.
///
/// `RUST_LOG` wins over the quiet level.
pub fn init_logging(cfg: &Config) -> anyhow::Result<()> {
    if cfg.no_color {
        colored::control::set_override(false);
    }

    let filter = build_filter(cfg, EnvFilter::try_from_default_env().ok())?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_ansi(!cfg.no_color)
        .event_format(LodgrFormatter)
        .try_init()
        .map_err(|err| anyhow::anyhow!("failed to install logger: {err}"))
}

/// Terminal output and customer notifications pass regardless of `base`.
fn build_filter(cfg: &Config, base: Option<EnvFilter>) -> anyhow::Result<EnvFilter> {
    let filter = match base {
        Some(filter) => filter,
        None => EnvFilter::try_new(cfg.log_directive())?,
    };

    Ok(filter
        .add_directive(format!("{PRINT_TARGET}=info").parse()?)
        .add_directive(format!("{NOTIFY_TARGET}=info").parse()?))
}
