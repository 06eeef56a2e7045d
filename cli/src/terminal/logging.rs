use colored::*;
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt::format::Writer;
use tracing_subscriber::fmt::{FmtContext, FormatEvent, FormatFields};
use tracing_subscriber::registry::LookupSpan;

pub const LOG_ENV: &str = "GREETER_LOG";
const DEFAULT_FILTER: &str = "warn";

pub struct GreeterFormatter;

fn symbol(level: &Level) -> &'static str {
    match *level {
        Level::TRACE => "[ ]",
        Level::DEBUG => "[?]",
        Level::INFO => "[+]",
        Level::WARN => "[*]",
        Level::ERROR => "[-]",
    }
}

fn paint(level: &Level) -> ColoredString {
    let marker: &str = symbol(level);
    match *level {
        Level::TRACE => marker.dimmed(),
        Level::DEBUG => marker.blue(),
        Level::INFO => marker.green().bold(),
        Level::WARN => marker.yellow().bold(),
        Level::ERROR => marker.red().bold(),
    }
}

impl<S, N> FormatEvent<S, N> for GreeterFormatter
where
    S: Subscriber + for<'a> LookupSpan<'a>,
    N: for<'a> FormatFields<'a> + 'static,
{
    fn format_event(
        &self,
        ctx: &FmtContext<'_, S, N>,
        mut writer: Writer<'_>,
        event: &Event<'_>,
    ) -> std::fmt::Result {
        let marker: ColoredString = paint(event.metadata().level());
        write!(writer, "{marker} ")?;
        ctx.format_fields(writer.by_ref(), event)?;
        writeln!(writer)
    }
}

/// Installs the stderr subscriber, filtered by `GREETER_LOG` (default `warn`).
///
/// The filter only decides what reaches stderr; stdout is never touched.
pub fn init() {
    let filter: EnvFilter =
        EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    tracing_subscriber::fmt()
        .event_format(GreeterFormatter)
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
