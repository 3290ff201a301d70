//! Colorful console output for benchmark progress.
//!
//! Provides a custom `tracing` layer that formats harness events with colors.
//!
//! ## Log Levels
//!
//! - **INFO**: Lifecycle events (profile and operation start/end, artifacts)
//! - **DEBUG**: Raw batch times for every measured size

use num_format::{Locale, ToFormattedString};
use owo_colors::OwoColorize;
use std::io::{self, Write};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::OnceLock;
use std::time::Instant;
use tracing::field::{Field, Visit};
use tracing::level_filters::LevelFilter;
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::layer::Context;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer};

static INIT: OnceLock<()> = OnceLock::new();
static EPOCH: OnceLock<Instant> = OnceLock::new();
static PROFILE_START_NANOS: AtomicU64 = AtomicU64::new(0);

/// Package version for banner display.
const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Initializes console output at INFO level.
///
/// Safe to call multiple times - only the first call has effect.
pub fn init() {
    init_with_level(Level::INFO);
}

/// Initializes console output, showing events up to `level`.
///
/// `RUST_LOG` still overrides the default when set.
pub fn init_with_level(level: Level) {
    INIT.get_or_init(|| {
        print_banner();

        let filter = EnvFilter::builder()
            .with_default_directive(LevelFilter::from_level(level).into())
            .from_env_lossy();

        let _ = tracing_subscriber::registry()
            .with(filter)
            .with(BenchConsoleLayer)
            .try_init();
    });
}

// Marks the start of a profile for elapsed time tracking.
fn mark_profile_start() {
    let epoch = EPOCH.get_or_init(Instant::now);
    let nanos = epoch.elapsed().as_nanos() as u64;
    PROFILE_START_NANOS.store(nanos, Ordering::Relaxed);
}

// Returns elapsed time since the current profile started.
fn elapsed_secs() -> f64 {
    let Some(epoch) = EPOCH.get() else {
        return 0.0;
    };
    let start_nanos = PROFILE_START_NANOS.load(Ordering::Relaxed);
    let now_nanos = epoch.elapsed().as_nanos() as u64;
    now_nanos.saturating_sub(start_nanos) as f64 / 1_000_000_000.0
}

fn print_banner() {
    let banner = r#"
                 _      _                    _
  ___ _   _  ___| | ___| |__   ___ _ __   ___| |__
 / __| | | |/ __| |/ _ \ '_ \ / _ \ '_ \ / __| '_ \
| (__| |_| | (__| |  __/ |_) |  __/ | | | (__| | | |
 \___|\__, |\___|_|\___|_.__/ \___|_| |_|\___|_| |_|
      |___/
"#;

    let version_line = format!("        v{} - loops vs iterator chains\n", VERSION);

    let mut stdout = io::stdout().lock();
    let _ = writeln!(stdout, "{}", banner.bright_cyan());
    let _ = writeln!(stdout, "{}", version_line.bright_white().bold());
    let _ = stdout.flush();
}

/// A tracing layer that formats harness events with colors.
pub struct BenchConsoleLayer;

impl<S: Subscriber> Layer<S> for BenchConsoleLayer {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let metadata = event.metadata();

        // Accept events from cyclebench crates only
        if !metadata.target().starts_with("cyclebench") {
            return;
        }

        let mut visitor = EventVisitor::default();
        event.record(&mut visitor);

        let output = format_event(&visitor);
        if !output.is_empty() {
            let _ = writeln!(io::stdout(), "{}", output);
        }
    }
}

#[derive(Default)]
struct EventVisitor {
    event: Option<String>,
    profile: Option<String>,
    operation: Option<String>,
    imperative: Option<String>,
    declarative: Option<String>,
    path: Option<String>,
    sizes: Option<u64>,
    size: Option<u64>,
    repetitions: Option<u64>,
    operations: Option<u64>,
    duration_ms: Option<u64>,
    imperative_ns: Option<u64>,
    declarative_ns: Option<u64>,
    mean_delta_ns: Option<i64>,
}

impl Visit for EventVisitor {
    fn record_debug(&mut self, field: &Field, value: &dyn std::fmt::Debug) {
        let s = format!("{:?}", value);
        let s = s.trim_matches('"').to_string();
        match field.name() {
            "event" => self.event = Some(s),
            "profile" => self.profile = Some(s),
            "operation" => self.operation = Some(s),
            "path" => self.path = Some(s),
            _ => {}
        }
    }

    fn record_u64(&mut self, field: &Field, value: u64) {
        match field.name() {
            "sizes" => self.sizes = Some(value),
            "size" => self.size = Some(value),
            "repetitions" => self.repetitions = Some(value),
            "operations" => self.operations = Some(value),
            "duration_ms" => self.duration_ms = Some(value),
            "imperative_ns" => self.imperative_ns = Some(value),
            "declarative_ns" => self.declarative_ns = Some(value),
            _ => {}
        }
    }

    fn record_i64(&mut self, field: &Field, value: i64) {
        match field.name() {
            "mean_delta_ns" => self.mean_delta_ns = Some(value),
            _ => self.record_u64(field, value.max(0) as u64),
        }
    }

    fn record_str(&mut self, field: &Field, value: &str) {
        match field.name() {
            "event" => self.event = Some(value.to_string()),
            "profile" => self.profile = Some(value.to_string()),
            "operation" => self.operation = Some(value.to_string()),
            "imperative" => self.imperative = Some(value.to_string()),
            "declarative" => self.declarative = Some(value.to_string()),
            "path" => self.path = Some(value.to_string()),
            _ => {}
        }
    }
}

fn format_event(v: &EventVisitor) -> String {
    let event = v.event.as_deref().unwrap_or("");

    match event {
        "profile_start" => format_profile_start(v),
        "profile_end" => format_profile_end(v),
        "operation_start" => format_operation_start(v),
        "operation_end" => format_operation_end(v),
        "size_measured" => format_size_measured(v),
        "series_plotted" => format_series_plotted(v),
        "artifact_written" => format_artifact(v),
        _ => String::new(),
    }
}

fn format_elapsed() -> String {
    format!("{:>7.3}s", elapsed_secs())
        .bright_black()
        .to_string()
}

fn format_profile_start(v: &EventVisitor) -> String {
    mark_profile_start();
    let profile = v.profile.as_deref().unwrap_or("unnamed");
    let sizes = v.sizes.unwrap_or(0);
    let repetitions = v.repetitions.unwrap_or(0);

    format!(
        "{} {} Profile {} │ {} sizes │ {} calls per batch",
        format_elapsed(),
        "▶".bright_green().bold(),
        profile.white().bold(),
        sizes.to_formatted_string(&Locale::en).bright_yellow(),
        repetitions.to_formatted_string(&Locale::en).bright_yellow(),
    )
}

fn format_profile_end(v: &EventVisitor) -> String {
    let profile = v.profile.as_deref().unwrap_or("unnamed");
    let duration_ms = v.duration_ms.unwrap_or(0);

    format!(
        "{} {} Profile {} complete │ {}\n",
        format_elapsed(),
        "■".bright_cyan().bold(),
        profile.white().bold(),
        format_duration_ms(duration_ms).yellow(),
    )
}

fn format_operation_start(v: &EventVisitor) -> String {
    let operation = v.operation.as_deref().unwrap_or("unknown");
    let imperative = v.imperative.as_deref().unwrap_or("imperative");
    let declarative = v.declarative.as_deref().unwrap_or("declarative");

    format!(
        "{} {} {} {} vs {}",
        format_elapsed(),
        "▶".bright_blue(),
        operation.white().bold(),
        imperative.cyan(),
        declarative.magenta(),
    )
}

fn format_operation_end(v: &EventVisitor) -> String {
    let operation = v.operation.as_deref().unwrap_or("unknown");
    let duration_ms = v.duration_ms.unwrap_or(0);
    let mean_delta_ns = v.mean_delta_ns.unwrap_or(0);

    let verdict = if mean_delta_ns > 0 {
        "declarative faster".bright_green().to_string()
    } else if mean_delta_ns < 0 {
        "imperative faster".bright_yellow().to_string()
    } else {
        "no difference".white().to_string()
    };

    format!(
        "{} {} {} done │ {} │ mean Δ {} │ {}",
        format_elapsed(),
        "◀".bright_blue(),
        operation.white().bold(),
        format_duration_ms(duration_ms).yellow(),
        format_delta_ns(mean_delta_ns).bright_magenta(),
        verdict,
    )
}

fn format_size_measured(v: &EventVisitor) -> String {
    let size = v.size.unwrap_or(0);
    let imperative_ns = v.imperative_ns.unwrap_or(0);
    let declarative_ns = v.declarative_ns.unwrap_or(0);

    format!(
        "    {} size {:>9} │ imperative {:>10} │ declarative {:>10}",
        "→".bright_black(),
        size.to_formatted_string(&Locale::en).white(),
        format_ns(imperative_ns).cyan(),
        format_ns(declarative_ns).magenta(),
    )
}

fn format_series_plotted(v: &EventVisitor) -> String {
    let operation = v.operation.as_deref().unwrap_or("unknown");

    format!(
        "{} {} added plot figure \"{}\"",
        format_elapsed(),
        "+".bright_green(),
        operation.white(),
    )
}

fn format_artifact(v: &EventVisitor) -> String {
    let path = v.path.as_deref().unwrap_or("?");

    format!(
        "{} {} result saved to {}",
        format_elapsed(),
        "✔".bright_green().bold(),
        path.bright_white().underline(),
    )
}

fn format_duration_ms(ms: u64) -> String {
    if ms < 1000 {
        format!("{}ms", ms)
    } else if ms < 60_000 {
        format!("{:.2}s", ms as f64 / 1000.0)
    } else {
        let mins = ms / 60_000;
        let secs = (ms % 60_000) / 1000;
        format!("{}m {}s", mins, secs)
    }
}

fn format_ns(ns: u64) -> String {
    if ns < 1_000 {
        format!("{}ns", ns)
    } else if ns < 1_000_000 {
        format!("{:.1}µs", ns as f64 / 1_000.0)
    } else if ns < 1_000_000_000 {
        format!("{:.2}ms", ns as f64 / 1_000_000.0)
    } else {
        format!("{:.2}s", ns as f64 / 1_000_000_000.0)
    }
}

fn format_delta_ns(ns: i64) -> String {
    let sign = if ns < 0 { "-" } else { "+" };
    format!("{}{}", sign, format_ns(ns.unsigned_abs()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_duration_ms() {
        assert_eq!(format_duration_ms(250), "250ms");
        assert_eq!(format_duration_ms(1_500), "1.50s");
        assert_eq!(format_duration_ms(125_000), "2m 5s");
    }

    #[test]
    fn test_format_ns() {
        assert_eq!(format_ns(999), "999ns");
        assert_eq!(format_ns(12_345), "12.3µs");
        assert_eq!(format_ns(2_500_000), "2.50ms");
        assert_eq!(format_ns(3_000_000_000), "3.00s");
    }

    #[test]
    fn test_format_delta_keeps_sign() {
        assert_eq!(format_delta_ns(-1_500), "-1.5µs");
        assert_eq!(format_delta_ns(1_500), "+1.5µs");
        assert_eq!(format_delta_ns(0), "+0ns");
    }

    #[test]
    fn test_unknown_event_is_silent() {
        let visitor = EventVisitor {
            event: Some("run_end".to_string()),
            ..EventVisitor::default()
        };
        assert!(format_event(&visitor).is_empty());
    }

    #[test]
    fn test_series_plotted_names_the_label() {
        let visitor = EventVisitor {
            event: Some("series_plotted".to_string()),
            operation: Some("set filter".to_string()),
            ..EventVisitor::default()
        };
        let line = format_event(&visitor);
        assert!(line.contains("added plot figure"));
        assert!(line.contains("set filter"));
    }

    #[test]
    fn test_artifact_line_mentions_path() {
        let visitor = EventVisitor {
            event: Some("artifact_written".to_string()),
            path: Some("out/chart.svg".to_string()),
            ..EventVisitor::default()
        };
        assert!(format_event(&visitor).contains("out/chart.svg"));
    }
}
