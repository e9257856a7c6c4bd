//! Test support: logging setup and scripted consoles

use std::env;
use std::io::Cursor;
use std::sync::Once;

use tracing::{debug, info};
use tracing_subscriber::{
    fmt::{self, format::FmtSpan},
    prelude::*,
    EnvFilter,
};

use crate::infrastructure::LineConsole;

/// Console fed from a fixed list of lines, capturing everything written.
pub type ScriptedConsole = LineConsole<Cursor<Vec<u8>>, Vec<u8>>;

static TEST_SETUP: Once = Once::new();

pub fn init_test_setup() {
    TEST_SETUP.call_once(|| {
        if env::var("RUST_LOG").is_err() {
            env::set_var("RUST_LOG", "kalkulator=debug");
        }
        setup_test_logging();
        info!("Test Setup complete");
    });
}

fn setup_test_logging() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"));

    let subscriber = tracing_subscriber::registry().with(
        fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(true)
            .with_span_events(FmtSpan::CLOSE)
            .with_filter(env_filter),
    );

    if tracing::dispatcher::has_been_set() {
        debug!("Tracing subscriber already set");
    } else {
        subscriber.try_init().unwrap_or_else(|e| {
            eprintln!("Error: Failed to set up logging: {}", e);
        });
    }
}

/// Console that answers prompts with `lines`, in order, then reports end of input.
pub fn scripted(lines: &[&str]) -> ScriptedConsole {
    let mut input = String::new();
    for line in lines {
        input.push_str(line);
        input.push('\n');
    }
    LineConsole::new(Cursor::new(input.into_bytes()), Vec::new())
}

/// Everything the console has written so far.
pub fn output_of(console: ScriptedConsole) -> String {
    String::from_utf8_lossy(&console.into_writer()).into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::Console;

    #[test]
    fn test_init_test_setup() {
        init_test_setup();
        init_test_setup();
    }

    #[test]
    fn given_script_when_prompted_then_replays_lines_then_ends() {
        let mut console = scripted(&["a", ""]);
        assert_eq!(console.prompt("p").unwrap(), Some("a".into()));
        assert_eq!(console.prompt("p").unwrap(), Some(String::new()));
        assert_eq!(console.prompt("p").unwrap(), None);
        assert_eq!(output_of(console), "ppp");
    }
}
