//! Integration tests for rex-console
//!
//! Drives the public API the way a rex binary would: build one
//! `OutputConfig` at startup, hand it to a `Console`, and route all
//! user-facing output through it. Writers are captured in-memory via the
//! `*_to` variants.

use std::time::Duration;

use rex_console::{
    human_readable_duration, human_readable_size, indent, Console, Error, OutputConfig,
    OutputLevels, Result,
};

fn console_for_host(host: &str) -> Console {
    Console::new(OutputConfig {
        host_string: Some(host.to_string()),
        ..Default::default()
    })
}

#[test]
fn session_transcript() {
    let console = console_for_host("web1");
    let mut out = Vec::new();
    let mut err = Vec::new();

    console
        .puts_to(&mut out, "run: uptime", true, "\n", false)
        .unwrap();
    for _ in 0..3 {
        console.fastprint_to(&mut out, ".").unwrap();
    }
    console.puts_to(&mut out, " done", false, "\n", false).unwrap();
    console.warn_to(&mut err, "connection is slow").unwrap();

    let transfer = format!(
        "transferred {} in {}",
        human_readable_size(1536),
        human_readable_duration(Duration::from_secs(61))
    );
    console.puts_to(&mut out, transfer, true, "\n", false).unwrap();

    assert_eq!(
        String::from_utf8(out).unwrap(),
        "[web1] run: uptime\n... done\n[web1] transferred 1.50 KiB in 01min01s\n"
    );
    assert_eq!(
        String::from_utf8(err).unwrap(),
        "\nWarning: connection is slow\n\n"
    );
}

#[test]
fn quiet_run_emits_nothing() {
    let console = Console::new(OutputConfig {
        levels: OutputLevels {
            user: false,
            warnings: false,
            aborts: false,
        },
        host_string: Some("web1".to_string()),
        ..Default::default()
    });
    let mut out = Vec::new();
    let mut err = Vec::new();

    console
        .puts_to(&mut out, "run: uptime", true, "\n", true)
        .unwrap();
    console.fastprint_to(&mut out, ".").unwrap();
    console.warn_to(&mut err, "connection is slow").unwrap();
    let aborted: Result<()> = console.abort_to(&mut err, "host unreachable");

    assert!(out.is_empty());
    assert!(err.is_empty());
    // The termination value is produced even with all output off
    assert!(aborted.unwrap_err().is_abort());
}

#[test]
fn abort_can_be_intercepted_before_exit() {
    fn deploy(console: &Console, err: &mut Vec<u8>) -> Result<()> {
        console.abort_to(err, "remote rejected the release")
    }

    let console = console_for_host("web1");
    let mut err = Vec::new();

    // An intermediate caller may catch the abort and recover
    let recovered = match deploy(&console, &mut err) {
        Err(e) if e.is_abort() => {
            console
                .puts_to(&mut err, "rolling back", false, "\n", false)
                .unwrap();
            Ok(())
        }
        other => other,
    };
    assert!(recovered.is_ok());

    // Uncaught, the host's entry point maps it to exit status 1
    let uncaught = deploy(&console, &mut err).unwrap_err();
    assert_eq!(uncaught.exit_code(), 1);
    assert_eq!(
        uncaught.to_string(),
        "Fatal error: remote rejected the release"
    );
}

#[test]
fn abort_report_format() {
    let console = console_for_host("web1");
    let mut err = Vec::new();
    let _: Result<()> = console.abort_to(&mut err, "host unreachable");

    assert_eq!(
        String::from_utf8(err).unwrap(),
        "\nFatal error: host unreachable\n\nAborting.\n"
    );
}

#[test]
fn indent_remote_output_block() {
    let remote_output = "    total 0\n    drwxr-xr-x 2 deploy\n";
    let block = indent(remote_output, 4, true);
    assert_eq!(block, "    total 0\n    drwxr-xr-x 2 deploy");
}

#[test]
fn prompt_abort_under_installed_subscriber() {
    // Aborts emit tracing events; make sure they behave under an installed
    // subscriber the way the binaries install one
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter("rex_console=debug")
        .with_test_writer()
        .finish();

    tracing::subscriber::with_default(subscriber, || {
        let console = Console::new(OutputConfig {
            abort_on_prompts: true,
            levels: OutputLevels {
                aborts: false,
                ..Default::default()
            },
            ..Default::default()
        });
        let err = console.handle_prompt_abort().unwrap_err();
        assert!(matches!(err, Error::Aborted(_)));
    });
}
