#![cfg(test)]
use std::io::{BufWriter, Cursor, Write};

use greeter_common::config::Config;
use greeter_common::greeting::{self, GREETING};

/// The line written through a buffered writer must reach the inner sink
/// once the flush inside `write_greeting` has run.
#[test]
fn greeting_flushes_through_buffer() -> anyhow::Result<()> {
    let mut out: BufWriter<Vec<u8>> = BufWriter::new(Vec::new());
    greeting::write_greeting(&mut out, &Config::default())?;

    assert_eq!(out.get_ref().as_slice(), b"Hello wereld ;)\n");
    Ok(())
}

#[test]
fn greeting_appends_to_existing_output() -> anyhow::Result<()> {
    let mut out: Cursor<Vec<u8>> = Cursor::new(Vec::new());
    out.write_all(b"> ")?;
    greeting::write_greeting(&mut out, &Config::default())?;

    assert_eq!(out.into_inner(), b"> Hello wereld ;)\n");
    Ok(())
}

#[test]
fn greeting_is_deterministic() -> anyhow::Result<()> {
    let cfg: Config = Config::default();
    let mut runs: Vec<Vec<u8>> = Vec::new();
    for _ in 0..16 {
        let mut buf: Vec<u8> = Vec::new();
        greeting::write_greeting(&mut buf, &cfg)?;
        runs.push(buf);
    }

    assert!(runs.windows(2).all(|pair| pair[0] == pair[1]));
    assert_eq!(String::from_utf8(runs.remove(0))?.trim(), GREETING);
    Ok(())
}

#[test]
fn trimmed_render_matches_constant() {
    let line: String = greeting::render(&Config::default());
    assert_eq!(line.trim(), "Hello wereld ;)");
    assert_eq!(line.matches('\n').count(), 1);
}
