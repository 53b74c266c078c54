//! Runs every program of this directory against its `.out` file.

use std::fs;
use std::path::Path;

use anyhow::Context as AnyhowContext;
use espresso_lib::config::Config;
use espresso_lib::{execute, Context};

#[by_resources("tests/programs/*.esp")]
#[test]
fn program(path: &str) {
    let source = fs::read_to_string(path).context("could not read program")?;
    let expected = fs::read_to_string(Path::new(path).with_extension("out"))
        .context("could not read expected output")?;
    let filename = Path::new(path).display().to_string();
    let config = Config {
        input: &source,
        filename: Some(&filename),
        warnings: true,
        ..Config::default()
    };
    let ctx = Context::new(config);
    assert_eq!(execute(&ctx)?, expected, "Output mismatch for {path}");
}
