use anyhow::{Context, Result};
use kursschema::{extract, load, report};
use std::env;
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

fn main() -> Result<()> {
    // ─── 1) init logging ─────────────────────────────────────────────
    let env = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt::Subscriber::builder().with_env_filter(env).init();

    // ─── 2) read arguments ───────────────────────────────────────────
    let mut args = env::args().skip(1);
    let path = args
        .next()
        .context("usage: kursschema <schedule.csv> [--json]")?;
    let as_json = args.next().as_deref() == Some("--json");

    // ─── 3) load + extract ───────────────────────────────────────────
    info!(path = %path, "loading schedule");
    let rows = load::load_rows(&path)?;
    let terms = extract::parse_terms(&rows)
        .with_context(|| format!("extracting terms from {}", path))?;
    info!(
        autumn = %terms.autumn.id,
        spring = %terms.spring.id,
        "extraction complete"
    );

    // ─── 4) print ────────────────────────────────────────────────────
    if as_json {
        println!("{}", serde_json::to_string_pretty(&terms)?);
    } else {
        print!("{}", report::render(&terms));
    }
    Ok(())
}
