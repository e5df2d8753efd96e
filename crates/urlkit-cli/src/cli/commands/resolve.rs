//! `urlkit resolve <base> <relative>` – resolve a relative reference.

use anyhow::Result;
use urlkit_core::resolve;

pub fn run_resolve(base: &str, relative: &str) -> Result<()> {
    let out = resolve(base, relative);
    if out.is_degraded() {
        tracing::warn!(base, relative, "resolution degraded; printing reference unchanged");
    }
    println!("{}", out.value());
    Ok(())
}
