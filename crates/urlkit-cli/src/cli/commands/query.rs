//! `urlkit query-get|query-set|query-remove` – query parameter operations.

use anyhow::{bail, Result};
use urlkit_core::{add_or_replace_query_param, get_query_param, remove_query_param};

pub fn run_query_get(url: &str, name: &str) -> Result<()> {
    match get_query_param(url, name) {
        Some(value) => {
            println!("{value}");
            Ok(())
        }
        None => bail!("parameter {name:?} not present in {url}"),
    }
}

pub fn run_query_set(url: &str, name: &str, value: Option<&str>) -> Result<()> {
    let out = add_or_replace_query_param(url, name, value);
    if out.is_degraded() {
        tracing::warn!(url, name, "query rewrite degraded; printing URL unchanged");
    }
    println!("{}", out.value());
    Ok(())
}

pub fn run_query_remove(url: &str, name: &str) -> Result<()> {
    let out = remove_query_param(url, name);
    if out.is_degraded() {
        tracing::warn!(url, name, "query rewrite degraded; printing URL unchanged");
    }
    println!("{}", out.value());
    Ok(())
}
