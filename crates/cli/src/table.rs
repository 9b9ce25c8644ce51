//! Tier comparison tables as polars DataFrames.
//!
//! One row per argument (factorial) or per (n, k) pair (perm, comb), with one
//! column per tier and `*_exact` flags from the documented domains.

use anyhow::{bail, Context, Result};
use clap::ValueEnum;
use polars::prelude::*;
use serde_json::json;
use stathelpers::{
    combinations, combinations64, dcombinations, dfactorial, dpermutations, factorial,
    factorial64, permutations, permutations64, rcombinations64, stirling, Tier,
};
use std::fs::File;
use std::path::Path;

use crate::provenance::{write_sidecar, Payload};

#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum Family {
    Factorial,
    Perm,
    Comb,
}

pub fn run(family: Family, max_n: u16, out: &str) -> Result<()> {
    tracing::info!(family = ?family, max_n, out, "table");
    let mut df = build(family, max_n)?;
    tracing::info!(rows = df.height(), cols = df.width(), "table_shape");
    write(&mut df, Path::new(out))?;
    let params = json!({ "family": format!("{family:?}"), "max_n": max_n });
    let prov = write_sidecar(out, Payload::new(params, df.height()))?;
    tracing::info!(provenance = %prov.display(), "table_written");
    Ok(())
}

pub fn build(family: Family, max_n: u16) -> Result<DataFrame> {
    let df = match family {
        Family::Factorial => factorial_table(small_n(max_n)?)?,
        Family::Perm => perm_table(small_n(max_n)?)?,
        Family::Comb => comb_table(max_n)?,
    };
    Ok(df)
}

fn small_n(max_n: u16) -> Result<u8> {
    match u8::try_from(max_n) {
        Ok(n) => Ok(n),
        Err(_) => bail!("max_n={max_n} exceeds 255 for this family"),
    }
}

fn factorial_table(max_n: u8) -> PolarsResult<DataFrame> {
    let ns: Vec<u32> = (0..=max_n).map(u32::from).collect();
    let narrow: Vec<u32> = (0..=max_n).map(factorial).collect();
    let wide: Vec<u64> = (0..=max_n).map(factorial64).collect();
    let approx: Vec<f64> = (0..=max_n).map(dfactorial).collect();
    let stir: Vec<f64> = (0..=max_n).map(stirling).collect();
    let narrow_exact: Vec<bool> = (0..=max_n)
        .map(|n| Tier::Narrow.within_domain_factorial(n))
        .collect();
    let wide_exact: Vec<bool> = (0..=max_n)
        .map(|n| Tier::Wide.within_domain_factorial(n))
        .collect();
    df!(
        "n" => ns,
        "narrow" => narrow,
        "wide" => wide,
        "approx" => approx,
        "stirling" => stir,
        "narrow_exact" => narrow_exact,
        "wide_exact" => wide_exact
    )
}

fn perm_table(max_n: u8) -> PolarsResult<DataFrame> {
    let pairs: Vec<(u8, u8)> = (0..=max_n).flat_map(|n| (0..=n).map(move |k| (n, k))).collect();
    df!(
        "n" => pairs.iter().map(|&(n, _)| u32::from(n)).collect::<Vec<_>>(),
        "k" => pairs.iter().map(|&(_, k)| u32::from(k)).collect::<Vec<_>>(),
        "narrow" => pairs.iter().map(|&(n, k)| permutations(n, k)).collect::<Vec<_>>(),
        "wide" => pairs.iter().map(|&(n, k)| permutations64(n, k)).collect::<Vec<_>>(),
        "approx" => pairs.iter().map(|&(n, k)| dpermutations(n, k)).collect::<Vec<_>>(),
        "narrow_exact" => pairs
            .iter()
            .map(|&(n, k)| Tier::Narrow.within_domain_permutations(n, k))
            .collect::<Vec<_>>(),
        "wide_exact" => pairs
            .iter()
            .map(|&(n, k)| Tier::Wide.within_domain_permutations(n, k))
            .collect::<Vec<_>>()
    )
}

fn comb_table(max_n: u16) -> PolarsResult<DataFrame> {
    let pairs: Vec<(u16, u16)> = (0..=max_n).flat_map(|n| (0..=n).map(move |k| (n, k))).collect();
    df!(
        "n" => pairs.iter().map(|&(n, _)| u32::from(n)).collect::<Vec<_>>(),
        "k" => pairs.iter().map(|&(_, k)| u32::from(k)).collect::<Vec<_>>(),
        "narrow" => pairs.iter().map(|&(n, k)| combinations(n, k)).collect::<Vec<_>>(),
        "wide" => pairs.iter().map(|&(n, k)| combinations64(n, k)).collect::<Vec<_>>(),
        "wide_recursive" => pairs.iter().map(|&(n, k)| rcombinations64(n, k)).collect::<Vec<_>>(),
        "approx" => pairs.iter().map(|&(n, k)| dcombinations(n, k)).collect::<Vec<_>>(),
        "narrow_exact" => pairs
            .iter()
            .map(|&(n, k)| Tier::Narrow.within_domain_combinations(n, k))
            .collect::<Vec<_>>(),
        "wide_exact" => pairs
            .iter()
            .map(|&(n, k)| Tier::Wide.within_domain_combinations(n, k))
            .collect::<Vec<_>>()
    )
}

/// CSV or Parquet by extension; parent directories are created.
pub fn write(df: &mut DataFrame, out: &Path) -> Result<()> {
    if let Some(parent) = out.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("creating output dir {}", parent.display()))?;
        }
    }
    let ext = out.extension().and_then(|e| e.to_str()).unwrap_or("");
    match ext {
        "csv" => {
            let mut file =
                File::create(out).with_context(|| format!("creating {}", out.display()))?;
            CsvWriter::new(&mut file).include_header(true).finish(df)?;
        }
        "parquet" => {
            let file = File::create(out).with_context(|| format!("creating {}", out.display()))?;
            ParquetWriter::new(file).finish(df)?;
        }
        other => bail!("unsupported table extension {other:?}; use .csv or .parquet"),
    }
    Ok(())
}
