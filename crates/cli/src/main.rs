use anyhow::{bail, Result};
use clap::{Parser, Subcommand, ValueEnum};
use serde::Serialize;
use serde_json::{json, Value};
use stathelpers::checked::{ensure_k_le_n, try_combinations64, try_permutations64};
use stathelpers::factorial::stirling_rel_error;
use stathelpers::{
    comb_pascal, dfactorial, rcombinations, rcombinations64, stirling, Count, LexPermutations, Tier,
};
use tracing_subscriber::fmt::SubscriberBuilder;

mod provenance;
mod table;

use table::Family;

#[derive(Parser)]
#[command(name = "stathelpers")]
#[command(about = "Permutations, factorials and binomial coefficients in u32/u64/f64 tiers")]
struct Cmd {
    #[command(subcommand)]
    action: Action,
}

/// Numeric tier on the command line.
#[derive(Clone, Copy, Debug, ValueEnum)]
enum TierArg {
    Narrow,
    Wide,
    Approx,
}

impl From<TierArg> for Tier {
    fn from(t: TierArg) -> Self {
        match t {
            TierArg::Narrow => Tier::Narrow,
            TierArg::Wide => Tier::Wide,
            TierArg::Approx => Tier::Approx,
        }
    }
}

/// C(n,k) algorithm.
#[derive(Clone, Copy, Debug, ValueEnum)]
enum Method {
    Iterative,
    Recursive,
    Pascal,
}

#[derive(Subcommand)]
enum Action {
    /// n! in the chosen tier
    Factorial {
        #[arg(long)]
        n: u8,
        #[arg(long, value_enum, default_value_t = TierArg::Wide)]
        tier: TierArg,
    },
    /// P(n,k) in the chosen tier
    Perm {
        #[arg(long)]
        n: u8,
        #[arg(long)]
        k: u8,
        #[arg(long, value_enum, default_value_t = TierArg::Wide)]
        tier: TierArg,
    },
    /// C(n,k) in the chosen tier and algorithm
    Comb {
        #[arg(long)]
        n: u16,
        #[arg(long)]
        k: u16,
        #[arg(long, value_enum, default_value_t = TierArg::Wide)]
        tier: TierArg,
        #[arg(long, value_enum, default_value_t = Method::Iterative)]
        method: Method,
    },
    /// Stirling's approximation next to the f64 factorial
    Stirling {
        #[arg(long)]
        n: u8,
    },
    /// Print every distinct arrangement of the characters, in lexicographic order
    Enumerate {
        #[arg(long)]
        items: String,
        #[arg(long)]
        limit: Option<usize>,
    },
    /// Write a table of all tiers to CSV or Parquet (by extension) plus a provenance sidecar
    Table {
        #[arg(long, value_enum)]
        family: Family,
        #[arg(long)]
        max_n: u16,
        #[arg(long)]
        out: String,
    },
    /// Print a small provenance JSON block
    Report,
}

fn main() -> Result<()> {
    SubscriberBuilder::default().with_target(false).init();
    let cmd = Cmd::parse();
    match cmd.action {
        Action::Factorial { n, tier } => factorial(n, tier.into()),
        Action::Perm { n, k, tier } => perm(n, k, tier.into()),
        Action::Comb { n, k, tier, method } => comb(n, k, tier.into(), method),
        Action::Stirling { n } => stirling_cmd(n),
        Action::Enumerate { items, limit } => enumerate(&items, limit),
        Action::Table { family, max_n, out } => table::run(family, max_n, &out),
        Action::Report => report(),
    }
}

/// JSON number for integer tiers; non-finite floats become strings.
fn count_json(c: Count) -> Value {
    match c {
        Count::U32(v) => json!(v),
        Count::U64(v) => json!(v),
        Count::F64(v) if v.is_finite() => json!(v),
        Count::F64(v) => json!(v.to_string()),
    }
}

fn print_json(v: &Value) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(v)?);
    Ok(())
}

fn factorial(n: u8, tier: Tier) -> Result<()> {
    tracing::info!(n, tier = ?tier, "factorial");
    if !tier.within_domain_factorial(n) {
        tracing::warn!(
            n,
            limit = tier.factorial_limit(),
            tier = ?tier,
            "outside documented domain; result wraps or saturates"
        );
    }
    print_json(&json!({
        "op": "factorial",
        "n": n,
        "tier": format!("{tier:?}"),
        "value": count_json(tier.factorial(n)),
    }))
}

fn perm(n: u8, k: u8, tier: Tier) -> Result<()> {
    tracing::info!(n, k, tier = ?tier, "perm");
    ensure_k_le_n(n.into(), k.into())?;
    if !tier.within_domain_permutations(n, k) {
        tracing::warn!(n, k, tier = ?tier, "outside documented domain; result wraps or saturates");
    }
    print_json(&json!({
        "op": "permutations",
        "n": n,
        "k": k,
        "tier": format!("{tier:?}"),
        "value": count_json(tier.permutations(n, k)),
        "exact_u64": try_permutations64(n.into(), k.into()).ok(),
    }))
}

fn comb(n: u16, k: u16, tier: Tier, method: Method) -> Result<()> {
    tracing::info!(n, k, tier = ?tier, method = ?method, "comb");
    ensure_k_le_n(n.into(), k.into())?;
    if !tier.within_domain_combinations(n, k) {
        tracing::warn!(
            n,
            k,
            limit = tier.combinations_limit(),
            tier = ?tier,
            "outside documented domain; result wraps or saturates"
        );
    }
    let value = match (method, tier) {
        (Method::Iterative, t) => t.combinations(n, k),
        (Method::Recursive, Tier::Narrow) => Count::U32(rcombinations(n, k)),
        (Method::Recursive, Tier::Wide) => Count::U64(rcombinations64(n, k)),
        (Method::Pascal, Tier::Narrow) => {
            if n > 30 {
                tracing::warn!(n, "pascal recursion is exponential in n; this may take a while");
            }
            Count::U32(comb_pascal(n, k))
        }
        (m, t) => bail!("method {m:?} has no {t:?} tier"),
    };
    print_json(&json!({
        "op": "combinations",
        "n": n,
        "k": k,
        "tier": format!("{tier:?}"),
        "method": format!("{method:?}"),
        "value": count_json(value),
        "exact_u64": try_combinations64(n.into(), k.into()).ok(),
    }))
}

fn stirling_cmd(n: u8) -> Result<()> {
    tracing::info!(n, "stirling");
    let bound = if n == 0 { None } else { Some(1.0 / (12.0 * f64::from(n))) };
    print_json(&json!({
        "op": "stirling",
        "n": n,
        "stirling": count_json(Count::F64(stirling(n))),
        "dfactorial": count_json(Count::F64(dfactorial(n))),
        "rel_error": count_json(Count::F64(stirling_rel_error(n))),
        "rel_error_bound": bound,
    }))
}

fn enumerate(items: &str, limit: Option<usize>) -> Result<()> {
    tracing::info!(items, limit = ?limit, "enumerate");
    let mut walker = LexPermutations::new(items.chars().collect());
    let mut count = 0usize;
    while let Some(p) = walker.next_perm() {
        if limit.is_some_and(|l| count >= l) {
            break;
        }
        println!("{}", p.iter().collect::<String>());
        count += 1;
    }
    tracing::info!(count, "enumerate_done");
    Ok(())
}

/// Build info plus the documented per-tier limits.
#[derive(Serialize)]
struct Report {
    code_rev: String,
    version: &'static str,
    factorial_max_n: [u8; 3],
    combinations_max_n: [u16; 3],
}

fn report() -> Result<()> {
    let obj = Report {
        code_rev: provenance::current_git_rev(),
        version: stathelpers::VERSION,
        factorial_max_n: Tier::ALL.map(Tier::factorial_limit),
        combinations_max_n: Tier::ALL.map(Tier::combinations_limit),
    };
    print_json(&serde_json::to_value(obj)?)
}
