//! Walk the 120 permutations of "abcde" and print the small count tables.
//!
//! Run with `cargo run -p stathelpers --example enumerate_abcde`.

use stathelpers::cfg::{COMBINATIONS_MAX_N_U32, FACTORIAL_MAX_N_U64};
use stathelpers::{combinations, factorial64, next_permutation, stirling};

fn main() {
    let mut text = *b"abcde";
    let mut count = 0;
    loop {
        print!("{}\t", String::from_utf8_lossy(&text));
        count += 1;
        if count % 5 == 0 {
            println!();
        }
        if !next_permutation(&mut text) {
            break;
        }
    }
    println!("count={count}");

    println!("\nn\tn!\tstirling(n)");
    for n in 0..=FACTORIAL_MAX_N_U64 {
        println!("{n}\t{}\t{:.6e}", factorial64(n), stirling(n));
    }

    println!("\nC(n, n/2) for n <= {COMBINATIONS_MAX_N_U32}");
    for n in 0..=COMBINATIONS_MAX_N_U32 {
        println!("{n}\t{}", combinations(n, n / 2));
    }
}
