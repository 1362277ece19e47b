//! Example: completing shell commands from a history.
//!
//! Builds a trie from a small command history, then completes a few prefixes
//! and dumps the stored entries with their counts.
//!
//! Run with: cargo run --example autocomplete

use libptrie::ptrie::builder::build_trie;
use libptrie::ptrie::script::{run_script, Action};

fn main() {
    let history = [
        "git status",
        "git stash",
        "git status",
        "git commit -m",
        "cargo test",
        "cargo build",
        "cargo test",
        "cargo test",
        "ls -la",
    ];
    let trie = build_trie(history).expect("history is printable ASCII");

    println!("Completions:");
    for prefix in ["git st", "git", "cargo ", "ls", "make"] {
        println!("  {prefix:?} -> {:?}", trie.complete(prefix));
    }

    println!("\nEntries:");
    print!("{trie}");

    println!("\nScripted run:");
    let script = [
        Action::Add("he"),
        Action::Add("hey"),
        Action::Add("hello"),
        Action::Add("hello"),
        Action::Complete { query: "h", expected: "hello" },
        Action::Terminate,
    ];
    match run_script(&script) {
        Ok(trie) => println!("  passed, {} distinct words", trie.len()),
        Err(e) => println!("  failed: {e}"),
    }
}
