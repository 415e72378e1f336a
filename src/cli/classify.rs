//! Classify command

use anyhow::Result;

use super::output::Output;
use crate::domain::{classify, matching_rules};

pub fn run(output: &Output, first: &str, second: &str, all: bool) -> Result<()> {
    if first.trim().is_empty() || second.trim().is_empty() {
        anyhow::bail!("Syllables must not be empty");
    }

    let rhyme = classify(first, second);
    let rules = matching_rules(first, second);
    output.verbose_ctx(
        "classify",
        &format!("{} / {} satisfies {} rule(s)", first, second, rules.len()),
    );

    if output.is_json() {
        output.data(&serde_json::json!({
            "first": first,
            "second": second,
            "rhyme_type": rhyme,
            "rhymes": rhyme.is_rhyme(),
            "rules": rules,
        }));
    } else {
        println!("{} / {}: {}", first, second, rhyme);
        if all {
            let labels: Vec<&str> = rules.iter().map(|r| r.label()).collect();
            println!("rules: {}", labels.join(", "));
        }
    }

    Ok(())
}
