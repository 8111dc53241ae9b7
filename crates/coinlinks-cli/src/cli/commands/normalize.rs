//! `coinlinks normalize <raw>...` – show normalized candidates.

use coinlinks_core::links::{normalize, NormalizedLink};

const DROPPED: &str = "(dropped)";

pub fn run_normalize(raw: &[String]) {
    for line in normalized_lines(raw) {
        println!("{line}");
    }
}

fn normalized_lines(raw: &[String]) -> Vec<String> {
    raw.iter()
        .map(|r| {
            normalize(r)
                .map(NormalizedLink::into_string)
                .unwrap_or_else(|| DROPPED.to_string())
        })
        .collect()
}
