use regex::Regex;
use std::collections::HashSet;
use std::sync::LazyLock;

static RE_NON_WORD: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\W").unwrap());

// Unicode \w: accented letters count as word characters and stay in the key.
pub fn dedup_key(fortune: &str) -> String {
    RE_NON_WORD
        .replace_all(&fortune.to_lowercase(), "")
        .into_owned()
}

pub fn dedupe(fortunes: &[String]) -> Vec<String> {
    let mut seen: HashSet<String> = HashSet::new();
    fortunes
        .iter()
        .filter(|f| seen.insert(dedup_key(f)))
        .cloned()
        .collect()
}
