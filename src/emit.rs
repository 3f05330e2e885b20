pub fn to_text(fortunes: &[String]) -> String {
    fortunes.join("\n")
}

pub fn to_markdown(fortunes: &[String]) -> String {
    fortunes
        .iter()
        .map(|f| format!("* {}", f))
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn to_json(fortunes: &[String]) -> String {
    // serde_json's pretty printer indents with 2 spaces
    serde_json::to_string_pretty(fortunes).unwrap()
}

pub fn to_module(fortunes: &[String]) -> String {
    format!("export default {};", to_json(fortunes))
}
