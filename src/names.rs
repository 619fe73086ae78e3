/// Canonical form of a user-typed city name.
///
/// Blank input becomes the empty string. Otherwise every space-separated
/// word is lowercased with its first character uppercased, and words are
/// joined by single spaces: `"  new   YORK "` becomes `"New York"`.
pub fn normalize_city_name(input: &str) -> String {
    if input.trim().is_empty() {
        return String::new();
    }

    input
        .split(' ')
        .filter(|word| !word.is_empty())
        .map(capitalize)
        .collect::<Vec<_>>()
        .join(" ")
}

fn capitalize(word: &str) -> String {
    let lower = word.to_lowercase();
    let mut chars = lower.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
