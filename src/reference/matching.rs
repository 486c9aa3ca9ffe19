//! Name cleaning and fuzzy comparison shared by team and player lookups

/// Generational suffixes ignored when comparing player names
const SUFFIXES: &[&str] = &["jr", "sr", "ii", "iii", "iv", "v"];

/// Lowercase, drop periods and apostrophes, turn other punctuation into
/// spaces and collapse runs of whitespace.
pub fn clean_name(raw: &str) -> String {
    let mapped: String = raw
        .chars()
        .filter(|c| *c != '.' && *c != '\'' && *c != '’')
        .map(|c| if c.is_alphanumeric() { c } else { ' ' })
        .flat_map(char::to_lowercase)
        .collect();
    mapped.split_whitespace().collect::<Vec<_>>().join(" ")
}

fn search_tokens(search: &str) -> Vec<String> {
    let cleaned = clean_name(search);
    let tokens: Vec<String> = cleaned
        .split(' ')
        .filter(|t| !t.is_empty() && !SUFFIXES.contains(t))
        .map(str::to_string)
        .collect();
    if tokens.is_empty() {
        // a bare suffix is still a name
        cleaned.split(' ').filter(|t| !t.is_empty()).map(str::to_string).collect()
    } else {
        tokens
    }
}

/// Every token of `search` appears in `candidate`, in any order
pub fn contains_all_tokens(candidate: &str, search: &str) -> bool {
    let tokens = search_tokens(search);
    if tokens.is_empty() {
        return false;
    }
    let cleaned = clean_name(candidate);
    let candidate_tokens: Vec<&str> = cleaned.split(' ').collect();
    tokens.iter().all(|t| candidate_tokens.contains(&t.as_str()))
}

/// "J. Gibbs" style search: a first initial plus a last name
pub fn initial_last_match(candidate: &str, search: &str) -> bool {
    let tokens = search_tokens(search);
    let [initial, last] = tokens.as_slice() else {
        return false;
    };
    if initial.chars().count() != 1 {
        return false;
    }

    let cleaned = clean_name(candidate);
    let parts: Vec<&str> = cleaned
        .split(' ')
        .filter(|t| !SUFFIXES.contains(t))
        .collect();
    match (parts.first(), parts.last()) {
        (Some(first), Some(cand_last)) if parts.len() >= 2 => {
            first.starts_with(initial.as_str()) && *cand_last == last.as_str()
        }
        _ => false,
    }
}

/// Normalized edit similarity in `[0, 1]` between two cleaned names
pub fn similarity(a: &str, b: &str) -> f64 {
    strsim::normalized_levenshtein(&clean_name(a), &clean_name(b))
}

/// Word-bounded containment of `needle` in `haystack`, both already cleaned
pub fn contains_phrase(haystack: &str, needle: &str) -> bool {
    if needle.is_empty() {
        return false;
    }
    format!(" {haystack} ").contains(&format!(" {needle} "))
}

/// Pick the candidate that best matches `search`.
///
/// Tries token containment, then initial plus last name, then the most
/// similar name at or above `min_similarity`.
pub fn best_match<'a, T>(
    candidates: &'a [T],
    name_of: impl Fn(&T) -> &str,
    search: &str,
    min_similarity: f64,
) -> Option<&'a T> {
    if clean_name(search).is_empty() {
        return None;
    }

    if let Some(found) = candidates
        .iter()
        .find(|c| contains_all_tokens(name_of(*c), search))
    {
        return Some(found);
    }

    if let Some(found) = candidates
        .iter()
        .find(|c| initial_last_match(name_of(*c), search))
    {
        return Some(found);
    }

    candidates
        .iter()
        .map(|c| (c, similarity(name_of(c), search)))
        .filter(|(_, score)| *score >= min_similarity)
        .max_by(|a, b| a.1.total_cmp(&b.1))
        .map(|(c, _)| c)
}
