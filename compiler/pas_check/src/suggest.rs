//! "Did you mean?" suggestions for undefined variables.

use crate::SymbolTable;

/// The declared variable closest to `unknown`, if any is close enough.
pub fn suggest_variable(table: &SymbolTable, unknown: &str) -> Option<String> {
    suggest_similar(unknown, table.variables().map(|var| var.name.as_str()))
}

/// Levenshtein distance in chars, keeping a single row of the table.
fn edit_distance(from: &str, to: &str) -> usize {
    let target: Vec<char> = to.chars().collect();
    // row[j]: distance from the prefix of `from` read so far to target[..j].
    let mut row: Vec<usize> = (0..=target.len()).collect();

    for (i, source_char) in from.chars().enumerate() {
        let mut diagonal = row[0];
        row[0] = i + 1;
        for (j, &target_char) in target.iter().enumerate() {
            let substitute = diagonal + usize::from(source_char != target_char);
            let insert = row[j] + 1;
            let delete = row[j + 1] + 1;
            diagonal = row[j + 1];
            row[j + 1] = substitute.min(insert).min(delete);
        }
    }

    row[target.len()]
}

/// Edits allowed before two names stop looking alike.
fn threshold(name_len: usize) -> usize {
    match name_len {
        0 => 0,
        1..=2 => 1,
        3..=5 => 2,
        _ => 3,
    }
}

/// Closest candidate within the threshold; ties go to the smaller name so the
/// answer does not depend on hash order.
fn suggest_similar<'a>(name: &str, candidates: impl Iterator<Item = &'a str>) -> Option<String> {
    let limit = threshold(name.len());
    // A length gap alone can rule a candidate out before the table is built.
    let plausible = |candidate: &&str| {
        *candidate != name && name.len().abs_diff(candidate.len()) <= limit
    };
    candidates
        .filter(plausible)
        .map(|candidate| (edit_distance(name, candidate), candidate))
        .filter(|(distance, _)| *distance <= limit)
        .min()
        .map(|(_, candidate)| candidate.to_string())
}
