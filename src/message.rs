//! Message reconstruction from per-beacon fragment streams.

/// Merge three fragment lists into the original message.
///
/// Lists arrive in the canonical beacon order. For every position up to the
/// length of the longest list, the first list holding a non-empty word at
/// that position contributes it; positions no beacon heard are skipped
/// without leaving a separator. When two beacons report different words at
/// the same position, the earlier list wins.
pub fn assemble(fragment_lists: [&[String]; 3]) -> String {
    let max_len = fragment_lists
        .iter()
        .map(|list| list.len())
        .max()
        .unwrap_or(0);

    let mut words = Vec::with_capacity(max_len);
    for i in 0..max_len {
        for list in &fragment_lists {
            if let Some(word) = list.get(i) {
                if !word.is_empty() {
                    words.push(word.as_str());
                    break;
                }
            }
        }
    }

    words.join(" ")
}
