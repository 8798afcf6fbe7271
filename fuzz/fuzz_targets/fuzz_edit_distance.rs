#![no_main]
use libfuzzer_sys::fuzz_target;

/// Fuzz the distance and alignment functions with split input.
fuzz_target!(|data: &[u8]| {
    let Ok(s) = std::str::from_utf8(data) else {
        return;
    };
    let mid = s
        .char_indices()
        .nth(s.chars().count() / 2)
        .map_or(s.len(), |(i, _)| i);
    let (a, b) = s.split_at(mid);

    let d = text_tools::levenshtein(a, b);
    assert!(d <= a.chars().count().max(b.chars().count()));
    assert_eq!(d, text_tools::levenshtein(b, a));

    let common = text_tools::longest_common_substring(a, b);
    assert!(a.contains(&common) && b.contains(&common));
});
