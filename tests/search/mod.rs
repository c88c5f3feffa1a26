use errstack::{index_nth, SepIndex};

#[test]
fn nth_newline_offsets_in_sample_text() {
    let s = "testing \nString \nabc testing, abc\n again";

    assert_eq!(index_nth(s, "\n", 0), SepIndex::NotFound);
    assert_eq!(index_nth(s, "\n", 1), SepIndex::Found(8));
    assert_eq!(index_nth(s, "\n", 2), SepIndex::Found(16));
    assert_eq!(index_nth(s, "\n", 3), SepIndex::Found(33));
    assert_eq!(index_nth(s, "\n", 4), SepIndex::TooFew);
}

#[test]
fn absent_separator_is_not_found_regardless_of_n() {
    let s = "testing \nString \nabc testing, abc\n again";

    assert_eq!(index_nth(s, "\t", 1), SepIndex::NotFound);
    assert_eq!(index_nth(s, "\t", 5), SepIndex::NotFound);
}

#[test]
fn degenerate_queries_are_not_found() {
    assert_eq!(index_nth("", "", 1), SepIndex::NotFound);
    assert_eq!(index_nth("", "\n", 1), SepIndex::NotFound);
    assert_eq!(index_nth("abc", "", 1), SepIndex::NotFound);
    assert_eq!(index_nth("abc", "b", 0), SepIndex::NotFound);
}

#[test]
fn too_few_requires_at_least_one_occurrence() {
    // One occurrence, three requested: some were found, but not enough.
    assert_eq!(index_nth("a-b", "-", 3), SepIndex::TooFew);
    // Zero occurrences never report TooFew.
    assert_eq!(index_nth("ab", "-", 3), SepIndex::NotFound);
}

#[test]
fn scan_is_non_overlapping() {
    assert_eq!(index_nth("aaaa", "aa", 1), SepIndex::Found(0));
    assert_eq!(index_nth("aaaa", "aa", 2), SepIndex::Found(2));
    assert_eq!(index_nth("aaaa", "aa", 3), SepIndex::TooFew);
}

#[test]
fn found_offsets_match_reference_scan() {
    let s = "key=1;key=2;key=3;tail";
    for n in 1..=3 {
        let expected = s.match_indices("key=").nth(n - 1).map(|(i, _)| i);
        assert_eq!(index_nth(s, "key=", n).found(), expected);
    }
    assert_eq!(index_nth(s, "key=", 4), SepIndex::TooFew);
}

#[test]
fn found_helper_exposes_offset() {
    assert_eq!(index_nth("a-b", "-", 1).found(), Some(1));
    assert_eq!(index_nth("a-b", "-", 2).found(), None);
    assert_eq!(index_nth("ab", "-", 1).found(), None);
}
