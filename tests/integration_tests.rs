use levdict::prelude::*;
use std::collections::BTreeSet;

fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn set(items: &[&str]) -> BTreeSet<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn test_dictionary() -> TrieDictionary {
    TrieDictionary::from_terms(["Test", "Tst", "Tset", "Tsset", "abc", "Teest", "Teeesst"])
}

#[test]
fn test_standard_search() {
    init_logger();
    let results = fuzzy_search(&test_dictionary(), "Test", &SearchOptions::new(1)).unwrap();
    assert_eq!(results, set(&["Teest", "Test", "Tst"]));
}

#[test]
fn test_query_longer_than_terms() {
    let dict = TrieDictionary::from_terms(["andere", "ander"]);
    let results = fuzzy_search(&dict, "anders", &SearchOptions::new(1)).unwrap();
    assert_eq!(results, set(&["andere", "ander"]));
}

#[test]
fn test_merge_and_split() {
    let dict = TrieDictionary::from_terms(["water", "uuasser"]);

    let results = fuzzy_search(&dict, "wasser", &SearchOptions::new(1)).unwrap();
    assert!(results.is_empty(), "got {:?}", results);

    let options = SearchOptions::new(1).merge_split(true);
    let results = fuzzy_search(&dict, "wasser", &options).unwrap();
    assert_eq!(results, set(&["uuasser", "water"]));
}

#[test]
fn test_transposition() {
    let options = SearchOptions::new(1).transposition(true);
    let results = fuzzy_search(&test_dictionary(), "Test", &options).unwrap();
    assert_eq!(results, set(&["Teest", "Test", "Tset", "Tst"]));
}

#[test]
fn test_transposition_is_not_damerau() {
    let dict = TrieDictionary::from_terms(["ABC"]);

    let options = SearchOptions::new(2).transposition(true);
    assert!(fuzzy_search(&dict, "CA", &options).unwrap().is_empty());

    let options = SearchOptions::new(3).transposition(true);
    assert_eq!(fuzzy_search(&dict, "CA", &options).unwrap(), set(&["ABC"]));
}

#[test]
fn test_repetitions() {
    let options = SearchOptions::new(1).repetitions(true);
    let results = fuzzy_search(&test_dictionary(), "Test", &options).unwrap();
    assert_eq!(results, set(&["Teeesst", "Teest", "Test", "Tst"]));
}

#[test]
fn test_strict_distance() {
    let dict = TrieDictionary::from_terms(["cat", "mat", "hat", "dog", "apple", "flat"]);

    let options = SearchOptions::new(2).strict(true);
    assert_eq!(fuzzy_search(&dict, "rat", &options).unwrap(), set(&["flat"]));

    let options = SearchOptions::new(2);
    assert_eq!(
        fuzzy_search(&dict, "rat", &options).unwrap(),
        set(&["cat", "mat", "hat", "flat"])
    );
}

#[test]
fn test_candidates_report_minimal_distance() {
    let candidates =
        fuzzy_search_candidates(&test_dictionary(), "Test", &SearchOptions::new(3)).unwrap();

    for candidate in &candidates {
        assert_eq!(
            candidate.distance,
            levdict::distance::standard_distance("Test", &candidate.term),
            "wrong distance for {}",
            candidate.term
        );
    }
    assert_eq!(candidates.first().map(|c| c.term.as_str()), Some("Test"));
}

#[test]
fn test_query_in_dictionary_is_returned() {
    let dict = TrieDictionary::from_terms(["query", "quern"]);
    let results = fuzzy_search(&dict, "query", &SearchOptions::new(0)).unwrap();
    assert_eq!(results, set(&["query"]));
}

#[test]
fn test_high_distance_returns_all_terms() {
    let terms = ["foo", "bar", "baz", "qux", "quo"];
    let dict = TrieDictionary::from_terms(terms);

    let results = fuzzy_search(&dict, "quuo", &SearchOptions::new(99)).unwrap();
    assert_eq!(results, set(&terms));
}

#[test]
fn test_unbounded_distance_returns_all_terms() {
    init_logger();
    let dict = TrieDictionary::from_terms(["cat", "flat"]);

    let results = fuzzy_search(&dict, "rat", &SearchOptions::new(usize::MAX)).unwrap();
    assert_eq!(results, set(&["cat", "flat"]));

    let options = SearchOptions::new(usize::MAX).operations(EditOperations::all());
    let candidates = fuzzy_search_candidates(&dict, "rat", &options).unwrap();
    assert_eq!(candidates.len(), 2);
}

#[test]
fn test_empty_query() {
    let dict = TrieDictionary::from_terms(["", "a", "ab", "abc"]);
    let results = fuzzy_search(&dict, "", &SearchOptions::new(2)).unwrap();
    assert_eq!(results, set(&["", "a", "ab"]));
}

#[test]
fn test_unicode_terms() {
    let dict = TrieDictionary::from_terms(["café", "cafe", "naïve", "日本語"]);

    let results = fuzzy_search(&dict, "cafe", &SearchOptions::new(1)).unwrap();
    assert_eq!(results, set(&["café", "cafe"]));

    let results = fuzzy_search(&dict, "日本", &SearchOptions::new(1)).unwrap();
    assert_eq!(results, set(&["日本語"]));
}

#[test]
fn test_signed_distance_rejected() {
    let err = SearchOptions::try_from_signed(-1).unwrap_err();
    assert!(matches!(err, SearchError::NegativeDistance(-1)));
}

#[test]
fn test_unreachable_strict_distance_rejected() {
    let dict = TrieDictionary::from_terms(["cat", "flat"]);
    let options = SearchOptions::new(5).strict(true);

    let err = fuzzy_search(&dict, "rat", &options).unwrap_err();
    assert!(matches!(
        err,
        SearchError::UnreachableStrictDistance {
            max_distance: 5,
            bound: 4
        }
    ));

    // At the bound the search runs and simply finds nothing
    let options = SearchOptions::new(4).strict(true);
    assert!(fuzzy_search(&dict, "rat", &options).unwrap().is_empty());
}

#[test]
fn test_transducer_search() {
    let transducer = Transducer::with_repetitions(test_dictionary());

    let strict = transducer.search("Test", 1, true).unwrap();
    assert_eq!(strict, set(&["Tst"]));

    let lazy: BTreeSet<String> = transducer.query("Test", 1).collect();
    assert_eq!(lazy, set(&["Teeesst", "Teest", "Test", "Tst"]));
}

#[test]
fn test_operations_from_str() {
    let operations: EditOperations = "transposition,merge-split".parse().unwrap();
    let options = SearchOptions::new(1).operations(operations);

    let dict = TrieDictionary::from_terms(["Tset", "water"]);
    assert_eq!(
        fuzzy_search(&dict, "Test", &options).unwrap(),
        set(&["Tset"])
    );
    assert_eq!(
        fuzzy_search(&dict, "wasser", &options).unwrap(),
        set(&["water"])
    );
}

#[cfg(feature = "serialization")]
#[test]
fn test_options_from_json() {
    let options = SearchOptions::from_json(
        r#"{"max_distance": 2, "strict_distance": true, "transposition": true}"#,
    )
    .unwrap();
    assert_eq!(options, SearchOptions::new(2).transposition(true).strict(true));

    let err = SearchOptions::from_json(r#"{"max_distance": "two"}"#).unwrap_err();
    assert!(matches!(err, SearchError::InvalidConfig(_)));
}
