use comparator::{
    compare_lines, compare_texts, detect_duplicate_lines, detect_duplicate_tokens, hash_document,
    render_duplicates, render_highlighted, CompareConfig, DiffEntry, DiffSummary, TextDocument,
};

const SAMPLES: &[&str] = &[
    "",
    "single line",
    "line1\nline2\nline3",
    "the cat sat on the mat the cat ran",
    "mixed \r\n endings \n and \n\n blanks",
    "unicode caf\u{00E9} \u{1F600} tokens caf\u{00E9}",
];

#[test]
fn compare_lines_bit_identical_across_calls() {
    for original in SAMPLES {
        for candidate in SAMPLES {
            let first = compare_texts(original, candidate);
            let second = compare_texts(original, candidate);
            assert_eq!(
                first, second,
                "diff not deterministic for {original:?} vs {candidate:?}"
            );
        }
    }
}

#[test]
fn compare_lines_length_invariant_holds_for_all_pairs() {
    for original in SAMPLES {
        for candidate in SAMPLES {
            let a = TextDocument::from_text(original);
            let b = TextDocument::from_text(candidate);
            let entries = compare_lines(&a, &b);
            assert_eq!(entries.len(), a.line_count().max(b.line_count()));
            for (i, entry) in entries.iter().enumerate() {
                assert_eq!(entry.line_index(), i);
            }
        }
    }
}

#[test]
fn self_comparison_is_all_unchanged() {
    for sample in SAMPLES {
        let doc = TextDocument::from_text(sample);
        let entries = compare_lines(&doc, &doc);
        assert_eq!(entries.len(), doc.line_count());
        assert!(entries
            .iter()
            .all(|e| matches!(e, DiffEntry::Unchanged { .. })));
        assert!(DiffSummary::from_entries(&entries).is_identical());
    }
}

#[test]
fn mirror_symmetry_holds_for_all_pairs() {
    for original in SAMPLES {
        for candidate in SAMPLES {
            let forward = compare_texts(original, candidate);
            let backward = compare_texts(candidate, original);
            assert_eq!(forward.len(), backward.len());
            for (f, r) in forward.iter().zip(backward.iter()) {
                match (f, r) {
                    (DiffEntry::Unchanged { .. }, DiffEntry::Unchanged { .. }) => {
                        assert_eq!(f, r)
                    }
                    (
                        DiffEntry::Changed {
                            original: fo,
                            candidate: fc,
                            ..
                        },
                        DiffEntry::Changed {
                            original: ro,
                            candidate: rc,
                            ..
                        },
                    ) => {
                        assert_eq!(fo, rc);
                        assert_eq!(fc, ro);
                    }
                    (DiffEntry::Added { .. }, DiffEntry::Removed { .. })
                    | (DiffEntry::Removed { .. }, DiffEntry::Added { .. }) => {}
                    (f, r) => panic!("asymmetric entries: {f:?} vs {r:?}"),
                }
            }
        }
    }
}

#[test]
fn duplicate_reports_bit_identical_across_calls() {
    for sample in SAMPLES {
        let doc = TextDocument::from_text(sample);
        assert_eq!(detect_duplicate_tokens(&doc), detect_duplicate_tokens(&doc));
        assert_eq!(detect_duplicate_lines(&doc), detect_duplicate_lines(&doc));
    }
}

#[test]
fn renderings_bit_identical_across_calls() {
    let cfg = CompareConfig::default();
    for original in SAMPLES {
        for candidate in SAMPLES {
            let candidate_doc = TextDocument::from_text(candidate);
            let entries = compare_texts(original, candidate);
            let once = render_highlighted(&candidate_doc, &entries, &cfg).expect("render");
            let twice = render_highlighted(&candidate_doc, &entries, &cfg).expect("render");
            assert_eq!(once, twice);
        }
        let report = detect_duplicate_tokens(&TextDocument::from_text(original));
        let once = render_duplicates(&report, &cfg).expect("render");
        let twice = render_duplicates(&report, &cfg).expect("render");
        assert_eq!(once, twice);
    }
}

#[test]
fn hashes_stable_and_version_aware() {
    for sample in SAMPLES {
        let doc = TextDocument::from_text(sample);
        assert_eq!(hash_document(&doc, 1), hash_document(&doc, 1));
        assert_ne!(hash_document(&doc, 1), hash_document(&doc, 2));
    }
}

#[test]
fn serialized_results_stable() {
    // Serde output is part of the sink-facing contract; it must not drift
    // between identical invocations.
    let entries = compare_texts("line1\nline2", "line1\nedited");
    let first = serde_json::to_string(&entries).expect("serialize");
    let second = serde_json::to_string(&entries).expect("serialize");
    assert_eq!(first, second);

    let report = detect_duplicate_tokens(&TextDocument::from_text("a b a"));
    let first = serde_json::to_string(&report).expect("serialize");
    let second = serde_json::to_string(&report).expect("serialize");
    assert_eq!(first, second);
}
