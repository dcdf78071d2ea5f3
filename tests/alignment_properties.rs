//! End-to-end properties of alignment and aggregation.
//!
//! Checks the documented behavior on small hand-written cases and on
//! generated inputs shaped like real abstracts.

use proptest::prelude::*;
use qtlview::{
    align, align_spans, compare, concat_segments, frequency_of, Annotation, AnnotationView,
    Record, Segment, SideCounts,
};

fn ann(word: &str, trait_type: &str) -> Annotation {
    Annotation::new(word, trait_type)
}

// =============================================================================
// Documented examples
// =============================================================================

mod documented {
    use super::*;

    #[test]
    fn drop_when_not_found() {
        assert_eq!(align("cat sat", &[ann("dog", "X")]), vec![Segment::plain("cat sat")]);
    }

    #[test]
    fn order_by_first_occurrence() {
        assert_eq!(
            align("b a", &[ann("a", "X"), ann("b", "Y")]),
            vec![
                Segment::annotated("b", "Y"),
                Segment::plain(" "),
                Segment::annotated("a", "X"),
            ]
        );
    }

    #[test]
    fn rematch_after_cursor() {
        assert_eq!(
            align("aa", &[ann("a", "X"), ann("a", "Y")]),
            vec![Segment::annotated("a", "X"), Segment::annotated("a", "Y")]
        );
    }

    #[test]
    fn frequency() {
        let table = frequency_of(&[ann("a", "X"), ann("b", "X"), ann("c", "Y")]);
        assert_eq!(table.iter().collect::<Vec<_>>(), vec![("X", 2), ("Y", 1)]);
    }

    #[test]
    fn comparison_completeness() {
        let table = compare(&[ann("a", "X")], &[ann("b", "X")]);
        assert_eq!(
            table.iter().collect::<Vec<_>>(),
            vec![("X", SideCounts { title: 1, abstract_: 1 })]
        );
    }

    #[test]
    fn empty_inputs() {
        assert!(align("", &[]).is_empty());
        assert!(frequency_of(&[]).is_empty());
        assert!(compare(&[], &[]).is_empty());
    }
}

// =============================================================================
// Realistic abstract
// =============================================================================

mod abstract_text {
    use super::*;

    const ABSTRACT: &str = "Grain yield and plant height are key agronomic traits. \
        We identified 12 QTL for grain yield, 5 for plant height and 3 for \
        thousand-grain weight (TGW) in a RIL population.";

    #[test]
    fn dictionary_and_model_traits() {
        let anns = [
            ann("plant height", "dict_Trait"),
            ann("grain yield", "dict_Trait"),
            ann("weight", "I-Trait"),
            ann("grain yield", "dict_Trait"),
            ann("tgw", "I-Trait"),
        ];
        let segments = align(ABSTRACT, &anns);
        assert_eq!(concat_segments(&segments), ABSTRACT);

        let highlighted: Vec<_> = segments
            .iter()
            .filter(|s| s.is_annotated())
            .map(|s| s.text.as_str())
            .collect();
        // "Grain yield" (capitalized) is not a match; the lowercase service
        // output only matches later occurrences. "tgw" never matches "TGW".
        assert_eq!(highlighted, ["plant height", "grain yield", "weight"]);
    }

    #[test]
    fn earlier_duplicate_consumed() {
        // The second "grain yield" has no occurrence after the first one's span.
        let text = "plant height vs grain yield";
        let segments = align(
            text,
            &[ann("grain yield", "A"), ann("grain yield", "B"), ann("plant height", "C")],
        );
        assert_eq!(
            segments,
            vec![
                Segment::annotated("plant height", "C"),
                Segment::plain(" vs "),
                Segment::annotated("grain yield", "A"),
            ]
        );
    }
}

// =============================================================================
// Record to view
// =============================================================================

#[test]
fn failed_fetch_record_yields_empty_view() {
    let view = AnnotationView::build(&Record::default());
    assert_eq!(view, AnnotationView::default());
}

#[test]
fn view_from_wire_json() {
    let record = Record::from_json(
        r#"{
            "PMID": "34902587",
            "Title": "Mapping QTL for grain yield in wheat",
            "Abstract": "Grain yield QTL co-located with plant height loci.",
            "Title_Traits": [{"Word": "grain yield", "Trait_Type": "dict_Trait"}],
            "Abstract_Traits": [{"Word": "height", "Trait_Type": "I-Trait"}]
        }"#,
    )
    .unwrap();
    let view = AnnotationView::build(&record);

    assert_eq!(concat_segments(&view.title), record.title());
    assert_eq!(concat_segments(&view.abstract_), record.abstract_text());
    assert_eq!(view.frequency.labels().collect::<Vec<_>>(), ["I-Trait", "dict_Trait"]);
    assert_eq!(
        view.comparison.get("dict_Trait"),
        Some(SideCounts { title: 1, abstract_: 0 })
    );
    assert_eq!(
        view.comparison.get("I-Trait"),
        Some(SideCounts { title: 0, abstract_: 1 })
    );
}

// =============================================================================
// Generated inputs
// =============================================================================

fn vocabulary() -> impl Strategy<Value = &'static str> {
    prop::sample::select(vec![
        "yield", "grain yield", "height", "plant height", "weight", "grain", "é",
    ])
}

fn annotations() -> impl Strategy<Value = Vec<Annotation>> {
    prop::collection::vec(
        (vocabulary(), prop::sample::select(vec!["I-Trait", "dict_Trait", "misc"]))
            .prop_map(|(w, t)| Annotation::new(w, t)),
        0..10,
    )
}

fn text() -> impl Strategy<Value = String> {
    prop::collection::vec(
        prop_oneof![vocabulary().prop_map(str::to_string), "[ ,.]{1,3}", "[a-z]{1,6}"],
        0..16,
    )
    .prop_map(|parts| parts.concat())
}

proptest! {
    #[test]
    fn segments_reconstruct_text(t in text(), anns in annotations()) {
        prop_assert_eq!(concat_segments(&align(&t, &anns)), t);
    }

    #[test]
    fn spans_tile_the_text(t in text(), anns in annotations()) {
        let spans = align_spans(&t, &anns);
        let mut covered = 0;
        for span in &spans {
            prop_assert_eq!(span.start, covered);
            prop_assert!(span.end > span.start);
            covered = span.end;
        }
        prop_assert_eq!(covered, t.len());
    }

    #[test]
    fn highlight_count_bounded(t in text(), anns in annotations()) {
        let highlighted = align(&t, &anns).iter().filter(|s| s.is_annotated()).count();
        prop_assert!(highlighted <= anns.len());
    }

    #[test]
    fn alignment_is_deterministic(t in text(), anns in annotations()) {
        prop_assert_eq!(align(&t, &anns), align(&t, &anns));
    }

    #[test]
    fn frequency_counts_every_instance(anns in annotations()) {
        prop_assert_eq!(frequency_of(&anns).total(), anns.len());
    }
}
