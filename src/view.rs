//! Everything the viewer shows for one record.

use serde::Serialize;

use crate::aggregate::{attributed_to, compare, frequency_of, ComparisonTable, FrequencyTable};
use crate::align::{align, Segment};
use crate::record::Record;

/// Aligned fields and aggregation tables for one record.
///
/// Both fields are aligned against the combined (abstract-first) list, so a
/// term reported for one field is still highlighted where it occurs in the
/// other.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct AnnotationView {
    /// Title segments
    pub title: Vec<Segment>,
    /// Abstract segments
    #[serde(rename = "abstract")]
    pub abstract_: Vec<Segment>,
    /// Category counts over the combined list
    pub frequency: FrequencyTable,
    /// Title vs abstract split over the per-field attributed lists
    pub comparison: ComparisonTable,
}

impl AnnotationView {
    /// Build the view for `record`.
    #[must_use]
    pub fn build(record: &Record) -> Self {
        let annotations = record.annotations();
        let title_attributed = attributed_to(record.title(), &annotations);
        let abstract_attributed = attributed_to(record.abstract_text(), &annotations);

        let view = Self {
            title: align(record.title(), &annotations),
            abstract_: align(record.abstract_text(), &annotations),
            frequency: frequency_of(&annotations),
            comparison: compare(&title_attributed, &abstract_attributed),
        };
        log::debug!(
            "built view: {} title / {} abstract segments, {} categories",
            view.title.len(),
            view.abstract_.len(),
            view.frequency.len()
        );
        view
    }

    /// Number of highlighted segments across both fields.
    #[must_use]
    pub fn highlighted(&self) -> usize {
        self.title
            .iter()
            .chain(&self.abstract_)
            .filter(|s| s.is_annotated())
            .count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aggregate::SideCounts;
    use crate::annotation::Annotation;

    #[test]
    fn test_empty_record_view() {
        let view = AnnotationView::build(&Record::default());
        assert!(view.title.is_empty());
        assert!(view.abstract_.is_empty());
        assert!(view.frequency.is_empty());
        assert!(view.comparison.is_empty());
    }

    #[test]
    fn test_cross_field_highlighting() {
        let record = Record::new(
            "grain yield in rice",
            "Plant height affects grain yield.",
            vec![Annotation::new("grain yield", "I-Trait")],
            vec![Annotation::new("height", "dict_Trait")],
        )
        .unwrap();
        let view = AnnotationView::build(&record);

        assert_eq!(
            view.abstract_,
            vec![
                Segment::plain("Plant "),
                Segment::annotated("height", "dict_Trait"),
                Segment::plain(" affects "),
                Segment::annotated("grain yield", "I-Trait"),
                Segment::plain("."),
            ]
        );
        assert_eq!(view.title[0], Segment::annotated("grain yield", "I-Trait"));
        assert_eq!(view.highlighted(), 3);

        assert_eq!(view.frequency.labels().collect::<Vec<_>>(), ["dict_Trait", "I-Trait"]);
        assert_eq!(
            view.comparison.get("I-Trait"),
            Some(SideCounts {
                title: 1,
                abstract_: 1
            })
        );
        assert_eq!(
            view.comparison.get("dict_Trait"),
            Some(SideCounts {
                title: 0,
                abstract_: 1
            })
        );
    }
}
