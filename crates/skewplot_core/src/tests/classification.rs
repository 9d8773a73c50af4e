//! Tests for skew classification and its display text

use crate::model::{Language, Parameters, SkewCategory};
use crate::snapshot::CurveSnapshot;

#[test]
fn test_sign_decides_category() {
    assert_eq!(SkewCategory::from_skewness(-0.5), SkewCategory::Negative);
    assert_eq!(SkewCategory::from_skewness(0.5), SkewCategory::Positive);
    assert_eq!(SkewCategory::from_skewness(0.0), SkewCategory::Symmetric);
    assert_eq!(SkewCategory::from_skewness(-0.0), SkewCategory::Symmetric);
    assert_eq!(SkewCategory::from_skewness(f64::NAN), SkewCategory::Symmetric);
}

#[test]
fn test_magnitude_does_not_matter() {
    assert_eq!(SkewCategory::from_skewness(-1.0), SkewCategory::from_skewness(-0.1));
    assert_eq!(SkewCategory::from_skewness(1e-9), SkewCategory::Positive);
}

#[test]
fn test_spanish_labels() {
    let es = Language::Spanish;
    assert_eq!(SkewCategory::Negative.label(es), "Negativa");
    assert_eq!(SkewCategory::Positive.label(es), "Positiva");
    assert_eq!(SkewCategory::Symmetric.label(es), "Normal (sin asimetría)");
}

#[test]
fn test_spanish_explanations() {
    let es = Language::Spanish;
    assert!(SkewCategory::Negative.explanation(es).starts_with("La cola izquierda es más larga."));
    assert!(SkewCategory::Positive.explanation(es).starts_with("La cola derecha es más larga."));
    assert_eq!(
        SkewCategory::Symmetric.explanation(es),
        "La distribución es simétrica. La moda, mediana y media coinciden."
    );
}

#[test]
fn test_each_category_has_distinct_text() {
    for language in Language::ALL {
        let texts = [
            SkewCategory::Negative.explanation(language),
            SkewCategory::Symmetric.explanation(language),
            SkewCategory::Positive.explanation(language),
        ];
        assert_ne!(texts[0], texts[1]);
        assert_ne!(texts[1], texts[2]);
        assert_ne!(texts[0], texts[2]);
    }
}

#[test]
fn test_snapshot_classifies_example() {
    let snapshot = CurveSnapshot::compute(&Parameters::new(1.0, 0.5, -1.0));
    assert_eq!(snapshot.category, SkewCategory::Negative);
    assert_eq!(snapshot.category.label(Language::default()), "Negativa");
}
