//! Integration tests for the study pipeline
//!
//! Tests the full path: reviews → classifier → assessment → badge

use pretty_assertions::assert_eq;
use studyspot::core::{classify, derive_badge, StudyClassifier};
use studyspot::types::{BadgeLevel, Feature};

/// (reviews, expected features, expected level, expected reason)
fn cases() -> Vec<(Vec<&'static str>, Vec<Feature>, BadgeLevel, &'static str)> {
    vec![
        (
            vec!["Great wifi and quiet corner to study"],
            vec![Feature::Wifi, Feature::Quiet],
            BadgeLevel::Great,
            "WiFi + other features",
        ),
        (
            vec!["Nice seating, lots of tables"],
            vec![Feature::Seating],
            BadgeLevel::Inconclusive,
            "Limited info in reviews",
        ),
        (
            vec![],
            vec![],
            BadgeLevel::Inconclusive,
            "No study info in reviews",
        ),
        (
            vec!["Good outlets and charging stations", "plenty of room and peaceful"],
            vec![Feature::Outlets, Feature::Seating, Feature::Quiet],
            BadgeLevel::Good,
            "Multiple study features",
        ),
        (
            vec!["The internet is fast", "Lovely pastries"],
            vec![Feature::Wifi],
            BadgeLevel::Good,
            "WiFi mentioned in reviews",
        ),
    ]
}

#[test]
fn test_concrete_cases() {
    for (reviews, features, level, reason) in cases() {
        let assessment = classify(&reviews);
        let badge = derive_badge(&assessment);

        assert_eq!(assessment.features(), features.as_slice(), "reviews: {:?}", reviews);
        assert_eq!(assessment.score() as usize, features.len());
        assert_eq!(badge.level, level, "reviews: {:?}", reviews);
        assert_eq!(badge.message, reason);
    }
}

#[test]
fn test_score_always_matches_features() {
    let corpora = [
        "",
        "cozy",
        "wifi wifi wifi",
        "laptop power seats calm internet",
        "Working remotely? Bring a charger, there's a plug under every table. Seats are roomy.",
        "WI-FI. QUIET. SPACIOUS.",
    ];
    for text in corpora {
        let a = classify([text]);
        assert_eq!(a.score() as usize, a.features().len(), "text: {}", text);
        assert!(a.features().iter().all(|f| Feature::ALL.contains(f)));
        assert!(a.features().windows(2).all(|w| w[0] < w[1]), "not in enumeration order");
    }
}

#[test]
fn test_review_order_and_case_invariance() {
    let reviews = vec!["Fast WiFi", "no outlets near the window", "Calm vibes", "remote work heaven"];
    let mut reversed = reviews.clone();
    reversed.reverse();
    let shouted: Vec<String> = reviews.iter().map(|r| r.to_uppercase()).collect();

    let base = classify(&reviews);
    assert_eq!(classify(&reversed), base);
    assert_eq!(classify(&shouted), base);
    assert_eq!(
        base.features(),
        &[Feature::Wifi, Feature::Laptop, Feature::Quiet]
    );
}

#[test]
fn test_classifier_is_shareable_across_threads() {
    let classifier = std::sync::Arc::new(StudyClassifier::new());
    let handles: Vec<_> = (0..4)
        .map(|i| {
            let classifier = classifier.clone();
            std::thread::spawn(move || {
                let text = if i % 2 == 0 { "quiet study nook" } else { "free wifi" };
                classifier.classify([text])
            })
        })
        .collect();

    for (i, handle) in handles.into_iter().enumerate() {
        let result = handle.join().unwrap();
        let expected = if i % 2 == 0 { Feature::Quiet } else { Feature::Wifi };
        assert_eq!(result.features(), &[expected]);
    }
}
