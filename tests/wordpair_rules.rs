use wordpair_rules::{analyze_word_pair, segment, ClusteringConfig, EditMatrix, TrainingElement, Transformation};

#[test]
fn matrix_reports_expected_edit_distance() {
    let a: Vec<char> = "liegen".chars().collect();
    let b: Vec<char> = "gelegen".chars().collect();
    let matrix = EditMatrix::compute(&a, &b);
    assert_eq!(matrix.edit_distance(), 3);
}

#[test]
fn segmentation_alternates_common_and_noncommon() {
    let segments = segment("liegen", "gelegen");
    assert_eq!(segments.len(), 4);
    for window in segments.windows(2) {
        assert_ne!(window[0].common(), window[1].common());
    }
}

#[test]
fn built_transformation_round_trips_through_public_api() {
    let t = analyze_word_pair("liegen", "gelegen");
    assert_eq!(t.apply("liegen").unwrap(), "gelegen");
    assert_eq!(
        t,
        Transformation::Seq(vec![
            Transformation::edit("", "", "ge"),
            Transformation::edit("l", "i", ""),
            Transformation::edit("egen", "", ""),
        ])
    );
}

#[test]
fn clustering_groups_shared_verb_conjugation_rule() {
    let set = ClusteringConfig::default().build([
        ("liegen".to_string(), "gelegen".to_string()),
        ("schmieren".to_string(), "geschmiert".to_string()),
        ("spielen".to_string(), "gespielt".to_string()),
    ]);

    let snapshot = set.snapshot();
    let total: usize = snapshot.iter().map(|v| v.members().len()).sum();
    assert_eq!(total, 3);

    for view in &snapshot {
        for member in view.members() {
            assert_eq!(view.transformation().apply(member.word_a()).unwrap(), member.word_b());
        }
    }

    let shared = snapshot.iter().find(|v| v.members().len() == 2).expect("schmieren/spielen share a cluster");
    let words: Vec<&str> = shared.members().iter().map(|m| m.word_a()).collect();
    assert!(words.contains(&"schmieren"));
    assert!(words.contains(&"spielen"));
}

#[test]
fn cluster_set_is_deterministic_across_runs() {
    let pairs = [
        ("liegen".to_string(), "gelegen".to_string()),
        ("schmieren".to_string(), "geschmiert".to_string()),
        ("spielen".to_string(), "gespielt".to_string()),
        ("ab".to_string(), "cd".to_string()),
    ];
    let first = ClusteringConfig::default().build(pairs.clone());
    let second = ClusteringConfig::default().build(pairs);

    let shapes_of = |set: &wordpair_rules::ClusterSet| {
        set.snapshot()
            .iter()
            .map(|v| (v.transformation().to_string(), v.members().len()))
            .collect::<Vec<_>>()
    };
    assert_eq!(shapes_of(&first), shapes_of(&second));
}

#[test]
fn training_element_exposes_its_derivation() {
    let element = TrainingElement::new("hallo", "hello");
    assert!(element.matrix().is_some());
    assert_eq!(element.matrix().unwrap().edit_distance(), 1);
    assert_eq!(element.transformation().apply("hallo").unwrap(), "hello");
}
