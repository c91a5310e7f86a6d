use docu_core::{Engine, EngineConfig, EngineError};

fn facts() -> Vec<&'static str> {
    vec!["The sky is blue.", "Water boils at 100 degrees."]
}

fn approx(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

#[test]
fn verbatim_query_matches_itself() {
    let engine = Engine::new(facts()).unwrap();
    let hit = engine.search("Water boils at 100 degrees.").unwrap();
    assert_eq!(hit.index, 1);
    assert_eq!(hit.content, "Water boils at 100 degrees.");
    assert!(approx(hit.score, 1.0));
}

#[test]
fn scores_match_reference_values() {
    let engine = Engine::new(facts()).unwrap();
    let hit = engine.search("sky").unwrap();
    assert_eq!(hit.index, 0);
    assert!(approx(hit.score, 0.4020402441612698));

    let hit = engine.search("What color is the sky?").unwrap();
    assert_eq!(hit.index, 0);
    assert!(approx(hit.score, 0.5428725474262537));

    let engine =
        Engine::new(["rust is fast", "rust rust memory safety", "python is easy"]).unwrap();
    let hit = engine.search("rust memory").unwrap();
    assert_eq!(hit.index, 1);
    assert!(approx(hit.score, 0.7853206113567822));
}

#[test]
fn disjoint_query_is_no_match() {
    let engine = Engine::new(["apple banana"]).unwrap();
    assert!(engine.search("xyz qwe").is_none());

    let permissive = Engine::with_config(["apple banana"], EngineConfig::permissive()).unwrap();
    assert!(permissive.search("xyz qwe").is_none());
}

#[test]
fn superscript_terms_are_searchable() {
    let corpus = ["x² plus y²", "area of a circle"];
    let engine = Engine::with_config(corpus, EngineConfig::permissive()).unwrap();
    let hit = engine.search("x²").unwrap();
    assert_eq!(hit.index, 0);
    assert!(hit.score > 0.0);
}

#[test]
fn query_without_terms_is_no_match() {
    let engine = Engine::with_config(facts(), EngineConfig::permissive()).unwrap();
    assert!(engine.search("").is_none());
    assert!(engine.search("? ! a").is_none());
}

#[test]
fn repeated_search_is_deterministic() {
    let engine = Engine::new(facts()).unwrap();
    let first = engine.search("is the water blue").unwrap();
    let second = engine.search("is the water blue").unwrap();
    assert_eq!(first.index, second.index);
    assert_eq!(first.score.to_bits(), second.score.to_bits());
}

#[test]
fn identical_documents_tie_to_lowest_index() {
    let engine = Engine::new(["same text", "same text"]).unwrap();
    let hit = engine.search("same text").unwrap();
    assert_eq!(hit.index, 0);
}

#[test]
fn score_equal_to_threshold_is_no_match() {
    let score = Engine::with_config(facts(), EngineConfig::permissive())
        .unwrap()
        .search("sky")
        .unwrap()
        .score;
    let at_cutoff = Engine::with_config(facts(), EngineConfig::with_threshold(score)).unwrap();
    assert!(at_cutoff.search("sky").is_none());

    let below_cutoff =
        Engine::with_config(facts(), EngineConfig::with_threshold(score - 1e-6)).unwrap();
    assert!(below_cutoff.search("sky").is_some());
}

#[test]
fn weak_match_is_filtered_by_default_threshold() {
    // The query only shares "is", which every fact contains.
    let corpus = [
        "the sky is blue today over the hills and the valleys of the north",
        "the grass is green in the spring and in the summer",
        "the snow is white on the mountains in the winter",
    ];
    let query = "is anything unknown here";
    let permissive = Engine::with_config(corpus, EngineConfig::permissive()).unwrap();
    let weak = permissive.search(query).unwrap();
    assert_eq!(weak.index, 2);
    assert!(weak.score > 0.0 && weak.score < 0.1, "score {}", weak.score);

    let engine = Engine::new(corpus).unwrap();
    assert!(engine.search(query).is_none());
}

#[test]
fn scores_stay_in_unit_range() {
    let corpus = [
        "The sky is blue.",
        "Water boils at 100 degrees.",
        "Rust has no garbage collector.",
        "The Eiffel Tower is in Paris.",
        "blue blue blue sky",
    ];
    let engine = Engine::with_config(corpus, EngineConfig::permissive()).unwrap();
    let queries = [
        "sky",
        "blue sky",
        "The sky is blue.",
        "paris tower",
        "garbage",
        "100",
        "is the",
    ];
    for query in queries {
        let analysis = engine.analyze(query).unwrap();
        for s in analysis.similarities {
            assert!((0.0..=1.0).contains(&s), "{query}: {s}");
        }
        if let Some(hit) = engine.search(query) {
            assert!(hit.score > 0.0 && hit.score <= 1.0);
        }
    }
}

#[test]
fn rank_orders_by_score_then_index() {
    let corpus = ["rust is fast", "rust rust memory safety", "python is easy", "rust is fast"];
    let engine = Engine::with_config(corpus, EngineConfig::permissive()).unwrap();
    let hits = engine.rank("rust fast", 10);
    let order: Vec<usize> = hits.iter().map(|h| h.index).collect();
    assert_eq!(order, vec![0, 3, 1]);
    assert!(hits.windows(2).all(|w| w[0].score >= w[1].score));

    let best = engine.search("rust fast").unwrap();
    assert_eq!(engine.rank("rust fast", 1), vec![best]);
    assert!(engine.rank("rust fast", 0).is_empty());
}

#[test]
fn construction_errors() {
    assert_eq!(Engine::new(Vec::<String>::new()).unwrap_err(), EngineError::EmptyCorpus);
    assert_eq!(
        Engine::new(["ok", ""]).unwrap_err(),
        EngineError::BlankDocument { index: 1 }
    );
    assert_eq!(
        EngineError::InvalidThreshold(2.0).to_string(),
        "relevance threshold must be finite and within [0, 1), got 2"
    );
}

#[test]
fn concurrent_searches_share_one_engine() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<Engine>();

    let engine = Engine::new(facts()).unwrap();
    let expected = engine.search("boiling water degrees");
    std::thread::scope(|s| {
        let handles: Vec<_> = (0..4)
            .map(|_| s.spawn(|| engine.search("boiling water degrees")))
            .collect();
        for h in handles {
            assert_eq!(h.join().unwrap(), expected);
        }
    });
}

#[test]
fn analysis_serializes_to_json() {
    let engine = Engine::new(facts()).unwrap();
    let analysis = engine.analyze("sky").unwrap();
    let json = serde_json::to_value(&analysis).unwrap();
    assert_eq!(json["query"], "sky");
    assert_eq!(json["terms"][0]["term"], "100");
    assert_eq!(json["query_vector"][0]["term"], "sky");
    assert_eq!(json["similarities"].as_array().unwrap().len(), 2);
}
