use tfidf_similarity::{
    build_vocabulary,
    engine::tokenizer::{tokenizer_for, LatinTokenizer, SnowballStemmer},
    is_stop_word, pearson_correlation, text_similarity, Error, Language, SimilarityAlgorithm,
    TFIDFVectorizer, VectorizerConfig,
};

const EPS: f64 = 1e-9;

fn english() -> TFIDFVectorizer<LatinTokenizer> {
    TFIDFVectorizer::new(LatinTokenizer::new(SnowballStemmer::english()), 0)
}

fn chinese() -> TFIDFVectorizer {
    TFIDFVectorizer::new(tokenizer_for(Language::Chinese, true), 0)
}

#[test]
fn shared_term_carries_the_same_weight_in_both_documents() {
    let mut vectorizer = english();
    let matrix = vectorizer.transform(&["the cat sat", "the dog sat"]).unwrap();

    let mut terms: Vec<_> = matrix.terms().collect();
    terms.sort_unstable();
    assert_eq!(terms, vec!["cat", "dog", "sat"]);

    let sat = matrix.idf_ref.index_of("sat").unwrap();
    assert_eq!(matrix.vectors[0][sat], matrix.vectors[1][sat]);
    assert_ne!(matrix.vectors[0][sat], 0.0);

    // with two documents the unique terms get idf ln(2/2) = 0, so only "sat" remains
    let score = matrix.normalize().similarity(0, 1).unwrap();
    assert!(score > 0.0 && score <= 1.0 + EPS, "score = {score}");
}

#[test]
fn partial_overlap_scores_strictly_between_zero_and_one() {
    let mut vectorizer = english();
    let matrix = vectorizer
        .transform(&["cat sat", "dog sat", "bird flew", "fish swam"])
        .unwrap()
        .normalize();

    let score = matrix.similarity(0, 1).unwrap();
    let idf_unique = 2.0_f64.ln();
    let idf_sat = (4.0_f64 / 3.0).ln();
    let expected = idf_sat.powi(2) / (idf_sat.powi(2) + idf_unique.powi(2));
    assert!((score - expected).abs() < EPS, "score = {score}, expected = {expected}");
    assert!(score > 0.0 && score < 1.0);

    assert_eq!(matrix.similarity(2, 3).unwrap(), 0.0);
}

#[test]
fn identical_documents_score_one() {
    let mut vectorizer = english();
    let matrix = vectorizer
        .transform(&["rust makes systems programming fun", "rust makes systems programming fun"])
        .unwrap()
        .normalize();
    assert!((matrix.similarity(0, 1).unwrap() - 1.0).abs() < EPS);
}

#[test]
fn documents_without_shared_terms_score_zero() {
    let mut vectorizer = english();
    let matrix = vectorizer
        .transform(&["the quick brown fox", "a lazy sleeping cat"])
        .unwrap()
        .normalize();
    assert_eq!(matrix.similarity(0, 1).unwrap(), 0.0);
}

#[test]
fn chinese_documents_without_shared_words_score_zero() {
    let mut vectorizer = chinese();
    let matrix = vectorizer.transform(&["北京天安门", "上海东方明珠"]).unwrap().normalize();
    assert_eq!(matrix.similarity(0, 1).unwrap(), 0.0);
}

#[test]
fn chinese_documents_sharing_a_word_score_positive() {
    let mut vectorizer = chinese();
    let matrix = vectorizer.transform(&["北京 天安门", "北京 上海"]).unwrap();
    assert!(matrix.idf_ref.get("北京").is_some());

    let score = matrix.normalize().similarity(0, 1).unwrap();
    assert!(score > 0.0, "score = {score}");
}

#[test]
fn noisy_chinese_text_keeps_only_chinese_terms() {
    let mut vectorizer = chinese();
    let matrix = vectorizer
        .transform(&[
            "我喜欢北京的天安门和sdfsd天空天,sad234;sdf/';,/,/安门天安门天安门",
            "北京北京北京北京北京天安3,'/,门阳光和阳光垃圾",
        ])
        .unwrap();
    assert!(matrix.terms().all(|t| !t.chars().any(|c| c.is_ascii_alphabetic() || c.is_ascii_punctuation())));
    assert!(matrix.terms().all(|t| !is_stop_word(t, Language::Chinese)));
    assert!(matrix.terms().any(|t| t == "北京"));
}

#[test]
fn vocabulary_never_contains_stop_words() {
    let docs = [
        "The cats are sitting on the mat because they were tired.",
        "Is it true that dogs have been chasing those cats all day?",
        "THE END",
    ];
    let tokenizer = LatinTokenizer::new(SnowballStemmer::english());
    let corpus = build_vocabulary(&docs, &tokenizer, 0);
    assert!(!corpus.vocabulary.is_empty());
    for term in corpus.vocabulary.terms() {
        assert!(!is_stop_word(term, Language::English), "{term} is a stop word");
    }
}

#[test]
fn zero_min_count_gives_a_column_to_every_surviving_token() {
    let docs = ["apples and oranges", "oranges or bananas", "grapes"];
    let tokenizer = LatinTokenizer::new(SnowballStemmer::english());
    let corpus = build_vocabulary(&docs, &tokenizer, 0);
    for tokens in &corpus.documents {
        for token in tokens {
            assert!(corpus.vocabulary.contains(token), "{token} has no column");
        }
    }
}

#[test]
fn default_min_count_needs_three_occurrences() {
    let docs = ["ocean ocean wave", "ocean wave", "shore"];
    let tokenizer = LatinTokenizer::new(SnowballStemmer::english());
    let corpus = build_vocabulary(&docs, &tokenizer, 2);
    assert_eq!(corpus.vocabulary.terms().collect::<Vec<_>>(), vec!["ocean"]);
}

#[test]
fn pearson_through_the_config() {
    let config = VectorizerConfig {
        language: Language::English,
        min_count: 0,
        algorithm: SimilarityAlgorithm::Pearson,
        ..VectorizerConfig::default()
    };
    // repeated term so the vectors are not constant
    let same = text_similarity("green green valley river", "green green valley river", &config).unwrap();
    assert!((same - 1.0).abs() < EPS);

    // disjoint pair: every idf is 0, all vectors are constant
    let err = text_similarity("green valley", "red mountain", &config).unwrap_err();
    assert!(matches!(err, Error::ZeroVariance));

    assert!((pearson_correlation(&[1.0, 2.0, 3.0], &[2.0, 4.0, 6.0]).unwrap() - 1.0).abs() < EPS);
}

#[test]
fn saved_table_is_reused_by_text_similarity() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("vocabulary.dat");

    let mut vectorizer = english();
    vectorizer.fit(&["cat sat", "dog sat", "bird flew", "fish swam"]).unwrap();
    vectorizer.save(&path).unwrap();

    let config = VectorizerConfig {
        language: Language::English,
        min_count: 0,
        vocabulary_path: Some(path),
        ..VectorizerConfig::default()
    };
    // with the fitted table the pair is scored on the four-document idf
    let score = text_similarity("cat sat", "dog sat", &config).unwrap();
    assert!(score > 0.0 && score < 1.0, "score = {score}");
}
