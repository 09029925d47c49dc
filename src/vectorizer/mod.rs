pub mod compute;
pub mod corpus;
pub mod serde;
pub mod tfidf;
pub mod token;

use std::{marker::PhantomData, path::Path, sync::Arc};

use indexmap::IndexMap;
use ::serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::{
    config::VectorizerConfig,
    engine::tokenizer::{tokenizer_for, Tokenizer},
    error::{Error, Result},
    utils::normalizer::l2_normalize_all,
    vectorizer::{
        compute::SimilarityAlgorithm,
        corpus::{build_vocabulary, Corpus, DEFAULT_MIN_COUNT},
        tfidf::{DefaultTFIDFEngine, TFIDFEngine},
    },
};

/// term -> IDF の順序付きテーブル
/// 挿入順がベクトルの列順になる
/// 一度作ったら読み取り専用 (`Arc` で共有)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct IdfTable {
    #[serde(with = "indexmap::map::serde_seq")]
    idf: IndexMap<String, f64>,
    /// ドキュメント数
    doc_num: u64,
}

impl IdfTable {
    pub fn new() -> Self {
        Self {
            idf: IndexMap::new(),
            doc_num: 0,
        }
    }

    pub fn from_parts(idf: IndexMap<String, f64>, doc_num: u64) -> Self {
        Self { idf, doc_num }
    }

    #[inline]
    pub fn get(&self, term: &str) -> Option<f64> {
        self.idf.get(term).copied()
    }

    /// 列番号
    #[inline]
    pub fn index_of(&self, term: &str) -> Option<usize> {
        self.idf.get_index_of(term)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.idf.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.idf.is_empty()
    }

    /// 学習に使ったドキュメント数
    #[inline]
    pub fn doc_num(&self) -> u64 {
        self.doc_num
    }

    pub fn terms(&self) -> impl Iterator<Item = &str> {
        self.idf.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.idf.iter().map(|(term, &idf)| (term.as_str(), idf))
    }

    pub fn as_map(&self) -> &IndexMap<String, f64> {
        &self.idf
    }
}

/// TF-IDF vectors of one `transform` call.
/// Every row has `idf_ref.len()` columns, in `idf_ref` order.
#[derive(Debug, Clone)]
pub struct TFIDFMatrix {
    pub vectors: Vec<Vec<f64>>,
    pub idf_ref: Arc<IdfTable>,
}

impl TFIDFMatrix {
    pub fn new(vectors: Vec<Vec<f64>>, idf_ref: Arc<IdfTable>) -> Self {
        Self { vectors, idf_ref }
    }

    /// L2-normalize every row. Zero rows stay zero.
    pub fn normalize(self) -> Self {
        Self {
            vectors: l2_normalize_all(&self.vectors),
            idf_ref: self.idf_ref,
        }
    }

    /// number of documents
    #[inline]
    pub fn len(&self) -> usize {
        self.vectors.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.vectors.is_empty()
    }

    /// number of columns
    #[inline]
    pub fn dim(&self) -> usize {
        self.idf_ref.len()
    }

    pub fn terms(&self) -> impl Iterator<Item = &str> {
        self.idf_ref.terms()
    }

    pub fn row(&self, index: usize) -> Result<&[f64]> {
        self.vectors
            .get(index)
            .map(Vec::as_slice)
            .ok_or(Error::DocumentIndex { index, len: self.vectors.len() })
    }

    /// Cosine similarity of documents `i` and `j`.
    pub fn similarity(&self, i: usize, j: usize) -> Result<f64> {
        self.similarity_with(SimilarityAlgorithm::Cosine, i, j)
    }

    pub fn similarity_with(&self, algorithm: SimilarityAlgorithm, i: usize, j: usize) -> Result<f64> {
        algorithm.score(self.row(i)?, self.row(j)?)
    }
}

/// TF-IDF Vectorizer
///
/// Owns a tokenizer strategy and the IDF table fitted on a corpus.
/// `transform` reuses the table while one is held (it is only fitted when
/// the cache is empty), `fit` and `fit_transform` always refit, and
/// `clear_idf` drops it. Fitting takes `&mut self`; the fitted table can be
/// shared read-only across threads through [`TFIDFVectorizer::idf_ref`].
pub struct TFIDFVectorizer<T = Box<dyn Tokenizer>, E = DefaultTFIDFEngine>
where
    T: Tokenizer,
    E: TFIDFEngine,
{
    pub tokenizer: T,
    /// vocabulary threshold, see [`corpus::required_occurrences`]
    pub min_count: u64,
    idf_cache: Option<Arc<IdfTable>>,
    _marker: PhantomData<E>,
}

impl TFIDFVectorizer {
    /// Vectorizer with the default strategy of the configured language.
    pub fn from_config(config: &VectorizerConfig) -> Self {
        Self::new(tokenizer_for(config.language, config.hmm), config.min_count)
    }
}

impl<T> TFIDFVectorizer<T>
where
    T: Tokenizer,
{
    pub fn new(tokenizer: T, min_count: u64) -> Self {
        Self::with_engine(tokenizer, min_count)
    }

    pub fn with_default_min_count(tokenizer: T) -> Self {
        Self::new(tokenizer, DEFAULT_MIN_COUNT)
    }
}

impl<T, E> TFIDFVectorizer<T, E>
where
    T: Tokenizer,
    E: TFIDFEngine,
{
    /// `TFIDFVectorizer::<_, MyEngine>::with_engine(tokenizer, 2)`
    pub fn with_engine(tokenizer: T, min_count: u64) -> Self {
        Self {
            tokenizer,
            min_count,
            idf_cache: None,
            _marker: PhantomData,
        }
    }

    /// Tokenize the documents and select the vocabulary.
    pub fn analyze<S>(&self, documents: &[S]) -> Corpus
    where
        S: AsRef<str> + Sync,
    {
        build_vocabulary(documents, &self.tokenizer, self.min_count)
    }

    /// Fit a new IDF table on the documents, replacing the cached one.
    pub fn fit<S>(&mut self, documents: &[S]) -> Result<Arc<IdfTable>>
    where
        S: AsRef<str> + Sync,
    {
        if documents.is_empty() {
            return Err(Error::EmptyCorpus);
        }
        let corpus = self.analyze(documents);
        let table = Arc::new(E::idf_table(&corpus.vocabulary, &corpus.term_frequencies()));
        debug!(docs = documents.len(), terms = table.len(), "idf table fitted");
        self.idf_cache = Some(Arc::clone(&table));
        Ok(table)
    }

    /// TF-IDF vectors of the documents.
    ///
    /// The cached IDF table is used when present and non-empty, even if it
    /// was fitted on another corpus. Otherwise the table is fitted on these
    /// documents first and cached.
    pub fn transform<S>(&mut self, documents: &[S]) -> Result<TFIDFMatrix>
    where
        S: AsRef<str> + Sync,
    {
        let corpus = self.analyze(documents);
        let freqs = corpus.term_frequencies();

        let cached = self.idf_cache.as_ref().filter(|table| !table.is_empty()).cloned();
        let table = match cached {
            Some(table) => {
                if table.doc_num() != documents.len() as u64 {
                    debug!(fitted_docs = table.doc_num(), docs = documents.len(), "reusing cached idf table");
                }
                table
            }
            None => {
                if documents.is_empty() {
                    return Err(Error::EmptyCorpus);
                }
                let table = Arc::new(E::idf_table(&corpus.vocabulary, &freqs));
                debug!(docs = documents.len(), terms = table.len(), "idf table fitted");
                self.idf_cache = Some(Arc::clone(&table));
                table
            }
        };

        let vectors = E::tf_idf_vectors(&freqs, &table);
        trace!(?vectors, "tf-idf vectors");
        Ok(TFIDFMatrix::new(vectors, table))
    }

    /// Refit on the documents, then transform them.
    pub fn fit_transform<S>(&mut self, documents: &[S]) -> Result<TFIDFMatrix>
    where
        S: AsRef<str> + Sync,
    {
        self.clear_idf();
        self.transform(documents)
    }

    /// Drop the cached table; the next `transform` refits.
    pub fn clear_idf(&mut self) {
        self.idf_cache = None;
    }

    pub fn idf_ref(&self) -> Option<&Arc<IdfTable>> {
        self.idf_cache.as_ref()
    }

    pub fn set_idf_ref(&mut self, table: Arc<IdfTable>) {
        self.idf_cache = Some(table);
    }

    /// Save the cached table (an empty one when nothing is fitted).
    pub fn save<P>(&self, path: P) -> Result<()>
    where
        P: AsRef<Path>,
    {
        match &self.idf_cache {
            Some(table) => table.save(path),
            None => IdfTable::new().save(path),
        }
    }

    /// Replace the cached table with the one stored at `path`.
    pub fn load<P>(&mut self, path: P) -> Result<()>
    where
        P: AsRef<Path>,
    {
        let table = IdfTable::load(path)?;
        self.idf_cache = Some(Arc::new(table));
        Ok(())
    }
}

/// Similarity of two texts under `config`.
///
/// Fits on the pair (or reuses the table at `config.vocabulary_path` when
/// that file exists), L2-normalizes both vectors and scores them with
/// `config.algorithm`.
pub fn text_similarity(text1: &str, text2: &str, config: &VectorizerConfig) -> Result<f64> {
    let mut vectorizer = TFIDFVectorizer::from_config(config);
    if let Some(path) = config.vocabulary_path.as_deref() {
        if path.exists() {
            vectorizer.load(path)?;
        }
    }
    let matrix = vectorizer.transform(&[text1, text2])?.normalize();
    trace!(vectors = ?matrix.vectors, "normalized vectors");
    matrix.similarity_with(config.algorithm, 0, 1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::{tokenizer::{LatinTokenizer, SnowballStemmer}, Language};

    fn english(min_count: u64) -> TFIDFVectorizer<LatinTokenizer> {
        TFIDFVectorizer::new(LatinTokenizer::new(SnowballStemmer::english()), min_count)
    }

    #[test]
    fn transform_fits_once_and_then_reuses_the_table() {
        let mut vectorizer = english(0);
        let first = vectorizer.transform(&["red cat", "green cat", "blue sky"]).unwrap();
        assert_eq!(first.dim(), 5);

        // other corpus, same cached table: columns stay those of the first corpus
        let second = vectorizer.transform(&["yellow banana", "red banana"]).unwrap();
        assert!(Arc::ptr_eq(&first.idf_ref, &second.idf_ref));
        assert_eq!(second.terms().collect::<Vec<_>>(), vec!["red", "cat", "green", "blue", "sky"]);
        assert_eq!(second.vectors[0], vec![0.0; 5]);

        vectorizer.clear_idf();
        let third = vectorizer.transform(&["yellow banana", "red banana"]).unwrap();
        assert_eq!(third.terms().collect::<Vec<_>>(), vec!["yellow", "banana", "red"]);
    }

    #[test]
    fn fit_always_refits() {
        let mut vectorizer = english(0);
        let a = vectorizer.fit(&["one cat", "two dogs"]).unwrap();
        let b = vectorizer.fit(&["fish"]).unwrap();
        assert!(!Arc::ptr_eq(&a, &b));
        assert_eq!(b.terms().collect::<Vec<_>>(), vec!["fish"]);
        assert!(Arc::ptr_eq(vectorizer.idf_ref().unwrap(), &b));
    }

    #[test]
    fn fit_transform_ignores_the_previous_table() {
        let mut vectorizer = english(0);
        vectorizer.fit(&["moon"]).unwrap();
        let matrix = vectorizer.fit_transform(&["sun", "star"]).unwrap();
        assert_eq!(matrix.terms().collect::<Vec<_>>(), vec!["sun", "star"]);
    }

    #[test]
    fn empty_cached_table_is_refitted() {
        let mut vectorizer = english(0);
        vectorizer.set_idf_ref(Arc::new(IdfTable::new()));
        let matrix = vectorizer.transform(&["sun", "star"]).unwrap();
        assert_eq!(matrix.dim(), 2);
    }

    #[test]
    fn empty_corpus_cannot_be_fitted() {
        let mut vectorizer = english(0);
        let empty: [&str; 0] = [];
        assert!(matches!(vectorizer.fit(&empty), Err(Error::EmptyCorpus)));
        assert!(matches!(vectorizer.transform(&empty), Err(Error::EmptyCorpus)));

        vectorizer.fit(&["sun"]).unwrap();
        let matrix = vectorizer.transform(&empty).unwrap();
        assert!(matrix.is_empty());
        assert_eq!(matrix.dim(), 1);
    }

    #[test]
    fn rows_share_dimension_and_bad_index_is_an_error() {
        let mut vectorizer = english(0);
        let matrix = vectorizer.transform(&["a red fox", "the lazy dog", "fox and dog"]).unwrap();
        assert_eq!(matrix.len(), 3);
        assert!(matrix.vectors.iter().all(|row| row.len() == matrix.dim()));
        assert!(matches!(matrix.row(3), Err(Error::DocumentIndex { index: 3, len: 3 })));
        assert!(matrix.similarity(0, 5).is_err());
    }

    #[test]
    fn save_and_load_restore_the_same_table() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("vocabulary.dat");

        let mut vectorizer = english(0);
        let fitted = vectorizer.fit(&["sun rises", "sun sets", "moon rises"]).unwrap();
        vectorizer.save(&path).unwrap();

        let mut restored = english(0);
        restored.load(&path).unwrap();
        assert_eq!(restored.idf_ref().unwrap().as_ref(), fitted.as_ref());

        let a = vectorizer.transform(&["sun", "moon"]).unwrap();
        let b = restored.transform(&["sun", "moon"]).unwrap();
        assert_eq!(a.vectors, b.vectors);
    }

    #[test]
    fn saving_without_a_table_writes_an_empty_one() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("empty.dat");
        english(0).save(&path).unwrap();
        assert!(IdfTable::load(&path).unwrap().is_empty());
    }

    #[test]
    fn fitted_table_is_shared_across_threads() {
        let mut vectorizer = english(0);
        let table = vectorizer.fit(&["alpha beta", "beta gamma", "gamma delta"]).unwrap();
        std::thread::scope(|scope| {
            for _ in 0..4 {
                let table = Arc::clone(&table);
                scope.spawn(move || {
                    assert_eq!(table.len(), 4);
                    assert!(table.get("beta").is_some());
                });
            }
        });
    }

    struct RelativeTf;

    impl TFIDFEngine for RelativeTf {
        fn idf(doc_num: u64, doc_freq: u64) -> f64 {
            DefaultTFIDFEngine::idf(doc_num, doc_freq)
        }

        fn tf(count: u64, freq: &token::TermFrequency) -> f64 {
            count as f64 / freq.term_sum().max(1) as f64
        }
    }

    #[test]
    fn engine_can_be_replaced() {
        let tokenizer = LatinTokenizer::new(SnowballStemmer::english());
        let mut vectorizer = TFIDFVectorizer::<_, RelativeTf>::with_engine(tokenizer, 0);
        let matrix = vectorizer.transform(&["sun sun moon", "star", "comet", "planet"]).unwrap();
        let idf_sun = (4.0_f64 / 2.0).ln();
        assert!((matrix.vectors[0][0] - idf_sun * 2.0 / 3.0).abs() < 1e-12);
    }

    #[test]
    fn from_config_uses_language_and_threshold() {
        let config = VectorizerConfig {
            language: Language::English,
            min_count: 0,
            ..VectorizerConfig::default()
        };
        let vectorizer = TFIDFVectorizer::from_config(&config);
        assert_eq!(vectorizer.tokenizer.language(), Language::English);
        assert_eq!(vectorizer.min_count, 0);
    }

    #[test]
    fn text_similarity_scores_a_pair() {
        let config = VectorizerConfig {
            language: Language::English,
            min_count: 0,
            ..VectorizerConfig::default()
        };
        let same = text_similarity("quick brown fox", "quick brown fox", &config).unwrap();
        assert!((same - 1.0).abs() < 1e-9);
        let disjoint = text_similarity("quick brown fox", "lazy sleeping cat", &config).unwrap();
        assert_eq!(disjoint, 0.0);
    }
}
