use indexmap::IndexMap;
use rayon::prelude::*;

use crate::vectorizer::{corpus::Vocabulary, token::TermFrequency, IdfTable};

/// TF-IDF計算エンジン
/// `TFIDFVectorizer<T, E>` の `E` として差し替え可能
pub trait TFIDFEngine {
    /// IDF値
    /// # Arguments
    /// * `doc_num` - コーパスのドキュメント数
    /// * `doc_freq` - termを含むドキュメント数
    fn idf(doc_num: u64, doc_freq: u64) -> f64;

    /// TF値
    /// # Arguments
    /// * `count` - ドキュメント内のtermの出現回数
    /// * `freq` - そのドキュメントのTermFrequency
    fn tf(count: u64, freq: &TermFrequency) -> f64;

    /// 語彙の順序を保ったIDFテーブルを生成する
    fn idf_table(vocabulary: &Vocabulary, documents: &[TermFrequency]) -> IdfTable
    where
        Self: Sized,
    {
        let doc_num = documents.len() as u64;
        let terms: Vec<&str> = vocabulary.terms().collect();
        let idf: Vec<(String, f64)> = terms
            .par_iter()
            .map(|term| {
                let doc_freq = doc_freq(term, documents);
                (term.to_string(), Self::idf(doc_num, doc_freq))
            })
            .collect();
        IdfTable::from_parts(idf.into_iter().collect::<IndexMap<_, _>>(), doc_num)
    }

    /// ドキュメントごとのTF*IDFベクトル
    /// 列の順序は `table` の順序
    fn tf_idf_vectors(documents: &[TermFrequency], table: &IdfTable) -> Vec<Vec<f64>>
    where
        Self: Sized,
    {
        documents
            .par_iter()
            .map(|freq| {
                table
                    .iter()
                    .map(|(term, idf)| Self::tf(freq.term_count(term), freq) * idf)
                    .collect()
            })
            .collect()
    }
}

/// デフォルトのエンジン
/// tf = 出現回数, idf = ln(N / (1 + df))
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultTFIDFEngine;

impl TFIDFEngine for DefaultTFIDFEngine {
    #[inline]
    fn idf(doc_num: u64, doc_freq: u64) -> f64 {
        (doc_num as f64 / (1.0 + doc_freq as f64)).ln()
    }

    #[inline]
    fn tf(count: u64, _freq: &TermFrequency) -> f64 {
        count as f64
    }
}

/// termを一度でも含むドキュメント数
#[inline]
pub fn doc_freq(term: &str, documents: &[TermFrequency]) -> u64 {
    documents.iter().filter(|doc| doc.contains_term(term)).count() as u64
}

/// IDF of every vocabulary term with the default engine.
pub fn compute_idf(vocabulary: &Vocabulary, documents: &[TermFrequency]) -> IdfTable {
    DefaultTFIDFEngine::idf_table(vocabulary, documents)
}

/// One TF*IDF row per document with the default engine.
pub fn assemble_vectors(documents: &[TermFrequency], table: &IdfTable) -> Vec<Vec<f64>> {
    DefaultTFIDFEngine::tf_idf_vectors(documents, table)
}
