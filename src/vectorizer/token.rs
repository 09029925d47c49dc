use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// TermFrequency 構造体
/// 1ドキュメント内のtermの出現回数を管理します
/// TF は生の出現回数として扱います
///
/// # Examples
/// ```
/// use tfidf_similarity::TermFrequency;
/// let mut freq = TermFrequency::new();
/// freq.add_terms(&["sat", "cat", "sat"]);
/// assert_eq!(freq.term_count("sat"), 2);
/// assert_eq!(freq.term_sum(), 3);
/// ```
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct TermFrequency {
    #[serde(with = "indexmap::map::serde_seq")]
    term_count: IndexMap<String, u64>,
    total_term_count: u64,
}

/// termの追加
impl TermFrequency {
    pub fn new() -> Self {
        TermFrequency {
            term_count: IndexMap::new(),
            total_term_count: 0,
        }
    }

    /// termを追加する
    #[inline]
    pub fn add_term(&mut self, term: &str) -> &mut Self {
        let count = self.term_count.entry(term.to_string()).or_insert(0);
        *count += 1;
        self.total_term_count += 1;
        self
    }

    /// 複数のtermを追加する
    #[inline]
    pub fn add_terms<T>(&mut self, terms: &[T]) -> &mut Self
    where
        T: AsRef<str>,
    {
        for term in terms {
            self.add_term(term.as_ref());
        }
        self
    }

    /// カウントを全リセットします
    #[inline]
    pub fn clear(&mut self) {
        self.term_count.clear();
        self.total_term_count = 0;
    }
}

/// 情報取得
impl TermFrequency {
    /// あるtermの出現回数を取得します
    /// 存在しない場合は0
    #[inline]
    pub fn term_count(&self, term: &str) -> u64 {
        self.term_count.get(term).copied().unwrap_or(0)
    }

    /// termが存在するかどうか
    #[inline]
    pub fn contains_term(&self, term: &str) -> bool {
        self.term_count.contains_key(term)
    }

    /// 全termのカウントの合計
    #[inline]
    pub fn term_sum(&self) -> u64 {
        self.total_term_count
    }

    /// ユニークなterm数
    #[inline]
    pub fn term_num(&self) -> usize {
        self.term_count.len()
    }

    /// 初出順のtermのset
    #[inline]
    pub fn term_set_ref_str(&self) -> Vec<&str> {
        self.term_count.keys().map(|s| s.as_str()).collect()
    }

    /// 初出順の (term, 出現回数)
    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = (&str, u64)> {
        self.term_count.iter().map(|(term, &count)| (term.as_str(), count))
    }

    /// もっとも多く出現したtermの出現回数
    #[inline]
    pub fn most_frequent_term_count(&self) -> u64 {
        self.term_count.values().copied().max().unwrap_or(0)
    }
}

impl<S> FromIterator<S> for TermFrequency
where
    S: AsRef<str>,
{
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut freq = TermFrequency::new();
        for term in iter {
            freq.add_term(term.as_ref());
        }
        freq
    }
}
