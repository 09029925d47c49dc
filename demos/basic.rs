use tfidf_similarity::{engine::tokenizer::tokenizer_for, Language, SimilarityAlgorithm, TFIDFVectorizer};

fn main() -> tfidf_similarity::Result<()> {
    // noisy documents: punctuation, latin letters and digits are stripped before segmentation
    let documents = [
        "我喜欢北京的天安门和sdfsd天空天,sad234;sdf/';,/,/安门天安门天安门",
        "北京北京北京北京北京天安3,'/,门阳光和阳光垃圾",
    ];

    let mut vectorizer = TFIDFVectorizer::new(tokenizer_for(Language::Chinese, true), 0);
    let matrix = vectorizer.transform(&documents)?.normalize();

    println!("terms: {:?}", matrix.terms().collect::<Vec<_>>());
    for (doc, row) in documents.iter().zip(&matrix.vectors) {
        println!("{doc}");
        println!("{row:?}\n");
    }

    println!("cosine:  {}", matrix.similarity(0, 1)?);
    match matrix.similarity_with(SimilarityAlgorithm::Pearson, 0, 1) {
        Ok(r) => println!("pearson: {r}"),
        Err(e) => println!("pearson: {e}"),
    }
    Ok(())
}
