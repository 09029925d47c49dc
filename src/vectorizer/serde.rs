use std::{fs::File, io::{BufReader, BufWriter, Write}, path::Path};

use tracing::debug;

use crate::{error::Result, vectorizer::IdfTable};

/// File name used when no path is given.
pub const DEFAULT_VOCABULARY_PATH: &str = "vocabulary.dat";

/// IdfTableの永続化
/// CBORでシリアライズします。termの順序とドキュメント数も保持されます
impl IdfTable {
    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        Ok(serde_cbor::to_vec(self)?)
    }

    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        Ok(serde_cbor::from_slice(bytes)?)
    }

    /// ファイルへ保存 (上書き)
    pub fn save<P>(&self, path: P) -> Result<()>
    where
        P: AsRef<Path>,
    {
        let path = path.as_ref();
        let mut writer = BufWriter::new(File::create(path)?);
        serde_cbor::to_writer(&mut writer, self)?;
        writer.flush()?;
        debug!(path = %path.display(), terms = self.len(), "idf table saved");
        Ok(())
    }

    /// ファイルから読み込み
    pub fn load<P>(path: P) -> Result<Self>
    where
        P: AsRef<Path>,
    {
        let path = path.as_ref();
        let reader = BufReader::new(File::open(path)?);
        let table: IdfTable = serde_cbor::from_reader(reader)?;
        debug!(path = %path.display(), terms = table.len(), "idf table loaded");
        Ok(table)
    }
}
