use crate::domain::model::{Table, TransformOutcome};
use crate::utils::error::Result;

pub trait Storage {
    fn read_file(&self, path: &str) -> Result<Vec<u8>>;
    fn write_file(&self, path: &str, data: &[u8]) -> Result<()>;
}

pub trait ConfigProvider {
    fn input_path(&self) -> &str;
    fn output_path(&self) -> &str;
    fn skip_rows(&self) -> usize;
}

pub trait Pipeline {
    fn extract(&self) -> Result<Table>;
    fn transform(&self, table: &mut Table) -> Result<TransformOutcome>;
    fn load(&self, table: &Table) -> Result<String>;
}
