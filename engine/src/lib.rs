pub mod error;
pub mod eval;
pub mod index;
pub mod indexing;
pub mod pagedir;
pub mod persist;
pub mod posting;
pub mod query;
pub mod rank;
pub mod tokenizer;
pub mod word;

pub use error::{IndexError, PageDirError, PrintError, QueryError};
pub use eval::evaluate;
pub use index::Index;
pub use pagedir::{DocResolver, Page, PageDir};
pub use persist::{load_index, load_index_file, save_index, save_index_file};
pub use posting::PostingMap;
pub use query::{parse_query, Query};
pub use rank::print_ranked;

pub type DocId = u32;
