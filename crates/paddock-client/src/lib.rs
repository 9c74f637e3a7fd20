pub mod document;
pub mod fetcher;
pub mod parser;

pub use document::{Document, Element};
pub use fetcher::ReqwestFetcher;
pub use parser::HtmlResultsParser;
