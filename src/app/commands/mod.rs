pub mod match_keyword;
pub mod wizard;
