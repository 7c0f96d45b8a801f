// Subject comparison — counting, normalization, similarity, and ranking.

pub mod counts;
pub mod ranking;
pub mod similarity;
