pub mod recommendation_board;
pub mod risk_digest;
