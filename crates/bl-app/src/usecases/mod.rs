pub mod ask_advice;
pub mod browse_products;
pub mod community_board;
pub mod get_comparison_view;
pub mod submit_lead;
pub mod summarize_article;

pub use ask_advice::AskInsuranceAdvice;
pub use browse_products::BrowseProducts;
pub use community_board::{BoardError, CommunityBoard};
pub use get_comparison_view::{BenefitRow, ComparisonView, GetComparisonView};
pub use submit_lead::SubmitLead;
pub use summarize_article::SummarizeArticle;
