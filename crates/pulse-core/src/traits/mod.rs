pub mod grouper;
pub mod question_store;
pub mod selector;

pub use grouper::IGrouper;
pub use question_store::{IQuestionStore, QuestionFilter};
pub use selector::ISelector;
