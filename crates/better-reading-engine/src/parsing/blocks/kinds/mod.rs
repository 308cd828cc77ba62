pub mod block_quote;
pub mod code_fence;
pub mod comment;
pub mod front_matter;
pub mod heading;
pub mod indented_code;

pub use block_quote::BlockQuote;
pub use code_fence::{CodeFence, FenceKind, FenceSig};
pub use comment::{Comment, CommentKind};
pub use front_matter::FrontMatter;
pub use heading::Heading;
pub use indented_code::IndentedCode;
