pub mod post;
pub mod reference;
pub mod user;

pub use post::{LangKey, Post, PostPayload, PostTranslation, TagDiff, TranslationPayload};
pub use reference::{Category, Lang, PostStatus, Tag};
pub use user::User;
