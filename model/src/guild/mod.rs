mod emoji;
pub use emoji::EmojiRef;
