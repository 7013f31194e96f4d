pub mod character_differ;
pub mod word_differ;
