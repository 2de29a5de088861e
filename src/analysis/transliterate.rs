use wana_kana::{
    ConvertJapanese,
    IsJapaneseStr,
};

use crate::core::ManabiError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transliteration {
    pub reading: String, // hiragana
    pub romaji: String,
}

/// Reading/romanization provider. Resolving kanji pronunciations takes a
/// tokenizer with a pronunciation dictionary; implementations that carry
/// one plug in here, and the import pipeline stays agnostic.
pub trait Transliterator {
    fn transliterate(&self, text: &str) -> Result<Transliteration, ManabiError>;
}

/// Kana-level transliterator. Katakana (and romaji) convert to a hiragana
/// reading, which then renders as unspaced Hepburn-style romaji. Text
/// containing kanji is refused rather than given a half-converted reading;
/// those need a dictionary-backed implementation of the trait.
pub struct KanaTransliterator;

impl Transliterator for KanaTransliterator {
    fn transliterate(&self, text: &str) -> Result<Transliteration, ManabiError> {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return Err(ManabiError::EmptyText);
        }

        let reading = trimmed.to_hiragana();
        if !reading.as_str().is_kana() {
            return Err(ManabiError::MissingReading);
        }
        let romaji = reading.to_romaji();

        Ok(Transliteration { reading, romaji })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn katakana_folds_to_hiragana_reading() {
        let result = KanaTransliterator.transliterate("カタカナ").unwrap();
        assert_eq!(result.reading, "かたかな");
        assert_eq!(result.romaji, "katakana");
    }

    #[test]
    fn hiragana_renders_as_romaji() {
        let result = KanaTransliterator.transliterate("さくら").unwrap();
        assert_eq!(result.reading, "さくら");
        assert_eq!(result.romaji, "sakura");
    }

    #[test]
    fn kanji_has_no_kana_reading_here() {
        assert!(matches!(
            KanaTransliterator.transliterate("晴れ"),
            Err(ManabiError::MissingReading)
        ));
    }

    #[test]
    fn blank_input_is_rejected() {
        assert!(matches!(
            KanaTransliterator.transliterate("   "),
            Err(ManabiError::EmptyText)
        ));
    }
}
