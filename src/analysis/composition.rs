use serde::Serialize;

/// Character-class counts for one text fragment. Derived per call, never
/// stored; the kanji share of the total is the difficulty signal.
#[derive(Serialize, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TextComposition {
    pub kanji: usize,
    pub hiragana: usize,
    pub katakana: usize,
    pub ascii: usize,
    pub other: usize,
}

impl TextComposition {
    pub fn total(&self) -> usize {
        self.kanji + self.hiragana + self.katakana + self.ascii + self.other
    }

    /// Share of kanji among all counted characters, 0.0 for empty text.
    pub fn kanji_ratio(&self) -> f64 {
        let total = self.total();
        if total == 0 {
            return 0.0;
        }
        self.kanji as f64 / total as f64
    }
}

// Block boundaries are part of the estimation contract, so the checks are
// spelled out here instead of going through wana_kana (whose kanji range
// stops at U+9FAF).
pub(crate) fn is_kanji(c: char) -> bool {
    ('\u{4e00}'..='\u{9fff}').contains(&c) // CJK Unified Ideographs
}

fn is_hiragana(c: char) -> bool {
    ('\u{3040}'..='\u{309f}').contains(&c)
}

fn is_katakana(c: char) -> bool {
    ('\u{30a0}'..='\u{30ff}').contains(&c)
}

pub fn analyze_composition(text: &str) -> TextComposition {
    let mut composition = TextComposition::default();

    for c in text.chars() {
        if is_kanji(c) {
            composition.kanji += 1;
        } else if is_hiragana(c) {
            composition.hiragana += 1;
        } else if is_katakana(c) {
            composition.katakana += 1;
        } else if c.is_ascii() {
            composition.ascii += 1;
        } else {
            composition.other += 1;
        }
    }

    composition
}

pub fn has_kanji(text: &str) -> bool {
    text.chars().any(is_kanji)
}

/// Distinct kanji in first-appearance order, for highlighting in the UI.
pub fn extract_kanji(text: &str) -> Vec<char> {
    let mut seen = Vec::new();
    for c in text.chars() {
        if is_kanji(c) && !seen.contains(&c) {
            seen.push(c);
        }
    }
    seen
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_each_character_class() {
        // kanji + hiragana + katakana + ascii + full-width punctuation
        let composition = analyze_composition("私はコーヒーをAで飲む。");

        assert_eq!(composition.kanji, 2); // 私, 飲
        assert_eq!(composition.hiragana, 4); // は, を, で, む
        assert_eq!(composition.katakana, 4); // コ, ー, ヒ, ー
        assert_eq!(composition.ascii, 1); // A
        assert_eq!(composition.other, 1); // 。
    }

    #[test]
    fn ratio_of_empty_text_is_zero() {
        let composition = analyze_composition("");
        assert_eq!(composition.total(), 0);
        assert_eq!(composition.kanji_ratio(), 0.0);
    }

    #[test]
    fn prolonged_sound_mark_counts_as_katakana() {
        // U+30FC sits inside the katakana block
        let composition = analyze_composition("ラーメン");
        assert_eq!(composition.katakana, 4);
    }

    #[test]
    fn extract_kanji_deduplicates_in_order() {
        assert_eq!(extract_kanji("日本の日曜日"), vec!['日', '本', '曜']);
        assert!(extract_kanji("ひらがなだけ").is_empty());
    }

    #[test]
    fn has_kanji_spots_single_ideograph() {
        assert!(has_kanji("これは本です"));
        assert!(!has_kanji("これはぺんです"));
    }
}
