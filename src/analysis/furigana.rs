use wana_kana::ConvertJapanese;

use super::composition::is_kanji;

/// Ruby-annotate the kanji runs of a sentence with slices of its reading.
///
/// The reading is aligned against the text by anchoring on the kana
/// between kanji runs: each kanji run takes the reading characters up to
/// the next anchor. Identical adjacent kana (母は / ははは) resolve to the
/// leftmost split; a tokenizer-backed transliterator is the way to do
/// better. If the reading cannot be aligned at all, the whole sentence is
/// wrapped in a single ruby tag instead.
///
/// 今日は晴れです + きょうははれです ->
/// `<ruby>今日<rt>きょう</rt></ruby>は<ruby>晴<rt>は</rt></ruby>れです`
pub fn ruby_markup(text: &str, reading: &str) -> String {
    match pair_runs(text, reading) {
        Some(markup) => markup,
        None => format!("<ruby>{}<rt>{}</rt></ruby>", text, reading),
    }
}

/// Maximal runs of kanji / non-kanji characters, in order.
fn split_runs(text: &str) -> Vec<(bool, String)> {
    let mut runs: Vec<(bool, String)> = Vec::new();

    for c in text.chars() {
        let kanji = is_kanji(c);
        match runs.last_mut() {
            Some((last_kanji, run)) if *last_kanji == kanji => run.push(c),
            _ => runs.push((kanji, c.to_string())),
        }
    }

    runs
}

fn find_from(haystack: &[char], needle: &[char], from: usize) -> Option<usize> {
    if needle.is_empty() || haystack.len() < needle.len() {
        return None;
    }

    for start in from..=(haystack.len() - needle.len()) {
        if haystack[start..start + needle.len()] == *needle {
            return Some(start);
        }
    }

    None
}

fn pair_runs(text: &str, reading: &str) -> Option<String> {
    let runs = split_runs(text);
    // Fold both sides to hiragana so katakana text and katakana readings
    // anchor the same way.
    let reading: Vec<char> = reading.to_hiragana().chars().collect();

    let mut out = String::new();
    let mut pos = 0;

    for (i, (kanji, run)) in runs.iter().enumerate() {
        if *kanji {
            let end = match runs.get(i + 1) {
                Some((_, anchor)) => {
                    let anchor: Vec<char> = anchor.to_hiragana().chars().collect();
                    // a kanji run reads as at least one character
                    find_from(&reading, &anchor, pos + 1)?
                }
                None => reading.len(),
            };
            if end <= pos {
                return None;
            }
            let rt: String = reading[pos..end].iter().collect();
            out.push_str(&format!("<ruby>{}<rt>{}</rt></ruby>", run, rt));
            pos = end;
        } else {
            let folded: Vec<char> = run.to_hiragana().chars().collect();
            if reading.len() < pos + folded.len()
                || reading[pos..pos + folded.len()] != folded[..]
            {
                return None;
            }
            out.push_str(run);
            pos += folded.len();
        }
    }

    (pos == reading.len()).then_some(out)
}
