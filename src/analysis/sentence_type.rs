use crate::core::SentenceType;

// Command endings are checked before statement endings: ください and
// なさい both end in い, and the te-form would otherwise never match.
const COMMAND_ENDINGS: &[&str] = &["ください", "なさい", "て"];
const STATEMENT_ENDINGS: &[&str] = &["です", "である", "だ", "ます", "る", "た", "い"];

/// Classify a sentence by its trailing punctuation or suffix.
pub fn detect_sentence_type(text: &str) -> SentenceType {
    let text = text.trim();

    if text.ends_with('？') || text.ends_with('?') {
        SentenceType::Question
    } else if text.ends_with('！') || text.ends_with('!') {
        SentenceType::Exclamation
    } else if COMMAND_ENDINGS.iter().any(|ending| text.ends_with(ending)) {
        SentenceType::Command
    } else if STATEMENT_ENDINGS.iter().any(|ending| text.ends_with(ending)) {
        SentenceType::Statement
    } else {
        SentenceType::Other
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn question_marks_win() {
        assert_eq!(detect_sentence_type("元気ですか？"), SentenceType::Question);
        assert_eq!(detect_sentence_type("元気ですか?"), SentenceType::Question);
    }

    #[test]
    fn exclamation_marks() {
        assert_eq!(detect_sentence_type("すごい！"), SentenceType::Exclamation);
    }

    #[test]
    fn polite_request_is_a_command_not_a_statement() {
        // ください ends in い; the statement rule must not see it first
        assert_eq!(detect_sentence_type("見てください"), SentenceType::Command);
        assert_eq!(detect_sentence_type("勉強しなさい"), SentenceType::Command);
        assert_eq!(detect_sentence_type("ちょっと待って"), SentenceType::Command);
    }

    #[test]
    fn common_statement_endings() {
        assert_eq!(detect_sentence_type("今日は晴れです"), SentenceType::Statement);
        assert_eq!(detect_sentence_type("学生である"), SentenceType::Statement);
        assert_eq!(detect_sentence_type("本を読みます"), SentenceType::Statement);
        assert_eq!(detect_sentence_type("映画を見た"), SentenceType::Statement);
    }

    #[test]
    fn unmatched_endings_fall_through() {
        assert_eq!(detect_sentence_type("ありがとう"), SentenceType::Other);
        assert_eq!(detect_sentence_type("おはよう"), SentenceType::Other);
    }
}
