use std::collections::HashSet;

use chrono::{
    DateTime,
    Utc,
};
use rayon::prelude::*;
use serde::Deserialize;
use uuid::Uuid;

use super::models::Sentence;
use crate::{
    analysis::{
        furigana,
        TextAnalyzer,
        Transliterator,
    },
    core::ManabiError,
};

/// One record of the JSON import shape: an array of objects carrying at
/// least the Japanese text and its translation.
#[derive(Deserialize, Debug, Clone)]
pub struct ImportRecord {
    pub japanese: String,
    pub english: String,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub source: Option<String>,
}

#[derive(Debug, Clone)]
pub struct ImportFailure {
    pub index: usize,
    pub japanese_text: String,
    pub reason: String,
}

#[derive(Debug, Default)]
pub struct ImportReport {
    pub imported: Vec<Sentence>,
    pub skipped_duplicates: usize,
    pub failures: Vec<ImportFailure>,
    pub total_processed: usize,
}

pub fn parse_records(json: &str) -> Result<Vec<ImportRecord>, ManabiError> {
    Ok(serde_json::from_str(json)?)
}

/// Run a batch of records through analysis and transliteration, building
/// the sentences the caller persists. Records are independent: one bad
/// record becomes a failure entry and the rest of the batch continues.
/// Duplicate Japanese texts within the batch keep the first occurrence.
pub fn process_batch<T: Transliterator + Sync>(
    records: &[ImportRecord],
    analyzer: &TextAnalyzer,
    transliterator: &T,
    now: DateTime<Utc>,
) -> ImportReport {
    let results: Vec<Result<Sentence, ImportFailure>> = records
        .par_iter()
        .enumerate()
        .map(|(index, record)| process_record(index, record, analyzer, transliterator, now))
        .collect();

    let mut report = ImportReport { total_processed: records.len(), ..Default::default() };
    let mut seen: HashSet<String> = HashSet::new();

    for result in results {
        match result {
            Ok(sentence) => {
                if seen.insert(sentence.japanese_text.clone()) {
                    report.imported.push(sentence);
                } else {
                    report.skipped_duplicates += 1;
                }
            }
            Err(failure) => {
                log::warn!(
                    "record {} ('{}') failed: {}",
                    failure.index,
                    failure.japanese_text,
                    failure.reason
                );
                report.failures.push(failure);
            }
        }
    }

    log::info!(
        "processed {} records: {} imported, {} duplicates skipped, {} failed",
        report.total_processed,
        report.imported.len(),
        report.skipped_duplicates,
        report.failures.len()
    );

    report
}

fn process_record<T: Transliterator + Sync>(
    index: usize,
    record: &ImportRecord,
    analyzer: &TextAnalyzer,
    transliterator: &T,
    now: DateTime<Utc>,
) -> Result<Sentence, ImportFailure> {
    let fail = |reason: String| ImportFailure {
        index,
        japanese_text: record.japanese.trim().to_string(),
        reason,
    };

    let english = record.english.trim();
    if english.is_empty() {
        return Err(fail("empty english translation".to_string()));
    }

    let analysis = analyzer.analyze(&record.japanese).map_err(|e| fail(e.to_string()))?;

    // Transliteration is best-effort: a record without a reading still
    // imports, with the reading fields left unset.
    let transliteration = transliterator.transliterate(&analysis.text).ok();
    let hiragana_reading = transliteration.as_ref().map(|t| t.reading.clone());
    let romaji_reading = transliteration.map(|t| t.romaji);
    let furigana_html = match (&hiragana_reading, analysis.has_kanji) {
        (Some(reading), true) => Some(furigana::ruby_markup(&analysis.text, reading)),
        _ => None,
    };

    Ok(Sentence {
        uuid: Uuid::new_v4(),
        japanese_text: analysis.text.clone(),
        english_translation: english.to_string(),
        hiragana_reading,
        romaji_reading,
        furigana_html,
        difficulty_level: analysis.difficulty_level,
        jlpt_level: analysis.jlpt_level,
        sentence_type: analysis.sentence_type,
        category: record.category.clone(),
        source: record.source.clone(),
        created_at: now,
    })
}
