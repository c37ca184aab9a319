//! Per-cue vocabulary gloss.
//!
//! A cue's source text is segmented into words, the words written in CJK
//! ideographs are kept once each in order of appearance, and each one is
//! translated (and, for Chinese, given its pinyin). The result is a block of
//! lines that the pipeline appends under the cue's translation.

pub mod segment;
pub mod transliterate;

pub use segment::{JiebaSegmenter, Segmenter, WhitespaceSegmenter};
pub use transliterate::{PinyinTransliterator, Transliterator};

use crate::error::Result;
use crate::language::is_chinese;
use crate::translate::TranslationClient;
use std::collections::HashSet;
use tracing::{debug, warn};

/// Characters that never count as a word on their own.
const PUNCTUATION: &[char] = &[
    '，', '。', '！', '？', '；', '：', '“', '”', '‘', '’', '"', '\'', '（', '）', '【', '】',
];

/// Gap between the columns of a gloss line.
const COLUMN_GAP: &str = "     ";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VocabularyItem {
    pub term: String,
    pub transliteration: Option<String>,
    pub translation: String,
}

impl VocabularyItem {
    /// `- term     reading     translation`, without the reading column when
    /// there is none.
    pub fn gloss_line(&self) -> String {
        match &self.transliteration {
            Some(reading) => format!(
                "- {}{gap}{}{gap}{}",
                self.term,
                reading,
                self.translation,
                gap = COLUMN_GAP
            ),
            None => format!("- {}{gap}{}", self.term, self.translation, gap = COLUMN_GAP),
        }
    }
}

/// Whether `c` is in the CJK Unified Ideographs block.
pub fn is_cjk_ideograph(c: char) -> bool {
    ('\u{4e00}'..='\u{9fff}').contains(&c)
}

fn is_punctuation_only(token: &str) -> bool {
    token
        .chars()
        .all(|c| c.is_whitespace() || PUNCTUATION.contains(&c))
}

/// Keep the tokens worth glossing: non-blank, containing an ideograph, not
/// pure punctuation, first occurrence only.
pub fn select_terms<'a, I>(tokens: I) -> Vec<String>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut seen = HashSet::new();
    let mut terms = Vec::new();

    for token in tokens {
        let token = token.trim();
        if token.is_empty()
            || !token.chars().any(is_cjk_ideograph)
            || is_punctuation_only(token)
            || seen.contains(token)
        {
            continue;
        }
        seen.insert(token.to_string());
        terms.push(token.to_string());
    }

    terms
}

/// Turn items into gloss lines, led by one empty line when there are any.
pub fn format_gloss(items: &[VocabularyItem]) -> Vec<String> {
    if items.is_empty() {
        return Vec::new();
    }
    std::iter::once(String::new())
        .chain(items.iter().map(VocabularyItem::gloss_line))
        .collect()
}

pub struct VocabularyExtractor {
    segmenter: Box<dyn Segmenter>,
    transliterator: Option<Box<dyn Transliterator>>,
}

impl VocabularyExtractor {
    pub fn new(
        segmenter: Box<dyn Segmenter>,
        transliterator: Option<Box<dyn Transliterator>>,
    ) -> Self {
        Self {
            segmenter,
            transliterator,
        }
    }

    /// Pick segmentation and transliteration suited to `source_lang`.
    pub fn for_language(source_lang: &str) -> Self {
        if is_chinese(source_lang) {
            Self::new(
                Box::new(JiebaSegmenter::new()),
                Some(Box::new(PinyinTransliterator)),
            )
        } else {
            Self::new(Box::new(WhitespaceSegmenter), None)
        }
    }

    /// Candidate terms of `text`, deduplicated for this text only.
    pub fn terms(&self, text: &str) -> Vec<String> {
        select_terms(self.segmenter.segment(text))
    }

    /// Translate and transliterate each term. A term that fails is skipped.
    pub async fn extract_items(
        &self,
        text: &str,
        source_lang: &str,
        target_lang: &str,
        client: &TranslationClient,
    ) -> Vec<VocabularyItem> {
        let terms = self.terms(text);
        debug!("Glossing {} term(s)", terms.len());

        let mut items = Vec::with_capacity(terms.len());
        for term in terms {
            match self.enrich(&term, source_lang, target_lang, client).await {
                Ok(item) => items.push(item),
                Err(e) => warn!("Error processing word '{}': {}", term, e),
            }
        }
        items
    }

    /// Gloss lines for `text`, ready to append to a cue.
    pub async fn extract(
        &self,
        text: &str,
        source_lang: &str,
        target_lang: &str,
        client: &TranslationClient,
    ) -> Vec<String> {
        let items = self
            .extract_items(text, source_lang, target_lang, client)
            .await;
        format_gloss(&items)
    }

    async fn enrich(
        &self,
        term: &str,
        source_lang: &str,
        target_lang: &str,
        client: &TranslationClient,
    ) -> Result<VocabularyItem> {
        let translation = client.translate(term, source_lang, target_lang).await;

        let transliteration = match &self.transliterator {
            Some(t) if is_chinese(source_lang) => Some(t.transliterate(term)?),
            _ => None,
        };

        Ok(VocabularyItem {
            term: term.to_string(),
            transliteration,
            translation,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_cjk_ideograph() {
        assert!(is_cjk_ideograph('你'));
        assert!(is_cjk_ideograph('\u{4e00}'));
        assert!(is_cjk_ideograph('\u{9fff}'));
        assert!(!is_cjk_ideograph('a'));
        assert!(!is_cjk_ideograph('。'));
        // kana are outside the range
        assert!(!is_cjk_ideograph('の'));
    }

    #[test]
    fn test_select_terms_dedup_keeps_first_position() {
        let terms = select_terms(vec!["我", "爱", "你", "，", "我", "爱", "北京"]);
        assert_eq!(terms, vec!["我", "爱", "你", "北京"]);
    }

    #[test]
    fn test_select_terms_filters() {
        let terms = select_terms(vec![" ", "", "hello", "。", "“", "（）", "42", "世界", "OK吗"]);
        assert_eq!(terms, vec!["世界", "OK吗"]);
    }

    #[test]
    fn test_select_terms_trims_before_dedup() {
        let terms = select_terms(vec![" 你好", "你好 ", "你好"]);
        assert_eq!(terms, vec!["你好"]);
    }

    #[test]
    fn test_gloss_line_layout() {
        let with_reading = VocabularyItem {
            term: "你好".to_string(),
            transliteration: Some("nǐhǎo".to_string()),
            translation: "hello".to_string(),
        };
        assert_eq!(with_reading.gloss_line(), "- 你好     nǐhǎo     hello");

        let without = VocabularyItem {
            transliteration: None,
            ..with_reading
        };
        assert_eq!(without.gloss_line(), "- 你好     hello");
    }

    #[test]
    fn test_format_gloss() {
        assert!(format_gloss(&[]).is_empty());

        let items = vec![VocabularyItem {
            term: "猫".to_string(),
            transliteration: None,
            translation: "cat".to_string(),
        }];
        assert_eq!(format_gloss(&items), vec!["".to_string(), "- 猫     cat".to_string()]);
    }

    #[test]
    fn test_whitespace_extractor_ignores_latin_words() {
        let extractor = VocabularyExtractor::for_language("fr");
        assert!(extractor.terms("bonjour le monde").is_empty());
        assert_eq!(extractor.terms("le 茶 est bon"), vec!["茶"]);
    }
}
