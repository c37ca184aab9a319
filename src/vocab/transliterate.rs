use crate::error::Result;
use pinyin::ToPinyin;

/// Renders a term as a Latin-alphabet reading aid.
pub trait Transliterator {
    fn transliterate(&self, term: &str) -> Result<String>;
}

/// Whole-word readings for common words whose characters are polyphonic.
/// The per-character table only knows each character's most frequent reading.
const WORD_READINGS: &[(&str, &str)] = &[
    ("银行", "yínháng"),
    ("行业", "hángyè"),
    ("音乐", "yīnyuè"),
    ("长城", "chángchéng"),
    ("长期", "chángqī"),
    ("重新", "chóngxīn"),
    ("重复", "chóngfù"),
    ("觉得", "juéde"),
    ("睡觉", "shuìjiào"),
    ("了解", "liǎojiě"),
    ("的确", "díquè"),
    ("目的", "mùdì"),
    ("首都", "shǒudū"),
    ("以为", "yǐwéi"),
    ("成为", "chéngwéi"),
    ("认为", "rènwéi"),
    ("作为", "zuòwéi"),
    ("教书", "jiāoshū"),
    ("空调", "kōngtiáo"),
    ("干净", "gānjìng"),
    ("便宜", "piányi"),
    ("还钱", "huánqián"),
    ("快乐", "kuàilè"),
    ("爱好", "àihào"),
];

/// Hanyu pinyin with tone marks, syllables run together (`nǐhǎo`).
#[derive(Debug, Default, Clone, Copy)]
pub struct PinyinTransliterator;

impl PinyinTransliterator {
    fn word_reading(term: &str) -> Option<&'static str> {
        WORD_READINGS
            .iter()
            .find(|(word, _)| *word == term)
            .map(|(_, reading)| *reading)
    }
}

impl Transliterator for PinyinTransliterator {
    fn transliterate(&self, term: &str) -> Result<String> {
        if let Some(reading) = Self::word_reading(term) {
            return Ok(reading.to_string());
        }

        let reading = term
            .chars()
            .map(|c| match c.to_pinyin() {
                Some(p) => p.with_tone().to_string(),
                // no reading: keep the character as written
                None => c.to_string(),
            })
            .collect();
        Ok(reading)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pinyin_with_tones() {
        let t = PinyinTransliterator;
        assert_eq!(t.transliterate("你好").unwrap(), "nǐhǎo");
        assert_eq!(t.transliterate("中国").unwrap(), "zhōngguó");
    }

    #[test]
    fn test_non_han_passthrough() {
        let t = PinyinTransliterator;
        assert_eq!(t.transliterate("A梦").unwrap(), "Amèng");
    }

    #[test]
    fn test_polyphonic_words_use_word_reading() {
        let t = PinyinTransliterator;
        assert_eq!(t.transliterate("银行").unwrap(), "yínháng");
        assert_eq!(t.transliterate("音乐").unwrap(), "yīnyuè");
        assert_eq!(t.transliterate("觉得").unwrap(), "juéde");
        assert_eq!(t.transliterate("了解").unwrap(), "liǎojiě");
    }

    #[test]
    fn test_unlisted_word_takes_most_frequent_readings() {
        // 行 alone, and in words outside the table, reads xíng
        let t = PinyinTransliterator;
        assert_eq!(t.transliterate("行").unwrap(), "xíng");
        assert_eq!(t.transliterate("行人").unwrap(), "xíngrén");
        assert_eq!(t.transliterate("银行家").unwrap(), "yínxíngjiā");
    }
}
