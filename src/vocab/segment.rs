use jieba_rs::Jieba;

/// Splits a line of text into word-like tokens, in order.
pub trait Segmenter {
    fn segment<'a>(&self, text: &'a str) -> Vec<&'a str>;
}

/// Dictionary-based Chinese segmentation.
pub struct JiebaSegmenter {
    jieba: Jieba,
}

impl JiebaSegmenter {
    /// Load the bundled dictionary. This takes a noticeable moment, so build
    /// one per run rather than per cue.
    pub fn new() -> Self {
        Self {
            jieba: Jieba::new(),
        }
    }
}

impl Default for JiebaSegmenter {
    fn default() -> Self {
        Self::new()
    }
}

impl Segmenter for JiebaSegmenter {
    fn segment<'a>(&self, text: &'a str) -> Vec<&'a str> {
        self.jieba.cut(text, true)
    }
}

/// Splits on whitespace; used for languages written with spaces.
#[derive(Debug, Default, Clone, Copy)]
pub struct WhitespaceSegmenter;

impl Segmenter for WhitespaceSegmenter {
    fn segment<'a>(&self, text: &'a str) -> Vec<&'a str> {
        text.split_whitespace().collect()
    }
}
