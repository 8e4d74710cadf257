/// A contiguous slice of the input text assigned to one worker.
///
/// Fragments produced by [`partition`] cover the input exactly once, in
/// order, with no overlap and no gap.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TextFragment<'a> {
    text: &'a str,
    start: usize,
}

impl<'a> TextFragment<'a> {
    pub fn text(&self) -> &'a str {
        self.text
    }

    /// Byte offset of this fragment within the original text.
    pub fn start(&self) -> usize {
        self.start
    }

    pub fn end(&self) -> usize {
        self.start + self.text.len()
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}

/// Split `text` into contiguous fragments of roughly `len / workers` bytes.
///
/// The nominal chunk size is `floor(len / workers)`; the splitter steps
/// through the text in chunks of that size, so the fragment count is
/// `ceil(len / chunk_size)`, not necessarily `workers`. Byte offsets are
/// backed up to the nearest UTF-8 character boundary, so every fragment is
/// a valid `&str`.
///
/// When the chunk size truncates to zero (more workers than bytes, or
/// empty text), the whole text is returned as a single fragment; naive
/// zero-size stepping would never make progress.
///
/// A word straddling a fragment boundary is counted downstream as two
/// separate tokens. That is a known accuracy caveat of byte-range
/// partitioning, accepted by design.
pub fn partition(text: &str, workers: usize) -> Vec<TextFragment<'_>> {
    let chunk_size = if workers == 0 {
        0
    } else {
        text.len() / workers
    };
    if chunk_size == 0 {
        return vec![TextFragment { text, start: 0 }];
    }

    let mut fragments = Vec::with_capacity(text.len().div_ceil(chunk_size));
    let mut start = 0;
    while start < text.len() {
        let mut end = (start + chunk_size).min(text.len());
        while !text.is_char_boundary(end) {
            end -= 1;
        }
        if end <= start {
            // Backing up swallowed the whole step (multi-byte character
            // wider than the chunk); take one full character instead.
            let first_char = text[start..]
                .chars()
                .next()
                .map(char::len_utf8)
                .unwrap_or(text.len() - start);
            end = start + first_char;
        }
        fragments.push(TextFragment {
            text: &text[start..end],
            start,
        });
        start = end;
    }
    fragments
}
