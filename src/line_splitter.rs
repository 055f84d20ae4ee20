/// Splits on `\n` only. Unlike [`str::lines`] a trailing empty segment after
/// the final newline is yielded as a line of its own, and `\r` is left in
/// place for the caller's trimming to deal with.
#[inline]
pub fn split_lines(src: &str) -> impl Iterator<Item=(usize, &str)> {
    NumberedLineSplitter::new(src)
}

#[derive(Debug, Clone, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct NumberedLineSplitter<'a> {
    lines: Option<&'a str>,
    lineno: usize,
}

impl<'a> NumberedLineSplitter<'a> {
    #[inline]
    pub fn new(lines: &'a str) -> Self {
        Self { lines: Some(lines), lineno: 0 }
    }
}

impl<'a> Iterator for NumberedLineSplitter<'a> {
    /// 1-based line number and the line without its `\n`.
    type Item = (usize, &'a str);

    fn next(&mut self) -> Option<Self::Item> {
        let lines = self.lines?;
        self.lineno += 1;

        if let Some(index) = lines.find('\n') {
            let (head, tail) = lines.split_at(index);
            self.lines = Some(&tail[1..]);
            Some((self.lineno, head))
        } else {
            self.lines = None;
            Some((self.lineno, lines))
        }
    }
}
