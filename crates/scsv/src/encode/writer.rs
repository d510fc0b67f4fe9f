pub const FIELD_SEPARATOR: char = ',';

/// Accumulates delimited output one record at a time.
pub struct LineWriter {
    out: String,
}

impl LineWriter {
    pub fn new() -> Self {
        Self { out: String::new() }
    }

    /// Write `key` followed by each column, separated by commas, then a newline.
    pub fn record<'a, I>(&mut self, key: &str, columns: I)
    where
        I: IntoIterator<Item = &'a str>,
    {
        self.out.push_str(key);
        for col in columns {
            self.out.push(FIELD_SEPARATOR);
            self.out.push_str(col);
        }
        self.out.push('\n');
    }

    pub fn as_str(&self) -> &str {
        &self.out
    }

    pub fn clear(&mut self) {
        self.out.clear();
    }

    pub fn into_string(self) -> String {
        self.out
    }
}

impl Default for LineWriter {
    fn default() -> Self {
        Self::new()
    }
}
