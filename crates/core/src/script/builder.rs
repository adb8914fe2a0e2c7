/// Append-only sequence of script lines, joined once in [`finish`](Self::finish).
#[derive(Debug, Default)]
pub struct ScriptBuilder {
    lines: Vec<String>,
}

impl ScriptBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append one line. The line must not contain user data that has not
    /// been through [`quote_literal`](crate::quoting::quote_literal).
    pub fn line(&mut self, line: impl Into<String>) -> &mut Self {
        self.lines.push(line.into());
        self
    }

    pub fn blank(&mut self) -> &mut Self {
        self.line(String::new())
    }

    pub fn extend<I, S>(&mut self, lines: I) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.lines.extend(lines.into_iter().map(Into::into));
        self
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn finish(self) -> String {
        self.lines.join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lines_are_joined_in_order() {
        let mut builder = ScriptBuilder::new();
        builder.line("a").blank().extend(["b", "c"]);
        assert_eq!(builder.len(), 4);
        assert_eq!(builder.finish(), "a\n\nb\nc");
    }

    #[test]
    fn empty_builder_yields_empty_string() {
        let builder = ScriptBuilder::new();
        assert!(builder.is_empty());
        assert_eq!(builder.finish(), "");
    }
}
