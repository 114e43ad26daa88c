use unicode_width::UnicodeWidthStr;

/// A reference to a position in the source program.
#[derive(Default, Clone, Copy, Debug, PartialEq, Eq)]
pub struct Src {
    pub offset: usize,
    pub len: usize,
}

/// A human-oriented position: 1-based line, and 1-based column counted in terminal cells.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Location {
    pub line: usize,
    pub column: usize,
}

impl std::fmt::Display for Location {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

impl Src {
    pub fn new(offset: usize, len: usize) -> Self {
        Src { offset, len }
    }

    /// Fetch the source string for this span, given the program.
    pub fn str_in<'p>(&self, program: &'p str) -> &'p str {
        &program[self.offset..self.offset + self.len]
    }

    /// Find the line and column at which this span begins.
    pub fn location(&self, program: &str) -> Location {
        let before = &program[..self.offset];
        let line = before.chars().filter(|c| *c == '\n').count() + 1;
        let beginning_of_line = before.rfind('\n').map(|i| i + 1).unwrap_or(0);
        let column = UnicodeWidthStr::width(&program[beginning_of_line..self.offset]) + 1;
        Location { line, column }
    }

    /// Return a two-line string highlighting this span in the line that contains it, preceded by
    /// a line number.
    // Multi-line spans are only underlined up to the end of their first line.
    pub fn highlight(&self, program: &str) -> String {
        let before = &program[..self.offset];
        let line_num = before.chars().filter(|c| *c == '\n').count() + 1;
        let beginning_of_line = before.rfind('\n').map(|i| i + 1).unwrap_or(0);
        let line_len = program[beginning_of_line..]
            .find('\n')
            .unwrap_or_else(|| program[beginning_of_line..].len());
        let line = &program[beginning_of_line..beginning_of_line + line_len];
        let span_end = (self.offset + self.len).min(beginning_of_line + line_len);
        // Widths in terminal cells, so the carets line up under wide characters.
        let terminal_offset = UnicodeWidthStr::width(&program[beginning_of_line..self.offset]);
        let terminal_span_width =
            UnicodeWidthStr::width(&program[self.offset..span_end]).max(1);
        let line_num_str = format!("{}", line_num);
        let line_num_width = line_num_str.len();
        format!(
            "{}: {}\n{empty:line_num_width$}  {empty:terminal_offset$}{empty:^<terminal_span_width$}",
            line_num_str,
            line,
            empty = ""
        )
    }
}

impl std::ops::Add for Src {
    type Output = Self;

    /// The sum of two Src's is the smallest Src covering both.
    fn add(self, other: Self) -> Self {
        let start_offset = if self.offset < other.offset {
            self.offset
        } else {
            other.offset
        };
        let end_offset = if self.offset + self.len < other.offset + other.len {
            other.offset + other.len
        } else {
            self.offset + self.len
        };
        Src {
            offset: start_offset,
            len: end_offset - start_offset,
        }
    }
}

impl std::ops::AddAssign for Src {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}
