use crate::block::Block;

const MATH_OPENERS: [&str; 3] = ["[", "\\[", "$$"];
const MATH_CLOSERS: [&str; 3] = ["]", "\\]", "$$"];

/// Classify one prose segment into ordered `Line`, `Table` and `MathBlock` blocks.
pub fn classify(prose: &str) -> Vec<Block> {
    let mut classifier = BlockClassifier::default();
    for line in prose.lines() {
        classifier.push_line(line);
    }
    classifier.finish()
}

#[derive(Debug, Default, PartialEq, Eq)]
enum ScanState {
    #[default]
    Normal,
    InTable(Vec<String>),
    InMath(Vec<String>),
}

/// Line-at-a-time scanner. Math-mode detection always runs before table-row
/// detection, so a `|` line inside an open math block belongs to the math.
#[derive(Debug, Default)]
pub struct BlockClassifier {
    state: ScanState,
    blocks: Vec<Block>,
}

impl BlockClassifier {
    pub fn push_line(&mut self, line: &str) {
        let trimmed = line.trim();

        if let ScanState::InMath(lines) = &mut self.state {
            if is_delimiter(&MATH_CLOSERS, trimmed) {
                let lines = std::mem::take(lines);
                self.state = ScanState::Normal;
                if !lines.is_empty() {
                    self.blocks.push(Block::MathBlock(lines));
                }
            } else {
                lines.push(trimmed.to_string());
            }
            return;
        }

        if is_delimiter(&MATH_OPENERS, trimmed) {
            self.flush_table();
            self.state = ScanState::InMath(Vec::new());
            return;
        }

        if is_table_row(trimmed) {
            match &mut self.state {
                ScanState::InTable(rows) => rows.push(line.to_string()),
                _ => self.state = ScanState::InTable(vec![line.to_string()]),
            }
            return;
        }

        self.flush_table();
        self.blocks.push(Block::Line(line.to_string()));
    }

    /// End of input. An unterminated math block degrades to plain lines.
    pub fn finish(mut self) -> Vec<Block> {
        match std::mem::take(&mut self.state) {
            ScanState::InMath(lines) => {
                if !lines.is_empty() {
                    tracing::debug!(lines = lines.len(), "unterminated math block");
                }
                self.blocks.extend(lines.into_iter().map(Block::Line));
            }
            ScanState::InTable(rows) => self.emit_table(rows),
            ScanState::Normal => {}
        }
        self.blocks
    }

    fn flush_table(&mut self) {
        if let ScanState::InTable(rows) = std::mem::take(&mut self.state) {
            self.emit_table(rows);
        }
    }

    fn emit_table(&mut self, rows: Vec<String>) {
        if rows.len() >= 2 {
            self.blocks.push(Block::Table(rows));
        } else {
            self.blocks.extend(rows.into_iter().map(Block::Line));
        }
    }
}

fn is_delimiter(delimiters: &[&str], trimmed: &str) -> bool {
    delimiters.iter().any(|d| *d == trimmed)
}

/// A trimmed line that starts with `|` and holds at least two pipes.
pub fn is_table_row(trimmed: &str) -> bool {
    trimmed.starts_with('|') && trimmed.matches('|').count() >= 2
}
