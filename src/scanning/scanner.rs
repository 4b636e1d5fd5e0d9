//! The scan loop over one file's contents.

use std::collections::VecDeque;
use std::fmt;

use tracing::trace;

use crate::scanning::sentence::Sentence;

/// One unit of scanner output.
#[derive(Debug)]
pub enum ScanEvent {
    /// A complete declaration, ready for classification.
    Declaration(Sentence),
    /// A bare `%name;` reference between declarations, marking the entity
    /// of that name for export. Carries the name without `%` and `;`.
    ExportMarker(String),
}

/// Scanning failure. A declaration that is still open when the input runs
/// out cannot be recovered from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScanError {
    UnterminatedDeclaration { line: usize },
}

impl fmt::Display for ScanError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScanError::UnterminatedDeclaration { line } => {
                write!(f, "declaration starting at line {line} runs to end of input")
            }
        }
    }
}

impl std::error::Error for ScanError {}

/// Single-pass scanner yielding declarations and export markers in source
/// order. Characters are consumed exactly once; there is no backtracking.
pub struct DeclarationScanner<'a> {
    chars: std::str::Chars<'a>,
    sentence: Sentence,
    pending: VecDeque<ScanEvent>,
    line: usize,
    sentence_line: usize,
    done: bool,
}

impl<'a> DeclarationScanner<'a> {
    pub fn new(input: &'a str) -> DeclarationScanner<'a> {
        DeclarationScanner {
            chars: input.chars(),
            sentence: Sentence::new(),
            pending: VecDeque::new(),
            line: 1,
            sentence_line: 1,
            done: false,
        }
    }

    /// Line of the most recently consumed character (1-based).
    pub fn line(&self) -> usize {
        self.line
    }

    /// Queue the markers found in a sentence's preamble, then the sentence
    /// itself if it holds a complete declaration.
    fn queue(&mut self, sentence: Sentence) {
        for word in sentence.words(false) {
            let text = word.read();
            if let Some(name) = text.strip_prefix('%').and_then(|t| t.strip_suffix(';')) {
                if !name.is_empty() {
                    trace!(name, "export marker");
                    self.pending.push_back(ScanEvent::ExportMarker(name.to_string()));
                }
            }
        }
        if sentence.is_complete() {
            self.pending.push_back(ScanEvent::Declaration(sentence));
        }
    }
}

impl Iterator for DeclarationScanner<'_> {
    type Item = Result<ScanEvent, ScanError>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(event) = self.pending.pop_front() {
                return Some(Ok(event));
            }
            if self.done {
                return None;
            }
            match self.chars.next() {
                Some(c) => {
                    if c == '\n' {
                        self.line += 1;
                    }
                    let was_started = self.sentence.is_started();
                    let complete = self.sentence.scan(c);
                    if !was_started && self.sentence.is_started() {
                        self.sentence_line = self.line;
                    }
                    if complete {
                        let sentence = std::mem::replace(&mut self.sentence, Sentence::new());
                        self.queue(sentence);
                    }
                }
                None => {
                    self.done = true;
                    if self.sentence.is_started() {
                        return Some(Err(ScanError::UnterminatedDeclaration {
                            line: self.sentence_line,
                        }));
                    }
                    let mut sentence = std::mem::take(&mut self.sentence);
                    sentence.finish();
                    self.queue(sentence);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn events(input: &str) -> Vec<Result<ScanEvent, ScanError>> {
        DeclarationScanner::new(input).collect()
    }

    #[test]
    fn yields_declarations_in_order() {
        let evs = events("<!ELEMENT a EMPTY>\n<!ELEMENT b ANY>\n");
        assert_eq!(evs.len(), 2);
        for (ev, name) in evs.iter().zip(["a", "b"]) {
            match ev {
                Ok(ScanEvent::Declaration(s)) => {
                    assert_eq!(s.words(true)[1].read(), name);
                }
                other => panic!("expected declaration, got {other:?}"),
            }
        }
    }

    #[test]
    fn export_marker_precedes_next_declaration() {
        let evs = events("<!ENTITY % e SYSTEM \"e.ent\">%e;\n<!ELEMENT a EMPTY>\n");
        assert_eq!(evs.len(), 3);
        assert!(matches!(evs[0], Ok(ScanEvent::Declaration(_))));
        match &evs[1] {
            Ok(ScanEvent::ExportMarker(name)) => assert_eq!(name, "e"),
            other => panic!("expected marker, got {other:?}"),
        }
        assert!(matches!(evs[2], Ok(ScanEvent::Declaration(_))));
    }

    #[test]
    fn export_marker_at_end_of_input() {
        let evs = events("<!ENTITY % e \"v\">\n%e;");
        assert_eq!(evs.len(), 2);
        match &evs[1] {
            Ok(ScanEvent::ExportMarker(name)) => assert_eq!(name, "e"),
            other => panic!("expected marker, got {other:?}"),
        }
    }

    #[test]
    fn unterminated_declaration_is_an_error() {
        let evs = events("<!ELEMENT a EMPTY>\n<!ELEMENT broken (a");
        assert_eq!(evs.len(), 2);
        assert!(matches!(
            evs[1],
            Err(ScanError::UnterminatedDeclaration { line: 2 })
        ));
    }

    #[test]
    fn blank_input_yields_nothing() {
        assert!(events("  \n\t \n").is_empty());
    }
}
