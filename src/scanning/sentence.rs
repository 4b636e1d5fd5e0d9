//! Assembly of one full declaration from the character stream.

use crate::dtd::DeclarationKind;
use crate::scanning::word::Word;

/// One declaration attempt: everything from an opening `<` to the `>` that
/// returns the bracket depth to zero.
///
/// Every character is also fed to the word scanner, so word boundaries are
/// discovered in the same pass. Characters seen before the opening `<`
/// accumulate as preamble words (`words(false)`); that is where trailing
/// export markers of the previous declaration surface.
#[derive(Debug)]
pub struct Sentence {
    raw: String,
    body: String,
    depth: i32,
    in_quote: bool,
    started: bool,
    complete: bool,
    kind: DeclarationKind,
    words: Vec<Word>,
}

impl Default for Sentence {
    fn default() -> Sentence {
        Sentence::new()
    }
}

impl Sentence {
    pub fn new() -> Sentence {
        Sentence {
            raw: String::new(),
            body: String::new(),
            depth: 0,
            in_quote: false,
            started: false,
            complete: false,
            kind: DeclarationKind::Unidentified,
            words: vec![Word::new()],
        }
    }

    /// Consume one character; returns true once the declaration is complete.
    ///
    /// Bracket depth only moves outside double-quoted literals, so a quoted
    /// `>` neither closes the declaration nor unbalances it.
    pub fn scan(&mut self, c: char) -> bool {
        if self.complete {
            return true;
        }
        if !self.started && c == '<' {
            self.started = true;
        }

        if self.words.last().map_or(true, Word::is_terminated) {
            self.words.push(Word::new());
        }
        let word = self.words.last_mut().expect("word list is never empty");
        if self.started {
            word.mark_in_body();
        }
        word.scan(c);

        if !self.started {
            return false;
        }

        self.raw.push(c);
        if c == '"' {
            self.in_quote = !self.in_quote;
        }
        if !self.in_quote {
            match c {
                '<' => self.depth += 1,
                '>' => {
                    self.depth -= 1;
                    if self.depth == 0 {
                        self.complete = true;
                        return true;
                    }
                }
                _ => {}
            }
        }
        // body excludes the opening '<' and, because completion returns
        // above, the terminal '>'
        if self.raw.len() > 1 {
            self.body.push(c);
        }
        false
    }

    /// Words whose position flag matches: declaration words (`true`, the
    /// first being the `<!KEYWORD` word) or preamble words (`false`).
    /// Unterminated and empty words are filtered out.
    pub fn words(&self, in_body: bool) -> Vec<&Word> {
        self.words
            .iter()
            .filter(|w| w.is_terminated() && !w.read().is_empty() && w.in_body() == in_body)
            .collect()
    }

    /// The full declaration text, `<` through `>`.
    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// The declaration body between the brackets, trimmed.
    pub fn body(&self) -> &str {
        self.body.trim()
    }

    pub fn bracket_depth(&self) -> i32 {
        self.depth
    }

    /// Whether an opening `<` has been seen.
    pub fn is_started(&self) -> bool {
        self.started
    }

    /// Whether the body has been fully captured.
    pub fn is_complete(&self) -> bool {
        self.complete
    }

    pub fn kind(&self) -> DeclarationKind {
        self.kind
    }

    pub fn set_kind(&mut self, kind: DeclarationKind) {
        self.kind = kind;
    }

    /// Terminate the trailing word at end of input so preamble tokens (an
    /// export marker at the very end of a file) become readable.
    pub(crate) fn finish(&mut self) {
        if let Some(word) = self.words.last_mut() {
            word.terminate();
        }
    }
}
