#![deny(warnings)]

use crate::math_tokenizer::LexError;
use crate::scanner::Scanner;

static WHITE: &[char] = &[' ', '\t', '\r', '\n'];
static NUMERIC: &[char] = &['.', '0', '1', '2', '3', '4', '5', '6', '7', '8', '9'];
static ALPHA: &[char] = &[
    'a', 'b', 'c', 'd', 'e', 'f', 'g', 'h', 'i', 'j', 'k', 'l', 'm', 'n', 'o',
    'p', 'q', 'r', 's', 't', 'u', 'v', 'w', 'x', 'y', 'z',
    'A', 'B', 'C', 'D', 'E', 'F', 'G', 'H', 'I', 'J', 'K', 'L', 'M', 'N', 'O',
    'P', 'Q', 'R', 'S', 'T', 'U', 'V', 'W', 'X', 'Y', 'Z'];
static ALNUM: &[char] = &[
    '0', '1', '2', '3', '4', '5', '6', '7', '8', '9',
    'a', 'b', 'c', 'd', 'e', 'f', 'g', 'h', 'i', 'j', 'k', 'l', 'm', 'n', 'o',
    'p', 'q', 'r', 's', 't', 'u', 'v', 'w', 'x', 'y', 'z',
    'A', 'B', 'C', 'D', 'E', 'F', 'G', 'H', 'I', 'J', 'K', 'L', 'M', 'N', 'O',
    'P', 'Q', 'R', 'S', 'T', 'U', 'V', 'W', 'X', 'Y', 'Z'];
static OPS: &[char] = &['+', '-', '*', '/', '%', '^', '(', ')', ','];

/*
 * Every scan_* expects the scanner to start fresh (nothing pending in the
 * view), and leaves it fresh again when it matched.
 */
impl<I: Iterator<Item=char>> Scanner<I> {
    pub fn extract_string(&mut self) -> String {
        self.extract().into_iter().collect()
    }

    pub fn skip_whitespace(&mut self) {
        self.skip_all(WHITE);
        self.ignore();
    }

    // single char operators, brackets and comma
    pub fn scan_math_op(&mut self) -> Option<char> {
        let op = self.accept_any(OPS)?;
        self.ignore();
        Some(op)
    }

    // scan [a-zA-Z][a-zA-Z0-9]*
    pub fn scan_identifier(&mut self) -> Option<String> {
        self.accept_any(ALPHA)?;
        self.skip_all(ALNUM);
        Some(self.extract_string())
    }

    // scan [0-9.]+ allowing at most one '.'
    pub fn scan_number(&mut self) -> Result<Option<String>, LexError> {
        let col = self.column() + 1;
        let mut dots = 0;
        while let Some(c) = self.accept_any(NUMERIC) {
            if c == '.' {
                dots += 1;
                if dots > 1 {
                    let text = self.view().iter().collect();
                    return Err(LexError::MalformedNumber { text, col });
                }
            }
        }
        if self.view().is_empty() {
            return Ok(None);
        }
        Ok(Some(self.extract_string()))
    }
}

///////////////////////////////////////////////////////////////////////////////
