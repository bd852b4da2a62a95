use crate::error::TuningError;
use crate::token::{Span, Spanned, Token};

/// Splits tuning text such as `"E A D G B E"` or `"E, A, D, G"` into words.
pub struct Lexer {
    chars: Vec<char>,
    /// `byte_offsets[i]` = byte offset of `chars[i]` in the original `&str`;
    /// the final entry is the total byte length.
    byte_offsets: Vec<usize>,
    pos: usize,
}

impl Lexer {
    pub fn new(input: &str) -> Self {
        let chars: Vec<char> = input.chars().collect();
        let mut byte_offsets = Vec::with_capacity(chars.len() + 1);
        let mut offset = 0;
        for ch in &chars {
            byte_offsets.push(offset);
            offset += ch.len_utf8();
        }
        byte_offsets.push(offset);
        Lexer {
            chars,
            byte_offsets,
            pos: 0,
        }
    }

    pub fn tokenize(&mut self) -> Result<Vec<Spanned>, TuningError> {
        let mut tokens = Vec::new();
        loop {
            let spanned = self.next_token()?;
            let is_eof = spanned.token == Token::EOF;
            tokens.push(spanned);
            if is_eof {
                break;
            }
        }
        Ok(tokens)
    }

    fn skip_whitespace(&mut self) {
        while self.pos < self.chars.len() && self.chars[self.pos].is_whitespace() {
            self.pos += 1;
        }
    }

    fn byte_pos_of(&self, char_idx: usize) -> usize {
        self.byte_offsets[char_idx.min(self.chars.len())]
    }

    fn spanned(&self, token: Token, start: usize) -> Spanned {
        Spanned {
            token,
            span: Span {
                start: self.byte_pos_of(start),
                end: self.byte_pos_of(self.pos),
            },
        }
    }

    fn next_token(&mut self) -> Result<Spanned, TuningError> {
        self.skip_whitespace();

        let start = self.pos;
        let Some(&ch) = self.chars.get(self.pos) else {
            return Ok(self.spanned(Token::EOF, start));
        };

        match ch {
            ',' => {
                self.pos += 1;
                Ok(self.spanned(Token::Comma, start))
            }
            c if is_word_char(c) => {
                while self.pos < self.chars.len() && is_word_char(self.chars[self.pos]) {
                    self.pos += 1;
                }
                let text: String = self.chars[start..self.pos].iter().collect();
                Ok(self.spanned(Token::Word(text), start))
            }
            _ => {
                self.pos += 1;
                Err(TuningError::UnexpectedChar {
                    ch,
                    span: Span {
                        start: self.byte_pos_of(start),
                        end: self.byte_pos_of(self.pos),
                    },
                })
            }
        }
    }
}

fn is_word_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '#'
}
