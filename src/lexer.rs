/// The token kinds of a form field name such as `main_links[2][label]`.
#[derive(Debug, PartialEq, Clone)]
pub enum TokenType {
    /// Represents the end of the field name.
    Eof,
    /// A run of characters outside brackets, or the full content between a
    /// `[` and the next `]`. Inside brackets the text may itself contain `[`.
    Text(String),
    /// Left Bracket: `[`
    LBracket,
    /// Right Bracket: `]`
    RBracket,
}

/// A token with its type and position
#[derive(Debug, Clone)]
pub struct Token {
    pub ttype: TokenType,
    pub pos_start: usize,
    pub pos_end: usize,
}

impl Token {
    pub fn new(ttype: TokenType, pos_start: usize, pos_end: usize) -> Token {
        Token {
            ttype,
            pos_start,
            pos_end,
        }
    }
}

pub struct Lexer<'a> {
    chars: std::iter::Peekable<std::str::Chars<'a>>,
    position: usize,
    in_brackets: bool,
}

impl<'a> Lexer<'a> {
    pub fn new(input: &'a str) -> Self {
        Self {
            chars: input.chars().peekable(),
            position: 0,
            in_brackets: false,
        }
    }

    pub fn lex(&mut self) -> Vec<Token> {
        let mut tokens = Vec::new();
        loop {
            let token = self.next_token();
            if token.ttype == TokenType::Eof {
                tokens.push(token);
                break;
            }
            tokens.push(token);
        }
        tokens
    }

    fn advance(&mut self) -> Option<char> {
        let c = self.chars.next()?;
        self.position += c.len_utf8();
        Some(c)
    }

    fn next_token(&mut self) -> Token {
        let start = self.position;
        let Some(&c) = self.chars.peek() else {
            return Token::new(TokenType::Eof, start, start);
        };

        match c {
            '[' if !self.in_brackets => {
                self.advance();
                self.in_brackets = true;
                Token::new(TokenType::LBracket, start, self.position)
            }
            ']' => {
                self.advance();
                self.in_brackets = false;
                Token::new(TokenType::RBracket, start, self.position)
            }
            _ => {
                let mut text = String::new();
                while let Some(&c) = self.chars.peek() {
                    let stops = if self.in_brackets { c == ']' } else { c == '[' || c == ']' };
                    if stops {
                        break;
                    }
                    text.push(c);
                    self.advance();
                }
                Token::new(TokenType::Text(text), start, self.position)
            }
        }
    }
}

/// One step of a field name path.
#[derive(Debug, PartialEq, Eq, Clone)]
pub enum KeySegment {
    Key(String),
    /// `[]`: the next free index of the enclosing group.
    Append,
}

/// Splits a field name into its path: `a[b][]` becomes `[Key(a), Key(b), Append]`.
///
/// Parsing stops at the first bracket pair that is not closed; anything after
/// it is dropped. A name without a leading key is taken literally.
pub fn parse_field_name(name: &str) -> Vec<KeySegment> {
    let tokens = Lexer::new(name).lex();
    let mut iter = tokens.into_iter().peekable();

    let base = match iter.peek().map(|t| &t.ttype) {
        Some(TokenType::Text(text)) if !text.is_empty() => text.clone(),
        _ => return vec![KeySegment::Key(name.to_string())],
    };
    iter.next();

    let mut segments = vec![KeySegment::Key(base)];
    while let Some(token) = iter.next() {
        if token.ttype != TokenType::LBracket {
            break;
        }
        let segment = match iter.next().map(|t| t.ttype) {
            Some(TokenType::RBracket) => KeySegment::Append,
            Some(TokenType::Text(text)) => match iter.next().map(|t| t.ttype) {
                Some(TokenType::RBracket) => KeySegment::Key(text),
                _ => break,
            },
            _ => break,
        };
        segments.push(segment);
    }
    segments
}
