//! Parsers for the textual forms of type tags and transaction arguments.
//!
//! Accepted syntax mirrors the `Display` impls:
//!
//! ```text
//! bool | u8 | u64 | u128 | address | signer
//! vector<T>
//! 0x1::Module::Name
//! 0x1::Module::Name<T1, T2>
//! ```
//!
//! Transaction arguments use Move literal syntax: `1u8`, `1u64` (or `1`),
//! `1u128`, `@0x1` (or `0x1`), `x"0aff"`, `b"ascii"`, `true`, `false`.

use std::str::FromStr;

use crate::error::{ParseError, ValueError};
use crate::limits::MAX_CONTAINER_DEPTH;
use crate::model::identifier::is_valid_tail_char;
use crate::model::{Address, Identifier, StructTag, TransactionArgument, TypeTag};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Token<'s> {
    Word(&'s str),
    Lt,
    Gt,
    Comma,
    ColonColon,
}

impl Token<'_> {
    fn describe(&self) -> String {
        match self {
            Token::Word(w) => w.to_string(),
            Token::Lt => "<".to_string(),
            Token::Gt => ">".to_string(),
            Token::Comma => ",".to_string(),
            Token::ColonColon => "::".to_string(),
        }
    }
}

fn tokenize(input: &str) -> Result<Vec<(usize, Token<'_>)>, ParseError> {
    let mut tokens = Vec::new();
    let mut chars = input.char_indices().peekable();

    while let Some((start, c)) = chars.next() {
        let token = match c {
            c if c.is_whitespace() => continue,
            '<' => Token::Lt,
            '>' => Token::Gt,
            ',' => Token::Comma,
            ':' => match chars.next() {
                Some((_, ':')) => Token::ColonColon,
                Some((_, other)) => {
                    return Err(ParseError::UnexpectedToken {
                        token: format!(":{}", other),
                        expected: "`::`",
                    });
                }
                None => return Err(ParseError::UnexpectedEnd),
            },
            c if is_valid_tail_char(c) => {
                let mut end = start + c.len_utf8();
                while let Some(&(i, next)) = chars.peek() {
                    if !is_valid_tail_char(next) {
                        break;
                    }
                    end = i + next.len_utf8();
                    chars.next();
                }
                Token::Word(&input[start..end])
            }
            other => {
                return Err(ParseError::UnexpectedToken {
                    token: other.to_string(),
                    expected: "type tag",
                });
            }
        };
        tokens.push((start, token));
    }

    Ok(tokens)
}

struct Parser<'s> {
    input: &'s str,
    tokens: Vec<(usize, Token<'s>)>,
    pos: usize,
    depth: usize,
    max_depth: usize,
}

impl<'s> Parser<'s> {
    fn new(input: &'s str, max_depth: usize) -> Result<Self, ParseError> {
        Ok(Self {
            input,
            tokens: tokenize(input)?,
            pos: 0,
            depth: 0,
            max_depth,
        })
    }

    fn peek(&self) -> Option<Token<'s>> {
        self.tokens.get(self.pos).map(|(_, t)| *t)
    }

    fn next(&mut self) -> Result<Token<'s>, ParseError> {
        let token = self.peek().ok_or(ParseError::UnexpectedEnd)?;
        self.pos += 1;
        Ok(token)
    }

    fn expect(&mut self, expected: Token<'s>, what: &'static str) -> Result<(), ParseError> {
        let token = self.next()?;
        if token != expected {
            return Err(ParseError::UnexpectedToken {
                token: token.describe(),
                expected: what,
            });
        }
        Ok(())
    }

    fn expect_word(&mut self, what: &'static str) -> Result<&'s str, ParseError> {
        match self.next()? {
            Token::Word(w) => Ok(w),
            other => Err(ParseError::UnexpectedToken {
                token: other.describe(),
                expected: what,
            }),
        }
    }

    fn finish(&self) -> Result<(), ParseError> {
        match self.tokens.get(self.pos) {
            None => Ok(()),
            Some((offset, _)) => Err(ParseError::TrailingInput {
                rest: self.input[*offset..].to_string(),
            }),
        }
    }

    fn enter(&mut self) -> Result<(), ParseError> {
        if self.depth >= self.max_depth {
            return Err(ParseError::RecursionLimitExceeded {
                max: self.max_depth,
            });
        }
        self.depth += 1;
        Ok(())
    }

    fn type_tag(&mut self) -> Result<TypeTag, ParseError> {
        self.enter()?;
        let word = self.expect_word("type tag")?;
        let tag = match word {
            "bool" => TypeTag::Bool,
            "u8" => TypeTag::U8,
            "u64" => TypeTag::U64,
            "u128" => TypeTag::U128,
            "address" => TypeTag::Address,
            "signer" => TypeTag::Signer,
            "vector" => {
                self.expect(Token::Lt, "`<`")?;
                let element = self.type_tag()?;
                self.expect(Token::Gt, "`>`")?;
                TypeTag::vector(element)
            }
            w if w.starts_with("0x") => TypeTag::structure(self.struct_tag(w)?),
            other => {
                return Err(ParseError::UnexpectedToken {
                    token: other.to_string(),
                    expected: "type tag",
                });
            }
        };
        self.depth -= 1;
        Ok(tag)
    }

    fn struct_tag(&mut self, address: &str) -> Result<StructTag, ParseError> {
        self.enter()?;
        let address = Address::from_hex_literal(address)?;
        self.expect(Token::ColonColon, "`::`")?;
        let module = Identifier::new(self.expect_word("module name")?)?;
        self.expect(Token::ColonColon, "`::`")?;
        let name = Identifier::new(self.expect_word("struct name")?)?;

        let mut type_params = Vec::new();
        if self.peek() == Some(Token::Lt) {
            self.pos += 1;
            loop {
                type_params.push(self.type_tag()?);
                match self.next()? {
                    Token::Gt => break,
                    Token::Comma if self.peek() == Some(Token::Gt) => {
                        self.pos += 1;
                        break;
                    }
                    Token::Comma => {}
                    other => {
                        return Err(ParseError::UnexpectedToken {
                            token: other.describe(),
                            expected: "`,` or `>`",
                        });
                    }
                }
            }
        }

        self.depth -= 1;
        Ok(StructTag::new(address, module, name, type_params))
    }
}

/// Parses a type tag such as `vector<0x1::LBR::LBR>`.
pub fn parse_type_tag(s: &str) -> Result<TypeTag, ParseError> {
    let mut parser = Parser::new(s, MAX_CONTAINER_DEPTH)?;
    let tag = parser.type_tag()?;
    parser.finish()?;
    Ok(tag)
}

/// Parses a struct tag such as `0x1::Account::Balance<0x1::LBR::LBR>`.
pub fn parse_struct_tag(s: &str) -> Result<StructTag, ParseError> {
    let mut parser = Parser::new(s, MAX_CONTAINER_DEPTH)?;
    let address = parser.expect_word("address")?;
    if !address.starts_with("0x") {
        return Err(ParseError::UnexpectedToken {
            token: address.to_string(),
            expected: "address",
        });
    }
    let tag = parser.struct_tag(address)?;
    parser.finish()?;
    Ok(tag)
}

/// Parses a transaction argument literal.
pub fn parse_transaction_argument(s: &str) -> Result<TransactionArgument, ParseError> {
    let s = s.trim();
    if s.is_empty() {
        return Err(ParseError::UnexpectedEnd);
    }

    match s {
        "true" => return Ok(TransactionArgument::Bool(true)),
        "false" => return Ok(TransactionArgument::Bool(false)),
        _ => {}
    }

    if let Some(literal) = s.strip_prefix('@') {
        return Ok(TransactionArgument::Address(Address::from_hex_literal(literal)?));
    }
    if s.starts_with("0x") {
        return Ok(TransactionArgument::Address(Address::from_hex_literal(s)?));
    }
    if let Some(body) = quoted(s, 'x') {
        return parse_hex_bytes(body).map(TransactionArgument::U8Vector);
    }
    if let Some(body) = quoted(s, 'b') {
        if !body.is_ascii() {
            return Err(ParseError::UnexpectedToken {
                token: s.to_string(),
                expected: "ASCII byte string",
            });
        }
        return Ok(TransactionArgument::U8Vector(body.as_bytes().to_vec()));
    }

    parse_number(s)
}

/// Returns the body of `prefix"..."`, if `s` has that shape.
fn quoted(s: &str, prefix: char) -> Option<&str> {
    s.strip_prefix(prefix)?.strip_prefix('"')?.strip_suffix('"')
}

fn parse_hex_bytes(body: &str) -> Result<Vec<u8>, ParseError> {
    let invalid = || {
        ParseError::InvalidValue(ValueError::InvalidHex {
            input: body.to_string(),
        })
    };
    if body.len() % 2 != 0 {
        return Err(invalid());
    }
    body.as_bytes()
        .chunks_exact(2)
        .map(|pair| {
            let pair = std::str::from_utf8(pair).map_err(|_| invalid())?;
            u8::from_str_radix(pair, 16).map_err(|_| invalid())
        })
        .collect()
}

fn parse_number(s: &str) -> Result<TransactionArgument, ParseError> {
    let invalid = || ParseError::InvalidNumber {
        literal: s.to_string(),
    };
    let (digits, suffix) = match s.find(|c: char| !c.is_ascii_digit()) {
        Some(idx) => s.split_at(idx),
        None => (s, ""),
    };
    if digits.is_empty() {
        return Err(invalid());
    }
    match suffix {
        "u8" => digits.parse().map(TransactionArgument::U8).map_err(|_| invalid()),
        "" | "u64" => digits.parse().map(TransactionArgument::U64).map_err(|_| invalid()),
        "u128" => digits.parse().map(TransactionArgument::U128).map_err(|_| invalid()),
        _ => Err(invalid()),
    }
}

impl FromStr for TypeTag {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_type_tag(s)
    }
}

impl FromStr for StructTag {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_struct_tag(s)
    }
}

impl FromStr for TransactionArgument {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_transaction_argument(s)
    }
}
