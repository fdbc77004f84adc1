//! Lossless tokenizer for build files
//!
//! Splits source text into contiguous tokens that cover every byte, so the
//! stream can be reserialized byte-for-byte. String literals and comments
//! are single tokens, which is what keeps a `version` occurrence inside
//! either from ever matching as an assignment target. A plain regex
//! substitution cannot make that guarantee.
//!
//! Tokenizing never fails: anything unrecognized lands in `Other` and is
//! copied through verbatim.

/// Byte range of a token in the source text
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[allow(dead_code)] // Diagnostics report lines; byte offsets are asserted in tests
pub struct Span {
  pub start: usize,
  pub end: usize,
}

/// Lexical class of a token
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
  /// Identifier-shaped word (`version`, `setup`, `__name__`)
  Name,
  /// Maximal run of punctuation (`=`, `==`, `(`, `):`)
  Operator,
  /// Quoted string, quotes included; never spans a line break
  StringLit,
  /// `#` comment up to (not including) the line break
  Comment,
  /// Run of spaces and tabs
  Whitespace,
  /// `\n`, `\r\n`, or a lone `\r`
  Newline,
  /// Everything else (digit runs, non-ASCII, control characters)
  Other,
}

/// A lexical unit carrying its exact source text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
  pub kind: TokenKind,
  pub text: String,
  #[allow(dead_code)]
  pub span: Span,
  /// 1-based line the token starts on
  pub line: u32,
}

/// Split source text into a lossless token stream
pub fn tokenize(source: &str) -> Vec<Token> {
  let bytes = source.as_bytes();
  let mut tokens = Vec::new();
  let mut pos = 0;
  let mut line = 1u32;

  while pos < bytes.len() {
    let start = pos;
    let start_line = line;

    let kind = match bytes[pos] {
      b'#' => {
        while pos < bytes.len() && bytes[pos] != b'\n' && bytes[pos] != b'\r' {
          pos += char_len(bytes[pos]);
        }
        TokenKind::Comment
      }
      b'\r' | b'\n' => {
        if bytes[pos] == b'\r' {
          pos += 1;
        }
        if pos < bytes.len() && bytes[pos] == b'\n' {
          pos += 1;
        }
        line += 1;
        TokenKind::Newline
      }
      b' ' | b'\t' => {
        while pos < bytes.len() && (bytes[pos] == b' ' || bytes[pos] == b'\t') {
          pos += 1;
        }
        TokenKind::Whitespace
      }
      quote @ (b'\'' | b'"') => {
        pos += 1;
        while pos < bytes.len() {
          let b = bytes[pos];
          if b == quote {
            pos += 1;
            break;
          }
          match b {
            // Skip the escaped character so \" and \' don't close the string
            b'\\' => {
              pos += 1;
              if pos < bytes.len() && bytes[pos] != b'\n' && bytes[pos] != b'\r' {
                pos += char_len(bytes[pos]);
              }
            }
            // Unterminated: stop at the line break, quote validation
            // rejects the literal later if it ever becomes the target
            b'\n' | b'\r' => break,
            _ => pos += char_len(b),
          }
        }
        TokenKind::StringLit
      }
      b if b.is_ascii_alphabetic() || b == b'_' => {
        while pos < bytes.len() && (bytes[pos].is_ascii_alphanumeric() || bytes[pos] == b'_') {
          pos += 1;
        }
        TokenKind::Name
      }
      b if is_operator_byte(b) => {
        while pos < bytes.len() && is_operator_byte(bytes[pos]) {
          pos += 1;
        }
        TokenKind::Operator
      }
      _ => {
        while pos < bytes.len() && !starts_new_token(bytes[pos]) {
          pos += char_len(bytes[pos]);
        }
        TokenKind::Other
      }
    };

    tokens.push(Token {
      kind,
      text: source[start..pos].to_string(),
      span: Span { start, end: pos },
      line: start_line,
    });
  }

  tokens
}

/// Punctuation that can form an operator run
///
/// Quotes and `#` open their own tokens; `_` belongs to names.
fn is_operator_byte(b: u8) -> bool {
  b.is_ascii_punctuation() && b != b'\'' && b != b'"' && b != b'#' && b != b'_'
}

fn starts_new_token(b: u8) -> bool {
  matches!(b, b'#' | b'\'' | b'"' | b'\r' | b'\n' | b' ' | b'\t' | b'_')
    || b.is_ascii_alphabetic()
    || is_operator_byte(b)
}

/// UTF-8 sequence length from the leading byte
fn char_len(b: u8) -> usize {
  if b < 0x80 {
    1
  } else if b >= 0xF0 {
    4
  } else if b >= 0xE0 {
    3
  } else {
    2
  }
}
