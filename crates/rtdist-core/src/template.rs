//! Positional message templates
//!
//! Templates follow the usual message-format conventions:
//! - `{n}` is replaced by the n-th argument
//! - `'...'` quotes a literal section, braces included
//! - `''` is a literal single quote
//!
//! Numeric arguments are rendered with digit grouping.

use crate::error::{TemplateError, TemplateResult};

/// Largest argument index a placeholder may reference
pub const MAX_ARGUMENT_INDEX: usize = 10_000;

#[derive(Debug, Clone, PartialEq, Eq)]
enum Segment {
    Literal(String),
    Argument(usize),
}

/// Digit grouping applied to numeric arguments
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NumberFormat {
    /// Separator inserted every three digits, `None` disables grouping
    pub grouping_separator: Option<char>,
}

impl NumberFormat {
    /// Comma grouping (`1,500`)
    pub const fn grouped(separator: char) -> Self {
        Self {
            grouping_separator: Some(separator),
        }
    }

    /// No grouping (`1500`)
    pub const fn plain() -> Self {
        Self {
            grouping_separator: None,
        }
    }

    /// Render an integer
    pub fn format(&self, value: i64) -> String {
        let digits = value.unsigned_abs().to_string();
        let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);
        if value < 0 {
            out.push('-');
        }
        match self.grouping_separator {
            None => out.push_str(&digits),
            Some(sep) => {
                let len = digits.len();
                for (i, ch) in digits.chars().enumerate() {
                    if i > 0 && (len - i) % 3 == 0 {
                        out.push(sep);
                    }
                    out.push(ch);
                }
            }
        }
        out
    }
}

impl Default for NumberFormat {
    fn default() -> Self {
        Self::grouped(',')
    }
}

/// A parsed message template
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MessageTemplate {
    segments: Vec<Segment>,
}

impl MessageTemplate {
    /// Parse a template
    pub fn parse(pattern: &str) -> TemplateResult<Self> {
        let mut segments = Vec::new();
        let mut literal = String::new();
        let mut chars = pattern.char_indices().peekable();
        let mut quote_start: Option<usize> = None;

        while let Some((offset, ch)) = chars.next() {
            match ch {
                '\'' => {
                    if let Some(&(_, '\'')) = chars.peek() {
                        chars.next();
                        literal.push('\'');
                    } else if quote_start.is_some() {
                        quote_start = None;
                    } else {
                        quote_start = Some(offset);
                    }
                }
                _ if quote_start.is_some() => literal.push(ch),
                '{' => {
                    let mut content = String::new();
                    let mut closed = false;
                    for (_, c) in chars.by_ref() {
                        if c == '}' {
                            closed = true;
                            break;
                        }
                        content.push(c);
                    }
                    if !closed {
                        return Err(TemplateError::UnclosedPlaceholder(offset));
                    }
                    let index = content.trim().parse::<usize>().map_err(|_| {
                        TemplateError::InvalidArgumentIndex {
                            index: content.clone(),
                            offset,
                        }
                    })?;
                    if index > MAX_ARGUMENT_INDEX {
                        return Err(TemplateError::ArgumentIndexTooLarge { index, offset });
                    }
                    if !literal.is_empty() {
                        segments.push(Segment::Literal(std::mem::take(&mut literal)));
                    }
                    segments.push(Segment::Argument(index));
                }
                _ => literal.push(ch),
            }
        }

        if let Some(start) = quote_start {
            return Err(TemplateError::UnterminatedQuote(start));
        }
        if !literal.is_empty() {
            segments.push(Segment::Literal(literal));
        }
        Ok(Self { segments })
    }

    /// Highest argument index referenced plus one
    pub fn arity(&self) -> usize {
        self.segments
            .iter()
            .filter_map(|s| match s {
                Segment::Argument(i) => Some(i.saturating_add(1)),
                Segment::Literal(_) => None,
            })
            .max()
            .unwrap_or(0)
    }

    /// Render with numeric arguments
    ///
    /// A placeholder without a matching argument is rendered as `{n}`.
    pub fn format(&self, args: &[i64], number_format: &NumberFormat) -> String {
        let mut out = String::new();
        for segment in &self.segments {
            match segment {
                Segment::Literal(text) => out.push_str(text),
                Segment::Argument(i) => match args.get(*i) {
                    Some(value) => out.push_str(&number_format.format(*value)),
                    None => {
                        out.push('{');
                        out.push_str(&i.to_string());
                        out.push('}');
                    }
                },
            }
        }
        out
    }
}
