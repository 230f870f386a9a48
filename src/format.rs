//! Result formatting
//!
//! Turns the raw analysis text into a small typed document:
//! paragraphs (separated by a blank line), lines (separated by a newline)
//! and runs of text carrying strong/emphasis flags.
//!
//! Inline markers follow a fixed order: `**strong**` pairs are resolved
//! first, then `*emphasis*` pairs over whatever characters remain. Both use
//! the leftmost, shortest match, may enclose line and paragraph breaks, and
//! leave unmatched markers as literal text.
//! The output is plain data, so nothing in the result is ever interpreted as
//! terminal markup.

/// A formatted analysis result
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Document {
    pub paragraphs: Vec<Paragraph>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Paragraph {
    pub lines: Vec<TextLine>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct TextLine {
    pub runs: Vec<Run>,
}

/// A stretch of text sharing the same styling
#[derive(Debug, Clone, PartialEq)]
pub struct Run {
    pub text: String,
    pub strong: bool,
    pub emphasis: bool,
}

impl Document {
    /// Parse raw result text into a document
    pub fn parse(raw: &str) -> Self {
        let tokens = tokenize(&raw.replace("\r\n", "\n"));

        // Markers pair across line and paragraph breaks
        let tokens = resolve_pairs(&tokens, 2, |c| c.strong = true);
        let tokens = resolve_pairs(&tokens, 1, |c| c.emphasis = true);

        let mut paragraphs = Vec::new();
        let mut lines = Vec::new();
        let mut current = Vec::new();

        for token in tokens {
            match token {
                Token::Char(styled) => current.push(styled),
                Token::LineBreak => lines.push(TextLine {
                    runs: coalesce(&std::mem::take(&mut current)),
                }),
                Token::ParagraphBreak => {
                    lines.push(TextLine {
                        runs: coalesce(&std::mem::take(&mut current)),
                    });
                    paragraphs.push(Paragraph {
                        lines: std::mem::take(&mut lines),
                    });
                }
            }
        }
        lines.push(TextLine {
            runs: coalesce(&current),
        });
        paragraphs.push(Paragraph { lines });

        Self { paragraphs }
    }

    pub fn is_empty(&self) -> bool {
        self.paragraphs
            .iter()
            .all(|p| p.lines.iter().all(|l| l.runs.is_empty()))
    }

    /// Rendered text without markers, paragraphs separated by a blank line
    pub fn plain_text(&self) -> String {
        self.paragraphs
            .iter()
            .map(|paragraph| {
                paragraph
                    .lines
                    .iter()
                    .map(TextLine::plain_text)
                    .collect::<Vec<_>>()
                    .join("\n")
            })
            .collect::<Vec<_>>()
            .join("\n\n")
    }
}

impl TextLine {
    pub fn plain_text(&self) -> String {
        self.runs.iter().map(|r| r.text.as_str()).collect()
    }
}

/// A character with the styles assigned to it so far
#[derive(Clone, Copy)]
struct Styled {
    ch: char,
    strong: bool,
    emphasis: bool,
}

#[derive(Clone, Copy)]
enum Token {
    Char(Styled),
    LineBreak,
    ParagraphBreak,
}

/// Split text into characters and breaks. `"\n\n"` is taken left to right
/// as a paragraph break before any single `'\n'`.
fn tokenize(text: &str) -> Vec<Token> {
    let mut tokens = Vec::with_capacity(text.len());
    let mut chars = text.chars().peekable();

    while let Some(ch) = chars.next() {
        if ch == '\n' {
            if chars.next_if_eq(&'\n').is_some() {
                tokens.push(Token::ParagraphBreak);
            } else {
                tokens.push(Token::LineBreak);
            }
        } else if ch == '\t' || !ch.is_control() {
            tokens.push(Token::Char(Styled {
                ch,
                strong: false,
                emphasis: false,
            }));
        }
    }

    tokens
}

/// Find `*` markers of the given width, pair them left to right with the
/// nearest closing marker, drop the markers and style every character
/// between. Breaks inside a pair keep their place.
fn resolve_pairs(tokens: &[Token], width: usize, mark: impl Fn(&mut Styled)) -> Vec<Token> {
    let is_marker = |at: usize| {
        at + width <= tokens.len()
            && tokens[at..at + width]
                .iter()
                .all(|t| matches!(t, Token::Char(c) if c.ch == '*'))
    };

    let mut out = Vec::with_capacity(tokens.len());
    let mut i = 0;

    while i < tokens.len() {
        if is_marker(i) {
            let close = (i + width..tokens.len()).find(|&j| is_marker(j));
            if let Some(j) = close {
                for token in &tokens[i + width..j] {
                    let mut token = *token;
                    if let Token::Char(styled) = &mut token {
                        mark(styled);
                    }
                    out.push(token);
                }
                i = j + width;
                continue;
            }
        }

        out.push(tokens[i]);
        i += 1;
    }

    out
}

fn coalesce(chars: &[Styled]) -> Vec<Run> {
    let mut runs: Vec<Run> = Vec::new();

    for styled in chars {
        match runs.last_mut() {
            Some(run) if run.strong == styled.strong && run.emphasis == styled.emphasis => {
                run.text.push(styled.ch);
            }
            _ => runs.push(Run {
                text: styled.ch.to_string(),
                strong: styled.strong,
                emphasis: styled.emphasis,
            }),
        }
    }

    runs
}
