/// One style rule: a selector prelude and the raw text of its block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rule {
    /// Selector text with whitespace collapsed to single spaces.
    pub selector: String,
    /// Raw block contents between the braces, including any nested blocks.
    pub body: String,
}

impl Rule {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.body.trim().is_empty()
    }
}

/// A scanned stylesheet.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Stylesheet {
    /// Number of `/* ... */` comment blocks.
    pub comments: usize,
    /// Style rules in source order (at-rule blocks are not included).
    pub rules: Vec<Rule>,
    /// At-rule preludes that opened a block, e.g. `@media (min-width: 768px)`.
    pub at_rules: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Frame {
    /// Style rule; the index is where its body starts in the stripped text.
    Style { rule: usize, body_start: usize },
    /// Conditional group or other at-rule whose children are style rules.
    Group,
    /// `@keyframes`: child preludes are keyframe selectors, not style rules.
    Keyframes,
    /// A block nested somewhere we do not record rules.
    Opaque,
}

impl Stylesheet {
    #[must_use]
    pub fn parse(source: &str) -> Self {
        let (stripped, comments) = strip_comments(source);
        let mut sheet = Self {
            comments,
            ..Self::default()
        };
        sheet.scan_blocks(&stripped);
        sheet
    }

    fn scan_blocks(&mut self, text: &str) {
        let mut stack: Vec<Frame> = Vec::new();
        let mut prelude_start = 0;
        let mut quote: Option<char> = None;
        let mut escaped = false;

        for (i, c) in text.char_indices() {
            if let Some(q) = quote {
                if escaped {
                    escaped = false;
                } else if c == '\\' {
                    escaped = true;
                } else if c == q {
                    quote = None;
                }
                continue;
            }

            match c {
                '"' | '\'' => quote = Some(c),
                '{' => {
                    let prelude = collapse_whitespace(&text[prelude_start..i]);
                    let frame = self.open_block(prelude, stack.last().copied(), i + 1);
                    stack.push(frame);
                    prelude_start = i + 1;
                }
                '}' => {
                    if let Some(Frame::Style { rule, body_start }) = stack.pop() {
                        self.rules[rule].body = text[body_start..i].to_string();
                    }
                    prelude_start = i + 1;
                }
                ';' => prelude_start = i + 1,
                _ => {}
            }
        }

        // Unterminated blocks keep whatever body text they accumulated.
        while let Some(frame) = stack.pop() {
            if let Frame::Style { rule, body_start } = frame {
                self.rules[rule].body = text[body_start..].to_string();
            }
        }
    }

    fn open_block(&mut self, prelude: String, parent: Option<Frame>, body_start: usize) -> Frame {
        if prelude.starts_with('@') {
            let keyword = prelude
                .trim_start_matches('@')
                .split(|c: char| c.is_whitespace() || c == '(')
                .next()
                .unwrap_or_default()
                .to_ascii_lowercase();
            self.at_rules.push(prelude);
            return if keyword.ends_with("keyframes") {
                Frame::Keyframes
            } else if matches!(parent, Some(Frame::Keyframes | Frame::Opaque)) {
                Frame::Opaque
            } else {
                Frame::Group
            };
        }

        match parent {
            Some(Frame::Keyframes | Frame::Opaque) => Frame::Opaque,
            _ if prelude.is_empty() => Frame::Opaque,
            _ => {
                self.rules.push(Rule {
                    selector: prelude,
                    body: String::new(),
                });
                Frame::Style {
                    rule: self.rules.len() - 1,
                    body_start,
                }
            }
        }
    }

    /// Count occurrences of `needle` in the raw source.
    #[must_use]
    pub fn count_occurrences(source: &str, needle: &str) -> usize {
        if needle.is_empty() {
            return 0;
        }
        source.matches(needle).count()
    }

    /// Line count as produced by splitting on `\n` (a trailing newline adds an empty line).
    #[must_use]
    pub fn line_count(source: &str) -> usize {
        source.split('\n').count()
    }
}

/// Replace comments with a single space, leaving quoted strings intact.
fn strip_comments(source: &str) -> (String, usize) {
    let mut out = String::with_capacity(source.len());
    let mut count = 0;
    let mut chars = source.chars().peekable();
    let mut quote: Option<char> = None;
    let mut escaped = false;

    while let Some(c) = chars.next() {
        if let Some(q) = quote {
            out.push(c);
            if escaped {
                escaped = false;
            } else if c == '\\' {
                escaped = true;
            } else if c == q {
                quote = None;
            }
            continue;
        }

        if c == '/' && chars.peek() == Some(&'*') {
            chars.next();
            count += 1;
            let mut prev = '\0';
            for inner in chars.by_ref() {
                if prev == '*' && inner == '/' {
                    break;
                }
                prev = inner;
            }
            out.push(' ');
            continue;
        }

        if c == '"' || c == '\'' {
            quote = Some(c);
        }
        out.push(c);
    }

    (out, count)
}

fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

#[cfg(test)]
#[path = "stylesheet_tests.rs"]
mod tests;
