//! Minimal front matter reading for lesson files
//!
//! Only the leading `---` delimited block is looked at, and only single
//! `key: "quoted value"` lines can be read out of it.

const DELIMITER: &str = "---";

pub struct FrontMatter<'a> {
    lines: Vec<&'a str>,
}

impl<'a> FrontMatter<'a> {
    /// Returns `None` if `content` does not start with a closed front matter block
    pub fn parse(content: &'a str) -> Option<FrontMatter<'a>> {
        let content = content.strip_prefix('\u{feff}').unwrap_or(content);
        let mut lines = content
            .split('\n')
            .map(|l| l.strip_suffix('\r').unwrap_or(l))
            .skip_while(|l| l.trim().is_empty());
        if lines.next()?.trim_end() != DELIMITER {
            return None;
        }
        let mut block = Vec::new();
        for line in lines {
            if line.trim_end() == DELIMITER {
                return Some(FrontMatter { lines: block });
            }
            block.push(line);
        }
        None
    }

    /// Value of the first `key: "value"` or `key: 'value'` line, trimmed
    pub fn get(&self, key: &str) -> Option<&'a str> {
        self.lines.iter().find_map(|line| {
            let rest = line.trim_start().strip_prefix(key)?;
            let rest = rest.trim_start().strip_prefix(':')?.trim_start();
            let quote = rest.chars().next().filter(|c| *c == '"' || *c == '\'')?;
            let rest = &rest[1..];
            let value = rest[..rest.find(quote)?].trim();
            (!value.is_empty()).then_some(value)
        })
    }
}

pub fn extract_title(content: &str) -> Option<String> {
    FrontMatter::parse(content)?.get("title").map(String::from)
}
