//! Simple CSS-like selectors
//!
//! Supports a single compound selector: an optional tag name followed by
//! any number of `.class`, `#id` and `[attr]` parts, e.g. `div.tip[data-x]`.
//! Combinators and selector lists are not supported.

use std::str::FromStr;

use crate::error::HovertipError;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Selector {
    pub tag: Option<String>,
    pub id: Option<String>,
    pub classes: Vec<String>,
    pub attributes: Vec<String>,
}

impl Selector {
    pub fn parse(input: &str) -> Result<Self, HovertipError> {
        let input = input.trim();
        if input.is_empty() {
            return Err(HovertipError::InvalidSelector(input.to_string()));
        }

        let chars: Vec<char> = input.chars().collect();
        let mut selector = Selector::default();
        let mut pos = 0;

        // Leading tag name
        let tag_end = scan_name(&chars, pos);
        if tag_end > pos {
            selector.tag = Some(chars[pos..tag_end].iter().collect::<String>().to_ascii_lowercase());
            pos = tag_end;
        }

        while pos < chars.len() {
            match chars[pos] {
                '.' | '#' => {
                    let start = pos + 1;
                    let end = scan_name(&chars, start);
                    if end == start {
                        return Err(HovertipError::InvalidSelector(input.to_string()));
                    }
                    let name: String = chars[start..end].iter().collect();
                    if chars[pos] == '.' {
                        selector.classes.push(name);
                    } else if selector.id.replace(name).is_some() {
                        return Err(HovertipError::InvalidSelector(input.to_string()));
                    }
                    pos = end;
                }
                '[' => {
                    let start = pos + 1;
                    let end = scan_name(&chars, start);
                    if end == start || chars.get(end) != Some(&']') {
                        return Err(HovertipError::InvalidSelector(input.to_string()));
                    }
                    selector.attributes.push(chars[start..end].iter().collect());
                    pos = end + 1;
                }
                _ => return Err(HovertipError::InvalidSelector(input.to_string())),
            }
        }

        Ok(selector)
    }

    /// Check the selector against an element's tag, id, classes and attributes
    pub fn matches(
        &self,
        tag: &str,
        id: Option<&str>,
        has_class: impl Fn(&str) -> bool,
        has_attribute: impl Fn(&str) -> bool,
    ) -> bool {
        if self.tag.as_deref().is_some_and(|t| !t.eq_ignore_ascii_case(tag)) {
            return false;
        }
        if self.id.as_deref().is_some_and(|expected| id != Some(expected)) {
            return false;
        }
        self.classes.iter().all(|c| has_class(c)) && self.attributes.iter().all(|a| has_attribute(a))
    }
}

impl FromStr for Selector {
    type Err = HovertipError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Selector::parse(s)
    }
}

fn scan_name(chars: &[char], start: usize) -> usize {
    let mut end = start;
    while end < chars.len() && is_name_char(chars[end]) {
        end += 1;
    }
    end
}

fn is_name_char(c: char) -> bool {
    c.is_alphanumeric() || c == '-' || c == '_'
}
