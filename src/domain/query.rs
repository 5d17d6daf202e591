//! Tag query parsing and evaluation
//!
//! Boolean filter expressions over tags, evaluated either against a single
//! tag set or against a whole [`TaggedIndex`]. Supports AND, OR, NOT and
//! parentheses with the usual precedence.
//!
//! # Examples
//!
//! ```
//! use tagdex::domain::{TagQuery, TaggedIndex};
//!
//! let mut index = TaggedIndex::new();
//! index.assign("report", ["work".to_string(), "urgent".to_string()]);
//! index.assign("memo", ["work".to_string()]);
//!
//! let query = TagQuery::parse("work AND NOT urgent").unwrap();
//! assert_eq!(query.evaluate(&index).into_iter().collect::<Vec<_>>(), vec!["memo"]);
//! ```

use crate::domain::TaggedIndex;
use crate::error::{Result, TagdexError};
use regex::Regex;
use std::collections::HashSet;
use std::hash::Hash;
use std::sync::OnceLock;

/// Tag query abstract syntax tree
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TagQuery {
    /// Single tag (e.g., "work")
    Single(String),

    /// Both sides must match
    And(Box<TagQuery>, Box<TagQuery>),

    /// Either side must match
    Or(Box<TagQuery>, Box<TagQuery>),

    /// Inner query must not match
    Not(Box<TagQuery>),
}

fn token_regex() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    REGEX.get_or_init(|| Regex::new(r"\(|\)|[^\s()]+").unwrap())
}

impl TagQuery {
    /// Parse a query string into a TagQuery AST
    ///
    /// Operator precedence: NOT > AND > OR. Parentheses group.
    ///
    /// # Examples
    ///
    /// ```
    /// use tagdex::domain::TagQuery;
    ///
    /// let query = TagQuery::parse("(work OR personal) AND NOT done").unwrap();
    /// assert!(query.matches(&["work".to_string()]));
    /// assert!(!query.matches(&["work".to_string(), "done".to_string()]));
    /// ```
    pub fn parse(query: &str) -> Result<Self> {
        let tokens = tokenize(query)?;
        let mut pos = 0;
        let result = parse_or(&tokens, &mut pos)?;

        if pos != tokens.len() {
            return Err(TagdexError::InvalidQuery(format!(
                "Unexpected {:?} at position {}",
                tokens[pos], pos
            )));
        }

        Ok(result)
    }

    /// Evaluate this query against a single set of tags
    pub fn matches(&self, tags: &[String]) -> bool {
        let tag_set: HashSet<&str> = tags.iter().map(|s| s.as_str()).collect();
        self.matches_set(&tag_set)
    }

    fn matches_set(&self, tags: &HashSet<&str>) -> bool {
        match self {
            TagQuery::Single(tag) => tags.contains(tag.as_str()),
            TagQuery::And(left, right) => left.matches_set(tags) && right.matches_set(tags),
            TagQuery::Or(left, right) => left.matches_set(tags) || right.matches_set(tags),
            TagQuery::Not(inner) => !inner.matches_set(tags),
        }
    }

    /// Select the values of `index` matching this query.
    ///
    /// Works on whole value sets: AND intersects, OR unions, NOT takes the
    /// complement against every value in the index.
    pub fn evaluate<V>(&self, index: &TaggedIndex<String, V>) -> HashSet<V>
    where
        V: Clone + Eq + Hash,
    {
        match self {
            TagQuery::Single(tag) => index.values_of(tag).into_iter().collect(),
            TagQuery::And(left, right) => {
                let left = left.evaluate(index);
                if left.is_empty() {
                    return left;
                }
                let right = right.evaluate(index);
                left.into_iter().filter(|v| right.contains(v)).collect()
            }
            TagQuery::Or(left, right) => {
                let mut result = left.evaluate(index);
                result.extend(right.evaluate(index));
                result
            }
            TagQuery::Not(inner) => {
                let excluded = inner.evaluate(index);
                index
                    .all_values()
                    .into_iter()
                    .filter(|v| !excluded.contains(v))
                    .collect()
            }
        }
    }

    /// Distinct tags referenced anywhere in the query
    pub fn tags(&self) -> Vec<&str> {
        let mut out = Vec::new();
        self.collect_tags(&mut out);
        out
    }

    fn collect_tags<'a>(&'a self, out: &mut Vec<&'a str>) {
        match self {
            TagQuery::Single(tag) => {
                if !out.contains(&tag.as_str()) {
                    out.push(tag);
                }
            }
            TagQuery::And(left, right) | TagQuery::Or(left, right) => {
                left.collect_tags(out);
                right.collect_tags(out);
            }
            TagQuery::Not(inner) => inner.collect_tags(out),
        }
    }

    /// Copy of this query with every tag lowercased
    pub fn lowercased(&self) -> Self {
        match self {
            TagQuery::Single(tag) => TagQuery::Single(tag.to_lowercase()),
            TagQuery::And(left, right) => {
                TagQuery::And(Box::new(left.lowercased()), Box::new(right.lowercased()))
            }
            TagQuery::Or(left, right) => {
                TagQuery::Or(Box::new(left.lowercased()), Box::new(right.lowercased()))
            }
            TagQuery::Not(inner) => TagQuery::Not(Box::new(inner.lowercased())),
        }
    }
}

impl std::fmt::Display for TagQuery {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TagQuery::Single(tag) => write!(f, "#{}", tag),
            TagQuery::And(left, right) => write!(f, "{} AND {}", left, right),
            TagQuery::Or(left, right) => write!(f, "({} OR {})", left, right),
            TagQuery::Not(inner) => write!(f, "NOT {}", inner),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Token {
    Tag(String),
    And,
    Or,
    Not,
    Open,
    Close,
}

fn tokenize(query: &str) -> Result<Vec<Token>> {
    let mut tokens = Vec::new();

    for word in token_regex().find_iter(query).map(|m| m.as_str()) {
        match word.to_uppercase().as_str() {
            "AND" => tokens.push(Token::And),
            "OR" => tokens.push(Token::Or),
            "NOT" => tokens.push(Token::Not),
            "(" => tokens.push(Token::Open),
            ")" => tokens.push(Token::Close),
            _ => {
                // Any other run of non-space, non-paren characters is a tag
                let tag = word.strip_prefix('#').unwrap_or(word);
                if tag.is_empty() {
                    return Err(TagdexError::InvalidQuery(format!("Invalid tag: {}", word)));
                }
                tokens.push(Token::Tag(tag.to_string()));
            }
        }
    }

    if tokens.is_empty() {
        return Err(TagdexError::InvalidQuery("Empty query".to_string()));
    }

    Ok(tokens)
}

/// Lowest precedence
fn parse_or(tokens: &[Token], pos: &mut usize) -> Result<TagQuery> {
    let mut left = parse_and(tokens, pos)?;

    while matches!(tokens.get(*pos), Some(Token::Or)) {
        *pos += 1;
        let right = parse_and(tokens, pos)?;
        left = TagQuery::Or(Box::new(left), Box::new(right));
    }

    Ok(left)
}

fn parse_and(tokens: &[Token], pos: &mut usize) -> Result<TagQuery> {
    let mut left = parse_not(tokens, pos)?;

    while matches!(tokens.get(*pos), Some(Token::And)) {
        *pos += 1;
        let right = parse_not(tokens, pos)?;
        left = TagQuery::And(Box::new(left), Box::new(right));
    }

    Ok(left)
}

/// NOT is right-associative
fn parse_not(tokens: &[Token], pos: &mut usize) -> Result<TagQuery> {
    if matches!(tokens.get(*pos), Some(Token::Not)) {
        *pos += 1;
        let inner = parse_not(tokens, pos)?;
        Ok(TagQuery::Not(Box::new(inner)))
    } else {
        parse_primary(tokens, pos)
    }
}

fn parse_primary(tokens: &[Token], pos: &mut usize) -> Result<TagQuery> {
    match tokens.get(*pos) {
        Some(Token::Tag(tag)) => {
            *pos += 1;
            Ok(TagQuery::Single(tag.clone()))
        }
        Some(Token::Open) => {
            *pos += 1;
            let inner = parse_or(tokens, pos)?;
            if !matches!(tokens.get(*pos), Some(Token::Close)) {
                return Err(TagdexError::InvalidQuery(
                    "Missing closing parenthesis".to_string(),
                ));
            }
            *pos += 1;
            Ok(inner)
        }
        Some(other) => Err(TagdexError::InvalidQuery(format!(
            "Expected tag, found {:?}",
            other
        ))),
        None => Err(TagdexError::InvalidQuery(
            "Unexpected end of query".to_string(),
        )),
    }
}
