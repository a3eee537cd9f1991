// ABOUTME: Traversal steps and extractions accepted on the domquery command line.
// ABOUTME: Parses `name:arg` step strings and applies them to a DomQuery chain, producing JSON values.

use std::str::FromStr;

use domquery::DomQuery;
use serde_json::{json, Value};

/// One link of the traversal chain, e.g. `class:info` or `next`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Step {
    Css(String),
    Class(String),
    Id(String),
    Tag(String),
    Eq(isize),
    First,
    Last,
    Next,
    Prev,
    Parent,
}

impl FromStr for Step {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (name, arg) = match s.split_once(':') {
            Some((name, arg)) => (name, Some(arg)),
            None => (s, None),
        };
        let required = |arg: Option<&str>| {
            arg.filter(|a| !a.trim().is_empty())
                .map(str::to_string)
                .ok_or_else(|| format!("step `{}` needs an argument, e.g. `{}:value`", name, name))
        };

        match (name, arg) {
            ("css", arg) => required(arg).map(Step::Css),
            ("class", arg) => required(arg).map(Step::Class),
            ("id", arg) => required(arg).map(Step::Id),
            ("tag", arg) => required(arg).map(Step::Tag),
            ("eq", arg) => {
                let index = required(arg)?;
                index
                    .trim()
                    .parse()
                    .map(Step::Eq)
                    .map_err(|_| format!("invalid index `{}`", index))
            }
            ("first", None) => Ok(Step::First),
            ("last", None) => Ok(Step::Last),
            ("next", None) => Ok(Step::Next),
            ("prev", None) => Ok(Step::Prev),
            ("parent", None) => Ok(Step::Parent),
            _ => Err(format!("unknown step `{}`", s)),
        }
    }
}

impl Step {
    pub fn apply<'a>(&self, q: &DomQuery<'a>) -> DomQuery<'a> {
        match self {
            Step::Css(selector) => q.find(selector),
            Step::Class(name) => q.find_by_class(name),
            Step::Id(id) => q.find_by_id(id),
            Step::Tag(tag) => q.find_by_tag(tag),
            Step::Eq(index) => q.eq(*index),
            Step::First => q.first(),
            Step::Last => q.last(),
            Step::Next => q.next(),
            Step::Prev => q.prev(),
            Step::Parent => q.parent(),
        }
    }
}

/// What to print for the nodes the chain ends on.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Extract {
    #[default]
    Text,
    Html,
    Tag,
    Attr(String),
    Count,
}

impl FromStr for Extract {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.split_once(':') {
            Some(("attr", name)) if !name.trim().is_empty() => Ok(Extract::Attr(name.to_string())),
            Some(("attr", _)) => Err("`attr` needs a name, e.g. `attr:href`".to_string()),
            None => match s {
                "text" => Ok(Extract::Text),
                "html" => Ok(Extract::Html),
                "tag" => Ok(Extract::Tag),
                "count" => Ok(Extract::Count),
                _ => Err(format!("unknown extraction `{}`", s)),
            },
            Some(_) => Err(format!("unknown extraction `{}`", s)),
        }
    }
}

impl Extract {
    /// Extract from every node of `q`; absent values become `null`.
    pub fn apply(&self, q: &DomQuery<'_>) -> Value {
        match self {
            Extract::Count => json!(q.len()),
            Extract::Text => json!(q.map(|item| item.text())),
            Extract::Html => json!(q.map(|item| item.html())),
            Extract::Tag => json!(q.map(|item| item.tag_name())),
            Extract::Attr(name) => json!(q.map(|item| item.attr(name))),
        }
    }
}
