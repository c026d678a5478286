//! Markdown API reference built from `///` doc comments.
//!
//! Every doc block directly attached to a `pub` fn, struct, enum, trait or type
//! alias becomes one section. Methods are named after the type of the `impl`
//! block that holds them.

use anyhow::{Context, Result};
use std::fmt::Write as _;
use std::fs;
use std::path::{Path, PathBuf};

/// One documented item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Doc {
    pub kind: &'static str,
    pub name: String,
    pub description: Vec<String>,
    /// Function parameters (receiver included) or public struct fields.
    pub parameters: Vec<String>,
    pub returns: Option<String>,
}

impl Doc {
    pub fn to_markdown(&self) -> String {
        let mut out = format!("## {} {}\n\n", self.kind, self.name);
        for line in &self.description {
            out.push_str(line);
            out.push('\n');
        }
        if !self.parameters.is_empty() {
            let label = if self.kind == "struct" { "Fields" } else { "Parameters" };
            let _ = write!(out, "\n{label}:\n");
            for parameter in &self.parameters {
                let _ = writeln!(out, " - `{parameter}`");
            }
        }
        if let Some(returns) = &self.returns {
            let _ = write!(out, "\nReturns: `{returns}`\n");
        }
        out
    }
}

pub fn write_api_reference(src: &Path, out: &Path) -> Result<()> {
    let mut files = Vec::new();
    collect_sources(src, &mut files)
        .with_context(|| format!("Failed to scan {}", src.display()))?;
    files.sort();

    let mut markdown = String::from("# API reference\n\n");
    let mut documented = 0;
    for file in &files {
        let source = fs::read_to_string(file)
            .with_context(|| format!("Failed to read {}", file.display()))?;
        let docs = parse_source(&source);
        if docs.is_empty() {
            continue;
        }
        let relative = file.strip_prefix(src).unwrap_or(file);
        let _ = write!(markdown, "# `{}`\n\n", relative.display());
        for doc in &docs {
            markdown.push_str(&doc.to_markdown());
            markdown.push('\n');
        }
        documented += docs.len();
    }

    if let Some(parent) = out.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    fs::write(out, markdown).with_context(|| format!("Failed to write {}", out.display()))?;
    println!(
        "Documented {} items from {} files into {}",
        documented,
        files.len(),
        out.display()
    );
    Ok(())
}

fn collect_sources(dir: &Path, files: &mut Vec<PathBuf>) -> Result<()> {
    for entry in fs::read_dir(dir)? {
        let path = entry?.path();
        if path.is_dir() {
            collect_sources(&path, files)?;
        } else if path.extension().and_then(|e| e.to_str()) == Some("rs") {
            files.push(path);
        }
    }
    Ok(())
}

/// Extracts every documented public item of one source file, in file order.
pub fn parse_source(source: &str) -> Vec<Doc> {
    let lines: Vec<&str> = source.lines().collect();
    let mut docs = Vec::new();
    let mut description: Vec<String> = Vec::new();
    let mut impl_target: Option<String> = None;
    // Open `[` count of an attribute between a doc block and its item.
    let mut attr_depth = 0usize;

    for (index, line) in lines.iter().enumerate() {
        let trimmed = line.trim_start();

        if let Some(text) = trimmed.strip_prefix("///") {
            description.push(text.strip_prefix(' ').unwrap_or(text).to_string());
            continue;
        }
        if !description.is_empty() && (attr_depth > 0 || trimmed.starts_with("#[")) {
            attr_depth = bracket_depth(attr_depth, trimmed);
            continue;
        }
        attr_depth = 0;

        if !line.starts_with(char::is_whitespace) {
            if let Some(target) = impl_target_of(trimmed) {
                impl_target = Some(target);
            } else if line.starts_with('}') {
                impl_target = None;
            }
        }

        if !description.is_empty() {
            if let Some((kind, rest)) = item_kind(trimmed) {
                let name = ident_prefix(rest);
                let qualified = match (&impl_target, kind) {
                    (Some(target), "fn") if line.starts_with(char::is_whitespace) => {
                        format!("{target}::{name}")
                    }
                    _ => name.to_string(),
                };
                let (parameters, returns) = match kind {
                    "fn" => parse_signature(&signature_text(&lines[index..]), name.len()),
                    "struct" => (struct_fields(&lines[index..]), None),
                    _ => (Vec::new(), None),
                };
                docs.push(Doc {
                    kind,
                    name: qualified,
                    description: std::mem::take(&mut description),
                    parameters,
                    returns,
                });
            }
        }
        description.clear();
    }

    docs
}

/// Depth after `line`, counting `[` and `]` outside string literals.
fn bracket_depth(mut depth: usize, line: &str) -> usize {
    let mut in_str = false;
    let mut prev = ' ';
    for c in line.chars() {
        match c {
            '"' if prev != '\\' => in_str = !in_str,
            '[' if !in_str => depth += 1,
            ']' if !in_str => depth = depth.saturating_sub(1),
            _ => {}
        }
        prev = c;
    }
    depth
}

/// Maps `pub [const|unsafe|async ]* <keyword> rest` to `(keyword, rest)`.
fn item_kind(trimmed: &str) -> Option<(&'static str, &str)> {
    let mut rest = trimmed.strip_prefix("pub ")?;
    loop {
        for (keyword, kind) in [
            ("fn ", "fn"),
            ("struct ", "struct"),
            ("enum ", "enum"),
            ("trait ", "trait"),
            ("type ", "type"),
        ] {
            if let Some(after) = rest.strip_prefix(keyword) {
                return Some((kind, after));
            }
        }
        rest = ["const ", "unsafe ", "async "]
            .iter()
            .find_map(|q| rest.strip_prefix(q))?;
    }
}

fn impl_target_of(trimmed: &str) -> Option<String> {
    let rest = trimmed.strip_prefix("impl")?;
    if !(rest.starts_with('<') || rest.starts_with(' ')) {
        return None;
    }
    let rest = skip_generics(rest.trim_start());
    let rest = match rest.find(" for ") {
        Some(at) => &rest[at + " for ".len()..],
        None => rest,
    };
    let name = ident_prefix(rest.trim_start());
    (!name.is_empty()).then(|| name.to_string())
}

fn ident_prefix(text: &str) -> &str {
    let end = text
        .find(|c: char| !(c.is_alphanumeric() || c == '_'))
        .unwrap_or(text.len());
    &text[..end]
}

/// Skips a leading `<...>` group, if any.
fn skip_generics(text: &str) -> &str {
    if !text.starts_with('<') {
        return text;
    }
    let mut depth = 0usize;
    let mut prev = ' ';
    for (at, c) in text.char_indices() {
        match c {
            '<' => depth += 1,
            '>' if prev != '-' => {
                depth -= 1;
                if depth == 0 {
                    return &text[at + 1..];
                }
            }
            _ => {}
        }
        prev = c;
    }
    ""
}

/// Joins the lines of a signature up to its body, `where` clause or `;`.
fn signature_text(lines: &[&str]) -> String {
    let mut signature = String::new();
    for line in lines {
        let trimmed = line.trim();
        if trimmed == "where" || trimmed.starts_with("where ") {
            break;
        }
        if !signature.is_empty() && !signature.ends_with('(') && !trimmed.starts_with(')') {
            signature.push(' ');
        }
        signature.push_str(trimmed);
        if trimmed.ends_with('{') || trimmed.ends_with(';') {
            break;
        }
    }
    signature
}

/// Splits `pub fn name<..>(params) -> Ret` into its parameters and return type.
fn parse_signature(signature: &str, name_len: usize) -> (Vec<String>, Option<String>) {
    let Some(fn_at) = signature.find("fn ") else {
        return (Vec::new(), None);
    };
    let after_name = &signature[fn_at + "fn ".len() + name_len..];
    let rest = skip_generics(after_name);
    let Some(rest) = rest.strip_prefix('(') else {
        return (Vec::new(), None);
    };

    let mut parameters = Vec::new();
    let mut current = String::new();
    let mut depth = 0usize;
    let mut prev = ' ';
    let mut close_at = rest.len();
    for (at, c) in rest.char_indices() {
        match c {
            '(' | '<' | '[' => depth += 1,
            '>' if prev == '-' => {}
            ')' if depth == 0 => {
                close_at = at;
                break;
            }
            ')' | '>' | ']' => depth = depth.saturating_sub(1),
            ',' if depth == 0 => {
                parameters.push(current.trim().to_string());
                current.clear();
                prev = c;
                continue;
            }
            _ => {}
        }
        current.push(c);
        prev = c;
    }
    if !current.trim().is_empty() {
        parameters.push(current.trim().to_string());
    }
    parameters.retain(|p| !p.is_empty());

    let tail = rest[close_at..].trim_start_matches(')').trim();
    let returns = tail.strip_prefix("->").map(|ret| {
        let end = ret.find(" where").or_else(|| ret.find('{')).or_else(|| ret.find(';'));
        ret[..end.unwrap_or(ret.len())].trim().to_string()
    });

    (parameters, returns.filter(|r| !r.is_empty()))
}

fn struct_fields(lines: &[&str]) -> Vec<String> {
    let Some(first) = lines.first() else {
        return Vec::new();
    };
    if !first.trim_end().ends_with('{') {
        return Vec::new();
    }
    lines[1..]
        .iter()
        .map(|line| line.trim())
        .take_while(|line| !line.starts_with('}'))
        .filter_map(|line| line.strip_prefix("pub "))
        .filter(|field| field.contains(':'))
        .map(|field| field.trim_end_matches(',').to_string())
        .collect()
}
