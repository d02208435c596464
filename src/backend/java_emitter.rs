//! Java code emitter - builds Java source text line by line
//!
//! This module provides utilities for building consistently indented Java code.

use std::fmt::Write;

/// Indentation levels used for continuation lines (wrapped parameter lists).
const CONTINUATION_LEVELS: usize = 2;

/// A buffer for building Java source code with proper indentation
#[derive(Debug)]
pub struct JavaEmitter {
    lines: Vec<String>,
    indent_level: usize,
    indent_str: String,
}

impl Default for JavaEmitter {
    fn default() -> Self {
        Self::new()
    }
}

impl JavaEmitter {
    pub fn new() -> Self {
        Self::with_indent_width(2)
    }

    pub fn with_indent_width(width: usize) -> Self {
        Self {
            lines: Vec::new(),
            indent_level: 0,
            indent_str: " ".repeat(width),
        }
    }

    /// Get the emitted lines
    pub fn finish(self) -> Vec<String> {
        self.lines
    }

    /// Get the emitted lines so far
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Write a line with current indentation
    pub fn line(&mut self, s: &str) {
        let mut line = self.indent_str.repeat(self.indent_level);
        line.push_str(s);
        self.lines.push(line);
    }

    /// Write a formatted line with current indentation
    pub fn linef(&mut self, args: std::fmt::Arguments<'_>) {
        let mut text = String::new();
        let _ = text.write_fmt(args);
        self.line(&text);
    }

    /// Write a statement (appends `;`)
    pub fn statement(&mut self, s: &str) {
        self.linef(format_args!("{};", s));
    }

    /// Write a blank line (never indented)
    pub fn blank_line(&mut self) {
        self.lines.push(String::new());
    }

    /// Increase indent level
    pub fn indent(&mut self) {
        self.indent_level += 1;
    }

    /// Decrease indent level
    pub fn dedent(&mut self) {
        if self.indent_level > 0 {
            self.indent_level -= 1;
        }
    }

    /// Write a block with braces
    pub fn block<F>(&mut self, header: &str, f: F)
    where
        F: FnOnce(&mut Self),
    {
        self.line(&format!("{} {{", header));
        self.indent();
        f(self);
        self.dedent();
        self.line("}");
    }

    /// Write a package declaration
    pub fn package_decl(&mut self, package: &str) {
        self.line(&format!("package {};", package));
    }

    /// Write an import statement
    pub fn import(&mut self, path: &str) {
        self.line(&format!("import {};", path));
    }

    /// Write a field declaration
    pub fn field(&mut self, modifiers: &str, ty: &str, name: &str) {
        self.line(&format!("{} {} {};", modifiers, ty, name));
    }

    /// Write a class declaration
    pub fn class_def<F>(&mut self, modifiers: &str, name: &str, extends: Option<&str>, f: F)
    where
        F: FnOnce(&mut Self),
    {
        let header = match extends {
            Some(base) => format!("{} class {} extends {}", modifiers, name, base),
            None => format!("{} class {}", modifiers, name),
        };
        self.block(&header, f);
    }

    /// Write a constructor with one parameter per line.
    ///
    /// `params` are `(type, name)` pairs; the closing parenthesis sits on its own line.
    pub fn constructor<F>(&mut self, visibility: &str, name: &str, params: &[(String, String)], f: F)
    where
        F: FnOnce(&mut Self),
    {
        self.line(&format!("{} {}(", visibility, name));
        self.indent_level += CONTINUATION_LEVELS;
        for (i, (ty, param)) in params.iter().enumerate() {
            let sep = if i + 1 < params.len() { "," } else { "" };
            self.line(&format!("{} {}{}", ty, param, sep));
        }
        self.indent_level -= CONTINUATION_LEVELS;
        self.block(")", f);
    }

    /// Write a method with its annotations on the signature line
    pub fn method<F>(
        &mut self,
        annotations: &[&str],
        modifiers: &str,
        return_type: &str,
        name: &str,
        params: &str,
        f: F,
    ) where
        F: FnOnce(&mut Self),
    {
        let mut header = String::new();
        for annotation in annotations {
            header.push_str(annotation);
            header.push(' ');
        }
        if !modifiers.is_empty() {
            header.push_str(modifiers);
            header.push(' ');
        }
        header.push_str(&format!("{} {}({})", return_type, name, params));
        self.block(&header, f);
    }

    /// Write an enhanced for loop
    pub fn for_each<F>(&mut self, ty: &str, var: &str, iterable: &str, f: F)
    where
        F: FnOnce(&mut Self),
    {
        self.block(&format!("for ({} {} : {})", ty, var, iterable), f);
    }

    /// Write a line comment
    pub fn comment(&mut self, text: &str) {
        self.line(&format!("// {}", text));
    }
}
