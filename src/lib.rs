#![allow(clippy::module_inception)]

//! Front end for the Kaleidoscope expression language.
//!
//! Source text is tokenized in [`lexer`], assembled into syntax trees by
//! [`parser`], and walked by [`translator`], which drives a code-generation
//! toolkit ([`codegen`]) to produce a textual IR module. [`interpreter`]
//! contains the loop that feeds top-level constructs through the pipeline.

use std::rc::Rc;

use crate::errors::errors::Error;
use crate::interpreter::Interpreter;

pub mod ast;
pub mod codegen;
pub mod errors;
pub mod interpreter;
pub mod lexer;
pub mod macros;
pub mod parser;
pub mod translator;

extern crate regex;

/// A byte offset into a named source text.
#[derive(Debug, Clone)]
pub struct Position(pub u32, pub Rc<String>);

/// Translates `source` in one pass and returns the textual IR module.
pub fn interpret(source: String, file: Option<String>) -> Result<String, Error> {
    Interpreter::from_source(source, file)?.run()
}

pub fn line_at_offset(source: &str, offset: u32) -> (usize, String, usize) {
    let pos = offset as usize;

    let mut start = 0;
    let mut line_number = 1;

    for line in source.split_inclusive('\n') {
        let end = start + line.len();

        if (start..end).contains(&pos) {
            let line_pos = pos - start;
            return (line_number, line.to_string(), line_pos);
        }

        start = end;
        line_number += 1;
    }

    // Offsets at or past end of input (end-of-input errors) point just
    // after the last line.
    let last = source.lines().last().unwrap_or("");
    (source.lines().count().max(1), last.to_string(), last.len())
}

pub fn display_error(error: &Error, source: &str) {
    /*
        Error: message
        -> final.ks
           |
        20 | def a(x) #;
           | --------^
    */

    println!("Error: {}", error);

    let position = match error.position() {
        Some(position) => position,
        None => return,
    };

    let (line, line_text, line_pos) = line_at_offset(source, position.0);

    let line_string = line.to_string();
    let padding = line_string.len() + 2;

    println!("-> {}", position.1);
    println!("{:>padding$}", "|");

    let (line_text_removed, removed_whitespace) = remove_starting_whitespace(&line_text);
    println!("{} | {}", line_string, line_text_removed.trim_end());

    let arrows = line_pos.saturating_sub(removed_whitespace) + 1;

    println!("{:>padding$} {:->arrows$}", "|", "^");
}

fn remove_starting_whitespace(string: &str) -> (String, usize) {
    let mut start = 0;
    for c in string.chars() {
        if c == ' ' {
            start += 1;
        } else {
            break;
        }
    }

    (String::from(&string[start..]), start)
}
