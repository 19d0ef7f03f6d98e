//! The command language driving the tree: a single line of
//! whitespace-separated tokens, consumed left to right.
//!
//! * `A<int>` inserts the value (e.g. `A42`).
//! * `D<int>` deletes the value (e.g. `D42`).
//! * `PRE`, `IN`, and `POST` print the corresponding traversal of the tree
//!   built so far and end the run; later tokens are never looked at.
//! * Every other token is skipped without complaint.
//!
//! A traversal of an empty tree prints the literal text `EMPTY`. A token
//! that starts with `A` or `D` but doesn't continue with an integer is a
//! parse error.
//!
//! # Examples
//!
//! ```
//! let output = avl::command::run_line("A5 A3 A8 A1 A4 IN").unwrap();
//! assert_eq!(output.as_deref(), Some("1 3 4 5 8"));
//! ```

use thiserror::Error;

use crate::tree::Tree;

/// The traversal orders selectable from the command line.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Order {
    /// Node, then left subtree, then right subtree.
    Pre,
    /// Left subtree, then node, then right subtree.
    In,
    /// Left subtree, then right subtree, then node.
    Post,
}

/// One parsed command from the input line.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Command {
    /// Insert the value into the tree.
    Insert(i64),
    /// Delete the value from the tree.
    Delete(i64),
    /// Print the traversal of the tree and stop.
    Print(Order),
}

/// Errors produced while parsing a command line.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CommandError {
    /// An `A`/`D` token whose payload didn't parse as an integer.
    #[error("token {0:?} does not carry a valid integer")]
    InvalidInteger(String),
}

/// Parses one line of commands. Parsing stops at the first traversal
/// command, so tokens after it are never examined; unrecognized tokens
/// before it are skipped.
pub fn parse(line: &str) -> Result<Vec<Command>, CommandError> {
    let mut commands = Vec::new();

    for token in line.split_whitespace() {
        if let Some(payload) = token.strip_prefix('A') {
            commands.push(Command::Insert(parse_value(token, payload)?));
        } else if let Some(payload) = token.strip_prefix('D') {
            commands.push(Command::Delete(parse_value(token, payload)?));
        } else if let Some(order) = parse_order(token) {
            commands.push(Command::Print(order));
            break;
        }
        // Anything else is silently skipped.
    }

    Ok(commands)
}

fn parse_order(token: &str) -> Option<Order> {
    match token {
        "PRE" => Some(Order::Pre),
        "IN" => Some(Order::In),
        "POST" => Some(Order::Post),
        _ => None,
    }
}

fn parse_value(token: &str, payload: &str) -> Result<i64, CommandError> {
    payload
        .parse()
        .map_err(|_| CommandError::InvalidInteger(token.to_string()))
}

/// Applies a command sequence to a fresh tree. Returns the rendered output
/// of the traversal command if one was reached, `None` otherwise.
pub fn run(commands: &[Command]) -> Option<String> {
    let mut tree = Tree::new();

    for command in commands {
        match *command {
            Command::Insert(value) => tree.insert(value),
            Command::Delete(value) => tree.delete(&value),
            Command::Print(order) => return Some(render(&tree, order)),
        }
    }

    None
}

/// Parses and runs a command line in one step.
///
/// # Examples
///
/// ```
/// use avl::command;
///
/// assert_eq!(command::run_line("A10 D10 IN").unwrap().as_deref(), Some("EMPTY"));
/// assert_eq!(command::run_line("A10 D10").unwrap(), None);
/// ```
pub fn run_line(line: &str) -> Result<Option<String>, CommandError> {
    Ok(run(&parse(line)?))
}

/// Renders a traversal as space-separated values, or `EMPTY` for a tree
/// with nothing in it.
fn render(tree: &Tree<i64>, order: Order) -> String {
    if tree.is_empty() {
        return "EMPTY".to_string();
    }

    let values: Vec<String> = match order {
        Order::Pre => tree.pre_order().map(i64::to_string).collect(),
        Order::In => tree.in_order().map(i64::to_string).collect(),
        Order::Post => tree.post_order().map(i64::to_string).collect(),
    };
    values.join(" ")
}
