//! Handles all user-facing output for the CLI.
//!
//! Outlines list one node per line, indented by depth: the kind in color,
//! then its label, then its id dimmed.

use std::io::{self, Write};

use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};

use crate::syntax::{SyntaxNode, SyntaxNodeKind};

// ============================================================================
// CORE OUTPUT FUNCTIONS
// ============================================================================

/// Prints the whole tree under `root` to stdout.
pub fn print_outline(root: &SyntaxNode) -> io::Result<()> {
    let mut stdout = StandardStream::stdout(ColorChoice::Auto);
    write_outline(&mut stdout, root)?;
    stdout.reset()
}

/// Prints each node of a path on its own line, outermost first.
pub fn print_path(path: &[SyntaxNode]) -> io::Result<()> {
    let mut stdout = StandardStream::stdout(ColorChoice::Auto);
    write_path(&mut stdout, path)?;
    stdout.reset()
}

pub fn write_outline<W: WriteColor>(out: &mut W, root: &SyntaxNode) -> io::Result<()> {
    write_subtree(out, root, 0)
}

pub fn write_path<W: WriteColor>(out: &mut W, path: &[SyntaxNode]) -> io::Result<()> {
    for (depth, node) in path.iter().enumerate() {
        write_line(out, node, depth)?;
    }
    Ok(())
}

// ============================================================================
// PRIVATE HELPERS
// ============================================================================

fn write_subtree<W: WriteColor>(out: &mut W, node: &SyntaxNode, depth: usize) -> io::Result<()> {
    write_line(out, node, depth)?;
    for child in node.subnodes() {
        write_subtree(out, &child, depth + 1)?;
    }
    Ok(())
}

fn write_line<W: WriteColor>(out: &mut W, node: &SyntaxNode, depth: usize) -> io::Result<()> {
    write!(out, "{}", "  ".repeat(depth))?;
    out.set_color(ColorSpec::new().set_fg(Some(kind_color(node))).set_bold(true))?;
    write!(out, "{}", node.kind_name())?;
    out.reset()?;
    write!(out, " {}", node.label())?;
    out.set_color(ColorSpec::new().set_dimmed(true))?;
    write!(out, " {}", node.id())?;
    out.reset()?;
    writeln!(out)
}

fn kind_color(node: &SyntaxNode) -> Color {
    if node.is_empty_slot() {
        return Color::Yellow;
    }
    match node {
        SyntaxNode::Program(_) | SyntaxNode::TopLevelDeclarations(_) => Color::Magenta,
        SyntaxNode::Declaration(_) => Color::Blue,
        SyntaxNode::Statement(_) => Color::Cyan,
        SyntaxNode::Literal(_) => Color::Green,
        _ => Color::White,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::syntax::{Expression, Placeholder, Program, Statement};
    use termcolor::NoColor;

    #[test]
    fn outline_indents_by_depth() {
        let root = Program::new(vec![Statement::expression(Expression::identifier("go"))]).to_node();
        let mut out = NoColor::new(Vec::new());
        write_outline(&mut out, &root).unwrap();
        let text = String::from_utf8(out.into_inner()).unwrap();
        let lines: Vec<_> = text.lines().collect();

        assert_eq!(lines.len(), 4);
        assert!(lines[0].starts_with("program program "));
        assert!(lines[1].starts_with("  statement.expressionStatement go "));
        assert!(lines[3].starts_with("      identifier go "));
    }

    struct ClosedPipe;

    impl Write for ClosedPipe {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::from(io::ErrorKind::BrokenPipe))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn write_failures_are_returned() {
        let root = Program::new(vec![Statement::make_placeholder()]).to_node();
        let mut out = NoColor::new(ClosedPipe);

        let error = write_outline(&mut out, &root).unwrap_err();
        assert_eq!(error.kind(), io::ErrorKind::BrokenPipe);
        let error = write_path(&mut out, &[root]).unwrap_err();
        assert_eq!(error.kind(), io::ErrorKind::BrokenPipe);
    }

    #[test]
    fn path_lines_indent_by_position() {
        let statement = Statement::expression(Expression::identifier("go"));
        let root = Program::new(vec![statement.clone()]).to_node();
        let mut out = NoColor::new(Vec::new());
        write_path(&mut out, &[root, statement.to_node()]).unwrap();
        let text = String::from_utf8(out.into_inner()).unwrap();
        let lines: Vec<_> = text.lines().collect();

        assert_eq!(lines.len(), 2);
        assert!(lines[1].starts_with("  statement.expressionStatement go "));
    }
}
