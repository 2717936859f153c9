//! Regression tests for the `logic` binary: outlines, lookups, edits written
//! back to disk, and miette diagnostics on failure.

mod common;

use std::fs;
use std::path::PathBuf;

use assert_cmd::Command;
use predicates::prelude::*;
use predicates::str::contains;
use tempfile::TempDir;

use logic::codec;
use logic::syntax::{Placeholder, Program, Statement, SyntaxNode, SyntaxNodeKind};
use logic::NodeId;

use common::variable;

fn write_program(dir: &TempDir, program: &Program) -> PathBuf {
    let path = dir.path().join("program.json");
    fs::write(&path, codec::encode_pretty(&program.to_node()).unwrap()).unwrap();
    path
}

fn logic() -> Command {
    Command::cargo_bin("logic").unwrap()
}

#[cfg(test)]
mod cli_regression {
    use super::*;

    #[test]
    fn test_inspect_prints_an_outline() {
        let dir = TempDir::new().unwrap();
        let declaration = variable("speed", 3.0);
        let path = write_program(&dir, &Program::new(vec![Statement::declaration(declaration)]));

        logic()
            .arg("inspect")
            .arg(&path)
            .assert()
            .success()
            .stdout(contains("program").and(contains("declaration.variable speed")));
    }

    #[test]
    fn test_find_prints_the_node_as_json() {
        let dir = TempDir::new().unwrap();
        let declaration = variable("speed", 3.0);
        let name = declaration.name().unwrap().id;
        let path = write_program(&dir, &Program::new(vec![Statement::declaration(declaration)]));

        let output = logic()
            .arg("find")
            .arg(&path)
            .arg(name.to_string())
            .assert()
            .success()
            .get_output()
            .stdout
            .clone();
        let found = codec::decode(&String::from_utf8(output).unwrap()).unwrap();
        assert_eq!(found.id(), name);
        assert_eq!(found.label(), "speed");
    }

    #[test]
    fn test_path_prints_one_line_per_ancestor() {
        let dir = TempDir::new().unwrap();
        let declaration = variable("speed", 3.0);
        let name = declaration.name().unwrap().id;
        let path = write_program(&dir, &Program::new(vec![Statement::declaration(declaration)]));

        logic()
            .arg("path")
            .arg(&path)
            .arg(name.to_string())
            .arg("--include-top-level")
            .assert()
            .success()
            .stdout(contains("program").and(contains(name.to_string())));
    }

    #[test]
    fn test_delete_writes_the_edited_tree() {
        let dir = TempDir::new().unwrap();
        let declaration = variable("speed", 3.0);
        let path = write_program(
            &dir,
            &Program::new(vec![Statement::declaration(declaration.clone())]),
        );
        let edited = dir.path().join("edited.json");

        logic()
            .arg("delete")
            .arg(&path)
            .arg(declaration.id().to_string())
            .arg("--output")
            .arg(&edited)
            .assert()
            .success();

        let root = codec::decode(&fs::read_to_string(&edited).unwrap()).unwrap();
        let SyntaxNode::Program(program) = root else {
            panic!("expected a program");
        };
        assert_eq!(program.block.len(), 1);
        assert!(program.block.at(0).is_placeholder());
    }

    #[test]
    fn test_normalize_appends_placeholders() {
        let dir = TempDir::new().unwrap();
        let branch = Statement::branch(logic::Expression::identifier("ready"), vec![]);
        let path = write_program(&dir, &Program::new(vec![branch.clone()]));

        let output = logic()
            .arg("normalize")
            .arg(&path)
            .assert()
            .success()
            .get_output()
            .stdout
            .clone();
        let root = codec::decode(&String::from_utf8(output).unwrap()).unwrap();
        let Some(SyntaxNode::Statement(branch)) = root.find(branch.id()) else {
            panic!("branch went missing");
        };
        assert!(branch.block().is_some_and(|block| block.len() == 1));
    }

    #[test]
    fn test_invalid_json_is_a_decode_diagnostic() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("broken.json");
        fs::write(&path, "{\"type\": \"program\", \"data\": ").unwrap();

        logic()
            .arg("inspect")
            .arg(&path)
            .assert()
            .failure()
            .stderr(contains("logic::decode").or(contains("Decode error")));
    }

    #[test]
    fn test_unknown_id_is_a_not_found_diagnostic() {
        let dir = TempDir::new().unwrap();
        let path = write_program(&dir, &Program::new(vec![Statement::make_placeholder()]));

        logic()
            .arg("find")
            .arg(&path)
            .arg(NodeId::new().to_string())
            .assert()
            .failure()
            .stderr(contains("logic::edit::not_found").or(contains("no node with id")));
    }

    #[test]
    fn test_missing_file_is_an_io_diagnostic() {
        let dir = TempDir::new().unwrap();
        logic()
            .arg("inspect")
            .arg(dir.path().join("absent.json"))
            .assert()
            .failure()
            .stderr(contains("logic::io").or(contains("I/O error")));
    }

    #[test]
    fn test_malformed_id_is_rejected_by_the_parser() {
        logic()
            .args(["find", "program.json", "not-a-uuid"])
            .assert()
            .failure()
            .stderr(contains("invalid value"));
    }
}
