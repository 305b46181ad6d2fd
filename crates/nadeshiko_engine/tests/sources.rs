use std::fs;
use std::path::PathBuf;

use nadeshiko_engine::collect_java_sources;
use tempfile::TempDir;

#[test]
fn collects_java_files_recursively_relative_and_sorted() {
    let temp = TempDir::new().unwrap();
    let root = temp.path();
    fs::create_dir_all(root.join("converter")).unwrap();
    fs::write(root.join("JavaToNadeshikoConverter.java"), "class A {}").unwrap();
    fs::write(root.join("converter/WhileStatementConverter.java"), "").unwrap();
    fs::write(root.join("converter/IndentManager.java"), "").unwrap();
    fs::write(root.join("javaparser-core-3.26.2.jar"), "").unwrap();
    fs::write(root.join("converter/notes.txt"), "").unwrap();

    let sources = collect_java_sources(root).unwrap();

    assert_eq!(
        sources,
        vec![
            PathBuf::from("JavaToNadeshikoConverter.java"),
            PathBuf::from("converter/IndentManager.java"),
            PathBuf::from("converter/WhileStatementConverter.java"),
        ]
    );
}

#[test]
fn missing_directory_is_an_error() {
    let temp = TempDir::new().unwrap();
    assert!(collect_java_sources(&temp.path().join("absent")).is_err());
}
