// Copyright (c) UnnamedOrange. Licensed under the MIT License.
// See the LICENSE file in the repository root for full license text.

use std::fs;
use std::path::PathBuf;

use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use tempfile::{NamedTempFile, tempdir};

// 行为：无参时退出 0，并输出 help 关键字。
#[test]
fn no_args_prints_help() {
    cargo_bin_cmd!("mdtotex")
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage"));
}

// 行为：--help 退出 0，并输出 help 关键字。
#[test]
fn help_exits_zero() {
    cargo_bin_cmd!("mdtotex")
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage"));
}

// 行为：--version 退出 0，并输出版本关键字。
#[test]
fn version_exits_zero() {
    cargo_bin_cmd!("mdtotex")
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("mdtotex"));
}

// 行为：有输入文件但无 -o 时退出 0，并输出到 stdout。
#[test]
fn input_without_output_writes_stdout() {
    let dir = tempdir().unwrap();
    let input_path = dir.path().join("input.md");
    fs::write(&input_path, "# Hello\n").unwrap();

    cargo_bin_cmd!("mdtotex")
        .arg(&input_path)
        .assert()
        .success()
        .stdout("\n\\chapter{Hello}\n\n");
}

// 行为：有输入文件并指定 -o 时退出 0，并写出文件存在。
#[test]
fn input_with_output_writes_file() {
    let dir = tempdir().unwrap();
    let input_path = dir.path().join("input.md");
    fs::write(&input_path, "# Hello\n").unwrap();

    let output_path: PathBuf = dir.path().join("out.tex");

    cargo_bin_cmd!("mdtotex")
        .arg("-o")
        .arg(&output_path)
        .arg(&input_path)
        .assert()
        .success();

    assert!(output_path.exists());
}

// 行为：-o 指向已存在目录时写入目录下的 content.tex。
#[test]
fn output_directory_receives_content_tex() {
    let dir = tempdir().unwrap();
    let input_path = dir.path().join("input.md");
    fs::write(&input_path, "Plain text.\n").unwrap();
    let out_dir = dir.path().join("build");
    fs::create_dir(&out_dir).unwrap();

    cargo_bin_cmd!("mdtotex")
        .arg(&input_path)
        .arg("-o")
        .arg(&out_dir)
        .assert()
        .success();

    let written = fs::read_to_string(out_dir.join("content.tex")).unwrap();
    assert_eq!(written, "Plain text.\n\n");
}

// 行为：输入目录时按文件名顺序拼接其中的 .md 文件。
#[test]
fn input_directory_is_concatenated() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("02-body.md"), "Body.\n").unwrap();
    fs::write(dir.path().join("01-title.md"), "# Title\n").unwrap();
    fs::write(dir.path().join("draft.txt"), "ignored\n").unwrap();

    cargo_bin_cmd!("mdtotex")
        .arg(dir.path())
        .assert()
        .success()
        .stdout("\n\\chapter{Title}\n\nBody.\n\n");
}

// 行为：仅指定 -o 但没有输入文件时退出非 0，并输出固定错误原因。
#[test]
fn output_without_input_errors() {
    let dir = tempdir().unwrap();
    let output_path: PathBuf = dir.path().join("out.tex");

    cargo_bin_cmd!("mdtotex")
        .arg("-o")
        .arg(&output_path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("没有输入文件"));
}

// 行为：非 .md 输入与空目录退出非 0。
#[test]
fn bad_inputs_error() {
    let dir = tempdir().unwrap();
    let text = dir.path().join("notes.txt");
    fs::write(&text, "x").unwrap();
    cargo_bin_cmd!("mdtotex").arg(&text).assert().failure();

    let empty = dir.path().join("empty");
    fs::create_dir(&empty).unwrap();
    cargo_bin_cmd!("mdtotex").arg(&empty).assert().failure();

    cargo_bin_cmd!("mdtotex")
        .arg(dir.path().join("missing.md"))
        .assert()
        .failure();
}

// 行为：不支持的语法使转换失败，且不写出任何文件。
#[test]
fn unsupported_construct_writes_nothing() {
    let dir = tempdir().unwrap();
    let input_path = dir.path().join("input.md");
    fs::write(&input_path, "# Fine\n\n~~struck~~\n").unwrap();
    let output_path = dir.path().join("out.tex");

    cargo_bin_cmd!("mdtotex")
        .arg("-o")
        .arg(&output_path)
        .arg(&input_path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Strikethrough is not supported."));

    assert!(!output_path.exists());
}

fn write_temp_config(contents: &str) -> NamedTempFile {
    let config = NamedTempFile::new().unwrap();
    fs::write(config.path(), contents).unwrap();
    config
}

// 行为：未指定 --config 时，选项对象应与默认值完全一致。
#[test]
fn options_without_config_use_default() {
    let options = mdtotex::config::load_options(None::<&std::path::Path>).unwrap();
    assert_eq!(options, mdtotex_core::Options::default());
}

// 行为：合法赋值应只覆盖对应字段，其他字段保持默认值。
#[test]
fn options_accept_valid_assignment() {
    let config = write_temp_config("enable_block_quotes: true\nimage_style: input\n");

    let options = mdtotex::config::load_options(Some(config.path())).unwrap();
    let expected = mdtotex_core::Options {
        enable_block_quotes: true,
        image_style: mdtotex_core::config::ImageStyle::Input,
        ..Default::default()
    };
    assert_eq!(options, expected);
}

// 行为：至少三种非 bool 类型赋值都应触发非法选项错误。
#[test]
fn options_reject_non_bool_values() {
    for invalid in ["123", "\"true\"", "[true]"] {
        let config = write_temp_config(&format!("enable_block_quotes: {invalid}\n"));
        let result = mdtotex::config::load_options(Some(config.path()));
        assert!(
            result.is_err(),
            "non-bool value should be rejected: {invalid}"
        );
    }
}

// 行为：未知字段应触发非法选项错误。
#[test]
fn options_reject_unknown_field() {
    let config = write_temp_config("this_is_definitely_not_a_valid_option: true\n");
    let result = mdtotex::config::load_options(Some(config.path()));
    assert!(result.is_err());
}

// 行为：不存在的配置文件应触发配置文件无效错误。
#[test]
fn options_reject_missing_config_file() {
    let dir = tempdir().unwrap();
    let missing = dir.path().join("missing.yaml");
    let result = mdtotex::config::load_options(Some(missing.as_path()));
    assert!(result.is_err());
}

// 行为：非法 YAML 应触发配置文件无效错误。
#[test]
fn options_reject_invalid_yaml() {
    let config = write_temp_config("enable_block_quotes: [true\n");
    let result = mdtotex::config::load_options(Some(config.path()));
    assert!(result.is_err());
}
