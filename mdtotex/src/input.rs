// Copyright (c) UnnamedOrange. Licensed under the MIT License.
// See the LICENSE file in the repository root for full license text.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{CliError, Result};

fn is_markdown(path: &Path) -> bool {
    path.extension().is_some_and(|ext| ext == "md")
}

/// Expands one input argument into the Markdown files it names.
pub fn collect_markdown_files(path: &Path) -> Result<Vec<PathBuf>> {
    if !path.exists() {
        return Err(CliError::InputNotFound(path.to_path_buf()));
    }

    if !path.is_dir() {
        if !is_markdown(path) {
            return Err(CliError::NotMarkdown(path.to_path_buf()));
        }
        return Ok(vec![path.to_path_buf()]);
    }

    let entries = path.read_dir().map_err(|source| CliError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let mut files = entries
        .filter_map(std::result::Result::ok)
        .map(|entry| entry.path())
        .filter(|p| p.is_file() && is_markdown(p))
        .collect::<Vec<_>>();
    files.sort();

    if files.is_empty() {
        return Err(CliError::EmptyDirectory(path.to_path_buf()));
    }
    Ok(files)
}

/// Reads every input in argument order and joins the documents with a newline.
pub fn read_inputs(inputs: &[PathBuf]) -> Result<String> {
    if inputs.is_empty() {
        return Err(CliError::NoInput);
    }

    let mut contents = Vec::new();
    for input in inputs {
        for file in collect_markdown_files(input)? {
            tracing::debug!(file = %file.display(), "reading markdown");
            let content = fs::read_to_string(&file).map_err(|source| CliError::Read {
                path: file.clone(),
                source,
            })?;
            contents.push(content);
        }
    }
    Ok(contents.join("\n"))
}

#[cfg(test)]
mod tests {
    use super::*;

    use tempfile::tempdir;

    // 行为：目录中的 .md 文件按文件名排序，其它文件被忽略。
    #[test]
    fn directory_files_sorted_and_filtered() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("b.md"), "B").unwrap();
        fs::write(dir.path().join("a.md"), "A").unwrap();
        fs::write(dir.path().join("notes.txt"), "x").unwrap();

        let files = collect_markdown_files(dir.path()).unwrap();
        assert_eq!(files, vec![dir.path().join("a.md"), dir.path().join("b.md")]);
        assert_eq!(read_inputs(&[dir.path().to_path_buf()]).unwrap(), "A\nB");
    }

    // 行为：不存在的路径、非 .md 文件、空目录分别报错。
    #[test]
    fn rejects_bad_inputs() {
        let dir = tempdir().unwrap();
        let missing = dir.path().join("missing.md");
        assert!(matches!(
            collect_markdown_files(&missing),
            Err(CliError::InputNotFound(_))
        ));

        let text = dir.path().join("notes.txt");
        fs::write(&text, "x").unwrap();
        assert!(matches!(
            collect_markdown_files(&text),
            Err(CliError::NotMarkdown(_))
        ));

        let empty = dir.path().join("empty");
        fs::create_dir(&empty).unwrap();
        assert!(matches!(
            collect_markdown_files(&empty),
            Err(CliError::EmptyDirectory(_))
        ));
    }

    // 行为：没有输入时报固定错误。
    #[test]
    fn no_inputs() {
        assert!(matches!(read_inputs(&[]), Err(CliError::NoInput)));
    }
}
