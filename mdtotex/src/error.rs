// Copyright (c) UnnamedOrange. Licensed under the MIT License.
// See the LICENSE file in the repository root for full license text.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CliError {
    #[error("没有输入文件")]
    NoInput,

    #[error("输入路径不存在：{}", .0.display())]
    InputNotFound(PathBuf),

    #[error("输入文件不是 .md 文件：{}", .0.display())]
    NotMarkdown(PathBuf),

    #[error("目录中没有 .md 文件：{}", .0.display())]
    EmptyDirectory(PathBuf),

    #[error("无法读取 {}：{source}", .path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("无法写入 {}：{source}", .path.display())]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("无法写入标准输出：{0}")]
    Stdout(#[source] std::io::Error),

    #[error("配置文件无效 {}：{source}", .path.display())]
    Config {
        path: PathBuf,
        source: mdtotex_core::Error,
    },

    #[error(transparent)]
    Core(#[from] mdtotex_core::Error),
}

pub type Result<T> = std::result::Result<T, CliError>;
