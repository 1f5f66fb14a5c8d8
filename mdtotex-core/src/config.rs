// Copyright (c) UnnamedOrange. Licensed under the MIT License.
// See the LICENSE file in the repository root for full license text.

use std::path::Path;

use serde::Deserialize;

#[derive(Default, Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Options {
    pub citation_style: CitationStyle,
    pub image_style: ImageStyle,
    pub math_delimiters: MathDelimiters,
    pub code_block_style: CodeBlockStyle,
    pub enable_block_quotes: bool,
    pub force_figure_strict_here: bool,
}

/// Which citation syntax the scanner recognizes. Only one is active per conversion.
#[derive(Default, Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CitationStyle {
    /// `^[Author, page]`
    #[default]
    Caret,
    /// `@key [pinpoint]` and `[@key1, page; @key2]`
    AuthorKey,
}

#[derive(Default, Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ImageStyle {
    /// A `figure` environment with caption and label.
    #[default]
    Figure,
    /// `\input{alt}`: the alt text names a LaTeX file to include.
    Input,
}

#[derive(Default, Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MathDelimiters {
    #[default]
    Dollars,
    Bare,
}

#[derive(Default, Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CodeBlockStyle {
    /// Only `mdtotex` blocks are accepted; they pass through verbatim.
    #[default]
    RawOnly,
    /// Every other block becomes a framed, numbered `minted` listing.
    Listing,
}

pub fn load_options_from_yaml_file(path: &Path) -> crate::Result<Options> {
    let content = std::fs::read_to_string(path)?;
    let options = serde_yaml::from_str::<Options>(&content)?;
    Ok(options)
}

#[cfg(test)]
mod tests {
    use super::*;

    // 行为：空文档得到默认选项。
    #[test]
    fn empty_yaml_is_default() {
        let options = serde_yaml::from_str::<Options>("{}").unwrap();
        assert_eq!(options, Options::default());
    }

    // 行为：枚举选项使用 snake_case 名称。
    #[test]
    fn enum_fields_use_snake_case() {
        let options = serde_yaml::from_str::<Options>(
            "citation_style: author_key\nimage_style: input\nmath_delimiters: bare\ncode_block_style: listing\n",
        )
        .unwrap();
        assert_eq!(options.citation_style, CitationStyle::AuthorKey);
        assert_eq!(options.image_style, ImageStyle::Input);
        assert_eq!(options.math_delimiters, MathDelimiters::Bare);
        assert_eq!(options.code_block_style, CodeBlockStyle::Listing);
        assert!(!options.enable_block_quotes);
    }

    // 行为：未知的枚举取值被拒绝。
    #[test]
    fn unknown_variant_is_rejected() {
        assert!(serde_yaml::from_str::<Options>("citation_style: footnote\n").is_err());
    }
}
