// Copyright (c) UnnamedOrange. Licensed under the MIT License.
// See the LICENSE file in the repository root for full license text.

use thiserror::Error;

/// Errors produced by the conversion core.
///
/// Rendering has no recoverable category: every [`Error::Unsupported`] aborts the whole
/// conversion and no partial LaTeX is returned.
#[derive(Debug, Error)]
pub enum Error {
    #[error("{message}")]
    Unsupported {
        construct: &'static str,
        message: String,
    },

    #[error("failed to read options: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid options: {0}")]
    Config(#[from] serde_yaml::Error),
}

impl Error {
    pub(crate) fn unsupported(construct: &'static str, message: impl Into<String>) -> Self {
        Self::Unsupported {
            construct,
            message: message.into(),
        }
    }

    /// Name of the rejected Markdown construct, if this is an unsupported-construct error.
    pub fn unsupported_construct(&self) -> Option<&'static str> {
        match self {
            Self::Unsupported { construct, .. } => Some(construct),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::Error;

    // 行为：不支持的语法报错时，信息原样输出且可取回语法名称。
    #[test]
    fn unsupported_keeps_message_and_construct() {
        let err = Error::unsupported("code-block", "Code blocks are not supported.");
        assert_eq!(err.to_string(), "Code blocks are not supported.");
        assert_eq!(err.unsupported_construct(), Some("code-block"));
    }

    // 行为：I/O 错误不是不支持语法错误。
    #[test]
    fn io_error_has_no_construct() {
        let err = Error::from(std::io::Error::other("boom"));
        assert_eq!(err.unsupported_construct(), None);
    }
}
