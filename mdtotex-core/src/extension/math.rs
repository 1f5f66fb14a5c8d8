// Copyright (c) UnnamedOrange. Licensed under the MIT License.
// See the LICENSE file in the repository root for full license text.

use once_cell::sync::Lazy;
use regex::Regex;

use super::{ExtensionToken, InlineExtension, Recognized};

static INLINE_MATH: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\$([^$\n]+)\$").unwrap());

/// `$expr$` where `expr` holds no dollar sign and no newline. The expression is kept verbatim.
pub struct InlineMath;

impl InlineExtension for InlineMath {
    fn name(&self) -> &'static str {
        "math"
    }

    fn start(&self, src: &str) -> Option<usize> {
        src.find('$')
    }

    fn tokenize(&self, src: &str) -> Option<Recognized> {
        let caps = INLINE_MATH.captures(src)?;
        Some(Recognized {
            token: ExtensionToken::Math {
                expression: caps[1].to_string(),
            },
            len: caps[0].len(),
        })
    }
}
