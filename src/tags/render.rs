//! Markup rendering for generated head tags.

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;

use crate::models::TagDescriptor;

static HEAD_CLOSE: LazyLock<Regex> =
  LazyLock::new(|| Regex::new(r"(?i)</head>").expect("invalid head regex"));

impl TagDescriptor {
  /// Render the tag as HTML, attributes in insertion order.
  pub fn to_html(&self) -> String {
    self.to_string()
  }
}

impl fmt::Display for TagDescriptor {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "<{}", self.tag_name)?;
    for (name, value) in &self.attributes {
      write!(
        f,
        " {}=\"{}\"",
        name,
        html_escape::encode_double_quoted_attribute(value)
      )?;
    }
    if self.is_void_element {
      write!(f, ">")
    } else {
      write!(f, "></{}>", self.tag_name)
    }
  }
}

/// Insert rendered `tags` right before the first `</head>`, one per line.
///
/// Returns `None` when the HTML has no closing head tag.
pub fn inject_head_tags(html: &str, tags: &[TagDescriptor]) -> Option<String> {
  let head_close = HEAD_CLOSE.find(html)?;

  let mut output = String::with_capacity(html.len() + tags.len() * 96);
  output.push_str(&html[..head_close.start()]);
  for tag in tags {
    output.push_str(&tag.to_html());
    output.push('\n');
  }
  output.push_str(&html[head_close.start()..]);
  Some(output)
}
