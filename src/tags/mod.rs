//! Head tag generation: href resolution, the favicon HTML patch and markup rendering.

mod favicon;
mod generation;
mod href;
mod render;

pub use favicon::wrap_ie_favicon;
pub use generation::generate_head_tags;
pub use href::{is_absolute_url, resolve_href, version_suffix};
pub use render::inject_head_tags;
