//! Declarative SEO blog prompt for seoprompt.
//!
//! This crate renders the fixed Korean SEO blog-writing prompt from four
//! inputs. Rendering is pure string interpolation and cannot fail.
//!
//! # Example
//!
//! ```rust
//! use seoprompt_core::{FormInput, PromptRequest};
//! use seoprompt_prompt::{PromptRenderer, SeoPromptRenderer};
//!
//! let form = FormInput::new("원문", "독자", "", "어조");
//! let request = PromptRequest::from_form(&form).unwrap();
//!
//! let rendered = SeoPromptRenderer.render(&request);
//! assert!(rendered.as_str().contains("추천해줘"));
//! ```

mod seo_blog;
pub mod templates;
mod traits;

pub use seo_blog::{render_seo_prompt, SeoBlogPrompt, SeoPromptRenderer};
pub use traits::{Prompt, PromptRenderer};
