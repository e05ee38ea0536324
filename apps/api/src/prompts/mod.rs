// Prompt assembly core: style catalogs, conflict rules, and the two
// directive builders (standard and viral). Pure string work over const
// tables — no I/O, no failure modes. The generation module is the only
// runtime consumer; everything else reads these tables as data.

pub mod assembler;
pub mod catalog;
pub mod style_guide;
pub mod viral;

pub use assembler::{build_system_prompt, BrandVoiceProfile, StyleSelection};
pub use viral::EngagementGoal;
