pub mod breakpoints;
pub mod css_length;
pub mod limit_policy;
pub mod types;
pub mod viewport;

pub use breakpoints::{BreakpointTable, ConfigurationProfile, FALLBACK_BREAKPOINT_PX};
pub use css_length::{LoadLimit, parse_px_length};
pub use limit_policy::{
    LimitOutcome, apply_shift_limit, canonical_offset, last_aligned_index, paging_indices,
    resolve_jump_target,
};
pub use types::{ElementSelectors, ItemBox, ShiftDirection};
pub use viewport::{StaticViewport, ViewportProvider};
