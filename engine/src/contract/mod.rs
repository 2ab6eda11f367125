//! Response contract: exam policy hooks, error taxonomy, explainability and
//! the flat packet every answer is shipped as.
//!
//! Nothing in here knows any chemistry. It only reshapes what the solvers
//! and the governor already decided.

mod explain;
mod legacy;
mod packet;
mod policy;
mod render;
mod taxonomy;

pub use explain::build_bundle;
pub use legacy::LegacyOutput;
pub use packet::{PACKET_VERSION, ResponsePacket, build_packet};
pub use policy::{clamp_assumptions, exam_tags};
pub use render::{ExplanationV1, render_explanation};
pub use taxonomy::{flag_category, infer_from_attempt, map_flags, summarize};
