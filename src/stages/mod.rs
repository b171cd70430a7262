pub mod stage1_submit;
pub mod stage2_poll;
pub mod stage3_write;

pub use stage1_submit::*;
pub use stage2_poll::*;
pub use stage3_write::*;
