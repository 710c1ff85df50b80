// Member domain module
// Members are owned by an external registry; the team domain only reads
// their identity and enrollment status.

pub mod value_objects;

pub use value_objects::{MemberId, MemberStatus};
