mod user;
mod worklog;

pub use user::UserRef;
pub use worklog::{Worklog, WorklogCreateRequest, WorklogPage};
