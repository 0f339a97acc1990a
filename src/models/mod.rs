pub mod employee;
pub mod team;

pub use employee::Employee;
pub use team::{Team, TeamNode};
