mod register;
pub use register::Register;

mod list;
pub use list::List;
