mod register;
pub use register::RegisterView;

mod member_home;
pub use member_home::MemberHomeView;
