mod app;

pub use app::BirthdayClockApp;
