// Service module exports

pub mod celebration;
pub mod clock;
pub mod countdown;
pub mod notification;
pub mod registry;
pub mod settings;
pub mod ticker;
pub mod widget;
