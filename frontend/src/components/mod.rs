pub mod cards;
pub mod empty_state;
pub mod error;
pub mod layout;
