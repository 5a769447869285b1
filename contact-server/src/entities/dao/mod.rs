pub mod contact;

pub use contact::NewContactMessage;
