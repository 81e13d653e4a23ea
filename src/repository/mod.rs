pub mod inactive;
