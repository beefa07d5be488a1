//! Data entering the store from outside.
pub mod translation;
